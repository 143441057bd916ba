#![forbid(unsafe_code)]

//! Color, font, and theming primitives for Scrim dialogs.

pub mod color;
pub mod theme;

pub use color::Rgba;
pub use scrim_core::font::{Font, FontWeight};
pub use theme::{ActionStyle, ActionStyleSheet, ActionStyleSlot, Theme};
