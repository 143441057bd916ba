#![forbid(unsafe_code)]

//! Core primitives for Scrim dialogs.
//!
//! Everything here is host-agnostic: geometry is expressed in typographic
//! points (`f32`), and the only seam to the outside world is the
//! [`text::TextMeasurer`] trait plus the [`event::HostEvent`] enum the host
//! feeds back into a dialog controller.

pub mod event;
pub mod font;
pub mod geometry;
pub mod text;
pub mod viewport;

pub use event::HostEvent;
pub use font::{Font, FontWeight};
pub use geometry::{Point, Rect, Size};
pub use text::{TextMeasurer, WordWrapMeasurer};
pub use viewport::Viewport;
