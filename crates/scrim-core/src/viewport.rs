#![forbid(unsafe_code)]

//! The viewport a dialog is laid out against.
//!
//! A `Viewport` is the screen size plus the soft-keyboard inset. The height
//! available to a dialog is always `size.height - keyboard_height`; layout
//! never positions content underneath the keyboard.

use crate::geometry::Size;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub size: Size,
    /// Height of the soft keyboard, 0 when hidden.
    pub keyboard_height: f32,
}

impl Viewport {
    #[must_use]
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            keyboard_height: 0.0,
        }
    }

    /// Same viewport with a keyboard inset applied.
    #[must_use]
    pub const fn with_keyboard(mut self, height: f32) -> Self {
        self.keyboard_height = height;
        self
    }

    /// Vertical space a dialog may occupy.
    #[must_use]
    pub fn available_height(&self) -> f32 {
        (self.size.height - self.keyboard_height).max(0.0)
    }

    #[must_use]
    pub fn is_landscape(&self) -> bool {
        self.size.width > self.size.height
    }

    /// Viewport after an orientation flip, keyboard inset preserved.
    #[must_use]
    pub const fn rotated(self) -> Self {
        Self {
            size: self.size.transposed(),
            keyboard_height: self.keyboard_height,
        }
    }
}
