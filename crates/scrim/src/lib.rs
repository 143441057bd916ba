#![forbid(unsafe_code)]

//! Alert and action-sheet dialog engine.
//!
//! Scrim computes everything a modal dialog needs except pixels: the layout
//! of title, message, text fields, and buttons against a viewport, the
//! present/dismiss transition as a small state machine, and button-tap
//! dispatch to action callbacks. The host owns the view tree and the clock;
//! it applies the frames and animation specs this crate hands back.
//!
//! # Example
//!
//! ```
//! use scrim::{Action, DialogController, DialogVariant};
//! use scrim_core::{Viewport, WordWrapMeasurer};
//! use scrim_style::ActionStyle;
//!
//! let mut dialog = DialogController::new(Some("Delete file?"), Some("This cannot be undone."), DialogVariant::Alert);
//! dialog.add_action(Action::new("Delete", ActionStyle::Destructive));
//! dialog.add_action(Action::new("Cancel", ActionStyle::Cancel));
//!
//! let viewport = Viewport::new(320.0, 568.0);
//! let spec = dialog.present(viewport, &WordWrapMeasurer::default());
//! assert!(spec.is_some());
//! ```

pub mod action;
pub mod dialog;
pub mod field;
pub mod layout;
pub mod transition;

pub use action::{Action, ActionHandler};
pub use dialog::{ButtonState, DialogController, ReturnKeyOutcome};
pub use field::TextField;
pub use layout::{ButtonSlot, DialogContent, LayoutResult};
pub use transition::{
    ActiveAnimation, AnimationSpec, PhaseOutcome, TransitionController, TransitionFrame,
    TransitionPhase,
};

/// Presentation variant of a dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DialogVariant {
    /// Centered, fixed-width panel for short prompts; may carry text fields.
    Alert,
    /// Full-width panel anchored to the bottom edge; list of choices.
    ActionSheet,
}

impl DialogVariant {
    #[must_use]
    pub const fn is_alert(self) -> bool {
        matches!(self, Self::Alert)
    }
}
