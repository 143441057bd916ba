#![forbid(unsafe_code)]

//! The dialog controller.
//!
//! [`DialogController`] owns a dialog's content (title, message, actions,
//! text fields), its computed layout, and its transition state, and turns
//! host input (button taps, overlay taps, return keys, keyboard and
//! rotation events) into layout updates and animation specs. The host owns
//! the views, the clock, and the event loop.
//!
//! Indices are 0-based throughout: `tap_button(i)` fires `actions[i]` in
//! add order, independent of where layout placed its button.
//!
//! # Invariants
//!
//! - At most one Cancel action; violating this is a programmer error and
//!   panics in [`DialogController::add_action`].
//! - Text fields exist only on alerts; [`DialogController::add_text_field`]
//!   panics on an action sheet.
//! - `buttons[i]` mirrors `actions[i]`: whenever an action's enabled flag
//!   changes, every button's interactivity is resynced in index order.
//! - Tapping a button invokes its handler at most once and always starts a
//!   dismiss, even when no handler is attached.
//!
//! # Failure Modes
//!
//! Out-of-range button taps and overlay taps on dialogs without a Cancel
//! action are host errors, not programmer errors; they are logged and
//! ignored rather than panicking.

use scrim_core::{HostEvent, Rect, TextMeasurer, Viewport};
use scrim_style::{ActionStyle, Theme};
use smallvec::SmallVec;
use tracing::{debug, warn};
use web_time::Duration;

use crate::action::Action;
use crate::field::TextField;
use crate::layout::{self, DialogContent, LayoutResult};
use crate::transition::{AnimationSpec, PhaseOutcome, TransitionController, TransitionPhase};
use crate::DialogVariant;

/// Duration over which the host animates a frame change caused by a
/// keyboard or orientation event.
pub const REFLOW_DURATION: Duration = Duration::from_millis(250);

/// Per-button presentation state, kept in action order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ButtonState {
    /// Mirrors the action's enabled flag.
    pub interactive: bool,
    /// Set when the button was tapped; the host renders the highlighted
    /// background until the dismiss completes.
    pub highlighted: bool,
}

/// What pressing the return key in a text field led to.
#[derive(Debug)]
pub enum ReturnKeyOutcome {
    /// Focus moved to the field at this index.
    FocusedNext(usize),
    /// The last field submitted; the dialog is dismissing. The spec is
    /// `None` when the dismiss was queued or the dialog was not presented.
    Dismissing(Option<AnimationSpec>),
}

/// A modal dialog: content, layout, and transition under one handle.
#[derive(Debug)]
pub struct DialogController {
    variant: DialogVariant,
    title: Option<String>,
    message: Option<String>,
    /// Colors and fonts used for layout and rendering. Adjust before the
    /// first present; the title and message fonts feed text measurement.
    pub theme: Theme,
    actions: Vec<Action>,
    buttons: Vec<ButtonState>,
    text_fields: Option<Vec<TextField>>,
    focused_field: Option<usize>,
    layout: Option<LayoutResult>,
    viewport: Viewport,
    transition: TransitionController,
}

impl DialogController {
    #[must_use]
    pub fn new(title: Option<&str>, message: Option<&str>, variant: DialogVariant) -> Self {
        Self {
            variant,
            title: title.map(str::to_owned),
            message: message.map(str::to_owned),
            theme: Theme::default(),
            actions: Vec::new(),
            buttons: Vec::new(),
            text_fields: None,
            focused_field: None,
            layout: None,
            viewport: Viewport::default(),
            transition: TransitionController::new(variant),
        }
    }

    #[must_use]
    pub const fn variant(&self) -> DialogVariant {
        self.variant
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    #[must_use]
    pub fn buttons(&self) -> &[ButtonState] {
        &self.buttons
    }

    #[must_use]
    pub fn text_fields(&self) -> &[TextField] {
        self.text_fields.as_deref().unwrap_or_default()
    }

    #[must_use]
    pub fn text_field_mut(&mut self, index: usize) -> Option<&mut TextField> {
        self.text_fields.as_mut()?.get_mut(index)
    }

    #[must_use]
    pub const fn focused_field(&self) -> Option<usize> {
        self.focused_field
    }

    #[must_use]
    pub fn layout(&self) -> Option<&LayoutResult> {
        self.layout.as_ref()
    }

    #[must_use]
    pub const fn phase(&self) -> TransitionPhase {
        self.transition.phase()
    }

    /// False once any transition phase was reported unfinished.
    #[must_use]
    pub const fn finished_cleanly(&self) -> bool {
        self.transition.finished_cleanly()
    }

    /// Append an action; its button is created alongside it.
    ///
    /// # Panics
    ///
    /// Panics when `action` has the Cancel style and the dialog already
    /// holds a Cancel action.
    pub fn add_action(&mut self, action: Action) {
        if action.style() == ActionStyle::Cancel
            && self.actions.iter().any(|a| a.style() == ActionStyle::Cancel)
        {
            panic!("a dialog can only have one action with a style of Cancel");
        }
        debug!(label = action.label(), style = ?action.style(), "action added");
        self.buttons.push(ButtonState {
            interactive: action.is_enabled(),
            highlighted: false,
        });
        self.actions.push(action);
    }

    /// Append a text field, configured by the closure before it is stored.
    ///
    /// # Panics
    ///
    /// Panics on an action sheet; text fields exist only on alerts.
    pub fn add_text_field(&mut self, configure: impl FnOnce(&mut TextField)) {
        assert!(
            self.variant.is_alert(),
            "text fields can only be added to a dialog of variant Alert"
        );
        let mut field = TextField::new();
        configure(&mut field);
        self.text_fields.get_or_insert_with(Vec::new).push(field);
    }

    /// Move keyboard focus to the field at `index`; out-of-range is ignored.
    pub fn focus_field(&mut self, index: usize) {
        if index < self.text_fields().len() {
            self.focused_field = Some(index);
        }
    }

    /// Enable or disable `actions[index]`, resyncing every button.
    ///
    /// # Panics
    ///
    /// Panics when `index` is out of range.
    pub fn set_action_enabled(&mut self, index: usize, enabled: bool) {
        self.actions[index].set_enabled(enabled);
        self.sync_buttons();
    }

    fn sync_buttons(&mut self) {
        for (button, action) in self.buttons.iter_mut().zip(&self.actions) {
            button.interactive = action.is_enabled();
        }
    }

    /// Compute the layout if this dialog has none yet.
    ///
    /// Content is measured exactly once; later viewport changes go through
    /// [`DialogController::relayout`], which re-places the panel without
    /// re-measuring.
    pub fn layout_once(&mut self, viewport: Viewport, measurer: &dyn TextMeasurer) -> &LayoutResult {
        self.viewport = viewport;
        if self.layout.is_none() {
            let styles: SmallVec<[ActionStyle; 4]> =
                self.actions.iter().map(Action::style).collect();
            let content = DialogContent {
                variant: self.variant,
                title: self.title.as_deref(),
                message: self.message.as_deref(),
                title_font: self.theme.title_font,
                message_font: self.theme.message_font,
                field_count: self.text_fields().len(),
                action_styles: &styles,
            };
            self.layout = Some(layout::compute(&content, viewport, measurer));
        }
        match self.layout.as_ref() {
            Some(layout) => layout,
            // filled in above
            None => unreachable!(),
        }
    }

    /// Re-place the panel against a changed viewport. Returns the new panel
    /// frame, or `None` when no layout exists yet.
    pub fn relayout(&mut self, viewport: Viewport) -> Option<Rect> {
        self.viewport = viewport;
        let layout = self.layout.as_mut()?;
        layout.reclamp(viewport);
        Some(layout.frame)
    }

    /// Apply a keyboard or rotation event. Returns the new panel frame for
    /// the host to animate over [`REFLOW_DURATION`], or `None` when the
    /// dialog has no layout yet.
    pub fn handle_event(&mut self, event: HostEvent) -> Option<Rect> {
        let mut viewport = self.viewport;
        match event {
            HostEvent::KeyboardWillShow { height } => viewport.keyboard_height = height,
            HostEvent::KeyboardWillHide => viewport.keyboard_height = 0.0,
            HostEvent::OrientationChanged { size } => viewport.size = size,
        }
        debug!(?event, "host event");
        self.relayout(viewport)
    }

    /// Present the dialog. Lays it out on first call, then starts the
    /// transition; returns the first animation leg, or `None` when the
    /// dialog was already presented or dismissed.
    pub fn present(
        &mut self,
        viewport: Viewport,
        measurer: &dyn TextMeasurer,
    ) -> Option<AnimationSpec> {
        let frame = self.layout_once(viewport, measurer).frame;
        self.transition.begin_present(frame)
    }

    /// Dismiss the dialog. Returns the dismiss leg, or `None` when the
    /// dismiss was queued mid-presentation or the dialog is not presented.
    pub fn dismiss(&mut self) -> Option<AnimationSpec> {
        let frame = self.layout.as_ref()?.frame;
        self.transition.begin_dismiss(frame)
    }

    /// Report that the current transition leg's animation ended.
    pub fn complete_phase(&mut self, finished: bool) -> Option<PhaseOutcome> {
        let frame = self.layout.as_ref()?.frame;
        self.transition.complete_phase(finished, frame)
    }

    /// Tap the button of `actions[index]`.
    ///
    /// Highlights the button, invokes the action's handler (if any) exactly
    /// once, and starts a dismiss. Disabled buttons and out-of-range
    /// indices are ignored.
    pub fn tap_button(&mut self, index: usize) -> Option<AnimationSpec> {
        let Some(button) = self.buttons.get_mut(index) else {
            warn!(index, "tap for unknown button ignored");
            return None;
        };
        if !button.interactive {
            debug!(index, "tap on disabled button ignored");
            return None;
        }
        button.highlighted = true;
        let action = self.actions[index].clone();
        debug!(index, label = action.label(), "button tapped");
        action.invoke();
        self.dismiss()
    }

    /// Tap on the overlay outside the panel.
    ///
    /// On an action sheet with a Cancel action this behaves exactly like
    /// tapping the Cancel button; everywhere else it is ignored.
    pub fn tap_outside(&mut self) -> Option<AnimationSpec> {
        if self.variant.is_alert() {
            return None;
        }
        let cancel = self
            .actions
            .iter()
            .position(|a| a.style() == ActionStyle::Cancel)?;
        debug!(index = cancel, "overlay tap routed to Cancel");
        self.tap_button(cancel)
    }

    /// Return key pressed in the field at `index`: focus the next field, or
    /// dismiss the dialog when `index` is the last field.
    pub fn field_return(&mut self, index: usize) -> ReturnKeyOutcome {
        let count = self.text_fields().len();
        if index + 1 < count {
            self.focused_field = Some(index + 1);
            ReturnKeyOutcome::FocusedNext(index + 1)
        } else {
            self.focused_field = None;
            ReturnKeyOutcome::Dismissing(self.dismiss())
        }
    }
}
