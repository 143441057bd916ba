#![forbid(unsafe_code)]

//! Dialog actions.
//!
//! An [`Action`] is one choice offered by a dialog: a label, a visual style,
//! an enabled flag, and an optional callback fired when the matching button
//! is tapped. Actions are value objects; the controller owns them and keeps
//! each button's interactivity in sync with the action's enabled flag.

use std::fmt;
use std::rc::Rc;

use scrim_style::ActionStyle;

/// Callback invoked when an action's button is tapped.
pub type ActionHandler = Rc<dyn Fn(&Action)>;

/// One selectable choice in a dialog.
#[derive(Clone)]
pub struct Action {
    label: String,
    style: ActionStyle,
    enabled: bool,
    handler: Option<ActionHandler>,
}

impl Action {
    /// A new enabled action with no callback.
    pub fn new(label: impl Into<String>, style: ActionStyle) -> Self {
        Self {
            label: label.into(),
            style,
            enabled: true,
            handler: None,
        }
    }

    /// Attach the callback fired when this action's button is tapped.
    #[must_use]
    pub fn on_invoke(mut self, handler: impl Fn(&Action) + 'static) -> Self {
        self.handler = Some(Rc::new(handler));
        self
    }

    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub const fn style(&self) -> ActionStyle {
        self.style
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Run the attached callback, if any, passing this action to it.
    pub fn invoke(&self) {
        if let Some(handler) = &self.handler {
            handler(self);
        }
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("label", &self.label)
            .field("style", &self.style)
            .field("enabled", &self.enabled)
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn new_action_is_enabled_without_handler() {
        let action = Action::new("OK", ActionStyle::Default);
        assert_eq!(action.label(), "OK");
        assert_eq!(action.style(), ActionStyle::Default);
        assert!(action.is_enabled());
        action.invoke(); // no handler, no effect
    }

    #[test]
    fn invoke_runs_handler_with_the_action() {
        let calls = Rc::new(Cell::new(0u32));
        let seen = Rc::new(Cell::new(false));
        let action = Action::new("Delete", ActionStyle::Destructive).on_invoke({
            let calls = Rc::clone(&calls);
            let seen = Rc::clone(&seen);
            move |a| {
                calls.set(calls.get() + 1);
                seen.set(a.label() == "Delete");
            }
        });
        action.invoke();
        assert_eq!(calls.get(), 1);
        assert!(seen.get());
    }

    #[test]
    fn set_enabled_toggles_flag() {
        let mut action = Action::new("Save", ActionStyle::Default);
        action.set_enabled(false);
        assert!(!action.is_enabled());
        action.set_enabled(true);
        assert!(action.is_enabled());
    }
}
