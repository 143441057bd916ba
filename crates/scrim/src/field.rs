#![forbid(unsafe_code)]

//! Text field model for alert dialogs.

/// One editable text field hosted inside an alert.
///
/// The engine lays fields out and tracks focus order; the host renders them
/// and writes edits back through [`TextField::set_text`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    placeholder: Option<String>,
    text: String,
    secure: bool,
}

impl TextField {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = Some(placeholder.into());
    }

    #[must_use]
    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Mark the field as a password entry; the host masks its glyphs.
    pub fn set_secure(&mut self, secure: bool) {
        self.secure = secure;
    }

    #[must_use]
    pub const fn is_secure(&self) -> bool {
        self.secure
    }
}
