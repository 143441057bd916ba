#![forbid(unsafe_code)]

//! Dialog theme and the per-action-style table.
//!
//! Button styling is keyed by [`ActionStyle`], a closed three-variant enum.
//! The table is a fixed array indexed through an exhaustive match, so adding
//! a style variant is a compile error until every table handles it.

use scrim_core::font::Font;

use crate::color::Rgba;

/// Visual style of a dialog action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionStyle {
    /// Ordinary choice.
    #[default]
    Default,
    /// Dismissive/neutral choice; at most one per dialog, rendered last.
    Cancel,
    /// Dangerous choice.
    Destructive,
}

impl ActionStyle {
    const fn index(self) -> usize {
        match self {
            Self::Default => 0,
            Self::Cancel => 1,
            Self::Destructive => 2,
        }
    }
}

/// Styling for one action style: font plus text/background colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionStyleSlot {
    pub font: Font,
    pub text_color: Rgba,
    pub background: Rgba,
    pub background_highlighted: Rgba,
}

/// Per-style button styling table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionStyleSheet {
    slots: [ActionStyleSlot; 3],
}

impl ActionStyleSheet {
    #[must_use]
    pub fn slot(&self, style: ActionStyle) -> &ActionStyleSlot {
        &self.slots[style.index()]
    }

    pub fn slot_mut(&mut self, style: ActionStyle) -> &mut ActionStyleSlot {
        &mut self.slots[style.index()]
    }
}

impl Default for ActionStyleSheet {
    fn default() -> Self {
        let font = Font::bold(16.0);
        let white = Rgba::rgb(255, 255, 255);
        Self {
            slots: [
                ActionStyleSlot {
                    font,
                    text_color: white,
                    background: Rgba::rgb(52, 152, 219),
                    background_highlighted: Rgba::rgb(74, 163, 223),
                },
                ActionStyleSlot {
                    font,
                    text_color: white,
                    background: Rgba::rgb(127, 140, 141),
                    background_highlighted: Rgba::rgb(140, 152, 153),
                },
                ActionStyleSlot {
                    font,
                    text_color: white,
                    background: Rgba::rgb(231, 76, 60),
                    background_highlighted: Rgba::rgb(234, 97, 83),
                },
            ],
        }
    }
}

/// Whole-dialog theming, assigned before presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Full-screen overlay behind the dialog.
    pub overlay_color: Rgba,
    /// Dialog panel background.
    pub background: Rgba,
    pub title_font: Font,
    pub title_color: Rgba,
    pub message_font: Font,
    pub message_color: Rgba,
    pub text_field_background: Rgba,
    pub text_field_border: Rgba,
    /// Corner radius of alert buttons.
    pub alert_button_corner_radius: f32,
    /// Corner radius of action-sheet buttons.
    pub sheet_button_corner_radius: f32,
    /// Corner radius of the text-field container.
    pub text_field_corner_radius: f32,
    pub buttons: ActionStyleSheet,
}

impl Default for Theme {
    fn default() -> Self {
        let ink = Rgba::rgb(77, 77, 77);
        Self {
            overlay_color: Rgba::rgb(0, 0, 0).with_opacity(0.5),
            background: Rgba::rgb(239, 240, 242),
            title_font: Font::bold(18.0),
            title_color: ink,
            message_font: Font::regular(15.0),
            message_color: ink,
            text_field_background: Rgba::rgb(255, 255, 255),
            text_field_border: Rgba::rgb(203, 203, 203),
            alert_button_corner_radius: 4.0,
            sheet_button_corner_radius: 6.0,
            text_field_corner_radius: 4.0,
            buttons: ActionStyleSheet::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_palette_per_style() {
        let sheet = ActionStyleSheet::default();
        assert_eq!(
            sheet.slot(ActionStyle::Default).background,
            Rgba::rgb(52, 152, 219)
        );
        assert_eq!(
            sheet.slot(ActionStyle::Cancel).background,
            Rgba::rgb(127, 140, 141)
        );
        assert_eq!(
            sheet.slot(ActionStyle::Destructive).background,
            Rgba::rgb(231, 76, 60)
        );
    }

    #[test]
    fn slot_mut_edits_one_style() {
        let mut sheet = ActionStyleSheet::default();
        sheet.slot_mut(ActionStyle::Destructive).text_color = Rgba::rgb(0, 0, 0);
        assert_eq!(
            sheet.slot(ActionStyle::Destructive).text_color,
            Rgba::rgb(0, 0, 0)
        );
        assert_eq!(
            sheet.slot(ActionStyle::Default).text_color,
            Rgba::rgb(255, 255, 255)
        );
    }

    #[test]
    fn default_overlay_is_half_black() {
        let theme = Theme::default();
        assert_eq!(theme.overlay_color.a(), 128);
        assert_eq!(theme.title_font, Font::bold(18.0));
    }
}
