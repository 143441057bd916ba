#![forbid(unsafe_code)]

//! Dialog layout.
//!
//! [`compute`] turns a dialog's content into frames: a text area (title,
//! message, text fields) stacked above a button area, the whole clamped to
//! the keyboard-reduced viewport and placed per variant. Alerts are a fixed
//! 270-point panel centered both ways; action sheets span the viewport width
//! and sit on the bottom edge with a bounce allowance hanging below it.
//!
//! All element rects are local to the dialog's content column: add
//! [`LayoutResult::content_x`] and the dialog frame origin to reach host
//! coordinates. That keeps the rects valid across [`LayoutResult::reclamp`],
//! which only re-places the panel.
//!
//! # Invariants
//!
//! - Output depends only on the inputs; equal inputs give equal frames.
//! - `text_viewport_height + button_viewport_height` never exceeds the
//!   viewport's available height.
//! - A Cancel action's button is laid out last regardless of add order;
//!   slots carry the action's original index so dispatch is unaffected.

use scrim_core::{Rect, TextMeasurer, Viewport};
use scrim_style::{ActionStyle, Font};
use smallvec::SmallVec;
use tracing::trace;

use crate::DialogVariant;

/// Fixed outer width of an alert panel.
pub const ALERT_WIDTH: f32 = 270.0;
/// Horizontal and vertical padding inside an alert panel.
pub const ALERT_PADDING: f32 = 15.0;
/// Gap between alert buttons and around the button area.
pub const ALERT_BUTTON_MARGIN: f32 = 10.0;
/// Padding inside an action-sheet panel; the top inset is doubled.
pub const SHEET_PADDING: f32 = 8.0;
/// Gap between action-sheet buttons and around the button area.
pub const SHEET_BUTTON_MARGIN: f32 = 8.0;
/// Extra height below an action sheet's resting position, consumed by the
/// presentation overshoot so the viewport edge is never exposed.
pub const SHEET_BOUNCE: f32 = 20.0;
/// Height of every button row.
pub const BUTTON_HEIGHT: f32 = 44.0;
/// Height of one text field row.
pub const TEXT_FIELD_HEIGHT: f32 = 30.0;
/// Hairline between stacked text fields.
pub const TEXT_FIELD_SEPARATOR: f32 = 0.5;
/// Vertical gap after the title, the message, and around the field block.
pub const TEXT_GAP: f32 = 5.0;

/// Everything [`compute`] needs to know about a dialog.
#[derive(Debug, Clone, Copy)]
pub struct DialogContent<'a> {
    pub variant: DialogVariant,
    pub title: Option<&'a str>,
    pub message: Option<&'a str>,
    pub title_font: Font,
    pub message_font: Font,
    pub field_count: usize,
    pub action_styles: &'a [ActionStyle],
}

/// One laid-out button: its frame plus the index of the action it fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ButtonSlot {
    pub action_index: usize,
    pub frame: Rect,
}

/// The computed layout of a dialog against a viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    variant: DialogVariant,
    inner_width: f32,
    /// Panel frame in host coordinates.
    pub frame: Rect,
    /// Title rect, local to the content column.
    pub title: Option<Rect>,
    /// Message rect, local to the content column.
    pub message: Option<Rect>,
    /// Bounding rect of the text-field block, local to the content column.
    pub field_block: Option<Rect>,
    /// One rect per text field, local to the content column.
    pub fields: SmallVec<[Rect; 2]>,
    /// One slot per button, ordered as laid out (Cancel last).
    pub buttons: SmallVec<[ButtonSlot; 4]>,
    /// Natural height of the text area.
    pub text_area_height: f32,
    /// Natural height of the button area.
    pub button_area_height: f32,
    /// Visible height granted to the text area after clamping.
    pub text_viewport_height: f32,
    /// Visible height granted to the button area after clamping.
    pub button_viewport_height: f32,
}

impl LayoutResult {
    #[must_use]
    pub const fn variant(&self) -> DialogVariant {
        self.variant
    }

    #[must_use]
    pub const fn inner_width(&self) -> f32 {
        self.inner_width
    }

    /// Horizontal offset of the content column inside the panel.
    #[must_use]
    pub fn content_x(&self) -> f32 {
        (self.frame.width - self.inner_width) / 2.0
    }

    /// True when the natural content exceeds the visible viewports and the
    /// host must scroll one of the areas.
    #[must_use]
    pub fn overflows(&self) -> bool {
        self.text_area_height + self.button_area_height
            > self.text_viewport_height + self.button_viewport_height
    }

    /// Re-place the panel against a changed viewport.
    ///
    /// Element rects are untouched; only the panel frame and the two
    /// viewport heights are recomputed. Use after keyboard or orientation
    /// events, where the content itself is unchanged.
    pub fn reclamp(&mut self, viewport: Viewport) {
        let placement = place(
            self.variant,
            viewport,
            self.text_area_height,
            self.button_area_height,
        );
        self.frame = placement.frame;
        self.text_viewport_height = placement.text_viewport;
        self.button_viewport_height = placement.button_viewport;
    }
}

struct Metrics {
    padding: f32,
    button_margin: f32,
    inner_width: f32,
}

fn metrics(variant: DialogVariant, viewport: Viewport) -> Metrics {
    match variant {
        DialogVariant::Alert => Metrics {
            padding: ALERT_PADDING,
            button_margin: ALERT_BUTTON_MARGIN,
            inner_width: ALERT_WIDTH - ALERT_PADDING * 2.0,
        },
        DialogVariant::ActionSheet => Metrics {
            padding: SHEET_PADDING,
            button_margin: SHEET_BUTTON_MARGIN,
            // Keep the column width stable across rotation.
            inner_width: viewport.size.min_edge() - SHEET_PADDING * 2.0,
        },
    }
}

struct Placement {
    frame: Rect,
    text_viewport: f32,
    button_viewport: f32,
}

fn place(
    variant: DialogVariant,
    viewport: Viewport,
    text_area: f32,
    button_area: f32,
) -> Placement {
    let available = viewport.available_height();
    let content = (text_area + button_area).min(available);
    let button_viewport = button_area.min(available);
    let text_viewport = (content - button_viewport).max(0.0);
    let frame = match variant {
        DialogVariant::Alert => Rect::new(
            (viewport.size.width - ALERT_WIDTH) / 2.0,
            (available - content) / 2.0,
            ALERT_WIDTH,
            content,
        ),
        DialogVariant::ActionSheet => Rect::new(
            0.0,
            available - content,
            viewport.size.width,
            content + SHEET_BOUNCE,
        ),
    };
    Placement {
        frame,
        text_viewport,
        button_viewport,
    }
}

/// Lay out a dialog against a viewport.
#[must_use]
pub fn compute(
    content: &DialogContent<'_>,
    viewport: Viewport,
    measurer: &dyn TextMeasurer,
) -> LayoutResult {
    let m = metrics(content.variant, viewport);

    // Text area: title, message, then the field block, separated by gaps.
    // The starting inset doubles on sheets so the title clears the rounded
    // top edge.
    let mut y = match content.variant {
        DialogVariant::Alert => m.padding,
        DialogVariant::ActionSheet => m.padding * 2.0,
    };
    let has_title = content.title.is_some_and(|t| !t.is_empty());
    let has_message = content.message.is_some_and(|t| !t.is_empty());

    let mut title = None;
    if has_title {
        let text = content.title.unwrap_or_default();
        let height = measurer.measure_height(text, &content.title_font, m.inner_width);
        title = Some(Rect::new(0.0, y, m.inner_width, height));
        y += height + TEXT_GAP;
    }

    let mut message = None;
    if has_message {
        let text = content.message.unwrap_or_default();
        let height = measurer.measure_height(text, &content.message_font, m.inner_width);
        message = Some(Rect::new(0.0, y, m.inner_width, height));
        y += height + TEXT_GAP;
    }

    let mut field_block = None;
    let mut fields = SmallVec::new();
    if content.field_count > 0 {
        if has_title || has_message {
            y += TEXT_GAP;
        }
        let n = content.field_count as f32;
        let block_height = n * TEXT_FIELD_HEIGHT + (n - 1.0) * TEXT_FIELD_SEPARATOR;
        field_block = Some(Rect::new(0.0, y, m.inner_width, block_height));
        for i in 0..content.field_count {
            let offset = i as f32 * (TEXT_FIELD_HEIGHT + TEXT_FIELD_SEPARATOR);
            fields.push(Rect::new(0.0, y + offset, m.inner_width, TEXT_FIELD_HEIGHT));
        }
        y += block_height + TEXT_GAP;
    }

    let text_area_height = if has_title || has_message || content.field_count > 0 {
        y
    } else {
        0.0
    };

    // Button area: every non-Cancel button in add order, then Cancel last.
    // A two-button alert puts both side by side instead.
    let mut buttons: SmallVec<[ButtonSlot; 4]> = SmallVec::new();
    let styles = content.action_styles;
    let mut by = m.button_margin;
    let button_area_height = if styles.is_empty() {
        0.0
    } else if content.variant.is_alert() && styles.len() == 2 {
        let width = (m.inner_width - m.button_margin) / 2.0;
        for (i, _) in styles.iter().enumerate() {
            let x = i as f32 * (width + m.button_margin);
            buttons.push(ButtonSlot {
                action_index: i,
                frame: Rect::new(x, by, width, BUTTON_HEIGHT),
            });
        }
        by += BUTTON_HEIGHT;
        by + m.padding
    } else {
        let mut cancel = None;
        for (i, style) in styles.iter().enumerate() {
            if *style == ActionStyle::Cancel {
                cancel = Some(i);
                continue;
            }
            buttons.push(ButtonSlot {
                action_index: i,
                frame: Rect::new(0.0, by, m.inner_width, BUTTON_HEIGHT),
            });
            by += BUTTON_HEIGHT + m.button_margin;
        }
        if let Some(i) = cancel {
            if content.variant == DialogVariant::ActionSheet && styles.len() > 1 {
                by += m.button_margin;
            }
            buttons.push(ButtonSlot {
                action_index: i,
                frame: Rect::new(0.0, by, m.inner_width, BUTTON_HEIGHT),
            });
            by += BUTTON_HEIGHT + m.button_margin;
        }
        by - m.button_margin + m.padding
    };

    let placement = place(content.variant, viewport, text_area_height, button_area_height);
    trace!(
        variant = ?content.variant,
        text_area = text_area_height,
        button_area = button_area_height,
        frame = ?placement.frame,
        "layout computed"
    );

    LayoutResult {
        variant: content.variant,
        inner_width: m.inner_width,
        frame: placement.frame,
        title,
        message,
        field_block,
        fields,
        buttons,
        text_area_height,
        button_area_height,
        text_viewport_height: placement.text_viewport,
        button_viewport_height: placement.button_viewport,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use scrim_core::WordWrapMeasurer;
    use scrim_style::Theme;

    fn content<'a>(
        variant: DialogVariant,
        title: Option<&'a str>,
        message: Option<&'a str>,
        field_count: usize,
        action_styles: &'a [ActionStyle],
    ) -> DialogContent<'a> {
        let theme = Theme::default();
        DialogContent {
            variant,
            title,
            message,
            title_font: theme.title_font,
            message_font: theme.message_font,
            field_count,
            action_styles,
        }
    }

    fn portrait() -> Viewport {
        Viewport::new(320.0, 568.0)
    }

    #[test]
    fn alert_panel_is_centered_at_fixed_width() {
        let styles = [ActionStyle::Default];
        let c = content(DialogVariant::Alert, Some("Title"), Some("Message"), 0, &styles);
        let layout = compute(&c, portrait(), &WordWrapMeasurer::default());

        assert_eq!(layout.frame.width, ALERT_WIDTH);
        assert_eq!(layout.frame.x, (320.0 - ALERT_WIDTH) / 2.0);
        assert_eq!(layout.inner_width(), 240.0);
        assert_eq!(layout.content_x(), ALERT_PADDING);

        // One-line title (bold 18 -> 22pt) and message (regular 15 -> 18pt).
        let title = layout.title.unwrap();
        assert_eq!(title.y, ALERT_PADDING);
        assert_eq!(title.height, 22.0);
        let message = layout.message.unwrap();
        assert_eq!(message.y, ALERT_PADDING + 22.0 + TEXT_GAP);
        assert_eq!(layout.text_area_height, 15.0 + 22.0 + 5.0 + 18.0 + 5.0);

        // margin + button + padding.
        assert_eq!(layout.button_area_height, 10.0 + 44.0 + 15.0);

        let content_h = layout.text_area_height + layout.button_area_height;
        assert_eq!(layout.frame.height, content_h);
        assert_eq!(layout.frame.y, (568.0 - content_h) / 2.0);
    }

    #[test]
    fn empty_text_collapses_the_text_area() {
        let styles = [ActionStyle::Default];
        let c = content(DialogVariant::Alert, None, Some(""), 0, &styles);
        let layout = compute(&c, portrait(), &WordWrapMeasurer::default());
        assert_eq!(layout.text_area_height, 0.0);
        assert!(layout.title.is_none());
        assert!(layout.message.is_none());
    }

    #[test]
    fn two_button_alert_lays_buttons_side_by_side_in_add_order() {
        let styles = [ActionStyle::Cancel, ActionStyle::Default];
        let c = content(DialogVariant::Alert, Some("T"), None, 0, &styles);
        let layout = compute(&c, portrait(), &WordWrapMeasurer::default());

        let width = (240.0 - 10.0) / 2.0;
        assert_eq!(layout.buttons.len(), 2);
        assert_eq!(layout.buttons[0].action_index, 0);
        assert_eq!(layout.buttons[0].frame, Rect::new(0.0, 10.0, width, 44.0));
        assert_eq!(layout.buttons[1].action_index, 1);
        assert_eq!(
            layout.buttons[1].frame,
            Rect::new(width + 10.0, 10.0, width, 44.0)
        );
        assert_eq!(layout.button_area_height, 10.0 + 44.0 + 15.0);
    }

    #[test]
    fn cancel_is_laid_out_last_keeping_its_action_index() {
        let styles = [
            ActionStyle::Cancel,
            ActionStyle::Default,
            ActionStyle::Destructive,
        ];
        let c = content(DialogVariant::Alert, Some("T"), None, 0, &styles);
        let layout = compute(&c, portrait(), &WordWrapMeasurer::default());

        assert_eq!(layout.buttons.len(), 3);
        assert_eq!(layout.buttons[0].action_index, 1);
        assert_eq!(layout.buttons[1].action_index, 2);
        assert_eq!(layout.buttons[2].action_index, 0);
        assert_eq!(layout.buttons[0].frame.y, 10.0);
        assert_eq!(layout.buttons[1].frame.y, 10.0 + 54.0);
        assert_eq!(layout.buttons[2].frame.y, 10.0 + 108.0);
        // margin + 3 * (44 + margin) - margin + padding
        assert_eq!(layout.button_area_height, 10.0 + 162.0 - 10.0 + 15.0);
    }

    #[test]
    fn sheet_spans_viewport_width_and_sits_on_the_bottom_edge() {
        let styles = [ActionStyle::Default, ActionStyle::Cancel];
        let c = content(DialogVariant::ActionSheet, None, None, 0, &styles);
        let layout = compute(&c, portrait(), &WordWrapMeasurer::default());

        assert_eq!(layout.inner_width(), 320.0 - 16.0);
        assert_eq!(layout.text_area_height, 0.0);

        // Non-cancel at the margin, Cancel after an extra margin.
        assert_eq!(layout.buttons[0].action_index, 0);
        assert_eq!(layout.buttons[0].frame.y, 8.0);
        assert_eq!(layout.buttons[1].action_index, 1);
        assert_eq!(layout.buttons[1].frame.y, 8.0 + 44.0 + 8.0 + 8.0);
        assert_eq!(layout.button_area_height, 120.0);

        assert_eq!(layout.frame.x, 0.0);
        assert_eq!(layout.frame.width, 320.0);
        assert_eq!(layout.frame.y, 568.0 - 120.0);
        assert_eq!(layout.frame.height, 120.0 + SHEET_BOUNCE);
    }

    #[test]
    fn sheet_single_cancel_gets_no_extra_margin() {
        let styles = [ActionStyle::Cancel];
        let c = content(DialogVariant::ActionSheet, None, None, 0, &styles);
        let layout = compute(&c, portrait(), &WordWrapMeasurer::default());
        assert_eq!(layout.buttons[0].frame.y, 8.0);
        assert_eq!(layout.button_area_height, 8.0 + 44.0 + 8.0);
    }

    #[test]
    fn zero_actions_collapse_the_button_area() {
        let c = content(DialogVariant::Alert, Some("T"), None, 0, &[]);
        let layout = compute(&c, portrait(), &WordWrapMeasurer::default());
        assert_eq!(layout.button_area_height, 0.0);
        assert!(layout.buttons.is_empty());
    }

    #[test]
    fn text_fields_stack_with_hairline_separators() {
        let styles = [ActionStyle::Default];
        let c = content(DialogVariant::Alert, Some("T"), None, 2, &styles);
        let layout = compute(&c, portrait(), &WordWrapMeasurer::default());

        let block = layout.field_block.unwrap();
        // Title gap plus the extra gap before the block.
        assert_eq!(block.y, 15.0 + 22.0 + 5.0 + 5.0);
        assert_eq!(block.height, 2.0 * 30.0 + 0.5);
        assert_eq!(layout.fields.len(), 2);
        assert_eq!(layout.fields[0].y, block.y);
        assert_eq!(layout.fields[1].y, block.y + 30.5);
    }

    #[test]
    fn keyboard_clamps_content_and_splits_the_viewports() {
        let long = "word ".repeat(200);
        let styles = [
            ActionStyle::Default,
            ActionStyle::Destructive,
            ActionStyle::Cancel,
        ];
        let c = content(DialogVariant::Alert, Some("T"), Some(long.as_str()), 1, &styles);
        let viewport = Viewport::new(320.0, 568.0).with_keyboard(216.0);
        let layout = compute(&c, viewport, &WordWrapMeasurer::default());

        let available = 568.0 - 216.0;
        assert!(layout.text_area_height + layout.button_area_height > available);
        assert!(layout.overflows());
        assert_eq!(layout.frame.height, available);
        assert_eq!(layout.frame.y, 0.0);
        assert_eq!(layout.button_viewport_height, layout.button_area_height);
        assert_eq!(
            layout.text_viewport_height,
            available - layout.button_area_height
        );
    }

    #[test]
    fn reclamp_recenters_an_alert_after_rotation() {
        let styles = [ActionStyle::Default];
        let c = content(DialogVariant::Alert, Some("T"), Some("M"), 0, &styles);
        let mut layout = compute(&c, portrait(), &WordWrapMeasurer::default());
        let title = layout.title;

        layout.reclamp(Viewport::new(568.0, 320.0));
        assert_eq!(layout.frame.x, (568.0 - ALERT_WIDTH) / 2.0);
        let content_h = layout.text_area_height + layout.button_area_height;
        assert_eq!(layout.frame.y, (320.0 - content_h) / 2.0);
        // Content rects are untouched.
        assert_eq!(layout.title, title);
    }

    #[test]
    fn reclamp_keeps_sheet_on_the_new_bottom_edge() {
        let styles = [ActionStyle::Default, ActionStyle::Cancel];
        let c = content(DialogVariant::ActionSheet, None, None, 0, &styles);
        let mut layout = compute(&c, portrait(), &WordWrapMeasurer::default());

        layout.reclamp(Viewport::new(568.0, 320.0));
        assert_eq!(layout.frame.width, 568.0);
        assert_eq!(layout.frame.y, 320.0 - layout.button_area_height);
    }

    proptest! {
        #[test]
        fn layout_is_deterministic(
            title in proptest::option::of(".{0,40}"),
            message in proptest::option::of(".{0,120}"),
            field_count in 0usize..3,
            styles in proptest::collection::vec(
                prop_oneof![
                    Just(ActionStyle::Default),
                    Just(ActionStyle::Destructive),
                ],
                0..5,
            ),
            width in 200.0f32..1200.0,
            height in 200.0f32..1200.0,
        ) {
            let c = content(
                DialogVariant::Alert,
                title.as_deref(),
                message.as_deref(),
                field_count,
                &styles,
            );
            let viewport = Viewport::new(width, height);
            let a = compute(&c, viewport, &WordWrapMeasurer::default());
            let b = compute(&c, viewport, &WordWrapMeasurer::default());
            prop_assert_eq!(a, b);
        }

        #[test]
        fn viewports_never_exceed_available_height(
            message in ".{0,400}",
            styles in proptest::collection::vec(
                prop_oneof![
                    Just(ActionStyle::Default),
                    Just(ActionStyle::Destructive),
                ],
                0..8,
            ),
            keyboard in 0.0f32..400.0,
        ) {
            let c = content(DialogVariant::Alert, Some("Title"), Some(message.as_str()), 0, &styles);
            let viewport = Viewport::new(320.0, 568.0).with_keyboard(keyboard);
            let layout = compute(&c, viewport, &WordWrapMeasurer::default());
            let visible = layout.text_viewport_height + layout.button_viewport_height;
            prop_assert!(visible <= viewport.available_height() + f32::EPSILON);
            prop_assert!(layout.text_viewport_height >= 0.0);
            prop_assert!(layout.button_viewport_height >= 0.0);
        }

        #[test]
        fn cancel_always_lands_last(
            before in proptest::collection::vec(Just(ActionStyle::Default), 0..4),
            after in proptest::collection::vec(Just(ActionStyle::Destructive), 1..4),
        ) {
            let mut styles = before;
            let cancel_index = styles.len();
            styles.push(ActionStyle::Cancel);
            styles.extend(after);
            // Avoid the side-by-side special case.
            prop_assume!(styles.len() != 2);

            let c = content(DialogVariant::Alert, Some("T"), None, 0, &styles);
            let layout = compute(&c, portrait(), &WordWrapMeasurer::default());
            let last = layout.buttons.last().unwrap();
            prop_assert_eq!(last.action_index, cancel_index);
            let max_y = layout.buttons.iter().map(|b| b.frame.y).fold(0.0, f32::max);
            prop_assert_eq!(last.frame.y, max_y);
        }
    }
}
