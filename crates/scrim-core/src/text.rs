#![forbid(unsafe_code)]

//! Text measurement seam.
//!
//! Dialog layout needs one fact about text it cannot compute itself: how tall
//! a string is when wrapped to a given width in a given font. Hosts with a
//! real text stack implement [`TextMeasurer`] on top of it; headless hosts
//! and tests use [`WordWrapMeasurer`], a deterministic greedy word wrap over
//! an average-advance estimate.
//!
//! # Invariants
//!
//! - Empty text measures exactly 0.0 (no line is reserved).
//! - Non-empty text measures at least one line height.
//! - Measuring is pure: same text/font/width always yields the same height.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::font::Font;

/// Measures wrapped text height for layout.
pub trait TextMeasurer {
    /// Height in points of `text` wrapped to `max_width` in `font`.
    ///
    /// Must return 0.0 for empty text.
    fn measure_height(&self, text: &str, font: &Font, max_width: f32) -> f32;
}

/// Deterministic measurer: greedy word wrap with estimated glyph advances.
///
/// A glyph's advance is estimated as `font.size * advance_factor` per
/// terminal column (wide graphemes count two columns). Coarse, but stable,
/// monotonic in text length, and good enough for layout that a real host
/// replaces with its own text stack.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordWrapMeasurer {
    /// Average glyph advance as a fraction of the font size.
    pub advance_factor: f32,
}

impl Default for WordWrapMeasurer {
    fn default() -> Self {
        Self {
            advance_factor: 0.55,
        }
    }
}

impl WordWrapMeasurer {
    #[must_use]
    pub const fn new(advance_factor: f32) -> Self {
        Self { advance_factor }
    }

    fn advance(&self, s: &str, font: &Font) -> f32 {
        let columns: usize = s
            .graphemes(true)
            .map(|g| UnicodeWidthStr::width(g).max(1))
            .sum();
        columns as f32 * font.size * self.advance_factor
    }

    /// Number of wrapped lines for `text` at `max_width`.
    #[must_use]
    pub fn line_count(&self, text: &str, font: &Font, max_width: f32) -> usize {
        if text.is_empty() {
            return 0;
        }
        let mut lines = 0usize;
        for paragraph in text.split('\n') {
            lines += self.wrap_paragraph(paragraph, font, max_width);
        }
        lines.max(1)
    }

    fn wrap_paragraph(&self, paragraph: &str, font: &Font, max_width: f32) -> usize {
        let space = self.advance(" ", font);
        let mut lines = 1usize;
        let mut line_width = 0.0f32;
        for word in paragraph.split_whitespace() {
            let word_width = self.advance(word, font);
            if line_width == 0.0 {
                line_width = word_width;
            } else if line_width + space + word_width <= max_width {
                line_width += space + word_width;
            } else {
                lines += 1;
                line_width = word_width;
            }
            // A single word wider than the line overflows onto extra lines.
            while line_width > max_width && max_width > 0.0 {
                lines += 1;
                line_width -= max_width;
            }
        }
        lines
    }
}

impl TextMeasurer for WordWrapMeasurer {
    fn measure_height(&self, text: &str, font: &Font, max_width: f32) -> f32 {
        if text.is_empty() {
            return 0.0;
        }
        self.line_count(text, font, max_width) as f32 * font.line_height()
    }
}
