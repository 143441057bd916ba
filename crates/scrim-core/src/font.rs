#![forbid(unsafe_code)]

//! Font descriptions consumed by the text measurer and themes.
//!
//! Scrim never rasterizes text; a `Font` is just the metrics the layout pass
//! needs. The host resolves these to whatever its rendering stack provides.

/// Weight of a font face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// A font description: point size plus weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Font {
    pub size: f32,
    pub weight: FontWeight,
}

impl Font {
    #[must_use]
    pub const fn new(size: f32, weight: FontWeight) -> Self {
        Self { size, weight }
    }

    #[must_use]
    pub const fn regular(size: f32) -> Self {
        Self::new(size, FontWeight::Regular)
    }

    #[must_use]
    pub const fn bold(size: f32) -> Self {
        Self::new(size, FontWeight::Bold)
    }

    /// Height of one wrapped line for this font.
    ///
    /// A fixed 1.2 factor, rounded to whole points so stacked line heights
    /// stay stable under repeated layout passes.
    #[must_use]
    pub fn line_height(&self) -> f32 {
        (self.size * 1.2).round()
    }
}
