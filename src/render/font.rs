use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Base family used by the default style.
pub const DEFAULT_FONT_FAMILY: &str = "sans-serif";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// Font selection for one text role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub family: String,
    pub size_px: f64,
    #[serde(default)]
    pub weight: FontWeight,
}

impl FontSpec {
    #[must_use]
    pub fn new(family: impl Into<String>, size_px: f64, weight: FontWeight) -> Self {
        Self {
            family: family.into(),
            size_px,
            weight,
        }
    }

    #[must_use]
    pub fn regular(size_px: f64) -> Self {
        Self::new(DEFAULT_FONT_FAMILY, size_px, FontWeight::Regular)
    }

    #[must_use]
    pub fn bold(size_px: f64) -> Self {
        Self::new(DEFAULT_FONT_FAMILY, size_px, FontWeight::Bold)
    }

    #[must_use]
    pub fn is_bold(&self) -> bool {
        self.weight == FontWeight::Bold
    }

    pub fn validate(&self) -> ChartResult<()> {
        if self.family.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "font family must not be empty".to_owned(),
            ));
        }
        if !self.size_px.is_finite() || self.size_px <= 0.0 {
            return Err(ChartError::InvalidData(
                "font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Pixel metrics of one measured string.
///
/// `height` is the font's line height; `ascent` and `descent` are measured
/// from the baseline and do not include leading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextMetrics {
    pub width: i32,
    pub height: i32,
    pub ascent: i32,
    pub descent: i32,
}

/// Text measurement capability supplied by the rendering backend.
///
/// Metrics must match what the paired drawing surface actually paints;
/// layout arithmetic relies on them pixel for pixel. Implementations
/// are expected to be stateless so one instance can serve concurrent
/// renders.
pub trait FontMetrics {
    /// Measures `text` as a single left-to-right line.
    ///
    /// # Errors
    ///
    /// `FontUnavailable` when `font` cannot be resolved.
    fn measure(&self, font: &FontSpec, text: &str) -> ChartResult<TextMetrics>;
}

impl<T: FontMetrics + ?Sized> FontMetrics for &T {
    fn measure(&self, font: &FontSpec, text: &str) -> ChartResult<TextMetrics> {
        (**self).measure(font, text)
    }
}
