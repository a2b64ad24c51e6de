use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Upward nudge applied to zero-width axis ranges.
pub const AXIS_RANGE_EPSILON: f64 = 0.0001;

/// Canvas size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        let max = i32::MAX as u32;
        self.width > 0 && self.height > 0 && self.width <= max && self.height <= max
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.is_valid() {
            return Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    /// Width as signed pixel arithmetic operand.
    #[must_use]
    pub fn width_px(self) -> i32 {
        i32::try_from(self.width).unwrap_or(i32::MAX)
    }

    /// Height as signed pixel arithmetic operand.
    #[must_use]
    pub fn height_px(self) -> i32 {
        i32::try_from(self.height).unwrap_or(i32::MAX)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(500, 350)
    }
}

/// Data-space bounds of one axis.
///
/// Callers may pass reversed or equal bounds; [`AxisRange::normalized`]
/// produces the range actually used by layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub low: f64,
    pub high: f64,
}

impl AxisRange {
    pub fn new(low: f64, high: f64) -> ChartResult<Self> {
        if !low.is_finite() || !high.is_finite() {
            return Err(ChartError::InvalidData(
                "axis range bounds must be finite".to_owned(),
            ));
        }
        Ok(Self { low, high })
    }

    /// Returns a range with `high > low`.
    ///
    /// Reversed bounds are swapped. Equal bounds get `high` nudged by
    /// [`AXIS_RANGE_EPSILON`]; when that nudge is absorbed by float precision
    /// the span is widened relative to the magnitude instead.
    #[must_use]
    pub fn normalized(self) -> Self {
        let (low, mut high) = if self.low > self.high {
            (self.high, self.low)
        } else {
            (self.low, self.high)
        };

        if high == low {
            high += AXIS_RANGE_EPSILON;
            if high <= low {
                high = low + low.abs() * f64::EPSILON * 16.0;
            }
        }

        Self { low, high }
    }

    #[must_use]
    pub fn is_degenerate(self) -> bool {
        self.high <= self.low
    }

    #[must_use]
    pub fn span(self) -> f64 {
        self.high - self.low
    }

    /// Smallest range covering both `self` and `[first, last]`.
    #[must_use]
    pub fn widened_to(self, first: f64, last: f64) -> Self {
        Self {
            low: self.low.min(first),
            high: self.high.max(last),
        }
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }
}

impl Default for AxisRange {
    fn default() -> Self {
        Self {
            low: 0.0,
            high: 1.0,
        }
    }
}

/// Pixel space reserved around the plot rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Margins {
    pub top: i32,
    pub left: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Margins {
    #[must_use]
    pub fn plot_width(self, viewport: Viewport) -> i32 {
        viewport.width_px() - self.left - self.right
    }

    #[must_use]
    pub fn plot_height(self, viewport: Viewport) -> i32 {
        viewport.height_px() - self.top - self.bottom
    }

    /// Returns `true` when every side is at least as large as in `earlier`.
    #[must_use]
    pub fn covers(self, earlier: Self) -> bool {
        self.top >= earlier.top
            && self.left >= earlier.left
            && self.right >= earlier.right
            && self.bottom >= earlier.bottom
    }
}

/// One series sample in data space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
