use serde::{Deserialize, Serialize};

use crate::core::types::AxisRange;

/// Pixels per data unit on each axis.
///
/// Derived from the plot extent left after margins; any margin or range
/// change requires recomputing it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    pub pixels_per_unit_x: f64,
    pub pixels_per_unit_y: f64,
}

impl Scale {
    #[must_use]
    pub fn new(pixels_per_unit_x: f64, pixels_per_unit_y: f64) -> Self {
        Self {
            pixels_per_unit_x,
            pixels_per_unit_y,
        }
    }

    /// `extent_px / (high - low)` for a normalized range.
    #[must_use]
    pub fn pixels_per_unit(extent_px: i32, range: AxisRange) -> f64 {
        f64::from(extent_px) / range.span()
    }
}

impl Default for Scale {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Scale;
    use crate::core::AxisRange;

    #[test]
    fn pixels_per_unit_divides_extent_by_span() {
        let range = AxisRange::new(2.0, 6.0).expect("range");
        assert_eq!(Scale::pixels_per_unit(400, range), 100.0);
    }
}
