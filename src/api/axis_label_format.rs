use serde::{Deserialize, Serialize};

use crate::core::{NAN_LABEL, format_significant_digits};
use crate::error::{ChartError, ChartResult};

/// Per-axis tick-label formatting policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisLabelFormat {
    /// Plain decimal rounded to `digits` significant figures (`0` = unrounded).
    SignificantDigits { digits: i32 },
    /// `floor(value)` rendered as an integer; fractions are truncated, not rounded.
    TruncatedInteger,
}

impl AxisLabelFormat {
    /// Default Y-axis policy.
    pub const VALUE_AXIS: Self = Self::SignificantDigits { digits: 3 };
    /// Default X-axis policy.
    pub const INDEX_AXIS: Self = Self::TruncatedInteger;

    pub fn validate(self) -> ChartResult<()> {
        match self {
            Self::SignificantDigits { digits } if digits < 0 => {
                Err(ChartError::InvalidArgument(format!(
                    "significant digits must be >= 0, got {digits}"
                )))
            }
            _ => Ok(()),
        }
    }

    pub fn format(self, value: f64) -> ChartResult<String> {
        match self {
            Self::SignificantDigits { digits } => format_significant_digits(value, digits),
            Self::TruncatedInteger => Ok(format_truncated_integer(value)),
        }
    }
}

/// Saturates at the `i64` bounds; finite axis ranges always get a label.
fn format_truncated_integer(value: f64) -> String {
    if value.is_nan() {
        return NAN_LABEL.to_owned();
    }
    (value.floor() as i64).to_string()
}

#[cfg(test)]
mod tests {
    use super::AxisLabelFormat;

    #[test]
    fn truncated_integer_floors_fractions() {
        let format = AxisLabelFormat::TruncatedInteger;
        assert_eq!(format.format(2.9).expect("label"), "2");
        assert_eq!(format.format(-0.5).expect("label"), "-1");
        assert_eq!(format.format(10.0).expect("label"), "10");
    }

    #[test]
    fn truncated_integer_saturates_outside_i64() {
        let format = AxisLabelFormat::TruncatedInteger;
        assert_eq!(format.format(1e20).expect("label"), i64::MAX.to_string());
        assert_eq!(format.format(-1e20).expect("label"), i64::MIN.to_string());
    }

    #[test]
    fn negative_digit_policy_is_rejected() {
        let format = AxisLabelFormat::SignificantDigits { digits: -2 };
        assert!(format.validate().is_err());
        assert!(format.format(1.0).is_err());
    }
}
