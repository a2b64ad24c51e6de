use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

use crate::error::{ChartError, ChartResult};

/// Rendering of `NaN` values.
pub const NAN_LABEL: &str = "-";

/// Formats `value` as a plain decimal string with `significant_digits`
/// significant figures.
///
/// Rounding is performed on an exact decimal copy of the shortest
/// round-tripping representation of `value`, half away from zero. When the
/// rounded value has fewer significant digits than requested it is padded
/// with trailing zeros (`4.0` with 3 digits gives `"4.00"`).
///
/// Zero is `0.0` before padding (`"0.000"` with 3 digits).
///
/// `significant_digits == 0` disables rounding and keeps the canonical float
/// text, which always carries one fractional digit (`2.0` gives `"2.0"`).
/// `NaN` renders as `"-"`.
///
/// # Errors
///
/// `InvalidArgument` when `significant_digits < 0`, `InvalidData` for
/// infinite values.
pub fn format_significant_digits(value: f64, significant_digits: i32) -> ChartResult<String> {
    let Ok(digits) = usize::try_from(significant_digits) else {
        return Err(ChartError::InvalidArgument(format!(
            "significant digits must be >= 0, got {significant_digits}"
        )));
    };
    if value.is_nan() {
        return Ok(NAN_LABEL.to_owned());
    }
    if !value.is_finite() {
        return Err(ChartError::InvalidData(format!(
            "cannot format non-finite value {value}"
        )));
    }

    let mut number = if value == 0.0 {
        ScaledDigits::zero()
    } else if digits == 0 {
        ScaledDigits::from_f64(value)?.with_fraction_digit(value.abs())
    } else {
        ScaledDigits::from_f64(value)?.round_significant(digits)?
    };
    number.pad_to(digits);
    Ok(number.to_plain_string())
}

/// `(-1)^negative * digits * 10^exponent` with `digits` an unsigned integer.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ScaledDigits {
    negative: bool,
    digits: String,
    exponent: i64,
}

impl ScaledDigits {
    fn zero() -> Self {
        Self {
            negative: false,
            digits: "0".to_owned(),
            exponent: -1,
        }
    }

    /// Pads to the digits of the canonical float text: `2.0` and `100.0`
    /// in plain range, `1.0e7` and `1.0e-4` outside it.
    fn with_fraction_digit(mut self, magnitude: f64) -> Self {
        let missing = if (1e-3..1e7).contains(&magnitude) {
            self.exponent + 1
        } else {
            i64::from(self.precision() == 1)
        };
        for _ in 0..missing.max(0) {
            self.digits.push('0');
            self.exponent -= 1;
        }
        self
    }

    /// Splits the shortest round-trip scientific form (`d.ddde±x`) into a
    /// decimal mantissa in `[1, 10)` and a power of ten.
    fn from_f64(value: f64) -> ChartResult<Self> {
        let scientific = format!("{:e}", value.abs());
        let (mantissa, exponent) = scientific
            .split_once('e')
            .ok_or_else(|| malformed(&scientific))?;
        let exponent = i64::from_str(exponent).map_err(|_| malformed(&scientific))?;
        let mantissa = Decimal::from_str(mantissa).map_err(|_| malformed(&scientific))?;
        Ok(Self::from_decimal(value < 0.0, mantissa, exponent))
    }

    fn from_decimal(negative: bool, mantissa: Decimal, exponent: i64) -> Self {
        Self {
            negative,
            digits: mantissa.mantissa().unsigned_abs().to_string(),
            exponent: exponent - i64::from(mantissa.scale()),
        }
    }

    fn precision(&self) -> usize {
        self.digits.len()
    }

    fn round_significant(self, significant_digits: usize) -> ChartResult<Self> {
        if self.precision() <= significant_digits {
            return Ok(self);
        }

        // Re-anchor as a mantissa in [1, 10) so the decimal never exceeds its
        // 28-digit range regardless of the value's magnitude.
        let point = u32::try_from(self.precision() - 1)
            .map_err(|_| ChartError::InvalidData("too many digits to round".to_owned()))?;
        let unscaled = i128::from_str(&self.digits)
            .map_err(|_| ChartError::InvalidData("too many digits to round".to_owned()))?;
        let mantissa = Decimal::try_from_i128_with_scale(unscaled, point)
            .map_err(|err| ChartError::InvalidData(format!("decimal overflow: {err}")))?;
        let target = u32::try_from(significant_digits).unwrap_or(u32::MAX);
        let rounded = mantissa
            .round_sf_with_strategy(target, RoundingStrategy::MidpointAwayFromZero)
            .ok_or_else(|| {
                ChartError::InvalidData(format!(
                    "cannot round {mantissa} to {significant_digits} significant digits"
                ))
            })?;

        let anchor = self.exponent + i64::from(point);
        let mut result = Self::from_decimal(self.negative, rounded, anchor);
        // A carry (9.996 -> 10.00) leaves one digit too many.
        while result.precision() > significant_digits && result.digits.ends_with('0') {
            result.digits.pop();
            result.exponent += 1;
        }
        Ok(result)
    }

    fn pad_to(&mut self, significant_digits: usize) {
        let precision = self.precision();
        if precision < significant_digits {
            let missing = significant_digits - precision;
            self.digits.extend(std::iter::repeat_n('0', missing));
            self.exponent -= missing as i64;
        }
    }

    fn to_plain_string(&self) -> String {
        let mut out = String::with_capacity(self.digits.len() + 4);
        if self.negative && self.digits.bytes().any(|digit| digit != b'0') {
            out.push('-');
        }

        if self.exponent >= 0 {
            out.push_str(&self.digits);
            out.extend(std::iter::repeat_n('0', self.exponent as usize));
            return out;
        }

        let fraction_len = self.exponent.unsigned_abs() as usize;
        if self.digits.len() > fraction_len {
            let (whole, fraction) = self.digits.split_at(self.digits.len() - fraction_len);
            out.push_str(whole);
            out.push('.');
            out.push_str(fraction);
        } else {
            out.push_str("0.");
            out.extend(std::iter::repeat_n('0', fraction_len - self.digits.len()));
            out.push_str(&self.digits);
        }
        out
    }
}

fn malformed(repr: &str) -> ChartError {
    ChartError::InvalidData(format!("unexpected float representation `{repr}`"))
}

#[cfg(test)]
mod tests {
    use super::ScaledDigits;

    #[test]
    fn splits_scientific_representation() {
        let number = ScaledDigits::from_f64(-0.00125).expect("digits");
        assert!(number.negative);
        assert_eq!(number.digits, "125");
        assert_eq!(number.exponent, -5);
    }

    #[test]
    fn carry_extends_exponent() {
        let number = ScaledDigits::from_f64(9.996)
            .and_then(|number| number.round_significant(3))
            .expect("rounded");
        assert_eq!(number.to_plain_string(), "10.0");
    }

    #[test]
    fn fraction_digit_follows_float_text() {
        let plain = |value: f64| {
            ScaledDigits::from_f64(value)
                .map(|number| number.with_fraction_digit(value.abs()).to_plain_string())
                .expect("digits")
        };
        assert_eq!(plain(2.0), "2.0");
        assert_eq!(plain(1234.0), "1234.0");
        assert_eq!(plain(0.25), "0.25");
        assert_eq!(plain(1.5e7), "15000000");
        assert_eq!(plain(1e-4), "0.00010");
    }

    #[test]
    fn plain_string_places_leading_zeros() {
        let number = ScaledDigits {
            negative: false,
            digits: "42".to_owned(),
            exponent: -4,
        };
        assert_eq!(number.to_plain_string(), "0.0042");
    }
}
