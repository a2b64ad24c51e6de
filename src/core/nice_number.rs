use serde::{Deserialize, Serialize};

/// Snapping policy used by [`nice_number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NiceMode {
    /// Snap the leading fraction to the nearest of `{1, 2, 5, 10}`.
    Round,
    /// Snap the leading fraction to the smallest of `{1, 2, 5, 10}` that is `>=` it.
    Ceil,
}

/// Picks an aesthetically rounded value from `{1, 2, 5, 10} x 10^k` close to `x`.
///
/// Precondition: `x > 0`. Tick generation guarantees a positive span before
/// calling; for other inputs the result is unspecified.
///
/// The threshold comparisons are part of the contract: `Round` uses strict
/// `<` against `1.5, 3.0, 7.0` while `Ceil` uses `<=` against `1, 2, 5`.
#[must_use]
pub fn nice_number(x: f64, mode: NiceMode) -> f64 {
    let exponent = x.log10().floor();
    let mut magnitude = 10f64.powf(exponent);
    if magnitude == 0.0 {
        magnitude = 1.0;
    }
    let fraction = x / magnitude;

    let snapped = match mode {
        NiceMode::Round => {
            if fraction < 1.5 {
                1.0
            } else if fraction < 3.0 {
                2.0
            } else if fraction < 7.0 {
                5.0
            } else {
                10.0
            }
        }
        NiceMode::Ceil => {
            if fraction <= 1.0 {
                1.0
            } else if fraction <= 2.0 {
                2.0
            } else if fraction <= 5.0 {
                5.0
            } else {
                10.0
            }
        }
    };

    snapped * 10f64.powf(exponent)
}

#[cfg(test)]
mod tests {
    use super::{NiceMode, nice_number};

    #[test]
    fn round_thresholds_are_strict() {
        assert_eq!(nice_number(1.49, NiceMode::Round), 1.0);
        assert_eq!(nice_number(1.5, NiceMode::Round), 2.0);
        assert_eq!(nice_number(2.5, NiceMode::Round), 2.0);
        assert_eq!(nice_number(3.0, NiceMode::Round), 5.0);
        assert_eq!(nice_number(7.0, NiceMode::Round), 10.0);
    }

    #[test]
    fn ceil_thresholds_are_inclusive() {
        assert_eq!(nice_number(1.0, NiceMode::Ceil), 1.0);
        assert_eq!(nice_number(2.0, NiceMode::Ceil), 2.0);
        assert_eq!(nice_number(2.01, NiceMode::Ceil), 5.0);
        assert_eq!(nice_number(5.0, NiceMode::Ceil), 5.0);
        assert_eq!(nice_number(5.5, NiceMode::Ceil), 10.0);
    }
}
