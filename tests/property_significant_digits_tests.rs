use axis_chart::ChartError;
use axis_chart::core::format_significant_digits;
use proptest::prelude::*;

proptest! {
    #[test]
    fn formatted_value_stays_within_half_a_unit_in_the_last_place(
        magnitude in 1e-6f64..1e9,
        negative in any::<bool>(),
        digits in 1i32..12
    ) {
        let value = if negative { -magnitude } else { magnitude };
        let text = format_significant_digits(value, digits).expect("format");
        prop_assert!(!text.contains('e') && !text.contains('E'));

        let parsed: f64 = text.parse().expect("plain decimal");
        let exponent = value.abs().log10().floor() as i32;
        let half_unit = 0.5 * 10f64.powi(exponent - digits + 1);
        let slack = value.abs() * 1e-12;
        prop_assert!(
            (parsed - value).abs() <= half_unit * (1.0 + 1e-9) + slack,
            "{value} -> {text}"
        );
    }

    #[test]
    fn nan_always_formats_as_dash(digits in 0i32..64) {
        prop_assert_eq!(format_significant_digits(f64::NAN, digits).expect("format"), "-");
    }

    #[test]
    fn negative_digit_counts_always_fail(value in any::<f64>(), digits in i32::MIN..0) {
        let err = format_significant_digits(value, digits).expect_err("negative digits");
        prop_assert!(matches!(err, ChartError::InvalidArgument(_)));
    }
}
