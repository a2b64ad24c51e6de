use approx::assert_relative_eq;
use axis_chart::ChartError;
use axis_chart::core::{MAX_TICK_COUNT, TickGenerator, loose_label, tight_label};

#[test]
fn loose_labels_for_zero_to_ten_step_by_two() {
    let ticks = loose_label(0.0, 10.0).expect("loose ticks");
    assert_eq!(ticks.as_slice(), &[0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
}

#[test]
fn loose_labels_extend_past_data_bounds() {
    let ticks = loose_label(0.3, 9.2).expect("loose ticks");
    assert_eq!(ticks.first().copied(), Some(0.0));
    assert_eq!(ticks.last().copied(), Some(10.0));
}

#[test]
fn loose_labels_for_unit_range_use_fifth_steps() {
    let ticks = loose_label(0.0, 1.0).expect("loose ticks");
    assert_eq!(ticks.len(), 6);
    for (tick, expected) in ticks.iter().zip([0.0, 0.2, 0.4, 0.6, 0.8, 1.0]) {
        assert_relative_eq!(*tick, expected, epsilon = 1e-12);
    }
}

#[test]
fn tight_labels_keep_literal_extremes() {
    let ticks = tight_label(0.5, 9.7).expect("tight ticks");
    assert_eq!(ticks.first().copied(), Some(0.5));
    assert_eq!(ticks.last().copied(), Some(9.7));
    assert_eq!(&ticks[1..ticks.len() - 1], &[2.0, 4.0, 6.0, 8.0]);
}

#[test]
fn tight_labels_do_not_repeat_nice_extremes() {
    let ticks = tight_label(0.0, 10.0).expect("tight ticks");
    assert_eq!(ticks.as_slice(), &[0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
}

#[test]
fn negative_ranges_are_supported() {
    let ticks = loose_label(-47.0, -3.0).expect("loose ticks");
    assert_eq!(ticks.first().copied(), Some(-50.0));
    assert_eq!(ticks.last().copied(), Some(0.0));
    assert!(ticks.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn empty_or_reversed_bounds_are_rejected() {
    let err = loose_label(1.0, 1.0).expect_err("zero span");
    assert!(matches!(err, ChartError::InvalidData(_)));
    let err = tight_label(2.0, 1.0).expect_err("reversed");
    assert!(matches!(err, ChartError::InvalidData(_)));
    let err = loose_label(f64::NAN, 1.0).expect_err("nan bound");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn tick_count_below_two_is_rejected() {
    let err = TickGenerator::new(1).expect_err("single tick");
    assert!(matches!(err, ChartError::InvalidArgument(_)));
}

#[test]
fn larger_tick_count_yields_finer_steps() {
    let generator = TickGenerator::new(11).expect("generator");
    let ticks = generator.loose(0.0, 10.0).expect("loose ticks");
    assert_eq!(ticks.len(), 11);
    assert_eq!(ticks[1], 1.0);
}

#[test]
fn tick_count_above_limit_is_rejected() {
    let err = TickGenerator::new(5000).expect_err("too many ticks");
    assert!(matches!(err, ChartError::InvalidArgument(_)));
}

#[test]
fn largest_tick_count_still_covers_the_range() {
    let generator = TickGenerator::new(MAX_TICK_COUNT).expect("generator");
    for (min, max) in [(0.0, 10.0), (0.0, 1.49), (-3.0, 7.2), (0.0, 0.021)] {
        let ticks = generator.loose(min, max).expect("loose ticks");
        let slack = (max - min) * 1e-9;
        assert!(ticks[0] <= min + slack);
        assert!(ticks[ticks.len() - 1] >= max - slack);
    }
}
