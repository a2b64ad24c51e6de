use axis_chart::telemetry::{init_default_tracing, init_tracing_with_fallback};

#[cfg(not(feature = "telemetry"))]
#[test]
fn tracing_init_is_a_no_op_without_feature() {
    assert!(!init_default_tracing());
    assert!(!init_tracing_with_fallback("axis_chart=trace"));
}

#[cfg(feature = "telemetry")]
#[test]
fn tracing_init_succeeds_once() {
    let first = init_tracing_with_fallback("axis_chart=trace");
    let second = init_default_tracing();
    assert!(first);
    assert!(!second);
}
