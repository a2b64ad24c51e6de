use axis_chart::api::{ChartStyle, LayoutEngine};
use axis_chart::core::{
    AxisRange, NiceMode, Viewport, format_significant_digits, loose_label, nice_number,
    tight_label,
};
use axis_chart::render::MonoFontMetrics;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_nice_number(c: &mut Criterion) {
    c.bench_function("nice_number_round_and_ceil", |b| {
        b.iter(|| {
            let range = nice_number(black_box(8_734.25), NiceMode::Ceil);
            let _ = nice_number(black_box(range / 4.0), NiceMode::Round);
        })
    });
}

fn bench_tick_generation(c: &mut Criterion) {
    c.bench_function("loose_and_tight_ticks", |b| {
        b.iter(|| {
            let _ = loose_label(black_box(-123.4), black_box(9_876.5)).expect("loose ticks");
            let _ = tight_label(black_box(0.37), black_box(41.9)).expect("tight ticks");
        })
    });
}

fn bench_significant_digits(c: &mut Criterion) {
    let values: Vec<f64> = (0..256).map(|i| f64::from(i) * 0.013_7 - 1.5).collect();

    c.bench_function("format_significant_digits_256", |b| {
        b.iter(|| {
            for value in &values {
                let _ = format_significant_digits(black_box(*value), 3).expect("format");
            }
        })
    });
}

fn bench_full_layout(c: &mut Criterion) {
    let style = ChartStyle::default();
    let metrics = MonoFontMetrics;
    let engine = LayoutEngine::new(&style, &metrics);
    let x_range = AxisRange::new(0.0, 10.0).expect("x range");
    let y_range = AxisRange::new(0.0, 1.0).expect("y range");

    c.bench_function("layout_500x350", |b| {
        b.iter(|| {
            let _ = engine
                .layout(black_box(Viewport::new(500, 350)), x_range, y_range)
                .expect("layout");
        })
    });
}

criterion_group!(
    benches,
    bench_nice_number,
    bench_tick_generation,
    bench_significant_digits,
    bench_full_layout
);
criterion_main!(benches);
