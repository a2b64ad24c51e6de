use approx::assert_abs_diff_eq;
use axis_chart::api::{Chart, LineChart};
use axis_chart::core::{DataPoint, Viewport};
use axis_chart::render::{Color, MonoFontMetrics};

fn series() -> Vec<DataPoint> {
    vec![
        DataPoint::new(1.0, 0.25),
        DataPoint::new(4.0, 0.8),
        DataPoint::new(7.0, 0.4),
        DataPoint::new(9.0, 0.95),
    ]
}

#[test]
fn autoscale_fits_ranges_to_series_bounds() {
    let chart = LineChart::new(Viewport::new(500, 350))
        .expect("chart")
        .with_points(series());

    let (x_range, y_range) = chart.series_bounds().expect("bounds");
    assert_eq!((x_range.low, x_range.high), (1.0, 9.0));
    assert_eq!((y_range.low, y_range.high), (0.25, 0.95));

    let layout = chart.layout(&MonoFontMetrics).expect("layout");
    assert_eq!(layout.x_ticks.first().map(|tick| tick.value), Some(1.0));
    assert_eq!(layout.x_ticks.last().map(|tick| tick.value), Some(9.0));
    assert!(layout.y_range.low <= 0.25);
    assert!(layout.y_range.high >= 0.95);
}

#[test]
fn series_polyline_follows_axis_mapping() {
    let chart = LineChart::new(Viewport::new(500, 350))
        .expect("chart")
        .with_points(series());
    let layout = chart.layout(&MonoFontMetrics).expect("layout");

    let series_lines: Vec<_> = layout
        .frame
        .lines()
        .filter(|line| line.color == chart.series_color())
        .collect();
    assert_eq!(series_lines.len(), 3);

    let first = series_lines[0];
    assert_abs_diff_eq!(first.x1, layout.x_to_pixel(1.0), epsilon = 1e-9);
    assert_abs_diff_eq!(first.y1, layout.y_to_pixel(0.25), epsilon = 1e-9);
    assert_abs_diff_eq!(first.x2, layout.x_to_pixel(4.0), epsilon = 1e-9);

    let plot = layout.plot_area();
    assert!(series_lines.iter().all(|line| {
        line.x1 >= f64::from(plot.x) - 1e-9 && line.x2 <= f64::from(plot.right()) + 1e-9
    }));
}

#[test]
fn non_finite_points_break_the_polyline() {
    let points = vec![
        DataPoint::new(0.0, 1.0),
        DataPoint::new(1.0, 2.0),
        DataPoint::new(2.0, f64::NAN),
        DataPoint::new(3.0, 1.5),
        DataPoint::new(4.0, 3.0),
    ];
    let chart = LineChart::new(Viewport::new(400, 300))
        .expect("chart")
        .with_points(points);

    let (_, y_range) = chart.series_bounds().expect("bounds");
    assert_eq!((y_range.low, y_range.high), (1.0, 3.0));

    let frame = chart.build_frame(&MonoFontMetrics).expect("frame");
    let series_lines = frame
        .lines()
        .filter(|line| line.color == chart.series_color())
        .count();
    assert_eq!(series_lines, 2);
    frame.validate().expect("valid frame");
}

#[test]
fn fixed_ranges_are_kept_without_autoscale() {
    let mut chart = LineChart::new(Viewport::new(500, 350))
        .expect("chart")
        .with_points(series())
        .with_autoscale(false);
    chart.axis_mut().set_x_range(0.0, 20.0).expect("x range");
    chart.axis_mut().set_y_range(-1.0, 1.0).expect("y range");

    let layout = chart.layout(&MonoFontMetrics).expect("layout");
    assert_eq!(layout.x_range.low, 0.0);
    assert_eq!(layout.x_range.high, 20.0);
    assert!(layout.y_range.low <= -1.0);
}

#[test]
fn empty_series_renders_bare_axes() {
    let chart = LineChart::new(Viewport::new(500, 350))
        .expect("chart")
        .with_series_color(Color::rgb(0.8, 0.1, 0.1))
        .expect("color");
    assert!(chart.series_bounds().is_none());

    let surface = chart.render().expect("render");
    assert_eq!((surface.width(), surface.height()), (500, 350));
    assert_eq!(surface.count_pixels(Color::rgb(0.8, 0.1, 0.1)), 0);
}
