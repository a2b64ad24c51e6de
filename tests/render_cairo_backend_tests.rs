#![cfg(feature = "cairo-backend")]

use axis_chart::ChartError;
use axis_chart::api::AxisChart;
use axis_chart::core::Viewport;
use axis_chart::render::{
    CairoSurface, FontMetrics, FontSpec, PangoFontMetrics, Rasterizer, TextRotation,
};
use cairo::{Context, Format, ImageSurface};

fn reference_chart(viewport: Viewport) -> AxisChart {
    let mut chart = AxisChart::new(viewport).expect("chart");
    chart.set_x_range(0.0, 10.0).expect("x range");
    chart.set_y_range(0.0, 1.0).expect("y range");
    chart
}

#[test]
fn cairo_surface_rejects_invalid_size() {
    let err = CairoSurface::new(Viewport::new(0, 480)).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidViewport { .. }));
}

#[test]
fn pango_metrics_report_consistent_extents() {
    let metrics = PangoFontMetrics::new();
    let extent = metrics
        .measure(&FontSpec::regular(14.0), "Y Axis")
        .expect("measure");
    assert!(extent.width > 0);
    assert!(extent.height > 0);
    assert_eq!(extent.ascent + extent.descent, extent.height);

    let wider = metrics
        .measure(&FontSpec::regular(14.0), "Y Axis Y Axis")
        .expect("measure");
    assert!(wider.width > extent.width);
}

#[test]
fn cairo_rasterizer_draws_reference_chart() {
    let viewport = Viewport::new(500, 350);
    let chart = reference_chart(viewport);
    let mut rasterizer = Rasterizer::new(CairoSurface::new(viewport).expect("surface"));
    let layout = chart
        .render_with(&PangoFontMetrics::new(), &mut rasterizer)
        .expect("render");

    let stats = rasterizer.last_stats();
    assert_eq!(stats.rects_drawn, 1);
    assert_eq!(stats.lines_drawn, 14);
    assert_eq!(stats.texts_drawn, 15);
    assert!(!layout.plot_area().is_empty());
    assert!(
        layout
            .frame
            .texts()
            .any(|text| text.rotation == TextRotation::Ccw90)
    );

    let surface = rasterizer.into_surface();
    assert_eq!(surface.backend_name(), "cairo+pango+pangocairo");
    assert!(surface.image_surface().is_some());
}

#[test]
fn cairo_surface_can_draw_on_external_context() {
    let viewport = Viewport::new(600, 320);
    let image = ImageSurface::create(Format::ARgb32, 600, 320).expect("surface");
    let context = Context::new(&image).expect("context");
    let surface = CairoSurface::from_context(context, viewport).expect("wrap context");
    assert!(surface.image_surface().is_none());

    let mut rasterizer = Rasterizer::new(surface);
    reference_chart(viewport)
        .render_with(&PangoFontMetrics::new(), &mut rasterizer)
        .expect("render on context");
    assert!(rasterizer.last_stats().lines_drawn >= 14);
}
