use axis_chart::api::{AxisChart, Chart};
use axis_chart::core::Viewport;
use axis_chart::render::{
    Color, DrawingSurface, FontSpec, LinePrimitive, MonoFontMetrics, NullRenderer, Rasterizer,
    RectPrimitive, RenderFrame, Renderer, TextPrimitive,
};
use axis_chart::{ChartError, ChartResult};

#[derive(Debug, Default)]
struct RecordingSurface {
    calls: Vec<&'static str>,
}

impl DrawingSurface for RecordingSurface {
    fn viewport(&self) -> Viewport {
        Viewport::new(500, 350)
    }

    fn fill_rect(&mut self, _rect: &RectPrimitive) -> ChartResult<()> {
        self.calls.push("rect");
        Ok(())
    }

    fn draw_line(&mut self, _line: &LinePrimitive) -> ChartResult<()> {
        self.calls.push("line");
        Ok(())
    }

    fn draw_text(&mut self, _text: &TextPrimitive) -> ChartResult<()> {
        self.calls.push("text");
        Ok(())
    }
}

fn reference_chart() -> AxisChart {
    let mut chart = AxisChart::new(Viewport::new(500, 350)).expect("chart");
    chart.set_x_range(0.0, 10.0).expect("x range");
    chart.set_y_range(0.0, 1.0).expect("y range");
    chart
}

#[test]
fn null_renderer_counts_axis_primitives() {
    let chart = reference_chart();
    let mut renderer = NullRenderer::default();
    chart
        .render_with(&MonoFontMetrics, &mut renderer)
        .expect("render");

    assert_eq!(renderer.last_rect_count, 1);
    // 6 y ticks + 6 x ticks + 2 axis lines.
    assert_eq!(renderer.last_line_count, 14);
    // Title, two headers, 6 + 6 tick labels.
    assert_eq!(renderer.last_text_count, 15);
}

#[test]
fn rasterizer_replays_commands_in_frame_order() {
    let chart = reference_chart();
    let frame = chart.build_frame(&MonoFontMetrics).expect("frame");
    let mut rasterizer = Rasterizer::new(RecordingSurface::default());
    rasterizer.render(&frame).expect("render");

    let calls = &rasterizer.surface().calls;
    assert_eq!(calls.len(), frame.commands.len());
    assert_eq!(&calls[..4], &["rect", "text", "text", "text"]);
    assert_eq!(&calls[calls.len() - 2..], &["line", "line"]);

    let stats = rasterizer.last_stats();
    assert_eq!(stats.rects_drawn, 1);
    assert_eq!(stats.lines_drawn, 14);
    assert_eq!(stats.texts_drawn, 15);
}

#[test]
fn rasterizer_rejects_mismatched_viewport() {
    let frame = RenderFrame::new(Viewport::new(320, 200)).with_rect(RectPrimitive::new(
        0.0,
        0.0,
        320.0,
        200.0,
        Color::WHITE,
    ));
    let mut rasterizer = Rasterizer::new(RecordingSurface::default());
    let err = rasterizer.render(&frame).expect_err("size mismatch");
    assert!(matches!(err, ChartError::InvalidData(_)));
    assert!(rasterizer.surface().calls.is_empty());
}

#[test]
fn invalid_primitives_fail_validation() {
    let frame = RenderFrame::new(Viewport::new(500, 350))
        .with_line(LinePrimitive::new(0.0, 0.0, f64::NAN, 1.0, 1.0, Color::BLACK));
    let mut renderer = NullRenderer::default();
    assert!(renderer.render(&frame).is_err());

    let frame = RenderFrame::new(Viewport::new(500, 350)).with_text(TextPrimitive::new(
        "",
        1.0,
        1.0,
        FontSpec::regular(12.0),
        Color::BLACK,
    ));
    assert!(frame.validate().is_err());
}

#[test]
fn repeated_renders_are_identical() {
    let chart = reference_chart();
    let first = chart.build_frame(&MonoFontMetrics).expect("first frame");
    let second = chart.build_frame(&MonoFontMetrics).expect("second frame");
    assert_eq!(first, second);
}
