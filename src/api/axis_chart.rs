use tracing::debug;

use crate::core::{AxisRange, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{FontMetrics, RenderFrame, Renderer};

use super::{Chart, ChartLayout, ChartStyle, LayoutEngine};

/// Titled chart frame with two labeled axes and no series.
///
/// Configuration is plain state; every `layout`/`render` call recomputes
/// from scratch, so renders are repeatable and may follow any number of
/// setter calls.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisChart {
    viewport: Viewport,
    style: ChartStyle,
    x_range: AxisRange,
    y_range: AxisRange,
}

impl AxisChart {
    pub fn new(viewport: Viewport) -> ChartResult<Self> {
        Ok(Self {
            viewport: viewport.validate()?,
            ..Self::default()
        })
    }

    pub fn with_style(mut self, style: ChartStyle) -> ChartResult<Self> {
        self.set_style(style)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_ranges(mut self, x_range: AxisRange, y_range: AxisRange) -> Self {
        self.x_range = x_range;
        self.y_range = y_range;
        self
    }

    #[must_use]
    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    #[must_use]
    pub fn x_range(&self) -> AxisRange {
        self.x_range
    }

    #[must_use]
    pub fn y_range(&self) -> AxisRange {
        self.y_range
    }

    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        self.viewport = viewport.validate()?;
        Ok(())
    }

    pub fn set_style(&mut self, style: ChartStyle) -> ChartResult<()> {
        style.validate()?;
        self.style = style;
        Ok(())
    }

    pub fn set_title(&mut self, title: Option<&str>) {
        self.style.title = title.map(str::to_owned);
    }

    pub fn set_x_axis_header(&mut self, header: Option<&str>) {
        self.style.x_axis_header = header.map(str::to_owned);
    }

    pub fn set_y_axis_header(&mut self, header: Option<&str>) {
        self.style.y_axis_header = header.map(str::to_owned);
    }

    /// Bounds may be reversed or equal; layout normalizes them.
    pub fn set_x_range(&mut self, low: f64, high: f64) -> ChartResult<()> {
        self.x_range = AxisRange::new(low, high)?;
        Ok(())
    }

    pub fn set_y_range(&mut self, low: f64, high: f64) -> ChartResult<()> {
        self.y_range = AxisRange::new(low, high)?;
        Ok(())
    }

    pub fn set_x_low(&mut self, low: f64) -> ChartResult<()> {
        self.x_range.low = finite_bound("x low", low)?;
        Ok(())
    }

    pub fn set_x_high(&mut self, high: f64) -> ChartResult<()> {
        self.x_range.high = finite_bound("x high", high)?;
        Ok(())
    }

    pub fn set_y_low(&mut self, low: f64) -> ChartResult<()> {
        self.y_range.low = finite_bound("y low", low)?;
        Ok(())
    }

    pub fn set_y_high(&mut self, high: f64) -> ChartResult<()> {
        self.y_range.high = finite_bound("y high", high)?;
        Ok(())
    }

    /// Runs the full layout pass with `metrics`.
    pub fn layout(&self, metrics: &dyn FontMetrics) -> ChartResult<ChartLayout> {
        LayoutEngine::new(&self.style, metrics).layout(self.viewport, self.x_range, self.y_range)
    }

    /// Lays out with `metrics` and hands the frame to `renderer`.
    pub fn render_with<R: Renderer + ?Sized>(
        &self,
        metrics: &dyn FontMetrics,
        renderer: &mut R,
    ) -> ChartResult<ChartLayout> {
        let layout = self.layout(metrics)?;
        renderer.render(&layout.frame)?;
        debug!(
            commands = layout.frame.commands.len(),
            "rendered axis chart"
        );
        Ok(layout)
    }
}

impl Chart for AxisChart {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn build_frame(&self, metrics: &dyn FontMetrics) -> ChartResult<RenderFrame> {
        Ok(self.layout(metrics)?.frame)
    }
}

fn finite_bound(name: &str, value: f64) -> ChartResult<f64> {
    if !value.is_finite() {
        return Err(ChartError::InvalidData(format!(
            "{name} bound must be finite, got {value}"
        )));
    }
    Ok(value)
}
