use tracing::{trace, warn};

use crate::core::{AxisRange, DataPoint, Viewport};
use crate::error::ChartResult;
use crate::render::{Color, FontMetrics, LinePrimitive, RenderFrame};

use super::{AxisChart, Chart, ChartLayout};

const DEFAULT_SERIES_COLOR: Color = Color::from_rgb8(33, 99, 204);
const DEFAULT_STROKE_WIDTH: f64 = 1.0;

/// Axis chart plotting one series as a polyline.
///
/// With autoscale on, the axis ranges are fitted to the finite series
/// points before layout; otherwise the configured ranges are used and
/// points outside them are drawn unclipped.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    axis: AxisChart,
    points: Vec<DataPoint>,
    series_color: Color,
    stroke_width: f64,
    autoscale: bool,
}

impl LineChart {
    pub fn new(viewport: Viewport) -> ChartResult<Self> {
        Ok(Self::from_axis(AxisChart::new(viewport)?))
    }

    #[must_use]
    pub fn from_axis(axis: AxisChart) -> Self {
        Self {
            axis,
            points: Vec::new(),
            series_color: DEFAULT_SERIES_COLOR,
            stroke_width: DEFAULT_STROKE_WIDTH,
            autoscale: true,
        }
    }

    #[must_use]
    pub fn with_points(mut self, points: Vec<DataPoint>) -> Self {
        self.points = points;
        self
    }

    pub fn with_series_color(mut self, color: Color) -> ChartResult<Self> {
        color.validate()?;
        self.series_color = color;
        Ok(self)
    }

    #[must_use]
    pub fn with_autoscale(mut self, autoscale: bool) -> Self {
        self.autoscale = autoscale;
        self
    }

    #[must_use]
    pub fn axis(&self) -> &AxisChart {
        &self.axis
    }

    pub fn axis_mut(&mut self) -> &mut AxisChart {
        &mut self.axis
    }

    #[must_use]
    pub fn points(&self) -> &[DataPoint] {
        &self.points
    }

    pub fn set_points(&mut self, points: Vec<DataPoint>) {
        self.points = points;
    }

    pub fn push_point(&mut self, point: DataPoint) {
        self.points.push(point);
    }

    #[must_use]
    pub fn series_color(&self) -> Color {
        self.series_color
    }

    #[must_use]
    pub fn autoscale(&self) -> bool {
        self.autoscale
    }

    /// X and Y bounds of the finite series points, if there are any.
    #[must_use]
    pub fn series_bounds(&self) -> Option<(AxisRange, AxisRange)> {
        let mut finite = self.points.iter().filter(|point| point.is_finite());
        let first = finite.next()?;
        let seed = (
            AxisRange {
                low: first.x,
                high: first.x,
            },
            AxisRange {
                low: first.y,
                high: first.y,
            },
        );
        Some(finite.fold(seed, |(x, y), point| {
            (
                x.widened_to(point.x, point.x),
                y.widened_to(point.y, point.y),
            )
        }))
    }

    /// Lays out the axes and appends the series polyline to the frame.
    pub fn layout(&self, metrics: &dyn FontMetrics) -> ChartResult<ChartLayout> {
        let mut layout = match self.series_bounds().filter(|_| self.autoscale) {
            Some((x_range, y_range)) => self
                .axis
                .clone()
                .with_ranges(x_range, y_range)
                .layout(metrics)?,
            None => self.axis.layout(metrics)?,
        };

        let segments = self.series_segments(&layout);
        let drawn = segments.len();
        for segment in segments {
            layout.frame.push_line(segment);
        }
        trace!(points = self.points.len(), segments = drawn, "appended line series");
        Ok(layout)
    }

    fn series_segments(&self, layout: &ChartLayout) -> Vec<LinePrimitive> {
        let mut segments = Vec::with_capacity(self.points.len().saturating_sub(1));
        let mut previous: Option<(f64, f64)> = None;
        let mut skipped = 0_usize;
        for point in &self.points {
            if !point.is_finite() {
                skipped += 1;
                previous = None;
                continue;
            }
            let current = (layout.x_to_pixel(point.x), layout.y_to_pixel(point.y));
            if let Some((x1, y1)) = previous {
                segments.push(LinePrimitive::new(
                    x1,
                    y1,
                    current.0,
                    current.1,
                    self.stroke_width,
                    self.series_color,
                ));
            }
            previous = Some(current);
        }
        if skipped > 0 {
            warn!(skipped, "skipped non-finite series points");
        }
        segments
    }
}

impl Chart for LineChart {
    fn viewport(&self) -> Viewport {
        self.axis.viewport()
    }

    fn build_frame(&self, metrics: &dyn FontMetrics) -> ChartResult<RenderFrame> {
        Ok(self.layout(metrics)?.frame)
    }
}
