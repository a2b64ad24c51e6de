use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{AxisRange, Margins, Scale, Tick, TickSet, Viewport};
use crate::error::ChartResult;
use crate::render::{
    FontMetrics, FontSpec, LinePrimitive, RectPrimitive, RenderFrame, TextMetrics, TextPrimitive,
};

use super::render_state::{LayoutPhase, PhaseSnapshot, RenderState};
use super::{AxisLabelFormat, ChartStyle};

/// Plot rectangle left inside the final margins, in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotArea {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PlotArea {
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    #[must_use]
    pub fn right(self) -> i32 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> i32 {
        self.y + self.height
    }
}

/// Result of one layout pass: final geometry plus the ordered draw commands.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub viewport: Viewport,
    pub margins: Margins,
    pub scale: Scale,
    /// Displayed X range (normalized).
    pub x_range: AxisRange,
    /// Displayed Y range (normalized, widened to the loose ticks).
    pub y_range: AxisRange,
    pub x_ticks: TickSet,
    pub y_ticks: TickSet,
    /// Pixel row the Y ticks were placed against.
    pub y_tick_baseline: i32,
    pub phases: Vec<PhaseSnapshot>,
    pub frame: RenderFrame,
}

impl ChartLayout {
    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        PlotArea {
            x: self.margins.left,
            y: self.margins.top,
            width: self.margins.plot_width(self.viewport),
            height: self.margins.plot_height(self.viewport),
        }
    }

    /// Horizontal pixel position of a data-space X value.
    #[must_use]
    pub fn x_to_pixel(&self, value: f64) -> f64 {
        f64::from(self.margins.left) + (value - self.x_range.low) * self.scale.pixels_per_unit_x
    }

    /// Vertical pixel position of a data-space Y value, on the same mapping
    /// as the Y tick marks.
    #[must_use]
    pub fn y_to_pixel(&self, value: f64) -> f64 {
        f64::from(self.y_tick_baseline) - (value - self.y_range.low) * self.scale.pixels_per_unit_y
    }

    /// Margins recorded after `phase`, if it ran.
    #[must_use]
    pub fn margins_after(&self, phase: LayoutPhase) -> Option<Margins> {
        self.phases
            .iter()
            .find(|snapshot| snapshot.phase == phase)
            .map(|snapshot| snapshot.margins)
    }
}

/// Runs the ordered margin/scale phases of one chart render.
///
/// Each phase measures text through the supplied [`FontMetrics`], grows the
/// margins and appends its draw commands. Phase order is fixed: later phases
/// depend on the margins earlier phases reserved.
pub struct LayoutEngine<'a> {
    style: &'a ChartStyle,
    metrics: &'a dyn FontMetrics,
}

impl<'a> LayoutEngine<'a> {
    #[must_use]
    pub fn new(style: &'a ChartStyle, metrics: &'a dyn FontMetrics) -> Self {
        Self { style, metrics }
    }

    pub fn layout(
        &self,
        viewport: Viewport,
        x_range: AxisRange,
        y_range: AxisRange,
    ) -> ChartResult<ChartLayout> {
        let viewport = viewport.validate()?;
        self.style.validate()?;

        let mut state = RenderState::new(viewport, x_range, y_range);
        self.normalize_ranges(&mut state);
        self.title_phase(&mut state)?;
        self.x_axis_header_phase(&mut state)?;
        self.y_axis_header_phase(&mut state)?;
        self.y_axis_ticks_phase(&mut state)?;
        self.x_axis_ticks_phase(&mut state)?;
        self.axis_lines_phase(&mut state);
        self.final_scale_phase(&mut state);

        debug!(
            width = viewport.width,
            height = viewport.height,
            top = state.margins.top,
            left = state.margins.left,
            right = state.margins.right,
            bottom = state.margins.bottom,
            commands = state.frame.commands.len(),
            "chart layout complete"
        );

        Ok(ChartLayout {
            viewport,
            margins: state.margins,
            scale: state.scale,
            x_range: state.x_range,
            y_range: state.y_range,
            x_ticks: state.x_ticks,
            y_ticks: state.y_ticks,
            y_tick_baseline: state.y_tick_baseline,
            phases: state.phases,
            frame: state.frame,
        })
    }

    fn normalize_ranges(&self, state: &mut RenderState) {
        let x_range = state.x_range.normalized();
        let y_range = state.y_range.normalized();
        if x_range != state.x_range {
            debug!(low = state.x_range.low, high = state.x_range.high, "normalized x range");
        }
        if y_range != state.y_range {
            debug!(low = state.y_range.low, high = state.y_range.high, "normalized y range");
        }
        state.x_range = x_range;
        state.y_range = y_range;

        state.frame.push_rect(RectPrimitive::new(
            0.0,
            0.0,
            f64::from(state.viewport.width),
            f64::from(state.viewport.height),
            self.style.background_color,
        ));
        self.finish_phase(state, LayoutPhase::Normalize);
    }

    fn title_phase(&self, state: &mut RenderState) -> ChartResult<()> {
        if let Some(title) = self.style.visible_title() {
            let font = &self.style.title_font;
            let metrics = self.measure(font, title)?;
            let x = (state.viewport.width_px() - metrics.width) / 2;
            let y = state.margins.top + metrics.height - metrics.descent;
            state.frame.push_text(TextPrimitive::at_pixel(
                title,
                x,
                y,
                font.clone(),
                self.style.title_color,
            ));
            state.margins.top += metrics.height;
        }
        self.finish_phase(state, LayoutPhase::Title);
        Ok(())
    }

    fn x_axis_header_phase(&self, state: &mut RenderState) -> ChartResult<()> {
        if let Some(header) = self.style.visible_x_axis_header() {
            let font = &self.style.axis_header_font;
            let metrics = self.measure(font, header)?;
            let x = (state.viewport.width_px() - metrics.width) / 2;
            let y = state.viewport.height_px() - state.margins.bottom - metrics.descent;
            state.frame.push_text(TextPrimitive::at_pixel(
                header,
                x,
                y,
                font.clone(),
                self.style.title_color,
            ));
            state.margins.bottom += metrics.height;
        }
        self.finish_phase(state, LayoutPhase::XAxisHeader);
        Ok(())
    }

    fn y_axis_header_phase(&self, state: &mut RenderState) -> ChartResult<()> {
        if let Some(header) = self.style.visible_y_axis_header() {
            let font = &self.style.axis_header_font;
            let metrics = self.measure(font, header)?;
            let height = state.viewport.height_px();
            let pivot = (
                f64::from(state.margins.left + metrics.ascent),
                f64::from(height) - f64::from(height - metrics.width) / 2.0,
            );
            state.frame.push_text(TextPrimitive::rotated(
                header,
                pivot,
                font.clone(),
                self.style.title_color,
            ));
            // Rotated text occupies its line height horizontally.
            state.margins.left += metrics.height;
        }
        self.finish_phase(state, LayoutPhase::YAxisHeader);
        Ok(())
    }

    fn y_axis_ticks_phase(&self, state: &mut RenderState) -> ChartResult<()> {
        let values = self
            .style
            .tick_generator()?
            .loose(state.y_range.low, state.y_range.high)?;
        let labels = self.measure_labels(&values, self.style.y_label_format)?;
        if let (Some(first), Some(last)) = (values.first(), values.last()) {
            state.y_range = state.y_range.widened_to(*first, *last);
        }

        let tick_length = self.style.tick_length_px;
        let gap = self.style.tick_label_gap_px;
        // Provisional X tick row reservation; only sizes the vertical scale.
        let provisional_bottom = state.margins.bottom + labels.line_height + tick_length + gap;
        let height = state.viewport.height_px();
        let plot_height = height - state.margins.top - provisional_bottom;
        let vertical_scale = Scale::pixels_per_unit(plot_height, state.y_range);
        state.scale.pixels_per_unit_y = vertical_scale;
        state.y_tick_baseline = height - provisional_bottom;

        let left = state.margins.left;
        let mark_start = left + labels.max_width + gap;
        for (tick, extent) in labels.ticks.ticks().iter().zip(&labels.extents) {
            let y = (f64::from(state.y_tick_baseline)
                - (tick.value - state.y_range.low) * vertical_scale) as i32;
            state.frame.push_text(TextPrimitive::at_pixel(
                tick.label.as_str(),
                left + (labels.max_width - extent.width),
                y + extent.ascent / 2,
                self.style.tick_label_font.clone(),
                self.style.title_color,
            ));
            state.frame.push_line(LinePrimitive::pixel(
                mark_start,
                y,
                mark_start + tick_length,
                y,
                self.style.title_color,
            ));
        }

        state.margins.left += labels.max_width + gap + tick_length;
        state.y_ticks = labels.ticks;
        trace!(
            low = state.y_range.low,
            high = state.y_range.high,
            provisional_bottom,
            vertical_scale,
            "placed y ticks"
        );
        self.finish_phase(state, LayoutPhase::YAxisTicks);
        Ok(())
    }

    fn x_axis_ticks_phase(&self, state: &mut RenderState) -> ChartResult<()> {
        let values = self
            .style
            .tick_generator()?
            .tight(state.x_range.low, state.x_range.high)?;
        let labels = self.measure_labels(&values, self.style.x_label_format)?;

        state.margins.right += labels.max_width / 2;
        let plot_width = state.margins.plot_width(state.viewport);
        let horizontal_scale = Scale::pixels_per_unit(plot_width, state.x_range);
        state.scale.pixels_per_unit_x = horizontal_scale;

        let tick_length = self.style.tick_length_px;
        let y = state.viewport.height_px() - state.margins.bottom;
        let mark_bottom = y - labels.line_height;
        for (tick, extent) in labels.ticks.ticks().iter().zip(&labels.extents) {
            let x = (f64::from(state.margins.left)
                + (tick.value - state.x_range.low) * horizontal_scale) as i32;
            state.frame.push_text(TextPrimitive::at_pixel(
                tick.label.as_str(),
                x - extent.width / 2,
                y,
                self.style.tick_label_font.clone(),
                self.style.title_color,
            ));
            state.frame.push_line(LinePrimitive::pixel(
                x,
                mark_bottom,
                x,
                mark_bottom - tick_length,
                self.style.title_color,
            ));
        }

        state.margins.bottom += labels.line_height + tick_length;
        state.x_ticks = labels.ticks;
        trace!(
            low = state.x_range.low,
            high = state.x_range.high,
            horizontal_scale,
            "placed x ticks"
        );
        self.finish_phase(state, LayoutPhase::XAxisTicks);
        Ok(())
    }

    fn axis_lines_phase(&self, state: &mut RenderState) {
        let margins = state.margins;
        let axis_y = state.viewport.height_px() - margins.bottom;
        let axis_right = state.viewport.width_px() - margins.right;
        let color = self.style.axis_line_color;
        state.frame.push_line(LinePrimitive::pixel(
            margins.left,
            margins.top,
            margins.left,
            axis_y,
            color,
        ));
        state.frame.push_line(LinePrimitive::pixel(
            margins.left,
            axis_y,
            axis_right,
            axis_y,
            color,
        ));
        self.finish_phase(state, LayoutPhase::AxisLines);
    }

    fn final_scale_phase(&self, state: &mut RenderState) {
        let plot_width = state.margins.plot_width(state.viewport);
        state.scale.pixels_per_unit_x = Scale::pixels_per_unit(plot_width, state.x_range);
        self.finish_phase(state, LayoutPhase::FinalScale);
    }

    fn finish_phase(&self, state: &mut RenderState, phase: LayoutPhase) {
        state.record(phase);
        trace!(
            ?phase,
            top = state.margins.top,
            left = state.margins.left,
            right = state.margins.right,
            bottom = state.margins.bottom,
            "layout phase done"
        );
    }

    fn measure(&self, font: &FontSpec, text: &str) -> ChartResult<TextMetrics> {
        self.metrics.measure(font, text)
    }

    fn measure_labels(
        &self,
        values: &[f64],
        format: AxisLabelFormat,
    ) -> ChartResult<MeasuredLabels> {
        let font = &self.style.tick_label_font;
        let mut ticks = Vec::with_capacity(values.len());
        let mut extents = Vec::with_capacity(values.len());
        let mut max_width = 0;
        let mut line_height = 0;
        for &value in values {
            let label = format.format(value)?;
            let extent = self.measure(font, &label)?;
            max_width = max_width.max(extent.width);
            line_height = line_height.max(extent.height);
            extents.push(extent);
            ticks.push(Tick { value, label });
        }
        Ok(MeasuredLabels {
            ticks: TickSet::new(ticks),
            extents,
            max_width,
            line_height,
        })
    }
}

struct MeasuredLabels {
    ticks: TickSet,
    extents: Vec<TextMetrics>,
    max_width: i32,
    line_height: i32,
}
