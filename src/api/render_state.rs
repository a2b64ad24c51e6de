use serde::{Deserialize, Serialize};

use crate::core::{AxisRange, Margins, Scale, TickSet, Viewport};
use crate::render::RenderFrame;

/// Ordered layout phases of one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LayoutPhase {
    Normalize,
    Title,
    XAxisHeader,
    YAxisHeader,
    YAxisTicks,
    XAxisTicks,
    AxisLines,
    FinalScale,
}

impl LayoutPhase {
    pub const ORDER: [Self; 8] = [
        Self::Normalize,
        Self::Title,
        Self::XAxisHeader,
        Self::YAxisHeader,
        Self::YAxisTicks,
        Self::XAxisTicks,
        Self::AxisLines,
        Self::FinalScale,
    ];
}

/// Margins recorded right after a phase finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseSnapshot {
    pub phase: LayoutPhase,
    pub margins: Margins,
}

/// Mutable accumulator threaded through the layout phases.
///
/// One instance per render; it is never shared between passes.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub viewport: Viewport,
    pub margins: Margins,
    pub scale: Scale,
    pub x_range: AxisRange,
    pub y_range: AxisRange,
    pub x_ticks: TickSet,
    pub y_ticks: TickSet,
    /// Pixel row of the Y-axis low value used when placing Y ticks.
    pub y_tick_baseline: i32,
    pub frame: RenderFrame,
    pub phases: Vec<PhaseSnapshot>,
}

impl RenderState {
    #[must_use]
    pub fn new(viewport: Viewport, x_range: AxisRange, y_range: AxisRange) -> Self {
        Self {
            viewport,
            margins: Margins::default(),
            scale: Scale::default(),
            x_range,
            y_range,
            x_ticks: TickSet::default(),
            y_ticks: TickSet::default(),
            y_tick_baseline: viewport.height_px(),
            frame: RenderFrame::new(viewport),
            phases: Vec::with_capacity(LayoutPhase::ORDER.len()),
        }
    }

    pub fn record(&mut self, phase: LayoutPhase) {
        self.phases.push(PhaseSnapshot {
            phase,
            margins: self.margins,
        });
    }
}
