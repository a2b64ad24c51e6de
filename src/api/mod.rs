mod axis_chart;
mod axis_label_format;
mod chart;
mod chart_style;
mod layout_engine;
mod line_chart;
mod render_state;

pub use axis_chart::AxisChart;
pub use axis_label_format::AxisLabelFormat;
pub use chart::Chart;
pub use chart_style::ChartStyle;
pub use layout_engine::{ChartLayout, LayoutEngine, PlotArea};
pub use line_chart::LineChart;
pub use render_state::{LayoutPhase, PhaseSnapshot, RenderState};
