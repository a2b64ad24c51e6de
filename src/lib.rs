//! axis-chart-rs: axis layout and rasterization for simple 2D charts.
//!
//! The crate picks "nice" tick values, lays out titles, axis headers and
//! tick labels around a plot rectangle, and turns the result into ordered
//! draw commands. A headless pixel surface and an optional Cairo/Pango
//! backend (`cairo-backend` feature) rasterize those commands.

pub mod api;
pub mod core;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{AxisChart, Chart, ChartLayout, ChartStyle, LayoutEngine, LineChart};
pub use error::{ChartError, ChartResult};
