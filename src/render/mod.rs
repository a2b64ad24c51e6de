mod font;
mod frame;
mod mono_font;
mod null_renderer;
mod pixel_surface;
mod primitives;
mod rasterizer;

pub use font::{DEFAULT_FONT_FAMILY, FontMetrics, FontSpec, FontWeight, TextMetrics};
pub use frame::{DrawCommand, RenderFrame};
pub use mono_font::MonoFontMetrics;
pub use null_renderer::NullRenderer;
pub use pixel_surface::PixelSurface;
pub use primitives::{Color, LinePrimitive, RectPrimitive, TextPrimitive, TextRotation};
pub use rasterizer::{RasterStats, Rasterizer};

use crate::core::Viewport;
use crate::error::ChartResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code remains isolated from layout logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}

/// Primitive drawing operations of a pixel backend.
///
/// Coordinates are canvas pixels with the origin at the top-left corner.
pub trait DrawingSurface {
    fn viewport(&self) -> Viewport;

    fn fill_rect(&mut self, rect: &RectPrimitive) -> ChartResult<()>;

    fn draw_line(&mut self, line: &LinePrimitive) -> ChartResult<()>;

    /// Draws a single-line run with its baseline origin at `(text.x, text.y)`,
    /// rotated about that point when `text.rotation` asks for it.
    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()>;
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::{CairoSurface, PangoFontMetrics};
