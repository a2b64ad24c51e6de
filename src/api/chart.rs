use crate::core::Viewport;
use crate::error::ChartResult;
use crate::render::{FontMetrics, MonoFontMetrics, PixelSurface, Rasterizer, RenderFrame, Renderer};

/// Capability shared by every chart variant: lay itself out into draw
/// commands and render them.
pub trait Chart {
    fn viewport(&self) -> Viewport;

    /// Builds the ordered draw commands, measuring text with `metrics`.
    fn build_frame(&self, metrics: &dyn FontMetrics) -> ChartResult<RenderFrame>;

    /// Renders into a fresh [`PixelSurface`] with the built-in bitmap fonts.
    fn render(&self) -> ChartResult<PixelSurface> {
        let frame = self.build_frame(&MonoFontMetrics)?;
        let mut rasterizer = Rasterizer::new(PixelSurface::new(self.viewport())?);
        rasterizer.render(&frame)?;
        Ok(rasterizer.into_surface())
    }
}
