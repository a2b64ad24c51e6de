use tracing::trace;

use crate::error::{ChartError, ChartResult};
use crate::render::{DrawCommand, DrawingSurface, RenderFrame, Renderer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RasterStats {
    pub lines_drawn: usize,
    pub rects_drawn: usize,
    pub texts_drawn: usize,
}

/// Replays a [`RenderFrame`] onto a [`DrawingSurface`] in command order.
///
/// Each rasterizer owns its surface; concurrent renders use separate
/// instances.
#[derive(Debug)]
pub struct Rasterizer<S: DrawingSurface> {
    surface: S,
    last_stats: RasterStats,
}

impl<S: DrawingSurface> Rasterizer<S> {
    #[must_use]
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            last_stats: RasterStats::default(),
        }
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn last_stats(&self) -> RasterStats {
        self.last_stats
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }
}

impl<S: DrawingSurface> Renderer for Rasterizer<S> {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        let surface_viewport = self.surface.viewport();
        if surface_viewport != frame.viewport {
            return Err(ChartError::InvalidData(format!(
                "frame is {}x{} but surface is {}x{}",
                frame.viewport.width,
                frame.viewport.height,
                surface_viewport.width,
                surface_viewport.height
            )));
        }

        let mut stats = RasterStats::default();
        for command in &frame.commands {
            match command {
                DrawCommand::Rect(rect) => {
                    self.surface.fill_rect(rect)?;
                    stats.rects_drawn += 1;
                }
                DrawCommand::Line(line) => {
                    self.surface.draw_line(line)?;
                    stats.lines_drawn += 1;
                }
                DrawCommand::Text(text) => {
                    self.surface.draw_text(text)?;
                    stats.texts_drawn += 1;
                }
            }
        }

        trace!(
            lines = stats.lines_drawn,
            rects = stats.rects_drawn,
            texts = stats.texts_drawn,
            "rasterized frame"
        );
        self.last_stats = stats;
        Ok(())
    }
}
