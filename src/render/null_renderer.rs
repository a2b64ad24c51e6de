use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless layout inspection.
///
/// It still validates frame content so tests can catch invalid geometry
/// without a pixel backend.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_line_count: usize,
    pub last_rect_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.last_line_count = frame.lines().count();
        self.last_rect_count = frame.rects().count();
        self.last_text_count = frame.texts().count();
        Ok(())
    }
}
