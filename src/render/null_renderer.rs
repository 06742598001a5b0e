use crate::core::Viewport;
use crate::error::TimelineResult;
use crate::render::{RenderFrame, Renderer};

/// Headless renderer used by tests and embedders without a drawing surface.
///
/// It still validates frame content so tests catch invalid geometry before a
/// real backend sees it.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub surface: Viewport,
    pub render_count: usize,
    pub last_rect_count: usize,
    pub last_line_count: usize,
    pub last_text_count: usize,
}

impl NullRenderer {
    #[must_use]
    pub fn with_surface(width: u32, height: u32) -> Self {
        Self {
            surface: Viewport::new(width, height),
            ..Self::default()
        }
    }

    pub fn set_surface(&mut self, width: u32, height: u32) {
        self.surface = Viewport::new(width, height);
    }
}

impl Renderer for NullRenderer {
    fn surface_size(&self) -> Viewport {
        self.surface
    }

    fn render(&mut self, frame: &RenderFrame) -> TimelineResult<()> {
        frame.validate()?;
        self.render_count += 1;
        self.last_rect_count = frame.layers.iter().map(|l| l.rects.len()).sum();
        self.last_line_count = frame.layers.iter().map(|l| l.lines.len()).sum();
        self.last_text_count = frame.layers.iter().map(|l| l.texts.len()).sum();
        Ok(())
    }
}
