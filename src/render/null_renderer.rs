use crate::error::DashboardResult;
use crate::render::{RenderFrame, Renderer};

/// Renderer that only validates and counts, for tests and headless hosts.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_scene_count: usize,
    pub last_primitive_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> DashboardResult<()> {
        frame.validate()?;
        self.render_count += 1;
        self.last_scene_count = frame.scenes.len();
        self.last_primitive_count = frame.primitive_count();
        Ok(())
    }
}
