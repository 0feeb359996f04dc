use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::DashboardResult;

use super::{ChartKind, ChartScene};

/// Backend-agnostic description of the whole dashboard canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub scenes: Vec<ChartScene>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            scenes: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_scene(mut self, scene: ChartScene) -> Self {
        self.scenes.push(scene);
        self
    }

    #[must_use]
    pub fn scene(&self, kind: ChartKind) -> Option<&ChartScene> {
        self.scenes.iter().find(|scene| scene.kind == kind)
    }

    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.scenes.iter().map(ChartScene::primitive_count).sum()
    }

    pub fn validate(&self) -> DashboardResult<()> {
        self.viewport.ensure_valid()?;
        for scene in &self.scenes {
            scene.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scenes.iter().all(ChartScene::is_empty)
    }
}
