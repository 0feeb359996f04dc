use serde::{Deserialize, Serialize};

use crate::core::Point;
use crate::error::{DashboardError, DashboardResult};

use super::{
    CirclePrimitive, LinePrimitive, LinkPrimitive, PolygonPrimitive, RectPrimitive, TextPrimitive,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    Heatmap,
    StarChart,
    Sankey,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Heatmap, ChartKind::StarChart, ChartKind::Sankey];
}

/// Primitives drawn inside a circular clip, on top of the owning scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClippedLayer {
    pub clip_center: Point,
    pub clip_radius: f64,
    pub lines: Vec<LinePrimitive>,
    pub polygons: Vec<PolygonPrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl ClippedLayer {
    #[must_use]
    pub fn new(clip_center: Point, clip_radius: f64) -> Self {
        Self {
            clip_center,
            clip_radius,
            lines: Vec::new(),
            polygons: Vec::new(),
            texts: Vec::new(),
        }
    }

    pub fn validate(&self) -> DashboardResult<()> {
        if !self.clip_center.is_finite() || !self.clip_radius.is_finite() || self.clip_radius <= 0.0
        {
            return Err(DashboardError::InvalidData(
                "clip circle must be finite with radius > 0".to_owned(),
            ));
        }
        for line in &self.lines {
            line.validate()?;
        }
        for polygon in &self.polygons {
            polygon.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        Ok(())
    }
}

/// Immutable drawing description of one chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartScene {
    pub kind: ChartKind,
    pub rects: Vec<RectPrimitive>,
    pub lines: Vec<LinePrimitive>,
    pub polygons: Vec<PolygonPrimitive>,
    pub links: Vec<LinkPrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
    pub clipped: Vec<ClippedLayer>,
}

impl ChartScene {
    #[must_use]
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            rects: Vec::new(),
            lines: Vec::new(),
            polygons: Vec::new(),
            links: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
            clipped: Vec::new(),
        }
    }

    #[must_use]
    pub fn primitive_count(&self) -> usize {
        self.rects.len()
            + self.lines.len()
            + self.polygons.len()
            + self.links.len()
            + self.circles.len()
            + self.texts.len()
            + self
                .clipped
                .iter()
                .map(|layer| layer.lines.len() + layer.polygons.len() + layer.texts.len())
                .sum::<usize>()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitive_count() == 0
    }

    /// First text primitive with exactly this content.
    #[must_use]
    pub fn find_text(&self, text: &str) -> Option<&TextPrimitive> {
        self.texts.iter().find(|primitive| primitive.text == text)
    }

    pub fn validate(&self) -> DashboardResult<()> {
        for rect in &self.rects {
            rect.validate()?;
        }
        for line in &self.lines {
            line.validate()?;
        }
        for polygon in &self.polygons {
            polygon.validate()?;
        }
        for link in &self.links {
            link.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }
        for layer in &self.clipped {
            layer.validate()?;
        }
        Ok(())
    }
}
