use serde::{Deserialize, Serialize};

use crate::core::{FlowNodeKind, MusicEffect};
use crate::error::DashboardResult;
use crate::render::Color;

/// Colors shared by the three charts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashboardPalette {
    pub improve: Color,
    pub no_effect: Color,
    pub worsen: Color,
    /// Sankey genre nodes and links whose target has no effect color.
    pub neutral_node: Color,
    pub no_data: Color,
    pub axis: Color,
    pub text: Color,
    pub heatmap_low: Color,
    pub heatmap_high: Color,
    pub hint: Color,
}

impl Default for DashboardPalette {
    fn default() -> Self {
        Self {
            improve: Color::from_rgb_hex(0x00aa00),
            no_effect: Color::from_rgb_hex(0xab8400),
            worsen: Color::from_rgb_hex(0xff0000),
            neutral_node: Color::from_rgb_hex(0x999999),
            no_data: Color::from_rgb_hex(0xcccccc),
            axis: Color::from_rgb_hex(0xcccccc),
            text: Color::BLACK,
            heatmap_low: Color::WHITE,
            heatmap_high: Color::BLACK,
            hint: Color::from_rgb_hex(0x555555),
        }
    }
}

impl DashboardPalette {
    #[must_use]
    pub fn effect(&self, effect: MusicEffect) -> Color {
        match effect {
            MusicEffect::Improve => self.improve,
            MusicEffect::NoEffect => self.no_effect,
            MusicEffect::Worsen => self.worsen,
        }
    }

    #[must_use]
    pub fn flow_node(&self, kind: FlowNodeKind) -> Color {
        match kind {
            FlowNodeKind::Genre => self.neutral_node,
            FlowNodeKind::Effect(effect) => self.effect(effect),
        }
    }

    /// Grayscale severity ramp; `None` maps to the "no data" color.
    #[must_use]
    pub fn severity(&self, value: Option<f64>, severity_max: f64) -> Color {
        match value {
            Some(value) => self.heatmap_low.lerp(self.heatmap_high, value / severity_max),
            None => self.no_data,
        }
    }

    pub fn validate(&self) -> DashboardResult<()> {
        for color in [
            self.improve,
            self.no_effect,
            self.worsen,
            self.neutral_node,
            self.no_data,
            self.axis,
            self.text,
            self.heatmap_low,
            self.heatmap_high,
            self.hint,
        ] {
            color.validate()?;
        }
        Ok(())
    }
}
