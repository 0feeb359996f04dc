use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{DashboardError, DashboardResult};
use crate::interaction::LinkOpacity;

use super::DashboardPalette;
use super::validation::{
    validate_heatmap_layout, validate_interaction_behavior, validate_sankey_layout,
    validate_star_layout,
};

/// Heatmap placement. `*_ratio` fields are fractions of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeatmapLayoutConfig {
    pub left_ratio: f64,
    pub top_ratio: f64,
    pub width_ratio: f64,
    pub height_ratio: f64,
    pub band_padding: f64,
    /// Severity mapped to the darkest cell color.
    pub severity_max: f64,
    pub label_font_px: f64,
    pub axis_title_font_px: f64,
    pub title_font_px: f64,
    pub caption_font_px: f64,
    pub genre_label_offset_px: f64,
    pub condition_label_offset_px: f64,
    pub y_axis_title_x_px: f64,
    pub x_axis_title_offset_px: f64,
    pub title_offset_px: f64,
    pub caption_offset_px: f64,
    /// Depth of the clickable strip under genre labels.
    pub genre_label_hit_px: f64,
    /// Width of the clickable strip left of condition labels.
    pub condition_label_hit_px: f64,
}

impl Default for HeatmapLayoutConfig {
    fn default() -> Self {
        Self {
            left_ratio: 0.05,
            top_ratio: 0.55,
            width_ratio: 0.55,
            height_ratio: 0.30,
            band_padding: 0.05,
            severity_max: 10.0,
            label_font_px: 12.0,
            axis_title_font_px: 14.0,
            title_font_px: 18.0,
            caption_font_px: 15.0,
            genre_label_offset_px: 15.0,
            condition_label_offset_px: 10.0,
            y_axis_title_x_px: 10.0,
            x_axis_title_offset_px: 70.0,
            title_offset_px: 110.0,
            caption_offset_px: 130.0,
            genre_label_hit_px: 60.0,
            condition_label_hit_px: 90.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarLayoutConfig {
    pub center_x_ratio: f64,
    pub center_y_ratio: f64,
    /// Axis line length as a fraction of viewport height.
    pub axis_radius_ratio: f64,
    /// Radius reached by a dimension at its dataset maximum.
    pub polygon_range_ratio: f64,
    pub label_radius_factor: f64,
    pub label_font_px: f64,
    pub polygon_stroke_width: f64,
    pub legend_x_ratio: f64,
    pub legend_y_ratio: f64,
    pub legend_row_px: f64,
    pub legend_swatch_px: f64,
    pub legend_font_px: f64,
    pub title_y_ratio: f64,
    pub title_font_px: f64,
}

impl Default for StarLayoutConfig {
    fn default() -> Self {
        Self {
            center_x_ratio: 0.75,
            center_y_ratio: 0.75,
            axis_radius_ratio: 0.20,
            polygon_range_ratio: 0.27,
            label_radius_factor: 1.2,
            label_font_px: 10.0,
            polygon_stroke_width: 2.0,
            legend_x_ratio: 0.85,
            legend_y_ratio: 0.70,
            legend_row_px: 30.0,
            legend_swatch_px: 12.0,
            legend_font_px: 12.0,
            title_y_ratio: 0.95,
            title_font_px: 18.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SankeyLayoutConfig {
    pub extent_x0_ratio: f64,
    pub extent_y0_ratio: f64,
    pub extent_x1_ratio: f64,
    pub extent_y1_ratio: f64,
    pub node_width_px: f64,
    pub node_padding_px: f64,
    pub min_link_width_px: f64,
    pub label_offset_px: f64,
    pub label_font_px: f64,
    pub heading_y_px: f64,
    pub heading_font_px: f64,
    pub genre_heading_offset_px: f64,
    pub effect_heading_offset_px: f64,
    pub title_y_px: f64,
    pub title_font_px: f64,
}

impl Default for SankeyLayoutConfig {
    fn default() -> Self {
        Self {
            extent_x0_ratio: 0.05,
            extent_y0_ratio: 0.05,
            extent_x1_ratio: 0.95,
            extent_y1_ratio: 0.50,
            node_width_px: 20.0,
            node_padding_px: 10.0,
            min_link_width_px: 1.0,
            label_offset_px: 30.0,
            label_font_px: 12.0,
            heading_y_px: 50.0,
            heading_font_px: 16.0,
            genre_heading_offset_px: 50.0,
            effect_heading_offset_px: 70.0,
            title_y_px: 50.0,
            title_font_px: 18.0,
        }
    }
}

/// Timing and emphasis knobs of the interactive behaviours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionBehavior {
    pub hint_timeout_seconds: f64,
    pub hint_font_px: f64,
    pub magnifier_factor: f64,
    pub magnifier_lens_radius_px: f64,
    pub link_opacity: LinkOpacity,
}

impl Default for InteractionBehavior {
    fn default() -> Self {
        Self {
            hint_timeout_seconds: 10.0,
            hint_font_px: 13.0,
            magnifier_factor: 2.0,
            magnifier_lens_radius_px: 80.0,
            link_opacity: LinkOpacity::default(),
        }
    }
}

/// Per-session dashboard configuration.
///
/// One value is passed into every chart constructor; nothing is read from
/// process globals. The type is serializable so hosts can persist a setup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub heatmap: HeatmapLayoutConfig,
    #[serde(default)]
    pub star: StarLayoutConfig,
    #[serde(default)]
    pub sankey: SankeyLayoutConfig,
    #[serde(default)]
    pub interaction: InteractionBehavior,
    #[serde(default)]
    pub palette: DashboardPalette,
}

impl DashboardConfig {
    /// Creates a config with default layout fractions for `viewport`.
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            heatmap: HeatmapLayoutConfig::default(),
            star: StarLayoutConfig::default(),
            sankey: SankeyLayoutConfig::default(),
            interaction: InteractionBehavior::default(),
            palette: DashboardPalette::default(),
        }
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    #[must_use]
    pub fn with_heatmap_layout(mut self, heatmap: HeatmapLayoutConfig) -> Self {
        self.heatmap = heatmap;
        self
    }

    #[must_use]
    pub fn with_star_layout(mut self, star: StarLayoutConfig) -> Self {
        self.star = star;
        self
    }

    #[must_use]
    pub fn with_sankey_layout(mut self, sankey: SankeyLayoutConfig) -> Self {
        self.sankey = sankey;
        self
    }

    #[must_use]
    pub fn with_interaction_behavior(mut self, interaction: InteractionBehavior) -> Self {
        self.interaction = interaction;
        self
    }

    /// Sets the instructional hint timeout.
    #[must_use]
    pub fn with_hint_timeout(mut self, seconds: f64) -> Self {
        self.interaction.hint_timeout_seconds = seconds;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: DashboardPalette) -> Self {
        self.palette = palette;
        self
    }

    pub fn validate(&self) -> DashboardResult<()> {
        self.viewport.ensure_valid()?;
        validate_heatmap_layout(self.heatmap)?;
        validate_star_layout(self.star)?;
        validate_sankey_layout(self.sankey, self.viewport)?;
        validate_interaction_behavior(self.interaction)?;
        self.palette.validate()
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(self) -> DashboardResult<String> {
        serde_json::to_string_pretty(&self)
            .map_err(|e| DashboardError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> DashboardResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| DashboardError::InvalidData(format!("failed to parse config: {e}")))
    }
}
