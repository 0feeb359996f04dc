use crate::core::Viewport;
use crate::error::{DashboardError, DashboardResult};

use super::{HeatmapLayoutConfig, InteractionBehavior, SankeyLayoutConfig, StarLayoutConfig};

fn ensure_ratio(value: f64, field: &str) -> DashboardResult<()> {
    if !value.is_finite() || !(0.0..=1.0).contains(&value) {
        return Err(DashboardError::InvalidData(format!(
            "{field} must be finite and in [0, 1]"
        )));
    }
    Ok(())
}

fn ensure_positive(value: f64, field: &str) -> DashboardResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(DashboardError::InvalidData(format!(
            "{field} must be finite and > 0"
        )));
    }
    Ok(())
}

fn ensure_non_negative(value: f64, field: &str) -> DashboardResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(DashboardError::InvalidData(format!(
            "{field} must be finite and >= 0"
        )));
    }
    Ok(())
}

pub(super) fn validate_heatmap_layout(config: HeatmapLayoutConfig) -> DashboardResult<()> {
    ensure_ratio(config.left_ratio, "heatmap left_ratio")?;
    ensure_ratio(config.top_ratio, "heatmap top_ratio")?;
    ensure_ratio(config.width_ratio, "heatmap width_ratio")?;
    ensure_ratio(config.height_ratio, "heatmap height_ratio")?;
    if !config.band_padding.is_finite() || !(0.0..1.0).contains(&config.band_padding) {
        return Err(DashboardError::InvalidData(
            "heatmap band_padding must be finite and in [0, 1)".to_owned(),
        ));
    }
    ensure_positive(config.severity_max, "heatmap severity_max")?;
    for (value, field) in [
        (config.label_font_px, "heatmap label_font_px"),
        (config.axis_title_font_px, "heatmap axis_title_font_px"),
        (config.title_font_px, "heatmap title_font_px"),
        (config.caption_font_px, "heatmap caption_font_px"),
    ] {
        ensure_positive(value, field)?;
    }
    for (value, field) in [
        (config.genre_label_offset_px, "heatmap genre_label_offset_px"),
        (
            config.condition_label_offset_px,
            "heatmap condition_label_offset_px",
        ),
        (config.y_axis_title_x_px, "heatmap y_axis_title_x_px"),
        (config.x_axis_title_offset_px, "heatmap x_axis_title_offset_px"),
        (config.title_offset_px, "heatmap title_offset_px"),
        (config.caption_offset_px, "heatmap caption_offset_px"),
        (config.genre_label_hit_px, "heatmap genre_label_hit_px"),
        (config.condition_label_hit_px, "heatmap condition_label_hit_px"),
    ] {
        ensure_non_negative(value, field)?;
    }
    Ok(())
}

pub(super) fn validate_star_layout(config: StarLayoutConfig) -> DashboardResult<()> {
    ensure_ratio(config.center_x_ratio, "star center_x_ratio")?;
    ensure_ratio(config.center_y_ratio, "star center_y_ratio")?;
    ensure_ratio(config.legend_x_ratio, "star legend_x_ratio")?;
    ensure_ratio(config.legend_y_ratio, "star legend_y_ratio")?;
    ensure_ratio(config.title_y_ratio, "star title_y_ratio")?;
    ensure_positive(config.axis_radius_ratio, "star axis_radius_ratio")?;
    ensure_positive(config.polygon_range_ratio, "star polygon_range_ratio")?;
    ensure_positive(config.label_radius_factor, "star label_radius_factor")?;
    ensure_positive(config.label_font_px, "star label_font_px")?;
    ensure_positive(config.polygon_stroke_width, "star polygon_stroke_width")?;
    ensure_positive(config.legend_swatch_px, "star legend_swatch_px")?;
    ensure_positive(config.legend_font_px, "star legend_font_px")?;
    ensure_positive(config.title_font_px, "star title_font_px")?;
    ensure_non_negative(config.legend_row_px, "star legend_row_px")
}

pub(super) fn validate_sankey_layout(
    config: SankeyLayoutConfig,
    viewport: Viewport,
) -> DashboardResult<()> {
    ensure_ratio(config.extent_x0_ratio, "sankey extent_x0_ratio")?;
    ensure_ratio(config.extent_y0_ratio, "sankey extent_y0_ratio")?;
    ensure_ratio(config.extent_x1_ratio, "sankey extent_x1_ratio")?;
    ensure_ratio(config.extent_y1_ratio, "sankey extent_y1_ratio")?;
    if config.extent_x1_ratio <= config.extent_x0_ratio
        || config.extent_y1_ratio <= config.extent_y0_ratio
    {
        return Err(DashboardError::InvalidData(
            "sankey extent must have positive width and height".to_owned(),
        ));
    }
    ensure_positive(config.node_width_px, "sankey node_width_px")?;
    let extent_width =
        viewport.x_at(config.extent_x1_ratio) - viewport.x_at(config.extent_x0_ratio);
    if config.node_width_px > extent_width {
        return Err(DashboardError::InvalidData(
            "sankey node_width_px must fit inside the extent".to_owned(),
        ));
    }
    ensure_non_negative(config.node_padding_px, "sankey node_padding_px")?;
    ensure_positive(config.min_link_width_px, "sankey min_link_width_px")?;
    ensure_non_negative(config.label_offset_px, "sankey label_offset_px")?;
    ensure_positive(config.label_font_px, "sankey label_font_px")?;
    ensure_positive(config.heading_font_px, "sankey heading_font_px")?;
    ensure_positive(config.title_font_px, "sankey title_font_px")?;
    for (value, field) in [
        (config.heading_y_px, "sankey heading_y_px"),
        (config.genre_heading_offset_px, "sankey genre_heading_offset_px"),
        (
            config.effect_heading_offset_px,
            "sankey effect_heading_offset_px",
        ),
        (config.title_y_px, "sankey title_y_px"),
    ] {
        ensure_non_negative(value, field)?;
    }
    Ok(())
}

pub(super) fn validate_interaction_behavior(behavior: InteractionBehavior) -> DashboardResult<()> {
    ensure_non_negative(behavior.hint_timeout_seconds, "hint_timeout_seconds")?;
    ensure_positive(behavior.hint_font_px, "hint_font_px")?;
    if !behavior.magnifier_factor.is_finite() || behavior.magnifier_factor < 1.0 {
        return Err(DashboardError::InvalidData(
            "magnifier_factor must be finite and >= 1".to_owned(),
        ));
    }
    ensure_positive(behavior.magnifier_lens_radius_px, "magnifier_lens_radius_px")?;
    let opacity = behavior.link_opacity;
    ensure_ratio(opacity.default, "link_opacity.default")?;
    ensure_ratio(opacity.active, "link_opacity.active")?;
    ensure_ratio(opacity.dimmed, "link_opacity.dimmed")
}
