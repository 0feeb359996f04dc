use tracing::debug;

use crate::core::{
    BandScale, Condition, Extent, HeatmapAggregate, RecordStore, aggregate_heatmap,
};
use crate::error::DashboardResult;
use crate::interaction::{AxisLabel, HeatmapSortState, OneShotHint};
use crate::render::{ChartKind, ChartScene, RectPrimitive, TextHAlign, TextPrimitive};

use super::{DashboardConfig, HitBox, HitRegion, HitShape};

pub const HEATMAP_TITLE: &str =
    "Severity of Anxiety, Depression, OCD, and Insomnia by Favorite Genre of Music";
pub const HEATMAP_CAPTION: &str = "(Darker = More Severe, Lighter = Less Severe)";
pub const HEATMAP_HINT: &str = "Click a genre or condition label to sort the heatmap";

const Y_AXIS_TITLE: &str = "Severity of Mental Health Condition";
const X_AXIS_TITLE: &str = "Favorite Music Genre";
const HINT_GAP_PX: f64 = 20.0;

/// Mean condition severity per favorite genre, with click-to-sort labels.
#[derive(Debug, Clone)]
pub struct HeatmapChart {
    config: DashboardConfig,
    aggregate: HeatmapAggregate,
    sort: HeatmapSortState,
    hint: OneShotHint,
    x_scale: BandScale<String>,
    y_scale: BandScale<Condition>,
}

impl HeatmapChart {
    pub fn build(store: &RecordStore, config: &DashboardConfig, now: f64) -> DashboardResult<Self> {
        let aggregate = aggregate_heatmap(store.records(), &store.genres(), &Condition::ALL);
        let sort = HeatmapSortState::new(&aggregate);
        let (x_scale, y_scale) = Self::scales_for(config, &sort)?;
        debug!(
            genres = aggregate.genres().len(),
            cells = aggregate.len(),
            "heatmap built"
        );
        Ok(Self {
            config: *config,
            aggregate,
            sort,
            hint: OneShotHint::new(now, config.interaction.hint_timeout_seconds),
            x_scale,
            y_scale,
        })
    }

    fn scales_for(
        config: &DashboardConfig,
        sort: &HeatmapSortState,
    ) -> DashboardResult<(BandScale<String>, BandScale<Condition>)> {
        let plot = Self::plot_extent(config);
        let layout = config.heatmap;
        let x_scale = BandScale::new(sort.genre_order(), (plot.x0, plot.x1), layout.band_padding)?;
        let y_scale = BandScale::new(
            sort.condition_order(),
            (plot.y0, plot.y1),
            layout.band_padding,
        )?;
        Ok((x_scale, y_scale))
    }

    fn plot_extent(config: &DashboardConfig) -> Extent {
        let viewport = config.viewport;
        let layout = config.heatmap;
        let left = viewport.x_at(layout.left_ratio);
        let top = viewport.y_at(layout.top_ratio);
        Extent::new(
            left,
            top,
            left + viewport.x_at(layout.width_ratio),
            top + viewport.y_at(layout.height_ratio),
        )
    }

    #[must_use]
    pub fn aggregate(&self) -> &HeatmapAggregate {
        &self.aggregate
    }

    #[must_use]
    pub fn sort_state(&self) -> &HeatmapSortState {
        &self.sort
    }

    #[must_use]
    pub fn hint(&self) -> OneShotHint {
        self.hint
    }

    #[must_use]
    pub fn x_scale(&self) -> &BandScale<String> {
        &self.x_scale
    }

    #[must_use]
    pub fn y_scale(&self) -> &BandScale<Condition> {
        &self.y_scale
    }

    /// Re-sorts the axis opposite to `label` and re-derives both band scales.
    ///
    /// Aggregates are left untouched. Returns `true` when the scene changed.
    pub fn on_label_clicked(&mut self, label: &AxisLabel, now: f64) -> DashboardResult<bool> {
        let reordered = self.sort.on_label_clicked(label, &self.aggregate)?;
        if reordered {
            let (x_scale, y_scale) = Self::scales_for(&self.config, &self.sort)?;
            self.x_scale = x_scale;
            self.y_scale = y_scale;
        }
        let hint_hidden = self.hint.on_primary_interaction(now);
        Ok(reordered || hint_hidden)
    }

    pub fn on_timer_fired(&mut self, now: f64) -> bool {
        self.hint.on_timer_fired(now)
    }

    /// Clickable strips under genre labels and left of condition labels.
    #[must_use]
    pub fn hit_regions(&self) -> Vec<HitBox> {
        let plot = Self::plot_extent(&self.config);
        let layout = self.config.heatmap;
        let genres = self.x_scale.domain().iter().filter_map(|genre| {
            let band = self.x_scale.band(genre)?;
            Some(HitBox {
                region: HitRegion::HeatmapLabel(AxisLabel::Genre(genre.clone())),
                shape: HitShape::Rect(Extent::new(
                    band.start,
                    plot.y1,
                    band.end(),
                    plot.y1 + layout.genre_label_hit_px,
                )),
            })
        });
        let conditions = self.y_scale.domain().iter().filter_map(|condition| {
            let band = self.y_scale.band(condition)?;
            Some(HitBox {
                region: HitRegion::HeatmapLabel(AxisLabel::Condition(*condition)),
                shape: HitShape::Rect(Extent::new(
                    plot.x0 - layout.condition_label_hit_px,
                    band.start,
                    plot.x0,
                    band.end(),
                )),
            })
        });
        genres.chain(conditions).collect()
    }

    #[must_use]
    pub fn scene(&self) -> ChartScene {
        let mut scene = ChartScene::new(ChartKind::Heatmap);
        let plot = Self::plot_extent(&self.config);
        let layout = self.config.heatmap;
        let palette = self.config.palette;

        for cell in self.aggregate.cells() {
            let (Some(column), Some(row)) = (
                self.x_scale.band(&cell.genre),
                self.y_scale.band(&cell.condition),
            ) else {
                continue;
            };
            scene.rects.push(RectPrimitive::new(
                column.start,
                row.start,
                column.width,
                row.width,
                palette.severity(cell.mean, layout.severity_max),
            ));
        }

        let genre_label_y = plot.y1 + layout.genre_label_offset_px;
        for genre in self.x_scale.domain() {
            if let Some(band) = self.x_scale.band(genre) {
                scene.texts.push(
                    TextPrimitive::new(
                        genre.as_str(),
                        band.center(),
                        genre_label_y,
                        layout.label_font_px,
                        palette.text,
                        TextHAlign::Right,
                    )
                    .rotated(-45.0),
                );
            }
        }
        for condition in self.y_scale.domain() {
            if let Some(band) = self.y_scale.band(condition) {
                scene.texts.push(TextPrimitive::new(
                    condition.column(),
                    plot.x0 - layout.condition_label_offset_px,
                    band.center(),
                    layout.label_font_px,
                    palette.text,
                    TextHAlign::Right,
                ));
            }
        }

        let center_x = (plot.x0 + plot.x1) * 0.5;
        let center_y = (plot.y0 + plot.y1) * 0.5;
        scene.texts.push(
            TextPrimitive::new(
                Y_AXIS_TITLE,
                layout.y_axis_title_x_px,
                center_y,
                layout.axis_title_font_px,
                palette.text,
                TextHAlign::Center,
            )
            .rotated(-90.0),
        );
        scene.texts.push(TextPrimitive::new(
            X_AXIS_TITLE,
            center_x,
            plot.y1 + layout.x_axis_title_offset_px,
            layout.axis_title_font_px,
            palette.text,
            TextHAlign::Center,
        ));
        scene.texts.push(
            TextPrimitive::new(
                HEATMAP_TITLE,
                center_x,
                plot.y1 + layout.title_offset_px,
                layout.title_font_px,
                palette.text,
                TextHAlign::Center,
            )
            .bold(),
        );
        scene.texts.push(TextPrimitive::new(
            HEATMAP_CAPTION,
            center_x,
            plot.y1 + layout.caption_offset_px,
            layout.caption_font_px,
            palette.text,
            TextHAlign::Center,
        ));

        if self.hint.is_visible() {
            scene.texts.push(TextPrimitive::new(
                HEATMAP_HINT,
                center_x,
                plot.y0 - HINT_GAP_PX,
                self.config.interaction.hint_font_px,
                palette.hint,
                TextHAlign::Center,
            ));
        }
        scene
    }
}
