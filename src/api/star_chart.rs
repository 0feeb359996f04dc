use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::core::{
    Dimension, GroupProfile, LinearScale, MusicEffect, Point, RadialPolygon, RecordStore,
    aggregate_group_profiles, radial_polygon, radial_vertex,
};
use crate::error::DashboardResult;
use crate::interaction::{Magnifier, MagnifierView, OneShotHint};
use crate::render::{
    ChartKind, ChartScene, CirclePrimitive, ClippedLayer, Color, LinePrimitive, PolygonPrimitive,
    RectPrimitive, TextHAlign, TextPrimitive,
};

use super::{DashboardConfig, HitBox, HitRegion, HitShape};

pub const STAR_TITLE: &str = "Comparison of Statistics by Effect of Music on Mood";
pub const STAR_LEGEND_TITLE: &str = "Effect of Music on Mood";
pub const STAR_HINT: &str = "Move the pointer over the chart to magnify it";

const AXIS_STROKE_WIDTH: f64 = 1.0;
const LENS_STROKE_WIDTH: f64 = 1.5;
const LEGEND_TITLE_GAP_PX: f64 = 10.0;
const LEGEND_TEXT_GAP_PX: f64 = 6.0;
const HINT_GAP_PX: f64 = 20.0;

/// One drawable profile polygon.
#[derive(Debug, Clone, PartialEq)]
pub struct StarPolygon {
    pub group: MusicEffect,
    pub vertices: RadialPolygon,
}

/// Radar chart comparing per-effect dimension means, with a pointer lens.
#[derive(Debug, Clone)]
pub struct StarChart {
    config: DashboardConfig,
    center: Point,
    axis_radius: f64,
    profiles: Vec<GroupProfile>,
    scales: IndexMap<Dimension, Option<LinearScale>>,
    polygons: Vec<StarPolygon>,
    magnifier: Magnifier,
    hint: OneShotHint,
}

impl StarChart {
    pub fn build(store: &RecordStore, config: &DashboardConfig, now: f64) -> DashboardResult<Self> {
        let viewport = config.viewport;
        let layout = config.star;
        let center = Point::new(
            viewport.x_at(layout.center_x_ratio),
            viewport.y_at(layout.center_y_ratio),
        );
        let axis_radius = viewport.y_at(layout.axis_radius_ratio);
        let polygon_range = viewport.y_at(layout.polygon_range_ratio);

        // Scales span the whole store, not the complete-record subset.
        let scales: IndexMap<Dimension, Option<LinearScale>> = Dimension::ALL
            .iter()
            .map(|dimension| {
                let scale = store
                    .dimension_max(*dimension)
                    .and_then(|max| LinearScale::from_max(max, (0.0, polygon_range)).ok());
                (*dimension, scale)
            })
            .collect();

        let profiles =
            aggregate_group_profiles(store.records(), &MusicEffect::ALL, &Dimension::ALL);
        let polygons = profiles
            .iter()
            .filter_map(|profile| {
                let magnitudes: Vec<Option<f64>> = Dimension::ALL
                    .iter()
                    .map(|dimension| {
                        let scale = scales.get(dimension).copied().flatten()?;
                        profile.mean(*dimension).map(|mean| scale.map(mean))
                    })
                    .collect();
                match radial_polygon(&magnitudes, center) {
                    Some(vertices) => Some(StarPolygon {
                        group: profile.group,
                        vertices,
                    }),
                    None => {
                        warn!(
                            group = profile.group.label(),
                            contributing = profile.contributing_records,
                            "skipping undrawable star polygon"
                        );
                        None
                    }
                }
            })
            .collect::<Vec<_>>();

        debug!(
            profiles = profiles.len(),
            polygons = polygons.len(),
            "star chart built"
        );
        let interaction = config.interaction;
        Ok(Self {
            config: *config,
            center,
            axis_radius,
            profiles,
            scales,
            polygons,
            magnifier: Magnifier::new(
                interaction.magnifier_factor,
                interaction.magnifier_lens_radius_px,
            ),
            hint: OneShotHint::new(now, interaction.hint_timeout_seconds),
        })
    }

    #[must_use]
    pub fn center(&self) -> Point {
        self.center
    }

    #[must_use]
    pub fn profiles(&self) -> &[GroupProfile] {
        &self.profiles
    }

    #[must_use]
    pub fn scale(&self, dimension: Dimension) -> Option<LinearScale> {
        self.scales.get(&dimension).copied().flatten()
    }

    #[must_use]
    pub fn polygons(&self) -> &[StarPolygon] {
        &self.polygons
    }

    #[must_use]
    pub fn magnifier(&self) -> Magnifier {
        self.magnifier
    }

    #[must_use]
    pub fn hint(&self) -> OneShotHint {
        self.hint
    }

    /// Radius of the circular region that drives the magnifier.
    #[must_use]
    pub fn hit_radius(&self) -> f64 {
        let polygon_range = self.config.viewport.y_at(self.config.star.polygon_range_ratio);
        self.axis_radius.max(polygon_range) * self.config.star.label_radius_factor
    }

    #[must_use]
    pub fn hit_regions(&self) -> Vec<HitBox> {
        vec![HitBox {
            region: HitRegion::StarChart,
            shape: HitShape::Circle {
                center: self.center,
                radius: self.hit_radius(),
            },
        }]
    }

    pub fn on_pointer_move(&mut self, pointer: Point, now: f64) -> bool {
        let changed = self
            .magnifier
            .on_pointer_move(pointer, self.center, self.hit_radius());
        let moved_inside = self.magnifier.is_active();
        let hint_hidden = moved_inside && self.hint.on_primary_interaction(now);
        // An active lens follows the pointer, so every inside move redraws.
        changed || moved_inside || hint_hidden
    }

    pub fn on_pointer_leave(&mut self) -> bool {
        self.magnifier.on_pointer_leave()
    }

    pub fn on_timer_fired(&mut self, now: f64) -> bool {
        self.hint.on_timer_fired(now)
    }

    fn axis_lines(&self) -> Vec<LinePrimitive> {
        let total = Dimension::ALL.len();
        (0..total)
            .map(|index| {
                let end = radial_vertex(index, total, self.axis_radius, self.center);
                LinePrimitive::new(
                    self.center.x,
                    self.center.y,
                    end.x,
                    end.y,
                    AXIS_STROKE_WIDTH,
                    self.config.palette.axis,
                )
            })
            .collect()
    }

    fn axis_labels(&self) -> Vec<TextPrimitive> {
        let total = Dimension::ALL.len();
        let label_radius = self.axis_radius * self.config.star.label_radius_factor;
        Dimension::ALL
            .iter()
            .enumerate()
            .map(|(index, dimension)| {
                let anchor = radial_vertex(index, total, label_radius, self.center);
                TextPrimitive::new(
                    dimension.label(),
                    anchor.x,
                    anchor.y,
                    self.config.star.label_font_px,
                    self.config.palette.text,
                    TextHAlign::Center,
                )
            })
            .collect()
    }

    fn polygon_primitives(&self) -> Vec<PolygonPrimitive> {
        self.polygons
            .iter()
            .map(|polygon| {
                PolygonPrimitive::outline(
                    polygon.vertices.to_vec(),
                    self.config.palette.effect(polygon.group),
                    self.config.star.polygon_stroke_width,
                )
            })
            .collect()
    }

    fn lens_layer(
        &self,
        view: MagnifierView,
        lines: &[LinePrimitive],
        polygons: &[PolygonPrimitive],
        labels: &[TextPrimitive],
    ) -> ClippedLayer {
        let mut layer = ClippedLayer::new(view.lens_center(), view.lens_radius);
        layer.lines = lines
            .iter()
            .map(|line| {
                let from = view.project(Point::new(line.x1, line.y1));
                let to = view.project(Point::new(line.x2, line.y2));
                LinePrimitive::new(
                    from.x,
                    from.y,
                    to.x,
                    to.y,
                    line.stroke_width * view.factor,
                    line.color,
                )
            })
            .collect();
        layer.polygons = polygons
            .iter()
            .map(|polygon| {
                PolygonPrimitive::outline(
                    polygon
                        .points
                        .iter()
                        .map(|point| view.project(*point))
                        .collect(),
                    polygon.stroke,
                    polygon.stroke_width * view.factor,
                )
            })
            .collect();
        layer.texts = labels
            .iter()
            .map(|label| {
                let anchor = view.project(Point::new(label.x, label.y));
                let mut projected = label.clone();
                projected.x = anchor.x;
                projected.y = anchor.y;
                projected.font_size_px = label.font_size_px * view.factor;
                projected
            })
            .collect();
        layer
    }

    #[must_use]
    pub fn scene(&self) -> ChartScene {
        let mut scene = ChartScene::new(ChartKind::StarChart);
        let viewport = self.config.viewport;
        let layout = self.config.star;
        let palette = self.config.palette;

        let lines = self.axis_lines();
        let labels = self.axis_labels();
        let polygons = self.polygon_primitives();

        let legend_x = viewport.x_at(layout.legend_x_ratio);
        let legend_y = viewport.y_at(layout.legend_y_ratio);
        scene.texts.push(
            TextPrimitive::new(
                STAR_LEGEND_TITLE,
                legend_x,
                legend_y - LEGEND_TITLE_GAP_PX,
                layout.legend_font_px,
                palette.text,
                TextHAlign::Left,
            )
            .bold(),
        );
        for (row, effect) in MusicEffect::ALL.iter().enumerate() {
            let row_y = legend_y + row as f64 * layout.legend_row_px;
            scene.rects.push(RectPrimitive::new(
                legend_x,
                row_y,
                layout.legend_swatch_px,
                layout.legend_swatch_px,
                palette.effect(*effect),
            ));
            scene.texts.push(TextPrimitive::new(
                effect.label(),
                legend_x + layout.legend_swatch_px + LEGEND_TEXT_GAP_PX,
                row_y + layout.legend_swatch_px,
                layout.legend_font_px,
                palette.text,
                TextHAlign::Left,
            ));
        }

        scene.texts.push(
            TextPrimitive::new(
                STAR_TITLE,
                self.center.x,
                viewport.y_at(layout.title_y_ratio),
                layout.title_font_px,
                palette.text,
                TextHAlign::Center,
            )
            .bold(),
        );
        if self.hint.is_visible() {
            scene.texts.push(TextPrimitive::new(
                STAR_HINT,
                self.center.x,
                self.center.y - self.hit_radius() - HINT_GAP_PX,
                self.config.interaction.hint_font_px,
                palette.hint,
                TextHAlign::Center,
            ));
        }

        if let Some(view) = self.magnifier.view(self.center) {
            scene.circles.push(CirclePrimitive {
                center: view.lens_center(),
                radius: view.lens_radius,
                fill: Some(Color::WHITE),
                stroke: palette.text,
                stroke_width: LENS_STROKE_WIDTH,
            });
            scene
                .clipped
                .push(self.lens_layer(view, &lines, &polygons, &labels));
        }

        scene.lines = lines;
        scene.polygons = polygons;
        scene.texts.extend(labels);
        scene
    }
}
