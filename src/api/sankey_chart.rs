use tracing::debug;

use crate::core::{
    Extent, FlowGraph, FlowNodeKind, MusicEffect, RecordStore, SankeyLayout, aggregate_flow,
    compute_sankey_layout,
};
use crate::error::{DashboardError, DashboardResult};
use crate::interaction::{OneShotHint, SankeyHoverState};
use crate::render::{
    ChartKind, ChartScene, Color, LinkPrimitive, RectPrimitive, TextHAlign, TextPrimitive,
};

use super::{DashboardConfig, HitBox, HitRegion, HitShape};

pub const SANKEY_TITLE: &str = "How Do Different Music Genres Effect the Mood of Patients?";
pub const SANKEY_GENRE_HEADING: &str = "Favorite Genre";
pub const SANKEY_EFFECT_HEADING: &str = "Effect of Music on Mood";
pub const SANKEY_HINT: &str = "Hover over a genre or effect to highlight its flows";

const NODE_STROKE_WIDTH: f64 = 1.0;
const HINT_GAP_PX: f64 = 20.0;

/// Genre-to-effect flow diagram with hover highlighting.
#[derive(Debug, Clone)]
pub struct SankeyChart {
    config: DashboardConfig,
    graph: FlowGraph,
    layout: SankeyLayout,
    hover: SankeyHoverState,
    hint: OneShotHint,
}

impl SankeyChart {
    pub fn build(store: &RecordStore, config: &DashboardConfig, now: f64) -> DashboardResult<Self> {
        let graph = aggregate_flow(store.records(), &store.genres(), &MusicEffect::ALL);
        let layout = compute_sankey_layout(
            &graph,
            Self::extent(config),
            config.sankey.node_width_px,
            config.sankey.node_padding_px,
        )?;
        debug!(
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            total_weight = graph.total_weight(),
            "sankey built"
        );
        Ok(Self {
            config: *config,
            graph,
            layout,
            hover: SankeyHoverState::default(),
            hint: OneShotHint::new(now, config.interaction.hint_timeout_seconds),
        })
    }

    fn extent(config: &DashboardConfig) -> Extent {
        let viewport = config.viewport;
        let layout = config.sankey;
        Extent::new(
            viewport.x_at(layout.extent_x0_ratio),
            viewport.y_at(layout.extent_y0_ratio),
            viewport.x_at(layout.extent_x1_ratio),
            viewport.y_at(layout.extent_y1_ratio),
        )
    }

    #[must_use]
    pub fn graph(&self) -> &FlowGraph {
        &self.graph
    }

    #[must_use]
    pub fn layout(&self) -> &SankeyLayout {
        &self.layout
    }

    #[must_use]
    pub fn hover(&self) -> SankeyHoverState {
        self.hover
    }

    #[must_use]
    pub fn hint(&self) -> OneShotHint {
        self.hint
    }

    pub fn on_node_enter(&mut self, node_index: usize, now: f64) -> DashboardResult<bool> {
        if node_index >= self.layout.nodes.len() {
            return Err(DashboardError::InvalidData(format!(
                "sankey node index {node_index} is out of range"
            )));
        }
        let changed = self.hover.on_node_enter(node_index);
        let hint_hidden = self.hint.on_primary_interaction(now);
        Ok(changed || hint_hidden)
    }

    pub fn on_node_leave(&mut self) -> bool {
        self.hover.on_node_leave()
    }

    pub fn on_timer_fired(&mut self, now: f64) -> bool {
        self.hint.on_timer_fired(now)
    }

    #[must_use]
    pub fn hit_regions(&self) -> Vec<HitBox> {
        self.layout
            .nodes
            .iter()
            .map(|node| HitBox {
                region: HitRegion::SankeyNode(node.index),
                shape: HitShape::Rect(node.extent()),
            })
            .collect()
    }

    fn heading_x(&self, matches: impl Fn(FlowNodeKind) -> bool) -> Option<f64> {
        self.layout
            .nodes
            .iter()
            .filter(|node| matches(node.kind))
            .map(|node| node.x0)
            .reduce(f64::min)
    }

    #[must_use]
    pub fn scene(&self) -> ChartScene {
        let mut scene = ChartScene::new(ChartKind::Sankey);
        let layout = self.config.sankey;
        let palette = self.config.palette;
        let opacity = self.config.interaction.link_opacity;
        let half_width = f64::from(self.config.viewport.width) * 0.5;

        for edge in &self.layout.edges {
            let color = self
                .layout
                .nodes
                .get(edge.target)
                .map_or(palette.neutral_node, |target| palette.flow_node(target.kind));
            scene.links.push(LinkPrimitive {
                path: edge.path,
                color,
                stroke_width: edge.thickness.max(layout.min_link_width_px),
                opacity: self.hover.emphasis(edge.source, edge.target).opacity(opacity),
            });
        }

        for node in &self.layout.nodes {
            scene.rects.push(
                RectPrimitive::new(
                    node.x0,
                    node.y0,
                    node.x1 - node.x0,
                    node.height(),
                    palette.flow_node(node.kind),
                )
                .with_stroke(Color::BLACK, NODE_STROKE_WIDTH),
            );
            let (x, align) = if node.x0 < half_width {
                (node.x1 - layout.label_offset_px, TextHAlign::Right)
            } else {
                (node.x0 + layout.label_offset_px, TextHAlign::Left)
            };
            scene.texts.push(TextPrimitive::new(
                node.name.as_str(),
                x,
                (node.y0 + node.y1) * 0.5,
                layout.label_font_px,
                palette.text,
                align,
            ));
        }

        let headings = [
            (
                SANKEY_GENRE_HEADING,
                self.heading_x(|kind| kind == FlowNodeKind::Genre),
                layout.genre_heading_offset_px,
            ),
            (
                SANKEY_EFFECT_HEADING,
                self.heading_x(|kind| matches!(kind, FlowNodeKind::Effect(_))),
                layout.effect_heading_offset_px,
            ),
        ];
        for (text, column_x, offset) in headings {
            if let Some(column_x) = column_x {
                scene.texts.push(
                    TextPrimitive::new(
                        text,
                        column_x - offset,
                        layout.heading_y_px,
                        layout.heading_font_px,
                        palette.text,
                        TextHAlign::Left,
                    )
                    .bold(),
                );
            }
        }

        scene.texts.push(
            TextPrimitive::new(
                SANKEY_TITLE,
                half_width,
                layout.title_y_px,
                layout.title_font_px,
                palette.text,
                TextHAlign::Center,
            )
            .bold(),
        );

        if self.hint.is_visible() {
            let extent = Self::extent(&self.config);
            scene.texts.push(TextPrimitive::new(
                SANKEY_HINT,
                half_width,
                extent.y1 + HINT_GAP_PX,
                self.config.interaction.hint_font_px,
                palette.hint,
                TextHAlign::Center,
            ));
        }
        scene
    }
}
