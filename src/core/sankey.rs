//! Two-column layered layout for bipartite flow graphs.
//!
//! Nodes with outgoing edges form the left column, every other node (sinks and
//! isolated nodes) the right column. Node heights and edge thicknesses share
//! one value-to-pixel factor `ky`, chosen so the fullest column exactly fills
//! the extent. Within a column nodes keep their first-seen index order.

use serde::{Deserialize, Serialize};

use super::aggregate::{FlowGraph, FlowNodeKind};
use super::types::{Extent, Point};
use crate::error::{DashboardError, DashboardResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SankeyColumn {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SankeyNodeLayout {
    pub index: usize,
    pub name: String,
    pub kind: FlowNodeKind,
    pub column: SankeyColumn,
    pub value: f64,
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl SankeyNodeLayout {
    #[must_use]
    pub fn height(&self) -> f64 {
        self.y1 - self.y0
    }

    #[must_use]
    pub fn extent(&self) -> Extent {
        Extent::new(self.x0, self.y0, self.x1, self.y1)
    }
}

/// Horizontal cubic link; both control points sit at the horizontal midpoint.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinkPath {
    pub start: Point,
    pub control1: Point,
    pub control2: Point,
    pub end: Point,
}

impl LinkPath {
    #[must_use]
    pub fn horizontal(start: Point, end: Point) -> Self {
        let mid_x = (start.x + end.x) * 0.5;
        Self {
            start,
            control1: Point::new(mid_x, start.y),
            control2: Point::new(mid_x, end.y),
            end,
        }
    }

    /// SVG path data (`M .. C ..`).
    #[must_use]
    pub fn to_svg_path(&self) -> String {
        format!(
            "M{},{}C{},{} {},{} {},{}",
            self.start.x,
            self.start.y,
            self.control1.x,
            self.control1.y,
            self.control2.x,
            self.control2.y,
            self.end.x,
            self.end.y
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SankeyEdgeLayout {
    pub edge_index: usize,
    pub source: usize,
    pub target: usize,
    pub weight: u32,
    pub thickness: f64,
    pub y0: f64,
    pub y1: f64,
    pub path: LinkPath,
}

impl SankeyEdgeLayout {
    #[must_use]
    pub fn touches(&self, node_index: usize) -> bool {
        self.source == node_index || self.target == node_index
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SankeyLayout {
    pub nodes: Vec<SankeyNodeLayout>,
    pub edges: Vec<SankeyEdgeLayout>,
    /// Pixels per unit of flow weight.
    pub ky: f64,
    /// Vertical gap actually used between stacked nodes.
    pub node_padding: f64,
}

impl SankeyLayout {
    #[must_use]
    pub fn node_at(&self, x: f64, y: f64) -> Option<&SankeyNodeLayout> {
        self.nodes.iter().find(|node| node.extent().contains(x, y))
    }
}

fn validate_inputs(
    graph: &FlowGraph,
    extent: Extent,
    node_width: f64,
    node_padding: f64,
) -> DashboardResult<()> {
    extent.validate()?;
    if !node_width.is_finite() || node_width <= 0.0 || node_width > extent.width() {
        return Err(DashboardError::InvalidData(
            "sankey node width must be finite, > 0 and fit the extent".to_owned(),
        ));
    }
    if !node_padding.is_finite() || node_padding < 0.0 {
        return Err(DashboardError::InvalidData(
            "sankey node padding must be finite and >= 0".to_owned(),
        ));
    }
    for edge in &graph.edges {
        if edge.source >= graph.nodes.len() || edge.target >= graph.nodes.len() {
            return Err(DashboardError::InvalidData(format!(
                "sankey edge {} -> {} references a missing node",
                edge.source, edge.target
            )));
        }
        if edge.source == edge.target {
            return Err(DashboardError::InvalidData(format!(
                "sankey edge on node {} must not be a self-loop",
                edge.source
            )));
        }
    }
    Ok(())
}

pub fn compute_sankey_layout(
    graph: &FlowGraph,
    extent: Extent,
    node_width: f64,
    node_padding: f64,
) -> DashboardResult<SankeyLayout> {
    validate_inputs(graph, extent, node_width, node_padding)?;

    let node_count = graph.nodes.len();
    let mut incoming = vec![0_u64; node_count];
    let mut outgoing = vec![0_u64; node_count];
    for edge in &graph.edges {
        outgoing[edge.source] += u64::from(edge.weight);
        incoming[edge.target] += u64::from(edge.weight);
    }
    let has_outgoing: Vec<bool> = (0..node_count)
        .map(|index| graph.edges.iter().any(|edge| edge.source == index))
        .collect();

    let columns: Vec<(SankeyColumn, Vec<usize>)> = [SankeyColumn::Left, SankeyColumn::Right]
        .into_iter()
        .map(|column| {
            let members = (0..node_count)
                .filter(|index| has_outgoing[*index] == (column == SankeyColumn::Left))
                .collect::<Vec<_>>();
            (column, members)
        })
        .filter(|(_, members)| !members.is_empty())
        .collect();

    let values: Vec<f64> = (0..node_count)
        .map(|index| incoming[index].max(outgoing[index]) as f64)
        .collect();

    let height = extent.height();
    let max_len = columns
        .iter()
        .map(|(_, members)| members.len())
        .max()
        .unwrap_or(0);
    let padding = if max_len > 1 {
        node_padding.min(height / (max_len - 1) as f64)
    } else {
        node_padding
    };

    let ky = columns
        .iter()
        .filter_map(|(_, members)| {
            let total: f64 = members.iter().map(|index| values[*index]).sum();
            (total > 0.0)
                .then(|| (height - (members.len() - 1) as f64 * padding) / total)
        })
        .fold(None, |min: Option<f64>, candidate| {
            Some(min.map_or(candidate, |current| current.min(candidate)))
        })
        .unwrap_or(0.0);

    let right_x0 = extent.x1 - node_width;
    let mut placed: Vec<Option<SankeyNodeLayout>> = vec![None; node_count];
    for (column, members) in &columns {
        let x0 = if columns.len() > 1 && *column == SankeyColumn::Right {
            right_x0
        } else {
            extent.x0
        };

        let mut y = extent.y0;
        let mut stacked = Vec::with_capacity(members.len());
        for index in members {
            let y0 = y;
            let y1 = y0 + values[*index] * ky;
            stacked.push((*index, y0, y1));
            y = y1 + padding;
        }

        let spread = (extent.y1 - y + padding) / (members.len() + 1) as f64;
        for (position, (index, y0, y1)) in stacked.into_iter().enumerate() {
            let shift = spread * (position + 1) as f64;
            let node = &graph.nodes[index];
            placed[index] = Some(SankeyNodeLayout {
                index,
                name: node.name.clone(),
                kind: node.kind,
                column: *column,
                value: values[index],
                x0,
                y0: y0 + shift,
                x1: x0 + node_width,
                y1: y1 + shift,
            });
        }
    }
    let nodes: Vec<SankeyNodeLayout> = placed.into_iter().flatten().collect();

    let mut edge_y0 = vec![0.0; graph.edges.len()];
    let mut edge_y1 = vec![0.0; graph.edges.len()];
    for node in &nodes {
        let mut sources: Vec<usize> = (0..graph.edges.len())
            .filter(|edge| graph.edges[*edge].source == node.index)
            .collect();
        sources.sort_by(|a, b| {
            let ya = nodes[graph.edges[*a].target].y0;
            let yb = nodes[graph.edges[*b].target].y0;
            ya.total_cmp(&yb).then(a.cmp(b))
        });
        let mut y = node.y0;
        for edge in sources {
            let thickness = f64::from(graph.edges[edge].weight) * ky;
            edge_y0[edge] = y + thickness * 0.5;
            y += thickness;
        }

        let mut targets: Vec<usize> = (0..graph.edges.len())
            .filter(|edge| graph.edges[*edge].target == node.index)
            .collect();
        targets.sort_by(|a, b| {
            let ya = nodes[graph.edges[*a].source].y0;
            let yb = nodes[graph.edges[*b].source].y0;
            ya.total_cmp(&yb).then(a.cmp(b))
        });
        let mut y = node.y0;
        for edge in targets {
            let thickness = f64::from(graph.edges[edge].weight) * ky;
            edge_y1[edge] = y + thickness * 0.5;
            y += thickness;
        }
    }

    let edges = graph
        .edges
        .iter()
        .enumerate()
        .map(|(edge_index, edge)| {
            let start = Point::new(nodes[edge.source].x1, edge_y0[edge_index]);
            let end = Point::new(nodes[edge.target].x0, edge_y1[edge_index]);
            SankeyEdgeLayout {
                edge_index,
                source: edge.source,
                target: edge.target,
                weight: edge.weight,
                thickness: f64::from(edge.weight) * ky,
                y0: edge_y0[edge_index],
                y1: edge_y1[edge_index],
                path: LinkPath::horizontal(start, end),
            }
        })
        .collect();

    Ok(SankeyLayout {
        nodes,
        edges,
        ky,
        node_padding: padding,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::aggregate::{FlowEdge, FlowNode};

    #[test]
    fn link_path_controls_sit_at_midpoint() {
        let path = LinkPath::horizontal(Point::new(0.0, 10.0), Point::new(100.0, 50.0));
        assert_eq!(path.control1, Point::new(50.0, 10.0));
        assert_eq!(path.control2, Point::new(50.0, 50.0));
        assert_eq!(path.to_svg_path(), "M0,10C50,10 50,50 100,50");
    }

    #[test]
    fn rejects_edges_to_missing_nodes() {
        let graph = FlowGraph {
            nodes: vec![FlowNode {
                name: "Rock".to_owned(),
                kind: FlowNodeKind::Genre,
            }],
            edges: vec![FlowEdge {
                source: 0,
                target: 3,
                weight: 1,
            }],
        };
        let err = compute_sankey_layout(&graph, Extent::new(0.0, 0.0, 100.0, 100.0), 10.0, 5.0)
            .expect_err("dangling edge");
        assert!(format!("{err}").contains("missing node"));
    }
}
