//! Grouped descriptive statistics feeding the three charts.
//!
//! Every aggregate is a pure function of the record slice and the requested
//! keys. Nothing here mutates records, and results are rebuilt on each chart
//! build.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::record::{Condition, Dimension, MusicEffect, SurveyRecord};

fn mean(sum: f64, count: usize) -> Option<f64> {
    (count > 0).then(|| sum / count as f64)
}

/// One heatmap cell. `mean == None` is the explicit "no data" state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateCell {
    pub genre: String,
    pub condition: Condition,
    pub mean: Option<f64>,
    pub observations: usize,
}

/// Mean severity per (genre, condition), one cell for every pair.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapAggregate {
    genres: Vec<String>,
    conditions: Vec<Condition>,
    cells: IndexMap<(String, Condition), AggregateCell>,
}

impl HeatmapAggregate {
    /// Genres in declaration (first-seen) order.
    #[must_use]
    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    /// Conditions in declaration order.
    #[must_use]
    pub fn conditions(&self) -> &[Condition] {
        &self.conditions
    }

    #[must_use]
    pub fn cell(&self, genre: &str, condition: Condition) -> Option<&AggregateCell> {
        self.cells.get(&(genre.to_owned(), condition))
    }

    /// Mean at `(genre, condition)`; `None` for "no data" or an unknown pair.
    #[must_use]
    pub fn value(&self, genre: &str, condition: Condition) -> Option<f64> {
        self.cell(genre, condition).and_then(|cell| cell.mean)
    }

    /// Cells in genre-major, condition-minor declaration order.
    pub fn cells(&self) -> impl Iterator<Item = &AggregateCell> {
        self.cells.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Averages each condition severity per genre.
///
/// Only numeric values contribute. A pair without any numeric value keeps its
/// cell with `mean: None`.
#[must_use]
pub fn aggregate_heatmap(
    records: &[SurveyRecord],
    genres: &[String],
    conditions: &[Condition],
) -> HeatmapAggregate {
    let mut sums: IndexMap<(String, Condition), (f64, usize)> = IndexMap::new();
    for genre in genres {
        for condition in conditions {
            sums.insert((genre.clone(), *condition), (0.0, 0));
        }
    }

    for record in records {
        let Some(genre) = record.favorite_genre() else {
            continue;
        };
        for condition in conditions {
            let Some(value) = record.severity(*condition) else {
                continue;
            };
            if let Some((sum, count)) = sums.get_mut(&(genre.to_owned(), *condition)) {
                *sum += value;
                *count += 1;
            }
        }
    }

    let cells = sums
        .into_iter()
        .map(|((genre, condition), (sum, count))| {
            let cell = AggregateCell {
                genre: genre.clone(),
                condition,
                mean: mean(sum, count),
                observations: count,
            };
            ((genre, condition), cell)
        })
        .collect();

    HeatmapAggregate {
        genres: genres.to_vec(),
        conditions: conditions.to_vec(),
        cells,
    }
}

/// Per-dimension means for one effect group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupProfile {
    pub group: MusicEffect,
    pub contributing_records: usize,
    pub means: IndexMap<Dimension, Option<f64>>,
}

impl GroupProfile {
    /// Mean of `dimension`, or `None` when no complete record exists.
    #[must_use]
    pub fn mean(&self, dimension: Dimension) -> Option<f64> {
        self.means.get(&dimension).copied().flatten()
    }
}

/// Averages every dimension per effect group over complete records only.
///
/// A record missing any one of `dimensions` is dropped from every average of
/// its group instead of being averaged per dimension.
#[must_use]
pub fn aggregate_group_profiles(
    records: &[SurveyRecord],
    groups: &[MusicEffect],
    dimensions: &[Dimension],
) -> Vec<GroupProfile> {
    groups
        .iter()
        .map(|group| {
            let members: Vec<&SurveyRecord> = records
                .iter()
                .filter(|record| record.music_effect().recognized() == Some(*group))
                .filter(|record| record.is_complete(dimensions))
                .collect();

            let means = dimensions
                .iter()
                .map(|dimension| {
                    let sum: f64 = members
                        .iter()
                        .filter_map(|record| record.dimension(*dimension))
                        .sum();
                    (*dimension, mean(sum, members.len()))
                })
                .collect();

            GroupProfile {
                group: *group,
                contributing_records: members.len(),
                means,
            }
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowNodeKind {
    Genre,
    Effect(MusicEffect),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowNode {
    pub name: String,
    pub kind: FlowNodeKind,
}

/// Directed genre-to-effect connection, `weight` = co-occurrence count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowEdge {
    pub source: usize,
    pub target: usize,
    pub weight: u32,
}

/// Sankey input graph. Node indices are first-encounter order and shared by
/// genre and effect nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlowGraph {
    pub nodes: Vec<FlowNode>,
    pub edges: Vec<FlowEdge>,
}

impl FlowGraph {
    #[must_use]
    pub fn total_weight(&self) -> u64 {
        self.edges.iter().map(|edge| u64::from(edge.weight)).sum()
    }
}

#[derive(Default)]
struct NodeInterner {
    names: IndexSet<String>,
    nodes: Vec<FlowNode>,
    shared: IndexSet<usize>,
}

impl NodeInterner {
    /// Genres and effects share one namespace: a genre spelled like an effect
    /// label resolves to the same node, whichever kind was interned first.
    fn intern(&mut self, name: &str, kind: FlowNodeKind) -> usize {
        if let Some(index) = self.names.get_index_of(name) {
            if self.nodes[index].kind != kind && self.shared.insert(index) {
                warn!(
                    name,
                    "genre and effect share a flow node name; their flows are merged"
                );
            }
            return index;
        }
        self.names.insert(name.to_owned());
        self.nodes.push(FlowNode {
            name: name.to_owned(),
            kind,
        });
        self.nodes.len() - 1
    }
}

/// Counts records per (genre, effect).
///
/// Only records whose genre is listed in `genres` and whose effect is a listed
/// recognized effect are counted. Genres are walked in the order their first
/// counted record appears; for each genre every listed effect is interned, so
/// effect nodes exist even when their count is zero. Zero counts never become
/// edges, and neither does a genre named like its own effect, which would be a
/// self-loop on the shared node.
#[must_use]
pub fn aggregate_flow(
    records: &[SurveyRecord],
    genres: &[String],
    effects: &[MusicEffect],
) -> FlowGraph {
    let mut counts: IndexMap<&str, Vec<u32>> = IndexMap::new();
    for record in records {
        let Some(genre) = record.favorite_genre() else {
            continue;
        };
        if !genres.iter().any(|known| known == genre) {
            continue;
        }
        let Some(effect) = record.music_effect().recognized() else {
            continue;
        };
        let Some(slot) = effects.iter().position(|known| *known == effect) else {
            continue;
        };
        counts.entry(genre).or_insert_with(|| vec![0; effects.len()])[slot] += 1;
    }

    let mut interner = NodeInterner::default();
    let mut edges = Vec::new();
    for (genre, per_effect) in &counts {
        let source = interner.intern(genre, FlowNodeKind::Genre);
        for (effect, weight) in effects.iter().zip(per_effect) {
            let target = interner.intern(effect.label(), FlowNodeKind::Effect(*effect));
            if *weight == 0 {
                continue;
            }
            if source == target {
                warn!(
                    genre = *genre,
                    weight = *weight,
                    "dropping flow from a genre onto the effect node of the same name"
                );
                continue;
            }
            edges.push(FlowEdge {
                source,
                target,
                weight: *weight,
            });
        }
    }

    FlowGraph {
        nodes: interner.nodes,
        edges,
    }
}
