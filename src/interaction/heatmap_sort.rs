use std::cmp::Reverse;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Condition, HeatmapAggregate};
use crate::error::{DashboardError, DashboardResult};

/// Clickable heatmap axis label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisLabel {
    /// Column label; clicking it reorders the condition rows.
    Genre(String),
    /// Row label; clicking it reorders the genre columns.
    Condition(Condition),
}

/// Stable descending order of `keys` by `value`; keys without a value go last.
fn descending_by<K: Clone>(keys: &[K], value: impl Fn(&K) -> Option<f64>) -> Vec<K> {
    let mut ordered = keys.to_vec();
    ordered.sort_by_key(|key| Reverse(value(key).map(OrderedFloat)));
    ordered
}

/// Current row and column order of the heatmap.
///
/// Sorting always starts from the declaration order, so equal values keep
/// their first-seen order no matter which label was clicked before.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatmapSortState {
    declared_genres: Vec<String>,
    declared_conditions: Vec<Condition>,
    genre_order: Vec<String>,
    condition_order: Vec<Condition>,
    last_clicked: Option<AxisLabel>,
}

impl HeatmapSortState {
    #[must_use]
    pub fn new(aggregate: &HeatmapAggregate) -> Self {
        Self {
            declared_genres: aggregate.genres().to_vec(),
            declared_conditions: aggregate.conditions().to_vec(),
            genre_order: aggregate.genres().to_vec(),
            condition_order: aggregate.conditions().to_vec(),
            last_clicked: None,
        }
    }

    #[must_use]
    pub fn genre_order(&self) -> &[String] {
        &self.genre_order
    }

    #[must_use]
    pub fn condition_order(&self) -> &[Condition] {
        &self.condition_order
    }

    #[must_use]
    pub fn last_clicked(&self) -> Option<&AxisLabel> {
        self.last_clicked.as_ref()
    }

    #[must_use]
    pub fn has_sorted(&self) -> bool {
        self.last_clicked.is_some()
    }

    /// Re-sorts the axis opposite to `label` by the aggregate row or column of
    /// `label`. Returns `true` when the visible order changed.
    pub fn on_label_clicked(
        &mut self,
        label: &AxisLabel,
        aggregate: &HeatmapAggregate,
    ) -> DashboardResult<bool> {
        let changed = match label {
            AxisLabel::Condition(condition) => {
                if !self.declared_conditions.contains(condition) {
                    return Err(DashboardError::InvalidData(format!(
                        "unknown heatmap condition label `{}`",
                        condition.column()
                    )));
                }
                let order = descending_by(&self.declared_genres, |genre| {
                    aggregate.value(genre, *condition)
                });
                let changed = order != self.genre_order;
                self.genre_order = order;
                changed
            }
            AxisLabel::Genre(genre) => {
                if !self.declared_genres.contains(genre) {
                    return Err(DashboardError::InvalidData(format!(
                        "unknown heatmap genre label `{genre}`"
                    )));
                }
                let order = descending_by(&self.declared_conditions, |condition| {
                    aggregate.value(genre, *condition)
                });
                let changed = order != self.condition_order;
                self.condition_order = order;
                changed
            }
        };
        trace!(?label, changed, "heatmap label clicked");
        self.last_clicked = Some(label.clone());
        Ok(changed)
    }
}
