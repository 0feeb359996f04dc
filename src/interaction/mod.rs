//! Per-chart interaction state machines.
//!
//! Each state object is owned by exactly one chart and only ever changes in
//! response to host events delivered through that chart.

mod heatmap_sort;
mod hint;
mod magnifier;
mod sankey_hover;

pub use heatmap_sort::{AxisLabel, HeatmapSortState};
pub use hint::OneShotHint;
pub use magnifier::{Magnifier, MagnifierState, MagnifierView};
pub use sankey_hover::{EdgeEmphasis, LinkOpacity, SankeyHover, SankeyHoverState};
