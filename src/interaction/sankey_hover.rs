use serde::{Deserialize, Serialize};
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SankeyHover {
    #[default]
    Idle,
    Hovered(usize),
}

/// Visual weight of one link given the current hover state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgeEmphasis {
    Default,
    Active,
    Dimmed,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinkOpacity {
    pub default: f64,
    pub active: f64,
    pub dimmed: f64,
}

impl Default for LinkOpacity {
    fn default() -> Self {
        Self {
            default: 0.5,
            active: 1.0,
            dimmed: 0.1,
        }
    }
}

impl EdgeEmphasis {
    #[must_use]
    pub fn opacity(self, opacity: LinkOpacity) -> f64 {
        match self {
            EdgeEmphasis::Default => opacity.default,
            EdgeEmphasis::Active => opacity.active,
            EdgeEmphasis::Dimmed => opacity.dimmed,
        }
    }
}

/// Hover-highlight state of the Sankey chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SankeyHoverState {
    hover: SankeyHover,
}

impl SankeyHoverState {
    #[must_use]
    pub fn hover(self) -> SankeyHover {
        self.hover
    }

    #[must_use]
    pub fn hovered_node(self) -> Option<usize> {
        match self.hover {
            SankeyHover::Hovered(index) => Some(index),
            SankeyHover::Idle => None,
        }
    }

    /// Returns `true` when the state changed.
    pub fn on_node_enter(&mut self, node_index: usize) -> bool {
        let next = SankeyHover::Hovered(node_index);
        let changed = self.hover != next;
        self.hover = next;
        trace!(node_index, changed, "sankey node entered");
        changed
    }

    /// Returns `true` when the state changed.
    pub fn on_node_leave(&mut self) -> bool {
        let changed = self.hover != SankeyHover::Idle;
        self.hover = SankeyHover::Idle;
        trace!(changed, "sankey node left");
        changed
    }

    #[must_use]
    pub fn emphasis(self, source: usize, target: usize) -> EdgeEmphasis {
        match self.hover {
            SankeyHover::Idle => EdgeEmphasis::Default,
            SankeyHover::Hovered(index) if index == source || index == target => {
                EdgeEmphasis::Active
            }
            SankeyHover::Hovered(_) => EdgeEmphasis::Dimmed,
        }
    }
}
