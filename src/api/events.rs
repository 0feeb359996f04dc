use serde::{Deserialize, Serialize};

use crate::core::{Extent, Point, Viewport};
use crate::interaction::AxisLabel;
use crate::render::ChartKind;

/// Named pointer target inside the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HitRegion {
    HeatmapLabel(AxisLabel),
    SankeyNode(usize),
    StarChart,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HitShape {
    Rect(Extent),
    Circle { center: Point, radius: f64 },
}

impl HitShape {
    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        match self {
            HitShape::Rect(extent) => extent.contains(x, y),
            HitShape::Circle { center, radius } => {
                (x - center.x).hypot(y - center.y) <= radius
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitBox {
    pub region: HitRegion,
    pub shape: HitShape,
}

/// Identifies one scheduled hint timeout.
///
/// `generation` is bumped on every rebuild, so a timer scheduled before a
/// resize is recognised as stale when it finally fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimerToken {
    pub chart: ChartKind,
    pub generation: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduledTimer {
    pub token: TimerToken,
    /// Host clock time, in seconds, at which the timer should fire.
    pub fire_at: f64,
}

/// Input delivered by the host. `now` is the host clock in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum HostEvent {
    Resize { viewport: Viewport, now: f64 },
    PointerEnter { region: HitRegion, x: f64, y: f64, now: f64 },
    PointerMove { region: HitRegion, x: f64, y: f64, now: f64 },
    PointerLeave { region: HitRegion, now: f64 },
    Click { region: HitRegion, now: f64 },
    TimerFired { token: TimerToken, now: f64 },
}
