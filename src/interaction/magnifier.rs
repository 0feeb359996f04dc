use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::Point;

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum MagnifierState {
    #[default]
    Inactive,
    /// Pointer position relative to the chart center.
    Active { local: Point },
}

/// Mouse-following lens over the star chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Magnifier {
    state: MagnifierState,
    factor: f64,
    lens_radius: f64,
}

impl Magnifier {
    #[must_use]
    pub fn new(factor: f64, lens_radius: f64) -> Self {
        Self {
            state: MagnifierState::Inactive,
            factor,
            lens_radius,
        }
    }

    #[must_use]
    pub fn state(self) -> MagnifierState {
        self.state
    }

    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self.state, MagnifierState::Active { .. })
    }

    /// Tracks the pointer while it stays within `hit_radius` of `center`.
    ///
    /// Moving outside the circular hit region deactivates the lens, same as
    /// [`Magnifier::on_pointer_leave`]. Returns `true` when the state changed.
    pub fn on_pointer_move(&mut self, pointer: Point, center: Point, hit_radius: f64) -> bool {
        let local = Point::new(pointer.x - center.x, pointer.y - center.y);
        let inside = local.x.hypot(local.y) <= hit_radius;
        let next = if inside && local.is_finite() {
            MagnifierState::Active { local }
        } else {
            MagnifierState::Inactive
        };
        let changed = self.state != next;
        self.state = next;
        trace!(inside, x = local.x, y = local.y, "magnifier pointer moved");
        changed
    }

    pub fn on_pointer_leave(&mut self) -> bool {
        let changed = self.is_active();
        self.state = MagnifierState::Inactive;
        trace!(changed, "magnifier pointer left");
        changed
    }

    #[must_use]
    pub fn view(self, center: Point) -> Option<MagnifierView> {
        match self.state {
            MagnifierState::Inactive => None,
            MagnifierState::Active { local } => Some(MagnifierView {
                center,
                local,
                factor: self.factor,
                lens_radius: self.lens_radius,
            }),
        }
    }
}

/// Uniform re-projection of the chart around the pointer.
///
/// A chart point at local coordinate `q` is drawn at
/// `center + local + factor * (q - local)`, so the point under the pointer
/// stays put and its neighbourhood is magnified by `factor`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MagnifierView {
    pub center: Point,
    pub local: Point,
    pub factor: f64,
    pub lens_radius: f64,
}

impl MagnifierView {
    /// Absolute pointer position, which is also the lens center.
    #[must_use]
    pub fn lens_center(self) -> Point {
        self.center.offset(self.local.x, self.local.y)
    }

    /// Projects an absolute chart point into the lens.
    #[must_use]
    pub fn project(self, point: Point) -> Point {
        let qx = point.x - self.center.x;
        let qy = point.y - self.center.y;
        let lens = self.lens_center();
        Point::new(
            lens.x + self.factor * (qx - self.local.x),
            lens.y + self.factor * (qy - self.local.y),
        )
    }

    #[must_use]
    pub fn contains(self, point: Point) -> bool {
        let lens = self.lens_center();
        (point.x - lens.x).hypot(point.y - lens.y) <= self.lens_radius
    }
}
