use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};

/// Host canvas size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width > 0 && self.height > 0
    }

    pub fn ensure_valid(self) -> DashboardResult<Self> {
        if !self.is_valid() {
            return Err(DashboardError::InvalidViewport {
                width: self.width,
                height: self.height,
            });
        }
        Ok(self)
    }

    /// Horizontal position at `ratio` of the viewport width.
    #[must_use]
    pub fn x_at(self, ratio: f64) -> f64 {
        f64::from(self.width) * ratio
    }

    /// Vertical position at `ratio` of the viewport height.
    #[must_use]
    pub fn y_at(self, ratio: f64) -> f64 {
        f64::from(self.height) * ratio
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis-aligned box given by its top-left and bottom-right corners.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

impl Extent {
    #[must_use]
    pub const fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.x1 - self.x0
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.y1 - self.y0
    }

    #[must_use]
    pub fn contains(self, x: f64, y: f64) -> bool {
        x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
    }

    pub fn validate(self) -> DashboardResult<()> {
        if ![self.x0, self.y0, self.x1, self.y1]
            .iter()
            .all(|value| value.is_finite())
        {
            return Err(DashboardError::InvalidData(
                "extent coordinates must be finite".to_owned(),
            ));
        }
        if self.x1 <= self.x0 || self.y1 <= self.y0 {
            return Err(DashboardError::InvalidData(
                "extent must have positive width and height".to_owned(),
            ));
        }
        Ok(())
    }
}
