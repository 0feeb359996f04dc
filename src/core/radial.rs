use std::f64::consts::{FRAC_PI_2, TAU};

use smallvec::SmallVec;

use super::types::Point;

/// Vertex list sized for the seven star-chart axes without allocating.
pub type RadialPolygon = SmallVec<[Point; 8]>;

/// Angle of axis `angle_index` out of `total_axes`.
///
/// Axis 0 points straight up and the axes proceed clockwise in screen space
/// (y grows downward).
#[must_use]
pub fn axis_angle(angle_index: usize, total_axes: usize) -> f64 {
    if total_axes == 0 {
        return -FRAC_PI_2;
    }
    angle_index as f64 * TAU / total_axes as f64 - FRAC_PI_2
}

#[must_use]
pub fn radial_vertex(
    angle_index: usize,
    total_axes: usize,
    magnitude: f64,
    center: Point,
) -> Point {
    let angle = axis_angle(angle_index, total_axes);
    Point::new(
        center.x + magnitude * angle.cos(),
        center.y + magnitude * angle.sin(),
    )
}

/// Builds a closed polygon from per-axis magnitudes in axis order.
///
/// Returns `None` as soon as one magnitude is undefined; the polygon is then
/// not drawable and must be skipped, never drawn with a zero vertex.
#[must_use]
pub fn radial_polygon(magnitudes: &[Option<f64>], center: Point) -> Option<RadialPolygon> {
    let total_axes = magnitudes.len();
    magnitudes
        .iter()
        .enumerate()
        .map(|(index, magnitude)| {
            magnitude
                .filter(|value| value.is_finite())
                .map(|value| radial_vertex(index, total_axes, value, center))
        })
        .collect()
}
