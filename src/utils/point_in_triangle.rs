//! Function to check if a 2D point is inside a triangle and related functions.

use crate::math::{Point2, Real};

#[derive(Eq, PartialEq, Debug, Copy, Clone)]
/// The orientation or winding direction of a corner or polygon.
pub enum Orientation {
    /// Counter-clockwise
    Ccw,
    /// Clockwise
    Cw,
    /// Neither (a straight line)
    None,
}

/// Returns the direction of a line through `p1`, `p2` and `p3`.
///
/// Counter-clockwise example:
/// o p1
///  .        o p3
///   .     .
///    .  .
///     o p2
///
/// Clockwise example:
///     o p2
///    .  .
///   .     .
///  .        o p3
/// o p1
///
/// Returns [`Orientation::None`] if the points are collinear or any coordinate is NaN.
pub fn corner_direction(
    p1: &Point2<Real>,
    p2: &Point2<Real>,
    p3: &Point2<Real>,
) -> Orientation {
    let v1 = p1 - p2;
    let v2 = p3 - p2;
    let cross: Real = v1.perp(&v2);

    if cross < 0.0 {
        Orientation::Ccw
    } else if cross > 0.0 {
        Orientation::Cw
    } else {
        Orientation::None
    }
}

/// Returns `true` if point `p` is in triangle with corners `v1`, `v2` and `v3`.
///
/// Points on the boundary of the triangle are considered inside.
/// Returns `None` if the triangle is invalid i.e. all points are the same or on a straight line.
pub fn is_point_in_triangle(
    p: &Point2<Real>,
    v1: &Point2<Real>,
    v2: &Point2<Real>,
    v3: &Point2<Real>,
) -> Option<bool> {
    let d1 = corner_direction(p, v1, v2);
    let d2 = corner_direction(p, v2, v3);
    let d3 = corner_direction(p, v3, v1);

    let has_cw = d1 == Orientation::Cw || d2 == Orientation::Cw || d3 == Orientation::Cw;
    let has_ccw = d1 == Orientation::Ccw || d2 == Orientation::Ccw || d3 == Orientation::Ccw;

    if d1 == Orientation::None && d2 == Orientation::None && d3 == Orientation::None {
        None
    } else {
        Some(!(has_cw && has_ccw))
    }
}

/// Twice the signed area of the polygon `vertices`.
///
/// The result is positive if the polygon is counter-clockwise.
pub fn signed_area2(vertices: &[Point2<Real>]) -> Real {
    let mut result = 0.0;
    for (i, a) in vertices.iter().enumerate() {
        let b = &vertices[(i + 1) % vertices.len()];
        result += a.coords.perp(&b.coords);
    }
    result
}
