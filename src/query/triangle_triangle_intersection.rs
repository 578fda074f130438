use crate::math::{Point, Real, Vector};
use crate::shape::{Segment, Triangle};
use arrayvec::ArrayVec;

/// Distance threshold below which two points along the intersection line are considered equal.
pub const EPS: Real = 1.0e-6;

/// The plane supporting a triangle, given by its unit normal and its offset along that normal.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TrianglePlane {
    /// The unit normal of the plane.
    pub normal: Vector<Real>,
    /// The signed distance from the origin to the plane, along `normal`.
    pub offset: Real,
}

impl TrianglePlane {
    /// The plane supporting `tri`, or `None` if `tri` is degenerate.
    pub fn new(tri: &Triangle) -> Option<Self> {
        let normal = tri.robust_normal().try_normalize(Real::EPSILON)?;
        Some(Self {
            normal,
            offset: normal.dot(&tri.a.coords),
        })
    }

    /// The signed distance from `pt` to this plane.
    #[inline]
    pub fn signed_distance(&self, pt: &Point<Real>) -> Real {
        self.normal.dot(&pt.coords) - self.offset
    }

    /// The point where the segment `[a, b]` crosses this plane.
    ///
    /// The result doesn’t depend on the order of `a` and `b`: both triangles sharing an edge
    /// find the exact same crossing point, so the boundary loops close after welding. Crossings
    /// closer than `1e-6` to an endpoint snap to that endpoint.
    ///
    /// Returns `None` if the segment doesn’t reach the plane or is parallel to it.
    pub fn segment_intersection(&self, a: &Point<Real>, b: &Point<Real>) -> Option<Point<Real>> {
        let (a, b) = if (a.x, a.y, a.z) <= (b.x, b.y, b.z) {
            (a, b)
        } else {
            (b, a)
        };

        let dist_a = self.signed_distance(a);
        let dist_b = self.signed_distance(b);
        let denom = dist_a - dist_b;

        if relative_eq!(denom, 0.0) {
            return None;
        }

        let dir = *b - *a;
        let dir_norm = dir.norm();
        let time_of_impact = dist_a / denom;
        let scaled_toi = time_of_impact * dir_norm;

        if scaled_toi < -EPS || scaled_toi > dir_norm + EPS {
            None
        } else if scaled_toi <= EPS {
            Some(*a)
        } else if scaled_toi >= dir_norm - EPS {
            Some(*b)
        } else {
            Some(*a + dir * time_of_impact)
        }
    }
}

/// Computes the segment where two triangles cross each other.
///
/// The returned segment is the intersection of both triangles, i.e. the part of the line common
/// to both triangles’ planes that lies inside both triangles.
///
/// Returns `None` if the triangles don’t intersect, if they only touch at a single point, if any
/// of them is degenerate, or if they are coplanar (a coplanar contact is an area, not a segment).
pub fn intersection_segment_triangle_triangle(
    tri1: &Triangle,
    tri2: &Triangle,
) -> Option<Segment> {
    let plane1 = TrianglePlane::new(tri1)?;
    let plane2 = TrianglePlane::new(tri2)?;
    let intersection_dir = plane1.normal.cross(&plane2.normal).try_normalize(1.0e-6)?;

    let range1 = intersection_range(tri1, &plane2, &intersection_dir)?;
    let range2 = intersection_range(tri2, &plane1, &intersection_dir)?;

    if range1[1].0 <= range2[0].0 + EPS || range2[1].0 <= range1[0].0 + EPS {
        // The two triangles intersect each others’ plane, but these intersections are disjoint.
        return None;
    }

    let a = if range2[0].0 > range1[0].0 + EPS {
        range2[0].1
    } else {
        range1[0].1
    };

    let b = if range2[1].0 < range1[1].0 - EPS {
        range2[1].1
    } else {
        range1[1].1
    };

    Some(Segment::new(a, b))
}

// The extremal points, sorted along `dir`, where the edges of `tri` cross the given plane.
fn intersection_range(
    tri: &Triangle,
    plane: &TrianglePlane,
    dir: &Vector<Real>,
) -> Option<[(Real, Point<Real>); 2]> {
    let hits: ArrayVec<(Real, Point<Real>), 3> = tri
        .edges()
        .iter()
        .filter_map(|edge| plane.segment_intersection(&edge.a, &edge.b))
        .map(|pt| (dir.dot(&pt.coords), pt))
        .collect();

    let mut range = [
        (Real::MAX, Point::origin()),
        (-Real::MAX, Point::origin()),
    ];

    for hit in hits {
        if hit.0 < range[0].0 {
            range[0] = hit;
        }
        if hit.0 > range[1].0 {
            range[1] = hit;
        }
    }

    if range[0].0 >= range[1].0 {
        // The triangle doesn’t cross the plane.
        None
    } else {
        Some(range)
    }
}
