//! Definition of the segment shape.

use crate::math::{Point, Real, Transform, Vector};

use na::{self, Unit};

/// A segment shape.
///
/// Clipping produces segments where the plane surface crosses one triangle of a target mesh.
/// Segments are not connected to each other: each one is emitted independently.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Segment {
    /// The segment first point.
    pub a: Point<Real>,
    /// The segment second point.
    pub b: Point<Real>,
}

impl Segment {
    /// Creates a new segment from two points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Segment {
        Segment { a, b }
    }

    /// The direction of this segment scaled by its length.
    ///
    /// Points from `self.a` toward `self.b`.
    pub fn scaled_direction(&self) -> Vector<Real> {
        self.b - self.a
    }

    /// The length of this segment.
    pub fn length(&self) -> Real {
        self.scaled_direction().norm()
    }

    /// The unit direction of this segment.
    ///
    /// Points from `self.a()` toward `self.b()`.
    /// Returns `None` is both points are equal.
    pub fn direction(&self) -> Option<Unit<Vector<Real>>> {
        Unit::try_new(self.scaled_direction(), crate::math::DEFAULT_EPSILON)
    }

    /// Swaps the two vertices of this segment.
    pub fn swap(&mut self) {
        core::mem::swap(&mut self.a, &mut self.b)
    }

    /// Applies the affine transformation `m` to the vertices of this segment and returns it.
    pub fn transformed(&self, m: &Transform) -> Self {
        Segment::new(m.transform_point(&self.a), m.transform_point(&self.b))
    }

    /// The point at the middle of this segment.
    pub fn center(&self) -> Point<Real> {
        na::center(&self.a, &self.b)
    }
}

impl From<[Point<Real>; 2]> for Segment {
    fn from(arr: [Point<Real>; 2]) -> Self {
        Segment::new(arr[0], arr[1])
    }
}
