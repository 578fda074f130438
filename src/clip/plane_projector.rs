use crate::math::{Point, Point2, Real, Transform, UnitVector};
use crate::shape::Segment;

/// Maps points between the 3D frame of a clip plane and its 2D frame.
///
/// Points are expected in the plane’s local-space, where the plane lies in the XY plane.
#[derive(Copy, Clone, Debug)]
pub struct PlaneProjector {
    world: Transform,
    normal: UnitVector<Real>,
    reference: Point<Real>,
}

impl PlaneProjector {
    /// Creates a projector for the plane with the given local-to-world transform and normal.
    ///
    /// `reference` is the point of the plane the projection is relative to. By convention, it is
    /// the first point ever projected.
    pub fn new(world: Transform, normal: UnitVector<Real>, reference: Point<Real>) -> Self {
        Self {
            world,
            normal,
            reference,
        }
    }

    /// Projects `pt` onto the plane, keeping its `x` and `y` coordinates.
    ///
    /// Only the `z` coordinate of the result comes from the orthogonal projection of `pt` onto
    /// the plane passing through the reference point with normal [`Self::normal`]. The `x` and `y`
    /// coordinates of `pt` are kept unchanged even when the normal is not aligned with `+Z`.
    /// This is exact for points given in the plane’s local-space, but does not match a true
    /// orthogonal projection in general.
    pub fn project_point_3d(&self, pt: &Point<Real>) -> Point<Real> {
        let dist = (pt - self.reference).dot(&self.normal);
        let projected = pt - *self.normal * dist;
        Point::new(pt.x, pt.y, projected.z)
    }

    /// The 2D coordinates of `pt` in the plane’s frame.
    ///
    /// This drops the `z` coordinate of [`Self::project_point_3d`].
    pub fn project_point(&self, pt: &Point<Real>) -> Point2<Real> {
        self.project_point_3d(pt).xy()
    }

    /// Projects both endpoints of every segment, in order.
    ///
    /// The endpoints of the `i`-th segment are at indices `2 * i` and `2 * i + 1` of the result.
    pub fn project_segments(&self, segments: &[Segment]) -> Vec<Point2<Real>> {
        segments
            .iter()
            .flat_map(|seg| [self.project_point(&seg.a), self.project_point(&seg.b)])
            .collect()
    }

    /// Re-embeds a 2D point of the plane’s frame into world-space.
    pub fn lift_point(&self, pt: &Point2<Real>) -> Point<Real> {
        self.world.transform_point(&Point::new(pt.x, pt.y, 0.0))
    }

    /// The plane normal used by this projector.
    pub fn normal(&self) -> &UnitVector<Real> {
        &self.normal
    }

    /// The reference point of the projection.
    pub fn reference(&self) -> &Point<Real> {
        &self.reference
    }
}
