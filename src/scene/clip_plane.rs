use super::MeshId;
use crate::math::{Real, Transform, UnitVector, Vector};
use crate::shape::TriMesh;
use na::Unit;
use std::sync::Arc;

/// A finite, oriented cutting surface.
///
/// The plane’s local-space is the 2D frame of every clip result: its geometry lies in the local
/// XY plane and its local `+Z` axis, mapped to world-space, is the cutting direction.
#[derive(Clone, Debug)]
pub struct ClipPlane {
    /// The identifier of this plane, used to look up its BVH.
    pub id: MeshId,
    /// The geometry of this plane, expressed in its local-space.
    pub geometry: Arc<TriMesh>,
    /// The transform from the plane’s local-space to world-space.
    pub world: Transform,
}

impl ClipPlane {
    /// Creates a clip plane from arbitrary flat geometry lying in its local XY plane.
    pub fn new(geometry: impl Into<Arc<TriMesh>>, world: Transform) -> Self {
        Self {
            id: MeshId::new_unique(),
            geometry: geometry.into(),
            world,
        }
    }

    /// Creates a rectangular clip plane of size `width × height`, centered on the origin of its
    /// local-space.
    ///
    /// A square with side [`SceneProvider::longest_edge`](crate::scene::SceneProvider::longest_edge)
    /// is large enough to cut through a whole scene centered on the plane.
    pub fn quad(width: Real, height: Real, world: Transform) -> Self {
        Self::new(TriMesh::quad(width, height), world)
    }

    /// The world-space cutting direction: the plane’s local `+Z` axis mapped by its world
    /// transform, normalized.
    ///
    /// Returns `None` if the world transform collapses that axis.
    pub fn normal(&self) -> Option<UnitVector<Real>> {
        let dir = self.world.transform_vector(&Vector::z());
        Unit::try_new(dir, crate::math::DEFAULT_EPSILON)
    }
}
