use crate::math::Real;
use crate::scene::MeshId;

/// Errors preventing a clip from running.
///
/// Degenerate geometry (no intersection, polygons that cannot be triangulated, …) is never an
/// error: it results in empty outputs.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum ClipError {
    /// The BVH of a mesh or of the clip plane was not built before clipping.
    #[error("no BVH was built for the mesh {mesh:?}; build it in the BVH cache before clipping")]
    MissingBvh {
        /// The mesh without BVH.
        mesh: MeshId,
    },
    /// The BVH of a mesh or of the clip plane was built from different geometry.
    ///
    /// This happens if the geometry was replaced without invalidating its cached BVH.
    #[error(
        "the BVH of the mesh {mesh:?} covers {bvh_triangles} triangles but the mesh has \
         {mesh_triangles}; rebuild it in the BVH cache before clipping"
    )]
    StaleBvh {
        /// The mesh with an outdated BVH.
        mesh: MeshId,
        /// The number of triangles the BVH was built from.
        bvh_triangles: usize,
        /// The current number of triangles of the mesh.
        mesh_triangles: usize,
    },
    /// The world transform of the clip plane cannot be inverted.
    #[error("the world transform of the clip plane {mesh:?} is not invertible")]
    SingularTransform {
        /// The id of the clip plane.
        mesh: MeshId,
    },
    /// The welding tolerance is not a finite, strictly positive number.
    #[error("the welding tolerance must be finite and strictly positive, got {0}")]
    InvalidTolerance(Real),
}
