use crate::bounding_volume::Aabb;
use crate::math::Transform;
use crate::shape::TriMesh;
use core::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

static NEXT_MESH_ID: AtomicU64 = AtomicU64::new(0);

/// An opaque handle identifying a mesh or a clip plane.
///
/// Identity is by handle, not by geometry: two meshes sharing the same [`TriMesh`] still have
/// distinct ids.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct MeshId(u64);

impl MeshId {
    /// Allocates a new id, distinct from all the ids allocated by this process so far.
    pub fn new_unique() -> Self {
        Self(NEXT_MESH_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// An opaque handle to the material a mesh is rendered with.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct MaterialId(pub u32);

#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
/// Tags attached to scene geometry.
pub struct GeometryFlags(u8);

bitflags::bitflags! {
    impl GeometryFlags: u8 {
        /// The mesh takes part in clipping.
        const CLIPPABLE = 1 << 0;
        /// The mesh was generated by a clip operation.
        const CLIP_RESULT = 1 << 1;
    }
}

/// A triangle mesh placed in a scene.
#[derive(Clone, Debug)]
pub struct SceneMesh {
    /// The identifier of this mesh.
    pub id: MeshId,
    /// A human-readable name.
    pub name: String,
    /// The geometry, expressed in the mesh’s local-space.
    pub geometry: Arc<TriMesh>,
    /// The transform from the mesh’s local-space to world-space.
    pub world: Transform,
    /// The material used to render this mesh and the caps cut through it.
    pub material: MaterialId,
    /// The tags of this mesh.
    pub flags: GeometryFlags,
}

impl SceneMesh {
    /// Creates a new clippable scene mesh with a fresh id.
    pub fn new(
        name: impl Into<String>,
        geometry: impl Into<Arc<TriMesh>>,
        world: Transform,
    ) -> Self {
        Self {
            id: MeshId::new_unique(),
            name: name.into(),
            geometry: geometry.into(),
            world,
            material: MaterialId::default(),
            flags: GeometryFlags::CLIPPABLE,
        }
    }

    /// Sets the material of this mesh.
    pub fn with_material(mut self, material: MaterialId) -> Self {
        self.material = material;
        self
    }

    /// Sets the tags of this mesh.
    pub fn with_flags(mut self, flags: GeometryFlags) -> Self {
        self.flags = flags;
        self
    }

    /// The world-space AABB of this mesh.
    pub fn world_aabb(&self) -> Aabb {
        self.geometry.aabb(&self.world)
    }
}
