use super::{MeshId, SceneMesh};
use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::Real;

/// Something that can list the meshes of a scene.
pub trait SceneProvider {
    /// The meshes of the scene, in a stable order.
    fn meshes(&self) -> &[SceneMesh];

    /// The world-space AABB of all the meshes of the scene.
    ///
    /// Returns an invalid AABB if the scene is empty.
    fn world_aabb(&self) -> Aabb {
        let mut result = Aabb::new_invalid();
        for mesh in self.meshes() {
            result.merge(&mesh.world_aabb());
        }
        result
    }

    /// The longest edge of the world-space AABB of the scene, or zero if it is empty.
    ///
    /// This is the usual size of the clip plane cutting through the whole scene.
    fn longest_edge(&self) -> Real {
        if self.meshes().is_empty() {
            0.0
        } else {
            self.world_aabb().extents().max()
        }
    }
}

impl SceneProvider for [SceneMesh] {
    fn meshes(&self) -> &[SceneMesh] {
        self
    }
}

impl SceneProvider for Vec<SceneMesh> {
    fn meshes(&self) -> &[SceneMesh] {
        self
    }
}

/// An ordered set of meshes.
///
/// Meshes are kept in insertion order, which is also the order of the results of a clip.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    meshes: Vec<SceneMesh>,
}

impl Scene {
    /// An empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a mesh at the end of the scene and returns its id.
    pub fn add(&mut self, mesh: SceneMesh) -> MeshId {
        let id = mesh.id;
        self.meshes.push(mesh);
        id
    }

    /// The mesh with the given id.
    pub fn get(&self, id: MeshId) -> Option<&SceneMesh> {
        self.meshes.iter().find(|mesh| mesh.id == id)
    }

    /// A mutable reference to the mesh with the given id.
    pub fn get_mut(&mut self, id: MeshId) -> Option<&mut SceneMesh> {
        self.meshes.iter_mut().find(|mesh| mesh.id == id)
    }

    /// Removes the mesh with the given id, preserving the order of the other meshes.
    pub fn remove(&mut self, id: MeshId) -> Option<SceneMesh> {
        let pos = self.meshes.iter().position(|mesh| mesh.id == id)?;
        Some(self.meshes.remove(pos))
    }

    /// The number of meshes in this scene.
    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    /// Is this scene empty?
    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }
}

impl SceneProvider for Scene {
    fn meshes(&self) -> &[SceneMesh] {
        &self.meshes
    }
}

impl FromIterator<SceneMesh> for Scene {
    fn from_iter<I: IntoIterator<Item = SceneMesh>>(iter: I) -> Self {
        Self {
            meshes: iter.into_iter().collect(),
        }
    }
}
