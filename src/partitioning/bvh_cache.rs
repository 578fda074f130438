use crate::partitioning::{Bvh, BvhBuildOptions};
use crate::scene::{ClipPlane, MeshId, MeshSelector, SceneProvider};
use crate::shape::TriMesh;
use crate::utils::hashmap::HashMap;
use std::sync::Arc;

impl Bvh {
    /// Builds the BVH of the triangles of `mesh`, in the mesh’s local-space.
    ///
    /// The primitive indices of the tree are triangle indices.
    pub fn from_trimesh(options: &BvhBuildOptions, mesh: &TriMesh) -> Self {
        let leaves: Vec<_> = mesh.triangle_aabbs().collect();
        Self::from_leaves(options, &leaves)
    }
}

/// The BVHs of the meshes of a scene, keyed by mesh id.
///
/// The cache is owned by whoever builds the trees. Clipping only reads it and never builds
/// missing entries: rebuilding the BVH of a mesh whose geometry changed is the responsibility
/// of the owner, through [`Self::invalidate`] then [`Self::build`].
#[derive(Clone, Debug, Default)]
pub struct BvhCache {
    options: BvhBuildOptions,
    trees: HashMap<MeshId, Arc<Bvh>>,
}

impl BvhCache {
    /// An empty cache building its trees with the given options.
    pub fn new(options: BvhBuildOptions) -> Self {
        Self {
            options,
            trees: HashMap::default(),
        }
    }

    /// The options used to build the trees of this cache.
    pub fn options(&self) -> &BvhBuildOptions {
        &self.options
    }

    /// Builds, or rebuilds, the BVH of the mesh `id` with the geometry `mesh`.
    pub fn build(&mut self, id: MeshId, mesh: &TriMesh) -> Arc<Bvh> {
        let bvh = Arc::new(Bvh::from_trimesh(&self.options, mesh));
        let _ = self.trees.insert(id, bvh.clone());
        bvh
    }

    /// Builds the BVH of a clip plane.
    pub fn build_plane(&mut self, plane: &ClipPlane) -> Arc<Bvh> {
        self.build(plane.id, &plane.geometry)
    }

    /// Builds the BVH of every mesh of `scene` chosen by `selector` that doesn’t have one yet.
    ///
    /// Returns the number of trees built.
    pub fn build_selected(
        &mut self,
        scene: &(impl SceneProvider + ?Sized),
        selector: &impl MeshSelector,
    ) -> usize {
        let mut built = 0;
        for mesh in scene.meshes() {
            if selector.select(mesh) && !self.contains(mesh.id) {
                let _ = self.build(mesh.id, &mesh.geometry);
                built += 1;
            }
        }
        built
    }

    /// The BVH of the mesh `id`, if it was built.
    pub fn get(&self, id: MeshId) -> Option<&Bvh> {
        self.trees.get(&id).map(|bvh| &**bvh)
    }

    /// Does this cache contain the BVH of the mesh `id`?
    pub fn contains(&self, id: MeshId) -> bool {
        self.trees.contains_key(&id)
    }

    /// Removes the BVH of the mesh `id`.
    ///
    /// Returns `true` if there was one.
    pub fn invalidate(&mut self, id: MeshId) -> bool {
        self.trees.remove(&id).is_some()
    }

    /// Removes all the BVHs of this cache.
    pub fn clear(&mut self) {
        self.trees.clear()
    }

    /// The number of BVHs in this cache.
    pub fn len(&self) -> usize {
        self.trees.len()
    }

    /// Is this cache empty?
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }
}
