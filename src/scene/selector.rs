use super::{GeometryFlags, SceneMesh};

/// Decides which meshes of a scene take part in a clip.
pub trait MeshSelector {
    /// Returns `true` if `mesh` must be clipped.
    fn select(&self, mesh: &SceneMesh) -> bool;
}

impl<F: Fn(&SceneMesh) -> bool> MeshSelector for F {
    fn select(&self, mesh: &SceneMesh) -> bool {
        self(mesh)
    }
}

/// Selects every mesh tagged [`GeometryFlags::CLIPPABLE`], except generated clip results.
#[derive(Copy, Clone, Debug, Default)]
pub struct Clippable;

impl MeshSelector for Clippable {
    fn select(&self, mesh: &SceneMesh) -> bool {
        mesh.flags.contains(GeometryFlags::CLIPPABLE)
            && !mesh.flags.contains(GeometryFlags::CLIP_RESULT)
    }
}
