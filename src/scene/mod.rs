//! The scene providing the meshes and the plane of a clip.

pub use self::clip_plane::ClipPlane;
pub use self::scene::{Scene, SceneProvider};
pub use self::scene_mesh::{GeometryFlags, MaterialId, MeshId, SceneMesh};
pub use self::selector::{Clippable, MeshSelector};

mod clip_plane;
mod scene;
mod scene_mesh;
mod selector;
