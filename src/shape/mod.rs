//! Shapes supported by planecut.

pub use self::segment::Segment;
pub use self::triangle::Triangle;
pub use self::trimesh::{TriMesh, TriMeshBuilderError};

mod segment;
mod triangle;
mod trimesh;
