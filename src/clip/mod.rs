//! Cross-sections of meshes cut by a clip plane.
//!
//! The entry point is [`Clipper::clip`]. The individual steps of the pipeline are exposed too,
//! so they can be used on their own.

pub use self::bvh_intersector::intersect_bvhs;
pub use self::clip_error::ClipError;
pub use self::clip_options::ClipOptions;
pub use self::clip_result::{ClipOutput, ClipResult, FillMesh};
pub use self::clipper::Clipper;
pub use self::plane_projector::PlaneProjector;
pub use self::point_welder::{PointWelder, WeldedPoints};
pub use self::polygon_assembler::{assemble_polygons, BoundaryGraph};
pub use self::triangulator::{remove_collinear_vertices, triangulate_polygon};

mod bvh_intersector;
mod clip_error;
mod clip_options;
mod clip_result;
mod clipper;
mod plane_projector;
mod point_welder;
mod polygon_assembler;
mod triangulator;
