//! Transformation of polygons and meshes.

pub use self::ear_clipping::triangulate_ear_clipping;

mod ear_clipping;

#[cfg(feature = "wavefront")]
mod wavefront;
