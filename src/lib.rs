/*!
planecut
========

**planecut** computes the cross-section produced when a finite clipping plane
cuts through one or several triangle meshes of a 3D scene.

For each selected mesh, the clipping pipeline:
1. finds every triangle of the mesh crossed by the plane with a dual BVH traversal,
2. projects the resulting segments into the plane's 2D frame and welds their endpoints,
3. assembles the welded segments into closed boundary loops,
4. triangulates those loops into cap geometry expressed back in world-space.

See [`clip::Clipper`] for the entry point.
*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![allow(clippy::manual_range_contains)] // This usually makes it way more verbose that it could be.
#![allow(clippy::type_complexity)]

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod clip;
pub mod partitioning;
pub mod query;
pub mod scene;
pub mod shape;
pub mod transformation;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Matrix3, Matrix4, Point2, Point3, UnitVector3, Vector2, Vector3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The homogeneous transformation type used for world transforms.
    ///
    /// Unlike an isometry, it may contain scaling.
    pub type Transform = Matrix4<Real>;
}
