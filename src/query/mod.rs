//! Non-persistent geometric queries.

pub use self::triangle_triangle_intersection::{
    intersection_segment_triangle_triangle, TrianglePlane,
};

mod triangle_triangle_intersection;
