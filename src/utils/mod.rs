//! Various unsorted geometrical and logical operators.

pub use self::point_in_triangle::{
    corner_direction, is_point_in_triangle, signed_area2, Orientation,
};

pub mod hashmap;
pub mod point_in_triangle;
