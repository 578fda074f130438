pub use bvh_traverse_bvtt::LeafPairs;
pub use bvh_tree::{Bvh, BvhBuildOptions, BvhBuildStrategy, BvhNode, BvhNodeWide};

mod bvh_build;
mod bvh_traverse_bvtt;
mod bvh_tree;
mod bvh_validation;
