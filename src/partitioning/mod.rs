//! Spatial partitioning tools.

pub use self::bvh::{Bvh, BvhBuildOptions, BvhBuildStrategy, BvhNode, BvhNodeWide, LeafPairs};
pub use self::bvh_cache::BvhCache;
pub use self::spatial_hash::SpatialHash;

mod bvh;
mod bvh_cache;
mod spatial_hash;
