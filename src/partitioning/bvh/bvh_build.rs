use super::bvh_tree::BvhNodeWide;
use super::{Bvh, BvhBuildOptions, BvhBuildStrategy, BvhNode};
use crate::bounding_volume::{Aabb, BoundingVolume};
use crate::math::{Point, Real};

struct BuildContext<'a> {
    options: &'a BvhBuildOptions,
    leaves: &'a [Aabb],
    centers: Vec<Point<Real>>,
}

impl BuildContext<'_> {
    fn aabb(&self, primitives: &[u32]) -> Aabb {
        let mut result = Aabb::new_invalid();
        for i in primitives {
            result.merge(&self.leaves[*i as usize]);
        }
        result
    }

    fn centroid_aabb(&self, primitives: &[u32]) -> Aabb {
        Aabb::from_points(primitives.iter().map(|i| self.centers[*i as usize]))
    }

    fn is_leaf(&self, primitives: &[u32], depth: u32) -> bool {
        primitives.len() <= self.options.max_leaf_size.max(1) as usize
            || depth >= self.options.max_depth
    }
}

impl Bvh {
    /// Builds a new BVH from the bounding boxes of its primitives.
    ///
    /// The `i`-th element of `leaves` is the AABB of the primitive with index `i`.
    pub fn from_leaves(options: &BvhBuildOptions, leaves: &[Aabb]) -> Self {
        let mut result = Bvh::new();

        if leaves.is_empty() {
            return result;
        }

        let ctx = BuildContext {
            options,
            leaves,
            centers: leaves.iter().map(|aabb| aabb.center()).collect(),
        };
        let mut primitives: Vec<u32> = (0..leaves.len() as u32).collect();

        result.nodes.push(BvhNodeWide::zeros());

        if ctx.is_leaf(&primitives, 1) {
            result.nodes[0].left =
                BvhNode::leaf(ctx.aabb(&primitives), 0, primitives.len() as u32);
            result.depth = 1;
        } else {
            result.build_children(&ctx, 0, &mut primitives, 0, 1);
        }

        result.primitives = primitives;
        log::trace!(
            "built BVH over {} primitives: {} wide nodes, depth {}",
            leaves.len(),
            result.nodes.len(),
            result.depth
        );
        result
    }

    // Splits `primitives` in two and writes both resulting children into the
    // `target`-th wide node.
    fn build_children(
        &mut self,
        ctx: &BuildContext,
        target: u32,
        primitives: &mut [u32],
        offset: u32,
        depth: u32,
    ) {
        let mid = match ctx.options.strategy {
            BvhBuildStrategy::Center => split_center(ctx, primitives),
            BvhBuildStrategy::Binned => split_binned(ctx, primitives),
        };

        // In degenerate cases where all the primitives end up on the same side,
        // just split the range in two.
        let mid = if mid == 0 || mid == primitives.len() {
            primitives.len() / 2
        } else {
            mid
        };

        let (left_primitives, right_primitives) = primitives.split_at_mut(mid);
        let left = self.build_node(ctx, left_primitives, offset, depth);
        let right = self.build_node(ctx, right_primitives, offset + mid as u32, depth);
        self.nodes[target as usize] = BvhNodeWide { left, right };
    }

    fn build_node(
        &mut self,
        ctx: &BuildContext,
        primitives: &mut [u32],
        offset: u32,
        depth: u32,
    ) -> BvhNode {
        self.depth = self.depth.max(depth);
        let aabb = ctx.aabb(primitives);
        let count = primitives.len() as u32;

        if ctx.is_leaf(primitives, depth) {
            BvhNode::leaf(aabb, offset, count)
        } else {
            let id = self.nodes.len() as u32;
            self.nodes.push(BvhNodeWide::zeros());
            self.build_children(ctx, id, primitives, offset, depth + 1);
            BvhNode::internal(aabb, id, count)
        }
    }
}

/// Moves every primitive satisfying `pred` to the front of the slice.
///
/// Returns the number of such primitives.
fn partition(primitives: &mut [u32], mut pred: impl FnMut(u32) -> bool) -> usize {
    let mut mid = 0;
    for i in 0..primitives.len() {
        if pred(primitives[i]) {
            primitives.swap(i, mid);
            mid += 1;
        }
    }
    mid
}

fn split_center(ctx: &BuildContext, primitives: &mut [u32]) -> usize {
    let centroid_aabb = ctx.centroid_aabb(primitives);
    let axis = centroid_aabb.extents().imax();
    let pivot = centroid_aabb.center()[axis];

    if centroid_aabb.extents()[axis] <= 0.0 {
        return 0;
    }

    partition(primitives, |i| ctx.centers[i as usize][axis] < pivot)
}

fn split_binned(ctx: &BuildContext, primitives: &mut [u32]) -> usize {
    // PERF: the bin count could depend on the number of primitives to split.
    const NUM_BINS: usize = 8;
    const BIN_EPSILON: Real = 1.0e-5;

    let centroid_aabb = ctx.centroid_aabb(primitives);
    let bins_axis = centroid_aabb.extents().imax();
    let bins_range = [centroid_aabb.mins[bins_axis], centroid_aabb.maxs[bins_axis]];

    if bins_range[1] <= bins_range[0] {
        return 0;
    }

    // Compute bins characteristics.
    let k1 = NUM_BINS as Real * (1.0 - BIN_EPSILON) / (bins_range[1] - bins_range[0]);
    let k0 = bins_range[0];
    let bin_id = |i: u32| -> usize {
        ((k1 * (ctx.centers[i as usize][bins_axis] - k0)) as usize).min(NUM_BINS - 1)
    };

    let mut bins = [BvhBin::default(); NUM_BINS];
    for i in &*primitives {
        let bin = &mut bins[bin_id(*i)];
        bin.aabb.merge(&ctx.leaves[*i as usize]);
        bin.leaf_count += 1;
    }

    // Select the best splitting plane (there are NUM_BINS - 1 splitting planes) based on SAH.
    let mut right_merges = bins;
    let mut right_acc = bins[NUM_BINS - 1];

    for i in 1..NUM_BINS - 1 {
        right_acc.aabb.merge(&right_merges[NUM_BINS - 1 - i].aabb);
        right_acc.leaf_count += right_merges[NUM_BINS - 1 - i].leaf_count;
        right_merges[NUM_BINS - 1 - i] = right_acc;
    }

    let mut best_cost = Real::MAX;
    let mut best_plane = 0;
    let mut left_merge = bins[0];

    for i in 0..NUM_BINS - 1 {
        let right = &right_merges[i + 1];

        if left_merge.leaf_count > 0 && right.leaf_count > 0 {
            let cost = left_merge.aabb.half_area() * left_merge.leaf_count as Real
                + right.aabb.half_area() * right.leaf_count as Real;
            if cost < best_cost {
                best_cost = cost;
                best_plane = i;
            }
        }

        left_merge.aabb.merge(&bins[i + 1].aabb);
        left_merge.leaf_count += bins[i + 1].leaf_count;
    }

    partition(primitives, |i| bin_id(i) <= best_plane)
}

#[derive(Copy, Clone, Debug)]
struct BvhBin {
    aabb: Aabb,
    leaf_count: u32,
}

impl Default for BvhBin {
    fn default() -> Self {
        Self {
            aabb: Aabb::new_invalid(),
            leaf_count: 0,
        }
    }
}
