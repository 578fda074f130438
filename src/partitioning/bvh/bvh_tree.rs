use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};

/// The strategy used to split a set of primitives into two children while building the tree.
#[derive(Default, Clone, Debug, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum BvhBuildStrategy {
    /// Split at the middle of the centroid bounds, along their longest axis.
    ///
    /// This is cheap to build and gives good results on the regular, evenly tessellated meshes
    /// typically found in a scene.
    #[default]
    Center,
    /// Split along the plane minimizing the Surface Area Heuristic, evaluated over a fixed set of
    /// bins.
    ///
    /// This implements the strategy from "On fast Construction of SAH-based Bounding Volume Hierarchies", Ingo Ward.
    Binned,
}

/// Parameters controlling the construction of a [`Bvh`].
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BvhBuildOptions {
    /// The splitting strategy.
    pub strategy: BvhBuildStrategy,
    /// The maximum depth of the tree. Any node reaching this depth becomes a leaf.
    pub max_depth: u32,
    /// The number of primitives below which a node becomes a leaf.
    pub max_leaf_size: u32,
}

impl Default for BvhBuildOptions {
    fn default() -> Self {
        Self {
            strategy: BvhBuildStrategy::Center,
            max_depth: 40,
            max_leaf_size: 10,
        }
    }
}

impl BvhBuildOptions {
    /// Sets the splitting strategy.
    pub fn with_strategy(mut self, strategy: BvhBuildStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the maximum depth of the tree.
    pub fn with_max_depth(mut self, max_depth: u32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the maximum number of primitives per leaf.
    pub fn with_max_leaf_size(mut self, max_leaf_size: u32) -> Self {
        self.max_leaf_size = max_leaf_size.max(1);
        self
    }
}

/// A piece of data packing the leaf flag as well as the number of primitives below a BVH node.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct BvhNodeData(u32);
const LEAF: u32 = 1 << 31;

impl BvhNodeData {
    #[inline(always)]
    pub(super) fn leaf(primitive_count: u32) -> Self {
        Self(primitive_count | LEAF)
    }

    #[inline(always)]
    pub(super) fn internal(primitive_count: u32) -> Self {
        Self(primitive_count)
    }

    #[inline(always)]
    pub(super) fn primitive_count(self) -> u32 {
        self.0 & !LEAF
    }

    #[inline(always)]
    pub(super) fn is_leaf(self) -> bool {
        self.0 & LEAF != 0
    }
}

/// A pair of tree nodes.
///
/// Both `left` and `right` are guaranteed to be valid except for the only special-case where the
/// tree fits in a single leaf, in which case only `left` is valid and `right` is empty.
#[derive(Copy, Clone, Debug)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct BvhNodeWide {
    pub(super) left: BvhNode,
    pub(super) right: BvhNode,
}

impl BvhNodeWide {
    #[inline(always)]
    pub(super) fn zeros() -> Self {
        Self {
            left: BvhNode::zeros(),
            right: BvhNode::zeros(),
        }
    }

    /// The two nodes in `self` seen as an array.
    #[inline(always)]
    pub fn as_array(&self) -> [&BvhNode; 2] {
        [&self.left, &self.right]
    }

    /// The number of primitives below both nodes in `self`.
    pub fn primitive_count(&self) -> u32 {
        self.left.primitive_count() + self.right.primitive_count()
    }
}

/// A node (internal or leaf) of a BVH.
#[derive(Copy, Clone, Debug)]
#[repr(C)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct BvhNode {
    /// Mins coordinates of the node’s bounding volume.
    pub(super) mins: Point<Real>,
    /// For an internal node, the index of the [`BvhNodeWide`] holding its two children.
    /// For a leaf, the offset of its first primitive in [`Bvh::primitives`].
    pub(super) children: u32,
    /// Maxs coordinates of this node’s bounding volume.
    pub(super) maxs: Point<Real>,
    /// Packed data associated to this node (leaf flag and primitive count).
    pub(super) data: BvhNodeData,
}

impl BvhNode {
    #[inline(always)]
    pub(super) fn zeros() -> Self {
        Self {
            mins: Point::origin(),
            children: 0,
            maxs: Point::origin(),
            data: BvhNodeData::leaf(0),
        }
    }

    /// Initializes a leaf covering `primitive_count` primitives starting at `first_primitive`.
    #[inline(always)]
    pub(super) fn leaf(aabb: Aabb, first_primitive: u32, primitive_count: u32) -> BvhNode {
        Self {
            mins: aabb.mins,
            maxs: aabb.maxs,
            children: first_primitive,
            data: BvhNodeData::leaf(primitive_count),
        }
    }

    /// Initializes an internal node whose children are stored at the `children`-th wide node.
    #[inline(always)]
    pub(super) fn internal(aabb: Aabb, children: u32, primitive_count: u32) -> BvhNode {
        Self {
            mins: aabb.mins,
            maxs: aabb.maxs,
            children,
            data: BvhNodeData::internal(primitive_count),
        }
    }

    /// Is this node a leaf?
    #[inline(always)]
    pub fn is_leaf(&self) -> bool {
        self.data.is_leaf()
    }

    /// Is this node a leaf without any primitive?
    ///
    /// This only happens for the right child of the root when the whole tree fits in one leaf.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.primitive_count() == 0
    }

    /// The number of primitives contained by the subtree rooted at this node.
    #[inline(always)]
    pub fn primitive_count(&self) -> u32 {
        self.data.primitive_count()
    }

    /// The min corner of this node’s AABB.
    #[inline]
    pub fn mins(&self) -> Point<Real> {
        self.mins
    }

    /// The max corner of this node’s AABB.
    #[inline]
    pub fn maxs(&self) -> Point<Real> {
        self.maxs
    }

    /// This node’s AABB.
    #[inline]
    pub fn aabb(&self) -> Aabb {
        Aabb {
            mins: self.mins,
            maxs: self.maxs,
        }
    }

    /// The center of this node’s AABB.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        na::center(&self.mins, &self.maxs)
    }

    /// Checks if the AABB of `self` intersects the `other` node’s AABB.
    pub fn intersects(&self, other: &Self) -> bool {
        na::partial_le(&self.mins, &other.maxs) && na::partial_ge(&self.maxs, &other.mins)
    }

    /// Checks if the AABB of `self` fully encloses the `other` AABB.
    pub fn contains_aabb(&self, other: &Aabb) -> bool {
        na::partial_le(&self.mins, &other.mins) && na::partial_ge(&self.maxs, &other.maxs)
    }
}

/// A Bounding Volume Hierarchy over the triangles of a mesh.
///
/// The tree is binary. Its internal nodes are stored by pairs of siblings ([`BvhNodeWide`]), the
/// root pair being the first element of [`Self::nodes`]. Each leaf covers a contiguous range of
/// [`Self::primitives`], which stores the indices of the primitives (i.e. triangle indices) the
/// tree was built from.
///
/// The tree is immutable once built.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Bvh {
    pub(super) nodes: Vec<BvhNodeWide>,
    pub(super) primitives: Vec<u32>,
    pub(super) depth: u32,
}

impl Bvh {
    /// An empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Is this tree empty?
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The number of primitives this tree was built from.
    pub fn primitive_count(&self) -> usize {
        self.primitives.len()
    }

    /// The depth of the tree, the root pair being at depth 1.
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// The wide nodes of this tree. The first one holds the root’s children.
    pub fn nodes(&self) -> &[BvhNodeWide] {
        &self.nodes
    }

    /// The primitive indices of this tree, ordered so that each leaf covers a contiguous range.
    pub fn primitives(&self) -> &[u32] {
        &self.primitives
    }

    /// The primitives contained by the leaf `node`.
    ///
    /// Returns an empty slice if `node` is not a leaf.
    #[inline]
    pub fn leaf_primitives(&self, node: &BvhNode) -> &[u32] {
        if node.is_leaf() {
            let start = node.children as usize;
            &self.primitives[start..start + node.primitive_count() as usize]
        } else {
            &[]
        }
    }

    /// The AABB bounding everything in this tree.
    pub fn root_aabb(&self) -> Aabb {
        match self.nodes.first() {
            None => Aabb::new_invalid(),
            Some(root) if root.right.is_empty() => root.left.aabb(),
            Some(root) => {
                let mut aabb = root.left.aabb();
                crate::bounding_volume::BoundingVolume::merge(&mut aabb, &root.right.aabb());
                aabb
            }
        }
    }

    /// The number of leaves of this tree.
    pub fn leaf_count(&self) -> usize {
        self.nodes
            .iter()
            .flat_map(|wide| wide.as_array())
            .filter(|node| node.is_leaf() && !node.is_empty())
            .count()
    }
}
