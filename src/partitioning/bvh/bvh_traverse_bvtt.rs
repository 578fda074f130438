use super::{Bvh, BvhNode};
use smallvec::SmallVec;

const TRAVERSAL_STACK_SIZE: usize = 32;

impl Bvh {
    /// Performs a simultaneous traversal of the BVHs `self` and `other`, and yields the pairs
    /// of leaves it reached.
    ///
    /// Each item contains the primitives of the leaf from `self` and the primitives of the leaf
    /// from `other`. Any node pairs failing the given `check` will be excluded from the traversal,
    /// including the pairs of leaves. The nodes of `self` are always the first argument of `check`.
    pub fn leaf_pairs<'a, F: Fn(&BvhNode, &BvhNode) -> bool>(
        &'a self,
        other: &'a Self,
        check: F,
    ) -> LeafPairs<'a, F> {
        let mut stack = SmallVec::default();

        if let (Some(root1), Some(root2)) = (self.nodes.first(), other.nodes.first()) {
            for node1 in root1.as_array() {
                for node2 in root2.as_array() {
                    if !node1.is_empty() && !node2.is_empty() && check(node1, node2) {
                        stack.push((node1, node2));
                    }
                }
            }
        }

        LeafPairs {
            tree1: self,
            tree2: other,
            stack,
            check,
        }
    }
}

/// Iterator through the pairs of overlapping leaves of two BVHs.
///
/// See [`Bvh::leaf_pairs`].
pub struct LeafPairs<'a, Check: Fn(&BvhNode, &BvhNode) -> bool> {
    tree1: &'a Bvh,
    tree2: &'a Bvh,
    stack: SmallVec<[(&'a BvhNode, &'a BvhNode); TRAVERSAL_STACK_SIZE]>,
    check: Check,
}

impl<'a, Check: Fn(&BvhNode, &BvhNode) -> bool> Iterator for LeafPairs<'a, Check> {
    type Item = (&'a [u32], &'a [u32]);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (node1, node2) = self.stack.pop()?;

            match (node1.is_leaf(), node2.is_leaf()) {
                (true, true) => {
                    return Some((
                        self.tree1.leaf_primitives(node1),
                        self.tree2.leaf_primitives(node2),
                    ))
                }
                (true, false) => {
                    let child2 = &self.tree2.nodes[node2.children as usize];
                    // Push right first so the left child is visited first.
                    if (self.check)(node1, &child2.right) {
                        self.stack.push((node1, &child2.right));
                    }
                    if (self.check)(node1, &child2.left) {
                        self.stack.push((node1, &child2.left));
                    }
                }
                (false, true) => {
                    let child1 = &self.tree1.nodes[node1.children as usize];
                    if (self.check)(&child1.right, node2) {
                        self.stack.push((&child1.right, node2));
                    }
                    if (self.check)(&child1.left, node2) {
                        self.stack.push((&child1.left, node2));
                    }
                }
                (false, false) => {
                    let child1 = &self.tree1.nodes[node1.children as usize];
                    let child2 = &self.tree2.nodes[node2.children as usize];
                    if (self.check)(&child1.right, &child2.right) {
                        self.stack.push((&child1.right, &child2.right));
                    }
                    if (self.check)(&child1.left, &child2.right) {
                        self.stack.push((&child1.left, &child2.right));
                    }
                    if (self.check)(&child1.right, &child2.left) {
                        self.stack.push((&child1.right, &child2.left));
                    }
                    if (self.check)(&child1.left, &child2.left) {
                        self.stack.push((&child1.left, &child2.left));
                    }
                }
            }
        }
    }
}
