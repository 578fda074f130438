use super::{Bvh, BvhNode};
use crate::bounding_volume::Aabb;
use crate::utils::hashmap::HashSet;

impl Bvh {
    /// Panics if the tree isn’t well-formed.
    ///
    /// The tree is well-formed if it is topologically correct (internal indices are all valid,
    /// every primitive is covered by exactly one leaf) and geometrically correct (node AABBs bound
    /// the ones of their children, leaf AABBs bound the ones of their primitives, given by
    /// `leaves`).
    pub fn assert_well_formed(&self, leaves: &[Aabb]) {
        if self.is_empty() {
            assert!(leaves.is_empty());
            return;
        }

        let mut seen_primitives = HashSet::new();
        let mut seen_nodes = HashSet::new();
        let root = &self.nodes[0];

        if root.right.is_empty() {
            assert!(root.left.is_leaf());
        }

        let mut primitive_count = 0;
        for node in root.as_array() {
            if !node.is_empty() {
                primitive_count += self.assert_well_formed_recurse(
                    node,
                    leaves,
                    &mut seen_nodes,
                    &mut seen_primitives,
                );
            }
        }

        assert_eq!(primitive_count as usize, leaves.len());
        assert_eq!(seen_primitives.len(), leaves.len());
        assert_eq!(seen_nodes.len() + 1, self.nodes.len());
    }

    fn assert_well_formed_recurse(
        &self,
        node: &BvhNode,
        leaves: &[Aabb],
        seen_nodes: &mut HashSet<u32>,
        seen_primitives: &mut HashSet<u32>,
    ) -> u32 {
        if node.is_leaf() {
            let primitives = self.leaf_primitives(node);
            assert_eq!(primitives.len() as u32, node.primitive_count());

            for i in primitives {
                assert!(node.contains_aabb(&leaves[*i as usize]));
                assert!(
                    seen_primitives.insert(*i),
                    "Primitive {} covered by two leaves.",
                    i
                );
            }

            node.primitive_count()
        } else {
            assert_ne!(node.children, 0, "The root cannot be a child.");
            if !seen_nodes.insert(node.children) {
                panic!("Detected loop. Node {} visited twice.", node.children);
            }

            let children = &self.nodes[node.children as usize];
            let mut count = 0;
            for child in children.as_array() {
                assert!(!child.is_empty());
                assert!(node.contains_aabb(&child.aabb()));
                count +=
                    self.assert_well_formed_recurse(child, leaves, seen_nodes, seen_primitives);
            }

            assert_eq!(count, node.primitive_count());
            count
        }
    }
}
