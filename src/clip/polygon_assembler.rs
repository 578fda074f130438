use super::WeldedPoints;
use crate::utils::hashmap::HashSet;

/// An undirected multigraph over welded points, built from the welded segments.
///
/// Nodes are welded point indices. The neighbors of a node, and the nodes themselves, are kept in
/// the order in which they first appear in the segments.
#[derive(Clone, Debug, Default)]
pub struct BoundaryGraph {
    adjacency: Vec<Vec<u32>>,
    nodes: Vec<u32>,
}

#[derive(Copy, Clone, Debug)]
struct Frame {
    node: u32,
    parent: Option<u32>,
    cursor: usize,
}

impl BoundaryGraph {
    /// An empty graph able to hold nodes with indices up to `num_points - 1`.
    pub fn new(num_points: usize) -> Self {
        Self {
            adjacency: vec![vec![]; num_points],
            nodes: vec![],
        }
    }

    /// Builds the graph of welded segments.
    ///
    /// The input points of `welded` are read by pairs: the points `2 * i` and `2 * i + 1` are the
    /// endpoints of the `i`-th segment.
    pub fn from_welded_segments(welded: &WeldedPoints) -> Self {
        let mut result = Self::new(welded.len());
        for edge in welded.indices.chunks_exact(2) {
            let _ = result.add_edge(edge[0], edge[1]);
        }
        result
    }

    /// Adds an undirected edge between `a` and `b`.
    ///
    /// Self-loops are ignored, in which case this returns `false`.
    pub fn add_edge(&mut self, a: u32, b: u32) -> bool {
        if a == b {
            return false;
        }

        for node in [a, b] {
            if self.adjacency[node as usize].is_empty() {
                self.nodes.push(node);
            }
        }

        self.adjacency[a as usize].push(b);
        self.adjacency[b as usize].push(a);
        true
    }

    /// The nodes with at least one edge, in order of first appearance.
    pub fn nodes(&self) -> &[u32] {
        &self.nodes
    }

    /// The neighbors of `node`, one entry per edge.
    pub fn neighbors(&self, node: u32) -> &[u32] {
        &self.adjacency[node as usize]
    }

    /// The number of edges of this graph.
    pub fn num_edges(&self) -> usize {
        self.adjacency.iter().map(|adj| adj.len()).sum::<usize>() / 2
    }

    /// Extracts cycles with a depth-first traversal of the graph.
    ///
    /// Reaching an already visited node that is still on the traversal path (other than the
    /// parent of the current node) closes a cycle made of the path from that node to the current
    /// one. Traversals are started from each unvisited node, in order of first appearance.
    ///
    /// When a node has more than two neighbors, the cycles found are not necessarily minimal and
    /// some simple cycles of the graph may be missed.
    pub fn find_cycles(&self) -> Vec<Vec<u32>> {
        let mut cycles = vec![];
        let mut visited = vec![false; self.adjacency.len()];
        // Position of each node on the traversal path.
        let mut path_pos: Vec<Option<usize>> = vec![None; self.adjacency.len()];
        let mut path: Vec<Frame> = vec![];

        for &root in &self.nodes {
            if visited[root as usize] {
                continue;
            }

            visited[root as usize] = true;
            path_pos[root as usize] = Some(0);
            path.push(Frame {
                node: root,
                parent: None,
                cursor: 0,
            });

            while let Some(&Frame {
                node,
                parent,
                cursor,
            }) = path.last()
            {
                let Some(&neighbor) = self.adjacency[node as usize].get(cursor) else {
                    path_pos[node as usize] = None;
                    let _ = path.pop();
                    continue;
                };

                let top = path.len() - 1;
                path[top].cursor += 1;

                if Some(neighbor) == parent {
                    continue;
                }

                if visited[neighbor as usize] {
                    if let Some(start) = path_pos[neighbor as usize] {
                        cycles.push(path[start..].iter().map(|frame| frame.node).collect());
                    }
                } else {
                    visited[neighbor as usize] = true;
                    path_pos[neighbor as usize] = Some(path.len());
                    path.push(Frame {
                        node: neighbor,
                        parent: Some(node),
                        cursor: 0,
                    });
                }
            }
        }

        cycles
    }
}

/// Extracts the boundary polygons of the graph.
///
/// These are the cycles of [`BoundaryGraph::find_cycles`], without duplicates (two cycles made of
/// the same set of nodes are considered identical, whatever their order), and with at least
/// three nodes.
pub fn assemble_polygons(graph: &BoundaryGraph) -> Vec<Vec<u32>> {
    let mut signatures = HashSet::new();
    let mut polygons = vec![];

    for cycle in graph.find_cycles() {
        let mut signature = cycle.clone();
        signature.sort_unstable();
        signature.dedup();

        if signatures.insert(signature) && cycle.len() >= 3 {
            polygons.push(cycle);
        }
    }

    polygons
}
