//! Single source shortest paths over a Graph, using Dijkstra's algorithm
//! with a binary min heap.
//!
//! The search produces a ShortestPaths value holding, for every node, the
//! distance from the source and the predecessor on a shortest path.  The
//! actual node sequence of a path is reconstructed on demand with
//! ShortestPaths::path_to().

mod heap;

use std::cmp::Ordering;

use heap::MinHeap;

use super::{Graph, GraphError};

/// A heap entry: the best known distance to a node at the time the entry
/// was pushed.  Ordered by distance so that the heap pops the closest
/// frontier node first.
///
/// Relaxing a node pushes a fresh entry rather than re-ordering the old
/// one; superseded entries are recognized and skipped when popped.
#[derive(Debug, Clone, Copy)]
struct DistEntry {
    dist: f64,
    node_idx: usize,
}

impl DistEntry {
    fn new(dist: f64, node_idx: usize) -> Self {
        DistEntry { dist, node_idx }
    }
}

impl Ord for DistEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist
            .total_cmp(&other.dist)
            .then_with(|| self.node_idx.cmp(&other.node_idx))
    }
}

impl PartialOrd for DistEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for DistEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DistEntry {}

/// An ordered sequence of nodes leading from the search source to a target,
/// along with the total weight of the edges traversed.
///
/// The source is the first entry and the target the last; a path from the
/// source to itself holds the source alone and has total 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    /// Node indexes in traversal order, source and target included.
    pub nodes: Vec<usize>,
    /// Sum of the weights of the edges along the path.
    pub total: f64,
}

/// The result of a shortest path search: per node distance and predecessor
/// data for every node of the graph the search ran on.
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    /// The node the search started from.
    source: usize,
    /// Distance from the source per node; None for nodes the search never
    /// reached.
    distances: Vec<Option<f64>>,
    /// The node immediately before this one on a shortest path from the
    /// source; None for the source itself and for unreached nodes.
    predecessors: Vec<Option<usize>>,
}

impl ShortestPaths {
    /// The node the search started from.
    pub fn source(&self) -> usize {
        self.source
    }

    /// The number of nodes in the graph the search ran on.
    pub fn node_count(&self) -> usize {
        self.distances.len()
    }

    /// The distance from the source to target, or None if target cannot be
    /// reached from the source.
    pub fn distance(&self, target: usize) -> Result<Option<f64>, GraphError> {
        self.distances
            .get(target)
            .copied()
            .ok_or(GraphError::NodeIndexOutOfBounds {
                idx: target,
                node_count: self.distances.len(),
            })
    }

    /// True if the search reached target.
    pub fn is_reachable(&self, target: usize) -> Result<bool, GraphError> {
        Ok(self.distance(target)?.is_some())
    }

    /// Reconstruct the shortest path from the source to target by walking
    /// the predecessor chain backwards, or None if target is unreachable.
    ///
    /// The walk is bounded by the node count: a chain that fails to arrive
    /// at the source within that many hops cannot be a simple path, and is
    /// reported as an error instead of looping.
    pub fn path_to(&self, target: usize) -> Result<Option<Path>, GraphError> {
        let total = match self.distance(target)? {
            Some(dist) => dist,
            None => return Ok(None),
        };

        let mut nodes = vec![target];
        let mut node_idx = target;
        while node_idx != self.source {
            node_idx = match self.predecessors[node_idx] {
                Some(pred_idx) => pred_idx,
                None => return Err(GraphError::CorruptPredecessors(target)),
            };
            nodes.push(node_idx);

            if nodes.len() > self.node_count() {
                return Err(GraphError::CorruptPredecessors(target));
            }
        }
        nodes.reverse();

        Ok(Some(Path { nodes, total }))
    }
}

impl Graph {
    /// Find the shortest path from the source node to every other node of
    /// the graph.
    ///
    /// Standard Dijkstra: every node starts at distance infinity except the
    /// source at 0.  The closest unvisited frontier node is popped off a min
    /// heap and each of its outgoing edges is relaxed: if stepping through
    /// the popped node improves the best known distance to the edge's
    /// destination, that distance and predecessor are updated and the
    /// destination (re)joins the frontier.  Ties pop in unspecified order.
    ///
    /// Reaching an edge with a negative weight is an error, as the
    /// algorithm's results are only correct for non-negative weights.
    pub fn shortest_paths(&self, source: usize) -> Result<ShortestPaths, GraphError> {
        if source >= self.node_count() {
            return Err(GraphError::NodeIndexOutOfBounds {
                idx: source,
                node_count: self.node_count(),
            });
        }

        let mut distances = vec![f64::INFINITY; self.node_count()];
        let mut predecessors: Vec<Option<usize>> = vec![None; self.node_count()];
        let mut frontier = MinHeap::new(self.node_count());

        distances[source] = 0.0;
        frontier.push(DistEntry::new(0.0, source));

        while let Some(entry) = frontier.pop() {
            // A stale entry: this node was relaxed again after the entry
            // was pushed, and the better entry has already been popped.
            if entry.dist > distances[entry.node_idx] {
                continue;
            }

            for edge_idx in self.get_node(entry.node_idx).out_edges.iter() {
                let edge = self.get_edge(*edge_idx);
                if edge.weight < 0.0 {
                    return Err(GraphError::NegativeWeight {
                        src_name: self.node_name(edge.src_node)?.to_string(),
                        dst_name: self.node_name(edge.dst_node)?.to_string(),
                        weight: edge.weight,
                    });
                }

                let candidate = entry.dist + edge.weight;
                if candidate < distances[edge.dst_node] {
                    distances[edge.dst_node] = candidate;
                    predecessors[edge.dst_node] = Some(entry.node_idx);
                    frontier.push(DistEntry::new(candidate, edge.dst_node));
                }
            }
        }

        Ok(ShortestPaths {
            source,
            distances: distances
                .into_iter()
                .map(|dist| dist.is_finite().then_some(dist))
                .collect(),
            predecessors,
        })
    }

    /// Find the shortest path from the named source node to every other
    /// node of the graph.
    ///
    /// Unlike add(), a search never creates nodes: an unknown source name
    /// is an error.
    pub fn shortest_paths_from(&self, source_name: &str) -> Result<ShortestPaths, GraphError> {
        let source = self
            .node_idx(source_name)
            .ok_or_else(|| GraphError::UnknownNode(source_name.to_string()))?;

        self.shortest_paths(source)
    }
}
