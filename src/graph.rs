//! Implement a directed, weighted graph whose vertices can be addressed
//! either by index or by a user supplied name.
//!
//! Shortest paths from a single source are computed with Dijkstra's
//! algorithm: see shortest_paths().

mod dot_parser;
pub mod edge;
mod error;
pub mod node;
mod shortest_paths;

use std::{collections::HashMap, fmt::Display};

use self::edge::{Edge, EdgeDisposition};
use self::node::Node;

pub use self::error::GraphError;
pub use self::shortest_paths::{Path, ShortestPaths};

/// Simplest possible representation of a graph: indexed arrays of nodes and
/// edges, plus a map from node name to node index so that named lookups
/// don't have to scan the node list.
///
/// Names are unique: the first add_node() call with a given name creates the
/// node, and later calls with the same name return the original index.
/// Edges carry no such restriction.  Parallel edges and self loops are both
/// allowed, as the edge list is just a list.
#[derive(Debug, Default)]
pub struct Graph {
    /// All nodes in the graph.
    nodes: Vec<Node>,
    /// All edges in the graph.
    edges: Vec<Edge>,
    /// Index of each node's name into nodes.
    name_index: HashMap<String, usize>,
}

impl Graph {
    pub fn new() -> Self {
        Graph {
            nodes: vec![],
            edges: vec![],
            name_index: HashMap::new(),
        }
    }

    /// Return the node indexed by node_idx.
    pub fn get_node(&self, node_idx: usize) -> &Node {
        &self.nodes[node_idx]
    }

    /// Return the edge indexed by edge_idx.
    pub fn get_edge(&self, edge_idx: usize) -> &Edge {
        &self.edges[edge_idx]
    }

    /// Return the number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Return the number of edges in the graph.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Return the node identified by name, adding it to the graph first if
    /// no node with that name exists yet.
    ///
    /// Nodes are created in first-seen order, so the first name ever added
    /// gets index 0.
    pub fn add_node(&mut self, name: &str) -> usize {
        if let Some(node_idx) = self.name_index.get(name) {
            return *node_idx;
        }

        let new_node = Node::new(name);
        let idx = self.nodes.len();
        self.nodes.push(new_node);
        self.name_index.insert(name.to_string(), idx);

        idx
    }

    /// Add a new edge between two nodes, and return the edge's index in the
    /// graph.
    ///
    /// src_node and dst_node must be indexes previously returned by
    /// add_node().  The weight is not validated here: negative weights are
    /// rejected when a shortest path search reaches them.
    pub fn add_edge(&mut self, src_node: usize, dst_node: usize, weight: f64) -> usize {
        let new_edge = Edge::new(src_node, dst_node, weight);
        let idx = self.edges.len();
        self.edges.push(new_edge);

        self.nodes[src_node].add_edge(idx, EdgeDisposition::Out);
        self.nodes[dst_node].add_edge(idx, EdgeDisposition::In);

        idx
    }

    /// Add a directed edge between two named nodes, creating either node if
    /// it does not exist yet.  Returns the edge's index.
    ///
    /// Calling this twice with the same names adds parallel edges.
    pub fn add(&mut self, src_name: &str, dst_name: &str, weight: f64) -> usize {
        let src_node = self.add_node(src_name);
        let dst_node = self.add_node(dst_name);

        self.add_edge(src_node, dst_node, weight)
    }

    /// Return the index of the node identified by name, or None if no node
    /// with that name exists.  Never creates a node.
    pub fn node_idx(&self, name: &str) -> Option<usize> {
        self.name_index.get(name).copied()
    }

    /// Return the name of the node indexed by node_idx.
    ///
    /// An out of range index is an error rather than a panic, since callers
    /// routinely hold indexes that came from elsewhere (parsed input, a
    /// previously computed result).
    pub fn node_name(&self, node_idx: usize) -> Result<&str, GraphError> {
        self.nodes
            .get(node_idx)
            .map(|node| node.name())
            .ok_or(GraphError::NodeIndexOutOfBounds {
                idx: node_idx,
                node_count: self.nodes.len(),
            })
    }
}

impl Display for Graph {
    fn fmt(&self, fmt: &mut std::fmt::Formatter<'_>) -> std::result::Result<(), std::fmt::Error> {
        for edge in &self.edges {
            let src = self.nodes[edge.src_node].name();
            let dst = self.nodes[edge.dst_node].name();

            writeln!(fmt, "{src} -{}-> {dst}", edge.weight)?;
        }
        Ok(())
    }
}
