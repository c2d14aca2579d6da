//! Definition of the [`Route`] type, the result of a successful search.

use super::node::Node;

/// An ordered path from the start node to the end node.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    /// Nodes from start to end, both included.
    pub nodes: Vec<Node>,

    /// Total length of the path in meters.
    pub distance_meters: f32,

    /// Number of nodes expanded during the search.
    pub nodes_expanded: usize,
}

impl Route {
    /// Number of nodes on the path.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// uids of the nodes on the path, in order.
    pub fn uids(&self) -> Vec<&str> {
        self.nodes.iter().map(|node| node.uid.as_str()).collect()
    }
}
