//! Helper functons for working with graphs.

use crate::types::{
    edge::Edge,
    node::{AsNode, NodeId},
};

/// Build edges among nodes.
///
/// The function will try to connect every node to every other node.
/// However, constraints can be added to the graph to prevent ineligible
/// nodes from being connected.
///
/// For example, if the constraint represents the longest road segment
/// we expect in the map, we only want to connect nodes that are within
/// that length. A constraint function is also needed to determine if a
/// connection is valid.
///
/// Nodes are identified by their position in `nodes`, and each pair is
/// connected at most once (`from < to`), since roads are undirected.
///
/// # Arguments
/// * `nodes` - A slice of nodes.
/// * `constraint` - Only nodes within a constraint can be connected.
/// * `constraint_function` - A function that takes two nodes and
///   returns a float to compare against `constraint`.
/// * `cost_function` - A function that computes the "weight" between
///   two nodes.
///
/// # Returns
/// A vector of edges.
///
/// # Time Complexity
/// *O*(*n^2*).
pub fn build_edges(
    nodes: &[impl AsNode],
    constraint: f32,
    constraint_function: fn(&dyn AsNode, &dyn AsNode) -> f32,
    cost_function: fn(&dyn AsNode, &dyn AsNode) -> f32,
) -> Vec<Edge> {
    let mut edges = Vec::new();
    for (i, from) in nodes.iter().enumerate() {
        for (j, to) in nodes.iter().enumerate().skip(i + 1) {
            if constraint_function(from.as_node(), to.as_node()) <= constraint {
                let cost = cost_function(from.as_node(), to.as_node());
                edges.push(Edge::new(NodeId(i), NodeId(j), cost));
            }
        }
    }
    edges
}

/// Straight-line distance between two node-like values. Handy as both
/// the constraint and the cost function of [`build_edges`].
pub fn straight_line(from: &dyn AsNode, to: &dyn AsNode) -> f32 {
    from.as_node().distance(to.as_node())
}
