//! The graph model a [`RoutePlanner`](crate::algorithms::astar::RoutePlanner)
//! searches over.
//!
//! The planner only talks to the model through [`RouteModel`], so any
//! road network representation can be routed on. [`RoadGraph`] is the
//! in-memory implementation shipped with the crate.

pub mod road_graph;

pub use road_graph::RoadGraph;

use crate::types::node::{Node, NodeId};

/// Everything the search engine needs from a road network.
pub trait RouteModel {
    /// Nearest node to a point given as fractions (usually 0.0 to 1.0)
    /// of the model's extent along each axis.
    ///
    /// Returns [`None`] only when the model has no nodes.
    fn find_closest_node(&self, x_fraction: f32, y_fraction: f32) -> Option<NodeId>;

    /// Nodes adjacent to `node`. Implementations may discover neighbors
    /// lazily on first request; asking again must be cheap and return
    /// the same set.
    fn find_neighbors(&self, node: NodeId) -> &[NodeId];

    /// Symmetric straight-line distance between two nodes, in graph
    /// units. Used as the A* heuristic, so it must never exceed the
    /// cheapest path cost between the nodes.
    fn distance(&self, from: NodeId, to: NodeId) -> f32;

    /// Cost of travelling the edge between two adjacent nodes, in graph
    /// units. Must be non-negative.
    fn edge_cost(&self, from: NodeId, to: NodeId) -> f32 {
        self.distance(from, to)
    }

    /// Factor converting graph units into meters.
    fn metric_scale(&self) -> f32;

    fn node(&self, id: NodeId) -> &Node;

    fn node_count(&self) -> usize;

    /// The most recently published route, empty if none.
    fn path(&self) -> &[Node];

    /// Publish a route. Called by the planner only when a path is found.
    fn set_path(&mut self, path: Vec<Node>);
}
