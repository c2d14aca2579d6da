//! Definition of the `Edge` type.
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use super::node::NodeId;

/// An edge is a road segment between two nodes.
/// The cost represents the "weight" of the edge, in graph units.
///
/// Edges are undirected once loaded into a model.
#[derive(Debug, Copy, Clone, PartialEq, Hash, Eq, Serialize, Deserialize)]
pub struct Edge {
    /// One end of the edge.
    pub from: NodeId,

    /// The other end of the edge.
    pub to: NodeId,

    /// The weight of the edge.
    pub cost: OrderedFloat<f32>,
}

impl Edge {
    pub fn new(from: NodeId, to: NodeId, cost: f32) -> Self {
        Edge {
            from,
            to,
            cost: OrderedFloat(cost),
        }
    }
}
