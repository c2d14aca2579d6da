//! Error types for the route planner.

use thiserror::Error;

use crate::types::node::NodeId;

/// Route planner error type
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    #[error("No path found from node {from} to node {to}")]
    NoPath { from: NodeId, to: NodeId },

    #[error("Search stopped after expanding {0} nodes")]
    ExpansionLimit(usize),

    #[error("The model has no nodes to route between")]
    EmptyModel,

    #[error("Edge references unknown node {0}")]
    UnknownNode(NodeId),

    #[error("Edge {from} - {to} has invalid cost {cost}")]
    InvalidEdgeCost { from: NodeId, to: NodeId, cost: f32 },

    #[error("Edge {from} - {to} costs {cost}, less than the straight-line distance {distance}")]
    ShortcutEdge {
        from: NodeId,
        to: NodeId,
        cost: f32,
        distance: f32,
    },
}

pub type Result<T> = std::result::Result<T, RouteError>;
