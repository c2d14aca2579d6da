//! Struct definitions and implementations for objects that represent
//! vertices in a road network.
//!
//! The most generic form of a vertex is [`Node`]. In the real world a
//! vertex could be an intersection, a dead end, or a point where a road
//! changes shape. Other types can wrap and extend `Node`.
//!
//! Since Rust doesn't have a built-in way to represent an interface
//! type, we use an [`AsNode`] trait to achieve the similar effect. So,
//! a function may take an [`AsNode`] parameter and call its
//! [`as_node`](`AsNode::as_node`) method to get a [`Node`] reference.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::location::Location;

/// Since Rust doesn't allow for inheritance, we need to use `trait` as
/// a hack to allow passing "Node-like" objects to functions.
pub trait AsNode {
    /// Returns the generic `Node` struct that an object "extends".
    fn as_node(&self) -> &Node;
    fn get_uid(&self) -> String;
}

//------------------------------------------------------------------
// Structs and Implementations
//------------------------------------------------------------------

/// Identity of a node inside a model.
///
/// Ids are dense indices assigned by the model in insertion order, so
/// per-search state can be kept in a plain vector indexed by `NodeId`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub usize);

impl NodeId {
    /// Position of the node in the model's node arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Represent a vertex in a road network.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Node {
    /// Typed as a [`String`] to allow for synthetic ids such as
    /// `osm:node:123456`, or generated UUIDs.
    pub uid: String,

    /// Denotes the position of the node in graph space.
    ///
    /// See also [`Location`].
    pub location: Location,
}

impl Node {
    /// Creates a node at the given graph-space coordinates.
    pub fn new(uid: impl Into<String>, x: f32, y: f32) -> Self {
        Node {
            uid: uid.into(),
            location: Location::new(x, y),
        }
    }

    /// Straight-line distance between two nodes, in graph units.
    pub fn distance(&self, other: &Node) -> f32 {
        self.location.distance(&other.location)
    }
}

impl AsNode for Node {
    fn as_node(&self) -> &Node {
        self
    }

    fn get_uid(&self) -> String {
        self.uid.clone()
    }
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
