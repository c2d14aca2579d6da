//! Road Network Route Planning Library.
//! Finds shortest routes between two points of a road network with A*.
//!
//! ```
//! use route_planner::{Node, NodeId, Edge, RoadGraph, RoutePlanner};
//!
//! let nodes = vec![
//!     Node::new("a", 0.0, 0.0),
//!     Node::new("b", 1.0, 0.0),
//!     Node::new("c", 2.0, 0.0),
//! ];
//! let edges = [
//!     Edge::new(NodeId(0), NodeId(1), 1.0),
//!     Edge::new(NodeId(1), NodeId(2), 1.0),
//! ];
//! let mut model = RoadGraph::new(nodes, &edges, 100.0).unwrap();
//!
//! // Start and end are percentages of the map extent.
//! let route = RoutePlanner::new(&mut model, 0.0, 0.0, 100.0, 0.0)
//!     .unwrap()
//!     .a_star_search()
//!     .unwrap();
//! assert_eq!(route.uids(), vec!["a", "b", "c"]);
//! assert_eq!(route.distance_meters, 200.0);
//! ```

#[macro_use]
extern crate log;

pub mod config;
pub mod error;
pub mod model;

pub mod types {
    pub mod edge;
    pub mod location;
    pub mod node;
    pub mod route;
    pub mod status;
}

pub mod algorithms {
    pub mod astar;
    pub mod frontier;
}

pub mod utils {
    pub mod generator;
    pub mod graph;
}

pub use algorithms::astar::RoutePlanner;
pub use config::PlannerConfig;
pub use error::{Result, RouteError};
pub use model::{RoadGraph, RouteModel};
pub use types::{
    edge::Edge,
    location::Location,
    node::{AsNode, Node, NodeId},
    route::Route,
    status::{NodeStatus, SearchState},
};
