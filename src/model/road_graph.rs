//! In-memory road network backed by a petgraph [`StableUnGraph`].

use once_cell::unsync::OnceCell;
use ordered_float::OrderedFloat;
use petgraph::{graph::NodeIndex, stable_graph::StableUnGraph, visit::EdgeRef};

use super::RouteModel;
use crate::{
    error::{Result, RouteError},
    types::{
        edge::Edge,
        location::Location,
        node::{AsNode, Node, NodeId},
    },
    utils::graph::{build_edges, straight_line},
};

/// Relative slack allowed when comparing an edge cost with the
/// straight-line distance between its ends.
const SHORTCUT_TOLERANCE: f32 = 1e-5;

/// A RoadGraph contains the road network as an undirected graph whose
/// node indices double as [`NodeId`]s, plus a lazily filled adjacency
/// cache and the last route published by a planner.
#[derive(Debug)]
pub struct RoadGraph {
    graph: StableUnGraph<Node, OrderedFloat<f32>>,
    neighbors: Vec<OnceCell<Vec<NodeId>>>,
    extent: Option<(Location, Location)>,
    metric_scale: f32,
    path: Vec<Node>,
}

impl RoadGraph {
    /// Creates a road graph from nodes and the edges between them.
    ///
    /// Nodes are assigned `NodeId(i)` by their position in `nodes`;
    /// edges refer to nodes by those ids.
    ///
    /// # Errors
    /// [`RouteError::UnknownNode`] if an edge references a node that
    /// does not exist, [`RouteError::InvalidEdgeCost`] if a cost is
    /// negative or not finite, [`RouteError::ShortcutEdge`] if a cost is
    /// below the straight-line distance between the edge's ends. The
    /// planner's heuristic is only admissible without such edges.
    pub fn new(nodes: Vec<Node>, edges: &[Edge], metric_scale: f32) -> Result<RoadGraph> {
        info!("[1/3] Adding {} nodes to the road graph...", nodes.len());
        let extent = bounding_box(&nodes);
        let mut graph = StableUnGraph::with_capacity(nodes.len(), edges.len());
        for node in nodes {
            graph.add_node(node);
        }
        let node_count = graph.node_count();

        info!("[2/3] Adding {} edges...", edges.len());
        for edge in edges {
            for id in [edge.from, edge.to] {
                if id.index() >= node_count {
                    return Err(RouteError::UnknownNode(id));
                }
            }
            let cost = edge.cost.into_inner();
            if !cost.is_finite() || cost < 0.0 {
                return Err(RouteError::InvalidEdgeCost {
                    from: edge.from,
                    to: edge.to,
                    cost,
                });
            }
            let (a, b) = (
                NodeIndex::new(edge.from.index()),
                NodeIndex::new(edge.to.index()),
            );
            let distance = graph[a].distance(&graph[b]);
            if cost < distance * (1.0 - SHORTCUT_TOLERANCE) {
                return Err(RouteError::ShortcutEdge {
                    from: edge.from,
                    to: edge.to,
                    cost,
                    distance,
                });
            }
            graph.add_edge(a, b, edge.cost);
        }

        info!(
            "[3/3] Road graph ready: {} nodes, {} edges.",
            node_count,
            graph.edge_count()
        );
        Ok(RoadGraph {
            graph,
            neighbors: (0..node_count).map(|_| OnceCell::new()).collect(),
            extent,
            metric_scale,
            path: Vec::new(),
        })
    }

    /// Creates a road graph connecting every pair of nodes that are at
    /// most `range` graph units apart. Edge costs are straight-line
    /// distances.
    pub fn within_range(
        nodes: &[impl AsNode],
        range: f32,
        metric_scale: f32,
    ) -> Result<RoadGraph> {
        let edges = build_edges(nodes, range, straight_line, straight_line);
        debug!("{} node pairs within range {}", edges.len(), range);
        let nodes = nodes.iter().map(|node| node.as_node().clone()).collect();
        RoadGraph::new(nodes, &edges, metric_scale)
    }

    /// Return the number of edges in the graph.
    pub fn get_edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Find a node by uid.
    pub fn get_node_id(&self, uid: &str) -> Option<NodeId> {
        self.graph
            .node_indices()
            .find(|idx| self.graph[*idx].uid == uid)
            .map(|idx| NodeId(idx.index()))
    }

    /// The underlying petgraph graph.
    pub fn graph(&self) -> &StableUnGraph<Node, OrderedFloat<f32>> {
        &self.graph
    }
}

impl RouteModel for RoadGraph {
    fn find_closest_node(&self, x_fraction: f32, y_fraction: f32) -> Option<NodeId> {
        let (min, max) = self.extent?;
        let (min_x, min_y) = (min.x.into_inner(), min.y.into_inner());
        let target = Location::new(
            min_x + (max.x.into_inner() - min_x) * x_fraction,
            min_y + (max.y.into_inner() - min_y) * y_fraction,
        );
        let closest = self
            .graph
            .node_indices()
            .min_by_key(|idx| OrderedFloat(self.graph[*idx].location.distance(&target)))
            .map(|idx| NodeId(idx.index()));
        debug!("closest node to {:?}: {:?}", target, closest);
        closest
    }

    fn find_neighbors(&self, node: NodeId) -> &[NodeId] {
        self.neighbors[node.index()].get_or_init(|| {
            let mut found: Vec<NodeId> = self
                .graph
                .neighbors(NodeIndex::new(node.index()))
                .map(|idx| NodeId(idx.index()))
                .collect();
            found.sort_unstable();
            found.dedup();
            trace!("discovered {} neighbors of {}", found.len(), node);
            found
        })
    }

    fn distance(&self, from: NodeId, to: NodeId) -> f32 {
        self.node(from).distance(self.node(to))
    }

    /// The cheapest edge between the two nodes, or the straight-line
    /// distance when they are not adjacent.
    fn edge_cost(&self, from: NodeId, to: NodeId) -> f32 {
        let a = NodeIndex::new(from.index());
        let b = NodeIndex::new(to.index());
        self.graph
            .edges(a)
            .filter(|e| (e.source() == a && e.target() == b) || (e.source() == b && e.target() == a))
            .map(|e| *e.weight())
            .min()
            .map(OrderedFloat::into_inner)
            .unwrap_or_else(|| self.distance(from, to))
    }

    fn metric_scale(&self) -> f32 {
        self.metric_scale
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.graph[NodeIndex::new(id.index())]
    }

    fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    fn path(&self) -> &[Node] {
        &self.path
    }

    fn set_path(&mut self, path: Vec<Node>) {
        self.path = path;
    }
}

/// Lower-left and upper-right corners of the nodes' locations.
fn bounding_box(nodes: &[Node]) -> Option<(Location, Location)> {
    let first = nodes.first()?.location;
    Some(nodes.iter().fold((first, first), |(min, max), node| {
        let l = node.location;
        (
            Location {
                x: min.x.min(l.x),
                y: min.y.min(l.y),
            },
            Location {
                x: max.x.max(l.x),
                y: max.y.max(l.y),
            },
        )
    }))
}
