//! The A* search engine.
//!
//! A [`RoutePlanner`] resolves the nodes closest to a start and an end
//! point, then searches the model outward from the start, always
//! expanding the open node with the lowest f = g + h, where h is the
//! straight-line distance to the end node.
//!
//! All per-search bookkeeping lives in the planner, in an arena indexed
//! by [`NodeId`]. The model is only read during the search and is
//! written once, when a found path is published to it.

use super::frontier::Frontier;
use crate::{
    config::PlannerConfig,
    error::{Result, RouteError},
    model::RouteModel,
    types::{
        node::{Node, NodeId},
        route::Route,
        status::{NodeStatus, SearchState},
    },
};

/// Search annotations of one node.
#[derive(Debug, Copy, Clone, Default)]
struct NodeState {
    /// Cost of the best known path from the start node.
    g_value: f32,
    /// Straight-line distance to the end node. Set once, on discovery.
    h_value: f32,
    parent: Option<NodeId>,
    status: NodeStatus,
    /// Sequence number of the node's live frontier entry.
    entry: u64,
}

/// A* route planner over a [`RouteModel`].
pub struct RoutePlanner<'m, M: RouteModel> {
    model: &'m mut M,
    config: PlannerConfig,
    start_node: NodeId,
    end_node: NodeId,
    nodes: Vec<NodeState>,
    open_list: Frontier,
    distance: f32,
    nodes_expanded: usize,
    state: SearchState,
}

impl<'m, M: RouteModel> RoutePlanner<'m, M> {
    /// Creates a planner between two points given as percentages
    /// (0 to 100) of the model's extent.
    ///
    /// # Errors
    /// [`RouteError::EmptyModel`] if the model has no node to snap the
    /// points to.
    pub fn new(
        model: &'m mut M,
        start_x: f32,
        start_y: f32,
        end_x: f32,
        end_y: f32,
    ) -> Result<Self> {
        Self::with_config(
            model,
            start_x,
            start_y,
            end_x,
            end_y,
            PlannerConfig::default(),
        )
    }

    /// Same as [`RoutePlanner::new`], with explicit configuration.
    /// The inputs are multiplied by
    /// [`PlannerConfig::coordinate_scale`] before the nearest node
    /// lookup.
    pub fn with_config(
        model: &'m mut M,
        start_x: f32,
        start_y: f32,
        end_x: f32,
        end_y: f32,
        config: PlannerConfig,
    ) -> Result<Self> {
        let scale = config.coordinate_scale;
        let start_node = model
            .find_closest_node(start_x * scale, start_y * scale)
            .ok_or(RouteError::EmptyModel)?;
        let end_node = model
            .find_closest_node(end_x * scale, end_y * scale)
            .ok_or(RouteError::EmptyModel)?;
        debug!(
            "start node: {} ({}), end node: {} ({})",
            start_node,
            model.node(start_node).uid,
            end_node,
            model.node(end_node).uid
        );

        let mut planner = RoutePlanner {
            model,
            config,
            start_node,
            end_node,
            nodes: Vec::new(),
            open_list: Frontier::new(),
            distance: 0.0,
            nodes_expanded: 0,
            state: SearchState::Initialized,
        };
        planner.initialize();
        Ok(planner)
    }

    /// Fresh session: every node unvisited, the start node alone in the
    /// open list.
    fn initialize(&mut self) {
        self.nodes.clear();
        self.nodes
            .resize(self.model.node_count(), NodeState::default());
        self.open_list.clear();
        self.distance = 0.0;
        self.nodes_expanded = 0;

        let h_value = self.calculate_h_value(self.start_node);
        let entry = self.open_list.push(self.start_node, h_value);
        self.nodes[self.start_node.index()] = NodeState {
            g_value: 0.0,
            h_value,
            parent: None,
            status: NodeStatus::Open,
            entry,
        };
        self.state = SearchState::Initialized;
    }

    /// Heuristic: straight-line distance from `node` to the end node.
    pub fn calculate_h_value(&self, node: NodeId) -> f32 {
        self.model.distance(node, self.end_node)
    }

    /// Discover the neighbors of `current` and push every neighbor whose
    /// cost improves into the open list.
    ///
    /// Closed neighbors are reopened when a strictly cheaper path to
    /// them is found.
    fn add_neighbors(&mut self, current: NodeId) {
        let current_g = self.nodes[current.index()].g_value;

        for &neighbor in self.model.find_neighbors(current) {
            let g_value = current_g + self.model.edge_cost(current, neighbor);
            let known = self.nodes[neighbor.index()];

            let h_value = match known.status {
                NodeStatus::Unvisited => self.calculate_h_value(neighbor),
                _ if g_value < known.g_value => {
                    trace!(
                        "relaxing {} ({:?}): g {} -> {}",
                        neighbor,
                        known.status,
                        known.g_value,
                        g_value
                    );
                    known.h_value
                }
                _ => continue,
            };

            let entry = self.open_list.push(neighbor, g_value + h_value);
            self.nodes[neighbor.index()] = NodeState {
                g_value,
                h_value,
                parent: Some(current),
                status: NodeStatus::Open,
                entry,
            };
        }
    }

    /// Pop the open node with the lowest f-value and close it.
    ///
    /// Entries superseded by a relaxation are dropped on the way.
    fn next_node(&mut self) -> Option<NodeId> {
        while let Some(entry) = self.open_list.pop() {
            let state = &mut self.nodes[entry.node.index()];
            if state.status != NodeStatus::Open || state.entry != entry.seq {
                continue;
            }
            state.status = NodeStatus::Closed;
            return Some(entry.node);
        }
        None
    }

    /// Walk the parents back from `current` to the start node.
    ///
    /// Returns the nodes from start to `current` and leaves the path
    /// length, in meters, in [`RoutePlanner::distance`].
    fn construct_final_path(&mut self, current: NodeId) -> Vec<Node> {
        self.distance = 0.0;
        let mut path_found = Vec::new();

        let mut cursor = Some(current);
        while let Some(node) = cursor {
            path_found.push(self.model.node(node).clone());
            let parent = self.nodes[node.index()].parent;
            if let Some(parent) = parent {
                self.distance += self.model.edge_cost(parent, node);
            }
            cursor = parent;
        }

        path_found.reverse();
        self.distance *= self.model.metric_scale();
        path_found
    }

    /// Run the search.
    ///
    /// On success the route is also published to the model
    /// ([`RouteModel::set_path`]). On failure the model is left as it
    /// was. Calling this again starts a new search from scratch.
    ///
    /// # Errors
    /// [`RouteError::NoPath`] if the end node cannot be reached,
    /// [`RouteError::ExpansionLimit`] if
    /// [`PlannerConfig::max_expansions`] nodes were expanded first.
    pub fn a_star_search(&mut self) -> Result<Route> {
        if self.state != SearchState::Initialized {
            self.initialize();
        }
        info!(
            "Searching route from {} to {}",
            self.start_node, self.end_node
        );
        self.state = SearchState::Searching;

        while let Some(current) = self.next_node() {
            trace!(
                "popped {}, {} entries left in the open list",
                current,
                self.open_list.len()
            );
            if current == self.end_node {
                self.state = SearchState::Found;
                let nodes = self.construct_final_path(current);
                self.model.set_path(nodes.clone());
                info!(
                    "Route found: {} nodes, {:.2} m, {} nodes expanded",
                    nodes.len(),
                    self.distance,
                    self.nodes_expanded
                );
                return Ok(Route {
                    nodes,
                    distance_meters: self.distance,
                    nodes_expanded: self.nodes_expanded,
                });
            }

            if let Some(limit) = self.config.max_expansions {
                if self.nodes_expanded >= limit {
                    self.state = SearchState::Exhausted;
                    warn!("Expansion limit of {} nodes reached", limit);
                    return Err(RouteError::ExpansionLimit(self.nodes_expanded));
                }
            }

            self.nodes_expanded += 1;
            self.add_neighbors(current);
        }

        self.state = SearchState::Exhausted;
        warn!(
            "No path found from {} to {} after expanding {} nodes",
            self.start_node, self.end_node, self.nodes_expanded
        );
        Err(RouteError::NoPath {
            from: self.start_node,
            to: self.end_node,
        })
    }

    pub fn start_node(&self) -> NodeId {
        self.start_node
    }

    pub fn end_node(&self) -> NodeId {
        self.end_node
    }

    /// Length in meters of the last constructed path.
    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn nodes_expanded(&self) -> usize {
        self.nodes_expanded
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    pub fn model(&self) -> &M {
        &*self.model
    }
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
