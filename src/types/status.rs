//! Definitions for the [`NodeStatus`] and [`SearchState`] types,
//! implemented by enums.

/// Represents where a node stands within a single search.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub enum NodeStatus {
    /// Not reached yet; g and h are undefined.
    #[default]
    Unvisited,
    /// Discovered and waiting in the frontier.
    Open,
    /// Expanded. Reopened if a strictly cheaper path shows up.
    Closed,
}

/// Lifecycle of a [`RoutePlanner`](crate::algorithms::astar::RoutePlanner)
/// search.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SearchState {
    /// Start node seeded into the frontier.
    Initialized,
    /// The A* loop is running.
    Searching,
    /// The goal was popped from the frontier.
    Found,
    /// The frontier ran dry (or the expansion limit was hit).
    Exhausted,
}

impl SearchState {
    /// Whether the search has come to an end.
    pub fn is_terminal(self) -> bool {
        matches!(self, SearchState::Found | SearchState::Exhausted)
    }
}
