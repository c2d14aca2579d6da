//! Route planner configuration.

use serde::{Deserialize, Serialize};

/// Percent to fraction.
pub const DEFAULT_COORDINATE_SCALE: f32 = 0.01;

/// Tunables for [`RoutePlanner`](crate::algorithms::astar::RoutePlanner).
///
/// Every field has a default, so a partial document deserializes fine:
///
/// ```
/// use route_planner::config::PlannerConfig;
///
/// let config = PlannerConfig::default().with_max_expansions(10_000);
/// assert_eq!(config.max_expansions, Some(10_000));
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Factor applied to the start/end inputs to turn them into
    /// fractions of the map extent. Inputs are percentages by default.
    pub coordinate_scale: f32,

    /// Give up after expanding this many nodes. `None` searches until
    /// the frontier is exhausted. The end node is never counted as
    /// expanded, so `Some(0)` only finds routes whose start and end
    /// resolve to the same node.
    pub max_expansions: Option<usize>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            coordinate_scale: DEFAULT_COORDINATE_SCALE,
            max_expansions: None,
        }
    }
}

impl PlannerConfig {
    /// Cap the number of node expansions per search.
    pub fn with_max_expansions(mut self, max_expansions: usize) -> Self {
        self.max_expansions = Some(max_expansions);
        self
    }

    /// Use a different input unit, e.g. `1.0` when the inputs already
    /// are fractions.
    pub fn with_coordinate_scale(mut self, coordinate_scale: f32) -> Self {
        self.coordinate_scale = coordinate_scale;
        self
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlannerConfig::default();
        assert_eq!(config.coordinate_scale, 0.01);
        assert_eq!(config.max_expansions, None);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: PlannerConfig = serde_json::from_str(r#"{"max_expansions": 500}"#).unwrap();
        assert_eq!(config.max_expansions, Some(500));
        assert_eq!(config.coordinate_scale, DEFAULT_COORDINATE_SCALE);
    }

    #[test]
    fn test_builders() {
        let config = PlannerConfig::default()
            .with_coordinate_scale(1.0)
            .with_max_expansions(3);
        assert_eq!(
            config,
            PlannerConfig {
                coordinate_scale: 1.0,
                max_expansions: Some(3),
            }
        );
    }
}
