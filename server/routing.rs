use petgraph::algo::astar;
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::network::Network;
use crate::rules::{Preferences, RuleEngine};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RouteRequest {
    pub origin: String,
    pub destination: String,
    #[serde(default)]
    pub preferences: Preferences,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteStep {
    pub node: String,
    pub info: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResponse {
    pub path: Vec<String>,
    pub weight: f64,
    pub steps: Vec<RouteStep>,
    pub applied_rules: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NoRoute {
    #[error("Origin {0} is not accessible under current rules")]
    OriginUnavailable(String),
    #[error("Destination {0} is not accessible under current rules")]
    DestinationUnavailable(String),
    #[error("No path between {0} and {1} under current rules")]
    Disconnected(String, String),
}

/// Cheapest path by link weight, as station ids, with its total weight
///
/// # Errors
///
/// Returns [`NoRoute`] when either end is not in the network or the two are
/// not connected.
pub fn shortest_path(network: &Network, origin: &str, destination: &str) -> Result<(Vec<String>, f64), NoRoute> {
    let start = network
        .station_index(origin)
        .ok_or_else(|| NoRoute::OriginUnavailable(origin.to_string()))?;
    let goal = network
        .station_index(destination)
        .ok_or_else(|| NoRoute::DestinationUnavailable(destination.to_string()))?;

    // A zero heuristic turns A* into plain Dijkstra
    let (weight, nodes) = astar(network.graph(), start, |n| n == goal, |e| e.weight().weight, |_| 0.0)
        .ok_or_else(|| NoRoute::Disconnected(origin.to_string(), destination.to_string()))?;

    let path = nodes
        .into_iter()
        .filter_map(|idx| network.station_id(idx).map(ToString::to_string))
        .collect();
    Ok((path, weight))
}

/// Apply the rider's preferences and search the adjusted network
#[must_use]
pub fn compute_route(network: &Network, engine: &RuleEngine, request: &RouteRequest) -> RouteResponse {
    let (adjusted, applied_rules) = engine.run(network, &request.preferences);

    match shortest_path(&adjusted, &request.origin, &request.destination) {
        Ok((path, weight)) => {
            let steps = path
                .iter()
                .map(|node| RouteStep {
                    node: node.clone(),
                    info: serde_json::Map::new(),
                })
                .collect();
            RouteResponse {
                path,
                weight,
                steps,
                applied_rules,
                detail: None,
            }
        }
        Err(reason) => {
            log::info!("No route for {} -> {}: {reason}", request.origin, request.destination);
            RouteResponse {
                path: Vec::new(),
                weight: 0.0,
                steps: Vec::new(),
                applied_rules,
                detail: Some(reason.to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(origin: &str, destination: &str, preferences: Preferences) -> RouteRequest {
        RouteRequest {
            origin: origin.to_string(),
            destination: destination.to_string(),
            preferences,
        }
    }

    #[test]
    fn test_straight_line_route() {
        let (path, weight) = shortest_path(&Network::sample(), "A1", "A3").unwrap();
        assert_eq!(path, vec!["A1", "A2", "A3"]);
        assert_eq!(weight, 9.0);
    }

    #[test]
    fn test_route_across_lines() {
        let (path, weight) = shortest_path(&Network::sample(), "A1", "B1").unwrap();
        assert_eq!(path, vec!["A1", "A2", "A3", "B2", "B1"]);
        assert_eq!(weight, 17.0);
    }

    #[test]
    fn test_same_origin_and_destination() {
        let (path, weight) = shortest_path(&Network::sample(), "C2", "C2").unwrap();
        assert_eq!(path, vec!["C2"]);
        assert_eq!(weight, 0.0);
    }

    #[test]
    fn test_unknown_stations() {
        let network = Network::sample();
        assert_eq!(
            shortest_path(&network, "Z1", "A1"),
            Err(NoRoute::OriginUnavailable("Z1".to_string()))
        );
        assert_eq!(
            shortest_path(&network, "A1", "Z1"),
            Err(NoRoute::DestinationUnavailable("Z1".to_string()))
        );
    }

    #[test]
    fn test_disconnected_under_budget() {
        // The paid loop is D1's only connection
        let prefs = Preferences { budget: Some(0.0), ..Preferences::default() };
        let response = compute_route(&Network::sample(), &RuleEngine::standard(), &request("D1", "E3", prefs));
        assert!(response.path.is_empty());
        assert_eq!(response.weight, 0.0);
        assert_eq!(response.applied_rules, vec!["budget_constraint"]);
        assert_eq!(
            response.detail.as_deref(),
            Some("No path between D1 and E3 under current rules")
        );
    }

    #[test]
    fn test_response_lists_steps_and_rules() {
        let prefs = Preferences { avoid_transfers: true, ..Preferences::default() };
        let response = compute_route(&Network::sample(), &RuleEngine::standard(), &request("A1", "A3", prefs));
        assert_eq!(response.path, vec!["A1", "A2", "A3"]);
        assert_eq!(response.steps.len(), 3);
        assert_eq!(response.steps[0].node, "A1");
        assert_eq!(response.applied_rules, vec!["avoid_transfers"]);
        assert_eq!(response.detail, None);
    }

    #[test]
    fn test_avoid_transfers_changes_total_weight() {
        let engine = RuleEngine::standard();
        let network = Network::sample();

        let plain = compute_route(&network, &engine, &request("A1", "B1", Preferences::default()));
        let avoiding = compute_route(
            &network,
            &engine,
            &request("A1", "B1", Preferences { avoid_transfers: true, ..Preferences::default() }),
        );
        // Every way onto line 2 needs a transfer, so only the weight moves
        assert_eq!(avoiding.path, plain.path);
        assert_eq!(avoiding.weight, plain.weight + 30.0);
    }
}
