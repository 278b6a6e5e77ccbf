use std::collections::HashMap;

use petgraph::stable_graph::{EdgeIndex, NodeIndex, StableUnGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Safety {
    High,
    Medium,
    Low,
}

/// A link between two stations and the attributes the rules look at
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Link {
    /// Minutes
    pub travel_time: f64,
    pub line: &'static str,
    pub wheelchair: bool,
    pub crowded: bool,
    pub safety: Safety,
    pub cost: u32,
    pub is_transfer: bool,
    /// Routing weight, starts at `travel_time` and is adjusted by rules
    pub weight: f64,
}

/// Undirected station network.
///
/// Backed by a stable graph so rules can drop links without invalidating
/// the indices of the remaining ones.
#[derive(Debug, Clone)]
pub struct Network {
    graph: StableUnGraph<String, Link>,
    stations: HashMap<String, NodeIndex>,
}

impl Network {
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: StableUnGraph::default(),
            stations: HashMap::new(),
        }
    }

    fn station(&mut self, id: &str) -> NodeIndex {
        if let Some(&idx) = self.stations.get(id) {
            return idx;
        }
        let idx = self.graph.add_node(id.to_string());
        self.stations.insert(id.to_string(), idx);
        idx
    }

    pub fn connect(&mut self, from: &str, to: &str, link: Link) -> EdgeIndex {
        let a = self.station(from);
        let b = self.station(to);
        self.graph.add_edge(a, b, link)
    }

    #[must_use]
    pub fn station_index(&self, id: &str) -> Option<NodeIndex> {
        self.stations.get(id).copied()
    }

    #[must_use]
    pub fn station_id(&self, idx: NodeIndex) -> Option<&str> {
        self.graph.node_weight(idx).map(String::as_str)
    }

    /// Station ids in the order they were added
    pub fn station_ids(&self) -> impl Iterator<Item = &str> {
        self.graph.node_indices().filter_map(|idx| self.station_id(idx))
    }

    /// Every link as `(from, to, attributes)`
    pub fn links(&self) -> impl Iterator<Item = (&str, &str, &Link)> {
        self.graph.edge_references().filter_map(|edge| {
            Some((
                self.station_id(edge.source())?,
                self.station_id(edge.target())?,
                edge.weight(),
            ))
        })
    }

    /// Apply `update` to every link's attributes
    pub fn update_links(&mut self, mut update: impl FnMut(&mut Link)) {
        let edges: Vec<EdgeIndex> = self.graph.edge_indices().collect();
        for edge in edges {
            if let Some(link) = self.graph.edge_weight_mut(edge) {
                update(link);
            }
        }
    }

    /// Drop every link matching `predicate`. Returns how many were dropped.
    pub fn remove_links(&mut self, predicate: impl Fn(&Link) -> bool) -> usize {
        let doomed: Vec<EdgeIndex> = self
            .graph
            .edge_indices()
            .filter(|&e| self.graph.edge_weight(e).is_some_and(&predicate))
            .collect();
        for &edge in &doomed {
            self.graph.remove_edge(edge);
        }
        doomed.len()
    }

    #[must_use]
    pub fn graph(&self) -> &StableUnGraph<String, Link> {
        &self.graph
    }

    #[must_use]
    pub fn station_count(&self) -> usize {
        self.graph.node_count()
    }

    #[must_use]
    pub fn link_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// The five-line sample network served by default
    #[must_use]
    pub fn sample() -> Self {
        use Safety::{High, Low, Medium};

        #[rustfmt::skip]
        let links: [(&str, &str, f64, &'static str, bool, bool, Safety, u32, bool); 27] = [
            // Line 1, west to east
            ("A1", "A2", 4.0, "L1", true, false, High, 0, false),
            ("A2", "A3", 5.0, "L1", true, true, Medium, 0, false),
            ("A3", "A4", 6.0, "L1", false, false, High, 0, false),
            ("A4", "A5", 7.0, "L1", true, true, Low, 0, false),
            ("A5", "A6", 5.0, "L1", true, false, High, 0, false),
            // Line 2
            ("B1", "B2", 5.0, "L2", true, true, Medium, 0, false),
            ("B2", "B3", 8.0, "L2", true, false, High, 0, false),
            ("B3", "B4", 6.0, "L2", false, true, Low, 0, false),
            ("B4", "B5", 7.0, "L2", true, false, Medium, 0, false),
            ("B5", "B6", 5.0, "L2", true, true, High, 0, false),
            // Line 3
            ("C1", "C2", 4.0, "L3", true, false, High, 0, false),
            ("C2", "C3", 7.0, "L3", true, true, Medium, 0, false),
            ("C3", "C4", 5.0, "L3", false, false, Low, 0, false),
            ("C4", "C5", 8.0, "L3", true, true, Medium, 0, false),
            ("C5", "C6", 6.0, "L3", true, false, High, 0, false),
            // Line 4, a paid loop
            ("D1", "D2", 5.0, "L4", true, true, Medium, 500, false),
            ("D2", "D3", 6.0, "L4", true, false, High, 500, false),
            ("D3", "D4", 5.0, "L4", true, true, Low, 500, false),
            ("D4", "D1", 7.0, "L4", true, false, High, 500, false),
            // Transfers between lines
            ("A3", "B2", 3.0, "X", true, true, Medium, 0, true),
            ("B4", "C3", 4.0, "X", false, false, Low, 0, true),
            ("C5", "D2", 5.0, "X", true, true, Medium, 0, true),
            ("A6", "D4", 6.0, "X", true, false, High, 0, true),
            // Line 5
            ("E1", "E2", 4.0, "L5", true, false, High, 0, false),
            ("E2", "E3", 6.0, "L5", true, true, Medium, 0, false),
            // More transfers
            ("C6", "E1", 5.0, "X", true, false, High, 0, true),
            ("D3", "E2", 7.0, "X", true, true, Medium, 0, true),
        ];

        let mut network = Self::new();
        for (from, to, travel_time, line, wheelchair, crowded, safety, cost, is_transfer) in links {
            network.connect(
                from,
                to,
                Link {
                    travel_time,
                    line,
                    wheelchair,
                    crowded,
                    safety,
                    cost,
                    is_transfer,
                    weight: travel_time,
                },
            );
        }
        network
    }
}

impl Default for Network {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_network_shape() {
        let network = Network::sample();
        assert_eq!(network.station_count(), 25);
        assert_eq!(network.link_count(), 27);
        assert_eq!(network.station_ids().next(), Some("A1"));
    }

    #[test]
    fn test_weights_start_at_travel_time() {
        let network = Network::sample();
        assert!(network.links().all(|(_, _, link)| link.weight == link.travel_time));
    }

    #[test]
    fn test_remove_links_keeps_other_indices_valid() {
        let mut network = Network::sample();
        let removed = network.remove_links(|link| link.line == "L4");
        assert_eq!(removed, 4);
        assert_eq!(network.link_count(), 23);
        assert_eq!(network.station_count(), 25);
        assert!(network.links().all(|(_, _, link)| link.line != "L4"));
    }

    #[test]
    fn test_unknown_station() {
        let network = Network::sample();
        assert!(network.station_index("A1").is_some());
        assert!(network.station_index("Z9").is_none());
    }
}
