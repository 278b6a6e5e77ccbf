use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::geometry::Position;

/// Node positions of the map, in the order the nodes were defined.
///
/// The layout is built once and then only read. Lookups for ids outside the
/// layout return `None` so callers can skip them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GraphLayout {
    positions: IndexMap<String, Position>,
}

impl GraphLayout {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion used while assembling a layout.
    ///
    /// Re-using an id moves its position but keeps its original slot.
    #[must_use]
    pub fn with_node(mut self, id: impl Into<String>, position: impl Into<Position>) -> Self {
        self.positions.insert(id.into(), position.into());
        self
    }

    #[must_use]
    pub fn position_of(&self, id: &str) -> Option<Position> {
        self.positions.get(id).copied()
    }

    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    /// Iterate nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = (&str, Position)> + '_ {
        self.positions.iter().map(|(id, pos)| (id.as_str(), *pos))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// The fixed network shown on the map: lines A, B and C as rows, the D
    /// loop and the short E line to the right.
    #[must_use]
    pub fn transit_network() -> Self {
        const NODES: [(&str, f64, f64); 25] = [
            ("A1", 50.0, 50.0), ("A2", 120.0, 50.0), ("A3", 190.0, 50.0),
            ("A4", 260.0, 50.0), ("A5", 330.0, 50.0), ("A6", 400.0, 50.0),
            ("B1", 50.0, 120.0), ("B2", 120.0, 120.0), ("B3", 190.0, 120.0),
            ("B4", 260.0, 120.0), ("B5", 330.0, 120.0), ("B6", 400.0, 120.0),
            ("C1", 50.0, 190.0), ("C2", 120.0, 190.0), ("C3", 190.0, 190.0),
            ("C4", 260.0, 190.0), ("C5", 330.0, 190.0), ("C6", 400.0, 190.0),
            ("D1", 500.0, 50.0), ("D2", 570.0, 50.0), ("D3", 570.0, 120.0),
            ("D4", 500.0, 120.0),
            ("E1", 500.0, 200.0), ("E2", 570.0, 200.0), ("E3", 640.0, 200.0),
        ];

        NODES.iter().map(|&(id, x, y)| (id, Position::new(x, y))).collect()
    }
}

impl<S: Into<String>> FromIterator<(S, Position)> for GraphLayout {
    fn from_iter<I: IntoIterator<Item = (S, Position)>>(iter: I) -> Self {
        Self {
            positions: iter.into_iter().map(|(id, pos)| (id.into(), pos)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_of_known_node() {
        let layout = GraphLayout::transit_network();
        assert_eq!(layout.position_of("A1"), Some(Position::new(50.0, 50.0)));
        assert_eq!(layout.position_of("E3"), Some(Position::new(640.0, 200.0)));
    }

    #[test]
    fn test_unknown_node_is_not_found() {
        let layout = GraphLayout::transit_network();
        assert_eq!(layout.position_of("Z9"), None);
        assert_eq!(layout.position_of(""), None);
        assert!(!layout.contains("a1"));
    }

    #[test]
    fn test_iteration_follows_insertion_order() {
        let layout = GraphLayout::new()
            .with_node("C", (3.0, 0.0))
            .with_node("A", (1.0, 0.0))
            .with_node("B", (2.0, 0.0));

        let ids: Vec<&str> = layout.nodes().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_reinsert_keeps_slot() {
        let layout = GraphLayout::new()
            .with_node("A", (1.0, 1.0))
            .with_node("B", (2.0, 2.0))
            .with_node("A", (9.0, 9.0));

        assert_eq!(layout.len(), 2);
        assert_eq!(layout.nodes().next(), Some(("A", Position::new(9.0, 9.0))));
    }

    #[test]
    fn test_transit_network_shape() {
        let layout = GraphLayout::transit_network();
        assert_eq!(layout.len(), 25);
        assert!(!layout.is_empty());
        assert_eq!(layout.nodes().next().map(|(id, _)| id), Some("A1"));
        assert_eq!(layout.nodes().last().map(|(id, _)| id), Some("E3"));
    }

    #[test]
    fn test_serializes_as_id_map() {
        let layout = GraphLayout::new().with_node("A1", (50.0, 50.0));
        let json = serde_json::to_string(&layout).unwrap_or_default();
        assert_eq!(json, r#"{"A1":{"x":50.0,"y":50.0}}"#);
    }
}
