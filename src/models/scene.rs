use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::geometry::Position;

bitflags! {
    /// Styling tags carried by a node marker. A node with no tags is plain.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    pub struct MarkerTags: u8 {
        const ROUTE = 0b01;
        const TRANSFER = 0b10;
    }
}

/// A labelled node marker placed at a layout position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub id: String,
    pub position: Position,
    pub tags: MarkerTags,
}

impl Marker {
    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.tags.is_empty()
    }

    #[must_use]
    pub fn on_route(&self) -> bool {
        self.tags.contains(MarkerTags::ROUTE)
    }

    #[must_use]
    pub fn is_transfer(&self) -> bool {
        self.tags.contains(MarkerTags::TRANSFER)
    }
}

/// A straight line between two consecutive route nodes.
///
/// The line starts at `anchor` and is drawn `length` units long, rotated by
/// `angle_degrees` around the anchor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: String,
    pub to: String,
    pub anchor: Position,
    pub length: f64,
    pub angle_degrees: f64,
}

/// Everything drawn for one render: markers first, then segments on top
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub markers: Vec<Marker>,
    pub segments: Vec<Segment>,
}

impl Scene {
    #[must_use]
    pub fn marker(&self, id: &str) -> Option<&Marker> {
        self.markers.iter().find(|m| m.id == id)
    }

    pub fn route_markers(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter().filter(|m| m.on_route())
    }
}
