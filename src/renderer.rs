use indexmap::IndexSet;

use crate::geometry::{marker_anchor, segment_geometry};
use crate::log;
use crate::models::{GraphLayout, Marker, MarkerTags, Scene, Segment};

/// Ordered node ids of a route. May name ids missing from the layout.
pub type Route = Vec<String>;

/// Ids of nodes flagged as transfers. Not required to be part of the route.
pub type TransferSet = IndexSet<String>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// Static graph only
    Base,
    /// Graph with the last supplied route overlaid
    Routed,
}

/// What was last handed to [`MapRenderer::render`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderState {
    pub route: Route,
    pub transfers: TransferSet,
}

/// Owns the current render state and the scene derived from it.
///
/// The scene is rebuilt from scratch on every call to [`render`](Self::render);
/// nothing else mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct MapRenderer {
    layout: GraphLayout,
    state: RenderState,
    scene: Scene,
}

impl MapRenderer {
    /// Create a renderer already showing the base graph
    #[must_use]
    pub fn new(layout: GraphLayout) -> Self {
        let state = RenderState::default();
        let scene = build_scene(&layout, &state);
        Self { layout, state, scene }
    }

    /// Replace the scene with `route` and `transfers` drawn over the graph
    pub fn render(&mut self, route: Route, transfers: TransferSet) {
        let state = RenderState { route, transfers };
        self.scene = build_scene(&self.layout, &state);
        self.state = state;
        log!(
            "Rendered {} markers and {} segments",
            self.scene.markers.len(),
            self.scene.segments.len()
        );
    }

    /// Back to the base graph with no route
    pub fn reset(&mut self) {
        self.render(Route::new(), TransferSet::new());
    }

    #[must_use]
    pub fn mode(&self) -> RenderMode {
        if self.state.route.is_empty() {
            RenderMode::Base
        } else {
            RenderMode::Routed
        }
    }

    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    #[must_use]
    pub fn state(&self) -> &RenderState {
        &self.state
    }

    #[must_use]
    pub fn layout(&self) -> &GraphLayout {
        &self.layout
    }
}

/// Build the scene for `state`: one marker per layout node, in layout order,
/// and one segment per consecutive pair of route nodes that both resolve.
#[must_use]
pub fn build_scene(layout: &GraphLayout, state: &RenderState) -> Scene {
    let markers = layout
        .nodes()
        .map(|(id, position)| {
            let mut tags = MarkerTags::empty();
            if state.route.iter().any(|r| r == id) {
                tags |= MarkerTags::ROUTE;
            }
            if state.transfers.contains(id) {
                tags |= MarkerTags::TRANSFER;
            }
            Marker {
                id: id.to_string(),
                position,
                tags,
            }
        })
        .collect();

    let segments = state
        .route
        .windows(2)
        .filter_map(|pair| {
            let (from, to) = (&pair[0], &pair[1]);
            let (Some(a), Some(b)) = (layout.position_of(from), layout.position_of(to)) else {
                log!("Skipping segment {from} -> {to}: node not in layout");
                return None;
            };
            let (length, angle_degrees) = segment_geometry(a, b);
            Some(Segment {
                from: from.clone(),
                to: to.clone(),
                anchor: marker_anchor(a),
                length,
                angle_degrees,
            })
        })
        .collect();

    Scene { markers, segments }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Position;

    const EPSILON: f64 = 1e-9;

    fn route(ids: &[&str]) -> Route {
        ids.iter().map(ToString::to_string).collect()
    }

    fn transfers(ids: &[&str]) -> TransferSet {
        ids.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_new_renderer_is_base() {
        let renderer = MapRenderer::new(GraphLayout::transit_network());
        assert_eq!(renderer.mode(), RenderMode::Base);
        assert_eq!(renderer.scene().markers.len(), 25);
        assert!(renderer.scene().segments.is_empty());
        assert!(renderer.scene().markers.iter().all(Marker::is_plain));
    }

    #[test]
    fn test_straight_route_on_line_a() {
        let mut renderer = MapRenderer::new(GraphLayout::transit_network());
        renderer.render(route(&["A1", "A2", "A3"]), TransferSet::new());

        assert_eq!(renderer.mode(), RenderMode::Routed);
        let scene = renderer.scene();
        assert_eq!(scene.segments.len(), 2);
        for segment in &scene.segments {
            assert!((segment.length - 70.0).abs() < EPSILON);
            assert!(segment.angle_degrees.abs() < EPSILON);
        }
        assert_eq!(scene.segments[0].anchor, Position::new(70.0, 70.0));
        assert_eq!(scene.segments[1].anchor, Position::new(140.0, 70.0));

        let on_route: Vec<&str> = scene.route_markers().map(|m| m.id.as_str()).collect();
        assert_eq!(on_route, vec!["A1", "A2", "A3"]);
        assert_eq!(scene.markers.iter().filter(|m| m.is_plain()).count(), 22);
    }

    #[test]
    fn test_marker_and_segment_counts() {
        let layout = GraphLayout::transit_network();
        let cases: [&[&str]; 4] = [
            &[],
            &["B1"],
            &["A1", "B1", "C1"],
            &["A1", "B1", "E1", "E3"],
        ];

        for ids in cases {
            let scene = build_scene(
                &layout,
                &RenderState { route: route(ids), transfers: TransferSet::new() },
            );
            assert_eq!(scene.markers.len(), layout.len());
            assert_eq!(scene.segments.len(), ids.len().saturating_sub(1));
        }
    }

    #[test]
    fn test_unknown_ids_drop_adjacent_segments_only() {
        let mut renderer = MapRenderer::new(GraphLayout::transit_network());
        renderer.render(route(&["A1", "A2", "X9", "A3", "A4"]), TransferSet::new());

        let pairs: Vec<(&str, &str)> = renderer
            .scene()
            .segments
            .iter()
            .map(|s| (s.from.as_str(), s.to.as_str()))
            .collect();
        assert_eq!(pairs, vec![("A1", "A2"), ("A3", "A4")]);
        assert_eq!(renderer.scene().markers.len(), 25);
        assert_eq!(renderer.mode(), RenderMode::Routed);
    }

    #[test]
    fn test_route_of_only_unknown_ids() {
        let mut renderer = MapRenderer::new(GraphLayout::transit_network());
        renderer.render(route(&["Q1", "Q2"]), TransferSet::new());

        assert!(renderer.scene().segments.is_empty());
        assert_eq!(renderer.scene().route_markers().count(), 0);
    }

    #[test]
    fn test_transfer_tags_without_containment() {
        let mut renderer = MapRenderer::new(GraphLayout::transit_network());
        renderer.render(route(&["A3", "B2"]), transfers(&["A3", "D1", "ZZ"]));

        let scene = renderer.scene();
        let a3 = scene.marker("A3").map(|m| m.tags);
        assert_eq!(a3, Some(MarkerTags::ROUTE | MarkerTags::TRANSFER));
        let b2 = scene.marker("B2").map(|m| m.tags);
        assert_eq!(b2, Some(MarkerTags::ROUTE));
        let d1 = scene.marker("D1").map(|m| m.tags);
        assert_eq!(d1, Some(MarkerTags::TRANSFER));
        assert!(scene.marker("ZZ").is_none());
    }

    #[test]
    fn test_render_is_idempotent() {
        let mut renderer = MapRenderer::new(GraphLayout::transit_network());
        renderer.render(route(&["C5", "D2", "D3"]), transfers(&["D2"]));
        let first = renderer.scene().clone();
        renderer.render(route(&["C5", "D2", "D3"]), transfers(&["D2"]));
        assert_eq!(renderer.scene(), &first);
    }

    #[test]
    fn test_render_replaces_previous_route() {
        let mut renderer = MapRenderer::new(GraphLayout::transit_network());
        renderer.render(route(&["A1", "A2"]), TransferSet::new());
        renderer.render(route(&["E1", "E2"]), TransferSet::new());

        let scene = renderer.scene();
        assert!(scene.marker("A1").is_some_and(Marker::is_plain));
        assert!(scene.marker("E1").is_some_and(Marker::on_route));
        assert_eq!(scene.segments.len(), 1);
    }

    #[test]
    fn test_reset_returns_to_base() {
        let layout = GraphLayout::transit_network();
        let mut renderer = MapRenderer::new(layout.clone());
        renderer.render(route(&["A1", "A2"]), transfers(&["A2"]));
        renderer.reset();

        assert_eq!(renderer.mode(), RenderMode::Base);
        assert_eq!(renderer, MapRenderer::new(layout));
    }

    #[test]
    fn test_diagonal_segment_geometry() {
        let layout = GraphLayout::new()
            .with_node("P", (0.0, 0.0))
            .with_node("Q", (30.0, 40.0));
        let scene = build_scene(
            &layout,
            &RenderState { route: route(&["P", "Q"]), transfers: TransferSet::new() },
        );

        let segment = &scene.segments[0];
        assert!((segment.length - 50.0).abs() < EPSILON);
        assert!((segment.angle_degrees - 53.13).abs() < 0.01);
        assert_eq!(segment.anchor, Position::new(20.0, 20.0));
    }
}
