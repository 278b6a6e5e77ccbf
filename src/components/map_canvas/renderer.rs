use web_sys::CanvasRenderingContext2d;

use super::{marker_renderer, segment_renderer};
use crate::constants::MARKER_SIZE;
use crate::models::Scene;

const CANVAS_BACKGROUND_COLOR: &str = "#0a0a0a";
const EMPTY_MESSAGE_COLOR: &str = "#666";
const EMPTY_MESSAGE_FONT: &str = "16px sans-serif";
const EMPTY_MESSAGE_TEXT: &str = "No stations in network";
const MAP_PADDING: f64 = 40.0;
const MIN_WIDTH: f64 = 320.0;
const MIN_HEIGHT: f64 = 200.0;

/// Canvas size needed to show every marker of `scene` with some padding
#[must_use]
pub fn canvas_size(scene: &Scene) -> (f64, f64) {
    let (max_x, max_y) = scene.markers.iter().fold((0.0_f64, 0.0_f64), |(mx, my), m| {
        (mx.max(m.position.x), my.max(m.position.y))
    });

    (
        (max_x + MARKER_SIZE + MAP_PADDING).max(MIN_WIDTH),
        (max_y + MARKER_SIZE + MAP_PADDING).max(MIN_HEIGHT),
    )
}

/// Clear the canvas and draw the whole scene. Segments go on top of markers.
pub fn draw_scene(ctx: &CanvasRenderingContext2d, scene: &Scene, (width, height): (f64, f64)) {
    ctx.set_fill_style_str(CANVAS_BACKGROUND_COLOR);
    ctx.fill_rect(0.0, 0.0, width, height);

    if scene.markers.is_empty() {
        ctx.set_fill_style_str(EMPTY_MESSAGE_COLOR);
        ctx.set_font(EMPTY_MESSAGE_FONT);
        ctx.set_text_align("center");
        let _ = ctx.fill_text(EMPTY_MESSAGE_TEXT, width / 2.0, height / 2.0);
        return;
    }

    marker_renderer::draw_markers(ctx, &scene.markers);
    segment_renderer::draw_segments(ctx, &scene.segments);
}
