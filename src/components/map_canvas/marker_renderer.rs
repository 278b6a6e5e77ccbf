use web_sys::CanvasRenderingContext2d;

use crate::constants::MARKER_SIZE;
use crate::models::{Marker, MarkerTags};

const PLAIN_FILL_COLOR: &str = "#2a2a2a";
const PLAIN_STROKE_COLOR: &str = "#4a9eff";
const ROUTE_FILL_COLOR: &str = "#4a9eff";
const TRANSFER_STROKE_COLOR: &str = "#ffaa00";
const PLAIN_LABEL_COLOR: &str = "#fff";
const ROUTE_LABEL_COLOR: &str = "#0a0a0a";
const LABEL_FONT: &str = "bold 12px sans-serif";
const STROKE_WIDTH: f64 = 2.0;
const TRANSFER_STROKE_WIDTH: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStyle {
    pub fill: &'static str,
    pub stroke: &'static str,
    pub stroke_width: f64,
    pub label: &'static str,
}

/// Colours for a marker. Route membership sets the fill, transfer the outline.
#[must_use]
pub fn marker_style(tags: MarkerTags) -> MarkerStyle {
    let (fill, label) = if tags.contains(MarkerTags::ROUTE) {
        (ROUTE_FILL_COLOR, ROUTE_LABEL_COLOR)
    } else {
        (PLAIN_FILL_COLOR, PLAIN_LABEL_COLOR)
    };
    let (stroke, stroke_width) = if tags.contains(MarkerTags::TRANSFER) {
        (TRANSFER_STROKE_COLOR, TRANSFER_STROKE_WIDTH)
    } else {
        (PLAIN_STROKE_COLOR, STROKE_WIDTH)
    };

    MarkerStyle {
        fill,
        stroke,
        stroke_width,
        label,
    }
}

pub fn draw_markers(ctx: &CanvasRenderingContext2d, markers: &[Marker]) {
    ctx.set_font(LABEL_FONT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");

    for marker in markers {
        let style = marker_style(marker.tags);
        let (x, y) = (marker.position.x, marker.position.y);

        ctx.set_fill_style_str(style.fill);
        ctx.fill_rect(x, y, MARKER_SIZE, MARKER_SIZE);

        ctx.set_stroke_style_str(style.stroke);
        ctx.set_line_width(style.stroke_width);
        ctx.stroke_rect(x, y, MARKER_SIZE, MARKER_SIZE);

        ctx.set_fill_style_str(style.label);
        let _ = ctx.fill_text(&marker.id, x + MARKER_SIZE / 2.0, y + MARKER_SIZE / 2.0);
    }
}
