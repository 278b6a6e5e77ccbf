use web_sys::CanvasRenderingContext2d;

use crate::constants::SEGMENT_THICKNESS;
use crate::models::Segment;

const SEGMENT_COLOR: &str = "#ff4d4d";

/// Draw each segment as a thin bar from its anchor, rotated about the anchor
pub fn draw_segments(ctx: &CanvasRenderingContext2d, segments: &[Segment]) {
    ctx.set_fill_style_str(SEGMENT_COLOR);

    for segment in segments {
        ctx.save();
        let _ = ctx.translate(segment.anchor.x, segment.anchor.y);
        let _ = ctx.rotate(segment.angle_degrees.to_radians());
        ctx.fill_rect(0.0, -SEGMENT_THICKNESS / 2.0, segment.length, SEGMENT_THICKNESS);
        ctx.restore();
    }
}
