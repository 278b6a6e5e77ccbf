pub mod marker_renderer;
pub mod renderer;
pub mod segment_renderer;
