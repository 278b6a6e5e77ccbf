mod layout;
mod scene;

pub use layout::GraphLayout;
pub use scene::{Marker, MarkerTags, Scene, Segment};
