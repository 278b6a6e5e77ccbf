use serde::{Deserialize, Serialize};

use crate::constants::SEGMENT_ANCHOR_OFFSET;

/// A point in layout space (top-left corner of a node marker).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Position {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Calculates the length and rotation of a straight line from `a` to `b`.
///
/// Returns `(length, angle_degrees)` where the angle is `atan2(dy, dx)`
/// converted to degrees, so it lies in the range (-180, 180].
///
/// # Examples
/// ```
/// use transit_map::geometry::{segment_geometry, Position};
///
/// let (length, angle) = segment_geometry(Position::new(0.0, 0.0), Position::new(30.0, 40.0));
/// assert!((length - 50.0).abs() < 1e-10);
/// assert!((angle - 53.130_102_354).abs() < 1e-6);
/// ```
#[must_use]
pub fn segment_geometry(a: Position, b: Position) -> (f64, f64) {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let length = (dx * dx + dy * dy).sqrt();
    let angle = dy.atan2(dx).to_degrees();
    (length, angle)
}

/// Point a segment leaving the marker at `position` is anchored to.
#[must_use]
pub fn marker_anchor(position: Position) -> Position {
    Position {
        x: position.x + SEGMENT_ANCHOR_OFFSET,
        y: position.y + SEGMENT_ANCHOR_OFFSET,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_pythagorean_segment() {
        let (length, angle) = segment_geometry(Position::new(0.0, 0.0), Position::new(30.0, 40.0));
        assert!((length - 50.0).abs() < EPSILON);
        assert!((angle - 40.0_f64.atan2(30.0).to_degrees()).abs() < EPSILON);
        assert!((angle - 53.13).abs() < 0.01);
    }

    #[test]
    fn test_horizontal_and_vertical_segments() {
        let (length, angle) = segment_geometry(Position::new(50.0, 50.0), Position::new(120.0, 50.0));
        assert!((length - 70.0).abs() < EPSILON);
        assert!(angle.abs() < EPSILON);

        // Screen y grows downwards, so travelling down is +90°
        let (length, angle) = segment_geometry(Position::new(500.0, 50.0), Position::new(500.0, 120.0));
        assert!((length - 70.0).abs() < EPSILON);
        assert!((angle - 90.0).abs() < EPSILON);
    }

    #[test]
    fn test_reverse_direction_flips_angle() {
        let (_, forward) = segment_geometry(Position::new(0.0, 0.0), Position::new(10.0, 0.0));
        let (_, backward) = segment_geometry(Position::new(10.0, 0.0), Position::new(0.0, 0.0));
        assert!(forward.abs() < EPSILON);
        assert!((backward - 180.0).abs() < EPSILON);
    }

    #[test]
    fn test_zero_length_segment() {
        let p = Position::new(5.0, 5.0);
        let (length, angle) = segment_geometry(p, p);
        assert_eq!(length, 0.0);
        assert_eq!(angle, 0.0);
    }

    #[test]
    fn test_marker_anchor_is_marker_centre() {
        let anchor = marker_anchor(Position::new(50.0, 120.0));
        assert_eq!(anchor, Position::new(70.0, 140.0));
    }
}
