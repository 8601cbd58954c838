use std::fmt;

use crate::config::Tolerances;
use crate::geometry::WallSegment;
use crate::math::{BoundingBox, Point2};

/// Distance from a bounding-box edge within which an endpoint counts as on
/// the edge (cm).
pub const PERIMETER_TOLERANCE: f64 = Tolerances::DEFAULT_PERIMETER;

/// Whether a wall runs along the room outline or inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WallKind {
    Perimeter,
    Interior,
}

impl fmt::Display for WallKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Perimeter => "Perimeter",
            Self::Interior => "Interior",
        })
    }
}

fn is_on_edge(p: &Point2, bb: &BoundingBox, tolerance: f64) -> bool {
    (p.x - bb.min_x).abs() < tolerance
        || (p.x - bb.max_x).abs() < tolerance
        || (p.y - bb.min_y).abs() < tolerance
        || (p.y - bb.max_y).abs() < tolerance
}

/// Perimeter test with the default 5 cm tolerance.
#[must_use]
pub fn is_wall_on_perimeter(wall: &WallSegment, bb: &BoundingBox) -> bool {
    is_wall_on_perimeter_within(wall, bb, PERIMETER_TOLERANCE)
}

/// A wall is perimeter only if both endpoints are closer than `tolerance` to
/// some bounding-box edge. The two endpoints may sit on different edges.
#[must_use]
pub fn is_wall_on_perimeter_within(wall: &WallSegment, bb: &BoundingBox, tolerance: f64) -> bool {
    is_on_edge(&wall.start_point(), bb, tolerance) && is_on_edge(&wall.end_point(), bb, tolerance)
}

#[must_use]
pub fn classify_wall(wall: &WallSegment, bb: &BoundingBox) -> WallKind {
    if is_wall_on_perimeter(wall, bb) {
        WallKind::Perimeter
    } else {
        WallKind::Interior
    }
}

#[must_use]
pub fn wall_length(wall: &WallSegment) -> f64 {
    wall.length()
}

/// Display label such as `Wall 1 (600cm) - Perimeter`.
///
/// `index` is zero-based; the label is one-based.
#[must_use]
pub fn wall_label(wall: &WallSegment, index: usize, bb: &BoundingBox) -> String {
    format!(
        "Wall {} ({:.0}cm) - {}",
        index + 1,
        wall_length(wall).round(),
        classify_wall(wall, bb)
    )
}
