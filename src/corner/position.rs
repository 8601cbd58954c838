use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::Tolerances;
use crate::geometry::DesignElement;
use crate::transform::{RoomDimensions, Wall};
use crate::view::ViewDirection;

/// Distance from two walls within which an element sits in their corner (cm).
pub const CORNER_TOLERANCE: f64 = Tolerances::DEFAULT_CORNER;

/// One of the four inner corners of a rectangular room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CornerPosition {
    FrontLeft,
    FrontRight,
    BackLeft,
    BackRight,
}

impl CornerPosition {
    pub const ALL: [Self; 4] = [Self::FrontLeft, Self::FrontRight, Self::BackLeft, Self::BackRight];

    /// The two walls meeting at this corner, front/back first.
    #[must_use]
    pub fn adjacent_walls(self) -> [Wall; 2] {
        match self {
            Self::FrontLeft => [Wall::Front, Wall::Left],
            Self::FrontRight => [Wall::Front, Wall::Right],
            Self::BackLeft => [Wall::Back, Wall::Left],
            Self::BackRight => [Wall::Back, Wall::Right],
        }
    }

    /// Wall used when a corner element must be filed under a single view.
    #[must_use]
    pub fn primary_wall(self) -> Wall {
        self.adjacent_walls()[0]
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FrontLeft => "front-left",
            Self::FrontRight => "front-right",
            Self::BackLeft => "back-left",
            Self::BackRight => "back-right",
        }
    }
}

impl fmt::Display for CornerPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// [`detect_corner_position_within`] with the default 30 cm tolerance.
#[must_use]
pub fn detect_corner_position(
    element: &DesignElement,
    room: &RoomDimensions,
) -> Option<CornerPosition> {
    detect_corner_position_within(element, room, CORNER_TOLERANCE)
}

/// Corner the element stands in, judged by its footprint.
///
/// The near edges are compared against the front and left walls directly;
/// on the right and back the element's width and depth are taken off first,
/// so a cabinet flush against the far wall counts. Corners are tried in the
/// order front-left, front-right, back-left, back-right.
#[must_use]
pub fn detect_corner_position_within(
    element: &DesignElement,
    room: &RoomDimensions,
    tolerance: f64,
) -> Option<CornerPosition> {
    let near_left = element.x <= tolerance;
    let near_right = element.x >= room.width - element.width - tolerance;
    let near_front = element.y <= tolerance;
    let near_back = element.y >= room.height - element.depth - tolerance;

    corner_of(near_front, near_back, near_left, near_right)
}

fn corner_of(front: bool, back: bool, left: bool, right: bool) -> Option<CornerPosition> {
    match (front, back, left, right) {
        (true, _, true, _) => Some(CornerPosition::FrontLeft),
        (true, _, _, true) => Some(CornerPosition::FrontRight),
        (_, true, true, _) => Some(CornerPosition::BackLeft),
        (_, true, _, true) => Some(CornerPosition::BackRight),
        _ => None,
    }
}

/// A corner element shows in the two elevations of its adjacent walls only.
/// Elements not in a corner, and plan or 3D directions, give `false`.
#[must_use]
pub fn is_corner_visible_in_view(
    element: &DesignElement,
    room: &RoomDimensions,
    view: ViewDirection,
) -> bool {
    let (Some(corner), Some(wall)) = (detect_corner_position(element, room), view.wall()) else {
        return false;
    };
    corner.adjacent_walls().contains(&wall)
}

/// [`is_corner_position_within`] with the default 30 cm tolerance.
#[must_use]
pub fn is_corner_position(x: f64, y: f64, room: &RoomDimensions) -> bool {
    is_corner_position_within(x, y, room, CORNER_TOLERANCE)
}

/// Whether a bare point is near a front-or-back wall and a left-or-right wall.
#[must_use]
pub fn is_corner_position_within(x: f64, y: f64, room: &RoomDimensions, tolerance: f64) -> bool {
    let near_front_or_back = y <= tolerance || y >= room.height - tolerance;
    let near_left_or_right = x <= tolerance || x >= room.width - tolerance;
    near_front_or_back && near_left_or_right
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room() -> RoomDimensions {
        RoomDimensions::new(400.0, 600.0)
    }

    fn cabinet(x: f64, y: f64) -> DesignElement {
        DesignElement::new("corner-base-cabinet", x, y, 90.0, 90.0, 90.0)
    }

    #[test]
    fn detects_each_corner() {
        let cases = [
            ((0.0, 0.0), CornerPosition::FrontLeft),
            ((310.0, 0.0), CornerPosition::FrontRight),
            ((0.0, 510.0), CornerPosition::BackLeft),
            ((310.0, 510.0), CornerPosition::BackRight),
        ];
        for ((x, y), expected) in cases {
            assert_eq!(detect_corner_position(&cabinet(x, y), &room()), Some(expected));
        }
    }

    #[test]
    fn mid_room_is_not_corner() {
        let e = DesignElement::new("base-60", 100.0, 100.0, 60.0, 60.0, 90.0);
        assert_eq!(detect_corner_position(&e, &room()), None);
    }

    #[test]
    fn tolerance_boundary_is_inclusive() {
        let e = DesignElement::new("base-60", 30.0, 30.0, 60.0, 60.0, 90.0);
        assert_eq!(detect_corner_position(&e, &room()), Some(CornerPosition::FrontLeft));

        let e = DesignElement::new("base-60", 35.0, 0.0, 60.0, 60.0, 90.0);
        assert_eq!(detect_corner_position(&e, &room()), None);
        assert_eq!(
            detect_corner_position_within(&e, &room(), 40.0),
            Some(CornerPosition::FrontLeft)
        );
    }

    #[test]
    fn corner_type_mid_wall_is_not_position_corner() {
        let e = cabinet(150.0, 0.0);
        assert!(crate::corner::is_corner_component(&e.id));
        assert_eq!(detect_corner_position(&e, &room()), None);
    }

    #[test]
    fn front_left_visible_in_front_and_left_only() {
        let e = cabinet(0.0, 0.0);
        let r = room();
        assert!(is_corner_visible_in_view(&e, &r, ViewDirection::Front));
        assert!(is_corner_visible_in_view(&e, &r, ViewDirection::Left));
        assert!(!is_corner_visible_in_view(&e, &r, ViewDirection::Back));
        assert!(!is_corner_visible_in_view(&e, &r, ViewDirection::Right));
        assert!(!is_corner_visible_in_view(&e, &r, ViewDirection::Plan));
    }

    #[test]
    fn back_right_visible_in_back_and_right() {
        let e = cabinet(310.0, 510.0);
        let r = room();
        assert!(is_corner_visible_in_view(&e, &r, ViewDirection::Back));
        assert!(is_corner_visible_in_view(&e, &r, ViewDirection::Right));
        assert!(!is_corner_visible_in_view(&e, &r, ViewDirection::Front));
    }

    #[test]
    fn non_corner_never_visible_as_corner() {
        let e = cabinet(150.0, 250.0);
        for d in ViewDirection::CARDINAL {
            assert!(!is_corner_visible_in_view(&e, &room(), d));
        }
    }

    #[test]
    fn adjacent_and_primary_walls() {
        assert_eq!(CornerPosition::BackLeft.adjacent_walls(), [Wall::Back, Wall::Left]);
        assert_eq!(CornerPosition::FrontRight.primary_wall(), Wall::Front);
        assert_eq!(CornerPosition::BackRight.primary_wall(), Wall::Back);
        assert_eq!(CornerPosition::FrontLeft.to_string(), "front-left");
    }

    #[test]
    fn point_corner_check() {
        let r = room();
        assert!(is_corner_position(10.0, 10.0, &r));
        assert!(is_corner_position(395.0, 590.0, &r));
        assert!(is_corner_position(30.0, 570.0, &r));
        assert!(!is_corner_position(200.0, 10.0, &r));
        assert!(!is_corner_position(10.0, 300.0, &r));
        assert!(is_corner_position_within(50.0, 50.0, &r, 50.0));
    }
}
