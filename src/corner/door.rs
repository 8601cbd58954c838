use serde::{Deserialize, Serialize};

use super::position::{detect_corner_position, CornerPosition};
use crate::geometry::DesignElement;
use crate::transform::RoomDimensions;
use crate::view::ViewDirection;

/// Side a corner unit's door opens towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorSide {
    Left,
    Right,
}

impl DoorSide {
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Outcome of [`determine_corner_door_side`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CornerDoor {
    pub door_side: DoorSide,
    pub corner: Option<CornerPosition>,
}

/// Physical door side for a corner: away from the left or right wall.
/// A manual override always wins; `None` means automatic.
#[must_use]
pub fn door_side(corner: CornerPosition, manual: Option<DoorSide>) -> DoorSide {
    manual.unwrap_or(match corner {
        CornerPosition::FrontLeft | CornerPosition::BackLeft => DoorSide::Right,
        CornerPosition::FrontRight | CornerPosition::BackRight => DoorSide::Left,
    })
}

/// Detects the element's corner and picks its door side. Elements outside a
/// corner open to the right and ignore the override.
#[must_use]
pub fn determine_corner_door_side(
    element: &DesignElement,
    room: &RoomDimensions,
    manual: Option<DoorSide>,
) -> CornerDoor {
    match detect_corner_position(element, room) {
        Some(corner) => CornerDoor {
            door_side: door_side(corner, manual),
            corner: Some(corner),
        },
        None => CornerDoor {
            door_side: DoorSide::Right,
            corner: None,
        },
    }
}

/// Door side as drawn in one elevation.
///
/// Left and right elevations mirror each other. The left view flips a
/// back-left unit and the right view flips a front-right unit; everything
/// else draws as the physical side.
#[must_use]
pub fn door_side_for_view(
    side: DoorSide,
    corner: Option<CornerPosition>,
    view: ViewDirection,
) -> DoorSide {
    match (corner, view) {
        (Some(CornerPosition::BackLeft), ViewDirection::Left)
        | (Some(CornerPosition::FrontRight), ViewDirection::Right) => side.flipped(),
        _ => side,
    }
}
