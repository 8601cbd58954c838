//! Corner elements, detected two independent ways.
//!
//! [`classify_corner_component`] looks only at the component identifier.
//! [`detect_corner_position`] looks only at where the element stands. A corner
//! cabinet placed mid-wall is the first but not the second.

mod classify;
mod door;
mod position;

pub use classify::{
    classify_corner_component, classify_corner_element, is_corner_component, CornerKind,
};
pub use door::{determine_corner_door_side, door_side, door_side_for_view, CornerDoor, DoorSide};
pub use position::{
    detect_corner_position, detect_corner_position_within, is_corner_position,
    is_corner_position_within, is_corner_visible_in_view, CornerPosition, CORNER_TOLERANCE,
};
