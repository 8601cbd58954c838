//! Conversions between plan, world, elevation and canvas space.
//!
//! Plan space is the authoring space: origin at the inner top-left corner of
//! the room, `x` to the right, `y` towards the back wall, `z` up from the
//! floor. World space centres the room horizontally on the origin and uses
//! `y` for height. Elevation space flattens one cardinal wall into lateral
//! position `x` and height `y`.

mod coords;
mod engine;
pub mod global;
mod registry;

pub use coords::{
    CanvasCoordinates, ElevationCoordinates, InnerFaces, InnerRoomBounds, PlanCoordinates,
    RoomConfiguration, RoomDimensions, Wall, WallConfig, WallPositions, WorldCoordinates,
};
pub use engine::CoordinateTransformEngine;
pub use registry::{EngineRegistry, RoomId};
