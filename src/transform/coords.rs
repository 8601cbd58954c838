use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RoomGeoError, TransformError};
use crate::geometry::{DEFAULT_CEILING_HEIGHT, DEFAULT_WALL_THICKNESS};
use crate::math::Point2;

/// Inner usable floor extents of a rectangular room (cm).
///
/// `height` is the front-to-back depth, measured between inner wall faces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDimensions {
    pub width: f64,
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ceiling_height: Option<f64>,
}

impl RoomDimensions {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ceiling_height: None,
        }
    }

    #[must_use]
    pub fn with_ceiling_height(mut self, ceiling_height: f64) -> Self {
        self.ceiling_height = Some(ceiling_height);
        self
    }

    /// Ceiling height, defaulting to 240 cm.
    #[must_use]
    pub fn effective_ceiling_height(&self) -> f64 {
        self.ceiling_height.unwrap_or(DEFAULT_CEILING_HEIGHT)
    }
}

fn inner_faces_by_default() -> bool {
    true
}

fn default_thickness() -> f64 {
    DEFAULT_WALL_THICKNESS
}

/// Wall construction parameters shared by the four cardinal walls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WallConfig {
    #[serde(default = "default_thickness")]
    pub thickness: f64,
    /// Room dimensions are measured between inner faces, never centre lines.
    #[serde(default = "inner_faces_by_default")]
    pub inner_face_to_inner_face: bool,
}

impl Default for WallConfig {
    fn default() -> Self {
        Self {
            thickness: DEFAULT_WALL_THICKNESS,
            inner_face_to_inner_face: true,
        }
    }
}

/// 2D authoring position; `z` is height off the floor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlanCoordinates {
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
}

impl PlanCoordinates {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y, z: None }
    }

    #[must_use]
    pub fn with_z(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z: Some(z) }
    }

    /// Height off the floor, `0` when absent.
    #[must_use]
    pub fn elevation(&self) -> f64 {
        self.z.unwrap_or(0.0)
    }
}

/// 3D scene position; `y` is height.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldCoordinates {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Position within one flattened wall view: lateral `x`, height `y`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ElevationCoordinates {
    pub x: f64,
    pub y: f64,
}

/// Pixel position on a zoomed plan canvas.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CanvasCoordinates {
    pub x: f64,
    pub y: f64,
}

/// One of the four cardinal walls of a rectangular room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Wall {
    /// `y = 0`
    Front,
    /// `y = height`
    Back,
    /// `x = 0`
    Left,
    /// `x = width`
    Right,
}

impl Wall {
    pub const ALL: [Self; 4] = [Self::Front, Self::Back, Self::Left, Self::Right];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Back => "back",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl fmt::Display for Wall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Wall {
    type Err = RoomGeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "front" => Ok(Self::Front),
            "back" => Ok(Self::Back),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(TransformError::UnknownWallType(other.to_owned()).into()),
        }
    }
}

/// Inner face position of each wall: `y` for front/back, `x` for left/right.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InnerFaces {
    pub front: f64,
    pub back: f64,
    pub left: f64,
    pub right: f64,
}

/// Wall centre-line midpoints plus inner face positions, in plan space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallPositions {
    pub front: Point2,
    pub back: Point2,
    pub left: Point2,
    pub right: Point2,
    pub inner_faces: InnerFaces,
}

impl WallPositions {
    /// Centre-line midpoint of `wall`.
    #[must_use]
    pub fn center_line(&self, wall: Wall) -> Point2 {
        match wall {
            Wall::Front => self.front,
            Wall::Back => self.back,
            Wall::Left => self.left,
            Wall::Right => self.right,
        }
    }
}

/// Snapshot of an engine's effective configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomConfiguration {
    pub inner_width: f64,
    pub inner_height: f64,
    pub ceiling_height: f64,
    pub wall_config: WallConfig,
}

/// Component placement boundary in plan space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InnerRoomBounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub width: f64,
    pub height: f64,
}
