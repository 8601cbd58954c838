use serde::{Deserialize, Serialize};

use crate::math::{Point2, Rect};

/// A placed component as seen by the geometry engine.
///
/// `x`/`y` is the top-left plan anchor; `width` runs along x and `depth`
/// along y. `height` is the vertical extent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignElement {
    pub id: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub component_type: Option<String>,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub z: Option<f64>,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    /// Rotation about the vertical axis, degrees.
    #[serde(default)]
    pub rotation: f64,
}

impl DesignElement {
    /// Creates an unrotated element on the floor.
    #[must_use]
    pub fn new(id: impl Into<String>, x: f64, y: f64, width: f64, depth: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            component_type: None,
            x,
            y,
            z: None,
            width,
            height,
            depth,
            rotation: 0.0,
        }
    }

    #[must_use]
    pub fn anchor(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    /// Plan-space footprint, ignoring rotation.
    #[must_use]
    pub fn footprint(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.depth)
    }
}
