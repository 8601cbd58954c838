use serde::{Deserialize, Serialize};

/// Distance thresholds (cm) under which "near" counts as "on".
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tolerances {
    /// Wall endpoint to bounding-box edge, for perimeter classification.
    pub perimeter: f64,
    /// Element anchor to wall segment, for per-wall element filtering.
    pub wall_proximity: f64,
    /// Element edge to room wall, for corner placement.
    pub corner: f64,
}

impl Tolerances {
    pub const DEFAULT_PERIMETER: f64 = 5.0;
    pub const DEFAULT_WALL_PROXIMITY: f64 = 20.0;
    pub const DEFAULT_CORNER: f64 = 30.0;
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            perimeter: Self::DEFAULT_PERIMETER,
            wall_proximity: Self::DEFAULT_WALL_PROXIMITY,
            corner: Self::DEFAULT_CORNER,
        }
    }
}
