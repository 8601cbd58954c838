use serde::{Deserialize, Serialize};

use crate::math::distance_2d::{line_angle, line_length};
use crate::math::polygon_2d::{bounding_box, polygon_area, polygon_perimeter};
use crate::math::{point, points, BoundingBox, Point2};

/// Wall thickness used when a segment does not carry one (cm).
pub const DEFAULT_WALL_THICKNESS: f64 = 10.0;

/// Ceiling height used when neither the ceiling nor the walls specify one (cm).
pub const DEFAULT_CEILING_HEIGHT: f64 = 240.0;

/// Overall room shape family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RoomShapeType {
    Rectangle,
    LShape,
    UShape,
    TShape,
    Custom,
}

/// Kind of wall segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallType {
    #[default]
    Solid,
    Door,
    Window,
    Opening,
}

/// One straight wall of a polygon room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WallSegment {
    /// Unique id within the room, e.g. `wall_north`, `wall_internal_1`.
    pub id: String,
    pub start: [f64; 2],
    pub end: [f64; 2],
    pub height: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thickness: Option<f64>,
    #[serde(rename = "type", default)]
    pub wall_type: WallType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    /// Elevation view this wall is drawn in; several walls may share a tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_view: Option<String>,
}

impl WallSegment {
    /// Creates a solid wall with no elevation view assigned.
    #[must_use]
    pub fn new(id: impl Into<String>, start: [f64; 2], end: [f64; 2], height: f64) -> Self {
        Self {
            id: id.into(),
            start,
            end,
            height,
            thickness: None,
            wall_type: WallType::Solid,
            material: None,
            elevation_view: None,
        }
    }

    /// Sets the elevation view tag.
    #[must_use]
    pub fn with_elevation_view(mut self, view: impl Into<String>) -> Self {
        self.elevation_view = Some(view.into());
        self
    }

    #[must_use]
    pub fn start_point(&self) -> Point2 {
        point(self.start)
    }

    #[must_use]
    pub fn end_point(&self) -> Point2 {
        point(self.end)
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        line_length(&self.start_point(), &self.end_point())
    }

    /// Direction of the wall in degrees, `atan2(dy, dx)`.
    #[must_use]
    pub fn angle(&self) -> f64 {
        line_angle(&self.start_point(), &self.end_point())
    }

    #[must_use]
    pub fn thickness_or_default(&self) -> f64 {
        self.thickness.unwrap_or(DEFAULT_WALL_THICKNESS)
    }
}

/// Floor material override for part of the floor polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialZone {
    pub vertices: Vec<[f64; 2]>,
    pub material: String,
}

fn polygon_kind() -> String {
    "polygon".to_owned()
}

/// Floor outline of the room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FloorGeometry {
    #[serde(rename = "type", default = "polygon_kind")]
    pub kind: String,
    /// Ordered boundary vertices (cm).
    pub vertices: Vec<[f64; 2]>,
    #[serde(default)]
    pub elevation: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub material_zones: Vec<MaterialZone>,
}

impl FloorGeometry {
    /// Creates a polygon floor at ground level.
    #[must_use]
    pub fn polygon(vertices: Vec<[f64; 2]>) -> Self {
        Self {
            kind: polygon_kind(),
            vertices,
            elevation: 0.0,
            material: None,
            material_zones: Vec::new(),
        }
    }

    #[must_use]
    pub fn points(&self) -> Vec<Point2> {
        points(&self.vertices)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CeilingType {
    #[default]
    Flat,
    Vaulted,
    Sloped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CeilingStyle {
    #[default]
    Flat,
    Vaulted,
}

/// Part of the ceiling with its own height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CeilingZone {
    pub vertices: Vec<[f64; 2]>,
    pub height: f64,
    #[serde(default)]
    pub style: CeilingStyle,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slope: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apex_height: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CeilingGeometry {
    #[serde(rename = "type", default)]
    pub kind: CeilingType,
    /// Uniform ceiling height (cm), when the template gives one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f64>,
    #[serde(default)]
    pub zones: Vec<CeilingZone>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomSectionType {
    Primary,
    Secondary,
    Arm,
    Extension,
}

/// Named sub-area of an L/U/T room.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomSection {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub section_type: Option<RoomSectionType>,
    pub vertices: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RoomMetadata {
    /// Floor area in cm².
    #[serde(default)]
    pub total_floor_area: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_wall_area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usable_floor_area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_perimeter: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_wall_length: Option<f64>,
}

/// Polygon room definition as stored in a template's `geometry_definition`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomGeometry {
    pub shape_type: RoomShapeType,
    pub bounding_box: BoundingBox,
    pub floor: FloorGeometry,
    #[serde(default)]
    pub walls: Vec<WallSegment>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ceiling: Option<CeilingGeometry>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<RoomSection>,
    #[serde(default)]
    pub metadata: RoomMetadata,
}

impl RoomGeometry {
    /// Builds a geometry from a floor outline and walls, deriving the bounding
    /// box and floor area.
    #[must_use]
    pub fn new(
        shape_type: RoomShapeType,
        vertices: Vec<[f64; 2]>,
        walls: Vec<WallSegment>,
    ) -> Self {
        let floor = FloorGeometry::polygon(vertices);
        let pts = floor.points();
        Self {
            shape_type,
            bounding_box: bounding_box(&pts),
            metadata: RoomMetadata {
                total_floor_area: polygon_area(&pts),
                ..RoomMetadata::default()
            },
            floor,
            walls,
            ceiling: None,
            sections: Vec::new(),
        }
    }

    /// Bounding box recomputed from the floor vertices.
    #[must_use]
    pub fn computed_bounding_box(&self) -> BoundingBox {
        bounding_box(&self.floor.points())
    }

    /// Floor area recomputed from the floor vertices (cm²).
    #[must_use]
    pub fn floor_area(&self) -> f64 {
        polygon_area(&self.floor.points())
    }

    /// Length of the floor boundary (cm).
    #[must_use]
    pub fn perimeter_length(&self) -> f64 {
        polygon_perimeter(&self.floor.points())
    }

    #[must_use]
    pub fn wall(&self, id: &str) -> Option<&WallSegment> {
        self.walls.iter().find(|w| w.id == id)
    }

    /// Effective ceiling height: explicit elevation, then the highest zone,
    /// then the first wall height, then [`DEFAULT_CEILING_HEIGHT`].
    #[must_use]
    pub fn ceiling_height(&self) -> f64 {
        let from_ceiling = self.ceiling.as_ref().and_then(|c| {
            c.elevation.or_else(|| {
                c.zones
                    .iter()
                    .map(|z| z.height)
                    .reduce(f64::max)
            })
        });
        from_ceiling
            .or_else(|| self.walls.first().map(|w| w.height))
            .unwrap_or(DEFAULT_CEILING_HEIGHT)
    }
}
