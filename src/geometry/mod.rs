pub mod element;
pub mod room;
pub mod template;

#[cfg(test)]
pub(crate) mod fixtures;

pub use element::DesignElement;
pub use room::{
    CeilingGeometry, CeilingStyle, CeilingType, CeilingZone, FloorGeometry, MaterialZone,
    RoomGeometry, RoomMetadata, RoomSection, RoomSectionType, RoomShapeType, WallSegment, WallType,
    DEFAULT_CEILING_HEIGHT, DEFAULT_WALL_THICKNESS,
};
pub use template::{validate_geometry, GeometryValidation, RoomGeometryTemplate, TemplateCategory};
