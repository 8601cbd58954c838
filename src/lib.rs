pub mod config;
pub mod corner;
pub mod error;
pub mod geometry;
pub mod math;
pub mod transform;
pub mod view;
pub mod walls;

pub use config::Tolerances;
pub use error::{
    GeometryError, Result, RoomGeoError, TemplateError, TransformError, ViewConfigError,
};
