use thiserror::Error;

use crate::view::{ViewConfigIssue, ViewDirection};

/// Top-level error type for the room geometry engine.
#[derive(Debug, Error)]
pub enum RoomGeoError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Transform(#[from] TransformError),

    #[error(transparent)]
    ViewConfig(#[from] ViewConfigError),

    #[error(transparent)]
    Template(#[from] TemplateError),
}

/// Errors related to wall lookups.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("no walls found")]
    NoWalls,
}

/// Errors raised by the coordinate transform engine.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error("Unknown wall type: {0}")]
    UnknownWallType(String),

    #[error("CoordinateTransformEngine not initialized. Provide room dimensions.")]
    NotInitialized,

    #[error("no transform engine registered for this room")]
    EngineNotFound,

    #[error("zoom must be positive, got {0}")]
    InvalidZoom(f64),
}

/// Errors raised by elevation view configuration operations.
#[derive(Debug, Error)]
pub enum ViewConfigError {
    #[error("view {0} not found")]
    ViewNotFound(String),

    #[error("cannot duplicate {direction}: max {max} views per direction")]
    DirectionFull {
        direction: ViewDirection,
        max: usize,
    },

    #[error("views with direction {0} cannot be duplicated")]
    NotDuplicable(ViewDirection),

    #[error("cannot delete default view {0}")]
    DefaultView(String),

    #[error("label cannot be empty")]
    EmptyLabel,

    #[error("invalid view configuration: {}", join_issues(.0))]
    Invalid(Vec<ViewConfigIssue>),
}

/// Errors raised while reading room geometry templates.
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("malformed template document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid room geometry: {}", .0.join("; "))]
    Invalid(Vec<String>),
}

fn join_issues(issues: &[ViewConfigIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Convenience type alias for results using [`RoomGeoError`].
pub type Result<T> = std::result::Result<T, RoomGeoError>;
