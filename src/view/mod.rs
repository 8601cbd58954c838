//! Elevation views: which walls and elements each flattened drawing shows.
//!
//! Two layers live here. Wall-level assignment groups a room's wall segments
//! by their template `elevation_view` tag. View configurations are the
//! user-facing list of drawings (plan, up to three per cardinal direction, 3D),
//! each with its own hidden-element set.

mod assignment;
mod config;
mod lifecycle;

pub use assignment::{
    available_elevation_views, elements_for_wall, walls_for_elevation_view, ElementsForWall,
};
pub use config::{
    default_elevation_views, elevation_views_or_default, ElevationViewConfig, ViewConfigIssue,
    ViewDirection, MAX_VIEWS_PER_DIRECTION,
};
pub use lifecycle::{
    can_duplicate, delete_view, duplicate_view, ensure_valid_views, is_element_visible_in_view,
    rename_view, toggle_element_visibility, validate_views, views_for_direction,
};
