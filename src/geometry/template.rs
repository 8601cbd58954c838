use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::RoomGeometry;
use crate::error::{Result, TemplateError};

/// Stored bounding box edges may drift this far from the floor polygon (cm).
const BOUNDING_BOX_SLACK: f64 = 0.5;

/// Stored floor area may drift this far from the shoelace area (cm²).
const FLOOR_AREA_SLACK: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateCategory {
    Standard,
    LShape,
    UShape,
    TShape,
    Custom,
}

/// A user-adjustable template dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurableParam {
    pub name: String,
    pub label: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    pub unit: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ParameterConfig {
    #[serde(default)]
    pub configurable_params: Vec<ConfigurableParam>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_variables: Option<BTreeMap<String, String>>,
}

/// A room shape template as served by the template store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomGeometryTemplate {
    pub id: String,
    /// Unique machine name, e.g. `l-shape-standard`.
    pub template_name: String,
    pub display_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: TemplateCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_image_url: Option<String>,
    pub geometry_definition: RoomGeometry,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parameter_config: Option<ParameterConfig>,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
    #[serde(default)]
    pub sort_order: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

fn active_by_default() -> bool {
    true
}

impl RoomGeometryTemplate {
    /// Parses a template document.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::Parse` if the JSON does not match the template
    /// shape.
    pub fn from_json(json: &str) -> Result<Self> {
        let template = serde_json::from_str(json).map_err(TemplateError::from)?;
        Ok(template)
    }

    /// Parses a template and rejects geometry with validation errors.
    /// Warnings are logged and otherwise ignored.
    ///
    /// # Errors
    ///
    /// Returns `TemplateError::Parse` for malformed JSON, or
    /// `TemplateError::Invalid` listing every geometry error.
    pub fn from_json_validated(json: &str) -> Result<Self> {
        let template = Self::from_json(json)?;
        let report = validate_geometry(&template.geometry_definition);
        if !report.is_valid() {
            return Err(TemplateError::Invalid(report.errors).into());
        }
        Ok(template)
    }

    /// Looks up a configurable parameter by name.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&ConfigurableParam> {
        self.parameter_config
            .as_ref()?
            .configurable_params
            .iter()
            .find(|p| p.name == name)
    }
}

/// Outcome of [`validate_geometry`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeometryValidation {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl GeometryValidation {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Checks a room geometry for structural problems.
///
/// Errors: fewer than three floor vertices, zero-length or non-positive-height
/// walls, duplicate wall ids. Warnings: stored bounding box or floor area out of
/// step with the floor polygon, walls without an elevation view.
#[must_use]
pub fn validate_geometry(geometry: &RoomGeometry) -> GeometryValidation {
    let mut report = GeometryValidation::default();

    let vertex_count = geometry.floor.vertices.len();
    if vertex_count < 3 {
        report.errors.push(format!(
            "floor polygon needs at least 3 vertices, found {vertex_count}"
        ));
    }

    let mut seen = HashSet::new();
    for wall in &geometry.walls {
        if !seen.insert(wall.id.as_str()) {
            report.errors.push(format!("duplicate wall id {}", wall.id));
        }
        if wall.length() < crate::math::TOLERANCE {
            report.errors.push(format!("wall {} has zero length", wall.id));
        }
        if wall.height <= 0.0 {
            report
                .errors
                .push(format!("wall {} has non-positive height {}", wall.id, wall.height));
        }
        if wall.elevation_view.is_none() {
            report
                .warnings
                .push(format!("wall {} has no elevation_view assigned", wall.id));
        }
    }

    if vertex_count >= 3 {
        let computed = geometry.computed_bounding_box();
        let deviation = computed.max_deviation(&geometry.bounding_box);
        if deviation > BOUNDING_BOX_SLACK {
            report.warnings.push(format!(
                "stored bounding box differs from floor polygon by {deviation:.1}cm"
            ));
        }

        let stored_area = geometry.metadata.total_floor_area;
        let area = geometry.floor_area();
        if stored_area > 0.0 && (stored_area - area).abs() > FLOOR_AREA_SLACK {
            report.warnings.push(format!(
                "stored floor area {stored_area:.0}cm² differs from computed {area:.0}cm²"
            ));
        }
    }

    for warning in &report.warnings {
        debug!(shape = ?geometry.shape_type, %warning, "room geometry warning");
    }

    report
}
