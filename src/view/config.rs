use std::fmt;

use serde::{Deserialize, Serialize};

use crate::transform::Wall;

/// Upper bound on configurations sharing one direction.
pub const MAX_VIEWS_PER_DIRECTION: usize = 3;

/// What a view configuration draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewDirection {
    Plan,
    Front,
    Back,
    Left,
    Right,
    #[serde(rename = "3d")]
    ThreeD,
}

impl ViewDirection {
    /// Directions that map to a wall and must keep a default view.
    pub const CARDINAL: [Self; 4] = [Self::Front, Self::Back, Self::Left, Self::Right];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plan => "plan",
            Self::Front => "front",
            Self::Back => "back",
            Self::Left => "left",
            Self::Right => "right",
            Self::ThreeD => "3d",
        }
    }

    #[must_use]
    pub fn is_cardinal(self) -> bool {
        self.wall().is_some()
    }

    /// The room wall an elevation direction faces.
    #[must_use]
    pub fn wall(self) -> Option<Wall> {
        match self {
            Self::Front => Some(Wall::Front),
            Self::Back => Some(Wall::Back),
            Self::Left => Some(Wall::Left),
            Self::Right => Some(Wall::Right),
            Self::Plan | Self::ThreeD => None,
        }
    }

    /// Parses a direction name such as `front` or `3d`.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "plan" => Some(Self::Plan),
            "front" => Some(Self::Front),
            "back" => Some(Self::Back),
            "left" => Some(Self::Left),
            "right" => Some(Self::Right),
            "3d" => Some(Self::ThreeD),
            _ => None,
        }
    }

    /// Direction encoded in a view id: the part before the first `-`, so
    /// `front-dup1` and `front-default` are both `Front`.
    #[must_use]
    pub fn from_view_id(view_id: &str) -> Option<Self> {
        let prefix = view_id.split('-').next().unwrap_or(view_id);
        Self::parse(prefix)
    }

    /// Capitalised name used in generated labels.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Plan => "Plan",
            Self::Front => "Front",
            Self::Back => "Back",
            Self::Left => "Left",
            Self::Right => "Right",
            Self::ThreeD => "3D",
        }
    }
}

impl From<Wall> for ViewDirection {
    fn from(wall: Wall) -> Self {
        match wall {
            Wall::Front => Self::Front,
            Wall::Back => Self::Back,
            Wall::Left => Self::Left,
            Wall::Right => Self::Right,
        }
    }
}

impl fmt::Display for ViewDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One user-visible drawing with its own hidden-element set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElevationViewConfig {
    pub id: String,
    pub direction: ViewDirection,
    pub label: String,
    #[serde(default)]
    pub hidden_elements: Vec<String>,
    #[serde(default)]
    pub is_default: bool,
    #[serde(default)]
    pub sort_order: i32,
}

impl ElevationViewConfig {
    #[must_use]
    pub fn is_hidden(&self, element_id: &str) -> bool {
        self.hidden_elements.iter().any(|id| id == element_id)
    }
}

fn default_view(
    id: &str,
    direction: ViewDirection,
    label: &str,
    sort_order: i32,
) -> ElevationViewConfig {
    ElevationViewConfig {
        id: id.to_owned(),
        direction,
        label: label.to_owned(),
        hidden_elements: Vec::new(),
        is_default: true,
        sort_order,
    }
}

/// Plan, one default per cardinal direction, and 3D.
#[must_use]
pub fn default_elevation_views() -> Vec<ElevationViewConfig> {
    vec![
        default_view("plan", ViewDirection::Plan, "Plan View", 0),
        default_view("front-default", ViewDirection::Front, "Front", 1),
        default_view("back-default", ViewDirection::Back, "Back", 2),
        default_view("left-default", ViewDirection::Left, "Left", 3),
        default_view("right-default", ViewDirection::Right, "Right", 4),
        default_view("3d", ViewDirection::ThreeD, "3D View", 5),
    ]
}

/// The stored list, or the defaults when nothing has been stored yet.
#[must_use]
pub fn elevation_views_or_default(
    stored: Option<&[ElevationViewConfig]>,
) -> Vec<ElevationViewConfig> {
    match stored {
        Some(views) if !views.is_empty() => views.to_vec(),
        _ => default_elevation_views(),
    }
}

/// A broken invariant found by [`validate_views`](super::validate_views).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewConfigIssue {
    DuplicateId(String),
    TooManyViews {
        direction: ViewDirection,
        count: usize,
    },
    MissingDefault(ViewDirection),
    MultipleDefaults {
        direction: ViewDirection,
        count: usize,
    },
}

impl fmt::Display for ViewConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "duplicate view id {id}"),
            Self::TooManyViews { direction, count } => write!(
                f,
                "too many views for {direction}: {count} (max {MAX_VIEWS_PER_DIRECTION})"
            ),
            Self::MissingDefault(direction) => write!(f, "missing default view for {direction}"),
            Self::MultipleDefaults { direction, count } => {
                write!(f, "{count} default views for {direction}, expected 1")
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn direction_from_view_id() {
        assert_eq!(
            ViewDirection::from_view_id("front-dup1"),
            Some(ViewDirection::Front)
        );
        assert_eq!(
            ViewDirection::from_view_id("left-default"),
            Some(ViewDirection::Left)
        );
        assert_eq!(ViewDirection::from_view_id("3d"), Some(ViewDirection::ThreeD));
        assert_eq!(ViewDirection::from_view_id("plan"), Some(ViewDirection::Plan));
        assert_eq!(ViewDirection::from_view_id("interior-return"), None);
        assert_eq!(ViewDirection::from_view_id(""), None);
    }

    #[test]
    fn cardinal_directions_map_to_walls() {
        for d in ViewDirection::CARDINAL {
            let wall = d.wall().unwrap();
            assert_eq!(ViewDirection::from(wall), d);
            assert_eq!(wall.as_str(), d.as_str());
        }
        assert!(!ViewDirection::Plan.is_cardinal());
        assert!(ViewDirection::ThreeD.wall().is_none());
    }

    #[test]
    fn defaults_cover_every_direction_in_order() {
        let views = default_elevation_views();
        let ids: Vec<_> = views.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(
            ids,
            ["plan", "front-default", "back-default", "left-default", "right-default", "3d"]
        );
        assert!(views.iter().all(|v| v.is_default && v.hidden_elements.is_empty()));
        let orders: Vec<_> = views.iter().map(|v| v.sort_order).collect();
        assert_eq!(orders, [0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn stored_views_preferred_over_defaults() {
        assert_eq!(elevation_views_or_default(None), default_elevation_views());
        assert_eq!(
            elevation_views_or_default(Some(&[][..])),
            default_elevation_views()
        );

        let mut stored = default_elevation_views();
        stored[1].label = "Sink wall".to_owned();
        assert_eq!(elevation_views_or_default(Some(stored.as_slice())), stored);
    }

    #[test]
    fn config_json_shape() {
        let json = r#"{"id":"3d","direction":"3d","label":"3D View","hidden_elements":["a"],"is_default":true,"sort_order":5}"#;
        let v: ElevationViewConfig = serde_json::from_str(json).unwrap();
        assert_eq!(v.direction, ViewDirection::ThreeD);
        assert!(v.is_hidden("a"));
        assert_eq!(serde_json::to_string(&v).unwrap(), json);
    }
}
