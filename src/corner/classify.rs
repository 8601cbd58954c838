use crate::geometry::DesignElement;

/// Family of a corner component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CornerKind {
    CounterTop,
    WallCabinet,
    BaseCabinet,
    TallUnit,
    Sink,
}

impl CornerKind {
    /// Component `type` an element of this kind must carry, if any.
    #[must_use]
    pub fn component_type(self) -> Option<&'static str> {
        match self {
            Self::CounterTop => Some("counter-top"),
            Self::WallCabinet | Self::BaseCabinet | Self::TallUnit => Some("cabinet"),
            Self::Sink => None,
        }
    }
}

/// Identifier fragments, checked in order against the lowercased id.
const CORNER_PATTERNS: &[(&str, CornerKind)] = &[
    ("corner-counter-top", CornerKind::CounterTop),
    ("counter-top-corner", CornerKind::CounterTop),
    ("corner-wall-cabinet", CornerKind::WallCabinet),
    ("corner-base-cabinet", CornerKind::BaseCabinet),
    ("l-shaped-test-cabinet", CornerKind::BaseCabinet),
    ("corner-tall-unit", CornerKind::TallUnit),
    ("corner-larder", CornerKind::TallUnit),
    ("corner-pantry", CornerKind::TallUnit),
    ("corner-sink", CornerKind::Sink),
];

/// Classifies a component by identifier alone, ignoring position.
#[must_use]
pub fn classify_corner_component(component_id: &str) -> Option<CornerKind> {
    let id = component_id.to_lowercase();
    CORNER_PATTERNS
        .iter()
        .find(|(pattern, _)| id.contains(pattern))
        .map(|&(_, kind)| kind)
}

#[must_use]
pub fn is_corner_component(component_id: &str) -> bool {
    classify_corner_component(component_id).is_some()
}

/// Like [`classify_corner_component`] on the element id, but also requires the
/// element's component type to match the kind. Corner sinks never qualify.
#[must_use]
pub fn classify_corner_element(element: &DesignElement) -> Option<CornerKind> {
    let kind = classify_corner_component(&element.id)?;
    let required = kind.component_type()?;
    (element.component_type.as_deref() == Some(required)).then_some(kind)
}
