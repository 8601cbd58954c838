use tracing::warn;

use crate::config::Tolerances;
use crate::geometry::{DesignElement, RoomGeometry, WallSegment};
use crate::math::distance_2d::point_to_segment_distance;

/// Walls tagged with `view`, in template order.
#[must_use]
pub fn walls_for_elevation_view<'a>(
    view: &str,
    geometry: &'a RoomGeometry,
) -> Vec<&'a WallSegment> {
    geometry
        .walls
        .iter()
        .filter(|w| w.elevation_view.as_deref() == Some(view))
        .collect()
}

/// Distinct `elevation_view` tags in order of first appearance.
#[must_use]
pub fn available_elevation_views(geometry: &RoomGeometry) -> Vec<&str> {
    let mut views: Vec<&str> = Vec::new();
    for tag in geometry.walls.iter().filter_map(|w| w.elevation_view.as_deref()) {
        if !views.contains(&tag) {
            views.push(tag);
        }
    }
    views
}

/// Finds the elements standing against one wall segment.
///
/// An element belongs to the wall when its plan anchor is within the
/// tolerance of the segment.
pub struct ElementsForWall<'a> {
    wall_id: &'a str,
    geometry: &'a RoomGeometry,
    tolerance: f64,
}

impl<'a> ElementsForWall<'a> {
    /// Creates a query with the default 20 cm tolerance.
    #[must_use]
    pub fn new(wall_id: &'a str, geometry: &'a RoomGeometry) -> Self {
        Self {
            wall_id,
            geometry,
            tolerance: Tolerances::DEFAULT_WALL_PROXIMITY,
        }
    }

    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Takes the wall-proximity threshold from a loaded [`Tolerances`].
    #[must_use]
    pub fn with_tolerances(self, tolerances: &Tolerances) -> Self {
        self.with_tolerance(tolerances.wall_proximity)
    }

    /// Filters `elements`, keeping input order. An unknown wall id yields an
    /// empty list.
    #[must_use]
    pub fn execute<'e>(&self, elements: &'e [DesignElement]) -> Vec<&'e DesignElement> {
        let Some(wall) = self.geometry.wall(self.wall_id) else {
            warn!(wall_id = self.wall_id, "wall not found");
            return Vec::new();
        };
        let (a, b) = (wall.start_point(), wall.end_point());
        elements
            .iter()
            .filter(|e| point_to_segment_distance(&e.anchor(), &a, &b) <= self.tolerance)
            .collect()
    }
}

/// [`ElementsForWall`] with the default tolerance.
#[must_use]
pub fn elements_for_wall<'e>(
    wall_id: &str,
    elements: &'e [DesignElement],
    geometry: &RoomGeometry,
) -> Vec<&'e DesignElement> {
    ElementsForWall::new(wall_id, geometry).execute(elements)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::fixtures::{init_tracing, l_shape, rectangle};

    fn element_ids<'a>(found: &[&'a DesignElement]) -> Vec<&'a str> {
        found.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn rectangle_views_are_one_to_one() {
        let g = rectangle();
        assert_eq!(available_elevation_views(&g), ["front", "right", "back", "left"]);
        for view in ["front", "right", "back", "left"] {
            assert_eq!(walls_for_elevation_view(view, &g).len(), 1);
        }
    }

    #[test]
    fn l_shape_groups_walls() {
        let g = l_shape();
        assert_eq!(
            available_elevation_views(&g),
            ["front", "right", "back", "interior-return", "left"]
        );
        let back: Vec<_> = walls_for_elevation_view("back", &g)
            .iter()
            .map(|w| w.id.as_str())
            .collect();
        assert_eq!(back, ["wall_3", "wall_5"]);
        assert_eq!(
            walls_for_elevation_view("interior-return", &g)[0].id,
            "wall_4_internal"
        );
        assert!(walls_for_elevation_view("ceiling", &g).is_empty());
    }

    #[test]
    fn untagged_walls_are_skipped() {
        let mut g = rectangle();
        g.walls[0].elevation_view = None;
        assert_eq!(available_elevation_views(&g), ["right", "back", "left"]);
    }

    #[test]
    fn elements_near_wall() {
        let g = l_shape();
        let elements = vec![
            DesignElement::new("on-wall", 100.0, 0.0, 60.0, 60.0, 90.0),
            DesignElement::new("near", 250.0, 15.0, 60.0, 60.0, 90.0),
            DesignElement::new("edge", 400.0, 20.0, 60.0, 60.0, 90.0),
            DesignElement::new("far", 100.0, 25.0, 60.0, 60.0, 90.0),
            DesignElement::new("island", 200.0, 200.0, 120.0, 90.0, 90.0),
        ];
        let found = elements_for_wall("wall_1", &elements, &g);
        assert_eq!(element_ids(&found), ["on-wall", "near", "edge"]);

        let found = ElementsForWall::new("wall_1", &g)
            .with_tolerance(30.0)
            .execute(&elements);
        assert_eq!(element_ids(&found), ["on-wall", "near", "edge", "far"]);
    }

    #[test]
    fn tolerances_document_widens_reach() {
        let g = l_shape();
        let elements = vec![
            DesignElement::new("edge", 400.0, 20.0, 60.0, 60.0, 90.0),
            DesignElement::new("far", 100.0, 25.0, 60.0, 60.0, 90.0),
        ];
        let t: Tolerances = serde_json::from_str(r#"{"wall_proximity": 25}"#).unwrap();
        let found = ElementsForWall::new("wall_1", &g)
            .with_tolerances(&t)
            .execute(&elements);
        assert_eq!(element_ids(&found), ["edge", "far"]);

        let found = ElementsForWall::new("wall_1", &g)
            .with_tolerances(&Tolerances::default())
            .execute(&elements);
        assert_eq!(element_ids(&found), ["edge"]);
    }

    #[test]
    fn segment_end_limits_reach() {
        let g = l_shape();
        // Collinear points past the end are measured to the endpoint.
        let elements = vec![
            DesignElement::new("along", 310.0, 500.0, 60.0, 60.0, 90.0),
            DesignElement::new("past-end", 300.0, 380.0, 60.0, 60.0, 90.0),
            DesignElement::new("way-past", 300.0, 300.0, 60.0, 60.0, 90.0),
        ];
        let found = elements_for_wall("wall_4_internal", &elements, &g);
        assert_eq!(element_ids(&found), ["along", "past-end"]);
    }

    #[test]
    fn unknown_wall_is_empty() {
        init_tracing();
        let elements = vec![DesignElement::new("a", 0.0, 0.0, 60.0, 60.0, 90.0)];
        assert!(elements_for_wall("wall_99", &elements, &rectangle()).is_empty());
    }
}
