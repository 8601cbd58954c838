use crate::error::{GeometryError, Result};
use crate::geometry::WallSegment;
use crate::math::distance_2d::{closest_point_on_segment, point_to_segment_distance};
use crate::math::Point2;

/// Result of a nearest-wall query.
#[derive(Debug, Clone, Copy)]
pub struct NearestWall<'a> {
    /// The closest wall.
    pub wall: &'a WallSegment,
    /// Distance from the query point to the wall segment.
    pub distance: f64,
    /// The closest point on the wall segment.
    pub closest_point: Point2,
}

impl NearestWall<'_> {
    #[must_use]
    pub fn wall_id(&self) -> &str {
        &self.wall.id
    }
}

/// Finds the wall segment closest to `point` by linear scan.
///
/// Ties keep the first wall in input order.
///
/// # Errors
///
/// Returns `GeometryError::NoWalls` if `walls` is empty.
pub fn find_nearest_wall<'a>(point: &Point2, walls: &'a [WallSegment]) -> Result<NearestWall<'a>> {
    let mut best: Option<(&WallSegment, f64)> = None;

    for wall in walls {
        let d = point_to_segment_distance(point, &wall.start_point(), &wall.end_point());
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((wall, d)),
        }
    }

    let (wall, distance) = best.ok_or(GeometryError::NoWalls)?;
    Ok(NearestWall {
        wall,
        distance,
        closest_point: closest_point_on_segment(point, &wall.start_point(), &wall.end_point()),
    })
}
