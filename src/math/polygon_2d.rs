use super::{BoundingBox, Point2, Rect, Vector2};

/// Ray-casting point-in-polygon test.
///
/// Casts a horizontal ray towards +x and toggles on every edge crossing; an odd
/// count means inside. Points exactly on an edge may land on either side.
/// Self-intersecting polygons are not guarded against.
#[must_use]
pub fn is_point_in_polygon(p: &Point2, vertices: &[Point2]) -> bool {
    let n = vertices.len();
    let mut inside = false;
    let mut j = n.wrapping_sub(1);

    for i in 0..n {
        let vi = &vertices[i];
        let vj = &vertices[j];

        if (vi.y > p.y) != (vj.y > p.y) && p.x < (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x
        {
            inside = !inside;
        }
        j = i;
    }

    inside
}

/// Computes the signed area of a polygon in the XY plane (shoelace formula).
///
/// Positive for counter-clockwise in a y-up frame, negative for clockwise.
#[must_use]
pub fn signed_area_2d(vertices: &[Point2]) -> f64 {
    let n = vertices.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += vertices[i].x * vertices[j].y - vertices[j].x * vertices[i].y;
    }
    sum * 0.5
}

/// Unsigned polygon area. Valid for convex and simple concave polygons.
#[must_use]
pub fn polygon_area(vertices: &[Point2]) -> f64 {
    signed_area_2d(vertices).abs()
}

/// Total length of the closed boundary.
#[must_use]
pub fn polygon_perimeter(vertices: &[Point2]) -> f64 {
    let n = vertices.len();
    if n < 2 {
        return 0.0;
    }
    (0..n)
        .map(|i| (vertices[(i + 1) % n] - vertices[i]).norm())
        .sum()
}

/// Axis-aligned bounding box of the vertices.
///
/// An empty slice yields [`BoundingBox::empty`].
#[must_use]
pub fn bounding_box(vertices: &[Point2]) -> BoundingBox {
    let mut bb = BoundingBox::empty();
    for v in vertices {
        bb.include_point(v);
    }
    bb
}

/// Inclusive point-in-box test.
#[must_use]
pub fn is_point_in_bounding_box(p: &Point2, bb: &BoundingBox) -> bool {
    bb.contains(p)
}

/// Returns `true` if all four corners of `rect` lie inside the polygon.
#[must_use]
pub fn is_rectangle_in_polygon(rect: &Rect, vertices: &[Point2]) -> bool {
    rect.corners()
        .iter()
        .all(|c| is_point_in_polygon(c, vertices))
}

/// Approximate rectangle/polygon overlap test.
///
/// True if any rectangle corner is inside the polygon or any polygon vertex is
/// inside the rectangle. Edge-only crossings (a thin polygon arm passing
/// through the rectangle with no vertex inside it) are not detected.
#[must_use]
pub fn does_rectangle_intersect_polygon(rect: &Rect, vertices: &[Point2]) -> bool {
    if rect
        .corners()
        .iter()
        .any(|c| is_point_in_polygon(c, vertices))
    {
        return true;
    }

    let bounds = rect.bounds();
    vertices.iter().any(|v| bounds.contains(v))
}

/// Arithmetic mean of the vertices.
///
/// Not the area-weighted centroid; suitable for label placement. An empty
/// slice yields the origin.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn polygon_centroid(vertices: &[Point2]) -> Point2 {
    if vertices.is_empty() {
        return Point2::origin();
    }
    let sum = vertices
        .iter()
        .fold(Vector2::zeros(), |acc, v| acc + v.coords);
    Point2::from(sum / vertices.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    fn poly(xys: &[(f64, f64)]) -> Vec<Point2> {
        xys.iter().map(|&(x, y)| Point2::new(x, y)).collect()
    }

    fn square() -> Vec<Point2> {
        poly(&[(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0)])
    }

    fn l_shape() -> Vec<Point2> {
        poly(&[
            (0.0, 0.0),
            (200.0, 0.0),
            (200.0, 200.0),
            (100.0, 200.0),
            (100.0, 100.0),
            (0.0, 100.0),
        ])
    }

    #[test]
    fn point_in_square() {
        assert!(is_point_in_polygon(&Point2::new(50.0, 50.0), &square()));
        assert!(!is_point_in_polygon(&Point2::new(150.0, 50.0), &square()));
    }

    #[test]
    fn point_in_l_shape_notch_is_outside() {
        let l = l_shape();
        assert!(is_point_in_polygon(&Point2::new(150.0, 150.0), &l));
        assert!(is_point_in_polygon(&Point2::new(50.0, 50.0), &l));
        assert!(!is_point_in_polygon(&Point2::new(50.0, 150.0), &l));
    }

    #[test]
    fn point_in_empty_polygon() {
        assert!(!is_point_in_polygon(&Point2::new(0.0, 0.0), &[]));
    }

    #[test]
    fn area_square() {
        assert!((polygon_area(&square()) - 10_000.0).abs() < TOL);
    }

    #[test]
    fn area_l_shape() {
        assert!((polygon_area(&l_shape()) - 30_000.0).abs() < TOL);
    }

    #[test]
    fn area_is_orientation_independent() {
        let mut rev = l_shape();
        rev.reverse();
        assert!((polygon_area(&rev) - 30_000.0).abs() < TOL);
        assert!(signed_area_2d(&rev) * signed_area_2d(&l_shape()) < 0.0);
    }

    #[test]
    fn area_degenerate() {
        assert!(polygon_area(&poly(&[(0.0, 0.0), (1.0, 1.0)])).abs() < TOL);
    }

    #[test]
    fn perimeter_l_shape() {
        assert!((polygon_perimeter(&l_shape()) - 800.0).abs() < TOL);
    }

    #[test]
    fn bounding_box_triangle() {
        let bb = bounding_box(&poly(&[(0.0, 0.0), (100.0, 50.0), (50.0, 100.0)]));
        assert_eq!(bb, BoundingBox::new(0.0, 0.0, 100.0, 100.0));
    }

    #[test]
    fn point_in_bounding_box_is_inclusive() {
        let bb = bounding_box(&l_shape());
        // The notch is outside the polygon but inside its box.
        assert!(is_point_in_bounding_box(&Point2::new(50.0, 150.0), &bb));
        assert!(is_point_in_bounding_box(&Point2::new(200.0, 0.0), &bb));
        assert!(!is_point_in_bounding_box(&Point2::new(200.1, 50.0), &bb));
        assert!(!is_point_in_bounding_box(&Point2::new(0.0, 0.0), &BoundingBox::empty()));
    }

    #[test]
    fn rectangle_inside_and_exceeding() {
        let room = poly(&[(0.0, 0.0), (200.0, 0.0), (200.0, 200.0), (0.0, 200.0)]);
        assert!(is_rectangle_in_polygon(&Rect::new(50.0, 50.0, 50.0, 50.0), &room));
        assert!(!is_rectangle_in_polygon(
            &Rect::new(150.0, 150.0, 100.0, 100.0),
            &room
        ));
    }

    #[test]
    fn rectangle_in_l_shape_notch_is_not_inside() {
        assert!(!is_rectangle_in_polygon(
            &Rect::new(20.0, 120.0, 40.0, 40.0),
            &l_shape()
        ));
    }

    #[test]
    fn intersect_partial_overlap() {
        assert!(does_rectangle_intersect_polygon(
            &Rect::new(80.0, 80.0, 50.0, 50.0),
            &square()
        ));
        assert!(!does_rectangle_intersect_polygon(
            &Rect::new(300.0, 300.0, 10.0, 10.0),
            &square()
        ));
    }

    #[test]
    fn intersect_polygon_inside_rectangle() {
        assert!(does_rectangle_intersect_polygon(
            &Rect::new(-10.0, -10.0, 500.0, 500.0),
            &square()
        ));
    }

    #[test]
    fn intersect_misses_thin_crossing() {
        // A thin bar crossing the rectangle with no vertex inside it and no
        // rectangle corner inside the bar is not reported.
        let bar = poly(&[(-100.0, 49.0), (200.0, 49.0), (200.0, 51.0), (-100.0, 51.0)]);
        assert!(!does_rectangle_intersect_polygon(
            &Rect::new(0.0, 0.0, 100.0, 100.0),
            &bar
        ));
    }

    #[test]
    fn centroid_is_vertex_mean() {
        let c = polygon_centroid(&l_shape());
        assert!((c.x - 100.0).abs() < TOL);
        assert!((c.y - 100.0).abs() < TOL);
    }
}
