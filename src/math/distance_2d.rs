use super::Point2;

/// Projection parameter of `p` onto segment `a → b`, clamped to `[0, 1]`.
///
/// Returns `None` for a zero-length segment.
fn clamped_projection(p: &Point2, a: &Point2, b: &Point2) -> Option<f64> {
    let d = b - a;
    let len_sq = d.norm_squared();

    if len_sq < 1e-20 {
        return None;
    }

    Some(((p - a).dot(&d) / len_sq).clamp(0.0, 1.0))
}

/// Returns the point on segment `a → b` closest to `p`.
///
/// A zero-length segment yields `a`.
#[must_use]
pub fn closest_point_on_segment(p: &Point2, a: &Point2, b: &Point2) -> Point2 {
    match clamped_projection(p, a, b) {
        Some(t) => a + (b - a) * t,
        None => *a,
    }
}

/// Returns the minimum distance from `p` to the segment `a → b`.
///
/// Projects onto the infinite line, clamps to the segment, and measures to the
/// clamped point. Degrades to point distance when `a == b`.
#[must_use]
pub fn point_to_segment_distance(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    (p - closest_point_on_segment(p, a, b)).norm()
}

/// Euclidean length of the segment `a → b`.
#[must_use]
pub fn line_length(a: &Point2, b: &Point2) -> f64 {
    (b - a).norm()
}

/// Angle of the segment `a → b` in degrees.
///
/// `0°` points along +x, `90°` along +y (down in plan space).
#[must_use]
pub fn line_angle(a: &Point2, b: &Point2) -> f64 {
    let d = b - a;
    d.y.atan2(d.x).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    fn p(x: f64, y: f64) -> Point2 {
        Point2::new(x, y)
    }

    // ── point_to_segment_distance tests ──

    #[test]
    fn segment_dist_perpendicular_projection() {
        let d = point_to_segment_distance(&p(50.0, 100.0), &p(0.0, 0.0), &p(100.0, 0.0));
        assert!((d - 100.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn segment_dist_beyond_endpoint() {
        // Closest point is the end (100, 0); distance = sqrt(50² + 50²).
        let d = point_to_segment_distance(&p(150.0, 50.0), &p(0.0, 0.0), &p(100.0, 0.0));
        assert!((d - 50.0 * 2.0_f64.sqrt()).abs() < TOL, "d={d}");
    }

    #[test]
    fn segment_dist_on_segment() {
        let d = point_to_segment_distance(&p(1.0, 0.0), &p(0.0, 0.0), &p(2.0, 0.0));
        assert!(d.abs() < TOL, "d={d}");
    }

    #[test]
    fn segment_dist_degenerate() {
        let d = point_to_segment_distance(&p(3.0, 4.0), &p(0.0, 0.0), &p(0.0, 0.0));
        assert!((d - 5.0).abs() < TOL, "d={d}");
    }

    // ── closest_point_on_segment tests ──

    #[test]
    fn closest_point_clamps_to_start() {
        let c = closest_point_on_segment(&p(-5.0, 3.0), &p(0.0, 0.0), &p(10.0, 0.0));
        assert!(c.x.abs() < TOL && c.y.abs() < TOL);
    }

    #[test]
    fn closest_point_interior() {
        let c = closest_point_on_segment(&p(4.0, 7.0), &p(0.0, 0.0), &p(0.0, 10.0));
        assert!(c.x.abs() < TOL);
        assert!((c.y - 7.0).abs() < TOL);
    }

    #[test]
    fn closest_point_degenerate_returns_start() {
        let c = closest_point_on_segment(&p(9.0, 9.0), &p(2.0, 3.0), &p(2.0, 3.0));
        assert_eq!(c, p(2.0, 3.0));
    }

    // ── length / angle tests ──

    #[test]
    fn length_3_4_5() {
        assert!((line_length(&p(0.0, 0.0), &p(3.0, 4.0)) - 5.0).abs() < TOL);
    }

    #[test]
    fn angle_quadrants() {
        assert!(line_angle(&p(0.0, 0.0), &p(100.0, 0.0)).abs() < TOL);
        assert!((line_angle(&p(0.0, 0.0), &p(0.0, 100.0)) - 90.0).abs() < TOL);
        assert!((line_angle(&p(0.0, 0.0), &p(-100.0, 0.0)).abs() - 180.0).abs() < TOL);
    }
}
