pub mod bounds_2d;
pub mod distance_2d;
pub mod polygon_2d;

pub use bounds_2d::{BoundingBox, Rect};

/// 2D point type (plan space, cm).
pub type Point2 = nalgebra::Point2<f64>;

/// 3D point type (world space, cm).
pub type Point3 = nalgebra::Point3<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Pure 3D translation.
pub type Translation3 = nalgebra::Translation3<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Converts a persisted `[x, y]` pair into a kernel point.
#[must_use]
pub fn point(xy: [f64; 2]) -> Point2 {
    Point2::new(xy[0], xy[1])
}

/// Converts a slice of persisted `[x, y]` pairs into kernel points.
#[must_use]
pub fn points(xys: &[[f64; 2]]) -> Vec<Point2> {
    xys.iter().copied().map(point).collect()
}
