//! Room geometries and helpers shared by unit tests.

use tracing_subscriber::EnvFilter;

use super::{RoomGeometry, RoomShapeType, WallSegment};

/// 600×400 rectangle, one wall per cardinal view.
pub(crate) fn rectangle() -> RoomGeometry {
    RoomGeometry::new(
        RoomShapeType::Rectangle,
        vec![[0.0, 0.0], [600.0, 0.0], [600.0, 400.0], [0.0, 400.0]],
        vec![
            WallSegment::new("wall_north", [0.0, 0.0], [600.0, 0.0], 240.0)
                .with_elevation_view("front"),
            WallSegment::new("wall_east", [600.0, 0.0], [600.0, 400.0], 240.0)
                .with_elevation_view("right"),
            WallSegment::new("wall_south", [600.0, 400.0], [0.0, 400.0], 240.0)
                .with_elevation_view("back"),
            WallSegment::new("wall_west", [0.0, 400.0], [0.0, 0.0], 240.0)
                .with_elevation_view("left"),
        ],
    )
}

/// 600×600 L-shape with the bottom-right 300×200 notch removed.
pub(crate) fn l_shape() -> RoomGeometry {
    RoomGeometry::new(
        RoomShapeType::LShape,
        vec![
            [0.0, 0.0],
            [600.0, 0.0],
            [600.0, 400.0],
            [300.0, 400.0],
            [300.0, 600.0],
            [0.0, 600.0],
        ],
        vec![
            WallSegment::new("wall_1", [0.0, 0.0], [600.0, 0.0], 240.0)
                .with_elevation_view("front"),
            WallSegment::new("wall_2", [600.0, 0.0], [600.0, 400.0], 240.0)
                .with_elevation_view("right"),
            WallSegment::new("wall_3", [600.0, 400.0], [300.0, 400.0], 240.0)
                .with_elevation_view("back"),
            WallSegment::new("wall_4_internal", [300.0, 400.0], [300.0, 600.0], 240.0)
                .with_elevation_view("interior-return"),
            WallSegment::new("wall_5", [300.0, 600.0], [0.0, 600.0], 240.0)
                .with_elevation_view("back"),
            WallSegment::new("wall_6", [0.0, 600.0], [0.0, 0.0], 240.0)
                .with_elevation_view("left"),
        ],
    )
}

/// Routes log output to the test harness; filter with `RUST_LOG`.
pub(crate) fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
