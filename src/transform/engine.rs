use tracing::debug;

use super::coords::{
    CanvasCoordinates, ElevationCoordinates, InnerFaces, InnerRoomBounds, PlanCoordinates,
    RoomConfiguration, RoomDimensions, Wall, WallConfig, WallPositions, WorldCoordinates,
};
use crate::error::{Result, TransformError};
use crate::math::{Point2, Point3, Translation3};

/// Converts positions of one rectangular room between plan, world, elevation
/// and canvas space.
///
/// The engine is an immutable value. Changing the room produces a new engine
/// via [`update_room_dimensions`](Self::update_room_dimensions); values handed
/// out earlier are plain copies and are never affected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateTransformEngine {
    width: f64,
    height: f64,
    ceiling_height: f64,
    wall_config: WallConfig,
    /// Plan (x, z, y) to world, centring the floor on the origin.
    centering: Translation3,
}

impl CoordinateTransformEngine {
    /// Creates an engine with the default wall configuration.
    #[must_use]
    pub fn new(dimensions: RoomDimensions) -> Self {
        Self::with_wall_config(dimensions, WallConfig::default())
    }

    #[must_use]
    pub fn with_wall_config(dimensions: RoomDimensions, wall_config: WallConfig) -> Self {
        let RoomDimensions { width, height, .. } = dimensions;
        Self {
            width,
            height,
            ceiling_height: dimensions.effective_ceiling_height(),
            wall_config,
            centering: Translation3::new(-width / 2.0, 0.0, -height / 2.0),
        }
    }

    /// Returns an engine for `dimensions`, keeping this engine's wall
    /// configuration. All derived state is rebuilt.
    #[must_use]
    pub fn update_room_dimensions(&self, dimensions: RoomDimensions) -> Self {
        Self::with_wall_config(dimensions, self.wall_config)
    }

    /// Effective dimensions, with the ceiling height filled in.
    #[must_use]
    pub fn room_dimensions(&self) -> RoomDimensions {
        RoomDimensions {
            width: self.width,
            height: self.height,
            ceiling_height: Some(self.ceiling_height),
        }
    }

    #[must_use]
    pub fn wall_config(&self) -> WallConfig {
        self.wall_config
    }

    // ── plan / world ──

    /// Centres the room on the world origin. Plan `z` becomes world height `y`.
    #[must_use]
    pub fn plan_to_world(&self, plan: &PlanCoordinates) -> WorldCoordinates {
        let p = self
            .centering
            .transform_point(&Point3::new(plan.x, plan.elevation(), plan.y));
        WorldCoordinates {
            x: p.x,
            y: p.y,
            z: p.z,
        }
    }

    /// Inverse of [`plan_to_world`](Self::plan_to_world).
    ///
    /// World height always comes back as `Some`, so a plan point stored without
    /// `z` returns with `Some(0.0)`.
    #[must_use]
    pub fn world_to_plan(&self, world: &WorldCoordinates) -> PlanCoordinates {
        let p = self
            .centering
            .inverse_transform_point(&Point3::new(world.x, world.y, world.z));
        PlanCoordinates {
            x: p.x,
            y: p.z,
            z: Some(p.y),
        }
    }

    // ── plan / elevation ──

    /// Flattens a plan position onto the elevation of `wall`.
    ///
    /// Back mirrors `x` and left mirrors `y`, so every elevation reads left to
    /// right as seen from inside the room.
    #[must_use]
    pub fn plan_to_elevation(&self, plan: &PlanCoordinates, wall: Wall) -> ElevationCoordinates {
        let x = match wall {
            Wall::Front => plan.x,
            Wall::Back => self.width - plan.x,
            Wall::Left => self.height - plan.y,
            Wall::Right => plan.y,
        };
        ElevationCoordinates {
            x,
            y: plan.elevation(),
        }
    }

    /// Inverse of [`plan_to_elevation`](Self::plan_to_elevation). The axis the
    /// elevation does not carry is set to the wall's inner face.
    #[must_use]
    pub fn elevation_to_plan(
        &self,
        elevation: &ElevationCoordinates,
        wall: Wall,
    ) -> PlanCoordinates {
        let (x, y) = match wall {
            Wall::Front => (elevation.x, 0.0),
            Wall::Back => (self.width - elevation.x, self.height),
            Wall::Left => (0.0, self.height - elevation.x),
            Wall::Right => (self.width, elevation.x),
        };
        PlanCoordinates {
            x,
            y,
            z: Some(elevation.y),
        }
    }

    // ── plan / canvas ──

    #[must_use]
    pub fn plan_to_canvas(&self, plan: &PlanCoordinates, zoom: f64) -> CanvasCoordinates {
        CanvasCoordinates {
            x: plan.x * zoom,
            y: plan.y * zoom,
        }
    }

    /// Inverse of [`plan_to_canvas`](Self::plan_to_canvas).
    ///
    /// # Errors
    ///
    /// Returns `TransformError::InvalidZoom` if `zoom` is not positive.
    pub fn canvas_to_plan(&self, canvas: &CanvasCoordinates, zoom: f64) -> Result<PlanCoordinates> {
        if zoom.is_nan() || zoom <= 0.0 {
            return Err(TransformError::InvalidZoom(zoom).into());
        }
        Ok(PlanCoordinates::new(canvas.x / zoom, canvas.y / zoom))
    }

    // ── room queries ──

    /// Wall centre lines sit half a thickness outside the inner faces.
    #[must_use]
    pub fn wall_positions(&self) -> WallPositions {
        let half = self.wall_config.thickness / 2.0;
        let (w, h) = (self.width, self.height);
        WallPositions {
            front: Point2::new(w / 2.0, -half),
            back: Point2::new(w / 2.0, h + half),
            left: Point2::new(-half, h / 2.0),
            right: Point2::new(w + half, h / 2.0),
            inner_faces: InnerFaces {
                front: 0.0,
                back: h,
                left: 0.0,
                right: w,
            },
        }
    }

    /// Inclusive range check against the inner faces.
    #[must_use]
    pub fn validate_plan_coordinates(&self, plan: &PlanCoordinates) -> bool {
        let valid = (0.0..=self.width).contains(&plan.x) && (0.0..=self.height).contains(&plan.y);
        if !valid {
            debug!(
                x = plan.x,
                y = plan.y,
                width = self.width,
                height = self.height,
                "plan coordinates outside room"
            );
        }
        valid
    }

    #[must_use]
    pub fn room_configuration(&self) -> RoomConfiguration {
        RoomConfiguration {
            inner_width: self.width,
            inner_height: self.height,
            ceiling_height: self.ceiling_height,
            wall_config: self.wall_config,
        }
    }

    #[must_use]
    pub fn inner_room_bounds(&self) -> InnerRoomBounds {
        InnerRoomBounds {
            min_x: 0.0,
            min_y: 0.0,
            max_x: self.width,
            max_y: self.height,
            width: self.width,
            height: self.height,
        }
    }

    /// Lateral extent of the elevation of `wall`.
    #[must_use]
    pub fn wall_length_for(&self, wall: Wall) -> f64 {
        match wall {
            Wall::Front | Wall::Back => self.width,
            Wall::Left | Wall::Right => self.height,
        }
    }

    /// Distance between `plan` and its plan → world → plan image.
    #[must_use]
    pub fn round_trip_error(&self, plan: &PlanCoordinates) -> f64 {
        let back = self.world_to_plan(&self.plan_to_world(plan));
        let dz = back.elevation() - plan.elevation();
        ((back.x - plan.x).powi(2) + (back.y - plan.y).powi(2) + dz.powi(2)).sqrt()
    }
}
