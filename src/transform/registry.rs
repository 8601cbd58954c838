use slotmap::{new_key_type, SlotMap};
use tracing::debug;

use super::{CoordinateTransformEngine, RoomDimensions, WallConfig};
use crate::error::{Result, TransformError};

new_key_type! {
    /// Handle to a room's engine inside an [`EngineRegistry`].
    pub struct RoomId;
}

/// Owns one transform engine per active room.
///
/// Callers thread `RoomId` handles instead of sharing a global engine. A
/// removed room's handle stays invalid even if its slot is reused.
#[derive(Debug, Default)]
pub struct EngineRegistry {
    engines: SlotMap<RoomId, CoordinateTransformEngine>,
}

impl EngineRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an engine for a new room and returns its handle.
    pub fn create(&mut self, dimensions: RoomDimensions) -> RoomId {
        self.insert(CoordinateTransformEngine::new(dimensions))
    }

    pub fn create_with_wall_config(
        &mut self,
        dimensions: RoomDimensions,
        wall_config: WallConfig,
    ) -> RoomId {
        self.insert(CoordinateTransformEngine::with_wall_config(
            dimensions,
            wall_config,
        ))
    }

    pub fn insert(&mut self, engine: CoordinateTransformEngine) -> RoomId {
        self.engines.insert(engine)
    }

    /// Returns the engine registered under `id`.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::EngineNotFound` if `id` was never issued or
    /// has been removed.
    pub fn engine(&self, id: RoomId) -> Result<&CoordinateTransformEngine> {
        self.engines
            .get(id)
            .ok_or_else(|| TransformError::EngineNotFound.into())
    }

    /// Rebuilds the room's engine for new dimensions and returns the
    /// replacement. Engines copied out earlier keep the old dimensions.
    ///
    /// # Errors
    ///
    /// Returns `TransformError::EngineNotFound` if `id` is not registered.
    pub fn update_room_dimensions(
        &mut self,
        id: RoomId,
        dimensions: RoomDimensions,
    ) -> Result<CoordinateTransformEngine> {
        let slot = self
            .engines
            .get_mut(id)
            .ok_or(TransformError::EngineNotFound)?;
        *slot = slot.update_room_dimensions(dimensions);
        debug!(
            width = dimensions.width,
            height = dimensions.height,
            "room engine rebuilt"
        );
        Ok(*slot)
    }

    /// Drops the room's engine, returning it if it was registered.
    pub fn remove(&mut self, id: RoomId) -> Option<CoordinateTransformEngine> {
        self.engines.remove(id)
    }

    #[must_use]
    pub fn contains(&self, id: RoomId) -> bool {
        self.engines.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.engines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }
}
