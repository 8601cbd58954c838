//! Process-wide engine for call sites that cannot thread a handle.
//!
//! Prefer [`EngineRegistry`](super::EngineRegistry). The global hands out
//! copies, so a later [`initialize`] never changes an engine already fetched.

use std::sync::{PoisonError, RwLock};

use tracing::debug;

use super::{CoordinateTransformEngine, RoomDimensions};
use crate::error::{Result, TransformError};

static ENGINE: RwLock<Option<CoordinateTransformEngine>> = RwLock::new(None);

/// Installs a new engine for `dimensions`, replacing any existing one.
pub fn initialize(dimensions: RoomDimensions) -> CoordinateTransformEngine {
    let engine = CoordinateTransformEngine::new(dimensions);
    *ENGINE.write().unwrap_or_else(PoisonError::into_inner) = Some(engine);
    debug!(
        width = dimensions.width,
        height = dimensions.height,
        "global coordinate engine initialized"
    );
    engine
}

/// Returns the installed engine.
///
/// # Errors
///
/// Returns `TransformError::NotInitialized` if [`initialize`] has not been
/// called since start-up or the last [`clear`].
pub fn get() -> Result<CoordinateTransformEngine> {
    let engine = *ENGINE.read().unwrap_or_else(PoisonError::into_inner);
    engine.ok_or_else(|| TransformError::NotInitialized.into())
}

/// Returns the installed engine, creating one for `dimensions` if none exists.
/// An existing engine is returned unchanged.
pub fn get_or_initialize(dimensions: RoomDimensions) -> CoordinateTransformEngine {
    let mut slot = ENGINE.write().unwrap_or_else(PoisonError::into_inner);
    *slot.get_or_insert_with(|| CoordinateTransformEngine::new(dimensions))
}

/// Removes the installed engine.
pub fn clear() {
    *ENGINE.write().unwrap_or_else(PoisonError::into_inner) = None;
}
