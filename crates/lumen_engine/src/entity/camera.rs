//! # 2D Camera
//!
//! A camera is an entity whose own `size` is the logical viewport and whose
//! position is recomputed every unpaused tick from a tracked target.
//!
//! The tracking formula offsets the target's top-left corner by the combined
//! half-extents of target and viewport:
//!
//! ```text
//! camera.position = target.position - (target.size + camera.size) / 2
//! ```
//!
//! The renderer translates every draw by the negated camera position.

use crate::foundation::collections::EntityKey;
use crate::foundation::math::Vec2;

/// Per-camera data stored in [`crate::entity::EntityKind::Camera`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CameraParams {
    /// Tracked entity; `None` leaves the camera where it is
    pub target: Option<EntityKey>,
}

impl CameraParams {
    /// Camera tracking `target`
    pub fn tracking(target: EntityKey) -> Self {
        Self {
            target: Some(target),
        }
    }
}

/// Camera position that tracks a target of the given position and size
pub fn follow_position(target_position: Vec2, target_size: Vec2, camera_size: Vec2) -> Vec2 {
    target_position - (target_size + camera_size) / 2.0
}
