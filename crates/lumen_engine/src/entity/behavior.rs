//! Per-frame entity behavior, dispatched on [`EntityKind`]
//!
//! Runs between integration and the world-bound constraint for every active
//! entity and light. Camera tracking is not part of this hook; the loop
//! updates the active camera after all entities are done.

use super::{Entity, EntityKind};
use crate::foundation::math::Vec2;
use rand::Rng;

/// Read-only frame data the hooks may consult
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BehaviorInputs {
    /// Pointer position in screen space
    pub pointer: Vec2,
    /// Active camera position, if a camera is active
    pub camera_position: Option<Vec2>,
}

impl BehaviorInputs {
    /// Pointer mapped into world space through the active camera
    pub fn pointer_in_world(&self) -> Vec2 {
        self.camera_position
            .map_or(self.pointer, |camera| self.pointer + camera)
    }
}

/// Run the per-frame hook of one entity
pub fn run<R: Rng + ?Sized>(entity: &mut Entity, inputs: &BehaviorInputs, rng: &mut R) {
    match &mut entity.kind {
        EntityKind::Light(params) => params.flicker(rng),
        EntityKind::Cursor => entity.position = inputs.pointer_in_world(),
        EntityKind::Basic | EntityKind::World(_) | EntityKind::Camera(_) => {}
    }
}
