//! Physics system
//!
//! Steps every active entity of a scene once per tick: the entity collection
//! first, then the lights, each in insertion order. Per entity:
//!
//! 1. integration, for dynamic entities only ([`integrator`])
//! 2. the per-kind behavior hook ([`crate::entity::behavior`])
//! 3. containment inside the world rectangle ([`bounds`])
//!
//! There is no entity-vs-entity collision, only entity-vs-world.

pub mod bounds;
pub mod integrator;

pub use bounds::{constrain, Contact};
pub use integrator::{integrate, GRAVITY_SCALE};

use crate::entity::behavior::{self, BehaviorInputs};
use crate::input::InputState;
use crate::scene::SceneRegistry;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Integrates motion and resolves world-bound collisions
pub struct PhysicsSystem {
    rng: StdRng,
}

impl PhysicsSystem {
    /// Create a physics system with an entropy-seeded flicker source
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a physics system with a reproducible flicker source
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Step every active entity, then every active light
    ///
    /// # Arguments
    /// * `scene` - Registry whose collections are stepped
    /// * `input` - Current input state, read by pointer-following entities
    /// * `elapsed` - Milliseconds since the previous iteration started
    pub fn update(&mut self, scene: &mut SceneRegistry, input: &InputState, elapsed: f64) {
        let world = scene.world_rect();
        let gravity = scene.gravity();
        let inputs = BehaviorInputs {
            pointer: input.pointer(),
            camera_position: scene.active_camera().map(|camera| camera.position),
        };

        for key in scene.tick_order() {
            let Some(entity) = scene.get_mut(key) else {
                continue;
            };
            if !entity.active {
                continue;
            }

            if entity.is_dynamic() {
                integrate(entity, gravity, elapsed);
            }
            behavior::run(entity, &inputs, &mut self.rng);

            let contact = constrain(entity, &world);
            if !contact.is_empty() {
                log::trace!("'{}' hit world edge {:?}", entity.name, contact);
            }
        }
    }
}

impl Default for PhysicsSystem {
    fn default() -> Self {
        Self::new()
    }
}
