//! # Lumen Engine
//!
//! A small fixed-rate 2D simulation loop: an entity registry stepped through
//! input handling, physics integration, world-bound collision response,
//! camera tracking and light flicker, then handed to an external renderer.
//!
//! ## Features
//!
//! - **Bounded Physics**: gravity nudge, explicit integration, per-tick friction
//!   and restitution against a single world rectangle
//! - **Camera Tracking**: active camera follows a target entity
//! - **Lights**: point, directional, spot and area lights with flicker
//! - **Headless-Friendly**: rendering and input are traits, so the whole loop
//!   runs without a window
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use lumen_engine::prelude::*;
//!
//! struct MyScene {
//!     registry: SceneRegistry,
//! }
//!
//! impl Scene for MyScene {
//!     fn registry(&self) -> &SceneRegistry {
//!         &self.registry
//!     }
//!
//!     fn registry_mut(&mut self) -> &mut SceneRegistry {
//!         &mut self.registry
//!     }
//!
//!     fn create(&mut self, _ctx: &mut Context) -> Result<(), SceneError> {
//!         self.registry.spawn_entity(EntityBuilder::new().name("box").position(10.0, 10.0));
//!         Ok(())
//!     }
//! }
//!
//! struct NullRenderer;
//!
//! impl Renderer for NullRenderer {
//!     fn draw(&mut self, _frame: &RenderFrame<'_>) -> Result<(), RenderError> {
//!         Ok(())
//!     }
//! }
//!
//! struct NoInput;
//!
//! impl InputSource for NoInput {
//!     fn poll(&mut self) -> Vec<InputEvent> {
//!         vec![InputEvent::key_up(KeyCode::Escape)]
//!     }
//! }
//!
//! fn main() -> Result<(), EngineError> {
//!     let mut scene = MyScene { registry: SceneRegistry::new(320.0, 200.0) };
//!     let mut engine = Engine::new(AppConfig::default());
//!     engine.run(&mut scene, &mut NullRenderer, &mut NoInput)
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod entity;
pub mod foundation;
pub mod input;
pub mod physics;
pub mod render;
pub mod scene;

mod context;
mod engine;

pub use context::Context;
pub use engine::{Engine, EngineError};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{AppConfig, Config, ConfigError, RunMode, Size},
        entity::{Entity, EntityBuilder, EntityKind, LightKind, Material, PhysicsKind},
        foundation::{
            collections::{EntityId, EntityKey},
            math::{Rect, Vec2},
        },
        input::{InputEvent, InputSource, InputState, KeyCode, Modifiers, MouseButton},
        physics::PhysicsSystem,
        render::{Color, DebugLevel, LightShape, RenderError, RenderFrame, Renderer},
        scene::{Scene, SceneError, SceneRegistry},
        Context, Engine, EngineError,
    };
}
