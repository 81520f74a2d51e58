//! Scene lifecycle and entity registry
//!
//! A scene owns a [`SceneRegistry`] and reacts to the loop through the hooks
//! of the [`Scene`] trait. Every hook receives the loop [`Context`] explicitly;
//! there is no global state to reach for.

pub mod registry;

pub use registry::{SceneError, SceneRegistry};

use crate::context::Context;
use crate::input::KeyCode;
use crate::render::{RenderError, Renderer};

/// Scene lifecycle trait
///
/// Implement this trait to describe a simulation. Only the registry accessors
/// are required; every hook defaults to doing nothing.
pub trait Scene {
    /// Entity registry owned by the scene
    fn registry(&self) -> &SceneRegistry;

    /// Mutable entity registry owned by the scene
    fn registry_mut(&mut self) -> &mut SceneRegistry;

    /// Called once before [`Scene::create`]
    fn initialize(&mut self, _ctx: &mut Context) -> Result<(), SceneError> {
        Ok(())
    }

    /// Called once before the loop starts; populate the registry here
    fn create(&mut self, _ctx: &mut Context) -> Result<(), SceneError> {
        Ok(())
    }

    /// Called once per unpaused tick, before physics
    ///
    /// A failed lookup here only skips the rest of this hook for the tick.
    fn input(&mut self, _ctx: &mut Context) -> Result<(), SceneError> {
        Ok(())
    }

    /// Called once per unpaused tick, after physics and camera tracking
    ///
    /// # Arguments
    /// * `ctx` - Loop context
    /// * `elapsed` - Milliseconds since the previous iteration started
    fn update(&mut self, _ctx: &mut Context, _elapsed: f64) -> Result<(), SceneError> {
        Ok(())
    }

    /// A key went down
    fn on_key_pressed(&mut self, _ctx: &mut Context, _key: KeyCode) -> Result<(), SceneError> {
        Ok(())
    }

    /// A key went up
    fn on_key_released(&mut self, _ctx: &mut Context, _key: KeyCode) -> Result<(), SceneError> {
        Ok(())
    }

    /// Custom drawing after the frame has been handed to the renderer
    fn render(&mut self, _ctx: &Context, _renderer: &mut dyn Renderer) -> Result<(), RenderError> {
        Ok(())
    }

    /// Called once after the loop stops
    fn dispose(&mut self, _ctx: &mut Context) {}
}
