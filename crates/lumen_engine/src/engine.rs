//! Core engine implementation
//!
//! One iteration of the loop:
//!
//! 1. drain input events, apply global actions, forward keys to the scene
//! 2. unless paused: scene `input` hook, physics, camera tracking, scene
//!    `update` hook
//! 3. render, paused or not
//! 4. sleep `max(1 ms, period - cost)` when pacing is enabled
//!
//! Exit is polled after each iteration, so the iteration that requested it
//! still renders.

use crate::{
    config::{AppConfig, ConfigError},
    context::Context,
    foundation::time::{pacing_sleep, FrameTimer},
    input::{InputEvent, InputSource, KeyCode, Modifiers},
    physics::PhysicsSystem,
    render::{RenderError, RenderFrame, Renderer},
    scene::{Scene, SceneError},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use thiserror::Error;

/// Main engine struct
///
/// Owns the loop context, the physics system and the frame clock. The scene,
/// renderer and input source are borrowed for the duration of a run.
pub struct Engine {
    ctx: Context,
    physics: PhysicsSystem,
    timer: FrameTimer,
    rng: StdRng,
    period: Option<Duration>,
}

impl Engine {
    /// Create an engine for the given configuration
    pub fn new(config: AppConfig) -> Self {
        log::info!("Initializing engine...");
        Self {
            period: config.frame_period(),
            ctx: Context::new(config),
            physics: PhysicsSystem::new(),
            timer: FrameTimer::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Create an engine whose random draws are reproducible
    pub fn with_seed(config: AppConfig, seed: u64) -> Self {
        Self {
            physics: PhysicsSystem::with_seed(seed),
            rng: StdRng::seed_from_u64(seed.wrapping_add(1)),
            ..Self::new(config)
        }
    }

    /// Run the scene until exit (PROD) or for a single iteration (DEV, TEST)
    ///
    /// `initialize` and `create` run once before the first iteration;
    /// `dispose` runs on the scene and the renderer once the loop stops,
    /// whether or not it stopped on an error.
    pub fn run<S, R, I>(&mut self, scene: &mut S, renderer: &mut R, input: &mut I) -> Result<(), EngineError>
    where
        S: Scene + ?Sized,
        R: Renderer,
        I: InputSource + ?Sized,
    {
        scene.initialize(&mut self.ctx)?;
        scene.create(&mut self.ctx)?;

        log::info!("Starting main loop ({} mode)...", self.ctx.mode);

        let result = loop {
            if let Err(e) = self.tick(scene, renderer, input) {
                break Err(e);
            }
            if self.ctx.exit_requested() || !self.ctx.mode.loops_until_exit() {
                break Ok(());
            }
        };

        scene.dispose(&mut self.ctx);
        renderer.dispose();

        log::info!(
            "Main loop stopped after {} frames, game time {:.0} ms",
            self.timer.frame_count(),
            self.ctx.game_time
        );
        result
    }

    /// Run exactly one loop iteration
    pub fn tick<S, R, I>(&mut self, scene: &mut S, renderer: &mut R, input: &mut I) -> Result<(), EngineError>
    where
        S: Scene + ?Sized,
        R: Renderer,
        I: InputSource + ?Sized,
    {
        let frame_start = self.timer.begin_frame();
        let elapsed = self.timer.elapsed_ms();

        self.dispatch_input(scene, input);

        if !self.ctx.paused {
            self.ctx.game_time += elapsed;
            report("input", scene.input(&mut self.ctx));
            self.physics.update(scene.registry_mut(), &self.ctx.input, elapsed);
            scene.registry_mut().update_active_camera();
            report("update", scene.update(&mut self.ctx, elapsed));
        }

        let frame = RenderFrame::build(scene.registry(), &self.ctx, &mut self.rng);
        renderer.draw(&frame)?;
        scene.render(&self.ctx, renderer)?;

        if let Some(period) = self.period {
            std::thread::sleep(pacing_sleep(period, frame_start.elapsed()));
        }
        log::trace!("Frame {} done in {:?}", self.timer.frame_count(), frame_start.elapsed());
        Ok(())
    }

    fn dispatch_input<S, I>(&mut self, scene: &mut S, input: &mut I)
    where
        S: Scene + ?Sized,
        I: InputSource + ?Sized,
    {
        for event in input.poll() {
            self.ctx.input.apply(&event);
            match event {
                InputEvent::KeyPressed { key, .. } => {
                    report("on_key_pressed", scene.on_key_pressed(&mut self.ctx, key));
                }
                InputEvent::KeyReleased { key, modifiers } => {
                    self.global_action(key, modifiers);
                    report("on_key_released", scene.on_key_released(&mut self.ctx, key));
                }
                InputEvent::CloseRequested => self.ctx.request_exit(),
                InputEvent::ButtonPressed(_) | InputEvent::ButtonReleased(_) | InputEvent::PointerMoved { .. } => {}
            }
        }
    }

    fn global_action(&mut self, key: KeyCode, modifiers: Modifiers) {
        match key {
            KeyCode::Escape => self.ctx.request_exit(),
            KeyCode::D if modifiers.contains(Modifiers::CTRL) => self.ctx.cycle_debug(),
            KeyCode::P | KeyCode::Pause => self.ctx.toggle_pause(),
            _ => {}
        }
    }

    /// Loop context
    pub fn context(&self) -> &Context {
        &self.ctx
    }

    /// Mutable loop context
    pub fn context_mut(&mut self) -> &mut Context {
        &mut self.ctx
    }

    /// Number of iterations run so far
    pub fn frame_count(&self) -> u64 {
        self.timer.frame_count()
    }

    /// Request engine shutdown
    pub fn quit(&mut self) {
        self.ctx.request_exit();
    }
}

fn report(hook: &str, result: Result<(), SceneError>) {
    if let Err(e) = result {
        log::warn!("Scene {} hook failed: {}", hook, e);
    }
}

/// Engine errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Renderer failed; the loop cannot continue
    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    /// Scene setup failed
    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    /// Configuration could not be used
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}
