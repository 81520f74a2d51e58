//! Loop context handed to every scene hook

use crate::config::{AppConfig, RunMode};
use crate::input::{InputState, KeyCode, MouseButton};
use crate::render::DebugLevel;

/// Loop state shared with the scene
///
/// Owned by the [`crate::Engine`] and passed down explicitly; the scene reads
/// input and flags from here and may request pause or exit.
#[derive(Debug, Clone)]
pub struct Context {
    /// Current key, button and pointer state
    pub input: InputState,
    /// Debug overlay level
    pub debug: DebugLevel,
    /// Run mode
    pub mode: RunMode,
    /// Suspends input, physics and update hooks; rendering continues
    pub paused: bool,
    /// Accumulated game time in milliseconds, frozen while paused
    pub game_time: f64,
    /// Configuration the loop was started with
    pub config: AppConfig,
    exit: bool,
}

impl Context {
    /// Fresh context for the given configuration
    pub fn new(config: AppConfig) -> Self {
        Self {
            input: InputState::new(),
            debug: config.debug,
            mode: config.mode,
            paused: false,
            game_time: 0.0,
            config,
            exit: false,
        }
    }

    /// Ask the loop to stop after the current iteration
    pub fn request_exit(&mut self) {
        if !self.exit {
            log::info!("Exit requested");
        }
        self.exit = true;
    }

    /// Whether an exit was requested
    pub fn exit_requested(&self) -> bool {
        self.exit
    }

    /// Flip the pause flag
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        log::info!("Loop {}", if self.paused { "paused" } else { "resumed" });
    }

    /// Advance the debug overlay level, wrapping after 4
    pub fn cycle_debug(&mut self) {
        self.debug = self.debug.cycle();
        log::info!("Debug level set to {}", self.debug);
    }

    /// Whether a key is currently held
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.input.is_key_pressed(key)
    }

    /// Whether a mouse button is currently held
    pub fn is_button_pressed(&self, button: MouseButton) -> bool {
        self.input.is_button_pressed(button)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_context_copies_config() {
        let mut config = AppConfig::default();
        config.apply_args(["d=3", "m=TEST"]);

        let ctx = Context::new(config);

        assert_eq!(ctx.debug.level(), 3);
        assert_eq!(ctx.mode, RunMode::Test);
        assert!(!ctx.paused);
        assert!(!ctx.exit_requested());
        assert_eq!(ctx.game_time, 0.0);
    }

    #[test]
    fn test_flags() {
        let mut ctx = Context::new(AppConfig::default());

        ctx.toggle_pause();
        ctx.cycle_debug();
        ctx.request_exit();

        assert!(ctx.paused);
        assert_eq!(ctx.debug.level(), 1);
        assert!(ctx.exit_requested());

        ctx.toggle_pause();
        assert!(!ctx.paused);
    }
}
