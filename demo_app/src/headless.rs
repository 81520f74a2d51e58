//! Headless renderer and scripted input for running the demo without a window

use lumen_engine::prelude::*;
use std::collections::BTreeMap;

/// Renderer that writes a frame summary to the log
#[derive(Debug, Default)]
pub struct LogRenderer {
    frames: u64,
}

impl LogRenderer {
    /// New renderer with no frames drawn
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames drawn so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for LogRenderer {
    fn draw(&mut self, frame: &RenderFrame<'_>) -> Result<(), RenderError> {
        self.frames += 1;
        log::debug!(
            "frame {}: {} entities, {} lights, offset ({:.1}, {:.1})",
            self.frames,
            frame.entities.len(),
            frame.lights.len(),
            frame.camera_offset.x,
            frame.camera_offset.y
        );

        let level = frame.status.debug.level();
        if level >= 1 {
            log::info!("{}", frame.status);
        }
        if level >= 2 {
            for entity in &frame.entities {
                let on_screen = entity.position + frame.camera_offset;
                log::info!(" |_ {} '{}' at ({:.1}, {:.1})", entity.kind.label(), entity.name, on_screen.x, on_screen.y);
            }
        }
        if level >= 3 {
            for light in &frame.lights {
                log::info!(" |_ light '{}' {:?}", light.entity.name, light.shape);
            }
        }
        Ok(())
    }

    fn dispose(&mut self) {
        log::info!("Renderer disposed after {} frames", self.frames);
    }
}

/// Input source replaying events at fixed frame numbers
///
/// Frames are counted from 1, one per call to [`InputSource::poll`].
#[derive(Debug, Default)]
pub struct ScriptedInput {
    frame: u64,
    script: BTreeMap<u64, Vec<InputEvent>>,
}

impl ScriptedInput {
    /// Empty script
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an event at `frame`
    #[must_use]
    pub fn at(mut self, frame: u64, event: InputEvent) -> Self {
        self.script.entry(frame).or_default().push(event);
        self
    }

    /// Hold `key` from `from` until `to`
    #[must_use]
    pub fn hold(self, key: KeyCode, from: u64, to: u64) -> Self {
        self.at(from, InputEvent::key_down(key)).at(to, InputEvent::key_up(key))
    }

    /// Press and release Escape at `frame`
    #[must_use]
    pub fn exit_at(self, frame: u64) -> Self {
        self.hold(KeyCode::Escape, frame, frame)
    }

    /// The scripted run of the demo binary
    pub fn demo() -> Self {
        Self::new()
            .hold(KeyCode::Right, 1, 40)
            .hold(KeyCode::Down, 20, 60)
            .at(45, InputEvent::PointerMoved { x: 160.0, y: 100.0 })
            .hold(KeyCode::P, 70, 70)
            .hold(KeyCode::P, 80, 80)
            .hold(KeyCode::Left, 90, 110)
            .exit_at(120)
    }

    /// Last frame with scripted events
    pub fn last_frame(&self) -> Option<u64> {
        self.script.keys().next_back().copied()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> Vec<InputEvent> {
        self.frame += 1;
        self.script.remove(&self.frame).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo_scene::{DemoScene, PLAYER};

    fn config(mode: RunMode) -> AppConfig {
        AppConfig {
            mode,
            target_fps: None,
            ..AppConfig::default()
        }
    }

    #[test]
    fn test_script_replays_in_order() {
        let mut input = ScriptedInput::new().hold(KeyCode::Up, 2, 3).exit_at(3);

        assert!(input.poll().is_empty());
        assert_eq!(input.poll(), vec![InputEvent::key_down(KeyCode::Up)]);
        assert_eq!(
            input.poll(),
            vec![
                InputEvent::key_up(KeyCode::Up),
                InputEvent::key_down(KeyCode::Escape),
                InputEvent::key_up(KeyCode::Escape),
            ]
        );
        assert!(input.poll().is_empty());
    }

    #[test]
    fn test_demo_script_ends_with_escape() {
        let input = ScriptedInput::demo();

        assert_eq!(input.last_frame(), Some(120));
    }

    #[test]
    fn test_demo_runs_until_scripted_exit() {
        let mut scene = DemoScene::new(Size::new(320, 200));
        let mut renderer = LogRenderer::new();
        let mut input = ScriptedInput::demo();
        let mut engine = Engine::with_seed(config(RunMode::Prod), 3);

        engine.run(&mut scene, &mut renderer, &mut input).expect("run");

        assert_eq!(renderer.frames(), 120);
        assert!(!engine.context().paused);
        let world = scene.registry().world_rect();
        for entity in scene.registry().entities() {
            assert!(world.contains_rect(&entity.rect()), "{} left the world", entity.name);
        }
    }

    #[test]
    fn test_test_mode_draws_one_frame() {
        let mut scene = DemoScene::new(Size::new(320, 200));
        let mut renderer = LogRenderer::new();
        let mut engine = Engine::with_seed(config(RunMode::Test), 3);

        engine.run(&mut scene, &mut renderer, &mut ScriptedInput::new()).expect("run");

        assert_eq!(renderer.frames(), 1);
        assert!(scene.registry().entity(PLAYER).is_ok());
    }
}
