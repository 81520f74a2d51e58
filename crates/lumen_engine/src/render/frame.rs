//! Per-frame data handed to the renderer

use super::color::Color;
use super::light_shape::LightShape;
use super::DebugLevel;
use crate::config::RunMode;
use crate::context::Context;
use crate::entity::Entity;
use crate::foundation::math::Vec2;
use crate::foundation::time::format_game_time;
use crate::scene::SceneRegistry;
use rand::Rng;
use std::fmt;

/// One light ready to draw
#[derive(Debug, Clone)]
pub struct LightDraw<'a> {
    /// The light entity
    pub entity: &'a Entity,
    /// Light color, white when the entity has no fill
    pub color: Color,
    /// Geometry and alpha for this frame
    pub shape: LightShape,
}

/// Overlay record for the debug display
#[derive(Debug, Clone, PartialEq)]
pub struct FrameStatus {
    /// Overlay verbosity
    pub debug: DebugLevel,
    /// Whether updates are suspended
    pub paused: bool,
    /// Run mode
    pub mode: RunMode,
    /// Game time as `HH:MM:SS.mmm`
    pub game_time: String,
    /// Vertical world gravity
    pub gravity: f64,
}

impl fmt::Display for FrameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[ debug:{} | time:{} | mode:{} | update:{} | g:{:.2}]",
            self.debug,
            self.game_time,
            self.mode,
            if self.paused { "PAUSED" } else { "RUNNING" },
            self.gravity
        )
    }
}

/// Everything a renderer needs for one frame, borrowed from the scene
#[derive(Debug, Clone)]
pub struct RenderFrame<'a> {
    /// Active entities in draw order
    pub entities: Vec<&'a Entity>,
    /// Active lights in draw order
    pub lights: Vec<LightDraw<'a>>,
    /// Active camera, if any
    pub camera: Option<&'a Entity>,
    /// Translation applied uniformly to every draw
    pub camera_offset: Vec2,
    /// Overlay data
    pub status: FrameStatus,
}

impl<'a> RenderFrame<'a> {
    /// Assemble the frame for the current scene state
    ///
    /// Point light jitter is drawn from `rng`, so it changes on every frame
    /// even while the loop is paused.
    pub fn build<R: Rng + ?Sized>(scene: &'a SceneRegistry, ctx: &Context, rng: &mut R) -> Self {
        let entities = scene.entities().filter(|e| e.active).collect();
        let lights = scene
            .lights()
            .filter(|e| e.active)
            .filter_map(|entity| {
                let params = entity.light()?;
                Some(LightDraw {
                    entity,
                    color: entity.hints.fill.unwrap_or(Color::WHITE),
                    shape: LightShape::from_light(entity, params, rng),
                })
            })
            .collect();
        let camera = scene.active_camera();

        Self {
            entities,
            lights,
            camera,
            camera_offset: camera.map_or_else(Vec2::zeros, |c| -c.position),
            status: FrameStatus {
                debug: ctx.debug,
                paused: ctx.paused,
                mode: ctx.mode,
                game_time: format_game_time(ctx.game_time),
                gravity: scene.gravity().y,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::entity::{EntityBuilder, LightKind};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn context() -> Context {
        Context::new(AppConfig::default())
    }

    #[test]
    fn test_inactive_entities_are_left_out() {
        let mut scene = SceneRegistry::new(320.0, 200.0);
        scene.spawn_entity(EntityBuilder::new().name("shown"));
        scene.spawn_entity(EntityBuilder::new().name("hidden").active(false));
        scene.spawn_light(EntityBuilder::light(LightKind::Area).active(false));
        let mut rng = StdRng::seed_from_u64(1);

        let frame = RenderFrame::build(&scene, &context(), &mut rng);

        let names: Vec<_> = frame.entities.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["shown"]);
        assert!(frame.lights.is_empty());
    }

    #[test]
    fn test_camera_offset_is_negated_position() {
        let mut scene = SceneRegistry::new(320.0, 200.0);
        let camera = scene.spawn(EntityBuilder::camera().position(-68.0, -8.0));
        scene.set_active_camera(camera).expect("camera");
        let mut rng = StdRng::seed_from_u64(1);

        let frame = RenderFrame::build(&scene, &context(), &mut rng);

        assert_eq!(frame.camera_offset, Vec2::new(68.0, 8.0));
        assert!(frame.camera.is_some());
    }

    #[test]
    fn test_no_camera_means_no_offset() {
        let scene = SceneRegistry::new(320.0, 200.0);
        let mut rng = StdRng::seed_from_u64(1);

        let frame = RenderFrame::build(&scene, &context(), &mut rng);

        assert_eq!(frame.camera_offset, Vec2::zeros());
    }

    #[test]
    fn test_light_color_defaults_to_white() {
        let mut scene = SceneRegistry::new(320.0, 200.0);
        scene.spawn_light(EntityBuilder::light(LightKind::Area).fill(None));
        scene.spawn_light(EntityBuilder::light(LightKind::Area).fill(Some(Color::YELLOW)));
        let mut rng = StdRng::seed_from_u64(1);

        let frame = RenderFrame::build(&scene, &context(), &mut rng);

        let colors: Vec<_> = frame.lights.iter().map(|l| l.color).collect();
        assert_eq!(colors, vec![Color::WHITE, Color::YELLOW]);
    }

    #[test]
    fn test_status_line() {
        let mut ctx = context();
        ctx.paused = true;
        ctx.game_time = 61_250.0;
        let scene = SceneRegistry::new(320.0, 200.0);
        let mut rng = StdRng::seed_from_u64(1);

        let frame = RenderFrame::build(&scene, &ctx, &mut rng);

        assert_eq!(
            frame.status.to_string(),
            "[ debug:0 | time:00:01:01.250 | mode:PROD | update:PAUSED | g:9.81]"
        );
    }
}
