//! Demo scene: a steerable player, drifting enemies and four lights

use lumen_engine::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::f64::consts::FRAC_PI_4;

/// Name of the steerable entity
pub const PLAYER: &str = "player";

/// Name of the tracking camera
pub const CAMERA: &str = "cam01";

/// Number of drifting enemies
pub const ENEMY_COUNT: usize = 20;

/// Seed of the enemy layout
pub const DEFAULT_SEED: u64 = 1234;

const STEP: f64 = 0.1;

/// The demo scene
pub struct DemoScene {
    registry: SceneRegistry,
    seed: u64,
}

impl DemoScene {
    /// Scene whose world matches the logical render buffer
    pub fn new(buffer: Size) -> Self {
        Self::with_seed(buffer, DEFAULT_SEED)
    }

    /// Scene with a custom enemy layout seed
    pub fn with_seed(buffer: Size, seed: u64) -> Self {
        Self {
            registry: SceneRegistry::with_world_name("earth", f64::from(buffer.width), f64::from(buffer.height)),
            seed,
        }
    }

    fn spawn_player(&mut self) -> EntityKey {
        self.registry.spawn_entity(
            EntityBuilder::new()
                .name(PLAYER)
                .position(20.0, 20.0)
                .size(16.0, 16.0)
                .edge(Some(Color::RED))
                .fill(Some(Color::RED.darker()))
                .material(Material::new("body", 0.92, 0.98, 1.0)),
        )
    }

    fn spawn_enemies(&mut self) {
        let world = self.registry.world_rect();
        let enemy = Material::new("enemy", 1.0, 1.0, 1.0).shared();
        let mut rng = StdRng::seed_from_u64(self.seed);

        for i in 0..ENEMY_COUNT {
            self.registry.spawn_entity(
                EntityBuilder::new()
                    .name(format!("enemy_{i}"))
                    .position(rng.gen_range(0.0..world.size.x), rng.gen_range(0.0..world.size.y))
                    .size(8.0, 8.0)
                    .edge(Some(Color::ORANGE))
                    .fill(Some(Color::ORANGE.darker()))
                    .shared_material(enemy.clone())
                    .velocity(-0.2 + rng.gen_range(0.0..0.4), -0.2 + rng.gen_range(0.0..0.4)),
            );
        }
    }

    fn spawn_lights(&mut self) {
        let world = self.registry.world_rect();
        let (w, h) = (world.size.x, world.size.y);

        self.registry.spawn_light(
            EntityBuilder::light(LightKind::Point)
                .name("light-sun")
                .intensity(0.3)
                .radius(120.0)
                .position(w / 5.0, (h - 40.0) / 6.0)
                .fill(Some(Color::rgb(0, 255, 230))),
        );
        self.registry.spawn_light(
            EntityBuilder::light(LightKind::Directional)
                .name("light-directional")
                .intensity(0.3)
                .size(80.0, h)
                .position(w * 2.0 / 5.0, 0.0)
                .fill(Some(Color::rgb(255, 255, 230))),
        );
        self.registry.spawn_light(
            EntityBuilder::light(LightKind::Spot)
                .name("light-spot")
                .intensity(0.6)
                .radius(80.0)
                .direction(-FRAC_PI_4)
                .position(w, h)
                .size(50.0, h)
                .fill(Some(Color::rgb(255, 255, 250))),
        );
        self.registry.spawn_light(
            EntityBuilder::light(LightKind::Area)
                .name("light-area")
                .intensity(0.3)
                .position(0.0, 0.0)
                .size(w / 2.0, h)
                .fill(Some(Color::rgb(255, 100, 30))),
        );
    }
}

impl Scene for DemoScene {
    fn registry(&self) -> &SceneRegistry {
        &self.registry
    }

    fn registry_mut(&mut self) -> &mut SceneRegistry {
        &mut self.registry
    }

    fn initialize(&mut self, ctx: &mut Context) -> Result<(), SceneError> {
        log::info!(
            "Demo scene: world {}x{}, debug level {}",
            self.registry.world_rect().size.x,
            self.registry.world_rect().size.y,
            ctx.debug
        );
        Ok(())
    }

    fn create(&mut self, _ctx: &mut Context) -> Result<(), SceneError> {
        let world = self.registry.world_key();
        self.registry.add_entity(world)?;

        let player = self.spawn_player();
        self.spawn_enemies();
        self.spawn_lights();

        let camera = self
            .registry
            .spawn(EntityBuilder::camera().name(CAMERA).target(player).size(320.0, 200.0));
        self.registry.set_active_camera(camera)?;

        log::info!(
            "Created {} entities and {} lights",
            self.registry.entity_keys().len(),
            self.registry.light_keys().len()
        );
        Ok(())
    }

    fn input(&mut self, ctx: &mut Context) -> Result<(), SceneError> {
        let player = match self.registry.entity_mut(PLAYER) {
            Ok(player) => player,
            Err(SceneError::NotFound { .. }) => return Ok(()),
            Err(e) => return Err(e),
        };

        if ctx.is_key_pressed(KeyCode::Up) {
            player.velocity.y = -STEP * 5.0;
        }
        if ctx.is_key_pressed(KeyCode::Down) {
            player.velocity.y = STEP;
        }
        if ctx.is_key_pressed(KeyCode::Left) {
            player.velocity.x = -STEP;
        }
        if ctx.is_key_pressed(KeyCode::Right) {
            player.velocity.x = STEP;
        }
        Ok(())
    }

    fn dispose(&mut self, ctx: &mut Context) {
        log::info!("Demo scene disposed at game time {:.0} ms", ctx.game_time);
    }
}
