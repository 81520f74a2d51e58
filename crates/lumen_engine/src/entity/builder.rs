//! Chained construction of entities
//!
//! Builders carry everything but the id; the owning scene assigns the id when
//! the builder is spawned.

use super::{
    CameraParams, Entity, EntityKind, LightKind, LightParams, Material, PhysicsKind, RenderHints,
    SharedMaterial, WorldParams,
};
use crate::foundation::collections::{EntityId, EntityKey};
use crate::foundation::math::Vec2;
use crate::render::color::Color;

/// Default edge length of a new entity
pub const DEFAULT_ENTITY_SIZE: f64 = 16.0;

/// Edge length of a cursor marker
pub const CURSOR_SIZE: f64 = 8.0;

/// Builder for [`Entity`] values
#[derive(Debug, Clone)]
pub struct EntityBuilder {
    name: Option<String>,
    position: Vec2,
    velocity: Vec2,
    size: Vec2,
    physics: PhysicsKind,
    material: SharedMaterial,
    active: bool,
    hints: RenderHints,
    kind: EntityKind,
}

impl Default for EntityBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityBuilder {
    /// Plain dynamic 16x16 body, white edge, blue fill
    pub fn new() -> Self {
        Self {
            name: None,
            position: Vec2::zeros(),
            velocity: Vec2::zeros(),
            size: Vec2::new(DEFAULT_ENTITY_SIZE, DEFAULT_ENTITY_SIZE),
            physics: PhysicsKind::Dynamic,
            material: Material::DEFAULT.shared(),
            active: true,
            hints: RenderHints {
                fill: Some(Color::BLUE),
                edge: Some(Color::WHITE),
            },
            kind: EntityKind::Basic,
        }
    }

    /// Static light of the given kind
    pub fn light(kind: LightKind) -> Self {
        Self {
            physics: PhysicsKind::Static,
            kind: EntityKind::Light(LightParams::new(kind)),
            ..Self::new()
        }
    }

    /// Static camera without colors and without a target
    pub fn camera() -> Self {
        Self {
            physics: PhysicsKind::Static,
            hints: RenderHints::default(),
            kind: EntityKind::Camera(CameraParams::default()),
            ..Self::new()
        }
    }

    /// Static 8x8 pointer marker without colors
    pub fn cursor() -> Self {
        Self {
            size: Vec2::new(CURSOR_SIZE, CURSOR_SIZE),
            physics: PhysicsKind::Static,
            hints: RenderHints::default(),
            kind: EntityKind::Cursor,
            ..Self::new()
        }
    }

    /// Static world bounds anchored at the origin
    pub(crate) fn world(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            name: Some(name.into()),
            size: Vec2::new(width, height),
            physics: PhysicsKind::Static,
            hints: RenderHints {
                fill: None,
                edge: Some(Color::DARK_GRAY),
            },
            kind: EntityKind::World(WorldParams::default()),
            ..Self::new()
        }
    }

    /// Set the lookup name; defaults to `entity_<id>`
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the top-left position
    #[must_use]
    pub fn position(mut self, x: f64, y: f64) -> Self {
        self.position = Vec2::new(x, y);
        self
    }

    /// Set the velocity
    #[must_use]
    pub fn velocity(mut self, dx: f64, dy: f64) -> Self {
        self.velocity = Vec2::new(dx, dy);
        self
    }

    /// Set width and height; negative values are clamped to zero
    #[must_use]
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.size = Vec2::new(width.max(0.0), height.max(0.0));
        self
    }

    /// Set the physics kind
    #[must_use]
    pub fn physics(mut self, physics: PhysicsKind) -> Self {
        self.physics = physics;
        self
    }

    /// Use a fresh material
    #[must_use]
    pub fn material(mut self, material: Material) -> Self {
        self.material = material.shared();
        self
    }

    /// Share an existing material
    #[must_use]
    pub fn shared_material(mut self, material: SharedMaterial) -> Self {
        self.material = material;
        self
    }

    /// Set the activity flag
    #[must_use]
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Set or clear the fill color
    #[must_use]
    pub fn fill(mut self, color: Option<Color>) -> Self {
        self.hints.fill = color;
        self
    }

    /// Set or clear the edge color
    #[must_use]
    pub fn edge(mut self, color: Option<Color>) -> Self {
        self.hints.edge = color;
        self
    }

    /// Authored light intensity; ignored for non-lights
    #[must_use]
    pub fn intensity(mut self, intensity: f64) -> Self {
        if let EntityKind::Light(params) = &mut self.kind {
            params.intensity = intensity;
            params.intensity_draw = intensity;
        }
        self
    }

    /// Light radius; ignored for non-lights
    #[must_use]
    pub fn radius(mut self, radius: f64) -> Self {
        if let EntityKind::Light(params) = &mut self.kind {
            params.radius = radius;
        }
        self
    }

    /// Light jitter amplitude; ignored for non-lights
    #[must_use]
    pub fn vibration(mut self, vibration: f64) -> Self {
        if let EntityKind::Light(params) = &mut self.kind {
            params.vibration = vibration;
        }
        self
    }

    /// Light direction in radians; ignored for non-lights
    #[must_use]
    pub fn direction(mut self, radians: f64) -> Self {
        if let EntityKind::Light(params) = &mut self.kind {
            params.direction = radians;
        }
        self
    }

    /// Camera target; ignored for non-cameras
    #[must_use]
    pub fn target(mut self, target: EntityKey) -> Self {
        if let EntityKind::Camera(params) = &mut self.kind {
            params.target = Some(target);
        }
        self
    }

    /// Finish the entity with the id allocated by the scene
    pub(crate) fn build(self, id: EntityId) -> Entity {
        Entity {
            id,
            name: self.name.unwrap_or_else(|| format!("entity_{id}")),
            position: self.position,
            velocity: self.velocity,
            size: self.size,
            physics: self.physics,
            material: self.material,
            active: self.active,
            hints: self.hints,
            kind: self.kind,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    #[test]
    fn test_defaults() {
        let entity = EntityBuilder::new().build(EntityId(4));

        assert_eq!(entity.name, "entity_4");
        assert_eq!(entity.size, Vec2::new(16.0, 16.0));
        assert_eq!(entity.physics, PhysicsKind::Dynamic);
        assert_eq!(*entity.material, Material::DEFAULT);
        assert!(entity.active);
        assert_eq!(entity.hints.fill, Some(Color::BLUE));
        assert_eq!(entity.hints.edge, Some(Color::WHITE));
    }

    #[test]
    fn test_light_builder() {
        let light = EntityBuilder::light(LightKind::Point)
            .name("sun")
            .intensity(0.3)
            .radius(120.0)
            .vibration(2.0)
            .build(EntityId(0));

        assert_eq!(light.physics, PhysicsKind::Static);
        let params = light.light().expect("light payload");
        assert_eq!(params.intensity, 0.3);
        assert_eq!(params.radius, 120.0);
        assert_eq!(params.vibration, 2.0);
    }

    #[test]
    fn test_light_setters_ignored_on_plain_entities() {
        let entity = EntityBuilder::new().intensity(0.9).radius(3.0).build(EntityId(0));

        assert_eq!(entity.kind, EntityKind::Basic);
    }

    #[test]
    fn test_camera_target() {
        let mut keys: SlotMap<EntityKey, ()> = SlotMap::with_key();
        let player = keys.insert(());

        let camera = EntityBuilder::camera().target(player).size(320.0, 200.0).build(EntityId(1));

        assert_eq!(camera.camera().and_then(|c| c.target), Some(player));
        assert_eq!(camera.hints, RenderHints::default());
    }

    #[test]
    fn test_negative_size_is_clamped() {
        let entity = EntityBuilder::new().size(-3.0, 5.0).build(EntityId(0));

        assert_eq!(entity.size, Vec2::new(0.0, 5.0));
    }

    #[test]
    fn test_world_builder() {
        let world = EntityBuilder::world("earth", 320.0, 200.0).build(EntityId(0));

        assert_eq!(world.physics, PhysicsKind::Static);
        assert_eq!(world.position, Vec2::zeros());
        assert_eq!(world.gravity(), Some(Vec2::new(0.0, 9.81)));
        assert_eq!(world.hints.fill, None);
    }
}
