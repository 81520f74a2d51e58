//! # Scene Registry
//!
//! Owns every entity of a scene in a generation-checked arena and keeps the
//! ordered collections the loop walks each tick:
//!
//! - the entity collection (draw order, physics order)
//! - the light collection, stepped after the entities
//! - the cameras, one of which may be active
//! - exactly one world, created with the registry
//!
//! Entities are never removed during a run; `active` is the only off switch.

use crate::entity::camera::follow_position;
use crate::entity::{Entity, EntityBuilder, EntityKind};
use crate::foundation::collections::{EntityKey, IdGenerator};
use crate::foundation::math::{Rect, Vec2};
use slotmap::SlotMap;
use thiserror::Error;

/// Name given to the world when none is supplied
pub const DEFAULT_WORLD_NAME: &str = "world";

/// Scene-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// No entity in the entity collection carries this name
    #[error("No entity named '{name}'")]
    NotFound {
        /// Name that was looked up
        name: String,
    },

    /// Key does not belong to this scene
    #[error("Entity handle does not belong to this scene")]
    InvalidHandle,

    /// Entity exists but is not a camera
    #[error("Entity '{name}' is not a camera")]
    NotACamera {
        /// Name of the offending entity
        name: String,
    },
}

/// Entity storage and ordered collections of one scene
pub struct SceneRegistry {
    ids: IdGenerator,
    arena: SlotMap<EntityKey, Entity>,
    entities: Vec<EntityKey>,
    lights: Vec<EntityKey>,
    cameras: Vec<EntityKey>,
    active_camera: Option<EntityKey>,
    world: EntityKey,
}

impl SceneRegistry {
    /// Create a registry whose world spans `width` x `height` from the origin
    pub fn new(width: f64, height: f64) -> Self {
        Self::with_world_name(DEFAULT_WORLD_NAME, width, height)
    }

    /// Create a registry with a named world
    pub fn with_world_name(name: &str, width: f64, height: f64) -> Self {
        let mut ids = IdGenerator::new();
        let mut arena = SlotMap::with_key();
        let world = arena.insert(EntityBuilder::world(name, width, height).build(ids.next_id()));
        log::debug!("Created world '{}' ({}x{})", name, width, height);

        Self {
            ids,
            arena,
            entities: Vec::new(),
            lights: Vec::new(),
            cameras: Vec::new(),
            active_camera: None,
            world,
        }
    }

    /// Create an entity and return its handle without adding it to a collection
    pub fn spawn(&mut self, builder: EntityBuilder) -> EntityKey {
        let entity = builder.build(self.ids.next_id());
        log::trace!("Spawned {} '{}' (id {})", entity.kind.label(), entity.name, entity.id());
        self.arena.insert(entity)
    }

    /// Create an entity and append it to the entity collection
    pub fn spawn_entity(&mut self, builder: EntityBuilder) -> EntityKey {
        let key = self.spawn(builder);
        self.entities.push(key);
        key
    }

    /// Create an entity and append it to the light collection
    pub fn spawn_light(&mut self, builder: EntityBuilder) -> EntityKey {
        let key = self.spawn(builder);
        self.lights.push(key);
        key
    }

    /// Append an existing entity to the entity collection
    ///
    /// No de-duplication: adding twice steps and draws it twice.
    pub fn add_entity(&mut self, key: EntityKey) -> Result<(), SceneError> {
        self.check(key)?;
        self.entities.push(key);
        Ok(())
    }

    /// Append an existing entity to the light collection
    pub fn add_light(&mut self, key: EntityKey) -> Result<(), SceneError> {
        self.check(key)?;
        self.lights.push(key);
        Ok(())
    }

    fn check(&self, key: EntityKey) -> Result<(), SceneError> {
        if self.arena.contains_key(key) {
            Ok(())
        } else {
            Err(SceneError::InvalidHandle)
        }
    }

    /// Entity behind a handle
    pub fn get(&self, key: EntityKey) -> Option<&Entity> {
        self.arena.get(key)
    }

    /// Mutable entity behind a handle
    pub fn get_mut(&mut self, key: EntityKey) -> Option<&mut Entity> {
        self.arena.get_mut(key)
    }

    /// Handle of the first entity in the entity collection with this name
    pub fn entity_key(&self, name: &str) -> Result<EntityKey, SceneError> {
        self.entities
            .iter()
            .copied()
            .find(|key| self.arena.get(*key).is_some_and(|e| e.name == name))
            .ok_or_else(|| SceneError::NotFound {
                name: name.to_string(),
            })
    }

    /// First entity in the entity collection with this name
    pub fn entity(&self, name: &str) -> Result<&Entity, SceneError> {
        let key = self.entity_key(name)?;
        self.arena.get(key).ok_or(SceneError::InvalidHandle)
    }

    /// Mutable first entity in the entity collection with this name
    pub fn entity_mut(&mut self, name: &str) -> Result<&mut Entity, SceneError> {
        let key = self.entity_key(name)?;
        self.arena.get_mut(key).ok_or(SceneError::InvalidHandle)
    }

    /// Entity collection handles in insertion order
    pub fn entity_keys(&self) -> &[EntityKey] {
        &self.entities
    }

    /// Light collection handles in insertion order
    pub fn light_keys(&self) -> &[EntityKey] {
        &self.lights
    }

    /// Entity collection in insertion order
    pub fn entities(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.entities.iter().filter_map(|key| self.arena.get(*key))
    }

    /// Light collection in insertion order
    pub fn lights(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.lights.iter().filter_map(|key| self.arena.get(*key))
    }

    /// Handles stepped by physics each tick: entities first, then lights
    pub fn tick_order(&self) -> Vec<EntityKey> {
        self.entities.iter().chain(self.lights.iter()).copied().collect()
    }

    /// Handle of the world
    pub fn world_key(&self) -> EntityKey {
        self.world
    }

    /// The world entity
    pub fn world(&self) -> &Entity {
        &self.arena[self.world]
    }

    /// World bounds
    pub fn world_rect(&self) -> Rect {
        self.world().rect()
    }

    /// Current world gravity
    pub fn gravity(&self) -> Vec2 {
        self.world().gravity().unwrap_or_default()
    }

    /// Change world gravity at runtime
    pub fn set_gravity(&mut self, gravity: Vec2) {
        if let EntityKind::World(params) = &mut self.arena[self.world].kind {
            params.gravity = gravity;
        }
    }

    /// Make `camera` the active camera, tracking it first if needed
    pub fn set_active_camera(&mut self, camera: EntityKey) -> Result<(), SceneError> {
        let entity = self.arena.get(camera).ok_or(SceneError::InvalidHandle)?;
        if entity.camera().is_none() {
            return Err(SceneError::NotACamera {
                name: entity.name.clone(),
            });
        }

        if !self.cameras.contains(&camera) {
            self.cameras.push(camera);
        }
        self.active_camera = Some(camera);
        log::debug!("Active camera is now '{}'", entity.name);
        Ok(())
    }

    /// Handle of the active camera
    pub fn active_camera_key(&self) -> Option<EntityKey> {
        self.active_camera
    }

    /// The active camera
    pub fn active_camera(&self) -> Option<&Entity> {
        self.active_camera.and_then(|key| self.arena.get(key))
    }

    /// All tracked cameras
    pub fn cameras(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.cameras.iter().filter_map(|key| self.arena.get(*key))
    }

    /// Re-center the active camera on its target
    ///
    /// Does nothing without an active camera, without a target, or when the
    /// target handle no longer resolves.
    pub fn update_active_camera(&mut self) {
        let Some(camera_key) = self.active_camera else {
            return;
        };
        let Some(target_key) = self.arena.get(camera_key).and_then(|c| c.camera()).and_then(|c| c.target) else {
            return;
        };
        let Some((target_position, target_size)) = self.arena.get(target_key).map(|t| (t.position, t.size)) else {
            return;
        };

        if let Some(camera) = self.arena.get_mut(camera_key) {
            camera.position = follow_position(target_position, target_size, camera.size);
        }
    }

    /// Total number of entities in the arena, world included
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Whether the arena is empty; never true since the world always exists
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }
}
