//! Entity model
//!
//! Every simulated object is one [`Entity`] value. Kind-specific data (world
//! gravity, light parameters, camera target) lives in the [`EntityKind`]
//! payload instead of a type hierarchy, and per-kind per-frame behavior is
//! dispatched on that tag in [`behavior`].

pub mod behavior;
pub mod builder;
pub mod camera;
pub mod light;
pub mod material;

pub use builder::EntityBuilder;
pub use camera::CameraParams;
pub use light::{LightKind, LightParams};
pub use material::{Material, SharedMaterial};

use crate::foundation::collections::EntityId;
use crate::foundation::math::{Rect, Vec2};
use crate::render::color::Color;
use serde::{Deserialize, Serialize};

/// Whether the physics system integrates an entity's motion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PhysicsKind {
    /// Never integrated, velocity never touched by physics
    Static,
    /// Gravity, integration and friction applied every tick
    Dynamic,
}

/// Default vertical gravity of a freshly created world
pub const DEFAULT_GRAVITY_Y: f64 = 9.81;

/// World payload
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorldParams {
    /// Gravity vector; only the Y component feeds integration
    pub gravity: Vec2,
}

impl Default for WorldParams {
    fn default() -> Self {
        Self {
            gravity: Vec2::new(0.0, DEFAULT_GRAVITY_Y),
        }
    }
}

/// Kind tag plus kind-specific payload
#[derive(Debug, Clone, PartialEq)]
pub enum EntityKind {
    /// Plain body
    Basic,
    /// Simulation bounds
    World(WorldParams),
    /// Light source
    Light(LightParams),
    /// Viewport tracking a target
    Camera(CameraParams),
    /// Marker following the pointer
    Cursor,
}

impl EntityKind {
    /// Short label for logs and debug overlays
    pub fn label(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::World(_) => "world",
            Self::Light(_) => "light",
            Self::Camera(_) => "camera",
            Self::Cursor => "cursor",
        }
    }
}

/// Colors handed to the renderer untouched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderHints {
    /// Fill color, `None` draws no fill
    pub fill: Option<Color>,
    /// Outline color, `None` draws no outline
    pub edge: Option<Color>,
}

/// A simulated object
#[derive(Debug, Clone)]
pub struct Entity {
    id: EntityId,
    /// Lookup name, not required to be unique
    pub name: String,
    /// Top-left corner
    pub position: Vec2,
    /// Velocity in pixels per millisecond
    pub velocity: Vec2,
    /// Width and height
    pub size: Vec2,
    /// Whether motion is integrated
    pub physics: PhysicsKind,
    /// Shared physical coefficients
    pub material: SharedMaterial,
    /// Inactive entities are skipped by physics and rendering
    pub active: bool,
    /// Colors for the renderer
    pub hints: RenderHints,
    /// Kind tag and payload
    pub kind: EntityKind,
}

impl Entity {
    /// Unique id assigned by the owning scene
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Bounding rectangle
    pub fn rect(&self) -> Rect {
        Rect::new(self.position, self.size)
    }

    /// Whether motion is integrated
    pub fn is_dynamic(&self) -> bool {
        self.physics == PhysicsKind::Dynamic
    }

    /// Light payload, if this is a light
    pub fn light(&self) -> Option<&LightParams> {
        match &self.kind {
            EntityKind::Light(params) => Some(params),
            _ => None,
        }
    }

    /// Mutable light payload, if this is a light
    pub fn light_mut(&mut self) -> Option<&mut LightParams> {
        match &mut self.kind {
            EntityKind::Light(params) => Some(params),
            _ => None,
        }
    }

    /// Camera payload, if this is a camera
    pub fn camera(&self) -> Option<&CameraParams> {
        match &self.kind {
            EntityKind::Camera(params) => Some(params),
            _ => None,
        }
    }

    /// Mutable camera payload, if this is a camera
    pub fn camera_mut(&mut self) -> Option<&mut CameraParams> {
        match &mut self.kind {
            EntityKind::Camera(params) => Some(params),
            _ => None,
        }
    }

    /// World gravity, if this is the world
    pub fn gravity(&self) -> Option<Vec2> {
        match &self.kind {
            EntityKind::World(params) => Some(params.gravity),
            _ => None,
        }
    }
}
