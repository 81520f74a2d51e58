//! Physical materials shared between entities

use std::borrow::Cow;
use std::rc::Rc;

/// Named physical coefficients attached to an entity
///
/// `friction` is applied as a per-tick velocity multiplier and `elasticity`
/// as the restitution factor when an entity hits the world bounds. Materials
/// are immutable; entities hold them through [`SharedMaterial`].
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Display name
    pub name: Cow<'static, str>,
    /// Velocity damping factor, typically in [0, 1]
    pub friction: f64,
    /// Restitution factor, typically in [0, 1]
    pub elasticity: f64,
    /// Density (informational, no solver consumes it)
    pub density: f64,
}

/// Reference-counted material handle
pub type SharedMaterial = Rc<Material>;

impl Material {
    /// Frictionless, perfectly elastic
    pub const DEFAULT: Self = Self::preset("Default", 1.0, 1.0, 1.0);
    /// Wood
    pub const WOOD: Self = Self::preset("Wood", 0.5, 0.3, 0.6);
    /// Steel
    pub const STEEL: Self = Self::preset("Steel", 0.8, 0.1, 7.8);
    /// Plastic
    pub const PLASTIC: Self = Self::preset("Plastic", 0.4, 0.2, 0.9);
    /// Rubber
    pub const RUBBER: Self = Self::preset("Rubber", 0.9, 0.5, 1.2);
    /// Glass
    pub const GLASS: Self = Self::preset("Glass", 0.6, 0.7, 2.5);
    /// Concrete
    pub const CONCRETE: Self = Self::preset("Concrete", 0.7, 0.2, 2.4);
    /// Superball
    pub const SUPERBALL: Self = Self::preset("Superball", 0.95, 0.8, 1.1);

    const fn preset(name: &'static str, friction: f64, elasticity: f64, density: f64) -> Self {
        Self {
            name: Cow::Borrowed(name),
            friction,
            elasticity,
            density,
        }
    }

    /// Create a material with a runtime name
    pub fn new(name: impl Into<Cow<'static, str>>, friction: f64, elasticity: f64, density: f64) -> Self {
        Self {
            name: name.into(),
            friction,
            elasticity,
            density,
        }
    }

    /// Wrap the material for sharing between entities
    pub fn shared(self) -> SharedMaterial {
        Rc::new(self)
    }

    /// All built-in presets
    pub fn presets() -> [Self; 8] {
        [
            Self::DEFAULT,
            Self::WOOD,
            Self::STEEL,
            Self::PLASTIC,
            Self::RUBBER,
            Self::GLASS,
            Self::CONCRETE,
            Self::SUPERBALL,
        ]
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::DEFAULT
    }
}
