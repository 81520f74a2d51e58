//! # Render Contract
//!
//! The core never draws pixels. Once per loop iteration, paused or not, it
//! assembles a [`RenderFrame`] from the scene and hands it to a [`Renderer`]
//! supplied by the application. Window management, buffer scaling and the
//! actual drawing primitives all live behind that trait.
//!
//! ## Frame contents
//!
//! - active entities of the entity collection, in insertion order
//! - one [`LightDraw`] per active light, in insertion order
//! - the active camera and the translation every draw should apply
//! - a [`FrameStatus`] for the debug overlay

pub mod color;
pub mod frame;
pub mod light_shape;

pub use color::Color;
pub use frame::{FrameStatus, LightDraw, RenderFrame};
pub use light_shape::{GradientStop, LightShape};

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Rendering errors
#[derive(Error, Debug)]
pub enum RenderError {
    /// Drawing the frame failed
    #[error("Draw failed: {0}")]
    DrawFailed(String),

    /// Output surface is gone (window closed, device lost)
    #[error("Render target lost: {0}")]
    TargetLost(String),
}

/// Consumer of finished frames
pub trait Renderer {
    /// Draw one frame
    fn draw(&mut self, frame: &RenderFrame<'_>) -> Result<(), RenderError>;

    /// Release renderer resources; called once after the loop stops
    fn dispose(&mut self) {}
}

/// Verbosity of the diagnostic overlay, 0 (off) to 4
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub struct DebugLevel(u8);

impl DebugLevel {
    /// Highest level
    pub const MAX: u8 = 4;

    /// Overlay disabled
    pub const OFF: Self = Self(0);

    /// Create a level, clamping values above [`Self::MAX`]
    pub fn new(level: u8) -> Self {
        Self(level.min(Self::MAX))
    }

    /// Numeric level
    pub fn level(self) -> u8 {
        self.0
    }

    /// Whether any overlay should be drawn
    pub fn is_enabled(self) -> bool {
        self.0 > 0
    }

    /// Next level, wrapping from 4 back to 0
    #[must_use]
    pub fn cycle(self) -> Self {
        Self((self.0 + 1) % (Self::MAX + 1))
    }
}

impl From<u8> for DebugLevel {
    fn from(level: u8) -> Self {
        Self::new(level)
    }
}

impl From<DebugLevel> for u8 {
    fn from(level: DebugLevel) -> Self {
        level.0
    }
}

impl fmt::Display for DebugLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
