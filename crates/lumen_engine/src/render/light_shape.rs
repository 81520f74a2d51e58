//! Drawable geometry of lights
//!
//! The renderer receives a [`LightShape`] per light and never looks at the
//! light parameters itself. Point and spot lights carry the flickering
//! `intensity_draw`; directional and area lights use the authored
//! `intensity`.

use crate::entity::{Entity, LightKind, LightParams};
use crate::foundation::math::{utils, Vec2};
use rand::Rng;

/// Offsets of the three radial gradient stops, as fractions of the radius
pub const RADIAL_STOP_OFFSETS: [f64; 3] = [0.0, 0.3, 0.8];

/// Fraction of `intensity_draw` kept at the outer radial stop
pub const RADIAL_FALLOFF: f64 = 0.2;

/// One stop of a radial gradient
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Distance from the center as a fraction of the radius
    pub offset: f64,
    /// Alpha of the light color at this stop
    pub alpha: f64,
}

/// Geometry and alpha of one light for one frame
#[derive(Debug, Clone, PartialEq)]
pub enum LightShape {
    /// Circle of diameter `2 * radius` with a three-stop falloff
    Radial {
        /// Jittered center
        center: Vec2,
        /// Radius in pixels
        radius: f64,
        /// Gradient stops from the center outwards
        stops: [GradientStop; 3],
    },

    /// Axis-aligned flat rectangle
    Rect {
        /// Top-left corner
        origin: Vec2,
        /// Width and height
        size: Vec2,
        /// Flat alpha
        alpha: f64,
    },

    /// Flat triangle, already rotated
    Triangle {
        /// Corners in world space
        points: [Vec2; 3],
        /// Flat alpha
        alpha: f64,
    },
}

impl LightShape {
    /// Compute the shape of a light entity
    ///
    /// Point lights draw a fresh jitter of up to `vibration` pixels per axis
    /// from `rng` on every call.
    pub fn from_light<R: Rng + ?Sized>(entity: &Entity, params: &LightParams, rng: &mut R) -> Self {
        match params.kind {
            LightKind::Point => {
                let jitter = Vec2::new(rng.gen::<f64>(), rng.gen::<f64>()) * params.vibration;
                Self::Radial {
                    center: entity.position + jitter,
                    radius: params.radius,
                    stops: radial_stops(params.intensity_draw),
                }
            }
            LightKind::Directional | LightKind::Area => Self::Rect {
                origin: entity.position,
                size: entity.size,
                alpha: params.fill_alpha(),
            },
            LightKind::Spot => Self::Triangle {
                points: spot_triangle(entity.position, entity.size, params.direction),
                alpha: params.fill_alpha(),
            },
        }
    }
}

/// Radial stops for a point light drawn at `intensity_draw`
pub fn radial_stops(intensity_draw: f64) -> [GradientStop; 3] {
    let [inner, middle, outer] = RADIAL_STOP_OFFSETS;
    [
        GradientStop {
            offset: inner,
            alpha: 1.0,
        },
        GradientStop {
            offset: middle,
            alpha: intensity_draw,
        },
        GradientStop {
            offset: outer,
            alpha: intensity_draw * RADIAL_FALLOFF,
        },
    ]
}

/// Spot cone: apex at the bottom middle, base along the top edge, rotated
/// by `direction` radians about `position`
pub fn spot_triangle(position: Vec2, size: Vec2, direction: f64) -> [Vec2; 3] {
    [
        position,
        position + Vec2::new(size.x / 2.0, size.y),
        position + Vec2::new(size.x, 0.0),
    ]
    .map(|corner| utils::rotate_about(corner, position, direction))
}
