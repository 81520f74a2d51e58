//! Light parameters carried by light entities
//!
//! Lights are plain data plus one piece of per-frame logic, the flicker that
//! derives `intensity_draw` from the authored `intensity`. Turning the
//! parameters into drawable geometry lives in [`crate::render::light_shape`].

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Shape family of a light
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum LightKind {
    /// Radial falloff around the light position
    Point,
    /// Flat rectangle at a static intensity
    Directional,
    /// Rotated triangle cone
    Spot,
    /// Flat rectangle at a static intensity
    Area,
}

impl LightKind {
    /// Whether the renderer should use the flickering `intensity_draw`
    /// rather than the authored `intensity`
    pub fn flickers(self) -> bool {
        matches!(self, Self::Point | Self::Spot)
    }
}

/// Per-light data stored in [`crate::entity::EntityKind::Light`]
#[derive(Debug, Clone, PartialEq)]
pub struct LightParams {
    /// Shape family
    pub kind: LightKind,
    /// Authored target brightness in [0, 1]
    pub intensity: f64,
    /// Brightness actually drawn this frame, recomputed every active tick
    pub intensity_draw: f64,
    /// Radius in pixels (POINT and SPOT)
    pub radius: f64,
    /// Center jitter amplitude in pixels (POINT)
    pub vibration: f64,
    /// Rotation in radians (SPOT)
    pub direction: f64,
}

/// Weight of the authored intensity in the flicker mix
pub const FLICKER_BASE: f64 = 0.9;

/// Amplitude of the flicker noise
pub const FLICKER_NOISE: f64 = 0.1;

impl LightParams {
    /// Create parameters for a light of the given kind
    pub fn new(kind: LightKind) -> Self {
        Self {
            kind,
            intensity: 0.0,
            intensity_draw: 0.0,
            radius: 0.0,
            vibration: 0.0,
            direction: 0.0,
        }
    }

    /// Recompute `intensity_draw` as `intensity * 0.9 + U[0,1) * 0.1`
    pub fn flicker<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let noise: f64 = rng.gen();
        self.intensity_draw = self.intensity * FLICKER_BASE + noise * FLICKER_NOISE;
    }

    /// Alpha the renderer should use for flat fills of this light
    pub fn fill_alpha(&self) -> f64 {
        if self.kind.flickers() {
            self.intensity_draw
        } else {
            self.intensity
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_flicker_stays_in_band() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut light = LightParams::new(LightKind::Point);
        light.intensity = 0.6;

        for _ in 0..1000 {
            light.flicker(&mut rng);
            assert!(light.intensity_draw >= 0.9 * 0.6);
            assert!(light.intensity_draw < 0.9 * 0.6 + 0.1);
        }
    }

    #[test]
    fn test_flicker_with_zero_intensity_is_pure_noise() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut light = LightParams::new(LightKind::Spot);

        light.flicker(&mut rng);

        assert!((0.0..0.1).contains(&light.intensity_draw));
    }

    #[test]
    fn test_fill_alpha_by_kind() {
        let mut light = LightParams::new(LightKind::Directional);
        light.intensity = 0.3;
        light.intensity_draw = 0.5;
        assert_eq!(light.fill_alpha(), 0.3);

        light.kind = LightKind::Area;
        assert_eq!(light.fill_alpha(), 0.3);

        light.kind = LightKind::Spot;
        assert_eq!(light.fill_alpha(), 0.5);

        light.kind = LightKind::Point;
        assert_eq!(light.fill_alpha(), 0.5);
    }
}
