//! Explicit integration of dynamic entities

use crate::entity::Entity;
use crate::foundation::math::Vec2;

/// Scale applied to world gravity before it nudges the vertical velocity
pub const GRAVITY_SCALE: f64 = 0.01;

/// Advance one dynamic entity by `elapsed` milliseconds
///
/// Gravity is an instantaneous velocity nudge, not an acceleration over time.
/// Friction damps the velocity once per call whatever `elapsed` is, so the
/// damping is frame-rate dependent while the displacement is not.
pub fn integrate(entity: &mut Entity, gravity: Vec2, elapsed: f64) {
    entity.velocity.y += gravity.y * GRAVITY_SCALE;
    entity.position += entity.velocity * elapsed;
    entity.velocity *= entity.material.friction;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{EntityBuilder, Material};
    use crate::foundation::collections::EntityId;
    use approx::assert_relative_eq;

    fn body(friction: f64) -> Entity {
        EntityBuilder::new()
            .position(100.0, 100.0)
            .velocity(2.0, -1.0)
            .material(Material::new("test", friction, 1.0, 1.0))
            .build(EntityId(0))
    }

    #[test]
    fn test_gravity_nudges_before_moving() {
        let mut entity = body(1.0);

        integrate(&mut entity, Vec2::new(0.0, 10.0), 2.0);

        assert_relative_eq!(entity.velocity, Vec2::new(2.0, -0.9));
        assert_relative_eq!(entity.position, Vec2::new(104.0, 98.2));
    }

    #[test]
    fn test_horizontal_gravity_is_ignored() {
        let mut entity = body(1.0);

        integrate(&mut entity, Vec2::new(50.0, 0.0), 1.0);

        assert_relative_eq!(entity.velocity, Vec2::new(2.0, -1.0));
    }

    #[test]
    fn test_friction_is_independent_of_elapsed() {
        let mut short = body(0.5);
        let mut long = body(0.5);

        integrate(&mut short, Vec2::zeros(), 1.0);
        integrate(&mut long, Vec2::zeros(), 40.0);

        assert_relative_eq!(short.velocity, Vec2::new(1.0, -0.5));
        assert_relative_eq!(long.velocity, short.velocity);
        assert_relative_eq!(long.position, Vec2::new(180.0, 60.0));
    }

    #[test]
    fn test_zero_elapsed_only_touches_velocity() {
        let mut entity = body(0.9);

        integrate(&mut entity, Vec2::new(0.0, 9.81), 0.0);

        assert_relative_eq!(entity.position, Vec2::new(100.0, 100.0));
        assert_relative_eq!(entity.velocity, Vec2::new(1.8, (-1.0 + 0.0981) * 0.9));
    }
}
