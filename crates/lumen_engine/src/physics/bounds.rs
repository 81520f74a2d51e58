//! World-bound containment with restitution
//!
//! Each entity is kept inside the single world rectangle. Touching an edge
//! clamps the position and reflects the matching velocity component scaled by
//! the material elasticity.
//!
//! The two axes are not symmetric. Left and right are exclusive, so at most
//! one X correction happens per call. Top and bottom are checked
//! independently, so an entity taller than the world is clamped to both edges
//! and has its Y velocity reflected twice in one call.

use crate::entity::Entity;
use crate::foundation::math::Rect;
use bitflags::bitflags;

bitflags! {
    /// World edges an entity was clamped against
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Contact: u8 {
        /// Left edge
        const LEFT = 1 << 0;
        /// Right edge
        const RIGHT = 1 << 1;
        /// Top edge
        const TOP = 1 << 2;
        /// Bottom edge
        const BOTTOM = 1 << 3;
    }
}

/// Clamp `entity` into `world` and return the edges it touched
///
/// Velocity is reflected only for dynamic entities; static ones are moved back
/// inside but keep their velocity.
pub fn constrain(entity: &mut Entity, world: &Rect) -> Contact {
    let mut contact = Contact::empty();
    let elasticity = entity.material.elasticity;
    let reflect = entity.is_dynamic();

    if entity.position.x < world.left() {
        entity.position.x = world.left();
        contact |= Contact::LEFT;
    } else if entity.position.x + entity.size.x > world.right() {
        entity.position.x = world.right() - entity.size.x;
        contact |= Contact::RIGHT;
    }
    if reflect && contact.intersects(Contact::LEFT | Contact::RIGHT) {
        entity.velocity.x = -entity.velocity.x * elasticity;
    }

    if entity.position.y < world.top() {
        entity.position.y = world.top();
        contact |= Contact::TOP;
        if reflect {
            entity.velocity.y = -entity.velocity.y * elasticity;
        }
    }
    if entity.position.y + entity.size.y > world.bottom() {
        entity.position.y = world.bottom() - entity.size.y;
        contact |= Contact::BOTTOM;
        if reflect {
            entity.velocity.y = -entity.velocity.y * elasticity;
        }
    }

    contact
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{EntityBuilder, Material, PhysicsKind};
    use crate::foundation::collections::EntityId;
    use crate::foundation::math::Vec2;
    use approx::assert_relative_eq;

    fn world() -> Rect {
        Rect::from_size(320.0, 200.0)
    }

    fn body(x: f64, y: f64, vx: f64, vy: f64) -> Entity {
        EntityBuilder::new()
            .position(x, y)
            .velocity(vx, vy)
            .size(16.0, 16.0)
            .material(Material::new("half", 1.0, 0.5, 1.0))
            .build(EntityId(0))
    }

    #[test]
    fn test_inside_is_untouched() {
        let mut entity = body(10.0, 10.0, 3.0, -2.0);

        let contact = constrain(&mut entity, &world());

        assert!(contact.is_empty());
        assert_eq!(entity.position, Vec2::new(10.0, 10.0));
        assert_eq!(entity.velocity, Vec2::new(3.0, -2.0));
    }

    #[test]
    fn test_right_edge_clamps_and_reflects() {
        let mut entity = body(316.0, 50.0, 1.0, 0.0);

        let contact = constrain(&mut entity, &world());

        assert_eq!(contact, Contact::RIGHT);
        assert_relative_eq!(entity.position.x, 304.0);
        assert_relative_eq!(entity.velocity.x, -0.5);
    }

    #[test]
    fn test_left_edge_clamps_and_reflects() {
        let mut entity = body(-4.0, 50.0, -2.0, 0.0);

        let contact = constrain(&mut entity, &world());

        assert_eq!(contact, Contact::LEFT);
        assert_relative_eq!(entity.position.x, 0.0);
        assert_relative_eq!(entity.velocity.x, 1.0);
    }

    #[test]
    fn test_wider_than_world_corrects_x_once() {
        let mut entity = body(-10.0, 50.0, -2.0, 0.0);
        entity.size.x = 400.0;

        let contact = constrain(&mut entity, &world());

        assert_eq!(contact, Contact::LEFT);
        assert_relative_eq!(entity.position.x, 0.0);
        assert_relative_eq!(entity.velocity.x, 1.0);
    }

    #[test]
    fn test_taller_than_world_reflects_y_twice() {
        let mut entity = body(10.0, -10.0, 0.0, -2.0);
        entity.size.y = 300.0;

        let contact = constrain(&mut entity, &world());

        assert_eq!(contact, Contact::TOP | Contact::BOTTOM);
        assert_relative_eq!(entity.position.y, -100.0);
        assert_relative_eq!(entity.velocity.y, -0.5);
    }

    #[test]
    fn test_bottom_edge() {
        let mut entity = body(10.0, 190.0, 0.0, 4.0);

        let contact = constrain(&mut entity, &world());

        assert_eq!(contact, Contact::BOTTOM);
        assert_relative_eq!(entity.position.y, 184.0);
        assert_relative_eq!(entity.velocity.y, -2.0);
    }

    #[test]
    fn test_offset_world_origin() {
        let world = Rect::new(Vec2::new(50.0, 50.0), Vec2::new(100.0, 100.0));
        let mut entity = body(40.0, 140.0, -1.0, 1.0);

        let contact = constrain(&mut entity, &world);

        assert_eq!(contact, Contact::LEFT | Contact::BOTTOM);
        assert_eq!(entity.position, Vec2::new(50.0, 134.0));
    }

    #[test]
    fn test_static_entity_keeps_velocity() {
        let mut entity = body(330.0, 50.0, 1.0, 0.0);
        entity.physics = PhysicsKind::Static;

        constrain(&mut entity, &world());

        assert_relative_eq!(entity.position.x, 304.0);
        assert_eq!(entity.velocity, Vec2::new(1.0, 0.0));
    }
}
