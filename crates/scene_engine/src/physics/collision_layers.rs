//! Collision layer system for filtering collision detection
//!
//! Two colliders are tested only when each one's layer is in the other's
//! mask.

use bitflags::bitflags;

bitflags! {
    /// Collision layer bitmask
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct CollisionLayers: u32 {
        /// Player-controlled objects
        const PLAYER = 1 << 0;
        /// Projectiles and balls
        const PROJECTILE = 1 << 1;
        /// Static environment geometry
        const ENVIRONMENT = 1 << 2;
        /// Destructible targets
        const TARGET = 1 << 3;
        /// Trigger volumes (no physical response)
        const TRIGGER = 1 << 4;
        /// User-defined layers (bits 8-31)
        const CUSTOM = 0xFFFF_FF00;
    }
}

impl CollisionLayers {
    /// Check if two colliders should collide based on their layers and masks
    pub fn should_collide(layer_a: Self, mask_a: Self, layer_b: Self, mask_b: Self) -> bool {
        layer_a.intersects(mask_b) && layer_b.intersects(mask_a)
    }
}
