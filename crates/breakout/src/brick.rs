//! Brick behavior
//!
//! A destroyed brick stays in the world with its collider disabled and its
//! mesh hidden.

use scene_engine::prelude::*;

use crate::error::GameError;

/// Disable the brick's collider and hide its mesh
///
/// Returns `true` if the brick was standing before the call.
pub fn destroy(world: &mut World, brick: Entity) -> Result<bool, GameError> {
    let was_standing = !is_destroyed(world, brick)?;
    world.component::<MeshComponent>(brick)?;

    world.component_mut::<ColliderComponent>(brick)?.set_enabled(false);
    world.component_mut::<MeshComponent>(brick)?.set_visible(false);

    if was_standing {
        log::debug!("brick {brick:?} destroyed");
    }
    Ok(was_standing)
}

/// Whether the brick no longer collides
pub fn is_destroyed(world: &World, brick: Entity) -> Result<bool, GameError> {
    Ok(!world.component::<ColliderComponent>(brick)?.enabled)
}
