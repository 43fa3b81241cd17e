//! Ball behavior
//!
//! Between launches the ball rides on the paddle: parented to it, physics
//! off. Launching moves it into world space and kicks it upwards. Hitting the
//! floor brings it back; hitting a brick destroys the brick.

use scene_engine::prelude::*;

use crate::brick;
use crate::components::{Ball, Brick, Floor};
use crate::error::GameError;

/// Impulse applied by [`launch`]
pub const LAUNCH_IMPULSE: Vec3 = Vec3::new(5.0, 10.0, 0.0);

/// Ball position relative to the paddle while attached
pub const REST_OFFSET: Vec3 = Vec3::new(0.0, 1.5, 0.0);

/// Local scale while attached, undoing the paddle's (3, 1, 1) stretch
pub const REST_SCALE: Vec3 = Vec3::new(1.0 / 3.0, 1.0, 1.0);

/// What a ball contact did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionOutcome {
    /// The ball touched the floor and went back to the paddle
    Reset,
    /// The ball destroyed this brick
    BrickDestroyed(Entity),
    /// Nothing beyond the physical bounce
    Ignored,
}

/// Whether the ball is flying (its rigidbody is simulated)
pub fn is_launched(world: &World, ball: Entity) -> Result<bool, GameError> {
    Ok(world.component::<RigidBodyComponent>(ball)?.enabled)
}

/// Launch with the default impulse
///
/// Returns `false` without changing anything when the ball is already in
/// flight.
pub fn launch(world: &mut World, scene: &Scene, ball: Entity) -> Result<bool, GameError> {
    launch_with_impulse(world, scene, ball, LAUNCH_IMPULSE)
}

/// Detach the ball into world space and apply `impulse`
///
/// The world placement is baked into the local transform before
/// reparenting, so the ball does not jump and ends up with the world scale
/// it had on the paddle.
pub fn launch_with_impulse(world: &mut World, scene: &Scene, ball: Entity, impulse: Vec3) -> Result<bool, GameError> {
    if is_launched(world, ball)? {
        return Ok(false);
    }

    world.component::<TransformComponent>(ball)?;

    // Reparent before touching any component; it is the step that can fail.
    let placement = world.world_transform(ball);
    scene.add_child(world, ball)?;

    let transform = world.component_mut::<TransformComponent>(ball)?;
    transform.set_position(placement.position);
    transform.rotation = placement.rotation;
    transform.set_scale(placement.scale);

    let body = world.component_mut::<RigidBodyComponent>(ball)?;
    body.enabled = true;
    body.stop();
    body.add_impulse(impulse);

    log::debug!(
        "ball {ball:?} launched from {:?} with velocity {:?}",
        placement.position,
        body.velocity
    );
    Ok(true)
}

/// Put the ball back on `paddle` with physics off
pub fn reset(world: &mut World, ball: Entity, paddle: Entity) -> Result<(), GameError> {
    let body = world.component_mut::<RigidBodyComponent>(ball)?;
    body.enabled = false;
    body.stop();

    let transform = world.component_mut::<TransformComponent>(ball)?;
    transform.set_position(Vec3::zeros());
    transform.translate(REST_OFFSET);
    transform.set_scale(REST_SCALE);

    world.add_child(paddle, ball)?;
    log::debug!("ball {ball:?} reset onto paddle {paddle:?}");
    Ok(())
}

/// Apply the game rules to a contact between `ball` and `other`
///
/// Floors reset the ball onto the paddle it remembers; bricks are destroyed.
/// Anything else is left to the physics bounce.
pub fn handle_collision(world: &mut World, ball: Entity, other: Entity) -> Result<CollisionOutcome, GameError> {
    if world.has_component::<Floor>(other) {
        let paddle = world.component::<Ball>(ball)?.paddle;
        reset(world, ball, paddle)?;
        return Ok(CollisionOutcome::Reset);
    }

    if world.has_component::<Brick>(other) {
        return Ok(if brick::destroy(world, other)? {
            CollisionOutcome::BrickDestroyed(other)
        } else {
            CollisionOutcome::Ignored
        });
    }

    Ok(CollisionOutcome::Ignored)
}
