//! Game object blueprints
//!
//! Each function assembles one object from engine components and returns
//! the new entity. Objects are created unparented, i.e. in world space; the
//! ball is the exception and starts attached to its paddle.

use scene_engine::prelude::*;

use crate::ball;
use crate::components::{Ball, Brick, DirectionalLight, Floor, Paddle, Wall, WallSide};
use crate::error::GameError;

/// Paddle and wall color
pub const RED: Vec3 = Vec3::new(0.3, 0.0, 0.0);

/// Brick color
pub const GREEN: Vec3 = Vec3::new(0.2, 0.3, 0.0);

/// Floor color
pub const CREAM: Vec3 = Vec3::new(1.0, 1.0, 0.8);

/// Radius of the ball's sphere mesh
pub const BALL_MESH_RADIUS: f32 = 2.0;

/// Radius of the ball's collider
pub const BALL_RADIUS: f32 = 0.5;

/// A Phong material with the given diffuse color
pub fn color_material(color: Vec3) -> PhongMaterial {
    PhongMaterial::new().with_color(color)
}

fn cube(color: Vec3) -> MeshComponent {
    MeshComponent::new(Mesh::new(Geometry::Cube, color_material(color)))
}

/// Keyboard-controlled paddle at the bottom of the field
pub fn spawn_paddle(world: &mut World) -> Entity {
    world
        .spawn("paddle")
        .with(Paddle)
        .with(PaddleControlComponent::default())
        .with(ColliderComponent::cuboid())
        .with(RigidBodyComponent::new(0.0, 1.0))
        .with(cube(RED))
        .translate(0.0, -9.5, 0.0)
        .scale(3.0, 1.0, 1.0)
        .build()
}

/// Ball resting on `paddle`
pub fn spawn_ball(world: &mut World, paddle: Entity) -> Result<Entity, GameError> {
    let entity = world
        .spawn("ball")
        .with(Ball { paddle })
        .with(RigidBodyComponent::new(1.0, 1.0))
        .with(ColliderComponent::sphere(BALL_RADIUS))
        .with(MeshComponent::new(Mesh::new(
            Geometry::Sphere { radius: BALL_MESH_RADIUS },
            color_material(RED),
        )))
        .build();
    ball::reset(world, entity, paddle)?;
    Ok(entity)
}

/// Brick centered at `(x, y)`
pub fn spawn_brick(world: &mut World, x: f32, y: f32) -> Entity {
    spawn_brick_in_grid(world, x, y, Brick::default())
}

pub(crate) fn spawn_brick_in_grid(world: &mut World, x: f32, y: f32, brick: Brick) -> Entity {
    world
        .spawn("brick")
        .with(brick)
        .with(ColliderComponent::cuboid())
        .with(RigidBodyComponent::new(0.0, 1.0))
        .with(cube(GREEN))
        .translate(x, y, 0.0)
        .scale(2.0, 1.0, 1.0)
        .build()
}

fn spawn_wall(world: &mut World, side: WallSide) -> EntityBuilder<'_> {
    world
        .spawn("wall")
        .with(Wall { side })
        .with(ColliderComponent::cuboid())
        .with(RigidBodyComponent::new(0.0, 1.0))
        .with(cube(RED))
}

/// Left boundary
pub fn spawn_left_wall(world: &mut World) -> Entity {
    spawn_wall(world, WallSide::Left)
        .translate(-10.0, 0.0, 0.0)
        .scale(1.0, 20.0, 1.0)
        .build()
}

/// Right boundary
pub fn spawn_right_wall(world: &mut World) -> Entity {
    spawn_wall(world, WallSide::Right)
        .translate(10.0, 0.0, 0.0)
        .scale(1.0, 20.0, 1.0)
        .build()
}

/// Top boundary
pub fn spawn_roof(world: &mut World) -> Entity {
    spawn_wall(world, WallSide::Roof)
        .translate(0.0, 10.0, 0.0)
        .scale(24.0, 1.0, 1.0)
        .build()
}

/// Ground under the field
pub fn spawn_floor(world: &mut World) -> Entity {
    world
        .spawn("floor")
        .with(Floor)
        .with(ColliderComponent::cuboid())
        .with(RigidBodyComponent::fixed())
        .with(cube(CREAM))
        .translate(0.0, -20.0, 0.0)
        .scale(50.0, 20.0, 50.0)
        .build()
}

/// Directional light in front of the field
pub fn spawn_directional_light(world: &mut World) -> Entity {
    world
        .spawn("light")
        .with(DirectionalLight)
        .with(PhongDirectionalLightComponent::default())
        .translate(0.0, 0.0, 1.0)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn transform(world: &World, entity: Entity) -> TransformComponent {
        world.get_component::<TransformComponent>(entity).unwrap().clone()
    }

    fn color(world: &World, entity: Entity) -> Vec3 {
        world.get_component::<MeshComponent>(entity).unwrap().mesh.material.color
    }

    #[test]
    fn test_paddle_blueprint() {
        let mut world = World::new();
        let paddle = spawn_paddle(&mut world);

        assert_eq!(
            world.component_names(paddle),
            vec!["boxcollider", "controller", "mesh", "paddle", "rigidbody", "transform"]
        );
        let t = transform(&world, paddle);
        assert_eq!(t.position, Vec3::new(0.0, -9.5, 0.0));
        assert_eq!(t.scale, Vec3::new(3.0, 1.0, 1.0));
        assert_eq!(color(&world, paddle), RED);
        let body = world.get_component::<RigidBodyComponent>(paddle).unwrap();
        assert_eq!((body.mass, body.restitution), (0.0, 1.0));
    }

    #[test]
    fn test_ball_blueprint_starts_reset() {
        let mut world = World::new();
        let paddle = spawn_paddle(&mut world);
        let ball = spawn_ball(&mut world, paddle).unwrap();

        assert_eq!(
            world.component_names(ball),
            vec!["ball", "mesh", "rigidbody", "spherecollider", "transform"]
        );
        assert_eq!(world.parent(ball), Some(paddle));
        assert!(!world.get_component::<RigidBodyComponent>(ball).unwrap().enabled);
        let mesh = &world.get_component::<MeshComponent>(ball).unwrap().mesh;
        assert_eq!(mesh.geometry, Geometry::Sphere { radius: 2.0 });
        assert_relative_eq!(transform(&world, ball).scale, Vec3::new(1.0 / 3.0, 1.0, 1.0));
    }

    #[test]
    fn test_brick_blueprint() {
        let mut world = World::new();
        let brick = spawn_brick(&mut world, -7.5, 8.0);

        let t = transform(&world, brick);
        assert_eq!(t.position, Vec3::new(-7.5, 8.0, 0.0));
        assert_eq!(t.scale, Vec3::new(2.0, 1.0, 1.0));
        assert_eq!(color(&world, brick), GREEN);
        assert!(world.has_component::<ColliderComponent>(brick));
    }

    #[test]
    fn test_wall_variants() {
        let mut world = World::new();
        let left = spawn_left_wall(&mut world);
        let right = spawn_right_wall(&mut world);
        let roof = spawn_roof(&mut world);

        assert_eq!(transform(&world, left).position, Vec3::new(-10.0, 0.0, 0.0));
        assert_eq!(transform(&world, left).scale, Vec3::new(1.0, 20.0, 1.0));
        assert_eq!(transform(&world, right).position, Vec3::new(10.0, 0.0, 0.0));
        assert_eq!(transform(&world, roof).position, Vec3::new(0.0, 10.0, 0.0));
        assert_eq!(transform(&world, roof).scale, Vec3::new(24.0, 1.0, 1.0));
        assert_eq!(world.get_component::<Wall>(roof).unwrap().side, WallSide::Roof);
        for wall in [left, right, roof] {
            assert_eq!(color(&world, wall), RED);
        }
    }

    #[test]
    fn test_floor_and_light() {
        let mut world = World::new();
        let floor = spawn_floor(&mut world);
        let light = spawn_directional_light(&mut world);

        assert_eq!(transform(&world, floor).position, Vec3::new(0.0, -20.0, 0.0));
        assert_eq!(transform(&world, floor).scale, Vec3::new(50.0, 20.0, 50.0));
        assert_eq!(color(&world, floor), CREAM);
        assert!(world.get_component::<RigidBodyComponent>(floor).unwrap().is_static());

        assert_eq!(world.component_names(light), vec!["directionallight", "light", "transform"]);
        assert_eq!(transform(&world, light).position, Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn test_color_material_sets_diffuse() {
        let material = color_material(Vec3::new(0.2, 0.3, 0.0));
        assert_eq!(material.color, Vec3::new(0.2, 0.3, 0.0));
    }
}
