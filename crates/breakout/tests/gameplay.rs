//! End-to-end scenarios driving the engine frame loop with the breakout game

use approx::assert_relative_eq;
use breakout::{brick, BreakoutGame, GameConfig};
use scene_engine::prelude::*;

const DT: f32 = 1.0 / 60.0;

fn start(config: GameConfig) -> (Engine, BreakoutGame) {
    let mut engine = Engine::new(config.engine.clone()).unwrap();
    let mut game = BreakoutGame::new(config);
    game.initialize(&mut engine).unwrap();
    (engine, game)
}

/// One iteration of the engine main loop
fn frame(engine: &mut Engine, game: &mut BreakoutGame) {
    game.update(engine, DT).unwrap();
    engine.step(DT);
    engine.input.update();
}

fn tap_launch(engine: &mut Engine, game: &mut BreakoutGame) {
    engine.handle_event(AppEvent::KeyPressed(KeyCode::Space));
    frame(engine, game);
    engine.handle_event(AppEvent::KeyReleased(KeyCode::Space));
}

#[test]
fn launch_key_sends_ball_upwards_from_paddle() {
    let (mut engine, mut game) = start(GameConfig::default());
    let level = game.level().unwrap().clone();

    engine.handle_event(AppEvent::KeyPressed(KeyCode::Space));
    game.update(&mut engine, DT).unwrap();

    assert_eq!(game.launches(), 1);
    assert!(engine.scene.is_direct_child(&engine.world, level.ball));
    let transform = engine.world.get_component::<TransformComponent>(level.ball).unwrap();
    assert_relative_eq!(transform.position, Vec3::new(0.0, -8.0, 0.0), epsilon = 1e-5);
    assert_relative_eq!(transform.scale, Vec3::new(1.0, 1.0, 1.0), epsilon = 1e-5);
    let body = engine.world.get_component::<RigidBodyComponent>(level.ball).unwrap();
    assert_eq!(body.velocity, Vec3::new(5.0, 10.0, 0.0));

    // Holding the key does not launch again
    engine.step(DT);
    game.update(&mut engine, DT).unwrap();
    assert_eq!(game.launches(), 1);
}

#[test]
fn ball_follows_paddle_until_launched() {
    let (mut engine, mut game) = start(GameConfig::default());
    let level = game.level().unwrap().clone();

    engine.handle_event(AppEvent::KeyPressed(KeyCode::Left));
    for _ in 0..30 {
        frame(&mut engine, &mut game);
    }

    let paddle = engine.world.world_transform(level.paddle);
    let ball = engine.world.world_transform(level.ball);
    assert!(paddle.position.x < 0.0);
    assert_relative_eq!(ball.position.x, paddle.position.x, epsilon = 1e-5);
    assert_relative_eq!(ball.position.y, -8.0, epsilon = 1e-5);
}

#[test]
fn ball_hitting_floor_returns_to_paddle() {
    let (mut engine, mut game) = start(GameConfig::default());
    let level = game.level().unwrap().clone();
    tap_launch(&mut engine, &mut game);

    engine.world.get_component_mut::<TransformComponent>(level.ball).unwrap().position = Vec3::new(5.0, -8.0, 0.0);
    engine
        .world
        .get_component_mut::<RigidBodyComponent>(level.ball)
        .unwrap()
        .set_velocity(Vec3::new(0.0, -20.0, 0.0));

    for _ in 0..30 {
        frame(&mut engine, &mut game);
        if game.balls_lost() > 0 {
            break;
        }
    }

    assert_eq!(game.balls_lost(), 1);
    assert_eq!(engine.world.parent(level.ball), Some(level.paddle));
    assert!(!engine.world.get_component::<RigidBodyComponent>(level.ball).unwrap().enabled);
    assert_relative_eq!(
        engine.world.get_component::<TransformComponent>(level.ball).unwrap().scale,
        Vec3::new(1.0 / 3.0, 1.0, 1.0)
    );
    assert!(engine.world.get_component::<ColliderComponent>(level.floor).unwrap().enabled);
    assert_eq!(level.bricks_remaining(&engine.world).unwrap(), 28);
}

#[test]
fn ball_destroys_brick_and_bounces() {
    let (mut engine, mut game) = start(GameConfig::default());
    let level = game.level().unwrap().clone();
    tap_launch(&mut engine, &mut game);

    // Bottom row, middle column sits at (0, 3.5)
    let target = level.bricks[3 * 7 + 3];
    engine.world.get_component_mut::<TransformComponent>(level.ball).unwrap().position = Vec3::new(0.0, 2.0, 0.0);
    engine
        .world
        .get_component_mut::<RigidBodyComponent>(level.ball)
        .unwrap()
        .set_velocity(Vec3::new(0.0, 10.0, 0.0));

    for _ in 0..10 {
        frame(&mut engine, &mut game);
    }

    assert_eq!(game.score(), 1);
    assert!(brick::is_destroyed(&engine.world, target).unwrap());
    assert!(!engine.world.get_component::<MeshComponent>(target).unwrap().visible);
    assert!(engine.world.contains(target));
    assert_eq!(level.bricks_remaining(&engine.world).unwrap(), 27);
    let body = engine.world.get_component::<RigidBodyComponent>(level.ball).unwrap();
    assert!(body.velocity.y < 0.0);
}

#[test]
fn destroyed_brick_no_longer_collides() {
    let (mut engine, mut game) = start(GameConfig::default());
    let level = game.level().unwrap().clone();
    tap_launch(&mut engine, &mut game);

    let target = level.bricks[3 * 7 + 3];
    brick::destroy(&mut engine.world, target).unwrap();
    engine.world.get_component_mut::<TransformComponent>(level.ball).unwrap().position = Vec3::new(0.0, 2.0, 0.0);
    engine
        .world
        .get_component_mut::<RigidBodyComponent>(level.ball)
        .unwrap()
        .set_velocity(Vec3::new(0.0, 10.0, 0.0));

    for _ in 0..10 {
        engine.step(DT);
        let events = engine.drain_collisions();
        assert!(events.iter().all(|event| !event.involves(target)));
    }

    let body = engine.world.get_component::<RigidBodyComponent>(level.ball).unwrap();
    assert_eq!(body.velocity, Vec3::new(0.0, 10.0, 0.0));
}

#[test]
fn clearing_the_level_stops_the_engine() {
    let mut config = GameConfig::default();
    config.bricks.rows = 1;
    config.bricks.columns = 1;
    config.bricks.origin = [0.0, 3.5];
    config.gameplay.launch_impulse = Vec3::new(0.0, 10.0, 0.0);

    let mut engine = Engine::new(config.engine.clone()).unwrap();
    let mut game = BreakoutGame::new(config);
    engine.handle_event(AppEvent::KeyPressed(KeyCode::Space));

    engine.run(&mut game, Some(600)).unwrap();

    assert!(!engine.is_running());
    assert!(engine.frame_count() < 600);
    assert_eq!(game.score(), 1);
    assert!(game.level().unwrap().is_cleared(&engine.world).unwrap());
}

#[test]
fn default_level_plays_without_errors() {
    let config = GameConfig::default();
    let mut engine = Engine::new(config.engine.clone()).unwrap();
    let mut game = BreakoutGame::new(config);
    engine.handle_event(AppEvent::KeyPressed(KeyCode::Space));

    engine.run(&mut game, Some(600)).unwrap();

    let level = game.level().unwrap();
    let remaining = level.bricks_remaining(&engine.world).unwrap();
    assert!(game.score() >= 1);
    assert_eq!(game.score() as usize + remaining, level.bricks.len());
}
