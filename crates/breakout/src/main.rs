//! Headless breakout demo
//!
//! Runs one level for a fixed number of frames with a scripted keyboard and
//! logs how it went.

use std::path::PathBuf;

use anyhow::{Context, Result};
use breakout::{BreakoutGame, GameConfig};
use clap::{value_parser, Arg, Command};
use scene_engine::foundation::logging;
use scene_engine::prelude::*;

const DEFAULT_FRAMES: &str = "3600";

/// Feeds key events to the engine on given frames, then defers to the game
struct ScriptedInput<A> {
    inner: A,
    script: Vec<(u64, AppEvent)>,
    frame: u64,
}

impl<A: Application> ScriptedInput<A> {
    fn new(inner: A, script: Vec<(u64, AppEvent)>) -> Self {
        Self { inner, script, frame: 0 }
    }
}

impl<A: Application> Application for ScriptedInput<A> {
    fn initialize(&mut self, engine: &mut Engine) -> Result<(), AppError> {
        self.inner.initialize(engine)
    }

    fn update(&mut self, engine: &mut Engine, delta_time: f32) -> Result<(), AppError> {
        for &(_, event) in self.script.iter().filter(|(frame, _)| *frame == self.frame) {
            log::debug!("frame {}: {event:?}", self.frame);
            self.inner.handle_event(engine, event)?;
        }
        self.frame += 1;
        self.inner.update(engine, delta_time)
    }

    fn cleanup(&mut self, engine: &mut Engine) {
        self.inner.cleanup(engine);
    }
}

fn main() -> Result<()> {
    let matches = Command::new("breakout")
        .about("Runs a breakout level headlessly and reports the outcome")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Game config file (.toml or .ron)"),
        )
        .arg(
            Arg::new("frames")
                .short('f')
                .long("frames")
                .value_name("COUNT")
                .value_parser(value_parser!(u64))
                .help("Number of frames to simulate")
                .default_value(DEFAULT_FRAMES),
        )
        .get_matches();

    let config_path = matches.get_one::<PathBuf>("config");
    let frames = matches.get_one::<u64>("frames").copied().unwrap_or(3600);

    let config = GameConfig::load_or_default(config_path.map(PathBuf::as_path))
        .context("failed to load game config")?;
    logging::init(&config.engine.log_level);

    let launch_key = config.controls.launch;
    let mut engine = Engine::new(config.engine.clone()).context("failed to start engine")?;
    let mut game = ScriptedInput::new(
        BreakoutGame::new(config),
        vec![(0, AppEvent::KeyPressed(launch_key)), (1, AppEvent::KeyReleased(launch_key))],
    );

    engine
        .run(&mut game, Some(frames))
        .context("game loop failed")?;

    let game = game.inner;
    let remaining = match game.level() {
        Some(level) => level.bricks_remaining(&engine.world)?,
        None => 0,
    };
    log::info!(
        "score {}, launches {}, balls lost {}, bricks remaining {} after {:.1}s",
        game.score(),
        game.launches(),
        game.balls_lost(),
        remaining,
        engine.elapsed_time()
    );
    Ok(())
}
