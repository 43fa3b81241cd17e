//! Core engine implementation

use crate::{
    application::{AppEvent, Application},
    core::config::EngineConfig,
    ecs::systems::{DirectionalLightData, LightingSystem, PaddleControlSystem, RenderItem, RenderableCollector},
    ecs::World,
    events::{CollisionEvent, EventQueue},
    input::InputManager,
    physics::PhysicsCollisionSystem,
    scene::Scene,
};
use thiserror::Error;

/// Main engine struct
///
/// The engine owns the world and runs the per-frame systems: paddle control
/// from input, then physics. Rendering is left to the host, which reads
/// [`Engine::collect_renderables`] and [`Engine::collect_lights`].
pub struct Engine {
    /// ECS world containing all entities and components
    pub world: World,

    /// World-space root of the hierarchy
    pub scene: Scene,

    /// Input handling system
    pub input: InputManager,

    /// Contact detection and response
    pub physics: PhysicsCollisionSystem,

    paddle_control: PaddleControlSystem,
    lighting: LightingSystem,
    renderables: RenderableCollector,
    collisions: EventQueue<CollisionEvent>,

    /// Engine configuration
    config: EngineConfig,

    /// Whether the engine should continue running
    running: bool,

    frame_count: u64,
    elapsed: f32,
}

impl Engine {
    /// Create a new engine instance
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config
            .validate()
            .map_err(|e| EngineError::ConfigError(e.to_string()))?;
        log::info!("Initializing engine (timestep {:.4}s)...", config.fixed_timestep);

        let mut world = World::new();
        let scene = Scene::new(&mut world);
        let mut physics = PhysicsCollisionSystem::new();
        physics.debug_enabled = config.log_collisions;

        Ok(Self {
            world,
            scene,
            input: InputManager::new(),
            physics,
            paddle_control: PaddleControlSystem::new(),
            lighting: LightingSystem::new(),
            renderables: RenderableCollector::new(),
            collisions: EventQueue::new(),
            config,
            running: true,
            frame_count: 0,
            elapsed: 0.0,
        })
    }

    /// Run the main loop with the given application
    ///
    /// Each frame calls [`Application::update`], then [`Engine::step`], then
    /// ends the input frame. The loop stops when the engine is asked to quit
    /// or after `max_frames` frames.
    pub fn run<T: Application>(&mut self, app: &mut T, max_frames: Option<u64>) -> Result<(), EngineError> {
        app.initialize(self)
            .map_err(|e| EngineError::InitializationFailed(format!("App initialization: {e}")))?;

        log::info!("Starting main loop...");
        let delta_time = self.config.fixed_timestep;
        let start = self.frame_count;

        while self.running && max_frames.map_or(true, |max| self.frame_count - start < max) {
            app.update(self, delta_time)
                .map_err(|e| EngineError::ApplicationError(format!("App update: {e}")))?;
            self.step(delta_time);
            self.input.update();
        }

        app.cleanup(self);
        log::info!("Engine shutdown complete after {} frames", self.frame_count - start);
        Ok(())
    }

    /// Run the engine systems for one frame
    pub fn step(&mut self, delta_time: f32) {
        self.paddle_control.update(&mut self.world, &self.input, delta_time);
        self.physics.step(&mut self.world, delta_time, &mut self.collisions);
        self.frame_count += 1;
        self.elapsed += delta_time;
    }

    /// Take every collision event queued so far
    pub fn drain_collisions(&mut self) -> Vec<CollisionEvent> {
        self.collisions.drain().collect()
    }

    /// Number of collision events waiting to be drained
    pub fn pending_collisions(&self) -> usize {
        self.collisions.len()
    }

    /// Handle an application event
    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::WindowCloseRequested => self.quit(),
            AppEvent::WindowUnfocused => self.input.release_all(),
            AppEvent::KeyPressed(key) => self.input.handle_key_input(key, true),
            AppEvent::KeyReleased(key) => self.input.handle_key_input(key, false),
        }
    }

    /// Visible meshes with their world matrices
    pub fn collect_renderables(&mut self) -> &[RenderItem] {
        self.renderables.collect(&self.world)
    }

    /// Enabled directional lights in world space
    pub fn collect_lights(&mut self) -> &[DirectionalLightData] {
        self.lighting.collect(&self.world)
    }

    /// Request engine shutdown
    pub fn quit(&mut self) {
        log::info!("Engine shutdown requested");
        self.running = false;
    }

    /// Whether the main loop keeps going
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Get the ECS world
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get mutable access to the ECS world
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Get the input manager
    pub fn input(&self) -> &InputManager {
        &self.input
    }

    /// Get mutable access to the input manager
    pub fn input_mut(&mut self) -> &mut InputManager {
        &mut self.input
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Frames stepped since creation
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Simulated seconds since creation
    pub fn elapsed_time(&self) -> f32 {
        self.elapsed
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Initialization error
    #[error("Engine initialization failed: {0}")]
    InitializationFailed(String),

    /// Application error
    #[error("Application error: {0}")]
    ApplicationError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}
