//! Game configuration
//!
//! Everything tunable about a match, grouped the way the file is laid out:
//!
//! ```toml
//! [engine]
//! log_level = "info"
//!
//! [gameplay]
//! launch_impulse = [5.0, 10.0, 0.0]
//! paddle_speed = 15.0
//! paddle_limit = 8.0
//!
//! [bricks]
//! rows = 4
//! columns = 7
//! origin = [-7.5, 8.0]
//! spacing = [2.5, 1.5]
//!
//! [controls]
//! launch = "Space"
//! left = "Left"
//! right = "Right"
//! ```
//!
//! Missing sections and fields keep their defaults.

use std::path::Path;

use scene_engine::prelude::*;
use serde::{Deserialize, Serialize};

/// Game configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Engine settings
    pub engine: EngineConfig,

    /// Gameplay settings
    pub gameplay: GameplayConfig,

    /// Brick grid layout
    pub bricks: BrickGridConfig,

    /// Controls settings
    pub controls: ControlsConfig,
}

/// Gameplay configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    /// Impulse applied to the ball on launch
    pub launch_impulse: Vec3,

    /// Paddle speed in units per second
    pub paddle_speed: f32,

    /// Furthest the paddle may move from the center
    pub paddle_limit: f32,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            launch_impulse: Vec3::new(5.0, 10.0, 0.0),
            paddle_speed: 15.0,
            paddle_limit: 8.0,
        }
    }
}

/// Brick grid layout
///
/// Row 0 is the top row at `origin`; further rows go downwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrickGridConfig {
    /// Number of rows
    pub rows: u32,

    /// Bricks per row
    pub columns: u32,

    /// Center of the top-left brick
    pub origin: [f32; 2],

    /// Distance between brick centers (column, row)
    pub spacing: [f32; 2],
}

impl BrickGridConfig {
    /// Center of the brick at `row`, `column`
    pub fn position(&self, row: u32, column: u32) -> (f32, f32) {
        (
            self.origin[0] + column as f32 * self.spacing[0],
            self.origin[1] - row as f32 * self.spacing[1],
        )
    }

    /// Number of bricks in the grid
    pub fn len(&self) -> usize {
        self.rows as usize * self.columns as usize
    }

    /// Whether the grid holds no bricks
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for BrickGridConfig {
    fn default() -> Self {
        Self {
            rows: 4,
            columns: 7,
            origin: [-7.5, 8.0],
            spacing: [2.5, 1.5],
        }
    }
}

/// Controls configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Key that launches the ball
    pub launch: KeyCode,

    /// Key moving the paddle left
    pub left: KeyCode,

    /// Key moving the paddle right
    pub right: KeyCode,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            launch: KeyCode::Space,
            left: KeyCode::Left,
            right: KeyCode::Right,
        }
    }
}

impl Config for GameConfig {}

impl GameConfig {
    /// Load from `path`, or use the defaults when no file is given or it does not exist
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) if path.exists() => {
                log::info!("Loading game config from {}", path.display());
                Self::load_from_file(path)?
            }
            Some(path) => {
                log::warn!("Config {} not found, using defaults", path.display());
                Self::default()
            }
            None => Self::default(),
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.engine.validate()?;
        for (field, value) in [
            ("gameplay.paddle_speed", self.gameplay.paddle_speed),
            ("gameplay.paddle_limit", self.gameplay.paddle_limit),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be finite and not negative, got {value}"),
                });
            }
        }
        if self.gameplay.launch_impulse.iter().any(|c| !c.is_finite()) {
            return Err(ConfigError::Invalid {
                field: "gameplay.launch_impulse",
                reason: format!("must be finite, got {:?}", self.gameplay.launch_impulse),
            });
        }
        if self.bricks.is_empty() {
            return Err(ConfigError::Invalid {
                field: "bricks",
                reason: "the grid needs at least one brick".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_grid_matches_layout() {
        let grid = BrickGridConfig::default();

        assert_eq!(grid.len(), 28);
        assert_eq!(grid.position(0, 0), (-7.5, 8.0));
        let (x, y) = grid.position(3, 6);
        assert_relative_eq!(x, 7.5);
        assert_relative_eq!(y, 3.5);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: GameConfig = toml::from_str(
            r#"
            [gameplay]
            paddle_speed = 20.0

            [controls]
            launch = "Enter"
            "#,
        )
        .unwrap();

        assert_eq!(config.gameplay.paddle_speed, 20.0);
        assert_eq!(config.gameplay.paddle_limit, 8.0);
        assert_eq!(config.controls.launch, KeyCode::Enter);
        assert_eq!(config.controls.left, KeyCode::Left);
        assert_eq!(config.bricks, BrickGridConfig::default());
    }

    #[test]
    fn test_ron_config_parses() {
        let config: GameConfig = ron::from_str("(bricks: (rows: 1, columns: 3))").unwrap();

        assert_eq!(config.bricks.len(), 3);
        assert_eq!(config.bricks.spacing, [2.5, 1.5]);
    }

    #[test]
    fn test_saved_config_loads_back() {
        let mut config = GameConfig::default();
        config.gameplay.launch_impulse = Vec3::new(-4.0, 12.0, 0.0);
        config.controls.launch = KeyCode::W;

        for extension in ["toml", "ron"] {
            let path = std::env::temp_dir().join(format!("breakout_{}.{extension}", std::process::id()));
            config.save_to_file(&path).unwrap();
            assert_eq!(GameConfig::load_or_default(Some(&path)).unwrap(), config);
            std::fs::remove_file(&path).unwrap();
        }
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let path = std::env::temp_dir().join("breakout_missing_config.toml");
        let config = GameConfig::load_or_default(Some(&path)).unwrap();

        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn test_nan_paddle_limit_is_rejected() {
        let path = std::env::temp_dir().join(format!("breakout_nan_{}.toml", std::process::id()));
        std::fs::write(&path, "[gameplay]\npaddle_limit = nan\n").unwrap();

        let result = GameConfig::load_or_default(Some(&path));
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(
            result,
            Err(ConfigError::Invalid { field: "gameplay.paddle_limit", .. })
        ));
    }

    #[test]
    fn test_non_finite_gameplay_values_are_rejected() {
        let mut config = GameConfig::default();
        config.gameplay.paddle_speed = f32::INFINITY;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "gameplay.paddle_speed", .. })
        ));

        let mut config = GameConfig::default();
        config.gameplay.launch_impulse.y = f32::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "gameplay.launch_impulse", .. })
        ));
    }

    #[test]
    fn test_empty_grid_is_rejected() {
        let mut config = GameConfig::default();
        config.bricks.rows = 0;

        assert!(matches!(config.validate(), Err(ConfigError::Invalid { field: "bricks", .. })));
    }
}
