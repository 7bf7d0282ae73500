//! Data-driven scene and tuning configuration
//!
//! Loaded from JSON by the demo shell. Every field has a sensible default,
//! so a missing or malformed file degrades to the stock arena instead of
//! failing the process.

use std::fs;
use std::path::Path;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::consts;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: consts::WINDOW_WIDTH,
            height: consts::WINDOW_HEIGHT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Gap between the window edge and the playfield interior
    pub margin: i32,
    pub wall_thickness: i32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            margin: consts::ARENA_MARGIN,
            wall_thickness: consts::WALL_THICKNESS,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BallConfig {
    pub radius: i32,
    pub start_x: i32,
    pub start_y: i32,
    pub serve_speed: f32,
    pub gravity: f32,
}

impl Default for BallConfig {
    fn default() -> Self {
        Self {
            radius: consts::BALL_RADIUS,
            start_x: 0,
            start_y: 100,
            serve_speed: consts::BALL_SERVE_SPEED,
            gravity: consts::BALL_GRAVITY,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaddleConfig {
    pub width: i32,
    pub height: i32,
    pub speed: f32,
}

impl Default for PaddleConfig {
    fn default() -> Self {
        Self {
            width: consts::PADDLE_WIDTH,
            height: consts::PADDLE_HEIGHT,
            speed: consts::PADDLE_SPEED,
        }
    }
}

/// Scene and tuning configuration for the demo shell
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub window: WindowConfig,
    pub arena: ArenaConfig,
    pub ball: BallConfig,
    pub paddle: PaddleConfig,
}

impl SimConfig {
    /// Load from a JSON file, degrading to defaults with a logged warning
    /// when the file is missing or malformed
    pub fn load_or_default(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(config) => config,
                Err(err) => {
                    warn!("ignoring malformed config {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(err) => {
                warn!("config {} not readable ({err}), using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Half-extent of the playfield interior on x
    pub fn interior_half_width(&self) -> i32 {
        self.window.width / 2 - self.arena.margin
    }

    /// Half-extent of the playfield interior on y
    pub fn interior_half_height(&self) -> i32 {
        self.window.height / 2 - self.arena.margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roundtrips_through_json() {
        let config = SimConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: SimConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: SimConfig = serde_json::from_str(r#"{"ball": {"radius": 8}}"#).unwrap();
        assert_eq!(config.ball.radius, 8);
        assert_eq!(config.ball.serve_speed, consts::BALL_SERVE_SPEED);
        assert_eq!(config.window.width, consts::WINDOW_WIDTH);
    }

    #[test]
    fn test_missing_file_degrades_to_defaults() {
        let config = SimConfig::load_or_default(Path::new("does/not/exist.json"));
        assert_eq!(config, SimConfig::default());
    }

    #[test]
    fn test_interior_extents() {
        let config = SimConfig::default();
        assert_eq!(config.interior_half_width(), 600);
        assert_eq!(config.interior_half_height(), 320);
    }
}
