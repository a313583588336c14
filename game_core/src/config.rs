use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::components::Color;
use crate::error::GameError;
use crate::params::Params;

/// How the ball turns elapsed time into movement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum MotionModel {
    /// Move `speed` pixels every update, whatever the frame time
    #[default]
    PerFrame,
    /// Move `speed * delta_millis` pixels
    TimeScaled,
}

/// Starting direction of the ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DirectionPolicy {
    /// Always (+1, +1)
    #[default]
    Fixed,
    /// Each axis drawn from the seeded game RNG
    Random,
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub court_width: f64,
    pub court_height: f64,
    pub wall_thickness: f64,
    pub paddle_width: f64,
    pub paddle_height: f64,
    pub paddle_speed: f64,
    pub paddle_inset: f64,
    pub ball_width: f64,
    pub ball_height: f64,
    pub ball_speed: f64,
    pub ball_color: Color,
    pub motion: MotionModel,
    pub direction: DirectionPolicy,
    pub seed: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            court_width: Params::COURT_WIDTH,
            court_height: Params::COURT_HEIGHT,
            wall_thickness: Params::WALL_THICKNESS,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_inset: Params::PADDLE_INSET,
            ball_width: Params::BALL_WIDTH,
            ball_height: Params::BALL_HEIGHT,
            ball_speed: Params::BALL_SPEED,
            ball_color: Color::YELLOW,
            motion: MotionModel::default(),
            direction: DirectionPolicy::default(),
            seed: Params::SEED,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a JSON config. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String, GameError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), GameError> {
        if !self.ball_speed.is_finite() || self.ball_speed < 0.0 {
            return Err(GameError::InvalidSpeed(self.ball_speed));
        }
        let dimensions = [
            ("court_width", self.court_width),
            ("court_height", self.court_height),
            ("wall_thickness", self.wall_thickness),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("paddle_inset", self.paddle_inset),
            ("ball_width", self.ball_width),
            ("ball_height", self.ball_height),
        ];
        for (name, value) in dimensions {
            if !value.is_finite() || value < 0.0 {
                return Err(GameError::InvalidConfig(format!(
                    "{} must be finite and non-negative, got {}",
                    name, value
                )));
            }
        }
        // A paddle whose x reach overlaps a side wall's reach would flip the
        // ball twice in one frame, cancelling the bounce
        let ball_half = self.ball_width / 2.0;
        let wall_reach = self.wall_thickness / 2.0 + ball_half;
        let paddle_reach = self.paddle_inset - self.paddle_width / 2.0 - ball_half;
        if paddle_reach <= wall_reach {
            return Err(GameError::InvalidConfig(format!(
                "paddle_inset {} puts the paddle within reach of the side wall",
                self.paddle_inset
            )));
        }
        if self.paddle_height > self.court_height {
            return Err(GameError::InvalidConfig(format!(
                "paddle_height {} exceeds court_height {}",
                self.paddle_height, self.court_height
            )));
        }
        Ok(())
    }
}
