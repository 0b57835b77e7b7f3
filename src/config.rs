//! Simulation configuration
//!
//! Every constant the simulation reads, fixed for the life of a session.
//! Defaults come from [`crate::consts`]; any field may be overridden from JSON.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Simulation constants for one session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Drawing surface size in pixels
    pub surface_width: f32,
    pub surface_height: f32,

    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Horizontal gap between each paddle and its edge of the surface
    pub paddle_inset: f32,
    /// Reactive paddle moves `paddle_speed * tracking_factor` per tick
    pub paddle_speed: f32,

    /// Ball side length
    pub ball_size: f32,
    /// Horizontal speed after a reset, and bound on vertical speed
    pub ball_speed: f32,

    pub spin_factor: f32,
    pub tracking_factor: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            surface_width: SURFACE_WIDTH,
            surface_height: SURFACE_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_inset: PADDLE_INSET,
            paddle_speed: PADDLE_SPEED,
            ball_size: BALL_SIZE,
            ball_speed: BALL_SPEED,
            spin_factor: SPIN_FACTOR,
            tracking_factor: TRACKING_FACTOR,
        }
    }
}

impl Config {
    /// Default constants on a surface of the given size
    pub fn with_surface(width: f32, height: f32) -> Self {
        Self {
            surface_width: width,
            surface_height: height,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON object; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the constants describe a playable field
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("surface_width", self.surface_width),
            ("surface_height", self.surface_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("paddle_speed", self.paddle_speed),
            ("ball_size", self.ball_size),
            ("ball_speed", self.ball_speed),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive(field));
            }
        }
        // Zero is playable for these: flush paddles, no spin, a still opponent
        let non_negative = [
            ("paddle_inset", self.paddle_inset),
            ("spin_factor", self.spin_factor),
            ("tracking_factor", self.tracking_factor),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::Negative(field));
            }
        }

        if self.paddle_height > self.surface_height {
            return Err(ConfigError::PaddleTooTall);
        }
        if self.ball_size >= self.surface_width || self.ball_size >= self.surface_height {
            return Err(ConfigError::BallTooLarge);
        }
        if self.opponent_x() - (self.player_x() + self.paddle_width) < self.ball_size {
            return Err(ConfigError::PaddlesOverlap);
        }
        Ok(())
    }

    /// Fixed X of the pointer-controlled paddle (left side)
    #[inline]
    pub fn player_x(&self) -> f32 {
        self.paddle_inset
    }

    /// Fixed X of the reactive paddle (right side)
    #[inline]
    pub fn opponent_x(&self) -> f32 {
        self.surface_width - self.paddle_width - self.paddle_inset
    }

    /// Largest valid paddle Y
    #[inline]
    pub fn max_paddle_y(&self) -> f32 {
        self.surface_height - self.paddle_height
    }

    /// Top-left corner that centers the ball on the surface
    #[inline]
    pub fn ball_center_position(&self) -> (f32, f32) {
        (
            self.surface_width / 2.0 - self.ball_size / 2.0,
            self.surface_height / 2.0 - self.ball_size / 2.0,
        )
    }
}
