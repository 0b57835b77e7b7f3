//! Game state and core simulation types
//!
//! Pure data: nothing in here draws, reads input or keeps time.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use crate::clamp_paddle_y;
use crate::config::Config;

/// The ball: an axis-aligned square
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner
    pub pos: Vec2,
    /// Displacement per tick
    pub vel: Vec2,
    /// Side length
    pub size: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self { pos, vel, size }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size / 2.0
    }

    /// Recenter on the surface and pick a new serve direction.
    ///
    /// Horizontal speed is always `ball_speed`, left or right with equal odds;
    /// vertical speed is uniform in `[-ball_speed, ball_speed]`.
    pub fn reset(&mut self, config: &Config, rng: &mut impl RandomSource) {
        let (x, y) = config.ball_center_position();
        let direction = if rng.next_unit() > 0.5 { 1.0 } else { -1.0 };
        let spread = rng.next_unit() * 2.0 - 1.0;

        self.size = config.ball_size;
        self.pos = Vec2::new(x, y);
        self.vel = Vec2::new(config.ball_speed * direction, config.ball_speed * spread);
    }
}

/// A vertical paddle; X never changes after creation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    /// Top edge, kept within `[0, surface_height - paddle_height]`
    pub y: f32,
}

impl Paddle {
    /// A paddle at `x`, centered vertically
    pub fn centered(x: f32, config: &Config) -> Self {
        Self {
            x,
            y: config.surface_height / 2.0 - config.paddle_height / 2.0,
        }
    }

    #[inline]
    pub fn center_y(&self, config: &Config) -> f32 {
        self.y + config.paddle_height / 2.0
    }

    /// Move the top edge to `y`, clamped onto the surface
    pub fn set_y(&mut self, y: f32, config: &Config) {
        self.y = clamp_paddle_y(y, config.paddle_height, config.surface_height);
    }
}

/// Complete simulation state for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub config: Config,
    /// Pointer-controlled paddle (left)
    pub player: Paddle,
    /// Reactive paddle (right)
    pub opponent: Paddle,
    pub ball: Ball,
    /// Ticks simulated so far
    pub time_ticks: u64,
    /// Times the ball left the field and was served again
    pub resets: u64,
}

impl GameState {
    /// Paddles centered, ball served from the middle
    pub fn new(config: Config, rng: &mut impl RandomSource) -> Self {
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO, config.ball_size);
        ball.reset(&config, rng);

        Self {
            player: Paddle::centered(config.player_x(), &config),
            opponent: Paddle::centered(config.opponent_x(), &config),
            ball,
            time_ticks: 0,
            resets: 0,
            config,
        }
    }
}
