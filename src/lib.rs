//! Canvas Pong - a two-paddle arcade game on a 2D canvas
//!
//! Core modules:
//! - `sim`: Simulation (state, collisions, per-tick update)
//! - `input`: Pointer position to player paddle mapping
//! - `render`: Flat-shape drawing over a `Surface`
//! - `session`: Loop driver owning state and randomness
//! - `config`: Validated simulation constants

pub mod config;
pub mod error;
pub mod input;
pub mod render;
pub mod session;
pub mod sim;

pub use config::Config;
pub use error::{ConfigError, SetupError};
pub use session::Session;

/// Game configuration constants
pub mod consts {
    /// Default surface dimensions
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 400.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    /// Gap between a paddle and its side of the surface
    pub const PADDLE_INSET: f32 = 20.0;
    pub const PADDLE_SPEED: f32 = 8.0;

    /// Ball defaults (square, side length)
    pub const BALL_SIZE: f32 = 16.0;
    pub const BALL_SPEED: f32 = 6.0;

    /// Vertical velocity added per unit of contact offset from paddle center
    pub const SPIN_FACTOR: f32 = 0.2;
    /// Fraction of paddle speed the reactive paddle moves per tick
    pub const TRACKING_FACTOR: f32 = 0.6;
}

/// Clamp a paddle's top edge into `[0, surface_height - paddle_height]`
#[inline]
pub fn clamp_paddle_y(y: f32, paddle_height: f32, surface_height: f32) -> f32 {
    y.max(0.0).min(surface_height - paddle_height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_paddle_y() {
        assert_eq!(clamp_paddle_y(-5.0, 100.0, 400.0), 0.0);
        assert_eq!(clamp_paddle_y(350.0, 100.0, 400.0), 300.0);
        assert_eq!(clamp_paddle_y(120.5, 100.0, 400.0), 120.5);
    }
}
