//! Error types
//!
//! The simulation itself never fails; errors only come from setup
//! (configuration and acquiring the drawing surface).

use std::{error::Error, fmt::Display};

/// Invalid simulation constants
#[derive(Debug)]
pub enum ConfigError {
    /// A dimension or speed is zero, negative, NaN or infinite
    NonPositive(&'static str),
    /// A factor or offset is negative, NaN or infinite
    Negative(&'static str),
    /// Paddle is taller than the surface
    PaddleTooTall,
    /// Ball is larger than the surface in some direction
    BallTooLarge,
    /// The two paddles would overlap or leave no room for the ball
    PaddlesOverlap,
    /// Config text could not be parsed
    Json(serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NonPositive(field) => {
                write!(f, "`{field}` must be a positive finite number")
            }
            ConfigError::Negative(field) => {
                write!(f, "`{field}` must be a non-negative finite number")
            }
            ConfigError::PaddleTooTall => Display::fmt("paddle is taller than the surface", f),
            ConfigError::BallTooLarge => Display::fmt("ball does not fit on the surface", f),
            ConfigError::PaddlesOverlap => {
                Display::fmt("paddles leave no room between them for the ball", f)
            }
            ConfigError::Json(err) => Display::fmt(err, f),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::NonPositive(_)
            | ConfigError::Negative(_)
            | ConfigError::PaddleTooTall
            | ConfigError::BallTooLarge
            | ConfigError::PaddlesOverlap => None,
            ConfigError::Json(source) => Some(source),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Json(err)
    }
}

/// Failure to bring up the game in its host
#[derive(Debug)]
pub enum SetupError {
    /// No global `window` / `document`
    NoWindow,
    /// No element with the requested id, or it is not a canvas
    CanvasNotFound(String),
    /// The canvas refused to hand out a 2D context
    ContextUnavailable,
    /// The derived configuration is invalid
    Config(ConfigError),
}

impl Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SetupError::NoWindow => Display::fmt("no window or document available", f),
            SetupError::CanvasNotFound(id) => write!(f, "no canvas element with id `{id}`"),
            SetupError::ContextUnavailable => Display::fmt("2d drawing context unavailable", f),
            SetupError::Config(err) => write!(f, "invalid configuration: {err}"),
        }
    }
}

impl Error for SetupError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            SetupError::NoWindow
            | SetupError::CanvasNotFound(_)
            | SetupError::ContextUnavailable => None,
            SetupError::Config(source) => Some(source),
        }
    }
}

impl From<ConfigError> for SetupError {
    fn from(err: ConfigError) -> Self {
        SetupError::Config(err)
    }
}
