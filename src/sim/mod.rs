//! Simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Fixed per-tick increments only
//! - Randomness only through a `RandomSource`
//! - No rendering or platform dependencies

pub mod collision;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{ball_hits_paddle, overlaps};
pub use rng::{RandomSource, ScriptedSource, seeded};
pub use state::{Ball, GameState, Paddle};
pub use tick::{TickEvents, tick};
