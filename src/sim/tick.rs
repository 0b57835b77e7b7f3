//! Per-tick simulation update
//!
//! Advances the game by one fixed step. The order of the phases matters:
//! paddle collisions are resolved against the already-moved ball, and the
//! out-of-bounds check runs after them so it always has the final say.

use super::collision::ball_hits_paddle;
use super::rng::RandomSource;
use super::state::{GameState, Paddle};
use crate::config::Config;

/// What happened during a tick (for logging; no gameplay effect)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    pub top_bounce: bool,
    pub bottom_bounce: bool,
    pub player_hit: bool,
    pub opponent_hit: bool,
    /// Ball left the field and was served again
    pub reset: bool,
}

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, rng: &mut impl RandomSource) -> TickEvents {
    let config = state.config;
    let mut events = TickEvents::default();

    state.time_ticks += 1;

    // Integrate
    state.ball.pos += state.ball.vel;

    // Top and bottom walls are independent checks
    if state.ball.top() <= 0.0 {
        state.ball.pos.y = 0.0;
        state.ball.vel.y = -state.ball.vel.y;
        events.top_bounce = true;
    }
    if state.ball.bottom() >= config.surface_height {
        state.ball.pos.y = config.surface_height - state.ball.size;
        state.ball.vel.y = -state.ball.vel.y;
        events.bottom_bounce = true;
    }

    // Player paddle: push the ball out to the right
    if ball_hits_paddle(&state.ball, &state.player, &config) {
        state.ball.pos.x = state.player.x + config.paddle_width;
        state.ball.vel.x = -state.ball.vel.x;
        let kick = spin(state, &state.player);
        state.ball.vel.y += kick;
        events.player_hit = true;
    }

    // Opponent paddle: push the ball out to the left
    if ball_hits_paddle(&state.ball, &state.opponent, &config) {
        state.ball.pos.x = state.opponent.x - state.ball.size;
        state.ball.vel.x = -state.ball.vel.x;
        let kick = spin(state, &state.opponent);
        state.ball.vel.y += kick;
        events.opponent_hit = true;
    }

    if state.ball.left() < 0.0 || state.ball.right() > config.surface_width {
        state.ball.reset(&config, rng);
        state.resets += 1;
        events.reset = true;
    }

    move_opponent(state);

    events
}

/// Vertical velocity added by a paddle contact.
///
/// Proportional to how far the ball center sits from the paddle center.
/// Not clamped: repeated off-center hits keep accumulating.
fn spin(state: &GameState, paddle: &Paddle) -> f32 {
    let offset = state.ball.center_y() - paddle.center_y(&state.config);
    offset * state.config.spin_factor
}

/// Step the reactive paddle toward the ball.
///
/// Tracks the ball's top edge rather than its center.
fn move_opponent(state: &mut GameState) {
    let config: Config = state.config;
    let step = config.paddle_speed * config.tracking_factor;
    let center = state.opponent.center_y(&config);
    let target = state.ball.pos.y;

    let y = if center < target {
        state.opponent.y + step
    } else if center > target {
        state.opponent.y - step
    } else {
        state.opponent.y
    };
    state.opponent.set_y(y, &config);
}
