//! Pointer input
//!
//! Maps pointer positions to the player paddle. The host calls this whenever
//! a move event arrives, independently of the tick loop; the simulation just
//! reads whatever paddle position was applied last.

use serde::{Deserialize, Serialize};

use crate::sim::GameState;

/// A pointer move in viewport (client) coordinates.
///
/// Only the vertical position drives the paddle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerMove {
    pub client_y: f32,
}

/// Top edge of the drawing surface in the viewport
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SurfaceRect {
    pub top: f32,
}

/// Center the player paddle on the pointer, clamped to the surface
pub fn apply_pointer(state: &mut GameState, event: PointerMove, rect: SurfaceRect) {
    let pointer_y = event.client_y - rect.top;
    let config = state.config;
    state
        .player
        .set_y(pointer_y - config.paddle_height / 2.0, &config);
}
