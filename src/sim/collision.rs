//! Collision detection between the ball and paddles
//!
//! Everything on the field is an axis-aligned rectangle, so a single
//! overlap test covers both paddles.

use super::state::{Ball, Paddle};
use crate::config::Config;

/// Check whether the ball overlaps a paddle rectangle at `(paddle_x, paddle_y)`.
///
/// All comparisons are strict: a ball whose edge exactly touches a paddle
/// edge is not overlapping.
pub fn overlaps(
    ball: &Ball,
    paddle_x: f32,
    paddle_y: f32,
    paddle_width: f32,
    paddle_height: f32,
) -> bool {
    let paddle_left = paddle_x;
    let paddle_right = paddle_x + paddle_width;
    let paddle_top = paddle_y;
    let paddle_bottom = paddle_y + paddle_height;

    ball.right() > paddle_left
        && ball.left() < paddle_right
        && ball.bottom() > paddle_top
        && ball.top() < paddle_bottom
}

/// [`overlaps`] against a paddle using the configured paddle size
#[inline]
pub fn ball_hits_paddle(ball: &Ball, paddle: &Paddle, config: &Config) -> bool {
    overlaps(
        ball,
        paddle.x,
        paddle.y,
        config.paddle_width,
        config.paddle_height,
    )
}
