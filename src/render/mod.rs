//! Rendering
//!
//! Draws the field as flat shapes through the [`Surface`] trait. Rendering
//! only reads the game state.

#[cfg(target_arch = "wasm32")]
pub mod canvas;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasSurface;

use crate::sim::GameState;

/// Output-only 2D drawing sink (a subset of the canvas 2D context)
pub trait Surface {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
    /// Alternating dash/gap lengths; empty means a solid line
    fn set_line_dash(&mut self, segments: &[f32]);
    fn set_stroke_style(&mut self, color: &str);
    fn set_fill_style(&mut self, color: &str);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn stroke(&mut self);
    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32);
}

/// Colors for game elements (CSS color strings)
pub mod colors {
    pub const CENTER_LINE: &str = "#888";
    pub const PADDLE: &str = "#fff";
    pub const BALL: &str = "#f00";
}

/// Dash pattern of the center line
pub const CENTER_LINE_DASH: [f32; 2] = [12.0, 12.0];

/// Draw one frame: center line, then paddles, then ball
pub fn render(state: &GameState, surface: &mut impl Surface) {
    let config = &state.config;
    let (width, height) = (config.surface_width, config.surface_height);

    surface.clear_rect(0.0, 0.0, width, height);

    // Dashed center line
    surface.set_line_dash(&CENTER_LINE_DASH);
    surface.set_stroke_style(colors::CENTER_LINE);
    surface.begin_path();
    surface.move_to(width / 2.0, 0.0);
    surface.line_to(width / 2.0, height);
    surface.stroke();
    surface.set_line_dash(&[]);

    // Paddles
    surface.set_fill_style(colors::PADDLE);
    for paddle in [&state.player, &state.opponent] {
        surface.fill_rect(paddle.x, paddle.y, config.paddle_width, config.paddle_height);
    }

    // Ball
    let ball = &state.ball;
    surface.set_fill_style(colors::BALL);
    surface.fill_rect(ball.pos.x, ball.pos.y, ball.size, ball.size);
}

/// A recorded drawing call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    ClearRect { x: f32, y: f32, w: f32, h: f32 },
    SetLineDash(Vec<f32>),
    SetStrokeStyle(String),
    SetFillStyle(String),
    BeginPath,
    MoveTo { x: f32, y: f32 },
    LineTo { x: f32, y: f32 },
    Stroke,
    FillRect { x: f32, y: f32, w: f32, h: f32 },
}

/// Surface that records every call instead of drawing (headless runs, tests)
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything recorded so far
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Surface for RecordingSurface {
    fn clear_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::ClearRect { x, y, w, h });
    }

    fn set_line_dash(&mut self, segments: &[f32]) {
        self.commands.push(DrawCommand::SetLineDash(segments.to_vec()));
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.commands.push(DrawCommand::SetStrokeStyle(color.to_owned()));
    }

    fn set_fill_style(&mut self, color: &str) {
        self.commands.push(DrawCommand::SetFillStyle(color.to_owned()));
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(DrawCommand::LineTo { x, y });
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32) {
        self.commands.push(DrawCommand::FillRect { x, y, w, h });
    }
}
