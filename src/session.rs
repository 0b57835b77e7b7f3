//! Game session: the loop driver
//!
//! A `Session` owns the game state and its random source. Each frame runs
//! one simulation tick followed by one render. The host decides when frames
//! happen (display refresh in the browser, a fixed count when headless) and
//! feeds pointer moves in between.

use rand_pcg::Pcg32;

use crate::config::Config;
use crate::error::ConfigError;
use crate::input::{PointerMove, SurfaceRect, apply_pointer};
use crate::render::{Surface, render};
use crate::sim::{GameState, RandomSource, TickEvents, seeded, tick};

pub struct Session<R: RandomSource = Pcg32> {
    state: GameState,
    rng: R,
    running: bool,
}

impl Session<Pcg32> {
    /// Session with the default PCG generator seeded from `seed`
    pub fn new(config: Config, seed: u64) -> Result<Self, ConfigError> {
        log::info!("New session with seed: {}", seed);
        Self::with_rng(config, seeded(seed))
    }
}

impl<R: RandomSource> Session<R> {
    /// Session drawing its randomness from `rng`. Starts stopped.
    pub fn with_rng(config: Config, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = GameState::new(config, &mut rng);
        Ok(Self {
            state,
            rng,
            running: false,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        if !self.running {
            self.running = true;
            log::info!("Session started at tick {}", self.state.time_ticks);
        }
    }

    pub fn stop(&mut self) {
        if self.running {
            self.running = false;
            log::info!(
                "Session stopped at tick {} ({} serves)",
                self.state.time_ticks,
                self.state.resets
            );
        }
    }

    /// Apply a pointer move to the player paddle; takes effect on the next tick
    pub fn pointer_moved(&mut self, event: PointerMove, rect: SurfaceRect) {
        apply_pointer(&mut self.state, event, rect);
    }

    /// Run one frame (tick then render). Does nothing while stopped.
    pub fn frame(&mut self, surface: &mut impl Surface) -> Option<TickEvents> {
        if !self.running {
            return None;
        }

        let events = tick(&mut self.state, &mut self.rng);
        if events.player_hit || events.opponent_hit {
            log::trace!(
                "Paddle hit at tick {}: vel = {:?}",
                self.state.time_ticks,
                self.state.ball.vel
            );
        }
        if events.reset {
            log::debug!(
                "Ball out at tick {}, serving again (vel = {:?})",
                self.state.time_ticks,
                self.state.ball.vel
            );
        }

        render(&self.state, surface);
        Some(events)
    }

    /// Run up to `frames` frames, stopping early if the session is stopped.
    /// Returns the number of frames actually run.
    pub fn run_frames(&mut self, frames: u64, surface: &mut impl Surface) -> u64 {
        let mut ran = 0;
        while ran < frames && self.frame(surface).is_some() {
            ran += 1;
        }
        ran
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, RecordingSurface};
    use crate::sim::ScriptedSource;

    #[test]
    fn test_stopped_session_does_not_advance() {
        let mut session = Session::new(Config::default(), 1).unwrap();
        let mut surface = RecordingSurface::new();

        assert!(!session.is_running());
        assert!(session.frame(&mut surface).is_none());
        assert_eq!(session.run_frames(10, &mut surface), 0);
        assert_eq!(session.state().time_ticks, 0);
        assert!(surface.commands.is_empty());
    }

    #[test]
    fn test_run_frames_advances_exactly() {
        let mut session = Session::new(Config::default(), 1).unwrap();
        let mut surface = RecordingSurface::new();
        session.start();

        assert_eq!(session.run_frames(25, &mut surface), 25);
        assert_eq!(session.state().time_ticks, 25);
        let clears = surface
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::ClearRect { .. }))
            .count();
        assert_eq!(clears, 25);

        session.stop();
        assert_eq!(session.run_frames(5, &mut surface), 0);
        assert_eq!(session.state().time_ticks, 25);
    }

    #[test]
    fn test_pointer_applies_before_next_tick() {
        let rng = ScriptedSource::new(&[0.9, 0.5]);
        let mut session = Session::with_rng(Config::default(), rng).unwrap();
        let mut surface = RecordingSurface::new();
        session.start();

        session.pointer_moved(
            PointerMove { client_y: 120.0 },
            SurfaceRect { top: 20.0 },
        );
        session.frame(&mut surface);

        assert_eq!(session.state().player.y, 50.0);
        assert!(surface.commands.contains(&DrawCommand::FillRect {
            x: 20.0,
            y: 50.0,
            w: 15.0,
            h: 100.0
        }));
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = Session::new(Config::default(), 99999).unwrap();
        let mut b = Session::new(Config::default(), 99999).unwrap();
        let mut surface = RecordingSurface::new();
        a.start();
        b.start();

        a.run_frames(500, &mut surface);
        b.run_frames(500, &mut surface);

        assert_eq!(a.state().ball, b.state().ball);
        assert_eq!(a.state().opponent, b.state().opponent);
        assert_eq!(a.state().resets, b.state().resets);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = Config::with_surface(800.0, 50.0);
        assert!(Session::new(config, 1).is_err());
    }

    #[test]
    fn test_paddles_stay_on_surface_over_long_run() {
        let mut session = Session::new(Config::default(), 2024).unwrap();
        let mut surface = RecordingSurface::new();
        session.start();

        for i in 0..2000u32 {
            if i % 7 == 0 {
                session.pointer_moved(
                    PointerMove { client_y: ((i * 37) % 600) as f32 - 100.0 },
                    SurfaceRect::default(),
                );
            }
            session.frame(&mut surface);
            surface.clear();

            let state = session.state();
            let max_y = state.config.max_paddle_y();
            assert!((0.0..=max_y).contains(&state.player.y));
            assert!((0.0..=max_y).contains(&state.opponent.y));
        }
    }
}
