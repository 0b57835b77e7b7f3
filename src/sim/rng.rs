//! Randomness for ball serves
//!
//! The simulation only ever asks for uniform values in `[0, 1)`, so any
//! source that can produce those plugs in. Sessions use a seeded PCG;
//! tests script exact values.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of uniform values in `[0, 1)`
pub trait RandomSource {
    fn next_unit(&mut self) -> f32;
}

impl RandomSource for Pcg32 {
    fn next_unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Create the default generator for a run seed
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Replays a fixed list of values, cycling when exhausted
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: Vec<f32>,
    cursor: usize,
}

impl ScriptedSource {
    /// Values outside `[0, 1)` are clamped into range
    pub fn new(values: &[f32]) -> Self {
        let mut values: Vec<f32> = values
            .iter()
            .map(|v| v.clamp(0.0, 1.0 - f32::EPSILON))
            .collect();
        if values.is_empty() {
            values.push(0.0);
        }
        Self { values, cursor: 0 }
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f32 {
        let value = self.values[self.cursor];
        self.cursor = (self.cursor + 1) % self.values.len();
        value
    }
}
