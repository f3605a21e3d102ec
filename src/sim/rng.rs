//! Injectable random source
//!
//! Drop jitter and the post-collision kick are the only random inputs to the
//! simulation. Production engines use a `Pcg32` seeded from OS entropy; tests
//! seed it explicitly or script the exact samples.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of uniform samples for the simulation
pub trait RandomSource {
    /// Uniform sample in `[0, 1)`
    fn next_unit(&mut self) -> f32;

    /// Uniform sample in `[-half_range, half_range)`
    fn symmetric(&mut self, half_range: f32) -> f32 {
        (self.next_unit() * 2.0 - 1.0) * half_range
    }
}

impl RandomSource for Pcg32 {
    fn next_unit(&mut self) -> f32 {
        self.random::<f32>()
    }
}

/// Deterministic generator for reproducible runs
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Generator seeded from the thread-local entropy source
pub fn from_entropy() -> Pcg32 {
    Pcg32::from_rng(&mut rand::rng())
}

/// Replays a fixed list of samples, cycling when exhausted
///
/// An empty script yields 0.5, which maps to zero for every `symmetric` draw.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    values: Vec<f32>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(values: impl Into<Vec<f32>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// No jitter, no kicks
    pub fn neutral() -> Self {
        Self::default()
    }

    /// Number of samples drawn so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f32 {
        if self.values.is_empty() {
            self.cursor += 1;
            return 0.5;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(0.0, 1.0 - f32::EPSILON)
    }
}
