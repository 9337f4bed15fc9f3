//! Injectable randomness for the series generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform draws in `[0, 1)`.
///
/// The generator takes its randomness through this trait so tests can
/// substitute a deterministic source.
pub trait NoiseSource {
    fn unit(&mut self) -> f64;
}

/// Thread-local RNG, the production source.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadNoise;

impl NoiseSource for ThreadNoise {
    fn unit(&mut self) -> f64 {
        rand::thread_rng().gen()
    }
}

/// Reproducible RNG seeded from a fixed value.
#[derive(Debug, Clone)]
pub struct SeededNoise(StdRng);

impl SeededNoise {
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl NoiseSource for SeededNoise {
    fn unit(&mut self) -> f64 {
        self.0.gen()
    }
}

/// Source that returns the same value on every draw. Test double.
#[derive(Debug, Clone, Copy)]
pub struct ConstNoise(pub f64);

impl NoiseSource for ConstNoise {
    fn unit(&mut self) -> f64 {
        self.0
    }
}
