//! Injectable randomness for house generation.

/// Source of uniform draws in `[0, 1)`.
///
/// Any [`rand::Rng`] qualifies, so callers pass `rand::rng()` for the
/// thread-local generator or a seeded `StdRng` for reproducible layouts.
/// Tests can implement it directly to script exact draws.
pub trait RandomSource {
    /// Next value, uniformly distributed on `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<R: rand::Rng> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}
