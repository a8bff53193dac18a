use crate::Coordinate;

/// Radii of the close, middle and far commute rings, in meters.
pub const DEFAULT_RING_RADII_M: [f64; 3] = [15_000.0, 30_000.0, 45_000.0];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub env: Environment,
    pub log_level: String,
    /// Houses generated around each office.
    pub candidate_count: usize,
    /// Office used before the user picks an address.
    pub default_reference: Coordinate,
    /// Seed for reproducible house layouts; thread-local randomness when unset.
    pub rng_seed: Option<u64>,
    pub ring_radii_m: [f64; 3],
}
