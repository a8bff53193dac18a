pub mod app_config;
pub mod config;
pub mod coordinate;
pub mod error;

pub use app_config::{AppConfig, Environment, DEFAULT_RING_RADII_M};
pub use config::{load_app_config, load_app_config_from_env};
pub use coordinate::Coordinate;
pub use error::{ConfigError, GeoError};
