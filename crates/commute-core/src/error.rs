use thiserror::Error;

/// Errors raised by point generation and nearest-point search.
#[derive(Debug, Error, PartialEq)]
pub enum GeoError {
    #[error("cannot pick a nearest point from an empty candidate set")]
    EmptyInput,

    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument { name: String, reason: String },
}

impl GeoError {
    /// Shorthand for [`GeoError::InvalidArgument`].
    pub fn invalid_argument(name: &str, reason: impl Into<String>) -> Self {
        GeoError::InvalidArgument {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for environment variable {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
