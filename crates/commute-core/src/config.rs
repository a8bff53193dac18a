use crate::app_config::{AppConfig, Environment, DEFAULT_RING_RADII_M};
use crate::{ConfigError, Coordinate};

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a variable is set to an invalid value.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable has a default, so an empty environment yields a usable config.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let invalid = |var: &str, reason: String| ConfigError::InvalidEnvVar {
        var: var.to_string(),
        reason,
    };

    let parse_f64 = |var: &str, default: &str| -> Result<f64, ConfigError> {
        let raw = or_default(var, default);
        let value = raw
            .trim()
            .parse::<f64>()
            .map_err(|e| invalid(var, e.to_string()))?;
        if value.is_finite() {
            Ok(value)
        } else {
            Err(invalid(var, format!("{raw} is not a finite number")))
        }
    };

    let env = parse_environment(&or_default("COMMUTE_ENV", "development"))?;
    let log_level = or_default("COMMUTE_LOG_LEVEL", "info");

    let raw_count = or_default("COMMUTE_CANDIDATE_COUNT", "100");
    let count = raw_count
        .trim()
        .parse::<i64>()
        .map_err(|e| invalid("COMMUTE_CANDIDATE_COUNT", e.to_string()))?;
    let candidate_count = usize::try_from(count).map_err(|_| {
        invalid(
            "COMMUTE_CANDIDATE_COUNT",
            format!("{count} is negative; expected a count of zero or more"),
        )
    })?;

    let default_reference = Coordinate::new(
        parse_f64("COMMUTE_DEFAULT_LAT", "43.45")?,
        parse_f64("COMMUTE_DEFAULT_LNG", "-80.49")?,
    );

    let rng_seed = match lookup("COMMUTE_RNG_SEED") {
        Ok(raw) => Some(
            raw.trim()
                .parse::<u64>()
                .map_err(|e| invalid("COMMUTE_RNG_SEED", e.to_string()))?,
        ),
        Err(_) => None,
    };

    let ring_radii_m = match lookup("COMMUTE_RING_RADII_M") {
        Ok(raw) => parse_ring_radii(&raw)?,
        Err(_) => DEFAULT_RING_RADII_M,
    };

    Ok(AppConfig {
        env,
        log_level,
        candidate_count,
        default_reference,
        rng_seed,
        ring_radii_m,
    })
}

/// Parse a string into an `Environment` variant.
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvVar` for anything other than
/// `development`, `test` or `production`.
fn parse_environment(s: &str) -> Result<Environment, ConfigError> {
    match s {
        "development" => Ok(Environment::Development),
        "test" => Ok(Environment::Test),
        "production" => Ok(Environment::Production),
        other => Err(ConfigError::InvalidEnvVar {
            var: "COMMUTE_ENV".to_string(),
            reason: format!("unknown environment '{other}'"),
        }),
    }
}

/// Parse `"close,middle,far"` ring radii in meters.
///
/// Radii must be finite, positive and strictly increasing so the rings nest.
fn parse_ring_radii(raw: &str) -> Result<[f64; 3], ConfigError> {
    const VAR: &str = "COMMUTE_RING_RADII_M";
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        var: VAR.to_string(),
        reason,
    };

    let values = raw
        .split(',')
        .map(|part| part.trim().parse::<f64>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| invalid(e.to_string()))?;

    let radii: [f64; 3] = values
        .try_into()
        .map_err(|v: Vec<f64>| invalid(format!("expected 3 radii, got {}", v.len())))?;

    if radii.iter().any(|r| !r.is_finite() || *r <= 0.0) {
        return Err(invalid(format!("radii must be positive: {raw}")));
    }
    if !(radii[0] < radii[1] && radii[1] < radii[2]) {
        return Err(invalid(format!("radii must be strictly increasing: {raw}")));
    }

    Ok(radii)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
