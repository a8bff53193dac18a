//! Seams to the mapping services this crate does not own.

use std::future::Future;

use commute_core::Coordinate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeocodeError {
    #[error("no address found at {at}")]
    NoResults { at: Coordinate },

    #[error("geocoding service error: {0}")]
    Service(String),
}

/// Turns a coordinate into a human-readable address.
pub trait ReverseGeocoder {
    fn reverse_geocode(
        &self,
        at: Coordinate,
    ) -> impl Future<Output = Result<String, GeocodeError>> + Send;
}

/// Shows a short message to the user (toast, log line, ...).
pub trait Notifier {
    fn notify(&self, message: &str);
}
