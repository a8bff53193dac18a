//! Office-change handling.
//!
//! A [`CommuteSession`] owns the houses and nearest house for the current
//! office. Each distinct office delivered by the address search produces
//! exactly one new [`Snapshot`]; repeats of the current office are ignored,
//! so downstream work such as the nearest-house announcement runs once per
//! change.

use commute_core::{Coordinate, GeoError};
use serde::Serialize;

use crate::collaborators::{GeocodeError, Notifier, ReverseGeocoder};
use crate::generator::{generate, CandidateSet, DEFAULT_CANDIDATE_COUNT};
use crate::nearest::find_nearest;
use crate::random::RandomSource;
use crate::route::RouteRequest;

/// Houses and nearest house computed for one office.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub reference: Coordinate,
    pub candidates: CandidateSet,
    /// `None` only when the session generates zero houses.
    pub nearest: Option<Coordinate>,
}

#[derive(Debug)]
pub struct CommuteSession {
    candidate_count: usize,
    current: Option<Snapshot>,
}

impl Default for CommuteSession {
    fn default() -> Self {
        Self::new(DEFAULT_CANDIDATE_COUNT)
    }
}

impl CommuteSession {
    #[must_use]
    pub fn new(candidate_count: usize) -> Self {
        Self {
            candidate_count,
            current: None,
        }
    }

    #[must_use]
    pub fn candidate_count(&self) -> usize {
        self.candidate_count
    }

    #[must_use]
    pub fn current(&self) -> Option<&Snapshot> {
        self.current.as_ref()
    }

    /// Handle an office selected by the address search.
    ///
    /// Returns `Ok(None)` when `reference` equals the current office. Otherwise
    /// the previous houses are dropped, a fresh set is generated, the nearest
    /// house recomputed and the new snapshot returned.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::InvalidArgument`] for a non-finite `reference`; the
    /// current snapshot is left untouched.
    pub fn on_reference_changed<R>(
        &mut self,
        reference: Coordinate,
        rng: &mut R,
    ) -> Result<Option<&Snapshot>, GeoError>
    where
        R: RandomSource + ?Sized,
    {
        if self
            .current
            .as_ref()
            .is_some_and(|snapshot| snapshot.reference == reference)
        {
            tracing::debug!(%reference, "office unchanged, skipping regeneration");
            return Ok(None);
        }

        let candidates = generate(reference, self.candidate_count, rng)?;
        let nearest = match find_nearest(reference, &candidates) {
            Ok(house) => Some(house),
            Err(GeoError::EmptyInput) => None,
            Err(e) => return Err(e),
        };

        tracing::info!(
            %reference,
            houses = candidates.len(),
            nearest = ?nearest,
            "office changed"
        );

        let snapshot: &Snapshot = self.current.insert(Snapshot {
            reference,
            candidates,
            nearest,
        });
        Ok(Some(snapshot))
    }

    /// Directions request from house `index` to the current office.
    ///
    /// # Errors
    ///
    /// Returns [`GeoError::InvalidArgument`] when no office has been set yet or
    /// `index` is past the end of the current houses.
    pub fn route_from(&self, index: usize) -> Result<RouteRequest, GeoError> {
        let snapshot = self
            .current
            .as_ref()
            .ok_or_else(|| GeoError::invalid_argument("reference", "no office selected yet"))?;

        let house = snapshot.candidates.get(index).ok_or_else(|| {
            GeoError::invalid_argument(
                "index",
                format!(
                    "house {index} does not exist; {} houses generated",
                    snapshot.candidates.len()
                ),
            )
        })?;

        Ok(RouteRequest::driving(*house, snapshot.reference))
    }
}

/// Look up the nearest house's address and tell the user about it.
///
/// Call once per snapshot returned by [`CommuteSession::on_reference_changed`].
/// Returns the message that was sent.
///
/// # Errors
///
/// Propagates the geocoder's error; nothing is sent to `notifier` then.
pub async fn announce_nearest<G, N>(
    nearest: Coordinate,
    geocoder: &G,
    notifier: &N,
) -> Result<String, GeocodeError>
where
    G: ReverseGeocoder,
    N: Notifier + ?Sized,
{
    let address = geocoder.reverse_geocode(nearest).await?;
    let message = format!("Nearest store at {address}");
    notifier.notify(&message);
    Ok(message)
}
