//! Synthetic house generation around an office.
//!
//! Each house is displaced from the reference by `magnitude / scale` on each
//! axis, with `scale` drawn from `{-2, +2}` and `magnitude` from `[0, 1)`, so
//! every house sits within half a degree of the office on both axes.

use std::ops::Deref;

use commute_core::{Coordinate, GeoError};
use serde::Serialize;

use crate::random::RandomSource;

/// Houses generated per office when nothing else is configured.
pub const DEFAULT_CANDIDATE_COUNT: usize = 100;

const SCALE: f64 = 2.0;

/// Ordered, immutable set of generated houses.
///
/// Order is generation order and carries no spatial meaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CandidateSet(Vec<Coordinate>);

impl CandidateSet {
    #[must_use]
    pub fn as_slice(&self) -> &[Coordinate] {
        &self.0
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Coordinate> {
        self.0
    }
}

impl Deref for CandidateSet {
    type Target = [Coordinate];

    fn deref(&self) -> &[Coordinate] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a CandidateSet {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Convert a signed count from user input into a generation count.
///
/// # Errors
///
/// Returns [`GeoError::InvalidArgument`] when `raw` is negative.
pub fn candidate_count(raw: i64) -> Result<usize, GeoError> {
    usize::try_from(raw).map_err(|_| {
        GeoError::invalid_argument("count", format!("{raw} is negative; expected zero or more"))
    })
}

/// Generate `count` houses scattered around `reference`.
///
/// Draw order per house is latitude scale, latitude magnitude, longitude
/// scale, longitude magnitude; a seeded source therefore reproduces the same
/// set every time.
///
/// # Errors
///
/// Returns [`GeoError::InvalidArgument`] if `reference` is not finite or
/// `count` houses cannot be allocated. Nothing is drawn from `rng` in either
/// case.
pub fn generate<R>(
    reference: Coordinate,
    count: usize,
    rng: &mut R,
) -> Result<CandidateSet, GeoError>
where
    R: RandomSource + ?Sized,
{
    if !reference.is_finite() {
        return Err(GeoError::invalid_argument(
            "reference",
            format!("({reference}) is not finite"),
        ));
    }

    let mut houses = Vec::new();
    houses.try_reserve_exact(count).map_err(|e| {
        GeoError::invalid_argument("count", format!("cannot hold {count} houses: {e}"))
    })?;
    for _ in 0..count {
        let lat = reference.lat + offset(rng);
        let lng = reference.lng + offset(rng);
        houses.push(Coordinate::new(lat, lng));
    }

    tracing::debug!(count, %reference, "generated candidate houses");
    Ok(CandidateSet(houses))
}

fn offset<R: RandomSource + ?Sized>(rng: &mut R) -> f64 {
    let scale = if rng.next_unit() < 0.5 { -SCALE } else { SCALE };
    rng.next_unit() / scale
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    /// Replays a fixed list of draws.
    struct Scripted(VecDeque<f64>);

    impl Scripted {
        fn new(draws: &[f64]) -> Self {
            Self(draws.iter().copied().collect())
        }
    }

    impl RandomSource for Scripted {
        fn next_unit(&mut self) -> f64 {
            self.0.pop_front().expect("script ran out of draws")
        }
    }

    const OFFICE: Coordinate = Coordinate::new(43.45, -80.49);

    #[test]
    fn generates_exactly_count_houses() {
        let mut rng = StdRng::seed_from_u64(1);
        for count in [1, 2, 17, DEFAULT_CANDIDATE_COUNT] {
            let set = generate(OFFICE, count, &mut rng).unwrap();
            assert_eq!(set.len(), count);
        }
    }

    #[test]
    fn zero_count_is_empty() {
        let mut rng = StdRng::seed_from_u64(1);
        let set = generate(Coordinate::new(-12.0, 130.0), 0, &mut rng).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn houses_stay_within_half_a_degree() {
        let mut rng = StdRng::seed_from_u64(2024);
        let set = generate(OFFICE, 5_000, &mut rng).unwrap();
        for house in &set {
            assert!(
                house.lat >= OFFICE.lat - 0.5 && house.lat <= OFFICE.lat + 0.5,
                "lat out of range: {house}"
            );
            assert!(
                house.lng >= OFFICE.lng - 0.5 && house.lng <= OFFICE.lng + 0.5,
                "lng out of range: {house}"
            );
        }
    }

    #[test]
    fn scripted_draws_give_exact_offsets() {
        // lat: scale -2, magnitude 0.5; lng: scale +2, magnitude 0.25
        // lat: scale +2, magnitude 0.0; lng: scale -2, magnitude 0.5
        let mut rng = Scripted::new(&[0.1, 0.5, 0.9, 0.25, 0.5, 0.0, 0.0, 0.5]);
        let set = generate(Coordinate::new(10.0, 20.0), 2, &mut rng).unwrap();
        assert_eq!(
            set.as_slice(),
            &[Coordinate::new(9.75, 20.125), Coordinate::new(10.0, 19.75)]
        );
        assert!(rng.0.is_empty());
    }

    #[test]
    fn axes_pick_their_sign_independently() {
        let mut rng = Scripted::new(&[0.0, 0.5, 0.99, 0.5]);
        let set = generate(Coordinate::new(0.0, 0.0), 1, &mut rng).unwrap();
        assert_eq!(set[0], Coordinate::new(-0.25, 0.25));
    }

    #[test]
    fn same_seed_reproduces_the_set() {
        let a = generate(OFFICE, 50, &mut StdRng::seed_from_u64(5)).unwrap();
        let b = generate(OFFICE, 50, &mut StdRng::seed_from_u64(5)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn non_finite_reference_is_rejected_without_drawing() {
        let mut rng = Scripted::new(&[]);
        let err = generate(Coordinate::new(f64::NAN, 0.0), 3, &mut rng).unwrap_err();
        assert!(matches!(err, GeoError::InvalidArgument { ref name, .. } if name == "reference"));
    }

    #[test]
    fn unallocatable_count_is_rejected_without_drawing() {
        let mut rng = Scripted::new(&[]);
        let err = generate(OFFICE, usize::MAX, &mut rng).unwrap_err();
        assert!(matches!(err, GeoError::InvalidArgument { ref name, .. } if name == "count"));
    }

    #[test]
    fn candidate_count_accepts_zero_and_positive() {
        assert_eq!(candidate_count(0).unwrap(), 0);
        assert_eq!(candidate_count(100).unwrap(), 100);
    }

    #[test]
    fn candidate_count_rejects_negative() {
        let err = candidate_count(-1).unwrap_err();
        assert!(matches!(err, GeoError::InvalidArgument { ref name, .. } if name == "count"));
    }

    #[test]
    fn candidate_set_serializes_as_plain_array() {
        let mut rng = Scripted::new(&[0.9, 0.0, 0.9, 0.0]);
        let set = generate(Coordinate::new(1.0, 2.0), 1, &mut rng).unwrap();
        let json = serde_json::to_value(&set).unwrap();
        assert_eq!(json, serde_json::json!([{ "lat": 1.0, "lng": 2.0 }]));
    }
}
