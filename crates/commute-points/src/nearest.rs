//! Nearest-house search.
//!
//! The score collapses each point to the sum of its axes and compares
//! magnitudes of those sums. It is not a distance: a house on the far side
//! of the office whose axis sum matches is reported as "nearest". Output
//! stability matters more than geometric correctness here, so the proxy is
//! kept as is.

use std::cmp::Ordering;

use commute_core::{Coordinate, GeoError};

/// `| |reference.lat + reference.lng| - |candidate.lat + candidate.lng| |`
///
/// Lower is nearer. NaN when either point is not finite.
#[must_use]
pub fn proximity_score(reference: Coordinate, candidate: Coordinate) -> f64 {
    (reference.axis_sum().abs() - candidate.axis_sum().abs()).abs()
}

/// Position of the lowest-scoring candidate.
///
/// Ties go to the earliest candidate. NaN scores rank after every number.
///
/// # Errors
///
/// Returns [`GeoError::EmptyInput`] when `candidates` is empty.
pub fn find_nearest_index(
    reference: Coordinate,
    candidates: &[Coordinate],
) -> Result<usize, GeoError> {
    let mut scores = candidates
        .iter()
        .map(|c| proximity_score(reference, *c))
        .enumerate();

    let (mut best_index, mut best_score) = scores.next().ok_or(GeoError::EmptyInput)?;
    for (index, score) in scores {
        if score.total_cmp(&best_score) == Ordering::Less {
            best_index = index;
            best_score = score;
        }
    }

    Ok(best_index)
}

/// The candidate nearest to `reference` under [`proximity_score`].
///
/// # Errors
///
/// Returns [`GeoError::EmptyInput`] when `candidates` is empty.
pub fn find_nearest(
    reference: Coordinate,
    candidates: &[Coordinate],
) -> Result<Coordinate, GeoError> {
    let index = find_nearest_index(reference, candidates)?;
    Ok(candidates[index])
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::generator::generate;

    fn c(lat: f64, lng: f64) -> Coordinate {
        Coordinate::new(lat, lng)
    }

    #[test]
    fn score_matches_axis_sum_difference() {
        let origin = c(0.0, 0.0);
        assert_eq!(proximity_score(origin, c(1.0, 1.0)), 2.0);
        assert_eq!(proximity_score(origin, c(-1.0, -1.0)), 2.0);
        assert_eq!(proximity_score(origin, c(5.0, 5.0)), 10.0);
        assert_eq!(proximity_score(c(2.0, -5.0), c(1.0, 1.0)), 1.0);
    }

    #[test]
    fn tie_between_first_two_returns_first() {
        let candidates = [c(1.0, 1.0), c(-1.0, -1.0), c(5.0, 5.0)];
        assert_eq!(find_nearest(c(0.0, 0.0), &candidates).unwrap(), c(1.0, 1.0));
        assert_eq!(find_nearest_index(c(0.0, 0.0), &candidates).unwrap(), 0);
    }

    #[test]
    fn equal_scores_resolve_to_first_occurrence() {
        let a = c(2.0, 0.0);
        let b = c(0.0, 2.0);
        assert_eq!(find_nearest(c(1.0, 1.0), &[a, b]).unwrap(), a);
        assert_eq!(find_nearest(c(1.0, 1.0), &[b, a]).unwrap(), b);
    }

    #[test]
    fn empty_candidates_is_an_error() {
        assert_eq!(find_nearest(c(0.0, 0.0), &[]), Err(GeoError::EmptyInput));
    }

    #[test]
    fn single_candidate_is_returned() {
        assert_eq!(
            find_nearest(c(3.0, 4.0), &[c(-9.0, 9.0)]).unwrap(),
            c(-9.0, 9.0)
        );
    }

    #[test]
    fn later_strictly_better_candidate_wins() {
        let candidates = [c(5.0, 5.0), c(3.0, 3.0), c(0.5, 0.0), c(0.0, 0.5)];
        assert_eq!(find_nearest_index(c(0.0, 0.0), &candidates).unwrap(), 2);
    }

    #[test]
    fn far_point_with_matching_sum_beats_a_close_one() {
        // Sums: office 0.0, far house 0.0, close house 0.2.
        let office = c(43.0, -43.0);
        let close = c(43.1, -42.9);
        let far = c(-10.0, 10.0);
        assert_eq!(find_nearest(office, &[close, far]).unwrap(), far);
    }

    #[test]
    fn result_is_member_and_stable_for_generated_sets() {
        let office = c(43.45, -80.49);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..20 {
            let set = generate(office, 100, &mut rng).unwrap();
            let first = find_nearest(office, &set).unwrap();
            let second = find_nearest(office, &set).unwrap();
            assert!(set.contains(&first));
            assert_eq!(first, second);
        }
    }

    #[test]
    fn nan_candidates_rank_last() {
        let candidates = [c(f64::NAN, 0.0), c(7.0, 7.0)];
        assert_eq!(find_nearest_index(c(0.0, 0.0), &candidates).unwrap(), 1);
    }

    #[test]
    fn all_nan_candidates_return_the_first() {
        let candidates = [c(f64::NAN, 0.0), c(0.0, f64::NAN)];
        assert_eq!(find_nearest_index(c(0.0, 0.0), &candidates).unwrap(), 0);
    }
}
