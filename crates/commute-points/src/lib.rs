//! Nearest-house search and synthetic house generation around an office.
//!
//! Everything map-related (autocomplete, geocoding, routing, rendering) stays
//! outside this crate and is reached through [`collaborators`].

pub mod collaborators;
pub mod generator;
pub mod nearest;
pub mod random;
pub mod rings;
pub mod route;
pub mod session;

pub use collaborators::{GeocodeError, Notifier, ReverseGeocoder};
pub use generator::{candidate_count, generate, CandidateSet, DEFAULT_CANDIDATE_COUNT};
pub use nearest::{find_nearest, find_nearest_index, proximity_score};
pub use random::RandomSource;
pub use rings::{commute_rings, CommuteRing, RingStyle, RingTier};
pub use route::{RouteRequest, TravelMode};
pub use session::{announce_nearest, CommuteSession, Snapshot};
