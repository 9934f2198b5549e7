//! Core domain types for the meetup recommendation engine.
//!
//! The crate models recommendable places (static spots and scheduled
//! events), the per-request parameters a group supplies, and the geodesic
//! helpers the engine and its callers share. Constructors validate input
//! and return `Result` to surface malformed data before it reaches scoring.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod geodesy;
mod place;
mod request;
mod score;
mod store;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use geodesy::{EARTH_RADIUS_KM, GeoError, centroid, distance_km};
pub use place::{EventWindow, EventWindowError, Place, PlaceError, PlaceKind, SocialHandles};
pub use request::{
    DEFAULT_MAX_DISTANCE_KM, Preferences, RecommendationRequest, RequestError, TimeOfDay,
};
pub use score::{PlaceScorer, ScoreBreakdown, ScoredPlace};
pub use store::{MemoryStore, PlaceStore};
