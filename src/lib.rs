//! Facade crate for the meetup place-recommendation engine.
//!
//! This crate re-exports the core domain types together with the scoring
//! engine so that callers depend on a single package. The heavy lifting
//! lives in `meetup-core` (domain model, geodesic helpers, store trait) and
//! `meetup-scorer` (factor scoring, ranking, itinerary assembly).

#![forbid(unsafe_code)]

pub use meetup_core::{
    DEFAULT_MAX_DISTANCE_KM, EARTH_RADIUS_KM, EventWindow, EventWindowError, GeoError,
    MemoryStore, Place, PlaceError, PlaceKind, PlaceScorer, PlaceStore, Preferences,
    RecommendationRequest, RequestError, ScoreBreakdown, ScoredPlace, SocialHandles, TimeOfDay,
    centroid, distance_km,
};

pub use meetup_scorer::{EngineError, FactorWeights, RecommendationEngine, VIABILITY_THRESHOLD};
