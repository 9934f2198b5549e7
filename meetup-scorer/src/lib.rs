//! Relevance scoring for meetup places.
//!
//! The crate turns a list of candidate [`Place`](meetup_core::Place)s and a
//! [`RecommendationRequest`](meetup_core::RecommendationRequest) into ranked
//! output. Three independent factors feed a weighted total:
//!
//! - **time** (weight 0.4) rewards events starting soon and is neutral for
//!   spots;
//! - **location** (weight 0.3) rewards proximity to the group origin and
//!   zeroes out beyond the requested maximum distance;
//! - **amenities** (weight 0.3) rewards completeness of listing metadata.
//!
//! [`RecommendationEngine::recommendations`] returns every candidate scored
//! and sorted; [`RecommendationEngine::itinerary`] additionally filters to
//! viable places and anchors the ordering on event start times.
//!
//! # Examples
//!
//! ```
//! use chrono::{TimeZone, Utc};
//! use geo::Coord;
//! use meetup_core::{Place, Preferences, RecommendationRequest, TimeOfDay};
//! use meetup_scorer::RecommendationEngine;
//!
//! let engine = RecommendationEngine::new();
//! let cafe = Place::spot(1, "Cafe", "1 High St", Coord { x: 0.0, y: 0.0 })
//!     .unwrap()
//!     .with_summary("Quiet espresso bar");
//! let request = RecommendationRequest {
//!     reference_time: Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap(),
//!     origin: Coord { x: 0.0, y: 0.0 },
//!     group_size: 3,
//!     time_of_day: TimeOfDay::Evening,
//!     preferences: Preferences::default(),
//! };
//! let ranked = engine.recommendations(vec![cafe], &request).unwrap();
//! assert!(ranked[0].total > 0.0);
//! ```

#![forbid(unsafe_code)]

mod engine;
mod factors;
mod types;

pub use engine::{EngineError, RecommendationEngine, VIABILITY_THRESHOLD};
pub use types::FactorWeights;
