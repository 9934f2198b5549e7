//! Ranking and itinerary assembly.
#![forbid(unsafe_code)]

use std::cmp::Ordering;

use log::debug;
use meetup_core::{
    Place, PlaceScorer, RecommendationRequest, RequestError, ScoreBreakdown, ScoredPlace,
};
use thiserror::Error;

use crate::FactorWeights;
use crate::factors::{amenities_score, location_score, time_score};

/// Places must score strictly above this total to enter an itinerary.
pub const VIABILITY_THRESHOLD: f64 = 0.4;

/// Errors raised when configuring or invoking the engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Provided factor weights were unusable.
    #[error("factor weights must be finite, non-negative, and sum to a positive value")]
    InvalidWeights,
    /// The request failed validation.
    #[error("invalid recommendation request")]
    InvalidRequest(#[from] RequestError),
}

/// Scores candidate places and assembles ranked output.
///
/// The engine is a pure computation over its arguments: no I/O, no shared
/// state, safe to call concurrently from multiple request handlers.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use geo::Coord;
/// use meetup_core::{Place, Preferences, RecommendationRequest, TimeOfDay};
/// use meetup_scorer::RecommendationEngine;
///
/// let engine = RecommendationEngine::new();
/// let cafe = Place::spot(1, "Cafe", "1 High St", Coord { x: 0.0, y: 0.0 }).unwrap();
/// let request = RecommendationRequest {
///     reference_time: Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap(),
///     origin: Coord { x: 0.0, y: 0.0 },
///     group_size: 2,
///     time_of_day: TimeOfDay::Evening,
///     preferences: Preferences::default(),
/// };
/// let ranked = engine.recommendations(vec![cafe], &request)?;
/// assert_eq!(ranked.len(), 1);
/// # Ok::<(), meetup_scorer::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecommendationEngine {
    weights: FactorWeights,
}

impl RecommendationEngine {
    /// Construct an engine with the published default weights.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Construct an engine with explicit weights.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidWeights`] when the weights are not
    /// finite, are negative, or sum to zero.
    pub fn with_weights(weights: FactorWeights) -> Result<Self, EngineError> {
        if !weights.is_valid() {
            return Err(EngineError::InvalidWeights);
        }
        Ok(Self { weights })
    }

    /// Score a single place against a request, factor by factor.
    ///
    /// Every factor is sanitised into `0.0..=1.0`. The popularity factor is
    /// reported as `0.0`; it is reserved for a future signal and never
    /// contributes to the total.
    #[must_use]
    pub fn breakdown(&self, place: &Place, request: &RecommendationRequest) -> ScoreBreakdown {
        ScoreBreakdown {
            time: <Self as PlaceScorer>::sanitise(time_score(place, request.reference_time)),
            location: <Self as PlaceScorer>::sanitise(location_score(
                request.origin,
                place.location,
                request.preferences.max_distance_km,
            )),
            amenities: <Self as PlaceScorer>::sanitise(amenities_score(place)),
            popularity: 0.0,
        }
    }

    /// Score every candidate and rank the results by descending total.
    ///
    /// No pre-filtering happens here: every input place comes back scored.
    /// The sort is stable, so places with equal totals keep their insertion
    /// order.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidRequest`] when the request fails
    /// validation; no partial results are produced.
    pub fn recommendations(
        &self,
        places: Vec<Place>,
        request: &RecommendationRequest,
    ) -> Result<Vec<ScoredPlace>, EngineError> {
        request.validate()?;
        let mut scored: Vec<ScoredPlace> = places
            .into_iter()
            .map(|place| {
                let breakdown = self.breakdown(&place, request);
                let total = <Self as PlaceScorer>::sanitise(self.weights.combine(&breakdown));
                ScoredPlace {
                    place,
                    total,
                    breakdown,
                }
            })
            .collect();
        scored.sort_by(|a, b| b.total.partial_cmp(&a.total).unwrap_or(Ordering::Equal));
        debug!("ranked {} candidate places", scored.len());
        Ok(scored)
    }

    /// Build a presentable itinerary from the viable candidates.
    ///
    /// Candidates scoring at or below [`VIABILITY_THRESHOLD`] are dropped.
    /// When at least one viable event remains, the whole viable set is
    /// re-sorted with a mixed comparator: two events order by start time
    /// ascending, any other pairing by total descending. That comparator is
    /// not transitive across event/spot boundaries; the stable sort keeps
    /// the outcome deterministic, and the published ordering depends on it
    /// staying exactly as is. With no viable events the score order stands.
    ///
    /// An empty result is a normal outcome, not a fault.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidRequest`] when the request fails
    /// validation.
    pub fn itinerary(
        &self,
        places: Vec<Place>,
        request: &RecommendationRequest,
    ) -> Result<Vec<Place>, EngineError> {
        let scored = self.recommendations(places, request)?;
        let candidates = scored.len();
        let mut viable: Vec<ScoredPlace> = scored
            .into_iter()
            .filter(|entry| entry.total > VIABILITY_THRESHOLD)
            .collect();
        debug!("{} of {candidates} candidates viable for itinerary", viable.len());

        if viable.iter().any(|entry| entry.place.is_event()) {
            viable.sort_by(|a, b| {
                match (a.place.event_window(), b.place.event_window()) {
                    (Some(left), Some(right)) => left.start.cmp(&right.start),
                    _ => b.total.partial_cmp(&a.total).unwrap_or(Ordering::Equal),
                }
            });
        }

        Ok(viable.into_iter().map(|entry| entry.place).collect())
    }
}

impl PlaceScorer for RecommendationEngine {
    fn score(&self, place: &Place, request: &RecommendationRequest) -> f64 {
        Self::sanitise(self.weights.combine(&self.breakdown(place, request)))
    }
}
