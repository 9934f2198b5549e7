//! Score a place's relevance to a group's request.
//!
//! The [`PlaceScorer`] trait assigns a relevance score to a [`Place`] given
//! a [`RecommendationRequest`]. Factor-level detail travels in a
//! [`ScoreBreakdown`]; ranked output pairs each place with its total in a
//! [`ScoredPlace`].

use crate::{Place, RecommendationRequest};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Per-factor detail behind a total score.
///
/// The popularity factor is carried in the response shape but is always
/// `0.0`; no popularity signal feeds the total yet.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoreBreakdown {
    /// Urgency of an event's start, neutral for spots.
    pub time: f64,
    /// Proximity to the group origin.
    pub location: f64,
    /// Completeness of the listing metadata.
    pub amenities: f64,
    /// Reserved signal, always `0.0`.
    pub popularity: f64,
}

/// A place paired with its total score and factor breakdown.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScoredPlace {
    /// The candidate that was scored.
    pub place: Place,
    /// Weighted total in `0.0..=1.0`.
    pub total: f64,
    /// Factor-level detail behind the total.
    pub breakdown: ScoreBreakdown,
}

/// Calculate a relevance score for a place.
///
/// Higher scores indicate a better match between the place and the group's
/// request. Implementations must be thread-safe (`Send` + `Sync`) so scorers
/// can run across request-handling tasks, and must produce finite,
/// non-negative values normalised to `0.0..=1.0`. Use [`PlaceScorer::sanitise`]
/// to apply these guards.
///
/// # Examples
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use geo::Coord;
/// use meetup_core::{Place, PlaceScorer, Preferences, RecommendationRequest, TimeOfDay};
///
/// struct UnitScorer;
///
/// impl PlaceScorer for UnitScorer {
///     fn score(&self, _place: &Place, _request: &RecommendationRequest) -> f64 {
///         1.0
///     }
/// }
///
/// let place = Place::spot(1, "Cafe", "1 High St", Coord { x: 0.0, y: 0.0 }).unwrap();
/// let request = RecommendationRequest {
///     reference_time: Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap(),
///     origin: Coord { x: 0.0, y: 0.0 },
///     group_size: 2,
///     time_of_day: TimeOfDay::Evening,
///     preferences: Preferences::default(),
/// };
/// assert_eq!(UnitScorer.score(&place, &request), 1.0);
/// ```
pub trait PlaceScorer: Send + Sync {
    /// Return a score for `place` according to `request`.
    fn score(&self, place: &Place, request: &RecommendationRequest) -> f64;

    /// Clamp and validate a raw score.
    ///
    /// Returns `0.0` for non-finite values and clamps to `0.0..=1.0`.
    #[must_use]
    fn sanitise(score: f64) -> f64 {
        if !score.is_finite() {
            return 0.0;
        }
        score.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct NoopScorer;

    impl PlaceScorer for NoopScorer {
        fn score(&self, _place: &Place, _request: &RecommendationRequest) -> f64 {
            0.0
        }
    }

    #[rstest]
    #[case(f64::NAN, 0.0)]
    #[case(f64::INFINITY, 0.0)]
    #[case(f64::NEG_INFINITY, 0.0)]
    #[case(-0.5, 0.0)]
    #[case(1.5, 1.0)]
    #[case(0.25, 0.25)]
    fn sanitise_guards_raw_scores(#[case] raw: f64, #[case] expected: f64) {
        assert_eq!(<NoopScorer as PlaceScorer>::sanitise(raw), expected);
    }

    #[rstest]
    fn breakdown_defaults_to_zero() {
        let breakdown = ScoreBreakdown::default();
        assert_eq!(breakdown.time, 0.0);
        assert_eq!(breakdown.location, 0.0);
        assert_eq!(breakdown.amenities, 0.0);
        assert_eq!(breakdown.popularity, 0.0);
    }
}
