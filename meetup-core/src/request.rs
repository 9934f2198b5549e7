//! Scoring requests and group preferences.
//!
//! A [`RecommendationRequest`] carries everything the engine needs for one
//! scoring call. The reference time is caller-supplied so that scoring is a
//! pure function of its inputs; the engine never samples the wall clock.

use chrono::{DateTime, Utc};
use geo::Coord;
use thiserror::Error;

/// Maximum candidate distance in kilometres when the caller states no
/// preference.
pub const DEFAULT_MAX_DISTANCE_KM: f64 = 50.0;

/// Coarse time-of-day label attached to a request.
///
/// Carried through the request shape for forward compatibility; no scoring
/// logic reads it yet.
///
/// # Examples
/// ```
/// use meetup_core::TimeOfDay;
///
/// assert_eq!(TimeOfDay::Evening.as_str(), "evening");
/// assert_eq!(TimeOfDay::Morning.to_string(), "morning");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeOfDay {
    /// Before noon.
    Morning,
    /// Noon until early evening.
    Afternoon,
    /// Early evening until late night.
    Evening,
    /// Late night onwards.
    Night,
}

impl TimeOfDay {
    /// Return the label as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
            Self::Evening => "evening",
            Self::Night => "night",
        }
    }
}

impl std::fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for TimeOfDay {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morning" => Ok(Self::Morning),
            "afternoon" => Ok(Self::Afternoon),
            "evening" => Ok(Self::Evening),
            "night" => Ok(Self::Night),
            _ => Err(format!("unknown time of day '{s}'")),
        }
    }
}

/// Optional knobs a group can set on a request.
///
/// Only `max_distance_km` influences scoring today; the indoor/outdoor flags
/// and the activity type are carried for the external contract.
#[derive(Debug, Clone, PartialEq)]
pub struct Preferences {
    /// Candidates farther than this score zero on the location factor.
    pub max_distance_km: f64,
    /// Prefer indoor venues (reserved).
    pub prefer_indoor: bool,
    /// Prefer outdoor venues (reserved).
    pub prefer_outdoor: bool,
    /// Desired activity type (reserved).
    pub activity_type: Option<String>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            max_distance_km: DEFAULT_MAX_DISTANCE_KM,
            prefer_indoor: false,
            prefer_outdoor: false,
            activity_type: None,
        }
    }
}

/// Errors returned by [`RecommendationRequest::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The group had no members.
    #[error("group size must be at least one")]
    EmptyGroup,
    /// The origin coordinate was NaN or infinite.
    #[error("origin coordinates must be finite")]
    NonFiniteOrigin,
    /// The maximum distance was zero, negative, or non-finite.
    #[error("maximum distance must be positive and finite")]
    InvalidMaxDistance,
}

/// Parameters for one scoring call.
///
/// The origin is derived upstream as the centroid of the participants'
/// coordinates (see [`crate::centroid`]).
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use geo::Coord;
/// use meetup_core::{Preferences, RecommendationRequest, TimeOfDay};
///
/// let request = RecommendationRequest {
///     reference_time: Utc.with_ymd_and_hms(2026, 8, 1, 12, 0, 0).unwrap(),
///     origin: Coord { x: -0.1, y: 51.5 },
///     group_size: 4,
///     time_of_day: TimeOfDay::Evening,
///     preferences: Preferences::default(),
/// };
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationRequest {
    /// The instant treated as "now" for time scoring.
    pub reference_time: DateTime<Utc>,
    /// Group origin, `x = longitude`, `y = latitude`.
    pub origin: Coord<f64>,
    /// Number of participants (reserved; must still be at least one).
    pub group_size: u32,
    /// Coarse time-of-day label (reserved).
    pub time_of_day: TimeOfDay,
    /// Group preferences.
    pub preferences: Preferences,
}

impl RecommendationRequest {
    /// Check the request invariants the engine relies on.
    ///
    /// # Errors
    /// Returns a [`RequestError`] when the group is empty, the origin is not
    /// finite, or the maximum distance is unusable.
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.group_size == 0 {
            return Err(RequestError::EmptyGroup);
        }
        if !self.origin.x.is_finite() || !self.origin.y.is_finite() {
            return Err(RequestError::NonFiniteOrigin);
        }
        let max_distance = self.preferences.max_distance_km;
        if !max_distance.is_finite() || max_distance <= 0.0 {
            return Err(RequestError::InvalidMaxDistance);
        }
        Ok(())
    }
}
