//! The three independent relevance factors.
//!
//! Each factor maps a place and the request context to a value in
//! `0.0..=1.0`. The constants and breakpoints are part of the external
//! contract: clients and stored expectations depend on the exact values, so
//! changing them is a behaviour change, not a tuning tweak.

#![forbid(unsafe_code)]

use chrono::{DateTime, Utc};
use geo::Coord;
use meetup_core::{Place, distance_km};

/// Neutral time factor for places with no schedule.
pub(crate) const SPOT_TIME_SCORE: f64 = 0.5;

/// Increment contributed by each amenity signal.
pub(crate) const AMENITY_STEP: f64 = 0.2;

/// Descriptions longer than this count as a completeness signal.
pub(crate) const DESCRIPTION_DETAIL_CHARS: usize = 100;

/// Urgency of an event's start relative to the reference time.
///
/// Events that already started score zero; upcoming events step down from
/// 1.0 as the start moves further out (24/48/72 hour breakpoints). Spots
/// have no schedule and sit at the neutral midpoint.
#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    reason = "durations in milliseconds stay far below 2^52; hour conversion is float math"
)]
pub(crate) fn time_score(place: &Place, reference_time: DateTime<Utc>) -> f64 {
    let Some(window) = place.event_window() else {
        return SPOT_TIME_SCORE;
    };
    let hours_until_start = (window.start - reference_time).num_milliseconds() as f64 / 3_600_000.0;
    if hours_until_start < 0.0 {
        0.0
    } else if hours_until_start <= 24.0 {
        1.0
    } else if hours_until_start <= 48.0 {
        0.7
    } else if hours_until_start <= 72.0 {
        0.4
    } else {
        0.2
    }
}

/// Proximity of a place to the group origin.
///
/// Falls off linearly from 1.0 at the origin to 0.0 at `max_distance_km`;
/// anything farther scores zero.
#[expect(
    clippy::float_arithmetic,
    reason = "linear falloff divides distance by the maximum"
)]
pub(crate) fn location_score(origin: Coord<f64>, location: Coord<f64>, max_distance_km: f64) -> f64 {
    let d = distance_km(origin, location);
    if d > max_distance_km {
        return 0.0;
    }
    1.0 - d / max_distance_km
}

/// Completeness of a place's listing metadata.
///
/// Five independent signals each add 0.2: a featured image, a contact
/// email, at least one social handle, a summary blurb, and a description
/// longer than [`DESCRIPTION_DETAIL_CHARS`] characters.
#[expect(
    clippy::float_arithmetic,
    reason = "amenity signals accumulate additively"
)]
pub(crate) fn amenities_score(place: &Place) -> f64 {
    let mut score = 0.0_f64;
    if place.featured_image.is_some() {
        score += AMENITY_STEP;
    }
    if place.email.is_some() {
        score += AMENITY_STEP;
    }
    if !place.social_handles.is_empty() {
        score += AMENITY_STEP;
    }
    if place.summary.is_some() {
        score += AMENITY_STEP;
    }
    if place.description.chars().count() > DESCRIPTION_DETAIL_CHARS {
        score += AMENITY_STEP;
    }
    score
}
