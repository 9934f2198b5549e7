//! Test-only fixtures shared by unit and behaviour tests.

use chrono::{DateTime, Duration, Utc};
use geo::Coord;

use crate::{
    EventWindow, Place, PlaceKind, PlaceScorer, RecommendationRequest, SocialHandles,
};

/// Scorer returning the same value for every place.
#[derive(Debug, Copy, Clone, Default)]
pub struct FixedScorer(
    /// The constant score returned for every place.
    pub f64,
);

impl PlaceScorer for FixedScorer {
    fn score(&self, _place: &Place, _request: &RecommendationRequest) -> f64 {
        self.0
    }
}

/// Build a bare spot with no optional metadata.
#[must_use]
pub fn sample_spot(id: u64, location: Coord<f64>) -> Place {
    Place {
        id,
        title: format!("Spot {id}"),
        address: format!("{id} Test Street"),
        description: String::new(),
        summary: None,
        location,
        email: None,
        social_handles: SocialHandles::new(),
        featured_image: None,
        updated_at: DateTime::UNIX_EPOCH,
        kind: PlaceKind::Spot,
    }
}

/// Build a bare two-hour event starting `hours_from` hours after `reference`.
#[must_use]
pub fn sample_event(id: u64, location: Coord<f64>, reference: DateTime<Utc>, hours_from: i64) -> Place {
    let start = reference + Duration::hours(hours_from);
    let end = start + Duration::hours(2);
    Place {
        kind: PlaceKind::Event(EventWindow { start, end }),
        ..sample_spot(id, location)
    }
}
