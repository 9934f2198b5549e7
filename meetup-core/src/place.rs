//! Places that groups can meet at.
//!
//! A [`Place`] is either a static spot or a scheduled event; the variant is
//! an explicit discriminant chosen at construction, never inferred from
//! which fields happen to be populated. Coordinates are WGS84 with
//! `x = longitude` and `y = latitude`.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use geo::Coord;
use thiserror::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Social-media handles keyed by platform name.
pub type SocialHandles = HashMap<String, String>;

/// Errors returned by the [`Place`] constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaceError {
    /// A coordinate component was NaN or infinite.
    ///
    /// Non-finite geometry would poison every downstream distance
    /// computation, so construction fails fast instead.
    #[error("place coordinates must be finite")]
    NonFiniteCoordinate,
}

/// Errors returned by [`EventWindow::new`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventWindowError {
    /// The end instant preceded the start instant.
    #[error("event must not end before it starts")]
    EndBeforeStart,
}

/// The scheduled start and end of an event.
///
/// Both bounds are timezone-aware instants. Zero-length windows are allowed.
///
/// # Examples
/// ```
/// use chrono::{TimeZone, Utc};
/// use meetup_core::EventWindow;
///
/// let start = Utc.with_ymd_and_hms(2026, 8, 1, 18, 0, 0).unwrap();
/// let end = Utc.with_ymd_and_hms(2026, 8, 1, 21, 0, 0).unwrap();
/// let window = EventWindow::new(start, end)?;
/// assert_eq!(window.start, start);
/// # Ok::<(), meetup_core::EventWindowError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EventWindow {
    /// When the event begins.
    pub start: DateTime<Utc>,
    /// When the event finishes.
    pub end: DateTime<Utc>,
}

impl EventWindow {
    /// Validate and construct an event window.
    ///
    /// # Errors
    /// Returns [`EventWindowError::EndBeforeStart`] when `end < start`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, EventWindowError> {
        if end < start {
            return Err(EventWindowError::EndBeforeStart);
        }
        Ok(Self { start, end })
    }
}

/// Discriminant separating static spots from scheduled events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PlaceKind {
    /// A static point of interest with no schedule.
    Spot,
    /// A scheduled happening with a start and end instant.
    Event(EventWindow),
}

/// A recommendable location: a static spot or a scheduled event.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use meetup_core::Place;
///
/// let cafe = Place::spot(1, "Corner Cafe", "1 High St", Coord { x: -0.1, y: 51.5 })?
///     .with_email("hello@corner.example")
///     .with_summary("Quiet espresso bar");
/// assert!(!cafe.is_event());
/// assert_eq!(cafe.email.as_deref(), Some("hello@corner.example"));
/// # Ok::<(), meetup_core::PlaceError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Place {
    /// Unique identifier.
    pub id: u64,
    /// Display name.
    pub title: String,
    /// Street address.
    pub address: String,
    /// Free-text description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Short blurb shown in listings.
    pub summary: Option<String>,
    /// Geographic position, `x = longitude`, `y = latitude`.
    pub location: Coord<f64>,
    /// Contact email, when published.
    pub email: Option<String>,
    /// Social-media handles keyed by platform.
    #[cfg_attr(feature = "serde", serde(default))]
    pub social_handles: SocialHandles,
    /// URL of the featured image, when one exists.
    pub featured_image: Option<String>,
    /// When the listing was last updated.
    #[cfg_attr(feature = "serde", serde(default = "unix_epoch"))]
    pub updated_at: DateTime<Utc>,
    /// Whether this place is a spot or an event.
    pub kind: PlaceKind,
}

#[cfg(feature = "serde")]
fn unix_epoch() -> DateTime<Utc> {
    DateTime::UNIX_EPOCH
}

impl Place {
    /// Validate and construct a static spot.
    ///
    /// Optional metadata defaults to absent; use the `with_*` builders to
    /// fill it in. `updated_at` defaults to the Unix epoch.
    ///
    /// # Errors
    /// Returns [`PlaceError::NonFiniteCoordinate`] when either coordinate
    /// component is NaN or infinite.
    pub fn spot(
        id: u64,
        title: impl Into<String>,
        address: impl Into<String>,
        location: Coord<f64>,
    ) -> Result<Self, PlaceError> {
        Self::with_kind(id, title.into(), address.into(), location, PlaceKind::Spot)
    }

    /// Validate and construct a scheduled event.
    ///
    /// # Errors
    /// Returns [`PlaceError::NonFiniteCoordinate`] when either coordinate
    /// component is NaN or infinite.
    pub fn event(
        id: u64,
        title: impl Into<String>,
        address: impl Into<String>,
        location: Coord<f64>,
        window: EventWindow,
    ) -> Result<Self, PlaceError> {
        Self::with_kind(
            id,
            title.into(),
            address.into(),
            location,
            PlaceKind::Event(window),
        )
    }

    fn with_kind(
        id: u64,
        title: String,
        address: String,
        location: Coord<f64>,
        kind: PlaceKind,
    ) -> Result<Self, PlaceError> {
        if !location.x.is_finite() || !location.y.is_finite() {
            return Err(PlaceError::NonFiniteCoordinate);
        }
        Ok(Self {
            id,
            title,
            address,
            description: String::new(),
            summary: None,
            location,
            email: None,
            social_handles: SocialHandles::new(),
            featured_image: None,
            updated_at: DateTime::UNIX_EPOCH,
            kind,
        })
    }

    /// Replace the free-text description while consuming `self`.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the short blurb while consuming `self`.
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Set the contact email while consuming `self`.
    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Add a social-media handle while consuming `self`.
    #[must_use]
    pub fn with_social_handle(
        mut self,
        platform: impl Into<String>,
        handle: impl Into<String>,
    ) -> Self {
        self.social_handles.insert(platform.into(), handle.into());
        self
    }

    /// Set the featured-image URL while consuming `self`.
    #[must_use]
    pub fn with_featured_image(mut self, url: impl Into<String>) -> Self {
        self.featured_image = Some(url.into());
        self
    }

    /// Set the last-updated instant while consuming `self`.
    #[must_use]
    pub fn with_updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = updated_at;
        self
    }

    /// Report whether this place is a scheduled event.
    #[must_use]
    pub const fn is_event(&self) -> bool {
        matches!(self.kind, PlaceKind::Event(_))
    }

    /// Return the event schedule, when this place is an event.
    #[must_use]
    pub const fn event_window(&self) -> Option<&EventWindow> {
        match &self.kind {
            PlaceKind::Event(window) => Some(window),
            PlaceKind::Spot => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn window() -> EventWindow {
        let start = Utc.with_ymd_and_hms(2026, 8, 1, 18, 0, 0).single().expect("start");
        let end = Utc.with_ymd_and_hms(2026, 8, 1, 21, 0, 0).single().expect("end");
        EventWindow::new(start, end).expect("valid window")
    }

    #[rstest]
    fn spot_is_not_an_event() {
        let spot = Place::spot(1, "Cafe", "1 High St", Coord { x: 0.0, y: 0.0 })
            .expect("valid spot");
        assert!(!spot.is_event());
        assert!(spot.event_window().is_none());
    }

    #[rstest]
    fn event_exposes_its_window() {
        let event = Place::event(2, "Gig", "The Venue", Coord { x: 0.0, y: 0.0 }, window())
            .expect("valid event");
        assert!(event.is_event());
        assert_eq!(event.event_window(), Some(&window()));
    }

    #[rstest]
    #[case(Coord { x: f64::NAN, y: 0.0 })]
    #[case(Coord { x: 0.0, y: f64::NAN })]
    #[case(Coord { x: f64::INFINITY, y: 0.0 })]
    #[case(Coord { x: 0.0, y: f64::NEG_INFINITY })]
    fn constructors_reject_non_finite_coordinates(#[case] location: Coord<f64>) {
        let result = Place::spot(3, "Broken", "Nowhere", location);
        assert_eq!(result, Err(PlaceError::NonFiniteCoordinate));
    }

    #[rstest]
    fn window_rejects_end_before_start() {
        let start = Utc.with_ymd_and_hms(2026, 8, 1, 21, 0, 0).single().expect("start");
        let end = Utc.with_ymd_and_hms(2026, 8, 1, 18, 0, 0).single().expect("end");
        assert_eq!(
            EventWindow::new(start, end),
            Err(EventWindowError::EndBeforeStart)
        );
    }

    #[rstest]
    fn window_allows_zero_length() {
        let instant = Utc.with_ymd_and_hms(2026, 8, 1, 18, 0, 0).single().expect("instant");
        assert!(EventWindow::new(instant, instant).is_ok());
    }

    #[rstest]
    fn builders_fill_optional_metadata() {
        let place = Place::spot(4, "Gallery", "2 Art Lane", Coord { x: 1.0, y: 2.0 })
            .expect("valid spot")
            .with_description("A long-running artist-led space.")
            .with_summary("Artist-led gallery")
            .with_email("info@gallery.example")
            .with_social_handle("instagram", "@gallery")
            .with_featured_image("https://img.example/gallery.jpg");
        assert_eq!(place.summary.as_deref(), Some("Artist-led gallery"));
        assert_eq!(place.social_handles.get("instagram"), Some(&"@gallery".to_owned()));
        assert!(place.featured_image.is_some());
    }
}
