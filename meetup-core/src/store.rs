//! Data access traits for candidate places.
//!
//! The [`PlaceStore`] trait defines a read-only interface for retrieving
//! [`Place`] values near an origin. Production deployments back it with a
//! spatially-indexed database; [`MemoryStore`] provides a linear-scan
//! implementation for small datasets, tests, and the CLI.

use geo::Coord;

use crate::{Place, distance_km};

/// Read-only access to candidate places.
///
/// Coordinates use WGS84 with axis order (longitude, latitude) in degrees.
/// Containment includes places at exactly `radius_km` from the origin.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use meetup_core::{MemoryStore, Place, PlaceStore};
///
/// let cafe = Place::spot(1, "Cafe", "1 High St", Coord { x: 0.0, y: 0.0 }).unwrap();
/// let store = MemoryStore::with_place(cafe.clone());
///
/// let found: Vec<_> = store.places_within(Coord { x: 0.0, y: 0.0 }, 1.0).collect();
/// assert_eq!(found, vec![cafe]);
/// ```
pub trait PlaceStore {
    /// Return all places within `radius_km` of `origin`.
    ///
    /// The boundary is inclusive: a place at exactly `radius_km` is
    /// returned.
    fn places_within(
        &self,
        origin: Coord<f64>,
        radius_km: f64,
    ) -> Box<dyn Iterator<Item = Place> + Send + '_>;
}

/// In-memory [`PlaceStore`] backed by a linear scan.
///
/// Intended for small datasets; every query walks the full collection.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    places: Vec<Place>,
}

impl MemoryStore {
    /// Create a store containing a single place.
    #[must_use]
    pub fn with_place(place: Place) -> Self {
        Self::with_places(std::iter::once(place))
    }

    /// Create a store from a collection of places.
    pub fn with_places<I>(places: I) -> Self
    where
        I: IntoIterator<Item = Place>,
    {
        Self {
            places: places.into_iter().collect(),
        }
    }
}

impl PlaceStore for MemoryStore {
    fn places_within(
        &self,
        origin: Coord<f64>,
        radius_km: f64,
    ) -> Box<dyn Iterator<Item = Place> + Send + '_> {
        Box::new(
            self.places
                .iter()
                .filter(move |place| distance_km(origin, place.location) <= radius_km)
                .cloned(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const ORIGIN: Coord<f64> = Coord { x: 0.0, y: 0.0 };

    fn spot_at(id: u64, location: Coord<f64>) -> Place {
        Place::spot(id, format!("Spot {id}"), "Somewhere", location).expect("valid spot")
    }

    #[rstest]
    fn returns_places_inside_radius() {
        let near = spot_at(1, Coord { x: 0.01, y: 0.01 });
        let store = MemoryStore::with_place(near.clone());
        let found: Vec<_> = store.places_within(ORIGIN, 5.0).collect();
        assert_eq!(found, vec![near]);
    }

    #[rstest]
    fn excludes_places_beyond_radius() {
        // One degree of latitude is roughly 111 km.
        let far = spot_at(2, Coord { x: 0.0, y: 1.0 });
        let store = MemoryStore::with_place(far);
        assert_eq!(store.places_within(ORIGIN, 50.0).count(), 0);
    }

    #[rstest]
    fn returns_empty_when_store_is_empty() {
        let store = MemoryStore::default();
        assert_eq!(store.places_within(ORIGIN, 50.0).count(), 0);
    }

    #[rstest]
    fn boundary_distance_is_included() {
        let place = spot_at(3, Coord { x: 0.0, y: 0.1 });
        let radius = distance_km(ORIGIN, place.location);
        let store = MemoryStore::with_place(place.clone());
        let found: Vec<_> = store.places_within(ORIGIN, radius).collect();
        assert_eq!(found, vec![place]);
    }

    #[rstest]
    fn preserves_insertion_order() {
        let first = spot_at(1, Coord { x: 0.01, y: 0.0 });
        let second = spot_at(2, Coord { x: 0.02, y: 0.0 });
        let store = MemoryStore::with_places([first.clone(), second.clone()]);
        let found: Vec<_> = store.places_within(ORIGIN, 10.0).collect();
        assert_eq!(found, vec![first, second]);
    }
}
