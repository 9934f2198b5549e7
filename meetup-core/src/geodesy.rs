//! Geodesic helpers on the WGS84 sphere.
//!
//! Coordinates follow the `geo` convention of `x = longitude` and
//! `y = latitude`, both in decimal degrees. Distances are great-circle
//! kilometres computed with the haversine formula over a mean Earth radius
//! of 6371 km.

use geo::Coord;
use thiserror::Error;

/// Mean Earth radius in kilometres used by [`distance_km`].
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Errors returned by [`centroid`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeoError {
    /// No coordinates were supplied.
    ///
    /// Averaging zero vectors would silently produce NaN components, so the
    /// empty case fails fast instead.
    #[error("centroid requires at least one coordinate")]
    EmptyCoordinates,
}

/// Great-circle distance between two coordinates in kilometres.
///
/// Identical inputs yield `0.0`; the formula needs no special handling for
/// antipodal points or the poles.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use meetup_core::distance_km;
///
/// let origin = Coord { x: 0.0, y: 0.0 };
/// assert_eq!(distance_km(origin, origin), 0.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "haversine distance is floating-point trigonometry"
)]
pub fn distance_km(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let d_lat = (b.y - a.y).to_radians();
    let d_lon = (b.x - a.x).to_radians();
    let half_lat = (d_lat / 2.0).sin();
    let half_lon = (d_lon / 2.0).sin();
    let h = half_lat * half_lat
        + a.y.to_radians().cos() * b.y.to_radians().cos() * half_lon * half_lon;
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());
    EARTH_RADIUS_KM * c
}

/// Spherical mean of a set of coordinates.
///
/// Each point is mapped to a 3-D unit vector, the vectors are averaged, and
/// the mean vector is converted back to longitude/latitude. A planar average
/// would be wrong near the antimeridian and the poles; the spherical mean
/// handles both.
///
/// # Errors
/// Returns [`GeoError::EmptyCoordinates`] when `points` is empty.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use meetup_core::centroid;
///
/// let point = Coord { x: 12.5, y: 41.9 };
/// let mean = centroid(&[point])?;
/// assert!((mean.x - point.x).abs() < 1e-9);
/// assert!((mean.y - point.y).abs() < 1e-9);
/// # Ok::<(), meetup_core::GeoError>(())
/// ```
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "spherical mean averages unit vectors; point counts stay far below 2^52"
)]
pub fn centroid(points: &[Coord<f64>]) -> Result<Coord<f64>, GeoError> {
    if points.is_empty() {
        return Err(GeoError::EmptyCoordinates);
    }

    let mut x = 0.0_f64;
    let mut y = 0.0_f64;
    let mut z = 0.0_f64;
    for point in points {
        let lat = point.y.to_radians();
        let lon = point.x.to_radians();
        x += lat.cos() * lon.cos();
        y += lat.cos() * lon.sin();
        z += lat.sin();
    }

    let count = points.len() as f64;
    x /= count;
    y /= count;
    z /= count;

    let lon = y.atan2(x);
    let hyp = (x * x + y * y).sqrt();
    let lat = z.atan2(hyp);
    Ok(Coord {
        x: lon.to_degrees(),
        y: lat.to_degrees(),
    })
}

#[cfg(test)]
#[expect(
    clippy::float_arithmetic,
    reason = "tests compare floating-point values with tolerances"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    const LONDON: Coord<f64> = Coord {
        x: -0.1278,
        y: 51.5074,
    };
    const PARIS: Coord<f64> = Coord {
        x: 2.3522,
        y: 48.8566,
    };

    #[rstest]
    fn distance_to_self_is_zero() {
        assert_eq!(distance_km(LONDON, LONDON), 0.0);
    }

    #[rstest]
    fn distance_is_symmetric() {
        let there = distance_km(LONDON, PARIS);
        let back = distance_km(PARIS, LONDON);
        assert!((there - back).abs() < 1e-9);
    }

    #[rstest]
    fn london_to_paris_is_about_343_km() {
        let d = distance_km(LONDON, PARIS);
        assert!((d - 343.5).abs() < 1.0, "unexpected distance {d}");
    }

    #[rstest]
    fn centroid_of_single_point_is_that_point() {
        let point = Coord { x: 13.4, y: 52.5 };
        let mean = centroid(&[point]).expect("single point");
        assert!((mean.x - point.x).abs() < 1e-9);
        assert!((mean.y - point.y).abs() < 1e-9);
    }

    #[rstest]
    fn centroid_of_origin_is_origin() {
        let mean = centroid(&[Coord { x: 0.0, y: 0.0 }]).expect("single point");
        assert!(mean.x.abs() < 1e-9);
        assert!(mean.y.abs() < 1e-9);
    }

    #[rstest]
    fn centroid_handles_antimeridian_wrap() {
        let east = Coord { x: 179.0, y: 0.0 };
        let west = Coord { x: -179.0, y: 0.0 };
        let mean = centroid(&[east, west]).expect("two points");
        // The spherical mean lands on the antimeridian, not at longitude 0.
        assert!((mean.x.abs() - 180.0).abs() < 1e-6, "longitude {}", mean.x);
        assert!(mean.y.abs() < 1e-6, "latitude {}", mean.y);
    }

    #[rstest]
    fn centroid_of_symmetric_pair_sits_between_them() {
        let north = Coord { x: 10.0, y: 40.0 };
        let south = Coord { x: 10.0, y: 20.0 };
        let mean = centroid(&[north, south]).expect("two points");
        assert!((mean.x - 10.0).abs() < 1e-6);
        assert!((mean.y - 30.0).abs() < 0.2, "latitude {}", mean.y);
    }

    #[rstest]
    fn centroid_rejects_empty_input() {
        let err = centroid(&[]).expect_err("empty input");
        assert_eq!(err, GeoError::EmptyCoordinates);
    }
}
