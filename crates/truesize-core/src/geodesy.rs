//! Great-circle math on a spherical Earth.
//!
//! Bearing, distance and destination share the same sphere, so a point taken
//! apart into `(bearing, distance)` and rebuilt with [`destination`] lands
//! back where it started.

use crate::geometry::LngLat;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0088;

/// Initial great-circle bearing from `from` to `to`, in degrees within `[0, 360)`.
pub fn bearing(from: LngLat, to: LngLat) -> f64 {
    let lon1 = from.lng.to_radians();
    let lon2 = to.lng.to_radians();
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();

    let a = (lon2 - lon1).sin() * lat2.cos();
    let b = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * (lon2 - lon1).cos();

    let degrees = a.atan2(b).to_degrees().rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if degrees >= 360.0 { 0.0 } else { degrees }
}

/// Haversine distance between two points, in kilometers.
pub fn distance_km(from: LngLat, to: LngLat) -> f64 {
    let d_lat = (to.lat - from.lat).to_radians();
    let d_lon = (to.lng - from.lng).to_radians();
    let lat1 = from.lat.to_radians();
    let lat2 = to.lat.to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + (d_lon / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();
    2.0 * a.sqrt().atan2((1.0 - a).sqrt()) * EARTH_RADIUS_KM
}

/// Point reached by travelling `distance_km` from `origin` along `bearing_deg`.
///
/// Longitude is left unwrapped, so a shape dragged over the antimeridian keeps
/// contiguous coordinates (e.g. 181 rather than -179).
pub fn destination(origin: LngLat, distance_km: f64, bearing_deg: f64) -> LngLat {
    let lon1 = origin.lng.to_radians();
    let lat1 = origin.lat.to_radians();
    let theta = bearing_deg.to_radians();
    let delta = distance_km / EARTH_RADIUS_KM;

    let lat2 = (lat1.sin() * delta.cos() + lat1.cos() * delta.sin() * theta.cos()).asin();
    let lon2 = lon1
        + (theta.sin() * delta.sin() * lat1.cos()).atan2(delta.cos() - lat1.sin() * lat2.sin());

    LngLat::new(lon2.to_degrees(), lat2.to_degrees())
}
