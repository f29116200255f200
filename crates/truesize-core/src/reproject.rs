//! Re-projection of polar offsets around a new center.

use crate::geodesy::destination;
use crate::geometry::LngLat;
use crate::snapshot::PolarOffset;

/// Place each offset around `new_center`, keeping its bearing and distance.
pub fn reproject(new_center: LngLat, offsets: &[PolarOffset]) -> Vec<LngLat> {
    offsets
        .iter()
        .map(|o| destination(new_center, o.distance_km, o.bearing))
        .collect()
}
