//! Polar snapshot of a shape around its center.

use crate::geodesy::{bearing, distance_km};
use crate::geometry::LngLat;
use crate::reproject::reproject;
use serde::{Deserialize, Serialize};

/// How the center of a shape is derived from its vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CenterMode {
    /// Arithmetic mean of all vertices.
    #[default]
    Centroid,
    /// Midpoint of the lon/lat bounding box.
    BoundingBox,
}

/// Center of `points` under `mode`, or `None` when there are no points.
pub fn center_of(points: &[LngLat], mode: CenterMode) -> Option<LngLat> {
    if points.is_empty() {
        return None;
    }
    match mode {
        CenterMode::Centroid => {
            let n = points.len() as f64;
            let (lng, lat) = points
                .iter()
                .fold((0.0, 0.0), |(lng, lat), p| (lng + p.lng, lat + p.lat));
            Some(LngLat::new(lng / n, lat / n))
        }
        CenterMode::BoundingBox => {
            let (min_lng, max_lng) = points
                .iter()
                .fold((f64::MAX, f64::MIN), |(mn, mx), p| (mn.min(p.lng), mx.max(p.lng)));
            let (min_lat, max_lat) = points
                .iter()
                .fold((f64::MAX, f64::MIN), |(mn, mx), p| (mn.min(p.lat), mx.max(p.lat)));
            Some(LngLat::new((min_lng + max_lng) / 2.0, (min_lat + max_lat) / 2.0))
        }
    }
}

/// Position of one vertex relative to the shape center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarOffset {
    /// Initial bearing from the center, degrees in `[0, 360)`.
    pub bearing: f64,
    /// Great-circle distance from the center, kilometers.
    pub distance_km: f64,
}

/// One polar offset per vertex, in vertex order, plus the center they were
/// measured from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Snapshot {
    pub center: Option<LngLat>,
    pub offsets: Vec<PolarOffset>,
}

impl Snapshot {
    /// Measure `points` around their own center.
    ///
    /// The center is always computed from `points` here, never carried over
    /// from an earlier snapshot.
    pub fn capture(points: &[LngLat], mode: CenterMode) -> Self {
        let Some(center) = center_of(points, mode) else {
            return Self::default();
        };
        let offsets = points
            .iter()
            .map(|&p| PolarOffset {
                bearing: bearing(center, p),
                distance_km: distance_km(center, p),
            })
            .collect();
        Self {
            center: Some(center),
            offsets,
        }
    }

    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Rebuild the vertices around `new_center`.
    pub fn project_to(&self, new_center: LngLat) -> Vec<LngLat> {
        reproject(new_center, &self.offsets)
    }
}
