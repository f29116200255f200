//! Packing a flat vertex list into the nesting a geometry kind expects.

use crate::geometry::{Coordinates, GeometryKind, LngLat};

/// Nest `points` according to `kind`.
///
/// A LineString is the flat list itself, a Polygon is one ring and a
/// MultiPolygon is one polygon holding one ring. Any other kind is packed
/// like a Polygon. Vertex order is never changed.
pub fn pack(kind: &GeometryKind, points: Vec<LngLat>) -> Coordinates {
    let flat = Coordinates::from_points(points);
    match kind {
        GeometryKind::LineString => flat,
        GeometryKind::Polygon => flat.wrap(),
        GeometryKind::MultiPolygon => flat.wrap().wrap(),
        GeometryKind::Other(_) => flat.wrap(),
    }
}
