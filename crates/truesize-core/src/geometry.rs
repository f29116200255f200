//! GeoJSON-style geometry model.
//!
//! Coordinates are kept as the nested arrays they arrive in, so any geometry
//! (including malformed or unsupported ones) can be flattened into a vertex
//! list and rebuilt from one.

use crate::error::{GeometryError, GeometryResult};
use crate::packer::pack;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

/// A WGS84 position in degrees. No altitude.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

impl From<[f64; 2]> for LngLat {
    fn from([lng, lat]: [f64; 2]) -> Self {
        Self::new(lng, lat)
    }
}

impl Serialize for LngLat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.lng, self.lat].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for LngLat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Extra ordinates (altitude) are dropped.
        let ordinates = Vec::<f64>::deserialize(deserializer)?;
        match ordinates.as_slice() {
            [lng, lat, ..] => Ok(Self::new(*lng, *lat)),
            _ => Err(D::Error::invalid_length(
                ordinates.len(),
                &"a position with at least two ordinates",
            )),
        }
    }
}

/// Nested coordinate arrays, as found in a GeoJSON `coordinates` member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coordinates {
    Position(LngLat),
    Nested(Vec<Coordinates>),
}

impl Default for Coordinates {
    fn default() -> Self {
        Coordinates::Nested(Vec::new())
    }
}

impl Coordinates {
    /// Wrap a flat point list as one level of nesting.
    pub fn from_points(points: Vec<LngLat>) -> Self {
        Coordinates::Nested(points.into_iter().map(Coordinates::Position).collect())
    }

    /// Wrap these coordinates in one more level of nesting.
    pub fn wrap(self) -> Self {
        Coordinates::Nested(vec![self])
    }

    /// All positions in document order, regardless of nesting depth.
    pub fn positions(&self) -> Vec<LngLat> {
        let mut out = Vec::new();
        self.collect_positions(&mut out);
        out
    }

    fn collect_positions(&self, out: &mut Vec<LngLat>) {
        match self {
            Coordinates::Position(p) => out.push(*p),
            Coordinates::Nested(children) => {
                for child in children {
                    child.collect_positions(out);
                }
            }
        }
    }
}

/// Geometry type tag.
///
/// Unrecognized type strings are kept verbatim so they round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum GeometryKind {
    LineString,
    Polygon,
    MultiPolygon,
    Other(String),
}

impl GeometryKind {
    pub fn as_str(&self) -> &str {
        match self {
            GeometryKind::LineString => "LineString",
            GeometryKind::Polygon => "Polygon",
            GeometryKind::MultiPolygon => "MultiPolygon",
            GeometryKind::Other(name) => name,
        }
    }

    /// Check if this is one of the kinds with dedicated packing.
    pub fn is_supported(&self) -> bool {
        !matches!(self, GeometryKind::Other(_))
    }
}

impl From<String> for GeometryKind {
    fn from(name: String) -> Self {
        match name.as_str() {
            "LineString" => GeometryKind::LineString,
            "Polygon" => GeometryKind::Polygon,
            "MultiPolygon" => GeometryKind::MultiPolygon,
            _ => GeometryKind::Other(name),
        }
    }
}

impl From<GeometryKind> for String {
    fn from(kind: GeometryKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single geometry: a type tag and its nested coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub kind: GeometryKind,
    #[serde(default)]
    pub coordinates: Coordinates,
}

impl Geometry {
    pub fn new(kind: GeometryKind, coordinates: Coordinates) -> Self {
        Self { kind, coordinates }
    }

    /// Build a geometry of `kind` from a flat vertex list.
    pub fn from_points(kind: GeometryKind, points: Vec<LngLat>) -> Self {
        let coordinates = pack(&kind, points);
        Self { kind, coordinates }
    }

    /// All vertices as a flat list, in document order.
    pub fn vertices(&self) -> Vec<LngLat> {
        self.coordinates.positions()
    }

    /// A geometry of the same kind built from new vertices.
    pub fn rebuild(&self, points: Vec<LngLat>) -> Self {
        Self::from_points(self.kind.clone(), points)
    }
}

/// A GeoJSON feature: opaque properties plus one geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct Feature {
    pub properties: Map<String, Value>,
    pub geometry: Geometry,
}

impl From<Geometry> for Feature {
    fn from(geometry: Geometry) -> Self {
        Self {
            properties: Map::new(),
            geometry,
        }
    }
}

impl Feature {
    /// Read a Feature or a bare Geometry object.
    pub fn from_value(value: Value) -> GeometryResult<Self> {
        let Value::Object(mut object) = value else {
            return Err(GeometryError::NotAnObject);
        };
        let kind = object.get("type").and_then(Value::as_str).map(str::to_owned);
        match kind.as_deref() {
            Some("Feature") => {
                let geometry = object
                    .remove("geometry")
                    .filter(|g| !g.is_null())
                    .ok_or(GeometryError::MissingGeometry)?;
                let properties = match object.remove("properties") {
                    Some(Value::Object(map)) => map,
                    Some(Value::Null) | None => Map::new(),
                    Some(other) => {
                        log::warn!("Ignoring non-object feature properties: {other}");
                        Map::new()
                    }
                };
                Ok(Self {
                    properties,
                    geometry: serde_json::from_value(geometry)?,
                })
            }
            Some(_) => {
                let geometry: Geometry = serde_json::from_value(Value::Object(object))?;
                Ok(geometry.into())
            }
            None => Err(GeometryError::MissingType),
        }
    }

    /// Parse a Feature or bare Geometry from JSON text.
    pub fn from_json_str(json: &str) -> GeometryResult<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Serialize as a GeoJSON Feature object.
    pub fn to_json_string(&self) -> GeometryResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Same properties, new geometry.
    pub fn with_geometry(&self, geometry: Geometry) -> Self {
        Self {
            properties: self.properties.clone(),
            geometry,
        }
    }
}

#[derive(Serialize)]
struct FeatureRepr<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    properties: &'a Map<String, Value>,
    geometry: &'a Geometry,
}

impl Serialize for Feature {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        FeatureRepr {
            kind: "Feature",
            properties: &self.properties,
            geometry: &self.geometry,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Feature {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Feature::from_value(value).map_err(D::Error::custom)
    }
}
