//! TrueSize Core Library
//!
//! Platform-agnostic geometry and geodesy for dragging map shapes at their
//! true real-world size. Vertices are re-projected around a new center by
//! bearing and great-circle distance rather than translated on the plane.

pub mod error;
pub mod geodesy;
pub mod geometry;
pub mod ids;
pub mod packer;
pub mod reproject;
pub mod snapshot;
pub mod style;

pub use error::{ColorError, GeometryError, GeometryResult};
pub use geometry::{Coordinates, Feature, Geometry, GeometryKind, LngLat};
pub use ids::{IdCounter, InstanceId};
pub use packer::pack;
pub use reproject::reproject;
pub use snapshot::{center_of, CenterMode, PolarOffset, Snapshot};
pub use style::{Color, StyleOptions, StyleOverrides};
