//! Web Mercator viewport for converting between container pixels and lon/lat.

use kurbo::{Affine, Point, Size, Vec2};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use truesize_core::LngLat;

/// Tile edge length in pixels at zoom 0.
pub const TILE_SIZE: f64 = 256.0;

/// Latitude limit of the Web Mercator square.
pub const MAX_LATITUDE: f64 = 85.051_128_779_806_6;

/// Visible part of the map: what sits at the container center, at what zoom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Geographic position at the center of the container.
    pub center: LngLat,
    /// Zoom level (0 = whole world in one tile).
    pub zoom: f64,
    /// Container size in pixels.
    pub size: Size,
    /// Minimum allowed zoom level
    pub min_zoom: f64,
    /// Maximum allowed zoom level
    pub max_zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            center: LngLat::new(0.0, 0.0),
            zoom: 2.0,
            size: Size::new(800.0, 600.0),
            min_zoom: 0.0,
            max_zoom: 22.0,
        }
    }
}

impl Viewport {
    pub fn new(center: LngLat, zoom: f64, size: Size) -> Self {
        let mut viewport = Self {
            center,
            size,
            ..Self::default()
        };
        viewport.set_zoom(zoom);
        viewport
    }

    /// World size in pixels at the current zoom.
    pub fn world_size(&self) -> f64 {
        TILE_SIZE * 2f64.powf(self.zoom)
    }

    /// Project a geographic position to world pixels.
    pub fn project(&self, lng_lat: LngLat) -> Point {
        let scale = self.world_size();
        let lat = lng_lat.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE).to_radians();
        let x = (lng_lat.lng + 180.0) / 360.0 * scale;
        let y = (1.0 - (lat.tan() + 1.0 / lat.cos()).ln() / PI) / 2.0 * scale;
        Point::new(x, y)
    }

    /// Inverse of [`project`](Self::project).
    pub fn unproject(&self, world: Point) -> LngLat {
        let scale = self.world_size();
        let lng = world.x / scale * 360.0 - 180.0;
        let n = PI - 2.0 * PI * world.y / scale;
        let lat = n.sinh().atan().to_degrees();
        LngLat::new(lng, lat)
    }

    /// Get the affine transform from world pixels to container pixels.
    pub fn transform(&self) -> Affine {
        Affine::translate(self.offset())
    }

    /// Get the transform from container pixels back to world pixels.
    pub fn inverse_transform(&self) -> Affine {
        Affine::translate(-self.offset())
    }

    fn offset(&self) -> Vec2 {
        let center = self.project(self.center);
        Vec2::new(self.size.width / 2.0 - center.x, self.size.height / 2.0 - center.y)
    }

    pub fn container_point_to_lng_lat(&self, point: Point) -> LngLat {
        self.unproject(self.inverse_transform() * point)
    }

    pub fn lng_lat_to_container_point(&self, lng_lat: LngLat) -> Point {
        self.transform() * self.project(lng_lat)
    }

    /// Pan the map by a delta in container pixels.
    pub fn pan(&mut self, delta: Vec2) {
        let center = self.project(self.center) + delta;
        self.center = self.unproject(center);
    }

    /// Set the zoom level, clamped to the allowed range.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }
}
