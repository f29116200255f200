//! In-memory map renderer.

use crate::map::{LayerId, MapError, MapRenderer, MapResult};
use crate::viewport::Viewport;
use kurbo::Point;
use std::collections::HashMap;
use truesize_core::{Feature, LngLat, StyleOptions};
use uuid::Uuid;

/// A feature as it was handed to the map.
#[derive(Debug, Clone)]
pub struct RenderedLayer {
    pub feature: Feature,
    pub style: StyleOptions,
    /// Whether drag capability is enabled on this layer.
    pub draggable: bool,
}

/// Headless map for testing and for hosts that draw the layers themselves.
#[derive(Debug, Clone, Default)]
pub struct MemoryMap {
    viewport: Viewport,
    layers: HashMap<LayerId, RenderedLayer>,
    /// Draw order of layers (back to front).
    z_order: Vec<LayerId>,
}

impl MemoryMap {
    /// Create an empty map over the given viewport.
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            layers: HashMap::new(),
            z_order: Vec::new(),
        }
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut Viewport {
        &mut self.viewport
    }

    /// Get a rendered layer by ID.
    pub fn layer(&self, id: LayerId) -> Option<&RenderedLayer> {
        self.layers.get(&id)
    }

    /// Get layers in draw order (back to front).
    pub fn layers_ordered(&self) -> impl Iterator<Item = (LayerId, &RenderedLayer)> {
        self.z_order
            .iter()
            .filter_map(|id| self.layers.get(id).map(|layer| (*id, layer)))
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl MapRenderer for MemoryMap {
    fn add_feature(&mut self, feature: &Feature, style: &StyleOptions) -> MapResult<LayerId> {
        let id = Uuid::new_v4();
        self.layers.insert(
            id,
            RenderedLayer {
                feature: feature.clone(),
                style: style.clone(),
                draggable: false,
            },
        );
        self.z_order.push(id);
        Ok(id)
    }

    fn remove_layer(&mut self, id: LayerId) -> MapResult<()> {
        self.layers.remove(&id).ok_or(MapError::LayerNotFound(id))?;
        self.z_order.retain(|&layer_id| layer_id != id);
        Ok(())
    }

    fn enable_drag(&mut self, id: LayerId) -> MapResult<()> {
        let layer = self.layers.get_mut(&id).ok_or(MapError::LayerNotFound(id))?;
        layer.draggable = true;
        Ok(())
    }

    fn container_point_to_lng_lat(&self, point: Point) -> LngLat {
        self.viewport.container_point_to_lng_lat(point)
    }
}
