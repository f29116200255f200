//! Draggable true-size layer.
//!
//! A [`TrueSizeLayer`] owns one feature. While attached, every drag move
//! re-measures the feature around its current center, re-projects it around
//! the pointer position and swaps the rendered layer for a new one with drag
//! enabled again.

use crate::map::{DragEvent, LayerId, MapError, MapRenderer};
use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use truesize_core::{
    center_of, CenterMode, Feature, Geometry, GeometryError, IdCounter, InstanceId, LngLat,
    Snapshot, StyleOptions, StyleOverrides,
};

/// Layer errors.
#[derive(Debug, Error)]
pub enum LayerError {
    #[error("Layer is not attached to a map")]
    NotAttached,
    #[error("Map error: {0}")]
    Map(#[from] MapError),
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),
}

/// Result type for layer operations.
pub type LayerResult<T> = Result<T, LayerError>;

/// Options for a new layer. Every field may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrueSizeOptions {
    /// Style fields to override; the rest keep their defaults.
    pub style: StyleOverrides,
    /// How the shape center is derived.
    pub center_mode: CenterMode,
}

/// Where a layer is in its attach/drag lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayerState {
    #[default]
    Detached,
    Idle,
    Dragging,
}

/// A shape that can be dragged across a map at its true size.
#[derive(Debug, Clone)]
pub struct TrueSizeLayer {
    id: InstanceId,
    feature: Feature,
    style: StyleOptions,
    center_mode: CenterMode,
    state: LayerState,
    /// The map layer currently showing `feature`, while attached.
    rendered: Option<LayerId>,
}

impl TrueSizeLayer {
    /// Create a layer, taking its id from the process-wide counter.
    pub fn new(feature: impl Into<Feature>, options: TrueSizeOptions) -> Self {
        Self::with_counter(feature, options, IdCounter::global())
    }

    /// Create a layer with an id from `counter`.
    pub fn with_counter(
        feature: impl Into<Feature>,
        options: TrueSizeOptions,
        counter: &IdCounter,
    ) -> Self {
        let feature = feature.into();
        let id = counter.next_id();
        if !feature.geometry.kind.is_supported() {
            warn!(
                "{id}: geometry type {} is not supported, it will be rebuilt as a single ring",
                feature.geometry.kind
            );
        }
        Self {
            id,
            feature,
            style: StyleOptions::default().merged(&options.style),
            center_mode: options.center_mode,
            state: LayerState::Detached,
            rendered: None,
        }
    }

    /// Create a layer from GeoJSON text (a Feature or a bare Geometry).
    pub fn from_json_str(json: &str, options: TrueSizeOptions) -> LayerResult<Self> {
        Ok(Self::new(Feature::from_json_str(json)?, options))
    }

    /// Instance id, unique for the counter it came from.
    pub fn id(&self) -> InstanceId {
        self.id
    }

    /// Current lifecycle state.
    pub fn state(&self) -> LayerState {
        self.state
    }

    /// The feature as currently shown (or last shown).
    pub fn feature(&self) -> &Feature {
        &self.feature
    }

    /// Shorthand for the feature geometry.
    pub fn geometry(&self) -> &Geometry {
        &self.feature.geometry
    }

    /// Style merged over the defaults.
    pub fn style(&self) -> &StyleOptions {
        &self.style
    }

    /// How the shape center is derived.
    pub fn center_mode(&self) -> CenterMode {
        self.center_mode
    }

    /// The map layer currently showing the shape, if attached.
    pub fn rendered_layer(&self) -> Option<LayerId> {
        self.rendered
    }

    /// Current center of the shape; `None` for an empty shape.
    pub fn center(&self) -> Option<LngLat> {
        center_of(&self.feature.geometry.vertices(), self.center_mode)
    }

    /// Render the shape on `map` and make it draggable.
    ///
    /// On failure nothing stays on the map and the layer is left as it was.
    pub fn attach<M: MapRenderer>(&mut self, map: &mut M) -> LayerResult<()> {
        let layer_id = self.render(map, &self.feature)?;
        self.rendered = Some(layer_id);
        self.state = LayerState::Idle;
        debug!("{}: attached as map layer {layer_id}", self.id);
        Ok(())
    }

    /// Remove the shape from `map`.
    pub fn detach<M: MapRenderer>(&mut self, map: &mut M) -> LayerResult<()> {
        let layer_id = self.rendered.ok_or(LayerError::NotAttached)?;
        map.remove_layer(layer_id)?;
        self.rendered = None;
        self.state = LayerState::Detached;
        debug!("{}: detached", self.id);
        Ok(())
    }

    /// Handle a drag event from the rendered layer.
    pub fn handle_drag<M: MapRenderer>(&mut self, map: &mut M, event: DragEvent) -> LayerResult<()> {
        if self.rendered.is_none() {
            return Err(LayerError::NotAttached);
        }
        match event {
            DragEvent::Start { .. } => {
                self.state = LayerState::Dragging;
                debug!("{}: drag started", self.id);
                Ok(())
            }
            DragEvent::Move { position } => {
                let new_center = map.container_point_to_lng_lat(position);
                self.drag_to(map, new_center)
            }
            DragEvent::End { .. } => {
                self.state = LayerState::Idle;
                debug!("{}: drag ended", self.id);
                Ok(())
            }
        }
    }

    /// Move the shape so its center is `new_center`, keeping its true size.
    ///
    /// The snapshot is always taken from the shape as currently shown, so
    /// consecutive moves chain from where the previous one left the shape.
    /// The replacement is added and made draggable before the old layer is
    /// removed; if any step fails, the old layer stays current.
    pub fn drag_to<M: MapRenderer>(&mut self, map: &mut M, new_center: LngLat) -> LayerResult<()> {
        let old_layer = self.rendered.ok_or(LayerError::NotAttached)?;

        let snapshot = Snapshot::capture(&self.feature.geometry.vertices(), self.center_mode);
        let moved = snapshot.project_to(new_center);
        let feature = self
            .feature
            .with_geometry(self.feature.geometry.rebuild(moved));

        let new_layer = self.render(map, &feature)?;
        if let Err(err) = map.remove_layer(old_layer) {
            discard(map, new_layer);
            return Err(err.into());
        }
        self.rendered = Some(new_layer);
        self.feature = feature;
        self.state = LayerState::Dragging;

        trace!(
            "{}: moved {} vertices to center ({}, {}) as map layer {new_layer}",
            self.id,
            snapshot.len(),
            new_center.lng,
            new_center.lat
        );
        Ok(())
    }

    /// Add `feature` to `map` with drag enabled, removing it again if drag
    /// cannot be enabled.
    fn render<M: MapRenderer>(&self, map: &mut M, feature: &Feature) -> LayerResult<LayerId> {
        let layer_id = map.add_feature(feature, &self.style)?;
        if let Err(err) = map.enable_drag(layer_id) {
            discard(map, layer_id);
            return Err(err.into());
        }
        Ok(layer_id)
    }
}

/// Best-effort removal of a layer that never became current.
fn discard<M: MapRenderer>(map: &mut M, layer_id: LayerId) {
    if let Err(err) = map.remove_layer(layer_id) {
        warn!("Failed to remove map layer {layer_id}: {err}");
    }
}
