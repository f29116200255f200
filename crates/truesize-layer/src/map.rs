//! Map renderer abstraction.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use truesize_core::{Feature, LngLat, StyleOptions};
use uuid::Uuid;

/// Handle of one rendered feature on the map.
pub type LayerId = Uuid;

/// Map renderer errors.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("Layer not found: {0}")]
    LayerNotFound(LayerId),
    #[error("Render failed: {0}")]
    RenderFailed(String),
}

/// Result type for map operations.
pub type MapResult<T> = Result<T, MapError>;

/// Drag gesture on a rendered layer, in container pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum DragEvent {
    Start { position: Point },
    Move { position: Point },
    End { position: Point },
}

impl DragEvent {
    pub fn position(&self) -> Point {
        match self {
            DragEvent::Start { position }
            | DragEvent::Move { position }
            | DragEvent::End { position } => *position,
        }
    }
}

/// Trait for the host map a layer draws into.
///
/// Every rendered feature is a separate layer with its own id. Drag capability
/// belongs to the rendered layer, so it is lost when that layer is removed.
pub trait MapRenderer {
    /// Draw a feature and return the id of the new layer.
    fn add_feature(&mut self, feature: &Feature, style: &StyleOptions) -> MapResult<LayerId>;

    /// Remove a previously added layer.
    fn remove_layer(&mut self, id: LayerId) -> MapResult<()>;

    /// Make a rendered layer draggable; its drag events go to the owner.
    fn enable_drag(&mut self, id: LayerId) -> MapResult<()>;

    /// Convert a container pixel position to a geographic position.
    fn container_point_to_lng_lat(&self, point: Point) -> LngLat;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_event_position() {
        let p = Point::new(3.0, 4.0);
        assert_eq!(DragEvent::Start { position: p }.position(), p);
        assert_eq!(DragEvent::Move { position: p }.position(), p);
        assert_eq!(DragEvent::End { position: p }.position(), p);
    }
}
