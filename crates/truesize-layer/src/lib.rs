//! TrueSize Layer Library
//!
//! A draggable map layer that keeps a shape at its true real-world size while
//! it moves. Rendering, tiles and input capture belong to the host map; this
//! crate talks to it through the [`MapRenderer`] trait.

pub mod layer;
pub mod map;
pub mod memory;
pub mod viewport;

pub use layer::{LayerError, LayerResult, LayerState, TrueSizeLayer, TrueSizeOptions};
pub use map::{DragEvent, LayerId, MapError, MapRenderer, MapResult};
pub use memory::{MemoryMap, RenderedLayer};
pub use viewport::Viewport;
