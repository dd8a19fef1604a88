//! Seam to the streaming application's scene graph.
//!
//! The tracker never owns scene items or sources; it holds references handed
//! out by the host and gives them back through [`SceneHost::release_item`].

pub mod memory;

pub use memory::{MemoryHost, SceneItemDesc};

use crate::models::{CanvasDimensions, Position};
use serde::{Deserialize, Serialize};

/// Reference to a scene item owned by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemRef(pub u64);

/// Reference to the source behind a scene item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceRef(pub u64);

pub trait SceneHost {
    /// Items of the currently active scene. Every returned item counts as
    /// acquired and must be passed to `release_item` exactly once.
    fn scene_items(&mut self) -> Vec<ItemRef>;

    fn item_source(&self, item: ItemRef) -> Option<SourceRef>;

    /// Kind id of a source, e.g. `window_capture`.
    fn source_kind(&self, source: SourceRef) -> Option<String>;

    fn source_name(&self, source: SourceRef) -> Option<String>;

    /// String value of a persisted source setting.
    fn source_setting(&self, source: SourceRef, key: &str) -> Option<String>;

    fn set_item_position(&mut self, item: ItemRef, position: Position);

    fn release_item(&mut self, item: ItemRef);

    fn canvas_dimensions(&self) -> CanvasDimensions;
}
