use super::{ItemRef, SceneHost, SourceRef};
use crate::models::{CanvasDimensions, Position};
use log::warn;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// One item of the active scene together with its source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SceneItemDesc {
    pub id: ItemRef,
    pub source_id: SourceRef,
    pub kind: String,
    pub name: String,
    #[serde(default)]
    pub settings: Map<String, Value>,
}

impl SceneItemDesc {
    pub fn new(id: u64, source_id: u64, kind: &str, name: &str) -> Self {
        Self {
            id: ItemRef(id),
            source_id: SourceRef(source_id),
            kind: kind.to_string(),
            name: name.to_string(),
            settings: Map::new(),
        }
    }

    pub fn with_setting(mut self, key: &str, value: &str) -> Self {
        self.settings.insert(key.to_string(), Value::String(value.to_string()));
        self
    }
}

/// In-process mirror of the host's active scene.
///
/// Position writes and releases are queued so a bridge can forward them to
/// the real host; item references are counted so leaks are observable.
#[derive(Debug, Default)]
pub struct MemoryHost {
    items: Vec<SceneItemDesc>,
    canvas: CanvasDimensions,
    positions: HashMap<ItemRef, Position>,
    pending_moves: Vec<(ItemRef, Position)>,
    pending_releases: Vec<ItemRef>,
    acquired: HashMap<ItemRef, usize>,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_scene(items: Vec<SceneItemDesc>, canvas: CanvasDimensions) -> Self {
        Self {
            items,
            canvas,
            ..Self::default()
        }
    }

    /// Replace the mirrored scene wholesale.
    pub fn replace_scene(&mut self, items: Vec<SceneItemDesc>) {
        self.items = items;
    }

    pub fn set_canvas(&mut self, canvas: CanvasDimensions) {
        self.canvas = canvas;
    }

    /// Last position written for an item.
    pub fn position_of(&self, item: ItemRef) -> Option<Position> {
        self.positions.get(&item).copied()
    }

    /// Take and clear the position writes queued since the last call.
    pub fn take_moves(&mut self) -> Vec<(ItemRef, Position)> {
        std::mem::take(&mut self.pending_moves)
    }

    /// Take and clear the releases queued since the last call.
    pub fn take_releases(&mut self) -> Vec<ItemRef> {
        std::mem::take(&mut self.pending_releases)
    }

    /// Item references handed out and not yet released.
    pub fn outstanding_refs(&self) -> usize {
        self.acquired.values().sum()
    }

    fn source(&self, source: SourceRef) -> Option<&SceneItemDesc> {
        self.items.iter().find(|i| i.source_id == source)
    }
}

impl SceneHost for MemoryHost {
    fn scene_items(&mut self) -> Vec<ItemRef> {
        let ids: Vec<ItemRef> = self.items.iter().map(|i| i.id).collect();
        for id in &ids {
            *self.acquired.entry(*id).or_insert(0) += 1;
        }
        ids
    }

    fn item_source(&self, item: ItemRef) -> Option<SourceRef> {
        self.items.iter().find(|i| i.id == item).map(|i| i.source_id)
    }

    fn source_kind(&self, source: SourceRef) -> Option<String> {
        self.source(source).map(|i| i.kind.clone())
    }

    fn source_name(&self, source: SourceRef) -> Option<String> {
        self.source(source).map(|i| i.name.clone())
    }

    fn source_setting(&self, source: SourceRef, key: &str) -> Option<String> {
        self.source(source)?
            .settings
            .get(key)?
            .as_str()
            .map(str::to_string)
    }

    fn set_item_position(&mut self, item: ItemRef, position: Position) {
        self.positions.insert(item, position);
        self.pending_moves.push((item, position));
    }

    fn release_item(&mut self, item: ItemRef) {
        let Some(count) = self.acquired.get_mut(&item) else {
            warn!("Release of unacquired scene item {}", item.0);
            return;
        };
        *count -= 1;
        if *count == 0 {
            self.acquired.remove(&item);
        }
        self.pending_releases.push(item);
    }

    fn canvas_dimensions(&self) -> CanvasDimensions {
        self.canvas
    }
}
