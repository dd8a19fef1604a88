use crate::constants::WINDOW_SETTING_KEY;
use crate::error::TrackError;
use crate::host::{ItemRef, SceneHost, SourceRef};
use crate::models::{parse_tag, CanvasDimensions, ModifierSet, WindowIdentifier};
use crate::platform::{WindowHandle, WindowSystem};
use log::{debug, warn};
use std::collections::HashMap;

/// A scene item opted into tracking, with everything a tick needs.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackedItem {
    pub item: ItemRef,
    pub source: SourceRef,
    pub name: String,
    pub modifiers: ModifierSet,
    pub window: WindowIdentifier,
    /// `None` when the window could not be resolved.
    pub handle: Option<WindowHandle>,
}

/// Result of one scan pass.
#[derive(Debug, Default)]
pub struct ScanOutcome {
    pub items: Vec<TrackedItem>,
    pub canvas: CanvasDimensions,
}

/// Builds the tracked-item list from the active scene.
///
/// Window lookups are cached by the raw persisted identifier across scans,
/// failures included, so a missing window is not searched for on every pass.
/// The cache is never invalidated: a window that closes and reopens under the
/// same identifier keeps its first handle.
pub struct Scanner {
    window_capture_kind: String,
    handle_cache: HashMap<String, Option<WindowHandle>>,
}

impl Scanner {
    pub fn new(window_capture_kind: &str) -> Self {
        Self {
            window_capture_kind: window_capture_kind.to_string(),
            handle_cache: HashMap::new(),
        }
    }

    /// Release `previous`, then build a fresh list from the active scene.
    pub fn scan<H, W>(&mut self, host: &mut H, windows: &W, previous: Vec<TrackedItem>) -> ScanOutcome
    where
        H: SceneHost + ?Sized,
        W: WindowSystem + ?Sized,
    {
        for tracked in previous {
            host.release_item(tracked.item);
        }

        let mut items = Vec::new();
        for item in host.scene_items() {
            match self.inspect(host, windows, item) {
                Some(tracked) => items.push(tracked),
                None => host.release_item(item),
            }
        }

        let canvas = host.canvas_dimensions();
        debug!(
            "Scanned scene: {} tracked item(s), canvas {}x{}",
            items.len(),
            canvas.width,
            canvas.height
        );

        ScanOutcome { items, canvas }
    }

    fn inspect<H, W>(&mut self, host: &H, windows: &W, item: ItemRef) -> Option<TrackedItem>
    where
        H: SceneHost + ?Sized,
        W: WindowSystem + ?Sized,
    {
        let source = host.item_source(item)?;
        if host.source_kind(source)? != self.window_capture_kind {
            return None;
        }
        let name = host.source_name(source)?;
        let modifiers = parse_tag(&name)?;
        for flag in modifiers.unrecognized() {
            debug!("Ignoring unknown modifier '{flag}' on '{name}'");
        }

        let raw = host
            .source_setting(source, WINDOW_SETTING_KEY)
            .unwrap_or_default();
        let window = WindowIdentifier::parse(&raw);
        let handle = self.resolve(windows, &window);

        Some(TrackedItem {
            item,
            source,
            name,
            modifiers,
            window,
            handle,
        })
    }

    fn resolve<W>(&mut self, windows: &W, window: &WindowIdentifier) -> Option<WindowHandle>
    where
        W: WindowSystem + ?Sized,
    {
        if let Some(cached) = self.handle_cache.get(&window.raw) {
            return *cached;
        }

        let handle = match windows.find_window(&window.title) {
            Ok(handle) => Some(handle),
            Err(e) => {
                warn!("{e}");
                None
            }
        };
        self.handle_cache.insert(window.raw.clone(), handle);
        handle
    }

    /// Result of the last lookup for a raw identifier, if any was made.
    pub fn cached_handle(&self, raw: &str) -> Option<Option<WindowHandle>> {
        self.handle_cache.get(raw).copied()
    }
}

impl TrackedItem {
    /// Handle to query, or the error explaining why there is none.
    pub fn require_handle(&self) -> Result<WindowHandle, TrackError> {
        self.handle.ok_or_else(|| TrackError::WindowNotFound {
            title: self.window.title.clone(),
        })
    }
}
