//! Shared test utilities for wintrack.
//!
//! Provides a scripted window system and scene builders used across test modules.

#![cfg(test)]

use crate::constants::{WINDOW_CAPTURE_KIND, WINDOW_SETTING_KEY};
use crate::error::TrackError;
use crate::host::SceneItemDesc;
use crate::models::WindowRect;
use crate::platform::{WindowHandle, WindowSystem};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

/// Window system backed by fixed title and rectangle tables.
#[derive(Default)]
pub struct FakeWindows {
    titles: HashMap<String, WindowHandle>,
    rects: Mutex<HashMap<WindowHandle, WindowRect>>,
    lookups: AtomicUsize,
}

impl FakeWindows {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_window(mut self, title: &str, handle: u64, rect: (i32, i32, i32, i32)) -> Self {
        let handle = WindowHandle(handle);
        self.titles.insert(title.to_string(), handle);
        self.rects
            .get_mut()
            .unwrap()
            .insert(handle, WindowRect::new(rect.0, rect.1, rect.2, rect.3));
        self
    }

    /// Number of `find_window` calls made so far.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    pub fn move_window(&self, handle: u64, rect: (i32, i32, i32, i32)) {
        self.rects
            .lock()
            .unwrap()
            .insert(WindowHandle(handle), WindowRect::new(rect.0, rect.1, rect.2, rect.3));
    }

    /// Forget a window's geometry, as if it had been closed.
    pub fn close_window(&self, handle: u64) {
        self.rects.lock().unwrap().remove(&WindowHandle(handle));
    }
}

impl WindowSystem for FakeWindows {
    fn find_window(&self, title: &str) -> Result<WindowHandle, TrackError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.titles
            .get(title)
            .copied()
            .ok_or_else(|| TrackError::WindowNotFound { title: title.to_string() })
    }

    fn window_rect(&self, handle: WindowHandle) -> Result<WindowRect, TrackError> {
        self.rects
            .lock()
            .unwrap()
            .get(&handle)
            .copied()
            .ok_or_else(|| TrackError::GeometryQueryFailed {
                handle,
                reason: "window destroyed".into(),
            })
    }
}

/// A window capture item whose source id equals its item id.
pub fn capture(id: u64, name: &str, window: &str) -> SceneItemDesc {
    SceneItemDesc::new(id, id, WINDOW_CAPTURE_KIND, name).with_setting(WINDOW_SETTING_KEY, window)
}
