use super::{WindowHandle, WindowSystem};
use crate::error::TrackError;
use crate::models::WindowRect;
use log::warn;
use x11rb::connection::Connection;
use x11rb::protocol::xproto::{AtomEnum, ConnectionExt, Window};
use x11rb::rust_connection::RustConnection;

pub struct X11Windows {
    conn: Option<RustConnection>,
    root: Window,
}

impl Default for X11Windows {
    fn default() -> Self {
        Self::new()
    }
}

impl X11Windows {
    pub fn new() -> Self {
        match x11rb::connect(None) {
            Ok((conn, screen_num)) => {
                let Some(root) = conn.setup().roots.get(screen_num).map(|s| s.root) else {
                    warn!(
                        "Invalid screen number {screen_num} ({} screens available). Window tracking disabled.",
                        conn.setup().roots.len()
                    );
                    return Self { conn: None, root: 0 };
                };
                Self { conn: Some(conn), root }
            }
            Err(e) => {
                // Keep running without a display; every lookup then fails per item
                warn!("Failed to connect to X server: {e}. Window tracking disabled.");
                Self { conn: None, root: 0 }
            }
        }
    }

    fn get_atom(&self, name: &str) -> Option<u32> {
        self.conn
            .as_ref()?
            .intern_atom(false, name.as_bytes())
            .ok()?
            .reply()
            .ok()
            .map(|r| r.atom)
    }

    fn get_window_property(&self, window: Window, atom: u32) -> Option<String> {
        let reply = self
            .conn
            .as_ref()?
            .get_property(false, window, atom, AtomEnum::ANY, 0, 1024)
            .ok()?
            .reply()
            .ok()?;

        if reply.value.is_empty() {
            return None;
        }

        String::from_utf8(reply.value).ok()
    }

    fn window_title(&self, window: Window) -> Option<String> {
        self.get_atom("_NET_WM_NAME")
            .and_then(|atom| self.get_window_property(window, atom))
            .or_else(|| self.get_window_property(window, AtomEnum::WM_NAME.into()))
    }

    /// Top-level client windows, preferring the EWMH client list.
    fn client_windows(&self) -> Vec<Window> {
        let Some(conn) = self.conn.as_ref() else {
            return Vec::new();
        };

        let from_client_list = self.get_atom("_NET_CLIENT_LIST").and_then(|atom| {
            let reply = conn
                .get_property(false, self.root, atom, AtomEnum::WINDOW, 0, u32::MAX)
                .ok()?
                .reply()
                .ok()?;
            let windows: Vec<Window> = reply.value32()?.collect();
            (!windows.is_empty()).then_some(windows)
        });

        if let Some(windows) = from_client_list {
            return windows;
        }

        conn.query_tree(self.root)
            .ok()
            .and_then(|cookie| cookie.reply().ok())
            .map(|tree| tree.children)
            .unwrap_or_default()
    }
}

impl WindowSystem for X11Windows {
    fn find_window(&self, title: &str) -> Result<WindowHandle, TrackError> {
        self.client_windows()
            .into_iter()
            .find(|&window| self.window_title(window).as_deref() == Some(title))
            .map(|window| WindowHandle(u64::from(window)))
            .ok_or_else(|| TrackError::WindowNotFound { title: title.to_string() })
    }

    fn window_rect(&self, handle: WindowHandle) -> Result<WindowRect, TrackError> {
        let failed = |reason: String| TrackError::GeometryQueryFailed { handle, reason };

        let conn = self
            .conn
            .as_ref()
            .ok_or_else(|| failed("no X server connection".into()))?;
        let window =
            Window::try_from(handle.0).map_err(|_| failed("handle is not an X11 window id".into()))?;

        let geometry = conn
            .get_geometry(window)
            .map_err(|e| failed(e.to_string()))?
            .reply()
            .map_err(|e| failed(e.to_string()))?;
        let origin = conn
            .translate_coordinates(window, self.root, 0, 0)
            .map_err(|e| failed(e.to_string()))?
            .reply()
            .map_err(|e| failed(e.to_string()))?;

        let left = i32::from(origin.dst_x);
        let top = i32::from(origin.dst_y);
        Ok(WindowRect::new(
            left,
            top,
            left + i32::from(geometry.width),
            top + i32::from(geometry.height),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[ignore] // Requires X11 display
    fn test_find_missing_window() {
        let windows = X11Windows::new();
        let result = windows.find_window("no window is ever called this 7f3a9c");
        assert!(matches!(result, Err(TrackError::WindowNotFound { .. })));
    }

    #[test]
    fn test_rect_fails_without_connection() {
        let windows = X11Windows { conn: None, root: 0 };
        let result = windows.window_rect(WindowHandle(7));
        assert!(matches!(result, Err(TrackError::GeometryQueryFailed { .. })));
    }

    #[test]
    fn test_find_fails_without_connection() {
        let windows = X11Windows { conn: None, root: 0 };
        assert_eq!(
            windows.find_window("Editor"),
            Err(TrackError::WindowNotFound { title: "Editor".into() })
        );
    }
}
