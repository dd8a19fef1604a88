use crate::error::TrackError;
use crate::models::WindowRect;
use std::fmt;

/// Opaque handle to a real window, as issued by the window system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub u64);

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}

pub trait WindowSystem: Send + Sync {
    /// Find a top-level window whose title matches `title` exactly.
    fn find_window(&self, title: &str) -> Result<WindowHandle, TrackError>;

    /// Current screen rectangle of a window.
    fn window_rect(&self, handle: WindowHandle) -> Result<WindowRect, TrackError>;
}
