pub mod types;

pub use types::{WindowHandle, WindowSystem};

#[cfg(target_os = "linux")]
pub mod linux;

#[cfg(windows)]
pub mod win32;

#[cfg(target_os = "linux")]
pub use linux::X11Windows as NativeWindows;

#[cfg(windows)]
pub use win32::Win32Windows as NativeWindows;

// Inert backend for platforms without a window system binding
#[cfg(not(any(target_os = "linux", windows)))]
pub struct NativeWindows;

#[cfg(not(any(target_os = "linux", windows)))]
impl WindowSystem for NativeWindows {
    fn find_window(&self, title: &str) -> Result<WindowHandle, crate::error::TrackError> {
        Err(crate::error::TrackError::WindowNotFound { title: title.to_string() })
    }

    fn window_rect(
        &self,
        handle: WindowHandle,
    ) -> Result<crate::models::WindowRect, crate::error::TrackError> {
        Err(crate::error::TrackError::GeometryQueryFailed {
            handle,
            reason: "window tracking is not supported on this platform".into(),
        })
    }
}

#[cfg(not(any(target_os = "linux", windows)))]
impl NativeWindows {
    pub fn new() -> Self {
        log::warn!("No window system binding for this platform. Window tracking disabled.");
        Self
    }
}
