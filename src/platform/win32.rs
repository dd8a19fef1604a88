#![allow(unsafe_code, reason = "Win32 window queries are FFI calls")]

use super::{WindowHandle, WindowSystem};
use crate::error::TrackError;
use crate::models::WindowRect;
use std::ffi::c_void;
use windows::core::{HSTRING, PCWSTR};
use windows::Win32::Foundation::{HWND, RECT};
use windows::Win32::UI::WindowsAndMessaging::{FindWindowW, GetWindowRect};

#[derive(Default)]
pub struct Win32Windows;

impl Win32Windows {
    pub fn new() -> Self {
        Self
    }
}

#[allow(clippy::as_conversions, reason = "HWND is a pointer-sized integer handle")]
fn to_handle(hwnd: HWND) -> WindowHandle {
    WindowHandle(hwnd.0 as usize as u64)
}

#[allow(clippy::as_conversions, reason = "HWND is a pointer-sized integer handle")]
fn to_hwnd(handle: WindowHandle) -> Option<HWND> {
    let raw = usize::try_from(handle.0).ok()?;
    Some(HWND(raw as *mut c_void))
}

impl WindowSystem for Win32Windows {
    fn find_window(&self, title: &str) -> Result<WindowHandle, TrackError> {
        let wide = HSTRING::from(title);
        let hwnd = unsafe { FindWindowW(PCWSTR::null(), PCWSTR(wide.as_ptr())) }
            .map_err(|_| TrackError::WindowNotFound { title: title.to_string() })?;

        if hwnd.is_invalid() {
            return Err(TrackError::WindowNotFound { title: title.to_string() });
        }
        Ok(to_handle(hwnd))
    }

    fn window_rect(&self, handle: WindowHandle) -> Result<WindowRect, TrackError> {
        let hwnd = to_hwnd(handle).ok_or_else(|| TrackError::GeometryQueryFailed {
            handle,
            reason: "handle does not fit a window handle".into(),
        })?;

        let mut rect = RECT::default();
        unsafe { GetWindowRect(hwnd, &mut rect) }.map_err(|e| TrackError::GeometryQueryFailed {
            handle,
            reason: e.to_string(),
        })?;

        Ok(WindowRect::new(rect.left, rect.top, rect.right, rect.bottom))
    }
}
