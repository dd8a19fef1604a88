use crate::platform::WindowHandle;
use thiserror::Error;

/// Failure of a single window-system call made on behalf of one tracked item.
///
/// Both variants are handled the same way (log, skip the item, keep going);
/// they stay distinct so callers can tell which path was taken.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrackError {
    #[error("window '{title}' not found")]
    WindowNotFound { title: String },

    #[error("geometry query for window {handle} failed: {reason}")]
    GeometryQueryFailed { handle: WindowHandle, reason: String },
}

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid {field}: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Could not determine project directories")]
    NoProjectDirs,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// Bridge replies carry errors as plain strings
impl From<AppError> for String {
    fn from(e: AppError) -> Self {
        e.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_error_messages() {
        let not_found = TrackError::WindowNotFound { title: "Notepad".into() };
        assert_eq!(not_found.to_string(), "window 'Notepad' not found");

        let failed = TrackError::GeometryQueryFailed {
            handle: WindowHandle(42),
            reason: "window destroyed".into(),
        };
        assert_eq!(
            failed.to_string(),
            "geometry query for window 0x2a failed: window destroyed"
        );
    }

    #[test]
    fn test_app_error_into_string() {
        let e = AppError::InvalidInput { field: "offsetX", reason: "too large".into() };
        let s: String = e.into();
        assert_eq!(s, "Invalid offsetX: too large");
    }
}
