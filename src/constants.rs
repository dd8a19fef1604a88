// src/constants.rs

/// Default base offset applied to every tracked window on the X axis
pub const DEFAULT_OFFSET_X: i32 = 8;

/// Default base offset applied to every tracked window on the Y axis
pub const DEFAULT_OFFSET_Y: i32 = 50;

/// Default modifier offset on the X axis (only applied with an offset modifier)
pub const DEFAULT_OFFSET_X_MOD: i32 = 1920;

/// Default modifier offset on the Y axis (only applied with an offset modifier)
pub const DEFAULT_OFFSET_Y_MOD: i32 = 0;

/// Smallest accepted value for any offset setting
pub const MIN_OFFSET: i32 = -100_000;

/// Largest accepted value for any offset setting
pub const MAX_OFFSET: i32 = 100_000;

/// Seconds between two scans of the active scene
pub const DEFAULT_SCAN_INTERVAL_SECS: f64 = 1.0;

/// Source kind id of the host's window capture source
pub const WINDOW_CAPTURE_KIND: &str = "window_capture";

/// Source setting holding the persisted window identifier
pub const WINDOW_SETTING_KEY: &str = "window";

/// Token the host uses to escape a colon inside a window title
pub const ESCAPED_COLON: &str = "#3A";

/// Maximum bridge message size (1 MiB)
pub const MAX_MESSAGE_SIZE: usize = 1024 * 1024;
