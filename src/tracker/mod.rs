pub mod scanner;
pub mod transform;

pub use scanner::{ScanOutcome, Scanner, TrackedItem};
pub use transform::{compute_placement, Placement};

use crate::constants::{DEFAULT_SCAN_INTERVAL_SECS, WINDOW_CAPTURE_KIND};
use crate::error::TrackError;
use crate::host::{ItemRef, SceneHost};
use crate::models::{CanvasDimensions, OffsetSettings};
use crate::platform::WindowSystem;
use log::{debug, info, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    pub scan_interval_secs: f64,
    pub window_capture_kind: String,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            scan_interval_secs: DEFAULT_SCAN_INTERVAL_SECS,
            window_capture_kind: WINDOW_CAPTURE_KIND.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MovedItem {
    pub item: ItemRef,
    pub placement: Placement,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkippedItem {
    pub item: ItemRef,
    pub error: TrackError,
}

/// What one tick did.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub rescanned: bool,
    pub moved: Vec<MovedItem>,
    pub skipped: Vec<SkippedItem>,
}

/// Drives scanning and positioning from the host's tick callback.
///
/// The tracked-item list is only ever replaced as a whole by a scan; ticks
/// read it. Everything runs on the caller's thread.
pub struct TrackerService<W: WindowSystem> {
    config: TrackerConfig,
    windows: W,
    scanner: Scanner,
    offsets: OffsetSettings,
    items: Vec<TrackedItem>,
    canvas: CanvasDimensions,
    elapsed_secs: f64,
    running: bool,
}

impl<W: WindowSystem> TrackerService<W> {
    pub fn new(windows: W, config: TrackerConfig) -> Self {
        let scanner = Scanner::new(&config.window_capture_kind);
        Self {
            config,
            windows,
            scanner,
            offsets: OffsetSettings::default(),
            items: Vec::new(),
            canvas: CanvasDimensions::default(),
            elapsed_secs: 0.0,
            running: false,
        }
    }

    /// Apply the initial settings and run the first scan.
    pub fn initialize<H: SceneHost + ?Sized>(&mut self, host: &mut H, offsets: OffsetSettings) {
        info!(
            "Starting window tracking (scan every {}s, offsets {offsets:?})",
            self.config.scan_interval_secs
        );
        self.offsets = offsets;
        self.running = true;
        self.rescan(host);
    }

    pub fn on_settings_changed(&mut self, offsets: OffsetSettings) {
        debug!("Offset settings updated: {offsets:?}");
        self.offsets = offsets;
    }

    /// Advance the scan timer by `seconds`, rescanning when the interval has
    /// passed, then reposition every tracked item. No-op until `initialize`
    /// and after `shutdown`, and for negative or non-finite `seconds`.
    pub fn on_tick<H: SceneHost + ?Sized>(&mut self, host: &mut H, seconds: f64) -> TickReport {
        let mut report = TickReport::default();
        if !self.running {
            return report;
        }
        if !seconds.is_finite() || seconds < 0.0 {
            warn!("Ignoring tick of invalid length {seconds}");
            return report;
        }

        self.elapsed_secs += seconds;
        if self.elapsed_secs > self.config.scan_interval_secs {
            self.elapsed_secs = 0.0;
            self.rescan(host);
            report.rescanned = true;
        }

        for tracked in &self.items {
            let rect = tracked
                .require_handle()
                .and_then(|handle| self.windows.window_rect(handle));

            match rect {
                Ok(rect) => {
                    let placement =
                        compute_placement(rect, &tracked.modifiers, &self.offsets, self.canvas);
                    host.set_item_position(tracked.item, placement.position);
                    report.moved.push(MovedItem { item: tracked.item, placement });
                }
                Err(error) => {
                    match &error {
                        TrackError::WindowNotFound { .. } => {
                            debug!("Failed to track window: {} ({error})", tracked.window.title);
                        }
                        TrackError::GeometryQueryFailed { .. } => {
                            warn!("Failed to track window: {} ({error})", tracked.window.title);
                        }
                    }
                    report.skipped.push(SkippedItem { item: tracked.item, error });
                }
            }
        }

        report
    }

    /// Release the current list and rebuild it from the active scene.
    pub fn rescan<H: SceneHost + ?Sized>(&mut self, host: &mut H) {
        let previous = std::mem::take(&mut self.items);
        let outcome = self.scanner.scan(host, &self.windows, previous);
        self.canvas = outcome.canvas;
        self.items = outcome.items;
    }

    /// Release every tracked item and stop.
    pub fn shutdown<H: SceneHost + ?Sized>(&mut self, host: &mut H) {
        for tracked in std::mem::take(&mut self.items) {
            host.release_item(tracked.item);
        }
        self.elapsed_secs = 0.0;
        self.running = false;
        info!("Window tracking stopped");
    }

    pub fn tracked_items(&self) -> &[TrackedItem] {
        &self.items
    }

    pub fn canvas(&self) -> CanvasDimensions {
        self.canvas
    }

    pub fn offsets(&self) -> OffsetSettings {
        self.offsets
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}
