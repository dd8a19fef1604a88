pub mod config;
pub mod constants;
pub mod error;
pub mod host;
pub mod logging;
pub mod models;
pub mod native_host;
pub mod platform;
#[cfg(test)]
mod test_utils;
pub mod tracker;
pub mod validation;

pub use config::Config;
pub use error::{AppError, TrackError};
pub use host::{MemoryHost, SceneHost};
pub use platform::{NativeWindows, WindowSystem};
pub use tracker::{TrackerConfig, TrackerService};
