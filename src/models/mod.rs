pub mod geometry;
pub mod settings;
pub mod tag;
pub mod window_id;

pub use geometry::{CanvasDimensions, Position, Size, WindowRect};
pub use settings::OffsetSettings;
pub use tag::{parse_tag, Modifier, ModifierSet};
pub use window_id::WindowIdentifier;
