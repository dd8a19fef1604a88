use crate::constants::{
    DEFAULT_OFFSET_X, DEFAULT_OFFSET_X_MOD, DEFAULT_OFFSET_Y, DEFAULT_OFFSET_Y_MOD,
};
use serde::{Deserialize, Serialize};

/// Offsets applied to every tracked item.
///
/// `base_*` is always added to the window origin; `mod_*` only when the item
/// carries an offset modifier. Field names on the wire follow the host's
/// property keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OffsetSettings {
    #[serde(rename = "offsetX")]
    pub base_x: i32,
    #[serde(rename = "offsetY")]
    pub base_y: i32,
    #[serde(rename = "offsetXMod")]
    pub mod_x: i32,
    #[serde(rename = "offsetYMod")]
    pub mod_y: i32,
}

impl Default for OffsetSettings {
    fn default() -> Self {
        Self {
            base_x: DEFAULT_OFFSET_X,
            base_y: DEFAULT_OFFSET_Y,
            mod_x: DEFAULT_OFFSET_X_MOD,
            mod_y: DEFAULT_OFFSET_Y_MOD,
        }
    }
}
