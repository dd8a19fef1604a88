use crate::constants::{MAX_OFFSET, MIN_OFFSET};
use crate::error::AppError;
use crate::models::OffsetSettings;

/// Validate a single offset value against the accepted range.
pub fn validate_offset(field: &'static str, value: i32) -> Result<(), AppError> {
    if !(MIN_OFFSET..=MAX_OFFSET).contains(&value) {
        return Err(AppError::InvalidInput {
            field,
            reason: format!("must be between {MIN_OFFSET} and {MAX_OFFSET}, got {value}"),
        });
    }
    Ok(())
}

/// Validate all four offset settings.
pub fn validate_offsets(offsets: &OffsetSettings) -> Result<(), AppError> {
    validate_offset("offsetX", offsets.base_x)?;
    validate_offset("offsetY", offsets.base_y)?;
    validate_offset("offsetXMod", offsets.mod_x)?;
    validate_offset("offsetYMod", offsets.mod_y)?;
    Ok(())
}

/// Validate the scan interval in seconds.
pub fn validate_scan_interval(secs: f64) -> Result<(), AppError> {
    if !secs.is_finite() || secs <= 0.0 {
        return Err(AppError::InvalidInput {
            field: "scan_interval_secs",
            reason: "must be a positive number of seconds".into(),
        });
    }
    Ok(())
}

/// Validate the source kind that marks window captures.
pub fn validate_source_kind(kind: &str) -> Result<(), AppError> {
    if kind.trim().is_empty() {
        return Err(AppError::InvalidInput {
            field: "window_capture_kind",
            reason: "cannot be empty".into(),
        });
    }
    Ok(())
}
