use crate::utils::error::{InventoryError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// Longest trim level accepted at the request boundary.
pub const TRIM_MAX_LENGTH: usize = 30;

static TRIM_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(?-u:[\w\s])*$").expect("trim pattern is a valid regex"));

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_trim(field_name: &str, trim: &str) -> Result<()> {
    validate_max_length(field_name, trim, TRIM_MAX_LENGTH)?;

    if !TRIM_PATTERN.is_match(trim) {
        return Err(InventoryError::InvalidParameter {
            field: field_name.to_string(),
            value: trim.to_string(),
            reason: "Value may only contain ASCII letters, digits, underscores and spaces".to_string(),
        });
    }
    Ok(())
}

pub fn validate_max_length(field_name: &str, value: &str, max_length: usize) -> Result<()> {
    let length = value.chars().count();
    if length > max_length {
        return Err(InventoryError::InvalidParameter {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Length {} exceeds maximum of {}", length, max_length),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(InventoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(InventoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_file_extension(field_name: &str, file: &str, allowed_extensions: &[&str]) -> Result<()> {
    match std::path::Path::new(file)
        .extension()
        .and_then(|ext| ext.to_str())
    {
        Some(extension) if allowed_extensions.contains(&extension) => Ok(()),
        Some(extension) => Err(InventoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: format!(
                "Unsupported file extension: {}. Allowed extensions: {}",
                extension,
                allowed_extensions.join(", ")
            ),
        }),
        None => Err(InventoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: file.to_string(),
            reason: "File has no extension or invalid filename".to_string(),
        }),
    }
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(InventoryError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
