use crate::utils::error::{CatalogError, Result};
use std::path::{Path, MAIN_SEPARATOR};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: &str, reason: &str) -> CatalogError {
    CatalogError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(invalid(field_name, path, "Path cannot be empty"));
    }
    if path.contains('\0') {
        return Err(invalid(field_name, path, "Path contains null bytes"));
    }
    Ok(())
}

/// A path the export can be written to: a valid path that names a file,
/// not a directory.
pub fn validate_file_target(field_name: &str, path: &str) -> Result<()> {
    validate_path(field_name, path)?;

    if path.ends_with('/') || path.ends_with(MAIN_SEPARATOR) || Path::new(path).is_dir() {
        return Err(invalid(field_name, path, "Path must name a file, not a directory"));
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field_name, value, "Value cannot be empty or whitespace-only"));
    }
    Ok(())
}
