use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl CatalogError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            CatalogError::IoError(e) => format!("Could not access a file: {}", e),
            CatalogError::SerializationError(e) => {
                format!("Could not encode the catalog as JSON: {}", e)
            }
            CatalogError::TomlError(e) => format!("The seed file is not valid TOML: {}", e),
            CatalogError::InvalidConfigValueError { field, reason, .. } => {
                format!("Option '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CatalogError::IoError(_) => {
                "Check that the output directory exists and is writable"
            }
            CatalogError::SerializationError(_) => "Report this as a bug",
            CatalogError::TomlError(_) => {
                "Each [[documents]] entry needs type, title, year and author or issue_number"
            }
            CatalogError::InvalidConfigValueError { .. } => {
                "Run with --help to see the accepted options"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_converts_and_suggests_permissions() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: CatalogError = io.into();

        assert!(matches!(err, CatalogError::IoError(_)));
        assert!(err.user_friendly_message().contains("denied"));
        assert!(err.recovery_suggestion().contains("writable"));
    }

    #[test]
    fn test_invalid_value_message_names_field() {
        let err = CatalogError::InvalidConfigValueError {
            field: "output_path".to_string(),
            value: String::new(),
            reason: "Path cannot be empty".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Invalid value for 'output_path' (): Path cannot be empty"
        );
        assert!(err.user_friendly_message().contains("output_path"));
    }
}
