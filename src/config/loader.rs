//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ServiceConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join(.0))]
    Validation(Vec<ValidationError>),
}

fn join(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<ServiceConfig, ConfigError> {
    let config: ServiceConfig = toml::from_str(content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_yields_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.pagination.default_limit, 20);
        assert_eq!(config.pagination.max_limit, 100);
        assert_eq!(config.pagination.offset_key, "offset");
        assert_eq!(config.pagination.limit_key, "limit");
        assert!(!config.pagination.clamp_negative_offset);
    }

    #[test]
    fn test_partial_pagination_section() {
        let config = parse_config(
            r#"
            [pagination]
            max_limit = 500
            limit_key = "per_page"
            "#,
        )
        .unwrap();
        assert_eq!(config.pagination.max_limit, 500);
        assert_eq!(config.pagination.limit_key, "per_page");
        assert_eq!(config.pagination.default_limit, 20);
        assert_eq!(config.pagination.offset_key, "offset");
    }

    #[test]
    fn test_negative_limit_is_a_parse_error() {
        let err = parse_config("[pagination]\ndefault_limit = -1\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_semantic_errors_reported() {
        let err = parse_config("[pagination]\ndefault_limit = 200\n").unwrap_err();
        match err {
            ConfigError::Validation(errors) => assert_eq!(errors.len(), 1),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/pagination.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
