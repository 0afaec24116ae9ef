//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (limits > 0, timeouts > 0)
//! - Check that addresses parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;

use crate::config::schema::{PaginationConfig, ServiceConfig};

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("pagination.default_limit must be greater than 0")]
    ZeroDefaultLimit,

    #[error("pagination.max_limit must be greater than 0")]
    ZeroMaxLimit,

    #[error("pagination.default_limit ({default_limit}) exceeds max_limit ({max_limit})")]
    DefaultAboveMax { default_limit: u32, max_limit: u32 },

    #[error("pagination.{0} must not be empty")]
    EmptyKey(&'static str),

    #[error("pagination.offset_key and pagination.limit_key are both {0:?}")]
    DuplicateKey(String),

    #[error("timeouts.request_secs must be greater than 0")]
    ZeroRequestTimeout,

    #[error("{field} is not a valid socket address: {value:?}")]
    InvalidAddress { field: &'static str, value: String },
}

/// Validate the pagination section on its own.
pub fn validate_pagination(config: &PaginationConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    check_pagination(config, &mut errors);
    finish(errors)
}

/// Validate the whole service configuration.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    check_pagination(&config.pagination, &mut errors);

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroRequestTimeout);
    }

    check_address("listener.bind_address", &config.listener.bind_address, &mut errors);
    if config.observability.metrics_enabled {
        check_address(
            "observability.metrics_address",
            &config.observability.metrics_address,
            &mut errors,
        );
    }

    finish(errors)
}

fn check_pagination(config: &PaginationConfig, errors: &mut Vec<ValidationError>) {
    if config.default_limit == 0 {
        errors.push(ValidationError::ZeroDefaultLimit);
    }
    if config.max_limit == 0 {
        errors.push(ValidationError::ZeroMaxLimit);
    }
    // The default is the fallback for out-of-range limits, so it must be in range itself.
    if config.default_limit > config.max_limit && config.max_limit > 0 {
        errors.push(ValidationError::DefaultAboveMax {
            default_limit: config.default_limit,
            max_limit: config.max_limit,
        });
    }

    if config.offset_key.is_empty() {
        errors.push(ValidationError::EmptyKey("offset_key"));
    }
    if config.limit_key.is_empty() {
        errors.push(ValidationError::EmptyKey("limit_key"));
    }
    if !config.offset_key.is_empty() && config.offset_key == config.limit_key {
        errors.push(ValidationError::DuplicateKey(config.offset_key.clone()));
    }
}

fn check_address(field: &'static str, value: &str, errors: &mut Vec<ValidationError>) {
    if value.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field,
            value: value.to_string(),
        });
    }
}

fn finish(errors: Vec<ValidationError>) -> Result<(), Vec<ValidationError>> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
