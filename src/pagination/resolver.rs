//! Offset/limit resolution.
//!
//! # Responsibilities
//! - Read the configured offset and limit keys from the query parameters
//! - Parse each value as an integer
//! - Substitute safe fallbacks for missing, malformed or out-of-range values
//!
//! # Design Decisions
//! - Pure function: no logging, no state; callers decide how to report fallbacks
//! - Offset and limit are resolved independently
//! - Never fails; every input maps to a valid `Pagination`

use std::collections::HashMap;
use std::num::IntErrorKind;

use crate::config::PaginationConfig;
use crate::pagination::types::Pagination;

/// The two query fields the resolver reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Offset,
    Limit,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Offset => "offset",
            Field::Limit => "limit",
        }
    }
}

/// How a single field was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The supplied value was used as-is.
    Accepted,
    /// The key was absent from the query.
    Missing,
    /// The value did not parse as an integer.
    NotAnInteger,
    /// The limit was `<= 0` or above `max_limit`.
    OutOfBounds,
    /// A negative offset was raised to 0.
    Clamped,
}

impl Outcome {
    pub fn is_fallback(&self) -> bool {
        !matches!(self, Outcome::Accepted)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Accepted => "accepted",
            Outcome::Missing => "missing",
            Outcome::NotAnInteger => "not_an_integer",
            Outcome::OutOfBounds => "out_of_bounds",
            Outcome::Clamped => "clamped",
        }
    }
}

/// Result of resolving one request's query parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub pagination: Pagination,
    pub offset: Outcome,
    pub limit: Outcome,
}

impl Resolution {
    /// Fields that did not take the supplied value, offset first.
    pub fn fallbacks(&self) -> impl Iterator<Item = (Field, Outcome)> {
        [(Field::Offset, self.offset), (Field::Limit, self.limit)]
            .into_iter()
            .filter(|(_, outcome)| outcome.is_fallback())
    }
}

/// Resolve the offset/limit pair from `params` under `config`.
pub fn resolve(params: &HashMap<String, String>, config: &PaginationConfig) -> Resolution {
    let (offset, offset_outcome) = resolve_offset(params.get(&config.offset_key), config);
    let (limit, limit_outcome) = resolve_limit(params.get(&config.limit_key), config);

    Resolution {
        pagination: Pagination { offset, limit },
        offset: offset_outcome,
        limit: limit_outcome,
    }
}

fn resolve_offset(raw: Option<&String>, config: &PaginationConfig) -> (i64, Outcome) {
    let Some(raw) = raw else {
        return (0, Outcome::Missing);
    };

    match parse_integer(raw) {
        Ok(offset) if offset < 0 && config.clamp_negative_offset => (0, Outcome::Clamped),
        Ok(offset) => (offset, Outcome::Accepted),
        Err(_) => (0, Outcome::NotAnInteger),
    }
}

fn resolve_limit(raw: Option<&String>, config: &PaginationConfig) -> (u32, Outcome) {
    let Some(raw) = raw else {
        return (config.default_limit, Outcome::Missing);
    };

    let limit = match parse_integer(raw) {
        Ok(limit) => limit,
        // Well-formed but wider than i64: certainly out of range.
        Err(IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            return (config.default_limit, Outcome::OutOfBounds);
        }
        Err(_) => return (config.default_limit, Outcome::NotAnInteger),
    };

    if limit <= 0 || limit > i64::from(config.max_limit) {
        return (config.default_limit, Outcome::OutOfBounds);
    }

    // 0 < limit <= max_limit, so the narrowing cannot fail.
    match u32::try_from(limit) {
        Ok(limit) => (limit, Outcome::Accepted),
        Err(_) => (config.default_limit, Outcome::OutOfBounds),
    }
}

/// Parse a decimal integer, ignoring surrounding Unicode whitespace.
///
/// Only an optional sign followed by ASCII digits is accepted; `5_0` is not an integer.
fn parse_integer(raw: &str) -> Result<i64, IntErrorKind> {
    raw.trim().parse::<i64>().map_err(|e| e.kind().clone())
}
