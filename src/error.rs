//! Error types for CyberFit Pro.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! The plain validator functions never fail; these errors belong to the layers that
//! build on them (configuration, registration, rate limiting, and the line service).

use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// A single rejected field on a registration form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Form field name (`email`, `cpf`, `birth_date`, ...)
    pub field: &'static str,
    /// Human-readable reason
    pub issue: String,
}

impl FieldError {
    pub fn new(field: &'static str, issue: impl Into<String>) -> Self {
        Self {
            field,
            issue: issue.into(),
        }
    }
}

/// Errors produced while turning a registration form into a typed registration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// One or more fields failed validation; every failing field is listed.
    #[error("Registration rejected: {} invalid field(s)", .0.len())]
    InvalidFields(Vec<FieldError>),
}

impl RegistrationError {
    /// The failing fields, in form order.
    pub fn fields(&self) -> &[FieldError] {
        match self {
            Self::InvalidFields(fields) => fields,
        }
    }
}

/// A submission arrived before its cooldown elapsed.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Too many attempts: wait {} seconds before trying again", self.retry_after_secs())]
pub struct RateLimited {
    /// Time left until the next submission is accepted
    pub retry_after: Duration,
}

impl RateLimited {
    /// Remaining wait rounded up to whole seconds.
    pub fn retry_after_secs(&self) -> u64 {
        let secs = self.retry_after.as_secs();
        if self.retry_after.subsec_nanos() > 0 {
            secs + 1
        } else {
            secs
        }
    }
}

/// Errors surfaced by the line service.
#[derive(Error, Debug)]
pub enum ServiceError {
    /// The request line was not valid JSON or did not match a known operation
    #[error("Malformed request: {0}")]
    MalformedRequest(#[from] serde_json::Error),

    /// The request line was not valid UTF-8
    #[error("Malformed request: {0}")]
    InvalidEncoding(#[from] std::str::Utf8Error),

    /// Reading or writing the transport failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with RegistrationError
pub type RegistrationResult<T> = Result<T, RegistrationError>;

/// Convenience type alias for Results with ServiceError
pub type ServiceResult<T> = Result<T, ServiceError>;
