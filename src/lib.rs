//! CyberFit Pro - validation core for a gym-management application.
//!
//! This library holds the self-contained logic behind CyberFit Pro's student,
//! instructor, and gym sign-up flows. Persistence, authentication, and email
//! delivery live in the hosted backend and are not part of this crate.
//!
//! # Architecture
//!
//! - **domain**: CPF/CNPJ checksums, phone and email rules, formatters, the DDI
//!   country table, the password policy, and typed registrations
//! - **rate_limit**: per-key submission cooldowns over an injected clock
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **observability**: Request counters reported through `tracing`
//! - **server**: JSON-lines service exposing the validators over stdio

pub mod config;
pub mod domain;
pub mod error;
pub mod observability;
pub mod rate_limit;
pub mod server;

pub use config::Config;
pub use domain::{
    format_cnpj, format_cpf, format_phone, validate_cnpj, validate_cpf, validate_email,
    validate_phone, Registration, RegistrationForm,
};
pub use error::{ConfigError, FieldError, RateLimited, RegistrationError, ServiceError};
pub use observability::{MetricsSummary, ValidationMetrics};
pub use rate_limit::{Clock, ManualClock, SubmissionLimiter, SystemClock};
pub use server::ValidationService;
