//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, parseable addresses and filters)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ServiceConfig → Result<(), Vec<ValidationError>>

use std::net::SocketAddr;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::schema::{PolicyKind, ServiceConfig};

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address `{0}` is not a socket address")]
    BindAddress(String),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,

    #[error("observability.log_filter is invalid: {0}")]
    LogFilter(String),

    #[error("policy.newline_on_empty only applies to the default policy")]
    NewlineWithoutDefault,
}

pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if let Err(e) = EnvFilter::try_new(&config.observability.log_filter) {
        errors.push(ValidationError::LogFilter(e.to_string()));
    }

    if config.policy.newline_on_empty && config.policy.kind != PolicyKind::Default {
        errors.push(ValidationError::NewlineWithoutDefault);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
