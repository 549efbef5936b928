// --- File: crates/agendify_common/src/error.rs ---
use std::fmt;
use thiserror::Error;

/// The base error type for all Agendify errors.
///
/// Each crate converts its own error type into this one at the HTTP boundary.
#[derive(Error, Debug)]
pub enum AgendifyError {
    /// Error occurred during an HTTP request
    #[error("HTTP request failed: {0}")]
    HttpError(String),

    /// Error occurred due to missing or invalid configuration
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Missing or rejected session
    #[error("Authentication error: {0}")]
    AuthError(String),

    /// Error occurred during validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error occurred during external service call
    #[error("External service error: {service_name} - {message}")]
    ExternalServiceError {
        service_name: String,
        message: String,
    },

    /// Error occurred due to a resource not being found
    #[error("Not found: {0}")]
    NotFoundError(String),
}

impl AgendifyError {
    /// The message shown to API clients, without the category prefix.
    pub fn client_message(&self) -> &str {
        match self {
            AgendifyError::HttpError(msg)
            | AgendifyError::ConfigError(msg)
            | AgendifyError::AuthError(msg)
            | AgendifyError::ValidationError(msg)
            | AgendifyError::NotFoundError(msg) => msg,
            AgendifyError::ExternalServiceError { message, .. } => message,
        }
    }
}

/// A trait for converting errors to HTTP status codes.
pub trait HttpStatusCode {
    /// Returns the HTTP status code for this error.
    fn status_code(&self) -> u16;
}

impl HttpStatusCode for AgendifyError {
    fn status_code(&self) -> u16 {
        match self {
            AgendifyError::HttpError(_) => 502,
            AgendifyError::ConfigError(_) => 500,
            AgendifyError::AuthError(_) => 401,
            AgendifyError::ValidationError(_) => 400,
            AgendifyError::ExternalServiceError { .. } => 502,
            AgendifyError::NotFoundError(_) => 404,
        }
    }
}

// Utility functions for error handling
pub fn config_error<T: fmt::Display>(message: T) -> AgendifyError {
    AgendifyError::ConfigError(message.to_string())
}

pub fn validation_error<T: fmt::Display>(message: T) -> AgendifyError {
    AgendifyError::ValidationError(message.to_string())
}

pub fn unauthorized<T: fmt::Display>(message: T) -> AgendifyError {
    AgendifyError::AuthError(message.to_string())
}

pub fn not_found<T: fmt::Display>(message: T) -> AgendifyError {
    AgendifyError::NotFoundError(message.to_string())
}

pub fn external_service_error<T: fmt::Display>(service_name: &str, message: T) -> AgendifyError {
    AgendifyError::ExternalServiceError {
        service_name: service_name.to_string(),
        message: message.to_string(),
    }
}
