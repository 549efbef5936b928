// --- File: crates/agendify_booking/src/error.rs ---
use agendify_common::{external_service_error, AgendifyError, HttpStatusCode};
use thiserror::Error;

/// Errors raised while talking to the remote booking API.
#[derive(Error, Debug)]
pub enum BookingApiError {
    /// Transport failure: connect, timeout, TLS
    #[error("Booking API request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    /// Non-2xx reply; `message` is what the remote API said, or the operation default
    #[error("Booking API returned an error: {message} (Status: {status_code})")]
    ApiError { status_code: u16, message: String },

    /// Reply body could not be read as the expected records
    #[error("Failed to parse booking API response: {0}")]
    ParseError(#[from] serde_json::Error),
}

impl BookingApiError {
    /// The message to hand back to API clients.
    pub fn client_message(&self) -> String {
        match self {
            BookingApiError::ApiError { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

impl From<BookingApiError> for AgendifyError {
    fn from(err: BookingApiError) -> Self {
        match err {
            BookingApiError::ApiError { message, .. } => external_service_error("Booking API", message),
            BookingApiError::RequestError(e) => {
                AgendifyError::HttpError(format!("Booking API request error: {}", e))
            }
            BookingApiError::ParseError(e) => external_service_error(
                "Booking API",
                format!("Unexpected response from booking API: {}", e),
            ),
        }
    }
}

impl HttpStatusCode for BookingApiError {
    fn status_code(&self) -> u16 {
        502
    }
}
