// --- File: crates/agendify_slots/src/error.rs ---
use agendify_common::AgendifyError;
use thiserror::Error;

/// Errors raised while building or evaluating a service schedule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    /// Non-positive duration/interval, or an empty/inverted time window
    #[error("Invalid service configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid time of day: {0}")]
    InvalidTimeOfDay(String),

    #[error("Unknown work day: {0}")]
    UnknownWorkDay(String),
}

/// Every variant describes bad service data, never bad client input.
impl From<SlotError> for AgendifyError {
    fn from(err: SlotError) -> Self {
        AgendifyError::ConfigError(err.to_string())
    }
}
