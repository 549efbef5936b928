// --- File: crates/agendify_common/src/lib.rs ---

pub mod error; // Error handling
pub mod http; // HTTP utilities
pub mod logging; // Logging utilities
pub mod models; // Records exchanged with the remote booking API
pub mod services; // Service abstractions

// Re-export error types and utilities for easier access
pub use error::{
    config_error, external_service_error, not_found, unauthorized, validation_error,
    AgendifyError, HttpStatusCode,
};

// Re-export HTTP utilities for easier access
pub use http::{client::create_client, success_envelope};

// Re-export logging utilities for easier access
pub use logging::{init, init_with_level, log_result};

pub use models::{AppointmentRecord, AppointmentStatus, DayToken, RecordId, ScheduleRecord, ServiceRecord};
pub use services::{BoxFuture, ScheduleStore};
