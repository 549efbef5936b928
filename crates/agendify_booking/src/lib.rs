// --- File: crates/agendify_booking/src/lib.rs ---
pub mod auth;
pub mod doc;
pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod service;

pub use auth::require_admin_session;
pub use error::BookingApiError;
pub use handlers::{system_clock, BookingState, Clock};
pub use routes::{routes, routes_with_state};
pub use service::BookingApiClient;
