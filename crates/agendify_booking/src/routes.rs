// --- File: crates/agendify_booking/src/routes.rs ---
use agendify_config::AppConfig;
use axum::{
    routing::{get, patch, post},
    Router,
};
use std::sync::Arc;

use crate::error::BookingApiError;
use crate::handlers::{
    cancel_appointment_handler, create_public_appointment_handler, create_service_handler,
    delete_service_handler, get_availability_handler, get_public_schedules_handler,
    get_schedules_handler, get_services_handler, login_handler, logout_handler,
    register_handler, system_clock, update_service_handler, BookingState,
};
use crate::service::BookingApiClient;

/// Creates the router for all booking routes, backed by the remote booking API.
pub fn routes(config: Arc<AppConfig>) -> Result<Router, BookingApiError> {
    let api = BookingApiClient::new(&config.booking_api)?;
    let state = Arc::new(BookingState {
        config,
        store: Arc::new(api.clone()),
        api,
        clock: system_clock(),
    });
    Ok(routes_with_state(state))
}

/// Router over an already assembled state, e.g. with an in-memory schedule store.
pub fn routes_with_state(state: Arc<BookingState>) -> Router {
    Router::new()
        .route("/login", post(login_handler))
        .route("/logout", post(logout_handler))
        .route("/auth/register", post(register_handler))
        .route(
            "/services",
            get(get_services_handler).post(create_service_handler),
        )
        .route(
            "/services/{id}",
            patch(update_service_handler).delete(delete_service_handler),
        )
        .route("/schedules", get(get_schedules_handler))
        .route(
            "/public/services/{id}/schedules",
            get(get_public_schedules_handler),
        )
        .route(
            "/public/services/{id}/availability",
            get(get_availability_handler),
        )
        .route(
            "/public/appointments",
            post(create_public_appointment_handler),
        )
        .route(
            "/appointments/{id}/cancel",
            patch(cancel_appointment_handler),
        )
        .with_state(state)
}
