// File: crates/agendify_booking/src/doc.rs

#![allow(dead_code)]
#![cfg(feature = "openapi")]
use utoipa::OpenApi;

use crate::models::{
    AvailabilityQuery, AvailabilityResponse, LoginRequest, RegisterRequest, RegisterResponse,
    RegisteredUser, ServiceAvailability,
};

#[utoipa::path(
    post,
    path = "/login",
    request_body(content = LoginRequest, example = json!({
        "email": "admin@example.com",
        "password": "secret"
    })),
    responses(
        (status = 200, description = "Remote login reply; sets the HttpOnly session cookie",
         example = json!({ "success": true, "data": { "access_token": "eyJhbGciOi..." } })),
        (status = 400, description = "Missing credentials",
         example = json!({ "error": "Email and password are required" })),
        (status = 502, description = "Remote API rejected the login",
         example = json!({ "error": "Invalid credentials" }))
    ),
    tag = "Session"
)]
fn doc_login_handler() {}

#[utoipa::path(
    post,
    path = "/logout",
    responses(
        (status = 200, description = "Session cookie cleared", example = json!({ "success": true }))
    ),
    tag = "Session"
)]
fn doc_logout_handler() {}

#[utoipa::path(
    post,
    path = "/auth/register",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Registration accepted", body = RegisterResponse),
        (status = 400, description = "Missing fields", example = json!({ "message": "Missing fields" })),
        (status = 401, description = "Wrong admin invite code",
         example = json!({ "message": "Invalid admin invite code" })),
        (status = 500, description = "No admin invite code configured")
    ),
    tag = "Session"
)]
fn doc_register_handler() {}

#[utoipa::path(
    get,
    path = "/services",
    responses(
        (status = 200, description = "Services from the remote API",
         example = json!({ "success": true, "data": [{
             "id": 1, "name": "Corte de Cabelo", "price": 50.0, "duration": 30,
             "startTime": "09:00", "endTime": "17:00", "interval": 30,
             "daysOfWeek": ["monday", "wednesday", "friday"]
         }] })),
        (status = 502, description = "Remote API failure")
    ),
    tag = "Services"
)]
fn doc_get_services_handler() {}

#[utoipa::path(
    post,
    path = "/services",
    request_body(content = serde_json::Value, example = json!({
        "name": "Corte de Cabelo", "description": "Corte masculino", "price": 50.0,
        "duration": 30, "startTime": "09:00", "endTime": "17:00", "interval": 30,
        "daysOfWeek": ["monday", "wednesday", "friday"]
    })),
    responses(
        (status = 201, description = "Service created"),
        (status = 400, description = "Missing field", example = json!({ "error": "Missing field: price" })),
        (status = 401, description = "No session", example = json!({ "error": "Unauthorized" })),
        (status = 502, description = "Remote API failure")
    ),
    tag = "Services"
)]
fn doc_create_service_handler() {}

#[utoipa::path(
    patch,
    path = "/services/{id}",
    params(("id" = String, Path, description = "Service id")),
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Service updated"),
        (status = 401, description = "No session"),
        (status = 502, description = "Remote API failure")
    ),
    tag = "Services"
)]
fn doc_update_service_handler() {}

#[utoipa::path(
    delete,
    path = "/services/{id}",
    params(("id" = String, Path, description = "Service id")),
    responses(
        (status = 200, description = "Service deleted"),
        (status = 401, description = "No session"),
        (status = 502, description = "Remote API failure")
    ),
    tag = "Services"
)]
fn doc_delete_service_handler() {}

#[utoipa::path(
    get,
    path = "/schedules",
    responses(
        (status = 200, description = "Schedules from the remote API; query string forwarded"),
        (status = 502, description = "Remote API failure")
    ),
    tag = "Schedules"
)]
fn doc_get_schedules_handler() {}

#[utoipa::path(
    get,
    path = "/public/services/{id}/schedules",
    params(("id" = String, Path, description = "Service id")),
    responses(
        (status = 200, description = "Public schedules of a service; query string forwarded"),
        (status = 502, description = "Remote API failure")
    ),
    tag = "Schedules"
)]
fn doc_get_public_schedules_handler() {}

#[utoipa::path(
    get,
    path = "/public/services/{id}/availability",
    params(
        ("id" = String, Path, description = "Service id"),
        ("date" = String, Query, description = "Day in YYYY-MM-DD format", example = "2025-05-05", format = "date")
    ),
    responses(
        (status = 200, description = "Bookable start times", body = AvailabilityResponse,
         example = json!({ "success": true, "data": {
             "serviceId": "1", "date": "2025-05-05", "offerable": true,
             "slots": ["09:00", "09:30", "10:30"]
         } })),
        (status = 400, description = "Missing or malformed date",
         example = json!({ "error": "Invalid date format (YYYY-MM-DD)" })),
        (status = 404, description = "Unknown service"),
        (status = 500, description = "Service has an invalid schedule configuration"),
        (status = 502, description = "Remote API failure")
    ),
    tag = "Schedules"
)]
fn doc_get_availability_handler() {}

#[utoipa::path(
    post,
    path = "/public/appointments",
    request_body = serde_json::Value,
    responses(
        (status = 200, description = "Appointment created"),
        (status = 502, description = "Remote API rejected the appointment",
         example = json!({ "success": false, "error": "Create appointment failed" }))
    ),
    tag = "Appointments"
)]
fn doc_create_public_appointment_handler() {}

#[utoipa::path(
    patch,
    path = "/appointments/{id}/cancel",
    params(("id" = String, Path, description = "Appointment id")),
    responses(
        (status = 200, description = "Appointment cancelled"),
        (status = 401, description = "No session"),
        (status = 502, description = "Remote API failure")
    ),
    tag = "Appointments"
)]
fn doc_cancel_appointment_handler() {}

#[derive(OpenApi)]
#[openapi(
    paths(
        doc_login_handler,
        doc_logout_handler,
        doc_register_handler,
        doc_get_services_handler,
        doc_create_service_handler,
        doc_update_service_handler,
        doc_delete_service_handler,
        doc_get_schedules_handler,
        doc_get_public_schedules_handler,
        doc_get_availability_handler,
        doc_create_public_appointment_handler,
        doc_cancel_appointment_handler
    ),
    components(
        schemas(
            LoginRequest,
            RegisterRequest,
            RegisterResponse,
            RegisteredUser,
            AvailabilityQuery,
            AvailabilityResponse,
            ServiceAvailability
        )
    ),
    tags(
        (name = "Session", description = "Login, logout and registration"),
        (name = "Services", description = "Service management, proxied to the booking API"),
        (name = "Schedules", description = "Schedules and computed availability"),
        (name = "Appointments", description = "Public booking and cancellation")
    ),
    servers(
        (url = "/api", description = "Agendify booking API")
    )
)]
pub struct BookingApiDoc;
