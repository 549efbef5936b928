// --- File: crates/agendify_booking/src/handlers.rs ---
use agendify_common::{
    config_error, success_envelope, unauthorized, validation_error, AgendifyError, ScheduleStore,
};
use agendify_config::AppConfig;
use agendify_slots::{day_availability, is_day_offerable, ServiceSchedule, SlotPolicy};
use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::{info, warn};

use crate::auth::{cleared_session_cookie, session_cookie, session_token};
use crate::models::{
    AvailabilityQuery, AvailabilityResponse, LoginRequest, RegisterRequest, RegisterResponse,
    RegisteredUser, ServiceAvailability, REQUIRED_SERVICE_FIELDS,
};
use crate::service::{BookingApiClient, QueryParams};

/// Source of the current instant.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

pub fn system_clock() -> Clock {
    Arc::new(Utc::now)
}

// Shared state for the booking handlers
#[derive(Clone)]
pub struct BookingState {
    pub config: Arc<AppConfig>,
    pub api: BookingApiClient,
    /// Source of services and schedules for availability; the API client in production.
    pub store: Arc<dyn ScheduleStore>,
    /// Decides what "today" and "already started" mean for availability.
    pub clock: Clock,
}

impl BookingState {
    fn token(&self, headers: &HeaderMap) -> Option<String> {
        session_token(headers, &self.config.session.cookie_name)
    }

    fn require_token(&self, headers: &HeaderMap) -> Result<String, AgendifyError> {
        self.token(headers).ok_or_else(|| unauthorized("Unauthorized"))
    }
}

fn with_cookie(mut response: Response, cookie: &str) -> Response {
    if let Ok(value) = HeaderValue::from_str(cookie) {
        response.headers_mut().append(header::SET_COOKIE, value);
    }
    response
}

fn json_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, AgendifyError> {
    body.map(|Json(value)| value)
        .map_err(|rejection| validation_error(format!("Invalid JSON body: {}", rejection.body_text())))
}

/// Forwards credentials to the remote API and stores the returned token in the session cookie.
#[axum::debug_handler]
pub async fn login_handler(
    State(state): State<Arc<BookingState>>,
    body: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Response, AgendifyError> {
    let request = body.map(|Json(request)| request).unwrap_or_default();
    let (email, password) = match (request.email.as_deref(), request.password.as_deref()) {
        (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
            (email, password)
        }
        _ => return Err(validation_error("Email and password are required")),
    };

    let data = state.api.login(email, password).await?;
    let token = data
        .get("access_token")
        .and_then(Value::as_str)
        .map(str::to_string);

    let response = success_envelope(data).into_response();
    match token {
        Some(token) => {
            info!("Login succeeded, session cookie issued");
            Ok(with_cookie(
                response,
                &session_cookie(&state.config.session, &token),
            ))
        }
        None => {
            warn!("Login reply carried no access_token; no session cookie set");
            Ok(response)
        }
    }
}

pub async fn logout_handler(State(state): State<Arc<BookingState>>) -> Response {
    with_cookie(
        Json(json!({ "success": true })).into_response(),
        &cleared_session_cookie(&state.config.session),
    )
}

fn register_error(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

/// Validates a registration; nothing is persisted.
pub async fn register_handler(
    State(state): State<Arc<BookingState>>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> Response {
    let request = match body {
        Ok(Json(request)) => request,
        Err(_) => return register_error(StatusCode::BAD_REQUEST, "Invalid JSON"),
    };

    let present = |field: &Option<String>| field.as_deref().is_some_and(|s| !s.is_empty());
    if !(present(&request.email)
        && present(&request.password)
        && present(&request.name)
        && present(&request.role))
    {
        return register_error(StatusCode::BAD_REQUEST, "Missing fields");
    }

    let role = request.role.unwrap_or_default();
    if role == "ADMIN" {
        let Some(invite_code) = state.config.admin_invite_code.as_deref() else {
            warn!("ADMIN registration attempted but no admin invite code is configured");
            return register_error(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Server not configured with ADMIN_INVITE_CODE",
            );
        };
        if request.admin_invite_code.as_deref() != Some(invite_code) {
            return register_error(StatusCode::UNAUTHORIZED, "Invalid admin invite code");
        }
    }

    let user = RegisteredUser {
        id: uuid::Uuid::new_v4().to_string(),
        email: request.email.unwrap_or_default(),
        name: request.name.unwrap_or_default(),
        role,
    };
    info!("Registered {} user {}", user.role, user.id);
    (
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "Created".to_string(),
            user,
        }),
    )
        .into_response()
}

pub async fn get_services_handler(
    State(state): State<Arc<BookingState>>,
    headers: HeaderMap,
) -> Result<Json<Value>, AgendifyError> {
    let token = state.token(&headers);
    let data = state.api.get_services(token.as_deref()).await?;
    Ok(success_envelope(data))
}

pub async fn create_service_handler(
    State(state): State<Arc<BookingState>>,
    headers: HeaderMap,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Value>), AgendifyError> {
    let token = state.require_token(&headers)?;
    let payload = json_body(body)?;

    for key in REQUIRED_SERVICE_FIELDS {
        if payload.get(key).map_or(true, Value::is_null) {
            return Err(validation_error(format!("Missing field: {}", key)));
        }
    }

    let data = state.api.create_service(&payload, Some(&token)).await?;
    Ok((StatusCode::CREATED, success_envelope(data)))
}

pub async fn update_service_handler(
    State(state): State<Arc<BookingState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Value>, AgendifyError> {
    let token = state.require_token(&headers)?;
    let payload = json_body(body)?;
    let data = state.api.update_service(&id, &payload, Some(&token)).await?;
    Ok(success_envelope(data))
}

pub async fn delete_service_handler(
    State(state): State<Arc<BookingState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Value>, AgendifyError> {
    let token = state.require_token(&headers)?;
    let data = state.api.delete_service(&id, Some(&token)).await?;
    Ok(success_envelope(data))
}

pub async fn get_schedules_handler(
    State(state): State<Arc<BookingState>>,
    headers: HeaderMap,
    Query(query): Query<QueryParams>,
) -> Result<Json<Value>, AgendifyError> {
    let token = state.token(&headers);
    let data = state.api.get_schedules(&query, token.as_deref()).await?;
    Ok(success_envelope(data))
}

pub async fn get_public_schedules_handler(
    State(state): State<Arc<BookingState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Query(query): Query<QueryParams>,
) -> Result<Json<Value>, AgendifyError> {
    let token = state.token(&headers);
    let data = state
        .api
        .get_public_schedules(&id, &query, token.as_deref())
        .await?;
    Ok(success_envelope(data))
}

/// Public booking. Failures keep `success: false` next to the error.
pub async fn create_public_appointment_handler(
    State(state): State<Arc<BookingState>>,
    body: Result<Json<Value>, JsonRejection>,
) -> Response {
    let payload = match json_body(body) {
        Ok(payload) => payload,
        Err(err) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "success": false, "error": err.client_message() })),
            )
                .into_response()
        }
    };

    match state.api.create_public_appointment(&payload).await {
        Ok(data) => success_envelope(data).into_response(),
        Err(err) => {
            warn!("Public appointment failed: {}", err);
            (
                StatusCode::BAD_GATEWAY,
                Json(json!({ "success": false, "error": err.client_message() })),
            )
                .into_response()
        }
    }
}

pub async fn cancel_appointment_handler(
    State(state): State<Arc<BookingState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Json<Value>, AgendifyError> {
    let token = state.require_token(&headers)?;
    let data = state.api.cancel_appointment(&id, Some(&token)).await?;
    Ok(success_envelope(data))
}

/// Wall-clock time of `now` in the configured service time zone.
pub fn local_now(config: &AppConfig, now: DateTime<Utc>) -> Result<NaiveDateTime, AgendifyError> {
    let time_zone: Tz = config.slots.time_zone.parse().map_err(|_| {
        config_error(format!("Unknown time zone: {}", config.slots.time_zone))
    })?;
    Ok(now.with_timezone(&time_zone).naive_local())
}

/// Computes the bookable start times of a service for one day.
#[axum::debug_handler]
pub async fn get_availability_handler(
    State(state): State<Arc<BookingState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, AgendifyError> {
    let raw_date = query
        .date
        .ok_or_else(|| validation_error("Missing query parameter: date"))?;
    let date = NaiveDate::parse_from_str(&raw_date, "%Y-%m-%d")
        .map_err(|_| validation_error("Invalid date format (YYYY-MM-DD)"))?;
    let now = local_now(&state.config, (state.clock)())?;
    let token = state.token(&headers);

    let record = state.store.fetch_service(&id, token.as_deref()).await?;
    let schedule = ServiceSchedule::from_record(&record, SlotPolicy::from(&state.config.slots))?;

    // Only a bookable day needs its appointments
    let records = if is_day_offerable(&schedule, date) && date >= now.date() {
        state
            .store
            .fetch_schedules(&id, date, token.as_deref())
            .await?
    } else {
        Vec::new()
    };

    let availability = day_availability(&schedule, date, &records, now)?;
    info!(
        "Availability for service {} on {}: {} slots (offerable: {})",
        id,
        date,
        availability.slots.len(),
        availability.offerable
    );

    Ok(Json(AvailabilityResponse {
        success: true,
        data: ServiceAvailability {
            service_id: id,
            date: availability.date,
            offerable: availability.offerable,
            slots: availability.slots,
        },
    }))
}
