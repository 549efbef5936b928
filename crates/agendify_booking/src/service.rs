// --- File: crates/agendify_booking/src/service.rs ---
//! Client for the remote booking API.
//!
//! Every call sends JSON, attaches `Authorization: Bearer <token>` when a
//! session token is known, and turns non-2xx replies into
//! [`BookingApiError::ApiError`] carrying the remote `message` (or `error`)
//! field. The client also backs the [`ScheduleStore`] used by the
//! availability endpoint.

use agendify_common::{
    create_client, not_found, AgendifyError, BoxFuture, ScheduleRecord, ScheduleStore,
    ServiceRecord,
};
use agendify_config::BookingApiConfig;
use chrono::NaiveDate;
use reqwest::{header, Client, Method};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::BookingApiError;

/// Query parameters forwarded verbatim to the remote API.
pub type QueryParams = Vec<(String, String)>;

#[derive(Clone)]
pub struct BookingApiClient {
    base_url: String,
    client: Client,
}

impl BookingApiClient {
    pub fn new(config: &BookingApiConfig) -> Result<Self, BookingApiError> {
        let client = create_client(config.timeout_secs, true)?;
        Ok(Self::with_client(&config.base_url, client))
    }

    pub fn with_client(base_url: &str, client: Client) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn login(&self, email: &str, password: &str) -> Result<Value, BookingApiError> {
        let body = serde_json::json!({ "email": email, "password": password });
        self.send(Method::POST, "/auth/login", &[], Some(&body), None, "Login failed")
            .await
    }

    pub async fn get_services(&self, token: Option<&str>) -> Result<Value, BookingApiError> {
        self.send(Method::GET, "/services", &[], None, token, "Fetch services failed")
            .await
    }

    pub async fn create_service(
        &self,
        payload: &Value,
        token: Option<&str>,
    ) -> Result<Value, BookingApiError> {
        self.send(
            Method::POST,
            "/services",
            &[],
            Some(payload),
            token,
            "Create service failed",
        )
        .await
    }

    pub async fn update_service(
        &self,
        id: &str,
        payload: &Value,
        token: Option<&str>,
    ) -> Result<Value, BookingApiError> {
        self.send(
            Method::PATCH,
            &format!("/services/{}", id),
            &[],
            Some(payload),
            token,
            "Update service failed",
        )
        .await
    }

    pub async fn delete_service(
        &self,
        id: &str,
        token: Option<&str>,
    ) -> Result<Value, BookingApiError> {
        self.send(
            Method::DELETE,
            &format!("/services/{}", id),
            &[],
            None,
            token,
            "Delete service failed",
        )
        .await
    }

    pub async fn get_schedules(
        &self,
        query: &[(String, String)],
        token: Option<&str>,
    ) -> Result<Value, BookingApiError> {
        self.send(
            Method::GET,
            "/schedules",
            query,
            None,
            token,
            "Fetch schedules failed",
        )
        .await
    }

    pub async fn get_public_schedules(
        &self,
        service_id: &str,
        query: &[(String, String)],
        token: Option<&str>,
    ) -> Result<Value, BookingApiError> {
        self.send(
            Method::GET,
            &format!("/public/services/{}/schedules", service_id),
            query,
            None,
            token,
            "Fetch public schedules failed",
        )
        .await
    }

    pub async fn create_public_appointment(
        &self,
        payload: &Value,
    ) -> Result<Value, BookingApiError> {
        self.send(
            Method::POST,
            "/public/appointments",
            &[],
            Some(payload),
            None,
            "Create appointment failed",
        )
        .await
    }

    pub async fn cancel_appointment(
        &self,
        id: &str,
        token: Option<&str>,
    ) -> Result<Value, BookingApiError> {
        self.send(
            Method::PATCH,
            &format!("/appointments/{}/cancel", id),
            &[],
            None,
            token,
            "Cancel appointment failed",
        )
        .await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(String, String)],
        body: Option<&Value>,
        token: Option<&str>,
        default_error: &str,
    ) -> Result<Value, BookingApiError> {
        let mut url = format!("{}{}", self.base_url, path);
        if !query.is_empty() {
            let encoded = serde_urlencoded::to_string(query).map_err(|e| {
                BookingApiError::ApiError {
                    status_code: 400,
                    message: format!("Invalid query parameters: {}", e),
                }
            })?;
            url.push('?');
            url.push_str(&encoded);
        }

        debug!("[Booking API] {} {}", method, url);
        let mut request = self
            .client
            .request(method.clone(), &url)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let body_text = response.text().await?;

        // Some endpoints answer 204 or an empty body
        let data = if body_text.trim().is_empty() {
            Value::Null
        } else {
            match serde_json::from_str::<Value>(&body_text) {
                Ok(value) => value,
                Err(e) if status.is_success() => return Err(BookingApiError::ParseError(e)),
                Err(_) => Value::Null,
            }
        };

        if status.is_success() {
            return Ok(data);
        }

        let message = remote_message(&data).unwrap_or_else(|| default_error.to_string());
        info!(
            "[Booking API] {} {} failed with HTTP status: {}. Message: {}",
            method, path, status, message
        );
        Err(BookingApiError::ApiError {
            status_code: status.as_u16(),
            message,
        })
    }
}

/// `message` first, then `error`. Arrays of messages are joined.
fn remote_message(data: &Value) -> Option<String> {
    ["message", "error"].iter().find_map(|key| match data.get(*key)? {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Array(items) if !items.is_empty() => Some(
            items
                .iter()
                .map(|item| match item {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(", "),
        ),
        _ => None,
    })
}

/// Accepts both a bare array and the `{"data": [...]}` envelope.
fn unwrap_list<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, BookingApiError> {
    let list = match value {
        Value::Object(mut map) => map.remove("data").unwrap_or(Value::Array(Vec::new())),
        Value::Null => Value::Array(Vec::new()),
        other => other,
    };
    Ok(serde_json::from_value(list)?)
}

impl ScheduleStore for BookingApiClient {
    fn fetch_service<'a>(
        &'a self,
        service_id: &'a str,
        token: Option<&'a str>,
    ) -> BoxFuture<'a, ServiceRecord, AgendifyError> {
        Box::pin(async move {
            let services: Vec<ServiceRecord> = unwrap_list(self.get_services(token).await?)?;
            services
                .into_iter()
                .find(|service| service.id.to_string() == service_id)
                .ok_or_else(|| not_found(format!("Service {} not found", service_id)))
        })
    }

    fn fetch_schedules<'a>(
        &'a self,
        service_id: &'a str,
        date: NaiveDate,
        token: Option<&'a str>,
    ) -> BoxFuture<'a, Vec<ScheduleRecord>, AgendifyError> {
        Box::pin(async move {
            let day = date.format("%Y-%m-%d").to_string();
            let query = vec![("date".to_string(), day.clone())];
            let records: Vec<ScheduleRecord> =
                unwrap_list(self.get_public_schedules(service_id, &query, token).await?)?;

            // The remote API may ignore the date filter; drop other days here
            let (same_day, other_days): (Vec<_>, Vec<_>) = records
                .into_iter()
                .partition(|record| record.date.as_deref().map_or(true, |d| d.starts_with(&day)));
            if !other_days.is_empty() {
                warn!(
                    "Dropped {} schedule records not dated {} for service {}",
                    other_days.len(),
                    day,
                    service_id
                );
            }
            Ok(same_day)
        })
    }
}
