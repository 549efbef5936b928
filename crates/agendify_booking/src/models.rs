// --- File: crates/agendify_booking/src/models.rs ---
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// Fields the remote API requires before a service can be created.
pub const REQUIRED_SERVICE_FIELDS: [&str; 8] = [
    "name",
    "description",
    "price",
    "duration",
    "startTime",
    "endTime",
    "interval",
    "daysOfWeek",
];

#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    /// `ADMIN` requires a matching `adminInviteCode`.
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub admin_invite_code: Option<String>,
}

#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RegisteredUser {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
}

#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RegisterResponse {
    pub message: String,
    pub user: RegisteredUser,
}

#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AvailabilityQuery {
    /// Day to compute, "YYYY-MM-DD"
    pub date: Option<String>,
}

/// Bookable start times of one service on one day.
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAvailability {
    pub service_id: String,
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "2025-05-05"))]
    pub date: NaiveDate,
    /// Whether the service works on this weekday at all.
    pub offerable: bool,
    pub slots: Vec<String>,
}

#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AvailabilityResponse {
    pub success: bool,
    pub data: ServiceAvailability,
}
