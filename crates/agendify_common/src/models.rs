//! Records returned by the remote booking API.
//!
//! The remote API speaks camelCase JSON and is loose about types: ids may be
//! numbers or strings and work days may be names or weekday indices. These
//! types accept both and leave interpretation to the slot calculator.

use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(feature = "openapi")]
use utoipa::ToSchema;

/// An identifier that the remote API sends either as a number or a string.
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RecordId {
    Number(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Number(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

/// A work-day entry, e.g. `"monday"`, `"Segunda-feira"` or `1`.
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum DayToken {
    Index(i64),
    Name(String),
}

impl fmt::Display for DayToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayToken::Index(n) => write!(f, "{}", n),
            DayToken::Name(s) => f.write_str(s),
        }
    }
}

/// A bookable service and its scheduling configuration.
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRecord {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub price: Option<f64>,
    /// Minutes per appointment.
    pub duration: i32,
    /// "HH:MM"
    pub start_time: String,
    /// "HH:MM"
    pub end_time: String,
    /// Minutes between candidate start times.
    pub interval: i32,
    #[serde(default, alias = "workDays")]
    pub days_of_week: Vec<DayToken>,
}

/// Status of an appointment. Only `Confirmed` occupies a slot.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum AppointmentStatus {
    Confirmed,
    Pending,
    Cancelled,
    Other(String),
}

impl AppointmentStatus {
    pub fn occupies_slot(&self) -> bool {
        matches!(self, AppointmentStatus::Confirmed)
    }
}

impl From<String> for AppointmentStatus {
    fn from(value: String) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "confirmed" => AppointmentStatus::Confirmed,
            "pending" => AppointmentStatus::Pending,
            "cancelled" | "canceled" => AppointmentStatus::Cancelled,
            _ => AppointmentStatus::Other(value),
        }
    }
}

impl From<AppointmentStatus> for String {
    fn from(value: AppointmentStatus) -> Self {
        match value {
            AppointmentStatus::Confirmed => "CONFIRMED".to_string(),
            AppointmentStatus::Pending => "PENDING".to_string(),
            AppointmentStatus::Cancelled => "CANCELLED".to_string(),
            AppointmentStatus::Other(s) => s,
        }
    }
}

#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRecord {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[cfg_attr(feature = "openapi", schema(value_type = String, example = "CONFIRMED"))]
    pub status: AppointmentStatus,
}

/// One schedule entry for a service on a date.
#[cfg_attr(feature = "openapi", derive(ToSchema))]
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRecord {
    #[serde(default)]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub service_id: Option<RecordId>,
    #[serde(default)]
    pub date: Option<String>,
    /// "HH:MM" or an ISO-8601 date-time.
    pub start_time: String,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub is_available: Option<bool>,
    #[serde(default)]
    pub appointments: Vec<AppointmentRecord>,
}
