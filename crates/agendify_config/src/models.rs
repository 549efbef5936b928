// --- File: crates/agendify_config/src/models.rs ---

use serde::{Deserialize, Serialize};

// --- General Server Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

pub const DEFAULT_BOOKING_API_URL: &str = "https://tcc-backend-vvd4.onrender.com";

// --- Remote Booking API Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BookingApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for BookingApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BOOKING_API_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

// --- Session Cookie Config ---
// The token itself is issued by the remote API; we only carry it in a cookie.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SessionConfig {
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    #[serde(default = "default_max_age_secs")]
    pub max_age_secs: i64,
    #[serde(default = "default_login_path")]
    pub login_path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            max_age_secs: default_max_age_secs(),
            login_path: default_login_path(),
        }
    }
}

fn default_cookie_name() -> String {
    "token".to_string()
}

fn default_max_age_secs() -> i64 {
    60 * 60 * 24 * 7
}

fn default_login_path() -> String {
    "/login".to_string()
}

/// What an empty `workDays` list means for a service.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum EmptyWorkDaysPolicy {
    /// Treat the list as "not configured": every date is offerable.
    #[default]
    AlwaysOfferable,
    /// Treat the list literally: no date is offerable.
    NeverOfferable,
}

/// What to do with a work-day token that names no weekday.
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum UnknownWorkDayPolicy {
    /// Report the token as a data error.
    #[default]
    Reject,
    /// Log and skip the token.
    Ignore,
}

// --- Slot Calculation Config ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SlotsConfig {
    /// IANA zone in which service hours are expressed, e.g. "America/Sao_Paulo".
    #[serde(default = "default_time_zone")]
    pub time_zone: String,
    #[serde(default)]
    pub empty_work_days: EmptyWorkDaysPolicy,
    #[serde(default)]
    pub unknown_work_day: UnknownWorkDayPolicy,
}

impl Default for SlotsConfig {
    fn default() -> Self {
        Self {
            time_zone: default_time_zone(),
            empty_work_days: EmptyWorkDaysPolicy::default(),
            unknown_work_day: UnknownWorkDayPolicy::default(),
        }
    }
}

fn default_time_zone() -> String {
    "America/Sao_Paulo".to_string()
}

// --- Unified App Configuration ---
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    // Server config is mandatory
    pub server: ServerConfig,

    #[serde(default)]
    pub booking_api: BookingApiConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub slots: SlotsConfig,

    /// Required to register ADMIN users; usually "secret_from_env".
    #[serde(default)]
    pub admin_invite_code: Option<String>,
    /// Directory with the built UI, served as fallback in debug builds.
    #[serde(default)]
    pub static_dir: Option<String>,
}
