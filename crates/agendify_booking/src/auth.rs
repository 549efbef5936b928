// --- File: crates/agendify_booking/src/auth.rs ---
//! Session cookie plumbing.
//!
//! The session is the bearer token issued by the remote booking API, kept in
//! an HttpOnly cookie. Its JWT payload is only inspected for `exp`; the
//! signature is the remote API's concern.

use agendify_config::{AppConfig, SessionConfig};
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD as base64_engine, Engine};
use chrono::Utc;
use cookie::{time::Duration as CookieDuration, Cookie};
use http::{header, HeaderMap, HeaderValue, StatusCode};
use std::sync::Arc;
use tracing::{debug, info};

/// Reads the session token from the request's `Cookie` header(s).
pub fn session_token(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|raw| Cookie::split_parse(raw.to_string()))
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == cookie_name && !cookie.value().is_empty())
        .map(|cookie| cookie.value().to_string())
}

/// `Set-Cookie` value that stores `token` for the configured session lifetime.
pub fn session_cookie(session: &SessionConfig, token: &str) -> String {
    Cookie::build((session.cookie_name.clone(), token.to_string()))
        .path("/")
        .http_only(true)
        .max_age(CookieDuration::seconds(session.max_age_secs))
        .build()
        .to_string()
}

/// `Set-Cookie` value that removes the session cookie.
pub fn cleared_session_cookie(session: &SessionConfig) -> String {
    Cookie::build((session.cookie_name.clone(), String::new()))
        .path("/")
        .http_only(true)
        .max_age(CookieDuration::ZERO)
        .build()
        .to_string()
}

/// Whether a JWT is unusable at `now` (seconds since the epoch).
///
/// Malformed tokens and tokens without a numeric `exp` count as expired.
pub fn is_token_expired(token: &str, now: i64) -> bool {
    let Some(payload) = token.split('.').nth(1) else {
        return true;
    };
    let Ok(bytes) = base64_engine.decode(payload.trim_end_matches('=')) else {
        return true;
    };
    let Ok(claims) = serde_json::from_slice::<serde_json::Value>(&bytes) else {
        return true;
    };
    match claims.get("exp").and_then(|exp| exp.as_f64()) {
        Some(exp) if exp > 0.0 => (now as f64) >= exp,
        _ => true,
    }
}

/// Redirect to the login page, clearing whatever session cookie was sent.
pub fn login_redirect(session: &SessionConfig) -> Response {
    let mut response = StatusCode::TEMPORARY_REDIRECT.into_response();
    let headers = response.headers_mut();
    if let Ok(location) = HeaderValue::from_str(&session.login_path) {
        headers.insert(header::LOCATION, location);
    }
    if let Ok(cookie) = HeaderValue::from_str(&cleared_session_cookie(session)) {
        headers.insert(header::SET_COOKIE, cookie);
    }
    response
}

/// Middleware guarding admin pages: a missing or expired session is sent to login.
pub async fn require_admin_session(
    State(config): State<Arc<AppConfig>>,
    request: Request,
    next: Next,
) -> Response {
    let session = &config.session;
    match session_token(request.headers(), &session.cookie_name) {
        Some(token) if !is_token_expired(&token, Utc::now().timestamp()) => {
            debug!("Admin session accepted for {}", request.uri().path());
            next.run(request).await
        }
        Some(_) => {
            info!("Expired session on {}, redirecting to login", request.uri().path());
            login_redirect(session)
        }
        None => {
            info!("No session on {}, redirecting to login", request.uri().path());
            login_redirect(session)
        }
    }
}
