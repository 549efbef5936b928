// --- File: crates/agendify_common/src/http.rs ---
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::error::{AgendifyError, HttpStatusCode};

// Include the client module
pub mod client;

/// Renders the error as `{"error": "<message>"}` with the mapped status code.
impl IntoResponse for AgendifyError {
    fn into_response(self) -> Response {
        let status_code =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status_code.is_server_error() {
            tracing::error!("{}", self);
        } else {
            tracing::debug!("{}", self);
        }

        let body = Json(json!({ "error": self.client_message() }));
        (status_code, body).into_response()
    }
}

/// Wraps remote data in the `{"success": true, "data": ...}` envelope.
pub fn success_envelope(data: serde_json::Value) -> Json<serde_json::Value> {
    Json(json!({ "success": true, "data": data }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::validation_error;

    #[tokio::test]
    async fn test_error_renders_json_body() {
        let response = validation_error("Missing field: price").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, json!({ "error": "Missing field: price" }));
    }

    #[test]
    fn test_success_envelope() {
        let Json(body) = success_envelope(json!([1, 2]));
        assert_eq!(body, json!({ "success": true, "data": [1, 2] }));
    }
}
