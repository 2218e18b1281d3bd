/* src/server/adapter/axum/src/error.rs */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Returned by the `Hints` extractor when the request never passed through
/// the client hints middleware.
#[derive(Debug)]
pub struct HintsRejection;

impl IntoResponse for HintsRejection {
  fn into_response(self) -> Response {
    let body = serde_json::json!({
      "ok": false,
      "error": {
        "code": "INTERNAL_ERROR",
        "message": "client hints middleware is not installed on this route",
        "transient": false,
      }
    });
    (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(body)).into_response()
  }
}
