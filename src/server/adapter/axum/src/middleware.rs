/* src/server/adapter/axum/src/middleware.rs */

use std::ops::Deref;

use axum::body::Body;
use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::{CONTENT_LENGTH, CONTENT_TYPE, COOKIE};
use axum::http::request::Parts;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use hintsync_server::{ClientHints, HintSync};
use http_body_util::BodyExt;

use crate::error::HintsRejection;

/// Newtype wrapper so `ClientHints` can be extracted in handlers.
/// Required because Rust's orphan rule prevents `impl FromRequestParts for ClientHints`
/// when both types are foreign to this crate.
#[derive(Debug, Clone)]
pub struct Hints(pub ClientHints);

impl Deref for Hints {
  type Target = ClientHints;

  fn deref(&self) -> &ClientHints {
    &self.0
  }
}

impl<S> FromRequestParts<S> for Hints
where
  S: Send + Sync,
{
  type Rejection = HintsRejection;

  async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
    parts.extensions.get::<ClientHints>().cloned().map(Hints).ok_or(HintsRejection)
  }
}

fn is_html(response: &Response) -> bool {
  response
    .headers()
    .get(CONTENT_TYPE)
    .and_then(|v| v.to_str().ok())
    .is_some_and(|v| v.trim_start().to_ascii_lowercase().starts_with("text/html"))
}

/// Reads hint cookies into request extensions, runs the handler, then injects
/// the bootstrap script into HTML responses.
pub async fn client_hints_middleware(
  State(sync): State<HintSync>,
  mut req: Request,
  next: Next,
) -> Response {
  let hints = sync.on_request(req.headers().get_all(COOKIE).iter().filter_map(|v| v.to_str().ok()));
  req.extensions_mut().insert(hints);

  let response = next.run(req).await;
  if !is_html(&response) {
    return response;
  }

  let (mut parts, body) = response.into_parts();
  let bytes = match body.collect().await {
    Ok(collected) => collected.to_bytes(),
    Err(e) => {
      tracing::error!(error = %e, "failed to buffer HTML response body");
      return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
  };

  // Length changes after injection; let the server recompute it.
  parts.headers.remove(CONTENT_LENGTH);
  match String::from_utf8(bytes.to_vec()) {
    Ok(html) => Response::from_parts(parts, Body::from(sync.transform_page(&html).html)),
    Err(e) => {
      tracing::warn!("HTML response is not valid UTF-8, skipping client hints injection");
      Response::from_parts(parts, Body::from(e.into_bytes()))
    }
  }
}
