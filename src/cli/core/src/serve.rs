/* src/cli/core/src/serve.rs */

// `hintsync serve`: preview a static site with the client hints middleware,
// so the reload cycle can be observed in a browser.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use axum::Json;
use axum::Router;
use axum::routing::get;
use hintsync_server::{HintRegistry, HintSync};
use hintsync_server_axum::{ClientHintsRouter, Hints};
use tower_http::services::ServeDir;

use crate::config::HintsyncConfig;
use crate::ui;

/// Echo the hints the server observed for this request.
async fn observed_hints(hints: Hints) -> Json<BTreeMap<String, Option<String>>> {
  Json(
    hints
      .iter()
      .map(|(name, value)| (name.to_string(), value.map(str::to_string)))
      .collect(),
  )
}

pub fn build_router(sync: HintSync, static_dir: &Path) -> Router {
  Router::new()
    .route("/_hintsync/hints", get(observed_hints))
    .fallback_service(ServeDir::new(static_dir))
    .client_hints(sync)
}

pub async fn run_serve(config: &HintsyncConfig, base_dir: &Path) -> Result<()> {
  let registry = HintRegistry::from_config(&config.hints)?;
  let static_dir = config.static_dir(base_dir);
  if !static_dir.is_dir() {
    ui::warn(&format!("static dir {} does not exist", static_dir.display()));
  }

  let router = build_router(HintSync::new(registry), &static_dir);
  let addr = format!("127.0.0.1:{}", config.serve.port);
  let listener =
    tokio::net::TcpListener::bind(&addr).await.with_context(|| format!("failed to bind {addr}"))?;
  let local_addr = listener.local_addr()?;

  ui::arrow(&format!("serving {} on http://localhost:{}", static_dir.display(), local_addr.port()));
  ui::detail("observed hints: /_hintsync/hints");
  tracing::info!(%local_addr, "preview server listening");
  axum::serve(listener, router).await?;
  Ok(())
}
