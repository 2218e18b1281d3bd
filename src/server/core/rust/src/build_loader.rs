/* src/server/core/rust/src/build_loader.rs */

// Load the hint manifest written by `hintsync build`.
// The manifest carries the same exports as the virtual module:
// the cookie prefix and hint name -> serialized function source.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::HintError;
use crate::hint::HintRegistry;

pub const MANIFEST_FILE: &str = "client-hints.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintManifest {
  pub base_cookie_name: String,
  #[serde(default)]
  pub config: BTreeMap<String, String>,
}

impl HintManifest {
  pub fn from_registry(registry: &HintRegistry) -> Self {
    Self { base_cookie_name: registry.prefix().to_string(), config: registry.serialized_config() }
  }

  pub fn into_registry(self) -> Result<HintRegistry, HintError> {
    self
      .config
      .into_iter()
      .try_fold(HintRegistry::new(self.base_cookie_name)?, |registry, (name, source)| {
        registry.hint(name, source)
      })
  }
}

/// Read `client-hints.json` from a build output directory.
pub fn load_build_output(dir: impl AsRef<Path>) -> Result<HintRegistry, HintError> {
  let path = dir.as_ref().join(MANIFEST_FILE);
  let content =
    std::fs::read_to_string(&path).map_err(|source| HintError::Io { path: path.clone(), source })?;
  let manifest: HintManifest =
    serde_json::from_str(&content).map_err(|source| HintError::Manifest { path, source })?;
  manifest.into_registry()
}
