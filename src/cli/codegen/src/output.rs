/* src/cli/codegen/src/output.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use hintsync_server::{HintManifest, HintRegistry, MANIFEST_FILE, render_bootstrap_script};

use crate::virtual_module::render_virtual_module;

pub const MODULE_FILE: &str = "client-hints.js";
pub const SCRIPT_FILE: &str = "client-hints.html";

/// Write the manifest the server loads at startup, the virtual module source,
/// and the rendered bootstrap script. Returns the written paths.
pub fn write_build_output(out_dir: &Path, registry: &HintRegistry) -> Result<Vec<PathBuf>> {
  std::fs::create_dir_all(out_dir)
    .with_context(|| format!("failed to create {}", out_dir.display()))?;

  let manifest = serde_json::to_string_pretty(&HintManifest::from_registry(registry))
    .context("failed to serialize client hints manifest")?;

  let files = [
    (MANIFEST_FILE, manifest),
    (MODULE_FILE, render_virtual_module(registry)),
    (SCRIPT_FILE, render_bootstrap_script(registry)),
  ];

  let mut written = Vec::with_capacity(files.len());
  for (name, content) in files {
    let path = out_dir.join(name);
    std::fs::write(&path, content).with_context(|| format!("failed to write {}", path.display()))?;
    written.push(path);
  }
  Ok(written)
}
