/* src/cli/core/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use hintsync_server::HintRegistry;

use super::HintsyncConfig;

pub const CONFIG_FILE: &str = "hintsync.toml";

/// Walk upward from `start` to find `hintsync.toml`, like Cargo.toml discovery
pub fn find_config(start: &Path) -> Result<PathBuf> {
  let mut dir =
    start.canonicalize().with_context(|| format!("failed to canonicalize {}", start.display()))?;
  loop {
    let candidate = dir.join(CONFIG_FILE);
    if candidate.is_file() {
      return Ok(candidate);
    }
    if !dir.pop() {
      bail!("{CONFIG_FILE} not found (searched upward from {})", start.display());
    }
  }
}

pub fn load_config(path: &Path) -> Result<HintsyncConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let config: HintsyncConfig =
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
  // Surface bad hint names and prefixes at load time rather than mid-build
  HintRegistry::from_config(&config.hints)
    .with_context(|| format!("invalid [hints] in {}", path.display()))?;
  Ok(config)
}
