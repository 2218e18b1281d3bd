/* src/cli/core/src/config/types.rs */

use std::path::{Path, PathBuf};

use hintsync_codegen::DEFAULT_DECLARATION_PATH;
use hintsync_server::HintConfig;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HintsyncConfig {
  #[serde(default)]
  pub hints: HintConfig,
  #[serde(default)]
  pub build: BuildSection,
  #[serde(default)]
  pub serve: ServeSection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BuildSection {
  #[serde(default = "default_out_dir")]
  pub out_dir: String,
  #[serde(default = "default_dts_path")]
  pub dts_path: String,
}

impl Default for BuildSection {
  fn default() -> Self {
    Self { out_dir: default_out_dir(), dts_path: default_dts_path() }
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServeSection {
  #[serde(default = "default_static_dir")]
  pub static_dir: String,
  #[serde(default = "default_port")]
  pub port: u16,
}

impl Default for ServeSection {
  fn default() -> Self {
    Self { static_dir: default_static_dir(), port: default_port() }
  }
}

impl HintsyncConfig {
  pub fn out_dir(&self, base_dir: &Path) -> PathBuf {
    base_dir.join(&self.build.out_dir)
  }

  pub fn dts_path(&self, base_dir: &Path) -> PathBuf {
    base_dir.join(&self.build.dts_path)
  }

  pub fn static_dir(&self, base_dir: &Path) -> PathBuf {
    base_dir.join(&self.serve.static_dir)
  }
}

fn default_out_dir() -> String {
  ".hintsync/output".to_string()
}

fn default_dts_path() -> String {
  DEFAULT_DECLARATION_PATH.to_string()
}

fn default_static_dir() -> String {
  "public".to_string()
}

fn default_port() -> u16 {
  3000
}
