/* src/cli/core/src/clean.rs */

// `hintsync clean`: removes build output and the generated declaration file.

use std::path::Path;

use anyhow::{Context, Result};

use crate::config::HintsyncConfig;
use crate::ui;

pub fn run_clean(config: &HintsyncConfig, base_dir: &Path) -> Result<()> {
  let out_dir = config.out_dir(base_dir);
  if out_dir.is_dir() {
    std::fs::remove_dir_all(&out_dir)
      .with_context(|| format!("failed to remove {}", out_dir.display()))?;
    ui::ok(&format!("removed {}", out_dir.display()));
  }

  let dts = config.dts_path(base_dir);
  if dts.is_file() {
    std::fs::remove_file(&dts).with_context(|| format!("failed to remove {}", dts.display()))?;
    ui::ok(&format!("removed {}", dts.display()));
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::build::run_build;

  #[test]
  fn removes_what_build_wrote() {
    let dir = tempfile::tempdir().unwrap();
    let config: HintsyncConfig = toml::from_str("[hints.functions]\ntz = \"() => 'UTC'\"\n").unwrap();
    run_build(&config, dir.path()).unwrap();

    run_clean(&config, dir.path()).unwrap();
    assert!(!config.out_dir(dir.path()).exists());
    assert!(!config.dts_path(dir.path()).exists());
  }

  #[test]
  fn clean_on_fresh_project_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();
    run_clean(&HintsyncConfig::default(), dir.path()).unwrap();
  }
}
