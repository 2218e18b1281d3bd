/* src/cli/core/src/build.rs */

// `hintsync build`: validate hints, emit declarations, write build output.

use std::path::Path;

use anyhow::Result;
use hintsync_codegen::{ClientHintsPlugin, write_build_output};

use crate::config::HintsyncConfig;
use crate::ui;

pub fn run_build(config: &HintsyncConfig, base_dir: &Path) -> Result<()> {
  let plugin = ClientHintsPlugin::register(&config.hints, &config.dts_path(base_dir))?;
  let registry = plugin.registry();

  if registry.is_empty() {
    ui::warn("no hints configured under [hints.functions]; the bootstrap script will be a no-op");
  } else {
    ui::arrow(&format!("{} hint(s), cookie prefix \"{}\"", registry.len(), registry.prefix()));
    for name in registry.names() {
      ui::detail(&format!("{name} -> {}", registry.cookie_name(name)));
    }
  }

  if let Some(path) = plugin.declaration_path() {
    ui::ok(&format!("declarations {}", path.display()));
  }
  for warning in plugin.warnings() {
    ui::warn(warning);
  }

  for path in write_build_output(&config.out_dir(base_dir), registry)? {
    ui::ok(&path.display().to_string());
  }
  Ok(())
}
