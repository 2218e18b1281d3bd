/* src/cli/codegen/src/plugin.rs */

use std::path::{Path, PathBuf};

use hintsync_server::{HintConfig, HintError, HintRegistry};

use crate::typescript::emit_declarations;
use crate::virtual_module::{RESOLVED_VIRTUAL_MODULE_ID, VIRTUAL_MODULE_ID, render_virtual_module};

/// A build-pipeline participant that may claim module ids before file resolution.
/// Returning `None` declines and lets the next plugin (or the filesystem) handle the id.
pub trait BuildPlugin: Send + Sync {
  fn name(&self) -> &'static str;

  fn resolve_id(&self, _source: &str) -> Option<String> {
    None
  }

  fn load(&self, _id: &str) -> Option<String> {
    None
  }
}

/// Consult plugins in order; the first one that claims an id wins.
#[derive(Default)]
pub struct PluginChain {
  plugins: Vec<Box<dyn BuildPlugin>>,
}

impl PluginChain {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn plugin(mut self, plugin: impl BuildPlugin + 'static) -> Self {
    self.plugins.push(Box::new(plugin));
    self
  }

  pub fn resolve_id(&self, source: &str) -> Option<String> {
    self.plugins.iter().find_map(|p| p.resolve_id(source))
  }

  pub fn load(&self, id: &str) -> Option<String> {
    self.plugins.iter().find_map(|p| p.load(id))
  }
}

/// Build-time half of hint synchronization.
pub struct ClientHintsPlugin {
  registry: HintRegistry,
  module_source: String,
  declaration_path: Option<PathBuf>,
  warnings: Vec<String>,
}

impl ClientHintsPlugin {
  /// Validate the hint mapping and, when `generate_dts` is set, write the declaration
  /// file before returning. A failed write is recorded as a warning, not an error.
  pub fn register(config: &HintConfig, declaration_path: &Path) -> Result<Self, HintError> {
    let registry = HintRegistry::from_config(config)?;
    let module_source = render_virtual_module(&registry);
    let mut plugin =
      Self { registry, module_source, declaration_path: None, warnings: Vec::new() };

    if config.generate_dts {
      match emit_declarations(declaration_path, &plugin.registry) {
        Ok(()) => plugin.declaration_path = Some(declaration_path.to_path_buf()),
        Err(e) => {
          let message = format!("could not write client hints declarations: {e:#}");
          tracing::warn!("{message}");
          plugin.warnings.push(message);
        }
      }
    }
    Ok(plugin)
  }

  pub fn registry(&self) -> &HintRegistry {
    &self.registry
  }

  pub fn into_registry(self) -> HintRegistry {
    self.registry
  }

  /// Path of the declaration file, if one was written.
  pub fn declaration_path(&self) -> Option<&Path> {
    self.declaration_path.as_deref()
  }

  pub fn warnings(&self) -> &[String] {
    &self.warnings
  }
}

impl BuildPlugin for ClientHintsPlugin {
  fn name(&self) -> &'static str {
    "hintsync-client-hints"
  }

  fn resolve_id(&self, source: &str) -> Option<String> {
    (source == VIRTUAL_MODULE_ID).then(|| RESOLVED_VIRTUAL_MODULE_ID.to_string())
  }

  fn load(&self, id: &str) -> Option<String> {
    (id == RESOLVED_VIRTUAL_MODULE_ID).then(|| self.module_source.clone())
  }
}
