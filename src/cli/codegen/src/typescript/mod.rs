/* src/cli/codegen/src/typescript/mod.rs */

use std::path::Path;

use anyhow::{Context, Result};
use hintsync_server::HintRegistry;

/// Project-relative location of the generated declaration file.
pub const DEFAULT_DECLARATION_PATH: &str = "src/client-hints.d.ts";

/// Render a global `ClientHints` interface with one optional string field per hint.
pub fn render_declarations(registry: &HintRegistry) -> String {
  let mut out = String::new();
  out.push_str("// Generated by hintsync. Do not edit.\n\n");
  out.push_str("declare global {\n");
  out.push_str("  interface ClientHints {\n");
  for name in registry.names() {
    out.push_str(&format!("    {name}?: string;\n"));
  }
  out.push_str("  }\n");
  out.push_str("}\n\n");
  out.push_str("export {};\n");
  out
}

/// Write the declaration file, creating parent directories as needed.
pub fn emit_declarations(path: &Path, registry: &HintRegistry) -> Result<()> {
  if let Some(parent) = path.parent()
    && !parent.as_os_str().is_empty()
  {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("failed to create {}", parent.display()))?;
  }
  std::fs::write(path, render_declarations(registry))
    .with_context(|| format!("failed to write {}", path.display()))
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn one_optional_field_per_hint() {
    let registry = HintRegistry::default()
      .hint("tz", "() => 'UTC'")
      .and_then(|r| r.hint("color_scheme", "() => 'dark'"))
      .unwrap();
    let dts = render_declarations(&registry);
    assert!(dts.contains("  interface ClientHints {\n    color_scheme?: string;\n    tz?: string;\n  }"));
    assert!(dts.trim_end().ends_with("export {};"));
  }

  #[test]
  fn empty_registry_renders_empty_interface() {
    let dts = render_declarations(&HintRegistry::default());
    assert!(dts.contains("interface ClientHints {\n  }"));
  }

  #[test]
  fn emit_creates_parent_dirs() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_DECLARATION_PATH);
    let registry = HintRegistry::default().hint("tz", "() => 'UTC'").unwrap();
    emit_declarations(&path, &registry).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), render_declarations(&registry));
  }

  #[test]
  fn emit_into_file_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("src");
    std::fs::write(&blocker, "not a dir").unwrap();
    let err = emit_declarations(&blocker.join("client-hints.d.ts"), &HintRegistry::default());
    assert!(err.is_err());
  }
}
