/* src/cli/codegen/src/virtual_module.rs */

use hintsync_server::{HintRegistry, js_string};

/// Import specifier user code uses to reach the generated config.
pub const VIRTUAL_MODULE_ID: &str = "virtual:client-hints";

/// Internal id; the leading NUL keeps other resolvers and loaders from touching it.
pub const RESOLVED_VIRTUAL_MODULE_ID: &str = "\0virtual:client-hints";

/// Source of the virtual module: the cookie prefix and hint name -> serialized function.
pub fn render_virtual_module(registry: &HintRegistry) -> String {
  let config = serde_json::Value::Object(
    registry
      .serialized_config()
      .into_iter()
      .map(|(name, source)| (name, serde_json::Value::String(source)))
      .collect(),
  );
  format!(
    "export const base_cookie_name = {};\nexport const config = {config};\n",
    js_string(registry.prefix())
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn exports_prefix_and_config() {
    let registry = HintRegistry::new("ch-")
      .and_then(|r| r.hint("tz", "() => Intl.DateTimeFormat().resolvedOptions().timeZone"))
      .unwrap();
    assert_eq!(
      render_virtual_module(&registry),
      "export const base_cookie_name = \"ch-\";\n\
       export const config = {\"tz\":\"() => Intl.DateTimeFormat().resolvedOptions().timeZone\"};\n"
    );
  }

  #[test]
  fn shorthand_is_serialized_as_function_expression() {
    let registry = HintRegistry::default().hint("theme", "theme() { return \"dark\"; }").unwrap();
    let module = render_virtual_module(&registry);
    assert!(module.contains(r#""theme":"function theme() { return \"dark\"; }""#));
  }

  #[test]
  fn empty_registry_exports_empty_config() {
    assert!(render_virtual_module(&HintRegistry::default()).contains("export const config = {};"));
  }
}
