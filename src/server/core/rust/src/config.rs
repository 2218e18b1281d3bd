/* src/server/core/rust/src/config.rs */

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const DEFAULT_COOKIE_PREFIX: &str = "client-hints-";

/// Build-time configuration surface: hint name -> JavaScript source of a
/// zero-argument function that runs in the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HintConfig {
  #[serde(default)]
  pub functions: BTreeMap<String, String>,
  #[serde(default = "default_cookie_prefix")]
  pub base_cookie_name: String,
  #[serde(default = "default_generate_dts")]
  pub generate_dts: bool,
}

impl HintConfig {
  pub fn new() -> Self {
    Self {
      functions: BTreeMap::new(),
      base_cookie_name: default_cookie_prefix(),
      generate_dts: default_generate_dts(),
    }
  }

  pub fn function(mut self, name: impl Into<String>, source: impl Into<String>) -> Self {
    self.functions.insert(name.into(), source.into());
    self
  }

  pub fn base_cookie_name(mut self, prefix: impl Into<String>) -> Self {
    self.base_cookie_name = prefix.into();
    self
  }

  pub fn generate_dts(mut self, enabled: bool) -> Self {
    self.generate_dts = enabled;
    self
  }
}

impl Default for HintConfig {
  fn default() -> Self {
    Self::new()
  }
}

fn default_cookie_prefix() -> String {
  DEFAULT_COOKIE_PREFIX.to_string()
}

fn default_generate_dts() -> bool {
  true
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn defaults_when_fields_omitted() {
    let config: HintConfig = serde_json::from_str(r#"{"functions": {"tz": "() => 'UTC'"}}"#).unwrap();
    assert_eq!(config.base_cookie_name, "client-hints-");
    assert!(config.generate_dts);
    assert_eq!(config.functions["tz"], "() => 'UTC'");
  }

  #[test]
  fn builder_matches_deserialized() {
    let built = HintConfig::new().function("tz", "() => 'UTC'").base_cookie_name("ch-").generate_dts(false);
    let parsed: HintConfig = serde_json::from_value(serde_json::json!({
      "functions": {"tz": "() => 'UTC'"},
      "base_cookie_name": "ch-",
      "generate_dts": false,
    }))
    .unwrap();
    assert_eq!(built, parsed);
  }
}
