/* src/server/core/rust/src/hint.rs */

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::{DEFAULT_COOKIE_PREFIX, HintConfig};
use crate::errors::HintError;

// Hint names become object keys in generated JS and cookie-name suffixes,
// so they must be plain identifiers.
static HINT_NAME: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("valid hint name pattern"));

/// A named client-side computation, stored as opaque JavaScript source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintDef {
  pub name: String,
  pub source: String,
}

impl HintDef {
  pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
    Self { name: name.into(), source: source.into() }
  }

  /// Source text that is valid as a standalone expression.
  /// Method shorthand (`tz() { ... }`) only parses inside an object literal,
  /// so it is rewritten to a named function expression.
  pub fn serialized(&self) -> String {
    serialize_source(&self.name, &self.source)
  }
}

pub(crate) fn serialize_source(name: &str, source: &str) -> String {
  let source = source.trim();

  let (is_async, rest) = match source.strip_prefix("async") {
    Some(rest) if rest.starts_with(char::is_whitespace) => (true, rest.trim_start()),
    _ => (false, source),
  };
  let (is_generator, rest) = match rest.strip_prefix('*') {
    Some(rest) => (true, rest.trim_start()),
    None => (false, rest),
  };

  let Some(params) = rest.strip_prefix(name) else {
    return source.to_string();
  };
  if !params.trim_start().starts_with('(') {
    return source.to_string();
  }

  let keyword = match (is_async, is_generator) {
    (false, false) => "function",
    (false, true) => "function*",
    (true, false) => "async function",
    (true, true) => "async function*",
  };
  format!("{keyword} {name}{params}")
}

/// Whether `prefix` only contains RFC 6265 cookie-token characters.
fn is_cookie_token(prefix: &str) -> bool {
  prefix.bytes().all(|b| {
    b.is_ascii_graphic()
      && !matches!(
        b,
        b'(' | b')' | b'<' | b'>' | b'@' | b',' | b';' | b':' | b'\\' | b'"' | b'/' | b'[' | b']'
          | b'?' | b'=' | b'{' | b'}'
      )
  })
}

/// `__Host-` and `__Secure-` cookies are dropped by browsers unless written with
/// `Secure`, which the bootstrap script does not set; the client would reload forever.
fn requires_secure(prefix: &str) -> bool {
  let lower = prefix.to_ascii_lowercase();
  lower.starts_with("__host-") || lower.starts_with("__secure-")
}

/// Immutable-after-startup set of hints plus the cookie prefix they share.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintRegistry {
  prefix: String,
  hints: BTreeMap<String, HintDef>,
}

impl HintRegistry {
  pub fn new(prefix: impl Into<String>) -> Result<Self, HintError> {
    let prefix = prefix.into();
    if !is_cookie_token(&prefix) || requires_secure(&prefix) {
      return Err(HintError::InvalidCookiePrefix(prefix));
    }
    Ok(Self { prefix, hints: BTreeMap::new() })
  }

  pub fn from_config(config: &HintConfig) -> Result<Self, HintError> {
    config
      .functions
      .iter()
      .try_fold(Self::new(config.base_cookie_name.clone())?, |registry, (name, source)| {
        registry.hint(name.clone(), source.clone())
      })
  }

  pub fn hint(mut self, name: impl Into<String>, source: impl Into<String>) -> Result<Self, HintError> {
    let def = HintDef::new(name, source);
    if !HINT_NAME.is_match(&def.name) {
      return Err(HintError::InvalidHintName(def.name));
    }
    if def.source.trim().is_empty() {
      return Err(HintError::EmptySource(def.name));
    }
    if self.hints.contains_key(&def.name) {
      return Err(HintError::DuplicateHint(def.name));
    }
    self.hints.insert(def.name.clone(), def);
    Ok(self)
  }

  pub fn prefix(&self) -> &str {
    &self.prefix
  }

  pub fn cookie_name(&self, hint: &str) -> String {
    format!("{}{hint}", self.prefix)
  }

  pub fn get(&self, name: &str) -> Option<&HintDef> {
    self.hints.get(name)
  }

  pub fn names(&self) -> impl Iterator<Item = &str> {
    self.hints.keys().map(String::as_str)
  }

  pub fn iter(&self) -> impl Iterator<Item = &HintDef> {
    self.hints.values()
  }

  /// Hint name -> serialized function source, as exported by the virtual module.
  pub fn serialized_config(&self) -> BTreeMap<String, String> {
    self.hints.values().map(|def| (def.name.clone(), def.serialized())).collect()
  }

  pub fn len(&self) -> usize {
    self.hints.len()
  }

  pub fn is_empty(&self) -> bool {
    self.hints.is_empty()
  }
}

impl Default for HintRegistry {
  fn default() -> Self {
    Self { prefix: DEFAULT_COOKIE_PREFIX.to_string(), hints: BTreeMap::new() }
  }
}
