/* src/server/core/rust/src/locals.rs */

use std::collections::BTreeMap;

use crate::cookie::parse_cookie_header;
use crate::hint::HintRegistry;

/// Per-request hint state: one optional value per registered hint.
/// The key set is fixed by the registry; values are the raw cookie strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientHints {
  values: BTreeMap<String, Option<String>>,
}

impl ClientHints {
  /// Read `{prefix}{name}` for every registered hint from the request's `Cookie` headers.
  pub fn from_cookie_headers<'a, I>(registry: &HintRegistry, headers: I) -> Self
  where
    I: IntoIterator<Item = &'a str>,
  {
    let mut cookies: BTreeMap<String, String> = BTreeMap::new();
    for header in headers {
      for (name, value) in parse_cookie_header(header) {
        cookies.entry(name).or_insert(value);
      }
    }

    let values = registry
      .names()
      .map(|name| (name.to_string(), cookies.remove(&registry.cookie_name(name))))
      .collect();
    Self { values }
  }

  /// Value observed for `name`, or `None` when the cookie was absent or the hint is unknown.
  pub fn get(&self, name: &str) -> Option<&str> {
    self.values.get(name).and_then(|v| v.as_deref())
  }

  pub fn contains(&self, name: &str) -> bool {
    self.values.contains_key(name)
  }

  pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
    self.values.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
  }

  pub fn len(&self) -> usize {
    self.values.len()
  }

  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn registry() -> HintRegistry {
    HintRegistry::default()
      .hint("tz", "() => 'UTC'")
      .and_then(|r| r.hint("theme", "() => 'dark'"))
      .unwrap()
  }

  #[test]
  fn reads_present_and_absent_hints() {
    let hints = ClientHints::from_cookie_headers(&registry(), ["client-hints-tz=UTC; other=1"]);
    assert_eq!(hints.get("tz"), Some("UTC"));
    assert_eq!(hints.get("theme"), None);
    assert!(hints.contains("theme"));
    assert_eq!(hints.len(), 2);
  }

  #[test]
  fn unregistered_cookie_is_ignored() {
    let hints = ClientHints::from_cookie_headers(&registry(), ["client-hints-dpr=2"]);
    assert!(!hints.contains("dpr"));
    assert_eq!(hints.get("dpr"), None);
  }

  #[test]
  fn no_cookie_header_yields_all_absent() {
    let hints = ClientHints::from_cookie_headers(&registry(), []);
    assert_eq!(hints.iter().collect::<Vec<_>>(), vec![("theme", None), ("tz", None)]);
  }

  #[test]
  fn values_are_not_coerced() {
    let hints = ClientHints::from_cookie_headers(&registry(), ["client-hints-theme= Dark "]);
    assert_eq!(hints.get("theme"), Some("Dark"));
  }

  #[test]
  fn first_occurrence_wins_across_headers() {
    let hints = ClientHints::from_cookie_headers(
      &registry(),
      ["a=1", "client-hints-tz=UTC; client-hints-tz=Asia%2FTokyo", "client-hints-tz=x"],
    );
    assert_eq!(hints.get("tz"), Some("UTC"));
  }

  #[test]
  fn custom_prefix() {
    let registry = HintRegistry::new("ch_").and_then(|r| r.hint("tz", "() => 'UTC'")).unwrap();
    let hints = ClientHints::from_cookie_headers(&registry, ["client-hints-tz=UTC; ch_tz=Europe%2FParis"]);
    assert_eq!(hints.get("tz"), Some("Europe/Paris"));
  }
}
