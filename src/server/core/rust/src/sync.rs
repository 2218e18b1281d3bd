/* src/server/core/rust/src/sync.rs */

use std::sync::Arc;

use crate::bootstrap::render_bootstrap_script;
use crate::hint::HintRegistry;
use crate::locals::ClientHints;

/// Placeholder in the document template where the bootstrap script goes.
pub const MARKER: &str = "%client_hints%";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Injection {
  Injected,
  MarkerMissing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTransform {
  pub html: String,
  pub outcome: Injection,
}

/// Request-time half of hint synchronization: reads hint cookies into
/// per-request state and injects the bootstrap script into HTML.
/// Cloning is cheap; all clones share one registry and one rendered script.
#[derive(Debug, Clone)]
pub struct HintSync {
  registry: Arc<HintRegistry>,
  script: Arc<str>,
}

impl HintSync {
  pub fn new(registry: HintRegistry) -> Self {
    let script = render_bootstrap_script(&registry);
    Self { registry: Arc::new(registry), script: script.into() }
  }

  pub fn registry(&self) -> &HintRegistry {
    &self.registry
  }

  pub fn bootstrap_script(&self) -> &str {
    &self.script
  }

  pub fn on_request<'a, I>(&self, cookie_headers: I) -> ClientHints
  where
    I: IntoIterator<Item = &'a str>,
  {
    let hints = ClientHints::from_cookie_headers(&self.registry, cookie_headers);
    tracing::debug!(
      present = hints.iter().filter(|(_, v)| v.is_some()).count(),
      registered = hints.len(),
      "read client hint cookies"
    );
    hints
  }

  /// Replace the first marker with the bootstrap script.
  /// Without a marker the page is returned untouched and a warning is logged.
  pub fn transform_page(&self, html: &str) -> PageTransform {
    if !html.contains(MARKER) {
      tracing::warn!(
        marker = MARKER,
        "no client hints marker in the HTML template; add it inside <head> so hints can populate"
      );
      return PageTransform { html: html.to_string(), outcome: Injection::MarkerMissing };
    }
    PageTransform { html: html.replacen(MARKER, &self.script, 1), outcome: Injection::Injected }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sync() -> HintSync {
    HintSync::new(
      HintRegistry::default()
        .hint("tz", "() => Intl.DateTimeFormat().resolvedOptions().timeZone")
        .unwrap(),
    )
  }

  #[test]
  fn injects_exactly_once() {
    let sync = sync();
    let page = sync.transform_page("<html><head>%client_hints%</head><body></body></html>");
    assert_eq!(page.outcome, Injection::Injected);
    assert!(!page.html.contains(MARKER));
    assert_eq!(page.html.matches(sync.bootstrap_script()).count(), 1);
    assert!(page.html.starts_with("<html><head><script>"));
    assert!(page.html.ends_with("</script></head><body></body></html>"));
  }

  #[test]
  fn missing_marker_leaves_html_unchanged() {
    let html = "<html><head></head><body>hi</body></html>";
    let page = sync().transform_page(html);
    assert_eq!(page.outcome, Injection::MarkerMissing);
    assert_eq!(page.html, html);
  }

  #[test]
  fn only_first_marker_is_replaced() {
    let page = sync().transform_page("%client_hints%|%client_hints%");
    assert!(page.html.ends_with("|%client_hints%"));
  }

  #[test]
  fn on_request_reads_registered_cookies() {
    let hints = sync().on_request(["client-hints-tz=UTC"]);
    assert_eq!(hints.get("tz"), Some("UTC"));
    let hints = sync().on_request([]);
    assert_eq!(hints.get("tz"), None);
    assert!(hints.contains("tz"));
  }

  #[test]
  fn clones_share_script() {
    let a = sync();
    let b = a.clone();
    assert!(std::ptr::eq(a.bootstrap_script(), b.bootstrap_script()));
  }
}
