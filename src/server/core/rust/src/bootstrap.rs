/* src/server/core/rust/src/bootstrap.rs */

use crate::hint::HintRegistry;

const SCRIPT_HEAD: &str = r#"(function () {
  var hints = ["#;

// Cookies are read into a prototype-free map so names like `constructor`
// never resolve to inherited properties.
const SCRIPT_TAIL: &str = r#"];
  var cookies = Object.create(null);
  document.cookie.split(";").forEach(function (pair) {
    var index = pair.indexOf("=");
    if (index < 0) return;
    var name = pair.slice(0, index).trim();
    if (name in cookies) return;
    var raw = pair.slice(index + 1).trim();
    try {
      cookies[name] = decodeURIComponent(raw);
    } catch (error) {
      cookies[name] = raw;
    }
  });
  var needsReload = false;
  hints.forEach(function (hint) {
    var compute = hint[1];
    try {
      var value = compute();
      if (value && cookies[hint[0]] !== String(value)) {
        document.cookie = hint[0] + "=" + encodeURIComponent(value) + "; path=/; SameSite=Lax";
        needsReload = true;
      }
    } catch (error) {
      // a failing hint is skipped, the others still sync
    }
  });
  if (needsReload && navigator.cookieEnabled) {
    window.location.reload();
  }
})();"#;

/// Quote `value` as a JavaScript string literal.
pub fn js_string(value: &str) -> String {
  serde_json::Value::String(value.to_string()).to_string()
}

/// Render the `<script>` element injected into every HTML page.
/// Output depends only on the registry, so it is computed once and reused.
pub fn render_bootstrap_script(registry: &HintRegistry) -> String {
  // Each source sits on its own lines so a trailing `//` comment cannot swallow the entry.
  let entries: Vec<String> = registry
    .iter()
    .map(|def| {
      format!("\n    [{}, (\n{}\n    )]", js_string(&registry.cookie_name(&def.name)), def.serialized())
    })
    .collect();
  let list = if entries.is_empty() { String::new() } else { format!("{}\n  ", entries.join(",")) };

  let body = format!("{SCRIPT_HEAD}{list}{SCRIPT_TAIL}");
  // Function sources are embedded verbatim; keep them from closing the element early.
  format!("<script>\n{}\n</script>", body.replace("</", "<\\/"))
}
