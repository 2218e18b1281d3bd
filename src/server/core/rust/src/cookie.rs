/* src/server/core/rust/src/cookie.rs */

use std::borrow::Cow;

/// Split a `Cookie` request header into `(name, value)` pairs.
/// Values are percent-decoded to mirror the bootstrap script's `encodeURIComponent`;
/// a value with invalid escapes is kept verbatim.
pub fn parse_cookie_header(header: &str) -> Vec<(String, String)> {
  header
    .split(';')
    .filter_map(|pair| {
      let (name, value) = pair.split_once('=')?;
      let name = name.trim();
      if name.is_empty() {
        return None;
      }
      Some((name.to_string(), decode_value(value.trim()).into_owned()))
    })
    .collect()
}

// Quotes are kept as part of the value, matching what the bootstrap script reads.
fn decode_value(raw: &str) -> Cow<'_, str> {
  urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw))
}
