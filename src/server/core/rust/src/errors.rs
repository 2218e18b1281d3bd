/* src/server/core/rust/src/errors.rs */

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HintError {
  #[error("invalid hint name \"{0}\": expected an identifier like `tz` or `color_scheme`")]
  InvalidHintName(String),

  #[error("hint \"{0}\" is registered more than once")]
  DuplicateHint(String),

  #[error("hint \"{0}\" has an empty function source")]
  EmptySource(String),

  #[error(
    "invalid cookie prefix \"{0}\": use cookie token characters and avoid the __Host-/__Secure- prefixes"
  )]
  InvalidCookiePrefix(String),

  #[error("failed to read {}: {source}", path.display())]
  Io {
    path: PathBuf,
    #[source]
    source: std::io::Error,
  },

  #[error("failed to parse {}: {source}", path.display())]
  Manifest {
    path: PathBuf,
    #[source]
    source: serde_json::Error,
  },
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display_names_the_offending_hint() {
    let err = HintError::InvalidHintName("color-scheme".into());
    assert!(err.to_string().contains("\"color-scheme\""));
    assert_eq!(
      HintError::DuplicateHint("tz".into()).to_string(),
      "hint \"tz\" is registered more than once"
    );
  }

  #[test]
  fn io_error_includes_path() {
    let err = HintError::Io {
      path: PathBuf::from("out/client-hints.json"),
      source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    };
    assert_eq!(err.to_string(), "failed to read out/client-hints.json: gone");
  }
}
