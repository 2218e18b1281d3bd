/* src/server/core/rust/src/lib.rs */

pub mod bootstrap;
pub mod build_loader;
pub mod config;
pub mod cookie;
pub mod errors;
pub mod hint;
pub mod locals;
pub mod sync;

// Re-exports for ergonomic use
pub use bootstrap::{js_string, render_bootstrap_script};
pub use build_loader::{HintManifest, MANIFEST_FILE, load_build_output};
pub use config::{DEFAULT_COOKIE_PREFIX, HintConfig};
pub use cookie::parse_cookie_header;
pub use errors::HintError;
pub use hint::{HintDef, HintRegistry};
pub use locals::ClientHints;
pub use sync::{HintSync, Injection, MARKER, PageTransform};
