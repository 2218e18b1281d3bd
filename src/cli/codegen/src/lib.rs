/* src/cli/codegen/src/lib.rs */

mod output;
mod plugin;
mod typescript;
mod virtual_module;

pub use output::{MODULE_FILE, SCRIPT_FILE, write_build_output};
pub use plugin::{BuildPlugin, ClientHintsPlugin, PluginChain};
pub use typescript::{DEFAULT_DECLARATION_PATH, emit_declarations, render_declarations};
pub use virtual_module::{RESOLVED_VIRTUAL_MODULE_ID, VIRTUAL_MODULE_ID, render_virtual_module};
