/* src/cli/core/src/ui.rs */

// Terminal output for the CLI. Progress goes to stdout, problems to stderr.

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Wrap `text` in an SGR escape sequence (`"32"` = green, `"1"` = bold, ...).
fn paint(code: &str, text: &str) -> String {
  format!("\x1b[{code}m{text}\x1b[0m")
}

pub fn ok(msg: &str) {
  println!("  {} {msg}", paint("32", "\u{2713}"));
}

pub fn arrow(msg: &str) {
  println!("  {} {msg}", paint("36", "\u{2192}"));
}

pub fn detail(msg: &str) {
  println!("      {}", paint("2", msg));
}

pub fn warn(msg: &str) {
  eprintln!("  {} {msg}", paint("33", "!"));
}

pub fn fail(msg: &str) {
  eprintln!("  {} {msg}", paint("31", "\u{2717}"));
}

pub fn banner(cmd: &str) {
  println!("\n  {} {cmd} {}\n", paint("1", "hintsync"), paint("2", &format!("v{VERSION}")));
}
