/* src/cli/core/src/main.rs */

mod build;
mod clean;
mod config;
mod serve;
mod ui;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hintsync_server::{HintRegistry, render_bootstrap_script};
use tracing_subscriber::EnvFilter;

use config::{HintsyncConfig, find_config, load_config};

#[derive(Parser)]
#[command(name = "hintsync", about = "Client hint synchronization toolkit")]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Validate hints, emit declarations, and write build output
  Build {
    /// Path to hintsync.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
  /// Print the bootstrap script injected into every page
  Script {
    /// Path to hintsync.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
  /// Serve a static directory through the client hints middleware
  Serve {
    /// Path to hintsync.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Override [serve].port
    #[arg(short, long)]
    port: Option<u16>,
  },
  /// Remove build output and the generated declaration file
  Clean {
    /// Path to hintsync.toml (auto-detected if omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,
  },
}

/// Resolve config path (explicit or auto-detected) and parse it
fn resolve_config(explicit: Option<PathBuf>) -> Result<(PathBuf, HintsyncConfig)> {
  let path = match explicit {
    Some(p) => p,
    None => {
      let cwd = std::env::current_dir().context("failed to get cwd")?;
      find_config(&cwd)?
    }
  };
  let config = load_config(&path)?;
  Ok((path, config))
}

/// Paths in hintsync.toml are relative to the file's directory
fn base_dir(config_path: &Path) -> &Path {
  config_path.parent().unwrap_or(Path::new("."))
}

fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
  tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

async fn run(command: Command) -> Result<()> {
  match command {
    Command::Build { config } => {
      ui::banner("build");
      let (path, config) = resolve_config(config)?;
      build::run_build(&config, base_dir(&path))
    }
    Command::Script { config } => {
      let (_, config) = resolve_config(config)?;
      let registry = HintRegistry::from_config(&config.hints)?;
      println!("{}", render_bootstrap_script(&registry));
      Ok(())
    }
    Command::Serve { config, port } => {
      ui::banner("serve");
      let (path, mut config) = resolve_config(config)?;
      if let Some(port) = port {
        config.serve.port = port;
      }
      serve::run_serve(&config, base_dir(&path)).await
    }
    Command::Clean { config } => {
      let (path, config) = resolve_config(config)?;
      clean::run_clean(&config, base_dir(&path))
    }
  }
}

#[tokio::main]
async fn main() -> Result<()> {
  init_tracing();
  let cli = Cli::parse();

  let result = run(cli.command).await;
  if let Err(ref e) = result {
    ui::fail(&format!("{e:#}"));
  }
  result
}
