//! `netbook` — command-line front end for the netbook contact directory.
//!
//! # Usage
//!
//! ```
//! netbook add --name "John Smith" --role Founder --connection LinkedIn
//! netbook list --search john --role Founder
//! netbook edit <ID> --company ""          # clears the company
//! netbook --store /tmp/contacts.db roles
//! ```

mod commands;
mod render;

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use clap::Parser;
use commands::Command;
use netbook_core::directory::Directory;
use netbook_store_sqlite::SqliteStore;
use serde::Deserialize;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "~/.config/netbook/config.toml";
const DEFAULT_STORE_PATH: &str = "~/.local/share/netbook/contacts.db";

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "netbook", version, about = "Keep track of your network contacts")]
struct Args {
  /// Path to a TOML config file.
  #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIG_PATH)]
  config: PathBuf,

  /// Path to the contact database; overrides the config file.
  #[arg(long, value_name = "FILE")]
  store: Option<PathBuf>,

  /// Increase log verbosity (-v info, -vv debug).
  #[arg(short, long, action = clap::ArgAction::Count, global = true)]
  verbose: u8,

  #[command(subcommand)]
  command: Command,
}

// ─── Config file ──────────────────────────────────────────────────────────────

/// Settings merged from the config file and `NETBOOK_*` environment
/// variables.
#[derive(Deserialize, Debug)]
struct CliConfig {
  store_path: PathBuf,
}

fn load_config(path: &Path) -> Result<CliConfig> {
  let settings = config::Config::builder()
    .set_default("store_path", DEFAULT_STORE_PATH)?
    .add_source(config::File::from(expand_tilde(path)).required(false))
    .add_source(config::Environment::with_prefix("NETBOOK"))
    .build()
    .context("failed to read config file")?;

  settings
    .try_deserialize()
    .context("failed to deserialise config")
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();

  let level = match args.verbose {
    0 => LevelFilter::WARN,
    1 => LevelFilter::INFO,
    _ => LevelFilter::DEBUG,
  };
  tracing_subscriber::fmt()
    .with_writer(std::io::stderr)
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy(),
    )
    .init();

  let cfg = load_config(&args.config)?;

  // The command-line flag wins over the config file and environment.
  let store_path = expand_tilde(args.store.as_deref().unwrap_or(&cfg.store_path));
  if let Some(parent) = store_path.parent()
    && !parent.as_os_str().is_empty()
  {
    std::fs::create_dir_all(parent)
      .with_context(|| format!("failed to create {}", parent.display()))?;
  }

  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;
  let mut directory = Directory::open(store)
    .await
    .context("failed to load contacts")?;

  commands::run(&mut directory, args.command).await
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}
