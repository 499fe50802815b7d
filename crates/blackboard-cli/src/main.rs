//! bbctl - blackboard asset tooling.
//!
//! - `bbctl inspect <asset>` - ingest an asset and print every entry
//! - `bbctl key <name>...` - print the key hash for each name

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use blackboard::{fnv1a_32, Blackboard, BlackboardAsset};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "bbctl")]
#[command(about = "Blackboard asset tooling", version)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ingest an asset (.yaml, .yml or .json) and print its entries
    Inspect {
        asset: PathBuf,

        /// Also log each entry through the blackboard's logger
        #[arg(long)]
        log: bool,
    },

    /// Print the key hash for each name
    Key {
        #[arg(required = true)]
        names: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    if cli.json {
        fmt().json().with_env_filter(filter).init();
    } else {
        fmt().with_env_filter(filter).with_target(false).init();
    }

    match cli.command {
        Commands::Inspect { asset, log } => inspect(&asset, log),
        Commands::Key { names } => {
            for name in &names {
                println!("{name}\t0x{:08x}", fnv1a_32(name));
            }
            Ok(())
        }
    }
}

fn load_asset(path: &Path) -> Result<BlackboardAsset> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    let mut asset: BlackboardAsset = match extension.as_deref() {
        Some("yaml" | "yml") => serde_yaml::from_str(&text)
            .with_context(|| format!("failed to parse {}", path.display()))?,
        Some("json") => serde_json::from_str(&text)
            .with_context(|| format!("failed to parse {}", path.display()))?,
        _ => bail!(
            "unsupported asset format for {} (expected .yaml, .yml or .json)",
            path.display()
        ),
    };
    asset.sync_value_types();
    Ok(asset)
}

fn inspect(path: &Path, log: bool) -> Result<()> {
    let asset = load_asset(path)?;
    tracing::info!(asset = %path.display(), rows = asset.len(), "Loaded asset");

    let mut blackboard = Blackboard::new();
    asset
        .set_values_on_blackboard(&mut blackboard)
        .with_context(|| format!("failed to ingest {}", path.display()))?;

    if log {
        blackboard.log();
    }

    println!("Blackboard: {} entries", blackboard.len());
    for entry in blackboard.entries() {
        println!(
            "  {:<24} {:<10} {}",
            entry.key().name(),
            entry.value_type(),
            entry.value()
        );
    }

    Ok(())
}
