//! Calabash Market CLI - Store seeding and inspection tools.
//!
//! # Usage
//!
//! ```bash
//! # Seed the store with sample products
//! calabash-cli seed
//!
//! # Replace any existing catalog while seeding
//! calabash-cli seed --force
//!
//! # Show catalog and order statistics
//! calabash-cli stats
//!
//! # List the order log
//! calabash-cli orders
//! ```
//!
//! All commands read `CALABASH_STORE_PATH` (default `data/store.json`),
//! the same file the storefront and admin binaries use.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "calabash-cli")]
#[command(author, version, about = "Calabash Market CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the store with sample products
    Seed {
        /// Replace an existing catalog instead of refusing to overwrite
        #[arg(long)]
        force: bool,
    },
    /// Show catalog and order statistics
    Stats,
    /// List placed orders
    Orders,
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed { force } => commands::seed::run(force)?,
        Commands::Stats => commands::stats::run()?,
        Commands::Orders => commands::orders::run()?,
    }
    Ok(())
}
