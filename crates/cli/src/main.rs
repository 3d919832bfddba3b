//! Tannery CLI - Database migrations and catalog seeding.
//!
//! # Usage
//!
//! ```bash
//! # Run catalog database migrations
//! tannery migrate
//!
//! # Replace the catalog with the contents of a JSON file
//! tannery seed --file assets/data/products.json
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `seed` - Atomically replace the catalog from a products JSON file

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "tannery")]
#[command(author, version, about = "Tannery CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run catalog database migrations
    Migrate,
    /// Replace the catalog from a products JSON file
    Seed {
        /// Path to the products JSON file (`{"products": [...]}` or a bare array)
        #[arg(short, long)]
        file: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed { file } => commands::seed::run(&file).await?,
    }
    Ok(())
}
