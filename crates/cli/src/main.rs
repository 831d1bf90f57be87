//! Verdant Market CLI - Database migrations and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Run database migrations
//! verdant-cli migrate
//!
//! # Seed the starter vendor directory
//! verdant-cli seed vendors
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `seed vendors` - Insert the starter vendor profiles

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "verdant-cli")]
#[command(author, version, about = "Verdant Market CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Seed the database with starter data
    Seed {
        #[command(subcommand)]
        target: SeedTarget,
    },
}

#[derive(Subcommand)]
enum SeedTarget {
    /// Insert the starter vendor profiles (idempotent)
    Vendors,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "verdant_cli=info,verdant_api=info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Migrate => commands::migrate::run().await?,
        Commands::Seed {
            target: SeedTarget::Vendors,
        } => commands::seed::vendors().await?,
    }

    Ok(())
}
