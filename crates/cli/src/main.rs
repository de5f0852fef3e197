//! Nexora Synergy CLI - Content provisioning and store tools.
//!
//! # Usage
//!
//! ```bash
//! # Write the default site content into empty collections
//! nexora-cli seed
//!
//! # Provision content from a YAML bundle, even into non-empty collections
//! nexora-cli seed --file content.yaml --force
//!
//! # Show database name and collections
//! nexora-cli status
//! ```
//!
//! # Commands
//!
//! - `seed` - Provision services, projects, blog posts, and testimonials
//! - `status` - Report what the store holds
//!
//! Both commands read `DATABASE_URL` (or `.env`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "nexora-cli")]
#[command(author, version, about = "Nexora Synergy CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Provision content collections
    Seed {
        /// YAML bundle with `services`, `projects`, `posts`, `testimonials`
        /// lists (defaults to the built-in site content)
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Insert even into collections that already hold records
        #[arg(long)]
        force: bool,
    },
    /// Show database name and collections
    Status,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), commands::CliError> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CliError> {
    match cli.command {
        Commands::Seed { file, force } => commands::seed::run(file.as_deref(), force).await,
        Commands::Status => commands::status::run().await,
    }
}
