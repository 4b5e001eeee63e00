//! CLI command definitions for estate-seed.
//!
//! This is a one-shot destructive tool, so the interface is a single
//! command gated twice: the `--force` flag and an interactive `y/N`
//! confirmation on stdin.

use std::io::{self, Write};

use clap::Parser;
use tracing::warn;

use crate::config::SeedConfig;
use crate::db::AppwriteClient;
use crate::seed::Seeder;

/// Database seeding tool for the estate listing app.
#[derive(Parser)]
#[command(name = "estate-seed")]
#[command(about = "Delete and reseed the app's Appwrite collections with sample data")]
#[command(version)]
#[command(
    long_about = "estate-seed clears the agents, reviews, galleries and properties collections\nof the configured Appwrite database and repopulates them with randomized\nsample data, wiring cross-collection references.\n\nExample usage:\n  estate-seed --force"
)]
pub struct Cli {
    /// Acknowledge that every existing document in the target collections
    /// will be deleted.
    #[arg(long)]
    pub force: bool,

    /// Skip the interactive confirmation prompt.
    #[arg(long)]
    pub yes: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short, long, default_value = "info")]
    pub log_level: String,
}

/// Parse CLI arguments without running the command.
///
/// Used by main() to get the log level before initializing tracing.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

/// Run the CLI by parsing arguments and executing the command.
///
/// This is a convenience function that parses CLI args and runs the command.
/// For more control over logging initialization, use `parse_cli()` and `run_with_cli()`.
pub async fn run() -> anyhow::Result<()> {
    run_with_cli(parse_cli()).await
}

/// Run the CLI with the parsed arguments.
///
/// This is the main entry point for the estate-seed CLI.
pub async fn run_with_cli(cli: Cli) -> anyhow::Result<()> {
    // Fail fast on missing configuration, before any gate or network call
    let config = SeedConfig::from_env()?;

    if !cli.force {
        println!("Run with --force to reseed:\n");
        println!("   estate-seed --force\n");
        std::process::exit(1);
    }

    if !cli.yes && !confirm_reseed()? {
        println!("Seeding aborted.");
        return Ok(());
    }

    warn!("Reseeding: all existing documents in the target collections will be deleted");

    let store = AppwriteClient::new(&config);
    let seeder = Seeder::new(&store, &config.collections);

    let mut rng = rand::rng();
    seeder.run(&mut rng).await?;

    Ok(())
}

/// Prompt for the destructive-run confirmation on stdin.
fn confirm_reseed() -> anyhow::Result<bool> {
    print!("DELETE and reseed database? (y/N): ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(is_affirmative(&answer))
}

/// Only an explicit `y` (any case) confirms; everything else aborts.
fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_affirmative_answers() {
        assert!(is_affirmative("y"));
        assert!(is_affirmative("Y"));
        assert!(is_affirmative("  y\n"));
    }

    #[test]
    fn test_non_affirmative_answers() {
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("\n"));
        assert!(!is_affirmative("n"));
        assert!(!is_affirmative("N"));
        assert!(!is_affirmative("yes"));
        assert!(!is_affirmative("maybe"));
    }
}
