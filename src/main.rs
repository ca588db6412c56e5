//! Twitter Image Backup CLI - main entry point
//!
//! Walks a user's timeline and downloads every reachable image into a
//! per-user directory, skipping files saved by earlier runs.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use twitter_image_backup::{commands, Config, TwitterClient};

#[derive(Parser)]
#[command(name = "twitter-image-backup")]
#[command(about = "Back up the images a Twitter user posted", long_about = None)]
#[command(version)]
struct Cli {
    /// Twitter username whose timeline should be backed up (without @)
    user: String,

    /// Path to the YAML configuration file
    #[arg(short, long, default_value = "config.yml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env for local development
    let _ = dotenvy::dotenv();

    // Initialize logging; diagnostics go to stderr so stdout carries only progress
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("twitter_image_backup=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            // Usage problems (such as a missing username) exit with code 1
            err.print()?;
            std::process::exit(1);
        }
        Err(err) => err.exit(),
    };

    let config = Config::load_from_file(&cli.config)?;
    let client = TwitterClient::new()?;

    let report = commands::backup::run(&client, &config, &cli.user).await?;

    println!(
        "Backed up {} new images for '{}' ({} already present, {} failed, {} tweets scanned)",
        report.downloaded, cli.user, report.skipped, report.failed, report.scanned
    );

    Ok(())
}
