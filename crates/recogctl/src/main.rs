//! Recog Control - intent/entity accuracy regression check for Odin bots
//!
//! Replays a CSV fixture of user phrases against a bot's recognize
//! endpoint, grades each row against the expected intent and entities,
//! writes an annotated copy of the fixture and prints the accuracy.

mod client;
mod config;
mod fixture;
mod report;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use owo_colors::OwoColorize;
use tracing::{info, Level};

use recog_common::{aggregate, evaluate_row};

#[derive(Parser)]
#[command(name = "recogctl")]
#[command(about = "Intent and entity accuracy check for Odin bots", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the input CSV fixture
    #[arg(long)]
    input_file: Option<PathBuf>,

    /// Platform base URL
    #[arg(long)]
    platform_url: Option<String>,

    /// Bot odin id
    #[arg(long)]
    odin_id: Option<String>,

    /// Bot name, used as output filename prefix
    #[arg(long)]
    bot_name: Option<String>,

    /// Delay between requests in seconds
    #[arg(long)]
    delay: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .init();

    let cli = Cli::parse();
    let config = config::RunConfig::resolve(
        cli.input_file,
        cli.platform_url,
        cli.odin_id,
        cli.bot_name,
        cli.delay,
    )?;

    let fixture = fixture::Fixture::load(&config.input_file)?;
    info!(
        "Loaded {} rows from {}",
        fixture.rows.len(),
        config.input_file.display()
    );

    let client = client::RecognizeClient::new(&config.platform_url, &config.odin_id);
    let pacing = Duration::from_secs(config.delay_secs);

    let mut verdicts = Vec::with_capacity(fixture.rows.len());
    for case in fixture.cases() {
        info!("{} {}", case.user_phrase, case.intent_name);
        if let Some(entities) = &case.entities {
            info!("{}", entities);
        }
        let reply = client.recognize(&case.user_phrase).await?;
        verdicts.push(evaluate_row(&case, &reply));
        // Courtesy pause so the platform is not hammered; not a
        // retry or backoff mechanism.
        tokio::time::sleep(pacing).await;
    }

    let path = report::write_results(&config, &fixture, &verdicts)?;
    info!("Results written to {}", path.display());

    match aggregate(&verdicts) {
        Some(percentage) => println!("{} {}%", "Accuracy:".bold(), percentage),
        None => println!("No rows in fixture, nothing to score"),
    }

    Ok(())
}
