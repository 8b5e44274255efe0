mod cli;
mod config;
mod prompts;
mod render;

use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use indicatif::ProgressBar;
use llm_advisor::{ChatClient, Message};
use snapshot_ingestor::{
    models::{
        instrument::{self, InstType},
        timeframe::Timeframe,
    },
    pipeline::{self, SnapshotConfig},
    providers::{MarketDataProvider, okx_rest::OkxRestProvider},
};
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

const TIMEFRAMES: [Timeframe; 2] = [Timeframe::M15, Timeframe::H1];

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; the environment may be set directly.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = cli::Cli::parse();
    let config = config::AdvisorConfig::from_env()?;

    // Prompt library and symbol are validated before any model spend.
    let prompt_files = prompts::list_prompts(&cli.prompts_dir)?;
    let prompt = prompts::select_prompt(&prompt_files, cli.prompt.as_deref())?;

    println!("{}", "Crypto AI Trader".bold());

    let provider = OkxRestProvider::new()?;

    let spin = spinner("Loading OKX instruments...");
    let (spot, swap) = tokio::try_join!(
        provider.instruments(InstType::Spot),
        provider.instruments(InstType::Swap),
    )?;
    spin.finish_with_message(format!(
        "Loaded {} SPOT and {} SWAP instruments",
        spot.len().to_string().green(),
        swap.len().to_string().green(),
    ));

    instrument::validate_symbol(&cli.symbol, &spot, &swap)?;

    let spin = spinner("Loading market data...");
    let snapshot = pipeline::build_snapshot(
        &provider,
        &cli.symbol,
        &TIMEFRAMES,
        SnapshotConfig::default(),
    )
    .await?;
    spin.finish_with_message("Market data and indicators ready");

    let system_prompt = prompts::load(prompt)?;
    // The snapshot is serialized exactly once, as the user-message payload.
    let payload = serde_json::to_string(&snapshot)?;
    tracing::debug!(bytes = payload.len(), prompt = %prompt.stem, "snapshot payload ready");

    let client = ChatClient::new(config.base_url, config.model, config.api_key);
    let messages = [Message::system(&system_prompt), Message::user(&payload)];
    let stream = client.stream_chat(&messages).await?;

    println!("{}", "Reasoning...".cyan());
    let (reasoning_tx, mut reasoning_rx) = mpsc::channel(64);
    let collector = tokio::spawn(stream.collect_plan(reasoning_tx));
    while let Some(fragment) = reasoning_rx.recv().await {
        print!("{}", fragment.dimmed());
        std::io::stdout().flush().ok();
    }
    println!();

    let raw = collector.await.context("completion stream task failed")??;
    let plan = llm_advisor::parse_plan(&raw)?;
    render::print_plan(&plan);

    Ok(())
}

fn spinner(message: &str) -> ProgressBar {
    let spin = ProgressBar::new_spinner().with_message(message.to_string());
    spin.enable_steady_tick(Duration::from_millis(120));
    spin
}
