use std::path::PathBuf;

use clap::Parser;

/// Snapshot a symbol's recent price action and ask the model for a plan.
#[derive(Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Instrument to analyze (e.g. "BTC-USDT-SWAP")
    #[arg(long, default_value = "BTC-USDT-SWAP")]
    pub symbol: String,

    /// Prompt file stem from the prompts directory; defaults to the first
    /// file found
    #[arg(long)]
    pub prompt: Option<String>,

    /// Directory holding system prompt files
    #[arg(long, default_value = "prompts")]
    pub prompts_dir: PathBuf,
}
