//! # Morgen
//!
//! Daily dashboard bot: one run gathers, renders and delivers, then
//! exits. Exit code 0 means something reached the recipient (or disk),
//! 1 means every delivery path failed.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use morgen_bot::{run, BotConfig, RunOptions};

/// Daily status dashboard for Telegram.
#[derive(Debug, Parser)]
#[command(name = "morgen", version, about)]
struct Cli {
    /// Write the dashboard to this file instead of sending it.
    #[arg(long)]
    out: Option<PathBuf>,

    /// Skip the image and deliver the text composition.
    #[arg(long)]
    text: bool,
}

/// Initialize structured tracing with optional JSON format.
///
/// Set `RUST_LOG` to control log levels (default: info,morgen_bot=debug).
/// Set `RUST_LOG_FORMAT=json` for JSON output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,morgen_bot=debug"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true);

    if std::env::var("RUST_LOG_FORMAT").as_deref() == Ok("json") {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let config = BotConfig::from_env();
    let options = RunOptions {
        out: cli.out,
        text_only: cli.text,
    };

    let delivered = run(&config, &options).await?;
    if !delivered {
        std::process::exit(1);
    }
    Ok(())
}
