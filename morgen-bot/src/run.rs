//! One dashboard run, start to finish.
//!
//! Gather → render → deliver, with the text composition as the fallback
//! whenever the image path fails. The function reports whether anything
//! reached its destination; the binary turns that into the exit code.

use std::path::PathBuf;

use chrono::Local;
use morgen_core::compose_text;
use morgen_render::{render_dashboard, FontBook, RenderResult, Theme};

use crate::config::{load_bot_token, BotConfig};
use crate::sources::gather;
use crate::telegram::TelegramClient;

/// Per-run options from the command line.
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Write the dashboard to this path instead of sending it.
    pub out: Option<PathBuf>,
    /// Skip rendering entirely and use the text composition.
    pub text_only: bool,
}

/// Execute one run. Returns `Ok(true)` when the dashboard was delivered
/// (or written to disk), `Ok(false)` when every delivery path failed.
///
/// # Errors
///
/// Only local I/O surfaces as an error: failing to write the `--out`
/// file. Network and rendering failures degrade instead.
pub async fn run(config: &BotConfig, options: &RunOptions) -> anyhow::Result<bool> {
    let now = Local::now();
    let http = reqwest::Client::new();

    let content = gather(config, &http, now).await;
    let theme = Theme::from_env();

    let rendered = if options.text_only {
        None
    } else {
        match render_image(&content, &theme) {
            Ok(png) => Some(png),
            Err(err) => {
                tracing::warn!(error = %err, "image dashboard failed, falling back to text");
                None
            }
        }
    };

    // --out short-circuits delivery: the PNG (or the text fallback) goes
    // to disk and the run is done.
    if let Some(path) = &options.out {
        match &rendered {
            Some(png) => {
                std::fs::write(path, png)?;
                tracing::info!(path = %path.display(), bytes = png.len(), "dashboard written");
            }
            None => {
                let text = compose_text(&content, &config.name);
                std::fs::write(path, text)?;
                tracing::info!(path = %path.display(), "text dashboard written");
            }
        }
        return Ok(true);
    }

    let token = match load_bot_token() {
        Ok(token) => token,
        Err(err) => {
            tracing::error!(error = %err, "no telegram bot token available");
            return Ok(false);
        }
    };
    let telegram =
        TelegramClient::with_base_url(http, &config.telegram_url, token, config.chat_id.clone());

    if let Some(png) = rendered {
        if telegram.send_photo(&png, None).await {
            tracing::info!("image dashboard sent");
            return Ok(true);
        }
        tracing::warn!("image delivery failed, falling back to text");
    }

    let text = compose_text(&content, &config.name);
    if telegram.send_text(&text).await {
        tracing::info!("text dashboard sent");
        Ok(true)
    } else {
        tracing::error!("dashboard could not be delivered");
        Ok(false)
    }
}

/// Discover a system font and render the PNG.
fn render_image(
    content: &morgen_core::DashboardContent,
    theme: &Theme,
) -> RenderResult<Vec<u8>> {
    let font = FontBook::discover()?;
    render_dashboard(content, theme, &font)
}
