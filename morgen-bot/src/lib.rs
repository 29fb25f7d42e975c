//! # Morgen Bot
//!
//! The delivery half of the dashboard: gathers the four sources, renders
//! the PNG via `morgen-render` and sends it to Telegram, falling back to
//! the plain-text composition when the image path fails.
//!
//! ```text
//! weather (HTTP) ──┐
//! khal (process) ──┤  gather   compose/render     deliver
//! to-dos (file) ───┼────────▶ DashboardContent ──▶ sendPhoto
//! birthdays (file)─┘                         └───▶ sendMessage (fallback)
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod run;
pub mod sources;
pub mod telegram;

pub use config::{load_bot_token, BotConfig};
pub use run::{run, RunOptions};
pub use telegram::TelegramClient;
