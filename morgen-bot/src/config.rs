//! Runtime configuration.
//!
//! Everything is environment-driven with fixed defaults; there is no
//! config file for the bot itself. The Telegram token is the one
//! exception: it can also come from the shared messenger config.

use std::env;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};

/// Default recipient name used in the greeting and text fallback.
pub const DEFAULT_NAME: &str = "Daniel";
/// Default location shown in the subtitle.
pub const DEFAULT_LOCATION: &str = "Rathenow";
/// Default directory holding dated to-do files.
pub const DEFAULT_TODO_DIR: &str = "/home/clawd/clawd/todos";
/// Default birthday book path.
pub const DEFAULT_BIRTHDAYS_FILE: &str = "/home/clawd/clawd/data/people/birthdays.json";
/// Default weather API host.
pub const DEFAULT_WEATHER_URL: &str = "https://api.open-meteo.com";
/// Default Telegram Bot API host.
pub const DEFAULT_TELEGRAM_URL: &str = "https://api.telegram.org";
/// Default Telegram chat to deliver to.
pub const DEFAULT_CHAT_ID: &str = "000000000";

/// Resolved bot configuration.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// Recipient name (`DASH_NAME`).
    pub name: String,
    /// Location label for the subtitle (`DASH_LOCATION`).
    pub location: String,
    /// Directory with `YYYY-MM-DD.md` to-do files (`DASH_TODO_DIR`).
    pub todo_dir: PathBuf,
    /// Birthday book JSON path (`DASH_BIRTHDAYS_FILE`).
    pub birthdays_file: PathBuf,
    /// Weather API base URL, without trailing slash.
    pub weather_url: String,
    /// Telegram Bot API base URL, without trailing slash.
    pub telegram_url: String,
    /// Telegram chat id (`TELEGRAM_CHAT_ID`).
    pub chat_id: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            location: DEFAULT_LOCATION.to_string(),
            todo_dir: PathBuf::from(DEFAULT_TODO_DIR),
            birthdays_file: PathBuf::from(DEFAULT_BIRTHDAYS_FILE),
            weather_url: DEFAULT_WEATHER_URL.to_string(),
            telegram_url: DEFAULT_TELEGRAM_URL.to_string(),
            chat_id: DEFAULT_CHAT_ID.to_string(),
        }
    }
}

impl BotConfig {
    /// Build a config from the environment, falling back to defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(name) = env::var("DASH_NAME") {
            if !name.is_empty() {
                config.name = name;
            }
        }
        if let Ok(location) = env::var("DASH_LOCATION") {
            if !location.is_empty() {
                config.location = location;
            }
        }
        if let Ok(dir) = env::var("DASH_TODO_DIR") {
            if !dir.is_empty() {
                config.todo_dir = PathBuf::from(dir);
            }
        }
        if let Ok(file) = env::var("DASH_BIRTHDAYS_FILE") {
            if !file.is_empty() {
                config.birthdays_file = PathBuf::from(file);
            }
        }
        if let Ok(chat) = env::var("TELEGRAM_CHAT_ID") {
            if !chat.is_empty() {
                config.chat_id = chat;
            }
        }
        config
    }
}

/// Resolve the Telegram bot token.
///
/// `TELEGRAM_BOT_TOKEN` wins; otherwise the token is read from the
/// shared messenger config at `~/.openclaw/openclaw.json` under
/// `channels.telegram.botToken`.
///
/// # Errors
///
/// Returns an error when neither source yields a non-empty token.
pub fn load_bot_token() -> Result<String> {
    if let Ok(token) = env::var("TELEGRAM_BOT_TOKEN") {
        if !token.is_empty() {
            return Ok(token);
        }
    }

    let home = env::var("HOME").context("HOME is not set")?;
    let path = PathBuf::from(home).join(".openclaw/openclaw.json");
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("reading {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&raw)
        .with_context(|| format!("parsing {}", path.display()))?;

    value
        .pointer("/channels/telegram/botToken")
        .and_then(serde_json::Value::as_str)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .ok_or_else(|| anyhow!("no telegram bot token in {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = BotConfig::default();
        assert_eq!(config.name, "Daniel");
        assert_eq!(config.location, "Rathenow");
        assert!(config.todo_dir.ends_with("todos"));
        assert!(config.weather_url.starts_with("https://"));
    }
}
