//! Telegram Bot API delivery.
//!
//! Two calls: `sendPhoto` with a hand-assembled multipart body for the
//! rendered PNG, and `sendMessage` for the text fallback. Both report
//! plain success/failure; the run loop decides what a failure means.

use std::time::Duration;

use serde::Deserialize;
use serde_json::json;

/// Fixed multipart boundary for photo uploads.
const BOUNDARY: &str = "----openclawboundary7MA4YWxkTrZu0gW";
/// Timeout for the text message call.
const TEXT_TIMEOUT: Duration = Duration::from_secs(20);
/// Timeout for the photo upload.
const PHOTO_TIMEOUT: Duration = Duration::from_secs(30);

/// Minimal Bot API response envelope.
#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

/// A configured Bot API client for one chat.
#[derive(Debug, Clone)]
pub struct TelegramClient {
    http: reqwest::Client,
    base_url: String,
    token: String,
    chat_id: String,
}

impl TelegramClient {
    /// Client against the production Bot API host.
    #[must_use]
    pub fn new(http: reqwest::Client, token: impl Into<String>, chat_id: impl Into<String>) -> Self {
        Self::with_base_url(http, "https://api.telegram.org", token, chat_id)
    }

    /// Client against an alternative host (tests point this at a mock).
    #[must_use]
    pub fn with_base_url(
        http: reqwest::Client,
        base_url: impl Into<String>,
        token: impl Into<String>,
        chat_id: impl Into<String>,
    ) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            token: token.into(),
            chat_id: chat_id.into(),
        }
    }

    fn method_url(&self, method: &str) -> String {
        format!("{}/bot{}/{method}", self.base_url, self.token)
    }

    /// Send a Markdown text message. Returns whether the API accepted it.
    pub async fn send_text(&self, text: &str) -> bool {
        let payload = json!({
            "chat_id": self.chat_id,
            "text": text,
            "parse_mode": "Markdown",
        });

        let result = self
            .http
            .post(self.method_url("sendMessage"))
            .timeout(TEXT_TIMEOUT)
            .json(&payload)
            .send()
            .await;

        self.evaluate("sendMessage", result).await
    }

    /// Upload a PNG via `sendPhoto`. Returns whether the API accepted it.
    pub async fn send_photo(&self, png: &[u8], caption: Option<&str>) -> bool {
        let body = multipart_body(&self.chat_id, caption, png);

        let result = self
            .http
            .post(self.method_url("sendPhoto"))
            .timeout(PHOTO_TIMEOUT)
            .header(
                "Content-Type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(body)
            .send()
            .await;

        self.evaluate("sendPhoto", result).await
    }

    /// Reduce a transport result to the API's `ok` flag, logging failures.
    async fn evaluate(
        &self,
        method: &str,
        result: Result<reqwest::Response, reqwest::Error>,
    ) -> bool {
        let response = match result {
            Ok(response) => response,
            Err(err) => {
                tracing::error!(method, error = %err, "telegram request failed");
                return false;
            }
        };

        match response.json::<ApiEnvelope>().await {
            Ok(envelope) => {
                if !envelope.ok {
                    tracing::error!(
                        method,
                        description = envelope.description.as_deref().unwrap_or("-"),
                        "telegram API rejected the call"
                    );
                }
                envelope.ok
            }
            Err(err) => {
                tracing::error!(method, error = %err, "unreadable telegram response");
                false
            }
        }
    }
}

/// Assemble the `sendPhoto` multipart body by hand.
///
/// Fields: `chat_id`, optional `caption`, then the PNG as `photo` with
/// filename `dashboard.png`.
fn multipart_body(chat_id: &str, caption: Option<&str>, png: &[u8]) -> Vec<u8> {
    let mut body = Vec::with_capacity(png.len() + 512);

    let text_field = |name: &str, value: &str| -> Vec<u8> {
        format!(
            "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
        )
        .into_bytes()
    };

    body.extend_from_slice(&text_field("chat_id", chat_id));
    if let Some(caption) = caption {
        body.extend_from_slice(&text_field("caption", caption));
    }

    body.extend_from_slice(
        format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"photo\"; filename=\"dashboard.png\"\r\n\
             Content-Type: image/png\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(png);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    body
}
