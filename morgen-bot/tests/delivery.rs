//! Telegram delivery against a mock Bot API.

use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use morgen_bot::TelegramClient;

fn client(server: &MockServer) -> TelegramClient {
    TelegramClient::with_base_url(reqwest::Client::new(), server.uri(), "123:abc", "42")
}

#[tokio::test]
async fn send_text_reports_api_acceptance() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bot123:abc/sendMessage"))
        .and(body_string_contains("\"chat_id\":\"42\""))
        .and(body_string_contains("\"parse_mode\":\"Markdown\""))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    assert!(client(&server).send_text("Guten Morgen, Daniel!").await);
}

#[tokio::test]
async fn send_text_reports_api_rejection() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bot123:abc/sendMessage"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "ok": false,
            "description": "Bad Request: chat not found"
        })))
        .mount(&server)
        .await;

    assert!(!client(&server).send_text("hallo").await);
}

#[tokio::test]
async fn send_text_fails_on_unreadable_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bot123:abc/sendMessage"))
        .respond_with(ResponseTemplate::new(500).set_body_string("gateway error"))
        .mount(&server)
        .await;

    assert!(!client(&server).send_text("hallo").await);
}

#[tokio::test]
async fn send_photo_uploads_multipart_png() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bot123:abc/sendPhoto"))
        .and(body_string_contains("name=\"chat_id\""))
        .and(body_string_contains("filename=\"dashboard.png\""))
        .and(body_string_contains("Content-Type: image/png"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .expect(1)
        .mount(&server)
        .await;

    // ASCII stand-in for the PNG keeps the body matcher applicable
    assert!(client(&server).send_photo(b"PNGDATA", None).await);
}

#[tokio::test]
async fn send_photo_failure_lets_the_caller_fall_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bot123:abc/sendPhoto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": false})))
        .mount(&server)
        .await;

    assert!(!client(&server).send_photo(b"PNGDATA", None).await);
}
