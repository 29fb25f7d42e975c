//! Delivery sequencing of a full run against a mock Bot API.
//!
//! Rendering depends on the host's installed fonts: with fonts the image
//! path runs first and falls back to text on rejection, without fonts the
//! run goes straight to text. Both routes must end at `sendMessage`, and
//! the run outcome must track whether anything was accepted.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use morgen_bot::{run, BotConfig, RunOptions};

const TOKEN: &str = "123:abc";

/// Config with every source and the Bot API pointed at the mock server.
fn test_config(server: &MockServer, dir: &tempfile::TempDir) -> BotConfig {
    BotConfig {
        weather_url: server.uri(),
        telegram_url: server.uri(),
        todo_dir: dir.path().to_path_buf(),
        birthdays_file: dir.path().join("missing.json"),
        ..BotConfig::default()
    }
}

async fn mount_weather_down(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(500))
        .mount(server)
        .await;
}

fn requests_to(requests: &[wiremock::Request], api_method: &str) -> usize {
    requests
        .iter()
        .filter(|r| r.url.path().ends_with(api_method))
        .count()
}

#[tokio::test]
async fn rejected_photo_falls_back_to_text_delivery() {
    std::env::set_var("TELEGRAM_BOT_TOKEN", TOKEN);
    let server = MockServer::start().await;
    mount_weather_down(&server).await;
    Mock::given(method("POST"))
        .and(path(format!("/bot{TOKEN}/sendPhoto")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": false})))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(format!("/bot{TOKEN}/sendMessage")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let delivered = run(&test_config(&server, &dir), &RunOptions::default())
        .await
        .expect("run");

    assert!(delivered, "text fallback was accepted");
    let requests = server.received_requests().await.expect("recorded requests");
    assert_eq!(requests_to(&requests, "/sendMessage"), 1);
    // the image path only runs on hosts that have a font installed
    if morgen_render::FontBook::discover().is_ok() {
        assert_eq!(requests_to(&requests, "/sendPhoto"), 1);
    }
}

#[tokio::test]
async fn run_fails_only_when_both_paths_are_rejected() {
    std::env::set_var("TELEGRAM_BOT_TOKEN", TOKEN);
    let server = MockServer::start().await;
    mount_weather_down(&server).await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": false})))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let delivered = run(&test_config(&server, &dir), &RunOptions::default())
        .await
        .expect("run");

    assert!(!delivered, "no path delivered, run must report failure");
    let requests = server.received_requests().await.expect("recorded requests");
    assert_eq!(requests_to(&requests, "/sendMessage"), 1);
}

#[tokio::test]
async fn text_only_run_never_touches_the_photo_endpoint() {
    std::env::set_var("TELEGRAM_BOT_TOKEN", TOKEN);
    let server = MockServer::start().await;
    mount_weather_down(&server).await;
    Mock::given(method("POST"))
        .and(path(format!("/bot{TOKEN}/sendMessage")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().expect("tempdir");
    let options = RunOptions {
        text_only: true,
        ..RunOptions::default()
    };
    let delivered = run(&test_config(&server, &dir), &options)
        .await
        .expect("run");

    assert!(delivered);
    let requests = server.received_requests().await.expect("recorded requests");
    assert_eq!(requests_to(&requests, "/sendPhoto"), 0);
    assert_eq!(requests_to(&requests, "/sendMessage"), 1);
}
