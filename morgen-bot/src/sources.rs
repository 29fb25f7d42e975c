//! Source adapters.
//!
//! Each adapter returns an explicit `SourceResult`; placeholder
//! substitution happens once, in [`gather`], so the renderers never see
//! an empty calendar or to-do block and the failure policy lives in one
//! place.

use std::path::Path;
use std::time::Duration;

use chrono::{DateTime, Datelike, Local, NaiveDate, Timelike};
use morgen_core::{
    filter_events, filter_tasks, greeting_for_hour, upcoming_birthdays, BirthdayBook,
    DashboardContent, ForecastResponse, SourceError, SourceResult, WeatherSnapshot,
    DEFAULT_HORIZON_DAYS, DEFAULT_MAX_TASKS, NO_EVENTS, NO_TODOS,
};
use tokio::process::Command;

use crate::config::BotConfig;

/// Forecast latitude (Rathenow).
pub const LATITUDE: f64 = 52.60;
/// Forecast longitude (Rathenow).
pub const LONGITUDE: f64 = 12.34;

/// Per-request timeout for the weather fetch and the calendar tool.
const SOURCE_TIMEOUT: Duration = Duration::from_secs(12);
/// Weather fetch attempts before giving up.
const WEATHER_ATTEMPTS: u32 = 3;

/// Fetch today's weather, retrying on any failure.
///
/// Up to three attempts, no backoff; after the last failure the
/// placeholder snapshot is returned instead of an error. Weather never
/// blocks the dashboard.
pub async fn fetch_weather(client: &reqwest::Client, base_url: &str) -> WeatherSnapshot {
    for attempt in 1..=WEATHER_ATTEMPTS {
        match try_fetch_weather(client, base_url).await {
            Ok(snapshot) => return snapshot,
            Err(err) => {
                tracing::warn!(attempt, error = %err, "weather fetch failed");
            }
        }
    }
    WeatherSnapshot::unavailable()
}

async fn try_fetch_weather(
    client: &reqwest::Client,
    base_url: &str,
) -> SourceResult<WeatherSnapshot> {
    let url = format!(
        "{base_url}/v1/forecast\
         ?latitude={LATITUDE}&longitude={LONGITUDE}\
         &current=temperature_2m,relative_humidity_2m,wind_speed_10m,wind_direction_10m,weather_code\
         &daily=temperature_2m_max,temperature_2m_min\
         &timezone=Europe%2FBerlin"
    );

    let response = client
        .get(&url)
        .timeout(SOURCE_TIMEOUT)
        .send()
        .await
        .map_err(classify_reqwest)?
        .error_for_status()
        .map_err(classify_reqwest)?;

    let forecast: ForecastResponse = response.json().await.map_err(classify_reqwest)?;
    WeatherSnapshot::from_forecast(&forecast)
}

fn classify_reqwest(err: reqwest::Error) -> SourceError {
    if err.is_timeout() {
        SourceError::Timeout(err.to_string())
    } else {
        SourceError::Http(err.to_string())
    }
}

/// Run `khal list today 1d` and filter its output into event lines.
///
/// The exit status is ignored: khal's stdout is authoritative, and an
/// empty result becomes the placeholder downstream either way.
///
/// # Errors
///
/// Returns [`SourceError::Timeout`] when the tool exceeds the source
/// timeout and [`SourceError::Io`] when it cannot be spawned at all.
pub async fn fetch_calendar() -> SourceResult<Vec<String>> {
    let output = tokio::time::timeout(
        SOURCE_TIMEOUT,
        Command::new("khal").args(["list", "today", "1d"]).output(),
    )
    .await
    .map_err(|_| SourceError::Timeout("khal list today 1d".to_string()))??;

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(filter_events(&stdout))
}

/// Read today's to-do file (`<dir>/YYYY-MM-DD.md`) and filter its tasks.
///
/// # Errors
///
/// Returns [`SourceError::Io`] when the file cannot be read. A missing
/// file is the normal "nothing planned" case for the caller.
pub fn read_todos(dir: &Path, today: NaiveDate) -> SourceResult<Vec<String>> {
    let path = dir.join(format!("{}.md", today.format("%Y-%m-%d")));
    let raw = std::fs::read_to_string(path)?;
    Ok(filter_tasks(&raw, DEFAULT_MAX_TASKS))
}

/// Read the birthday book and format the entries due within the horizon.
///
/// # Errors
///
/// Returns [`SourceError::Io`] for a missing file and
/// [`SourceError::Json`] for a malformed one.
pub fn read_birthdays(path: &Path, today: NaiveDate) -> SourceResult<Vec<String>> {
    let raw = std::fs::read_to_string(path)?;
    let book: BirthdayBook = serde_json::from_str(&raw)?;
    Ok(upcoming_birthdays(&book, today, DEFAULT_HORIZON_DAYS))
}

/// Gather all four sources into one [`DashboardContent`].
///
/// Failures degrade per section: weather carries its own placeholder
/// snapshot, calendar and to-dos substitute their placeholder line, and
/// birthdays simply stay empty. A run never aborts because a source is
/// down.
pub async fn gather(
    config: &BotConfig,
    client: &reqwest::Client,
    now: DateTime<Local>,
) -> DashboardContent {
    let today = now.date_naive();

    let weather = fetch_weather(client, &config.weather_url).await;

    let calendar = match fetch_calendar().await {
        Ok(events) if !events.is_empty() => events,
        Ok(_) => vec![NO_EVENTS.to_string()],
        Err(err) => {
            tracing::warn!(error = %err, "calendar unavailable");
            vec![NO_EVENTS.to_string()]
        }
    };

    let todos = match read_todos(&config.todo_dir, today) {
        Ok(tasks) if !tasks.is_empty() => tasks,
        Ok(_) => vec![NO_TODOS.to_string()],
        Err(err) => {
            tracing::debug!(error = %err, "no to-do file for today");
            vec![NO_TODOS.to_string()]
        }
    };

    let birthdays = read_birthdays(&config.birthdays_file, today).unwrap_or_else(|err| {
        tracing::debug!(error = %err, "birthday book unavailable");
        Vec::new()
    });

    DashboardContent {
        greeting: greeting_for_hour(now.hour()).to_string(),
        subtitle: format!(
            "{} · {:02}.{:02}.{}",
            config.location,
            now.day(),
            now.month(),
            now.year()
        ),
        weather,
        calendar,
        todos,
        birthdays,
    }
}
