//! Weather normalization: Open-Meteo response parsing, compass bucketing
//! and the weather-code → icon-kind table.

use serde::Deserialize;

use crate::error::{SourceError, SourceResult};
use crate::item::{ItemKind, LineItem, WeatherSnapshot};

/// Compass labels for the 8 wind-direction buckets (0° = N, 90° = O).
const COMPASS: [&str; 8] = ["N", "NO", "O", "SO", "S", "SW", "W", "NW"];

/// Bucket a wind direction in degrees into one of 8 compass labels.
///
/// `floor((deg + 22.5) / 45) mod 8`, so 0° and 359° both map to "N".
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn compass_label(deg: f64) -> &'static str {
    let idx = (((deg + 22.5) / 45.0).floor() as usize) % 8;
    COMPASS[idx]
}

/// Glyph categories drawn by the icon synthesizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    /// Clear sky.
    Sun,
    /// Overcast and the catch-all for unknown codes.
    Cloud,
    /// Fog banks.
    Fog,
    /// Cloud with rain streaks (also drizzle and storm).
    RainCloud,
    /// Cloud with snowflakes.
    SnowCloud,
    /// Thermometer, for temperature rows.
    Thermometer,
    /// Water drop, for humidity rows.
    Drop,
    /// Wind arcs, for wind rows.
    Wind,
}

/// Map an Open-Meteo weather code to its icon category.
///
/// The mapping is total: every integer (and a missing code) lands in a
/// bucket, with Cloud as the catch-all.
#[must_use]
pub fn icon_for_code(code: Option<i32>) -> IconKind {
    match code {
        Some(0) => IconKind::Sun,
        Some(45 | 48) => IconKind::Fog,
        // drizzle, rain, showers and thunderstorms all share the rain cloud
        Some(51 | 53 | 55 | 56 | 57 | 61 | 63 | 65 | 66 | 67 | 80 | 81 | 82 | 95 | 96 | 99) => {
            IconKind::RainCloud
        }
        Some(71 | 73 | 75 | 77 | 85 | 86) => IconKind::SnowCloud,
        _ => IconKind::Cloud,
    }
}

/// Pick the per-row glyph for a weather line item.
#[must_use]
pub fn icon_for_item(kind: ItemKind) -> IconKind {
    match kind {
        ItemKind::Temp | ItemKind::Range => IconKind::Thermometer,
        ItemKind::Humidity => IconKind::Drop,
        ItemKind::Wind => IconKind::Wind,
        _ => IconKind::Cloud,
    }
}

/// `current` object of the Open-Meteo forecast response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CurrentWeather {
    /// Air temperature at 2m, °C.
    pub temperature_2m: Option<f64>,
    /// Relative humidity at 2m, percent.
    pub relative_humidity_2m: Option<f64>,
    /// Wind speed at 10m, km/h.
    pub wind_speed_10m: Option<f64>,
    /// Wind direction at 10m, degrees.
    pub wind_direction_10m: Option<f64>,
    /// WMO weather code.
    pub weather_code: Option<i32>,
}

/// `daily` object of the Open-Meteo forecast response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DailyWeather {
    /// Daily maximum temperatures, first entry is today.
    #[serde(default)]
    pub temperature_2m_max: Vec<Option<f64>>,
    /// Daily minimum temperatures, first entry is today.
    #[serde(default)]
    pub temperature_2m_min: Vec<Option<f64>>,
}

/// Top-level Open-Meteo forecast response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastResponse {
    /// Current conditions.
    pub current: Option<CurrentWeather>,
    /// Daily aggregates.
    pub daily: Option<DailyWeather>,
}

impl WeatherSnapshot {
    /// Build a snapshot from a parsed forecast response.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::MissingField`] when the current temperature
    /// or today's min/max is absent; the adapter treats that like any
    /// other failed attempt.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_forecast(response: &ForecastResponse) -> SourceResult<Self> {
        let current = response.current.clone().unwrap_or_default();
        let daily = response.daily.clone().unwrap_or_default();

        let temp = current
            .temperature_2m
            .ok_or(SourceError::MissingField("current.temperature_2m"))?;
        let tmax = daily
            .temperature_2m_max
            .first()
            .copied()
            .flatten()
            .ok_or(SourceError::MissingField("daily.temperature_2m_max"))?;
        let tmin = daily
            .temperature_2m_min
            .first()
            .copied()
            .flatten()
            .ok_or(SourceError::MissingField("daily.temperature_2m_min"))?;

        let mut items = vec![
            LineItem::new(ItemKind::Temp, format!("{temp:.1}°C aktuell")),
            LineItem::new(ItemKind::Range, format!("{tmin:.1}°C / {tmax:.1}°C")),
        ];

        if let Some(hum) = current.relative_humidity_2m {
            items.push(LineItem::new(
                ItemKind::Humidity,
                format!("{}% Luftfeuchte", hum as i64),
            ));
        }
        if let Some(speed) = current.wind_speed_10m {
            let text = match current.wind_direction_10m {
                Some(deg) => format!("{} {speed:.0} km/h", compass_label(deg)),
                None => format!("{speed:.0} km/h"),
            };
            items.push(LineItem::new(ItemKind::Wind, text));
        }

        Ok(Self {
            ok: true,
            weather_code: current.weather_code,
            items,
        })
    }
}

/// One tidy label/value row of the weather card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeatherRow {
    /// Item classification, used to pick the per-row glyph.
    pub kind: ItemKind,
    /// Muted label column text.
    pub label: String,
    /// Bright value column text.
    pub value: String,
}

/// Derive label/value rows from weather line items.
///
/// Temperature and humidity keep only their leading value token; the range
/// keeps the full "min / max" text.
#[must_use]
pub fn weather_rows(items: &[LineItem]) -> Vec<WeatherRow> {
    items
        .iter()
        .map(|item| {
            let label = match item.kind {
                ItemKind::Temp => "Aktuell",
                ItemKind::Range => "Tief / Hoch",
                ItemKind::Humidity => "Luftfeuchte",
                ItemKind::Wind => "Wind",
                _ => "Info",
            };
            let text = item.text.trim();
            let value = match item.kind {
                ItemKind::Temp | ItemKind::Humidity => {
                    text.split_whitespace().next().unwrap_or(text).to_string()
                }
                _ => text.to_string(),
            };
            WeatherRow {
                kind: item.kind,
                label: label.to_string(),
                value,
            }
        })
        .collect()
}
