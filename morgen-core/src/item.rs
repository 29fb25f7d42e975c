//! Line items - the normalized content model shared by all sections.

use serde::{Deserialize, Serialize};

/// What a single line item represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// Current temperature reading.
    Temp,
    /// Daily min/max temperature range.
    Range,
    /// Relative humidity.
    Humidity,
    /// Wind speed and compass direction.
    Wind,
    /// Free-form informational line (also used for placeholders).
    Info,
    /// A to-do task.
    Todo,
    /// A calendar event.
    Event,
    /// An upcoming birthday.
    Birthday,
}

/// One unit of normalized content. Immutable once produced by an adapter;
/// insertion order is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Content classification.
    pub kind: ItemKind,
    /// Short label for two-column layouts (may be empty).
    pub label: String,
    /// Display text.
    pub text: String,
}

impl LineItem {
    /// Create a line item without a label.
    #[must_use]
    pub fn new(kind: ItemKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            label: String::new(),
            text: text.into(),
        }
    }

    /// Create a labeled line item.
    #[must_use]
    pub fn labeled(kind: ItemKind, label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            text: text.into(),
        }
    }
}

/// Section identity, attached to each content block at construction time.
///
/// The layout engine switches over this tag for per-section formatting
/// instead of matching header strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionKind {
    /// Weather readings (two-column rows, distinct layout).
    Weather,
    /// Today's calendar events (time-prefixed hanging indent).
    Calendar,
    /// Checkbox tasks (bulleted, hanging indent, dividers).
    Todos,
    /// Upcoming birthdays (plain wrap).
    Birthdays,
}

/// Weather reading for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct WeatherSnapshot {
    /// Whether the fetch succeeded.
    pub ok: bool,
    /// Open-Meteo weather code, when available.
    pub weather_code: Option<i32>,
    /// Normalized readings, in display order. Never empty: the failure
    /// path carries a single placeholder item.
    pub items: Vec<LineItem>,
}

impl WeatherSnapshot {
    /// Snapshot representing an unavailable weather source.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            ok: false,
            weather_code: None,
            items: vec![LineItem::new(
                ItemKind::Info,
                "Wetterdaten nicht verfügbar",
            )],
        }
    }
}

/// Everything one dashboard run renders. Built once per run, then passed
/// read-only into the image and text compositions.
#[derive(Debug, Clone)]
pub struct DashboardContent {
    /// Time-of-day greeting, e.g. "Guten Morgen!".
    pub greeting: String,
    /// Location and date line, e.g. "Rathenow · 10.06.2024".
    pub subtitle: String,
    /// Weather reading.
    pub weather: WeatherSnapshot,
    /// Calendar event lines. Never empty (placeholder substituted).
    pub calendar: Vec<String>,
    /// To-do task lines. Never empty (placeholder substituted).
    pub todos: Vec<String>,
    /// Formatted birthday lines; genuinely empty when none are upcoming.
    pub birthdays: Vec<String>,
}

/// Placeholder shown when the to-do file is missing or holds no tasks.
pub const NO_TODOS: &str = "Keine To-dos für heute";
/// Placeholder shown when the calendar has no events or the tool failed.
pub const NO_EVENTS: &str = "Keine Termine";
/// Placeholder shown inside the birthdays card when nothing is upcoming.
pub const NO_BIRTHDAYS: &str = "Keine in den nächsten 7 Tagen";
