//! Birthday proximity computation.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

/// Default look-ahead window in days.
pub const DEFAULT_HORIZON_DAYS: i64 = 7;

/// One entry of the birthdays JSON file (name → entry).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BirthdayEntry {
    /// Day of month, 1-31.
    #[serde(default)]
    pub day: Option<u32>,
    /// Month, 1-12.
    #[serde(default)]
    pub month: Option<u32>,
    /// Birth year, when known; enables the "(age)" suffix.
    #[serde(default)]
    pub year: Option<i32>,
}

/// The birthdays file: name → day/month/optional year.
///
/// A `BTreeMap` keeps iteration order deterministic, so entries with the
/// same distance sort stably by name.
pub type BirthdayBook = BTreeMap<String, BirthdayEntry>;

/// Compute upcoming birthdays within `horizon` days of `today`, sorted by
/// proximity.
///
/// A birthday already passed this year rolls over to next year's
/// occurrence. Day/month combinations that do not exist in the looked-up
/// year (Feb 29 off-leap) are skipped, as are entries without day or
/// month. Formats: `"Heute: NAME"`, `"Morgen: NAME"`, `"in N Tagen:
/// NAME"`, each with `" (age)"` appended when the birth year is known
/// (age = occurrence year − birth year).
#[must_use]
pub fn upcoming_birthdays(book: &BirthdayBook, today: NaiveDate, horizon: i64) -> Vec<String> {
    let mut upcoming: Vec<(i64, String)> = Vec::new();

    for (name, entry) in book {
        let (Some(day), Some(month)) = (entry.day, entry.month) else {
            continue;
        };

        let Some(occurrence) = next_occurrence(today, month, day) else {
            continue;
        };
        let days_until = (occurrence - today).num_days();
        if days_until > horizon {
            continue;
        }

        let prefix = match days_until {
            0 => "Heute".to_string(),
            1 => "Morgen".to_string(),
            n => format!("in {n} Tagen"),
        };
        let age_suffix = entry
            .year
            .map(|born| format!(" ({})", occurrence.year() - born))
            .unwrap_or_default();

        upcoming.push((days_until, format!("{prefix}: {name}{age_suffix}")));
    }

    upcoming.sort_by_key(|(days, _)| *days);
    upcoming.into_iter().map(|(_, line)| line).collect()
}

/// Next calendar occurrence of `month`/`day` on or after `today`.
fn next_occurrence(today: NaiveDate, month: u32, day: u32) -> Option<NaiveDate> {
    match NaiveDate::from_ymd_opt(today.year(), month, day) {
        Some(date) if date >= today => Some(date),
        // passed this year (or Feb 29 in an off-leap year): try next year
        _ => NaiveDate::from_ymd_opt(today.year() + 1, month, day),
    }
}
