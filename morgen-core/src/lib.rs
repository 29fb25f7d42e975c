//! # Morgen Core
//!
//! Domain logic for the daily status dashboard. Everything in this crate is
//! pure: adapters in `morgen-bot` do the I/O and feed raw strings/JSON in,
//! `morgen-render` turns the resulting [`DashboardContent`] into pixels.
//!
//! ## Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ raw sources (HTTP JSON, stdout, files)      │
//! ├─────────────────────────────────────────────┤
//! │  weather / calendar / todos / birthdays     │
//! │  normalization into LineItem lists          │
//! ├─────────────────────────────────────────────┤
//! │  DashboardContent  →  image or text render  │
//! └─────────────────────────────────────────────┘
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod birthdays;
pub mod calendar;
pub mod error;
pub mod item;
pub mod text;
pub mod todos;
pub mod weather;
pub mod wrap;

pub use birthdays::{upcoming_birthdays, BirthdayBook, BirthdayEntry, DEFAULT_HORIZON_DAYS};
pub use calendar::filter_events;
pub use error::{SourceError, SourceResult};
pub use item::{
    DashboardContent, ItemKind, LineItem, SectionKind, WeatherSnapshot, NO_BIRTHDAYS, NO_EVENTS,
    NO_TODOS,
};
pub use text::{compose_text, greeting_for_hour};
pub use todos::{filter_tasks, DEFAULT_MAX_TASKS};
pub use weather::{
    compass_label, icon_for_code, icon_for_item, weather_rows, ForecastResponse, IconKind,
    WeatherRow,
};
pub use wrap::wrap;

/// Core crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
