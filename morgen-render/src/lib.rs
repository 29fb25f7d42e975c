//! # Morgen Render
//!
//! Turns a [`morgen_core::DashboardContent`] into a portrait PNG.
//!
//! ## Pipeline
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  DashboardContent + Theme + FontBook        │
//! ├──────────────┬──────────────────────────────┤
//! │ CardLayout   │ IconSynthesizer              │
//! │ (wrap,       │ (procedural SVG glyphs)      │
//! │  dividers,   ├──────────────────────────────┤
//! │  truncation) │ SVG intermediate             │
//! ├──────────────┴──────────────────────────────┤
//! │  usvg parse → resvg raster → PNG encode     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Any failure here (most commonly: no font installed) makes the caller
//! fall back to the plain-text dashboard.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod card;
pub mod compose;
pub mod error;
pub mod font;
pub mod icons;
mod svg;
pub mod theme;

pub use card::{draw_card, CardFrame};
pub use compose::{compose_svg, render_dashboard, CANVAS_H, CANVAS_W};
pub use error::{RenderError, RenderResult};
pub use font::{FontBook, TextMeasure};
pub use icons::{icon_fragment, rasterize_icon};
pub use theme::{Palette, Style, Theme, WeatherIconMode};
