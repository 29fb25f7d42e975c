//! End-to-end rasterization checks.
//!
//! These exercise the full SVG → resvg → PNG pipeline. Font discovery can
//! legitimately fail on a bare container; that path is covered by unit
//! tests, so the PNG assertions only run when a system font exists.

use morgen_core::{DashboardContent, WeatherSnapshot, NO_EVENTS, NO_TODOS};
use morgen_render::{render_dashboard, FontBook, Theme};

fn placeholder_content() -> DashboardContent {
    DashboardContent {
        greeting: "Guten Morgen!".into(),
        subtitle: "Rathenow · 10.06.2024".into(),
        weather: WeatherSnapshot::unavailable(),
        calendar: vec![NO_EVENTS.to_string()],
        todos: vec![NO_TODOS.to_string()],
        birthdays: Vec::new(),
    }
}

#[test]
fn all_sources_failed_still_produces_a_png() {
    let Ok(font) = FontBook::discover() else {
        return;
    };
    let png =
        render_dashboard(&placeholder_content(), &Theme::default(), &font).expect("png bytes");

    // PNG magic bytes: \x89PNG
    assert!(png.len() > 8);
    assert_eq!(&png[0..4], &[137, 80, 78, 71]);
}

#[test]
fn rendering_is_deterministic() {
    let Ok(font) = FontBook::discover() else {
        return;
    };
    let theme = Theme::default();
    let a = render_dashboard(&placeholder_content(), &theme, &font).expect("first render");
    let b = render_dashboard(&placeholder_content(), &theme, &font).expect("second render");
    assert_eq!(a, b);
}
