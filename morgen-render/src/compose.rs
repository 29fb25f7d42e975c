//! Dashboard composition: fixed vertical stacking of the four sections
//! into one portrait canvas, serialized to PNG.
//!
//! The canvas is an SVG intermediate rasterized with resvg/tiny-skia; the
//! drawing pass is strictly sequential and threads the vertical cursor
//! from section to section.

use std::fmt::Write;

use morgen_core::{
    icon_for_code, icon_for_item, weather_rows, wrap, DashboardContent, SectionKind,
    WeatherSnapshot, NO_BIRTHDAYS,
};

use crate::card::{draw_card, CardFrame};
use crate::error::{RenderError, RenderResult};
use crate::font::{FontBook, TextMeasure};
use crate::icons::place_icon;
use crate::svg::{line_at, rounded_rect, shadow_defs, shadow_rect, text_at};
use crate::theme::{svg_rgb, Style, Theme, WeatherIconMode};

/// Canvas width in logical units (portrait, ~19.5:9).
pub const CANVAS_W: f32 = 1080.0;
/// Canvas height in logical units.
pub const CANVAS_H: f32 = 2340.0;

const MARGIN: f32 = 48.0;
const HEADER_TOP: f32 = 210.0;
const TITLE_PX: f32 = 64.0;
const SUBTITLE_PX: f32 = 34.0;
const TEXT_PX: f32 = 32.0;
const LINE_HEIGHT: f32 = 44.0;
const GAP: f32 = 22.0;

const H_WEATHER: f32 = 280.0;
const H_CALENDAR: f32 = 360.0;
const H_BIRTHDAYS: f32 = 300.0;
/// Fixed content height the section heights were tuned against.
const CONTENT_HEIGHT: f32 = 1836.0;
const MIN_TODOS_H: f32 = 520.0;

/// Per-section caps on logical items; anything beyond is never drawn.
const MAX_CALENDAR_ITEMS: usize = 11;
const MAX_TODO_ITEMS: usize = 18;
const MAX_BIRTHDAY_ITEMS: usize = 5;

/// Compose the full dashboard as an SVG document.
///
/// Pure with respect to its inputs; rasterization happens separately in
/// [`render_dashboard`].
#[must_use]
pub fn compose_svg(content: &DashboardContent, theme: &Theme, font: &dyn TextMeasure) -> String {
    let colors = theme.colors();
    let mut svg = String::with_capacity(16 * 1024);

    let _ = write!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{CANVAS_W}\" height=\"{CANVAS_H}\" viewBox=\"0 0 {CANVAS_W} {CANVAS_H}\">",
    );
    shadow_defs(&mut svg);
    let _ = write!(
        svg,
        "<rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
        svg_rgb(colors.bg),
    );

    // header: greeting + subtitle, centered for tall phone screens
    let mut y = HEADER_TOP;
    text_at(&mut svg, MARGIN, y, TITLE_PX, colors.text, font.family(), &content.greeting);
    y += 80.0;
    text_at(&mut svg, MARGIN, y, SUBTITLE_PX, colors.muted, font.family(), &content.subtitle);
    y += 58.0;

    let card_w = CANVAS_W - 2.0 * MARGIN;
    let h_todos =
        (CONTENT_HEIGHT - (H_WEATHER + H_CALENDAR + H_BIRTHDAYS + 3.0 * GAP)).max(MIN_TODOS_H);

    let mut y0 = y;
    weather_card(
        &mut svg,
        CardFrame {
            x: MARGIN,
            y: y0,
            w: card_w,
            h: H_WEATHER,
        },
        theme,
        font,
        &content.weather,
    );

    y0 += H_WEATHER + GAP;
    let calendar = cap(&content.calendar, MAX_CALENDAR_ITEMS);
    draw_card(
        &mut svg,
        CardFrame {
            x: MARGIN,
            y: y0,
            w: card_w,
            h: H_CALENDAR,
        },
        theme,
        font,
        SectionKind::Calendar,
        "Termine",
        calendar,
        colors.card,
    );

    y0 += H_CALENDAR + GAP;
    let todos = cap(&content.todos, MAX_TODO_ITEMS);
    draw_card(
        &mut svg,
        CardFrame {
            x: MARGIN,
            y: y0,
            w: card_w,
            h: h_todos,
        },
        theme,
        font,
        SectionKind::Todos,
        "To-dos",
        todos,
        colors.card2,
    );

    y0 += h_todos + GAP;
    let birthday_lines: Vec<String> = if content.birthdays.is_empty() {
        vec![NO_BIRTHDAYS.to_string()]
    } else {
        content.birthdays.clone()
    };
    draw_card(
        &mut svg,
        CardFrame {
            x: MARGIN,
            y: y0,
            w: card_w,
            h: H_BIRTHDAYS,
        },
        theme,
        font,
        SectionKind::Birthdays,
        "Geburtstage (7 Tage)",
        cap(&birthday_lines, MAX_BIRTHDAY_ITEMS),
        colors.card2,
    );

    svg.push_str("</svg>");
    svg
}

/// Rasterize the dashboard to PNG bytes.
///
/// # Errors
///
/// Returns an error if the SVG fails to parse, the pixel buffer cannot
/// be allocated or PNG encoding fails. The caller treats any of these as
/// a rendering failure and falls back to the text dashboard.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn render_dashboard(
    content: &DashboardContent,
    theme: &Theme,
    font: &FontBook,
) -> RenderResult<Vec<u8>> {
    let svg = compose_svg(content, theme, font);

    let mut opt = usvg::Options::default();
    opt.fontdb = font.database();
    opt.font_family = font.family().to_string();
    let tree = usvg::Tree::from_str(&svg, &opt).map_err(|e| RenderError::Svg(e.to_string()))?;

    let (w, h) = (CANVAS_W as u32, CANVAS_H as u32);
    let mut pixmap = tiny_skia::Pixmap::new(w, h)
        .ok_or_else(|| RenderError::Pixmap(format!("{w}x{h}")))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    tracing::debug!(bytes = pixmap.data().len(), "dashboard rasterized");

    pixmap
        .encode_png()
        .map_err(|e| RenderError::Encode(e.to_string()))
}

fn cap<T>(items: &[T], max: usize) -> &[T] {
    &items[..items.len().min(max)]
}

/// The weather section: label/value rows instead of the generic card
/// layout, with an optional big corner glyph or per-row glyphs.
fn weather_card(
    svg: &mut String,
    frame: CardFrame,
    theme: &Theme,
    font: &dyn TextMeasure,
    weather: &WeatherSnapshot,
) {
    let colors = theme.colors();
    let radius = theme.card_radius();

    if theme.style == Style::Cards {
        shadow_rect(svg, frame.x, frame.y, frame.w, frame.h, radius, colors.shadow_alpha);
    }
    rounded_rect(svg, frame.x, frame.y, frame.w, frame.h, radius, colors.card);
    text_at(
        svg,
        frame.x + 34.0,
        frame.y + 26.0,
        40.0,
        colors.text,
        font.family(),
        "Wetter",
    );

    // big glyph top-right, nudged up so it clears the first divider
    if theme.icons_enabled {
        let kind = icon_for_code(weather.weather_code);
        place_icon(
            svg,
            kind,
            frame.x + frame.w - 34.0 - 140.0,
            frame.y + 6.0,
            140.0,
        );
    }

    let rows = weather_rows(&weather.items);
    let use_line_icons =
        theme.icons_enabled && theme.weather_icon_mode == WeatherIconMode::Lines;

    let max_w = frame.w - 68.0;
    let icon_w = if use_line_icons { 54.0 } else { 0.0 };
    let label_w = 240.0;
    let col_gap = 16.0;

    let x0 = frame.x + 34.0;
    let label_x = x0 + icon_w;
    let value_x = label_x + label_w + col_gap;
    let value_w = max_w - icon_w - label_w - col_gap;

    let bottom = frame.y + frame.h - 40.0;
    let mut yy = frame.y + 92.0;

    for row in rows {
        if use_line_icons {
            place_icon(svg, icon_for_item(row.kind), x0, yy - 6.0, 44.0);
        }

        text_at(svg, label_x, yy, TEXT_PX, colors.muted, font.family(), &row.label);

        for (j, wrapped) in wrap(&row.value, |s| font.measure(s, TEXT_PX), value_w)
            .iter()
            .enumerate()
        {
            #[allow(clippy::cast_precision_loss)]
            let offset = j as f32 * LINE_HEIGHT;
            text_at(svg, value_x, yy + offset, TEXT_PX, colors.text, font.family(), wrapped);
            if yy + offset + LINE_HEIGHT > bottom {
                break;
            }
        }

        yy += LINE_HEIGHT;
        if yy > bottom {
            break;
        }

        if yy < frame.y + frame.h - 60.0 {
            line_at(
                svg,
                frame.x + 34.0,
                yy + 6.0,
                frame.x + frame.w - 34.0,
                yy + 6.0,
                colors.divider,
                2.0,
            );
            yy += 18.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use morgen_core::{ItemKind, LineItem};

    struct FixedMeasure;

    impl TextMeasure for FixedMeasure {
        #[allow(clippy::cast_precision_loss)]
        fn measure(&self, text: &str, px: f32) -> f32 {
            text.chars().count() as f32 * px * 0.5
        }

        fn family(&self) -> &str {
            "Test Sans"
        }
    }

    fn sunny_weather() -> WeatherSnapshot {
        WeatherSnapshot {
            ok: true,
            weather_code: Some(0),
            items: vec![
                LineItem::new(ItemKind::Temp, "21.3°C aktuell"),
                LineItem::new(ItemKind::Range, "12.0°C / 24.5°C"),
                LineItem::new(ItemKind::Humidity, "55% Luftfeuchte"),
                LineItem::new(ItemKind::Wind, "NW 12 km/h"),
            ],
        }
    }

    fn content() -> DashboardContent {
        DashboardContent {
            greeting: "Guten Morgen!".into(),
            subtitle: "Rathenow · 10.06.2024".into(),
            weather: sunny_weather(),
            calendar: vec!["09:00 Standup".into(), "14:30 Zahnarzt".into()],
            todos: vec!["- [ ] Einkaufen".into(), "- [x] Müll raus".into()],
            birthdays: vec!["Heute: Valentina (34)".into()],
        }
    }

    #[test]
    fn all_four_sections_in_fixed_order() {
        let svg = compose_svg(&content(), &Theme::default(), &FixedMeasure);
        let wetter = svg.find(">Wetter</text>").expect("weather header");
        let termine = svg.find(">Termine</text>").expect("calendar header");
        let todos = svg.find(">To-dos</text>").expect("todos header");
        let geburtstage = svg.find(">Geburtstage (7 Tage)</text>").expect("birthdays");
        assert!(wetter < termine && termine < todos && todos < geburtstage);
    }

    #[test]
    fn header_carries_greeting_and_subtitle() {
        let svg = compose_svg(&content(), &Theme::default(), &FixedMeasure);
        assert!(svg.contains(">Guten Morgen!</text>"));
        assert!(svg.contains(">Rathenow · 10.06.2024</text>"));
    }

    #[test]
    fn weather_rows_use_two_columns() {
        let svg = compose_svg(&content(), &Theme::default(), &FixedMeasure);
        assert!(svg.contains(">Aktuell</text>"));
        assert!(svg.contains(">21.3°C</text>"));
        assert!(svg.contains(">Tief / Hoch</text>"));
        assert!(svg.contains(">12.0°C / 24.5°C</text>"));
    }

    #[test]
    fn empty_birthdays_render_placeholder_line() {
        let mut c = content();
        c.birthdays.clear();
        let svg = compose_svg(&c, &Theme::default(), &FixedMeasure);
        assert!(svg.contains(">Keine in den nächsten 7 Tagen</text>"));
    }

    #[test]
    fn icons_can_be_disabled() {
        let theme_on = Theme::default();
        let theme_off = Theme {
            icons_enabled: false,
            ..Theme::default()
        };
        let with_icons = compose_svg(&content(), &theme_on, &FixedMeasure);
        let without = compose_svg(&content(), &theme_off, &FixedMeasure);
        assert!(with_icons.len() > without.len());
        assert!(!without.contains("<g transform=\"translate("));
    }

    #[test]
    fn line_icon_mode_adds_row_glyphs() {
        let theme = Theme {
            weather_icon_mode: WeatherIconMode::Lines,
            ..Theme::default()
        };
        let mini = compose_svg(&content(), &Theme::default(), &FixedMeasure);
        let lines = compose_svg(&content(), &theme, &FixedMeasure);
        // big corner glyph plus one glyph per reading row
        assert!(lines.matches("<g transform=\"translate(").count()
            > mini.matches("<g transform=\"translate(").count());
    }

    #[test]
    fn placeholder_weather_still_renders() {
        let mut c = content();
        c.weather = WeatherSnapshot::unavailable();
        let svg = compose_svg(&c, &Theme::default(), &FixedMeasure);
        assert!(svg.contains(">Wetterdaten nicht verfügbar</text>"));
        // unknown code falls back to the cloud glyph, drawn as ellipses
        assert!(svg.contains("<ellipse"));
    }

    #[test]
    fn todo_space_absorbs_remaining_height() {
        // 1836 - (280 + 360 + 300 + 3*22) = 830, comfortably above the floor
        let h = (CONTENT_HEIGHT - (H_WEATHER + H_CALENDAR + H_BIRTHDAYS + 3.0 * GAP))
            .max(MIN_TODOS_H);
        assert!((h - 830.0).abs() < f32::EPSILON);
    }

    #[test]
    fn item_caps_limit_drawn_content() {
        let mut c = content();
        c.calendar = (0..20).map(|i| format!("Termin {i}")).collect();
        let svg = compose_svg(&c, &Theme::default(), &FixedMeasure);
        assert!(svg.contains(">Termin 0</text>"));
        assert!(!svg.contains(">Termin 11</text>"));
    }
}
