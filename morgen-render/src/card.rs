//! Card layout engine.
//!
//! Draws one rounded-rect card with a header and wrapped content lines.
//! The vertical cursor threads explicitly through every draw call: each
//! physical line advances it, and the final position is returned so the
//! composer can stack sections without shared offsets.

use morgen_core::{wrap, SectionKind};

use crate::font::TextMeasure;
use crate::svg::{line_at, rounded_rect, shadow_rect, text_at};
use crate::theme::{Rgb, Style, Theme};

/// Header text size.
const HEADER_PX: f32 = 40.0;
/// Content text size.
const TEXT_PX: f32 = 32.0;
/// Vertical advance per physical text line.
const LINE_HEIGHT: f32 = 44.0;
/// Left/right inner padding.
const PAD_X: f32 = 34.0;
/// Content lines start this far below the card top.
const CONTENT_TOP: f32 = 86.0;
/// Drawing stops once the cursor passes `h - BOTTOM_PAD`.
const BOTTOM_PAD: f32 = 40.0;
/// Dividers are only drawn while the cursor is above `h - DIVIDER_GUARD`.
const DIVIDER_GUARD: f32 = 60.0;
/// Cursor advance after a divider.
const DIVIDER_ADVANCE: f32 = 24.0;

/// Position and size of one card on the canvas.
#[derive(Debug, Clone, Copy)]
pub struct CardFrame {
    /// Left edge.
    pub x: f32,
    /// Top edge.
    pub y: f32,
    /// Width.
    pub w: f32,
    /// Height.
    pub h: f32,
}

/// Draw a card with `header` and `items`, returning the final cursor y.
///
/// Formatting depends on the section tag: to-dos are bulleted with a
/// hanging indent, calendar rows hang off a leading clock-time token,
/// everything else wraps plainly. When the cursor would pass the bottom
/// padding boundary, drawing stops and the remaining items are silently
/// dropped - cards never overflow their frame.
#[allow(clippy::too_many_arguments)]
pub fn draw_card(
    svg: &mut String,
    frame: CardFrame,
    theme: &Theme,
    font: &dyn TextMeasure,
    section: SectionKind,
    header: &str,
    items: &[String],
    fill: Rgb,
) -> f32 {
    let colors = theme.colors();
    let radius = theme.card_radius();

    if theme.style == Style::Cards {
        shadow_rect(svg, frame.x, frame.y, frame.w, frame.h, radius, colors.shadow_alpha);
    }
    rounded_rect(svg, frame.x, frame.y, frame.w, frame.h, radius, fill);
    text_at(
        svg,
        frame.x + PAD_X,
        frame.y + 26.0,
        HEADER_PX,
        colors.text,
        font.family(),
        header,
    );

    let base_x = frame.x + PAD_X;
    let max_w = frame.w - 2.0 * PAD_X;
    let bottom = frame.y + frame.h - BOTTOM_PAD;
    let mut cursor = frame.y + CONTENT_TOP;

    for item in items {
        match section {
            SectionKind::Todos => {
                let content = clean_todo(item);
                let prefix = "• ";
                let prefix_w = font.measure(prefix, TEXT_PX);
                let lines = wrap(&content, |s| font.measure(s, TEXT_PX), max_w - prefix_w);
                for (j, wrapped) in lines.iter().enumerate() {
                    if j == 0 {
                        let first = format!("{prefix}{wrapped}");
                        text_at(svg, base_x, cursor, TEXT_PX, colors.muted, font.family(), &first);
                    } else {
                        text_at(
                            svg,
                            base_x + prefix_w,
                            cursor,
                            TEXT_PX,
                            colors.muted,
                            font.family(),
                            wrapped,
                        );
                    }
                    cursor += LINE_HEIGHT;
                    if cursor > bottom {
                        return cursor;
                    }
                }
            }
            SectionKind::Calendar if time_prefix(item).is_some() => {
                let (time, rest) = time_prefix(item).unwrap_or_default();
                let prefix = format!("{time} ");
                let prefix_w = font.measure(&prefix, TEXT_PX);
                let lines = wrap(&rest, |s| font.measure(s, TEXT_PX), max_w - prefix_w);
                for (j, wrapped) in lines.iter().enumerate() {
                    if j == 0 {
                        let first = format!("{prefix}{wrapped}");
                        text_at(svg, base_x, cursor, TEXT_PX, colors.muted, font.family(), &first);
                    } else {
                        text_at(
                            svg,
                            base_x + prefix_w,
                            cursor,
                            TEXT_PX,
                            colors.muted,
                            font.family(),
                            wrapped,
                        );
                    }
                    cursor += LINE_HEIGHT;
                    if cursor > bottom {
                        return cursor;
                    }
                }
            }
            _ => {
                for wrapped in wrap(item, |s| font.measure(s, TEXT_PX), max_w) {
                    text_at(svg, base_x, cursor, TEXT_PX, colors.muted, font.family(), &wrapped);
                    cursor += LINE_HEIGHT;
                    if cursor > bottom {
                        return cursor;
                    }
                }
            }
        }

        // dividers: list style separates every entry, cards style only to-dos
        if cursor < frame.y + frame.h - DIVIDER_GUARD
            && (theme.style == Style::List || section == SectionKind::Todos)
        {
            let line_y = cursor + 8.0;
            line_at(
                svg,
                frame.x + PAD_X,
                line_y,
                frame.x + frame.w - PAD_X,
                line_y,
                theme.colors().divider,
                2.0,
            );
            cursor += DIVIDER_ADVANCE;
        }
    }

    cursor
}

/// Strip checkbox markers from a raw to-do line.
fn clean_todo(raw: &str) -> String {
    let mut s = raw.trim();
    for prefix in ["- [ ] ", "- [x] ", "- [X] "] {
        if let Some(rest) = s.strip_prefix(prefix) {
            return rest.trim().to_string();
        }
    }
    if let Some(rest) = s.strip_prefix('-') {
        s = rest.trim();
    }
    s.to_string()
}

/// Split off a leading clock-time token (4-5 chars, exactly one colon).
///
/// `"09:00 Standup"` → `Some(("09:00", "Standup"))`; lines without such a
/// token wrap plainly.
fn time_prefix(line: &str) -> Option<(String, String)> {
    let trimmed = line.trim();
    let (first, rest) = trimmed.split_once(char::is_whitespace)?;
    let rest = rest.trim();
    if rest.is_empty() {
        return None;
    }
    if (4..=5).contains(&first.len()) && first.matches(':').count() == 1 {
        Some((first.to_string(), rest.to_string()))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed metrics: every character is half the font size wide.
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

    fn frame() -> CardFrame {
        CardFrame {
            x: 48.0,
            y: 300.0,
            w: 984.0,
            h: 360.0,
        }
    }

    #[test]
    fn clean_todo_strips_markers() {
        assert_eq!(clean_todo("- [ ] Einkaufen"), "Einkaufen");
        assert_eq!(clean_todo("- [x] Müll raus"), "Müll raus");
        assert_eq!(clean_todo("- [X] Gießen"), "Gießen");
        assert_eq!(clean_todo("- freitext"), "freitext");
        assert_eq!(clean_todo("plain"), "plain");
    }

    #[test]
    fn time_prefix_detection() {
        assert_eq!(
            time_prefix("09:00 Standup"),
            Some(("09:00".into(), "Standup".into()))
        );
        assert_eq!(
            time_prefix("9:00 Zahnarzt"),
            Some(("9:00".into(), "Zahnarzt".into()))
        );
        assert_eq!(time_prefix("Ganztägig: Feiertag"), None); // token too long
        assert_eq!(time_prefix("10:00:00 x"), None); // two colons
        assert_eq!(time_prefix("09:00"), None); // no content after token
        assert_eq!(time_prefix("Standup"), None);
    }

    #[test]
    fn plain_items_advance_by_line_height() {
        let mut svg = String::new();
        let theme = Theme::default();
        let end = draw_card(
            &mut svg,
            frame(),
            &theme,
            &FixedMeasure,
            SectionKind::Birthdays,
            "Geburtstage (7 Tage)",
            &["Heute: Valentina (34)".to_string(), "Morgen: Max".to_string()],
            theme.colors().card2,
        );
        // two single-line items, no dividers in cards style
        assert!((end - (300.0 + 86.0 + 2.0 * 44.0)).abs() < 0.01);
        assert!(svg.contains(">Heute: Valentina (34)</text>"));
    }

    #[test]
    fn todo_items_are_bulleted_with_divider() {
        let mut svg = String::new();
        let theme = Theme::default();
        let end = draw_card(
            &mut svg,
            frame(),
            &theme,
            &FixedMeasure,
            SectionKind::Todos,
            "To-dos",
            &["- [ ] Einkaufen".to_string()],
            theme.colors().card2,
        );
        assert!(svg.contains(">• Einkaufen</text>"));
        assert!(svg.contains("<line"));
        // one text line plus one divider advance
        assert!((end - (300.0 + 86.0 + 44.0 + 24.0)).abs() < 0.01);
    }

    #[test]
    fn calendar_time_token_hangs_indent() {
        let mut svg = String::new();
        let theme = Theme::default();
        // 58 chars of content force a wrap at 16px/char within 916 - prefix
        let long = "09:00 Wichtiger Termin mit sehr vielen Worten damit die Zeile umbricht ganz sicher".to_string();
        draw_card(
            &mut svg,
            frame(),
            &theme,
            &FixedMeasure,
            SectionKind::Calendar,
            "Termine",
            &[long],
            theme.colors().card,
        );
        // continuation lines start at base_x + measured "09:00 " width (6 * 16)
        let indent_x = 48.0 + PAD_X + 6.0 * 16.0;
        assert!(svg.contains(&format!("<text x=\"{indent_x}\"")));
        assert!(svg.contains(">09:00 Wichtiger"));
    }

    #[test]
    fn overflow_truncates_instead_of_spilling() {
        let mut svg = String::new();
        let theme = Theme::default();
        let small = CardFrame {
            x: 0.0,
            y: 0.0,
            w: 400.0,
            h: 200.0,
        };
        let items: Vec<String> = (0..30).map(|i| format!("Eintrag {i}")).collect();
        let end = draw_card(
            &mut svg,
            small,
            &theme,
            &FixedMeasure,
            SectionKind::Birthdays,
            "Viel",
            &items,
            theme.colors().card,
        );
        // stops right after crossing the bottom boundary (h - 40)
        assert!(end > 200.0 - BOTTOM_PAD);
        assert!(end < 200.0 + LINE_HEIGHT + 0.01);
        assert!(!svg.contains(">Eintrag 29</text>"));

        // deterministic: same inputs, same truncation point
        let mut again = String::new();
        let end2 = draw_card(
            &mut again,
            small,
            &theme,
            &FixedMeasure,
            SectionKind::Birthdays,
            "Viel",
            &items,
            theme.colors().card,
        );
        assert!((end - end2).abs() < f32::EPSILON);
        assert_eq!(svg, again);
    }

    #[test]
    fn list_style_adds_dividers_everywhere() {
        let mut svg = String::new();
        let theme = Theme {
            style: Style::List,
            ..Theme::default()
        };
        draw_card(
            &mut svg,
            frame(),
            &theme,
            &FixedMeasure,
            SectionKind::Calendar,
            "Termine",
            &["Keine Termine".to_string()],
            theme.colors().card,
        );
        assert!(svg.contains("<line"));
        // list style also skips the shadow layer
        assert!(!svg.contains("filter=\"url("));
    }
}
