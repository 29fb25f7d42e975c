//! Greeting and the plain-text dashboard composition.

use crate::item::DashboardContent;

/// Time-appropriate greeting for a local hour (0-23).
#[must_use]
pub fn greeting_for_hour(hour: u32) -> &'static str {
    match hour {
        5..=10 => "Guten Morgen!",
        11..=13 => "Mahlzeit!",
        14..=17 => "Guten Tag!",
        18..=21 => "Guten Abend!",
        _ => "Gute Nacht!",
    }
}

/// Compose the plain-text dashboard used when image rendering or image
/// delivery fails.
///
/// The text path may use emoji; the image path draws glyphs instead
/// because some fonts render emoji as boxes.
#[must_use]
pub fn compose_text(content: &DashboardContent, name: &str) -> String {
    let mut lines: Vec<String> = Vec::new();

    let salutation = content.greeting.replace('!', "");
    lines.push(format!("{salutation}, {name}!"));
    lines.push(String::new());
    // the text path separates location and date with an en dash, the
    // image subtitle with a middle dot
    lines.push(content.subtitle.replacen(" · ", " – ", 1));
    lines.push(String::new());

    lines.push("🌡️ Wetter:".to_string());
    for item in &content.weather.items {
        lines.push(format!("- {}", item.text));
    }
    lines.push(String::new());

    if !content.birthdays.is_empty() {
        lines.push("🎂 Geburtstage (nächste 7 Tage):".to_string());
        for b in &content.birthdays {
            lines.push(format!("  {b}"));
        }
        lines.push(String::new());
    }

    lines.push("📅 Termine heute:".to_string());
    for e in &content.calendar {
        lines.push(format!("- {e}"));
    }
    lines.push(String::new());

    lines.push("📝 To-dos:".to_string());
    for t in &content.todos {
        lines.push(format!("- {t}"));
    }

    lines.join("\n")
}
