//! Greedy word-wrap against a measured text width.

/// Wrap `text` into lines no wider than `max_width` according to `measure`.
///
/// Words are split on whitespace and appended greedily: a word joins the
/// current line when the measured width of `line + " " + word` stays within
/// `max_width`, or when the line is still empty. A single overlong word is
/// therefore never split; it sits alone on its own line. No hyphenation.
#[must_use]
pub fn wrap<F>(text: &str, measure: F, max_width: f32) -> Vec<String>
where
    F: Fn(&str) -> f32,
{
    let mut lines = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for word in text.split_whitespace() {
        let trial = if current.is_empty() {
            word.to_string()
        } else {
            format!("{} {word}", current.join(" "))
        };
        if measure(&trial) <= max_width || current.is_empty() {
            current.push(word);
        } else {
            lines.push(current.join(" "));
            current = vec![word];
        }
    }
    if !current.is_empty() {
        lines.push(current.join(" "));
    }
    lines
}
