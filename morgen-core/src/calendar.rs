//! Calendar event filtering.

/// Filter the stdout of the calendar tool into event lines.
///
/// The tool prints one `"Today, ..."` header line before the events; that
/// header and any blank lines are dropped. Order is preserved. An empty
/// result is legitimate here - the gather step substitutes the placeholder.
#[must_use]
pub fn filter_events(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter(|line| !line.starts_with("Today,") && !line.trim().is_empty())
        .map(ToString::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_header_and_blanks() {
        let out = "Today, 10.06.2024\n09:00 Standup\n\n14:30 Zahnarzt\n   \n";
        assert_eq!(filter_events(out), vec!["09:00 Standup", "14:30 Zahnarzt"]);
    }

    #[test]
    fn empty_output_yields_empty_list() {
        assert!(filter_events("").is_empty());
        assert!(filter_events("Today, 10.06.2024\n").is_empty());
    }

    #[test]
    fn keeps_untimed_events() {
        let out = "Today, 10.06.2024\nGanztägig: Feiertag\n";
        assert_eq!(filter_events(out), vec!["Ganztägig: Feiertag"]);
    }
}
