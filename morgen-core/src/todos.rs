//! To-do file filtering.

/// Default cap on rendered tasks before the "+N weitere" suffix kicks in.
pub const DEFAULT_MAX_TASKS: usize = 6;

/// Keep only checkbox tasks from a markdown-like to-do file.
///
/// Headings (`#`), blank lines and free-text notes are dropped so that
/// section titles like "Übernommen von gestern" never render as tasks.
/// More than `max` tasks are truncated with a trailing `"… (+N weitere)"`
/// line. An empty result is handled by the gather step's placeholder.
#[must_use]
pub fn filter_tasks(raw: &str, max: usize) -> Vec<String> {
    let tasks: Vec<String> = raw
        .lines()
        .map(str::trim)
        .filter(|s| s.starts_with("- ["))
        .map(ToString::to_string)
        .collect();

    if tasks.len() > max {
        let extra = tasks.len() - max;
        let mut truncated: Vec<String> = tasks.into_iter().take(max).collect();
        truncated.push(format!("… (+{extra} weitere)"));
        truncated
    } else {
        tasks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_checkbox_lines() {
        let raw = "# Heading\n\n- [ ] task1\n- [x] task2\nnote text\n";
        assert_eq!(
            filter_tasks(raw, DEFAULT_MAX_TASKS),
            vec!["- [ ] task1", "- [x] task2"]
        );
    }

    #[test]
    fn trims_indented_tasks() {
        let raw = "  - [ ] eingerückt\n";
        assert_eq!(filter_tasks(raw, DEFAULT_MAX_TASKS), vec!["- [ ] eingerückt"]);
    }

    #[test]
    fn truncates_with_suffix_line() {
        let raw = (1..=9)
            .map(|i| format!("- [ ] t{i}"))
            .collect::<Vec<_>>()
            .join("\n");
        let tasks = filter_tasks(&raw, 6);
        assert_eq!(tasks.len(), 7);
        assert_eq!(tasks[5], "- [ ] t6");
        assert_eq!(tasks[6], "… (+3 weitere)");
    }

    #[test]
    fn exactly_max_tasks_has_no_suffix() {
        let raw = (1..=6)
            .map(|i| format!("- [ ] t{i}"))
            .collect::<Vec<_>>()
            .join("\n");
        assert_eq!(filter_tasks(&raw, 6).len(), 6);
    }

    #[test]
    fn prose_only_file_is_empty() {
        assert!(filter_tasks("## Notizen\nheute nichts\n", 6).is_empty());
    }
}
