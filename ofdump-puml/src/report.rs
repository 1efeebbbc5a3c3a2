use colored::Colorize;
use flowdump_core::{format_summary, ParseStats, TableRegistry};

/// Render the registry summary for terminal output.
pub fn render_summary(registry: &TableRegistry) -> String {
    format_summary(registry).cyan().to_string()
}

/// Render skipped-line details, or nothing when every line was used.
pub fn render_skipped(stats: &ParseStats) -> Option<String> {
    if stats.skipped.is_empty() {
        return None;
    }

    let lines: Vec<String> = stats.skipped.iter().map(ToString::to_string).collect();
    Some(
        format!(
            "skipped {} line(s) without table/priority fields: {}",
            stats.skipped.len(),
            lines.join(",")
        )
        .yellow()
        .to_string(),
    )
}
