//! Console results formatting with colored display.

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::play::SessionStats;

/// Format the end-of-session summary as a boxed, colored block.
pub fn format_results(title: &str, stats: &SessionStats) -> String {
    let mut output = String::new();

    let border_width = (title.len() + 4).max(28);
    let border: String = "━".repeat(border_width);
    let border_dim = border.dimmed();

    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(output, "  {}", title.bold());
    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(output, "  SCORE    : {}", stats.score);
    let _ = writeln!(output, "  MAX COMBO: {}x", stats.max_combo);
    let _ = writeln!(output, "  ACCURACY : {:.2}%", stats.accuracy());
    let _ = writeln!(output, "  PERFECT  : {}", stats.perfect_hits.yellow());
    let _ = writeln!(output, "  GREAT    : {}", stats.great_hits.green());
    let _ = writeln!(output, "  GOOD     : {}", stats.good_hits.cyan());
    let _ = writeln!(output, "  MISS     : {}", stats.missed_hits.red());
    let _ = writeln!(output, "{}", border_dim);

    output
}
