//! Plain-text result rendering
//!
//! Turns a [`SortResult`] into the text block the tool displays after a run:
//! the selections, the timing, the summary statistics, the explanation of
//! the chosen algorithm, and the full sorted sequence.  Rendering is
//! presentation only; nothing here is part of the stable library API.

use crate::registry::Algorithm;
use crate::runner::engine::SortResult;

/// Render the result block for one run.
pub fn render(result: &SortResult) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("Sorted using: {}", result.algorithm.name()));
    lines.push(format!("Sort Order: {}", result.order.name()));
    lines.push(format!(
        "Time Taken: {:.6} seconds",
        result.elapsed.as_secs_f64()
    ));
    lines.push(String::new());

    match &result.stats {
        Some(stats) => {
            lines.push(format!("Min Number: {}", stats.min));
            lines.push(format!("Max Number: {}", stats.max));
            lines.push(format!("Average: {:.2}", stats.mean));
            lines.push(format!("Count: {}", stats.count));
        }
        None => {
            lines.push("The file contained no numbers; statistics are unavailable.".to_string());
        }
    }
    lines.push(String::new());

    lines.push("Explanation of the Sort:".to_string());
    lines.push(result.algorithm.explanation().to_string());
    lines.push(String::new());

    lines.push("Sorted Numbers:".to_string());
    for number in &result.numbers {
        lines.push(number.to_string());
    }

    lines.join("\n")
}

/// Render the algorithm menu, one explanation per entry.
pub fn render_menu() -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("Available sorting algorithms:".to_string());
    for algorithm in Algorithm::ALL {
        lines.push(String::new());
        lines.push(algorithm.name().to_string());
        lines.push(format!("  {}", algorithm.explanation()));
    }

    lines.join("\n")
}
