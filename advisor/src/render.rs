//! Final plan rendering.

use colored::Colorize;
use serde_json::Value;

/// Prints the parsed plan as an aligned two-column listing. Nested objects
/// and arrays are compacted to single-line JSON rather than expanded.
pub fn print_plan(plan: &Value) {
    match plan {
        Value::Object(map) => {
            let width = map.keys().map(|k| k.len()).max().unwrap_or(0);
            println!("\n{}", "Trade plan".bold());
            for (key, value) in map {
                // Pad before coloring so the ANSI codes don't count
                // against the column width.
                let padded = format!("{key:<width$}");
                println!("  {}  {}", padded.cyan(), render_value(value));
            }
        }
        other => println!("{other}"),
    }
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
