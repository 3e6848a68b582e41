//! Output formatting for translations and the reference chart.
//!
//! Pure functions — (data, OutputFormat) → String.
//! No I/O, no side effects.

use crate::table::CodeTable;
use crate::types::{ChartEntry, OutputFormat, Translation};

/// Format a translation for output.
pub fn format_translation(translation: &Translation, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format!("{}\n", translation.output),
        OutputFormat::Json => to_json(translation),
    }
}

/// The reference chart, one entry per table row in chart order.
pub fn chart_entries() -> Vec<ChartEntry> {
    CodeTable::standard()
        .entries()
        .map(|(character, symbol)| ChartEntry { character, symbol })
        .collect()
}

/// Format the reference chart for output.
pub fn format_chart(format: OutputFormat) -> String {
    let entries = chart_entries();
    match format {
        OutputFormat::Human => format_chart_human(&entries),
        OutputFormat::Json => to_json(&entries),
    }
}

/// Display name for a chart character (space is spelled out).
pub fn chart_label(c: char) -> String {
    if c == ' ' {
        "space".to_string()
    } else {
        c.to_string()
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_chart_human(entries: &[ChartEntry]) -> String {
    let mut out = String::new();
    out.push_str("=== Morse Code Key ===\n");
    for entry in entries {
        out.push_str(&format!("{:<6} {}\n", chart_label(entry.character), entry.symbol));
    }
    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> String {
    // Our types only hold strings and chars, so serialization can't fail
    let mut out = serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| panic!("Failed to serialize to JSON: {}", e));
    out.push('\n');
    out
}

// ============================================================================
// TESTS
// ============================================================================
