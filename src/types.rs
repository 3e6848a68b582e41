//! Domain types for morse-translator.

use std::fmt;

use serde::Serialize;

// ============================================================================
// ENUMS
// ============================================================================

/// Which way a translation goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Plain text → Morse code.
    #[default]
    ToMorse,
    /// Morse code → plain text.
    FromMorse,
}

impl Direction {
    /// Human-facing label, used for window titles and menu entries.
    pub fn label(self) -> &'static str {
        match self {
            Direction::ToMorse => "Translate to Morse Code",
            Direction::FromMorse => "Translate from Morse Code",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::ToMorse => write!(f, "text to morse"),
            Direction::FromMorse => write!(f, "morse to text"),
        }
    }
}

// ============================================================================
// STRUCTS
// ============================================================================

/// A completed translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Translation {
    pub direction: Direction,
    /// Input as handed to the codec (already stripped).
    pub input: String,
    pub output: String,
}

/// One row of the reference chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartEntry {
    pub character: char,
    pub symbol: &'static str,
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Output format for translations and the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable plain output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}
