//! TUI color semantics and style constants.
//!
//! Color semantics:
//! - Green: successful translation output
//! - Red: codec errors
//! - Cyan: interactive elements (keybinding hints, the input cursor)
//! - Yellow: Morse symbols in the reference chart
//! - Dim: de-emphasized (placeholders, help line)
//! - Bold: important (titles, chart characters)

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Successful output — green.
pub const STYLE_OUTPUT: Style = Style::new().fg(Color::Green);

/// Codec error — red.
pub const STYLE_ERROR: Style = Style::new().fg(Color::Red);

/// Interactive element / keybinding hint — cyan.
pub const STYLE_INTERACTIVE: Style = Style::new().fg(Color::Cyan);

/// Morse symbol in the chart — yellow.
pub const STYLE_SYMBOL: Style = Style::new().fg(Color::Yellow);

/// De-emphasized placeholder text — dark gray.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Important text — bold.
pub const STYLE_IMPORTANT: Style = Style::new().add_modifier(Modifier::BOLD);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar / header.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Focused menu entry.
pub const STYLE_CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================
