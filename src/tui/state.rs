//! TUI state algebra: pure types, zero effects.
//!
//! These types define the entire TUI state space. The transition function
//! and the rendering layer both program against them.
//!
//! Screen variants carry their own transient state (menu cursor, the text
//! being edited, the last translation result). There is no shared data
//! beyond the code table, which is a read-only static.

use crate::codec::CodecError;
use crate::types::Direction;

/// Entries of the home menu, in display order.
pub const MENU: [Direction; 2] = [Direction::ToMorse, Direction::FromMorse];

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
#[derive(Debug)]
pub struct App {
    /// Current screen — carries per-screen navigation and editing state.
    pub screen: Screen,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

// ============================================================================
// SCREENS
// ============================================================================

/// The current TUI screen.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// Landing menu: pick a translation direction.
    Home {
        /// Index into [`MENU`].
        cursor: usize,
    },

    /// Input and output panes for one direction.
    Translate {
        direction: Direction,
        /// Text being edited.
        input: String,
        /// Result of the last translation, if any.
        output: Option<Result<String, CodecError>>,
    },

    /// Reference chart. Going back restores the screen it was opened from.
    Key { previous: Box<Screen> },
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Home { cursor: 0 }
    }
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Move menu cursor up.
    MoveUp,
    /// Move menu cursor down.
    MoveDown,
    /// Activate the focused menu entry.
    Enter,
    /// Navigate back to the previous screen.
    Back,
    /// Pick a menu entry by number (1-based).
    NumberKey(u8),
    /// Type a character into the input pane.
    Insert(char),
    /// Start a new input line.
    Newline,
    /// Delete the last input character.
    Backspace,
    /// Clear input and output.
    ClearInput,
    /// Run the codec on the current input.
    Translate,
    /// Open the reference chart.
    ShowKey,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Render this screen (may be the same or a different screen).
    Screen(Screen),
    /// Quit the application.
    Quit,
}

// ============================================================================
// CONSTRUCTORS
// ============================================================================

impl App {
    /// Create an App on the home menu.
    pub fn new() -> Self {
        App {
            screen: Screen::default(),
            should_quit: false,
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen {
    /// Empty translate screen for a direction.
    pub fn translate(direction: Direction) -> Self {
        Screen::Translate {
            direction,
            input: String::new(),
            output: None,
        }
    }

    /// Chart screen that returns to `previous`.
    pub fn key(previous: Screen) -> Self {
        Screen::Key {
            previous: Box::new(previous),
        }
    }

    /// True while the user is typing into an input pane.
    pub fn is_text_entry(&self) -> bool {
        matches!(self, Screen::Translate { .. })
    }
}

// ============================================================================
// TESTS
// ============================================================================
