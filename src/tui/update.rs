//! Pure state transitions: (Screen, Action) → Transition.
//!
//! This is the core logic of the TUI. Fully testable without a terminal.
//! Each screen defines which actions it accepts. Unhandled actions
//! return the current screen unchanged (no-op).

use crate::codec::{CodecError, translate};
use crate::types::Direction;

use super::state::{Action, MENU, Screen, Transition};

/// Pure state transition function.
///
/// Translation happens here too: the codec is pure, so running it is
/// just another state change.
pub fn update(screen: Screen, action: &Action) -> Transition {
    match screen {
        Screen::Home { cursor } => update_home(cursor, action),
        Screen::Translate {
            direction,
            input,
            output,
        } => update_translate(direction, input, output, action),
        Screen::Key { previous } => update_key(previous, action),
    }
}

// ============================================================================
// PER-SCREEN HANDLERS
// ============================================================================

/// Home: move through the menu, open a translator or the chart.
fn update_home(cursor: usize, action: &Action) -> Transition {
    match action {
        Action::MoveUp => Transition::Screen(Screen::Home {
            cursor: cursor.saturating_sub(1),
        }),
        Action::MoveDown => Transition::Screen(Screen::Home {
            cursor: (cursor + 1).min(MENU.len() - 1),
        }),
        Action::Enter => match MENU.get(cursor) {
            Some(&direction) => Transition::Screen(Screen::translate(direction)),
            None => Transition::Screen(Screen::Home { cursor: 0 }),
        },
        Action::NumberKey(n) => match MENU.get(usize::from(*n).wrapping_sub(1)) {
            Some(&direction) => Transition::Screen(Screen::translate(direction)),
            None => Transition::Screen(Screen::Home { cursor }),
        },
        Action::ShowKey => Transition::Screen(Screen::key(Screen::Home { cursor })),
        Action::Quit => Transition::Quit,
        _ => Transition::Screen(Screen::Home { cursor }),
    }
}

/// Translate: edit the input, run the codec, open the chart, go home.
fn update_translate(
    direction: Direction,
    mut input: String,
    mut output: Option<Result<String, CodecError>>,
    action: &Action,
) -> Transition {
    match action {
        Action::Insert(c) => input.push(*c),
        Action::Newline => input.push('\n'),
        Action::Backspace => {
            input.pop();
        }
        Action::ClearInput => {
            input.clear();
            output = None;
        }
        Action::Translate => {
            output = Some(translate(direction, &input).map(|t| t.output));
        }
        Action::ShowKey => {
            return Transition::Screen(Screen::key(Screen::Translate {
                direction,
                input,
                output,
            }));
        }
        Action::Back => {
            let cursor = MENU.iter().position(|&d| d == direction).unwrap_or(0);
            return Transition::Screen(Screen::Home { cursor });
        }
        Action::Quit => return Transition::Quit,
        _ => {}
    }

    Transition::Screen(Screen::Translate {
        direction,
        input,
        output,
    })
}

/// Key: any dismissal returns to wherever the chart was opened from.
fn update_key(previous: Box<Screen>, action: &Action) -> Transition {
    match action {
        Action::Back | Action::Enter | Action::ShowKey => Transition::Screen(*previous),
        Action::Quit => Transition::Quit,
        _ => Transition::Screen(Screen::Key { previous }),
    }
}

// ============================================================================
// TESTS
// ============================================================================
