//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with side effects. It wires the pure layers
//! (state, update, view) to the real terminal via crossterm and ratatui.
//! Kept minimal — all intelligence lives in the pure layers.

use std::io;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use super::state::{Action, App, Screen, Transition};
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// The translate screen takes free text, so plain characters become input
/// there and commands move to Ctrl/function keys. Returns None for keys
/// that don't map to any action.
pub fn map_key(key: KeyEvent, screen: &Screen) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Ctrl+C always quits
    if ctrl && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if screen.is_text_entry() {
        return match key.code {
            KeyCode::F(5) => Some(Action::Translate),
            KeyCode::F(1) => Some(Action::ShowKey),
            KeyCode::Char('t') if ctrl => Some(Action::Translate),
            KeyCode::Char('k') if ctrl => Some(Action::ShowKey),
            KeyCode::Char('u') if ctrl => Some(Action::ClearInput),
            KeyCode::Char(_) if ctrl => None,
            KeyCode::Char(c) => Some(Action::Insert(c)),
            KeyCode::Enter => Some(Action::Newline),
            KeyCode::Backspace => Some(Action::Backspace),
            KeyCode::Esc => Some(Action::Back),
            _ => None,
        };
    }

    match key.code {
        // Navigation
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveUp),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveDown),
        KeyCode::Enter => Some(Action::Enter),
        KeyCode::Esc => Some(Action::Back),

        // Actions
        KeyCode::Char('?') | KeyCode::F(1) => Some(Action::ShowKey),
        KeyCode::Char('q') => Some(Action::Quit),

        // Number keys for menu entries
        KeyCode::Char(c @ '1'..='2') => Some(Action::NumberKey(c as u8 - b'0')),

        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the TUI until the user quits.
pub fn run() -> io::Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new();

    let result = event_loop(&mut terminal, &mut app);

    restore_terminal()?;
    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| render(app, frame))?;

        if app.should_quit {
            return Ok(());
        }

        // Only key presses matter; ignore releases, mouse and resize
        let key = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            _ => continue,
        };

        if let Some(action) = map_key(key, &app.screen) {
            let screen = std::mem::take(&mut app.screen);
            match update(screen, &action) {
                Transition::Screen(new_screen) => app.screen = new_screen,
                Transition::Quit => app.should_quit = true,
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
