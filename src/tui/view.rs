//! Pure rendering: map App state to ratatui widget trees.
//!
//! Each screen has a dedicated render function. The main `render()`
//! dispatches based on the current Screen variant. Widget-building
//! functions are pure (state in, widgets out); the only effect is
//! Frame::render_widget() which writes to the terminal buffer.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::codec::CodecError;
use crate::report::{chart_entries, chart_label};
use crate::types::Direction;

use super::state::{App, MENU, Screen};
use super::theme;

/// Number of columns the reference chart is split into.
const CHART_COLUMNS: usize = 3;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current screen to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    // Common layout: title bar at top, content in middle, help at bottom
    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),    // content
        Constraint::Length(1), // help
    ])
    .split(area);

    frame.render_widget(render_title(&app.screen), chunks[0]);
    frame.render_widget(render_help(&app.screen), chunks[2]);

    let content_area = chunks[1];

    match &app.screen {
        Screen::Home { cursor } => render_home(*cursor, frame, content_area),
        Screen::Translate {
            direction,
            input,
            output,
        } => render_translate(*direction, input, output.as_ref(), frame, content_area),
        Screen::Key { .. } => render_key(frame, content_area),
    }
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

/// Title bar showing the app name and screen-specific context.
fn render_title(screen: &Screen) -> Paragraph<'static> {
    let title_text = match screen {
        Screen::Home { .. } => "Morse Code Translator",
        Screen::Translate { direction, .. } => direction.label(),
        Screen::Key { .. } => "Morse Code Key",
    };

    Paragraph::new(Line::from(vec![Span::styled(title_text, theme::STYLE_TITLE)]))
}

/// Help line showing available keybindings for the current screen.
fn render_help(screen: &Screen) -> Paragraph<'static> {
    let help_text = match screen {
        Screen::Home { .. } => "[j/k] move  [Enter] open  [1-2] pick  [?] key  [q] quit",
        Screen::Translate { .. } => {
            "[^T] translate  [^K] key  [^U] clear  [Enter] newline  [Esc] back  [^C] quit"
        }
        Screen::Key { .. } => "[Esc] back  [q] quit",
    };

    Paragraph::new(Span::styled(help_text, theme::STYLE_HELP))
}

// ============================================================================
// SCREEN: HOME
// ============================================================================

fn render_home(cursor: usize, frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  Welcome to the Morse Code Translator!",
            theme::STYLE_IMPORTANT,
        )),
        Line::from(""),
    ];

    for (i, direction) in MENU.iter().enumerate() {
        let text = format!("  [{}] {}", i + 1, direction.label());
        let line = if i == cursor {
            Line::from(text).style(theme::STYLE_CURSOR)
        } else {
            Line::from(text)
        };
        lines.push(line);
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press ? for the Morse code key.",
        theme::STYLE_INTERACTIVE,
    )));

    frame.render_widget(Paragraph::new(lines), area);
}

// ============================================================================
// SCREEN: TRANSLATE
// ============================================================================

fn render_translate(
    direction: Direction,
    input: &str,
    output: Option<&Result<String, CodecError>>,
    frame: &mut Frame,
    area: Rect,
) {
    let panes = Layout::vertical([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let placeholder = match direction {
        Direction::ToMorse => "Type letters, digits and spaces...",
        Direction::FromMorse => "Type dots, dashes, spaces and / ...",
    };

    let cursor = Span::styled("_", theme::STYLE_INTERACTIVE);
    let input_text = if input.is_empty() {
        let mut text = styled_text(placeholder, theme::STYLE_DIM);
        text.push_line(Line::from(cursor));
        text
    } else {
        let mut text = styled_text(input, Style::default());
        if let Some(line) = text.lines.last_mut() {
            line.push_span(cursor);
        }
        text
    };

    let input_widget = Paragraph::new(input_text)
        .block(Block::bordered().title("Input"))
        .wrap(Wrap { trim: false });
    frame.render_widget(input_widget, panes[0]);

    let output_widget = Paragraph::new(output_text(output))
        .block(Block::bordered().title("Output"))
        .wrap(Wrap { trim: false });
    frame.render_widget(output_widget, panes[1]);
}

/// Output pane content: the translation, the error, or a hint.
fn output_text(output: Option<&Result<String, CodecError>>) -> Text<'static> {
    match output {
        None => styled_text("Press Ctrl+T to translate.", theme::STYLE_DIM),
        Some(Ok(text)) => styled_text(text, theme::STYLE_OUTPUT),
        Some(Err(err)) => styled_text(&err.to_string(), theme::STYLE_ERROR),
    }
}

fn styled_text(content: &str, style: Style) -> Text<'static> {
    Text::from(
        content
            .split('\n')
            .map(|line| Line::from(Span::styled(line.to_string(), style)))
            .collect::<Vec<_>>(),
    )
}

// ============================================================================
// SCREEN: KEY
// ============================================================================

fn render_key(frame: &mut Frame, area: Rect) {
    let entries = chart_entries();
    let per_column = entries.len().div_ceil(CHART_COLUMNS);

    let columns = Layout::horizontal([
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
        Constraint::Ratio(1, 3),
    ])
    .split(area);

    for (chunk, column) in entries.chunks(per_column).zip(columns.iter()) {
        let lines: Vec<Line> = chunk
            .iter()
            .map(|entry| {
                Line::from(vec![
                    Span::styled(format!("  {:<6}", chart_label(entry.character)), theme::STYLE_IMPORTANT),
                    Span::styled(entry.symbol, theme::STYLE_SYMBOL),
                ])
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), *column);
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn make_terminal() -> Terminal<TestBackend> {
        let backend = TestBackend::new(80, 24);
        Terminal::new(backend).unwrap()
    }

    fn rendered(app: &App) -> String {
        let mut terminal = make_terminal();
        terminal.draw(|frame| render(app, frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol().to_string())
            .collect()
    }

    fn app_on(screen: Screen) -> App {
        App {
            screen,
            should_quit: false,
        }
    }

    #[test]
    fn home_shows_welcome_and_menu() {
        let content = rendered(&App::new());
        assert!(content.contains("Welcome to the Morse Code Translator!"));
        assert!(content.contains("[1] Translate to Morse Code"));
        assert!(content.contains("[2] Translate from Morse Code"));
    }

    #[test]
    fn translate_shows_placeholder_and_hint() {
        let content = rendered(&app_on(Screen::translate(Direction::ToMorse)));
        assert!(content.contains("Input"));
        assert!(content.contains("Type letters, digits and spaces"));
        assert!(content.contains("Press Ctrl+T to translate."));
    }

    #[test]
    fn translate_shows_input_and_output() {
        let content = rendered(&app_on(Screen::Translate {
            direction: Direction::ToMorse,
            input: "sos".to_string(),
            output: Some(Ok("... --- ... ".to_string())),
        }));
        assert!(content.contains("sos_"));
        assert!(content.contains("... --- ..."));
    }

    #[test]
    fn translate_shows_error_message() {
        let content = rendered(&app_on(Screen::Translate {
            direction: Direction::FromMorse,
            input: "-.-.-.-".to_string(),
            output: Some(Err(CodecError::UnrecognizedSymbol {
                symbol: "-.-.-.-".to_string(),
            })),
        }));
        assert!(content.contains("Invalid Morse code sequence: -.-.-.-"));
        assert!(content.contains("Please separate characters with spaces."));
    }

    #[test]
    fn multi_line_input_renders_each_line() {
        let content = rendered(&app_on(Screen::Translate {
            direction: Direction::ToMorse,
            input: "first\nsecond".to_string(),
            output: None,
        }));
        assert!(content.contains("first"));
        assert!(content.contains("second_"));
    }

    #[test]
    fn key_shows_whole_chart() {
        let content = rendered(&app_on(Screen::key(Screen::default())));
        assert!(content.contains("Morse Code Key"));
        assert!(content.contains("a     .-"));
        assert!(content.contains("9     ----."));
        assert!(content.contains("space /"));
    }

    #[test]
    fn all_screens_render_without_panic() {
        let screens = vec![
            Screen::Home { cursor: 0 },
            Screen::Home { cursor: 1 },
            Screen::translate(Direction::ToMorse),
            Screen::translate(Direction::FromMorse),
            Screen::key(Screen::translate(Direction::FromMorse)),
        ];
        let mut terminal = make_terminal();
        for screen in screens {
            let app = app_on(screen);
            terminal
                .draw(|frame| render(&app, frame))
                .expect("every screen should render without panic");
        }
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut terminal = Terminal::new(TestBackend::new(10, 3)).unwrap();
        let app = app_on(Screen::key(Screen::default()));
        terminal.draw(|frame| render(&app, frame)).unwrap();
    }

    #[test]
    fn title_and_help_for_each_screen() {
        let cases = vec![
            (Screen::default(), "Morse Code Translator", "[?] key"),
            (
                Screen::translate(Direction::ToMorse),
                "Translate to Morse Code",
                "[^T] translate",
            ),
            (
                Screen::translate(Direction::FromMorse),
                "Translate from Morse Code",
                "[Enter] newline",
            ),
            (Screen::key(Screen::default()), "Morse Code Key", "[Esc] back"),
        ];
        for (screen, title, help) in cases {
            let content = rendered(&app_on(screen));
            assert!(content.starts_with(title), "title {:?} missing", title);
            assert!(content.contains(help), "help {:?} missing", help);
        }
    }
}
