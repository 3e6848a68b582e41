//! Text ↔ Morse translation.
//!
//! Pure functions — no I/O, no logging, no shared mutable state.
//! Each call either returns the complete output or an error, never both.

use std::fmt;

use crate::table::CodeTable;
use crate::types::{Direction, Translation};

/// Characters allowed anywhere in Morse input.
const MORSE_ALPHABET: [char; 5] = ['.', '-', ' ', '/', '\n'];

// ============================================================================
// ERRORS
// ============================================================================

/// Why a translation was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Input contains a character outside the allowed set for `direction`.
    InvalidCharacter { found: char, direction: Direction },

    /// A space-delimited token is not a known Morse symbol.
    UnrecognizedSymbol { symbol: String },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::InvalidCharacter {
                found,
                direction: Direction::ToMorse,
            } => write!(
                f,
                "Invalid character {:?}. Only alphanumeric characters and spaces allowed.",
                found
            ),
            CodecError::InvalidCharacter {
                found,
                direction: Direction::FromMorse,
            } => write!(
                f,
                "Invalid character {:?}. Only dots, dashes, slashes, spaces, and newlines allowed.",
                found
            ),
            CodecError::UnrecognizedSymbol { symbol } => write!(
                f,
                "Invalid Morse code sequence: {}\nPlease separate characters with spaces.",
                symbol
            ),
        }
    }
}

impl std::error::Error for CodecError {}

// ============================================================================
// ENCODE
// ============================================================================

/// Encode text as Morse code.
///
/// Input is case-folded, then translated line by line. Each letter symbol is
/// followed by one space and each input space adds one more, so words end
/// up separated by two spaces: `"hi there"` → `".... ..  - .... . .-. . "`.
/// Empty lines stay empty.
pub fn encode(text: &str) -> Result<String, CodecError> {
    let table = CodeTable::standard();
    let folded = text.to_lowercase();

    if let Some(found) = folded.chars().find(|&c| c != '\n' && !table.contains_char(c)) {
        return Err(CodecError::InvalidCharacter {
            found,
            direction: Direction::ToMorse,
        });
    }

    let lines: Vec<String> = folded
        .split('\n')
        .map(|line| encode_line(line, table))
        .collect();

    Ok(lines.join("\n"))
}

/// Encode one pre-validated line.
fn encode_line(line: &str, table: &CodeTable) -> String {
    let mut out = String::with_capacity(line.len() * 5);
    for c in line.chars() {
        if c == ' ' {
            out.push(' ');
        } else if let Some(symbol) = table.symbol_for(c) {
            out.push_str(symbol);
            out.push(' ');
        }
    }
    out
}

// ============================================================================
// DECODE
// ============================================================================

/// Decode Morse code into lowercase text.
///
/// Only the input as a whole is stripped; lines keep their trailing spaces,
/// and each empty token between consecutive spaces becomes a space in the
/// output. `/` decodes to a space as well.
pub fn decode(morse: &str) -> Result<String, CodecError> {
    let table = CodeTable::standard();
    let morse = morse.trim();

    if let Some(found) = morse.chars().find(|c| !MORSE_ALPHABET.contains(c)) {
        return Err(CodecError::InvalidCharacter {
            found,
            direction: Direction::FromMorse,
        });
    }

    let lines = morse
        .split('\n')
        .map(|line| decode_line(line, table))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(lines.join("\n"))
}

/// Decode one pre-validated line, stopping at the first unknown token.
fn decode_line(line: &str, table: &CodeTable) -> Result<String, CodecError> {
    if line.is_empty() {
        return Ok(String::new());
    }

    let mut out = String::with_capacity(line.len() / 2 + 1);
    for token in line.split(' ') {
        if token.is_empty() {
            out.push(' ');
            continue;
        }
        match table.char_for(token) {
            Some(c) => out.push(c),
            None => {
                return Err(CodecError::UnrecognizedSymbol {
                    symbol: token.to_string(),
                });
            }
        }
    }
    Ok(out)
}

// ============================================================================
// SHELL ENTRY POINT
// ============================================================================

/// Translate user input in the given direction.
///
/// Strips the whole input first, the way a text box hands over its content,
/// then dispatches to [`encode`] or [`decode`].
pub fn translate(direction: Direction, input: &str) -> Result<Translation, CodecError> {
    let input = input.trim();
    let output = match direction {
        Direction::ToMorse => encode(input)?,
        Direction::FromMorse => decode(input)?,
    };
    Ok(Translation {
        direction,
        input: input.to_string(),
        output,
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- encode ---

    #[test]
    fn encode_sos() {
        assert_eq!(encode("sos").unwrap(), "... --- ... ");
    }

    #[test]
    fn encode_word_boundary_is_double_space() {
        assert_eq!(encode("hi there").unwrap(), ".... ..  - .... . .-. . ");
    }

    #[test]
    fn encode_is_case_insensitive() {
        for s in ["sos", "hi there", "abc 123", "z9"] {
            assert_eq!(encode(s), encode(&s.to_uppercase()));
        }
    }

    #[test]
    fn encode_digits() {
        assert_eq!(encode("2023").unwrap(), "..--- ----- ..--- ...-- ");
    }

    #[test]
    fn encode_multi_line_encodes_each_line() {
        assert_eq!(encode("sos\npan").unwrap(), "... --- ... \n.--. .- -. ");
    }

    #[test]
    fn encode_preserves_blank_lines() {
        assert_eq!(encode("e\n\nt").unwrap(), ". \n\n- ");
    }

    #[test]
    fn encode_empty_is_empty() {
        assert_eq!(encode("").unwrap(), "");
    }

    #[test]
    fn encode_rejects_punctuation() {
        assert_eq!(
            encode("hello!"),
            Err(CodecError::InvalidCharacter {
                found: '!',
                direction: Direction::ToMorse
            })
        );
    }

    #[test]
    fn encode_rejects_non_ascii_letters_and_tabs() {
        assert!(matches!(
            encode("café"),
            Err(CodecError::InvalidCharacter { found: 'é', .. })
        ));
        assert!(matches!(
            encode("a\tb"),
            Err(CodecError::InvalidCharacter { found: '\t', .. })
        ));
    }

    #[test]
    fn encode_rejects_slash() {
        // '/' is a symbol, not an input character
        assert!(encode("a/b").is_err());
    }

    // --- decode ---

    #[test]
    fn decode_sos() {
        assert_eq!(decode("... --- ...").unwrap(), "sos");
    }

    #[test]
    fn decode_empty_is_empty() {
        assert_eq!(decode("").unwrap(), "");
        assert_eq!(decode("  \n ").unwrap(), "");
    }

    #[test]
    fn decode_double_space_is_word_break() {
        assert_eq!(decode(".... ..  - .... . .-. .").unwrap(), "hi there");
    }

    #[test]
    fn decode_slash_is_space() {
        assert_eq!(decode(".... .. / .... ..").unwrap(), "hi hi");
        assert_eq!(decode(".-/-...").unwrap_err(), CodecError::UnrecognizedSymbol {
            symbol: ".-/-...".to_string()
        });
    }

    #[test]
    fn decode_unknown_symbol_fails_with_token() {
        assert_eq!(
            decode("-.-.-.-"),
            Err(CodecError::UnrecognizedSymbol {
                symbol: "-.-.-.-".to_string()
            })
        );
    }

    #[test]
    fn decode_aborts_on_later_bad_line() {
        // First line is fine, second is not: no partial output
        assert_eq!(
            decode("... --- ...\n........"),
            Err(CodecError::UnrecognizedSymbol {
                symbol: "........".to_string()
            })
        );
    }

    #[test]
    fn decode_rejects_letters() {
        assert_eq!(
            decode("... x ..."),
            Err(CodecError::InvalidCharacter {
                found: 'x',
                direction: Direction::FromMorse
            })
        );
    }

    #[test]
    fn decode_validates_before_translating() {
        // Unknown symbol comes first, but the invalid character wins
        assert!(matches!(
            decode("........ a"),
            Err(CodecError::InvalidCharacter { found: 'a', .. })
        ));
    }

    #[test]
    fn decode_preserves_blank_lines() {
        assert_eq!(decode(".\n\n-").unwrap(), "e\n\nt");
    }

    #[test]
    fn decode_strips_only_outer_whitespace() {
        assert_eq!(decode("  ... --- ...  ").unwrap(), "sos");
        assert_eq!(decode("... \n-").unwrap(), "s \nt");
    }

    // --- round trip ---

    #[test]
    fn round_trip_lowercase_text() {
        for text in [
            "sos",
            "hello world",
            "the quick brown fox jumps over the lazy dog",
            "0123456789",
            "agent 007 reporting",
            "a",
        ] {
            assert_eq!(decode(&encode(text).unwrap()).unwrap(), text);
        }
    }

    #[test]
    fn round_trip_keeps_runs_of_interior_spaces() {
        assert_eq!(decode(&encode("a  b").unwrap()).unwrap(), "a  b");
    }

    #[test]
    fn round_trip_multi_line_keeps_inner_trailing_spaces() {
        // Only the whole input is stripped, so inner lines keep their delimiter space
        assert_eq!(decode(&encode("sos\npan").unwrap()).unwrap(), "sos \npan");
    }

    // --- translate ---

    #[test]
    fn translate_strips_input() {
        let t = translate(Direction::ToMorse, "  SOS \n").unwrap();
        assert_eq!(t.input, "SOS");
        assert_eq!(t.output, "... --- ... ");
        assert_eq!(t.direction, Direction::ToMorse);
    }

    #[test]
    fn translate_from_morse() {
        let t = translate(Direction::FromMorse, "\n-- --- .-. ... .\n").unwrap();
        assert_eq!(t.output, "morse");
    }

    #[test]
    fn translate_propagates_errors() {
        assert!(matches!(
            translate(Direction::FromMorse, "hello"),
            Err(CodecError::InvalidCharacter { found: 'h', .. })
        ));
    }

    // --- errors ---

    #[test]
    fn error_messages_are_human_readable() {
        let err = encode("hi!").unwrap_err().to_string();
        assert!(err.contains("alphanumeric"));

        let err = decode("abc").unwrap_err().to_string();
        assert!(err.contains("dots, dashes, slashes"));

        let err = decode(".-.-.-.-").unwrap_err().to_string();
        assert!(err.contains(".-.-.-.-"));
        assert!(err.contains("separate characters with spaces"));
    }
}
