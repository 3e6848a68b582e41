//! Where command-line input comes from.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

/// Source of the text to translate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Text given directly on the command line.
    Inline(String),
    /// Contents of a file.
    File(PathBuf),
    /// Everything on standard input until EOF.
    Stdin,
}

impl InputSource {
    /// Pick a source from CLI arguments: positional words win, then `--input`,
    /// else stdin. Positional words are joined with single spaces.
    pub fn from_args(words: Vec<String>, file: Option<PathBuf>) -> Self {
        if !words.is_empty() {
            InputSource::Inline(words.join(" "))
        } else if let Some(path) = file {
            InputSource::File(path)
        } else {
            InputSource::Stdin
        }
    }
}

/// Read the full input text. CRLF line endings from files and stdin are
/// turned into plain `\n`.
pub fn read_input(source: &InputSource) -> io::Result<String> {
    match source {
        InputSource::Inline(text) => Ok(text.clone()),
        InputSource::File(path) => fs::read_to_string(path).map(normalize_newlines),
        InputSource::Stdin => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(normalize_newlines(buf))
        }
    }
}

fn normalize_newlines(text: String) -> String {
    if text.contains("\r\n") {
        text.replace("\r\n", "\n")
    } else {
        text
    }
}
