//! The Morse code table.
//!
//! Pure data — built once, read-only afterwards, safe to share across threads.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Symbol used for the space character (word separator).
pub const WORD_SEPARATOR: &str = "/";

/// Every supported character with its Morse symbol, in chart order.
static ENTRIES: [(char, &str); 37] = [
    ('a', ".-"),
    ('b', "-..."),
    ('c', "-.-."),
    ('d', "-.."),
    ('e', "."),
    ('f', "..-."),
    ('g', "--."),
    ('h', "...."),
    ('i', ".."),
    ('j', ".---"),
    ('k', "-.-"),
    ('l', ".-.."),
    ('m', "--"),
    ('n', "-."),
    ('o', "---"),
    ('p', ".--."),
    ('q', "--.-"),
    ('r', ".-."),
    ('s', "..."),
    ('t', "-"),
    ('u', "..-"),
    ('v', "...-"),
    ('w', ".--"),
    ('x', "-..-"),
    ('y', "-.--"),
    ('z', "--.."),
    ('0', "-----"),
    ('1', ".----"),
    ('2', "..---"),
    ('3', "...--"),
    ('4', "....-"),
    ('5', "....."),
    ('6', "-...."),
    ('7', "--..."),
    ('8', "---.."),
    ('9', "----."),
    (' ', WORD_SEPARATOR),
];

static STANDARD: LazyLock<CodeTable> = LazyLock::new(|| CodeTable::from_entries(&ENTRIES));

/// Bidirectional character ↔ symbol mapping.
///
/// Forward lookups go through `forward`, reverse lookups through an inverse
/// index built alongside it. Both are exact-match only.
#[derive(Debug)]
pub struct CodeTable {
    entries: &'static [(char, &'static str)],
    forward: HashMap<char, &'static str>,
    inverse: HashMap<&'static str, char>,
}

impl CodeTable {
    /// The international Morse table: a–z, 0–9 and space.
    pub fn standard() -> &'static CodeTable {
        &STANDARD
    }

    fn from_entries(entries: &'static [(char, &'static str)]) -> Self {
        let forward = entries.iter().copied().collect();
        let inverse = entries.iter().map(|&(c, symbol)| (symbol, c)).collect();
        CodeTable {
            entries,
            forward,
            inverse,
        }
    }

    /// Morse symbol for a lowercase letter, digit or space.
    pub fn symbol_for(&self, c: char) -> Option<&'static str> {
        self.forward.get(&c).copied()
    }

    /// Character for an exact Morse symbol. `None` if the symbol is unknown.
    pub fn char_for(&self, symbol: &str) -> Option<char> {
        self.inverse.get(symbol).copied()
    }

    pub fn contains_char(&self, c: char) -> bool {
        self.forward.contains_key(&c)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All (character, symbol) pairs in chart order.
    pub fn entries(&self) -> impl Iterator<Item = (char, &'static str)> + '_ {
        self.entries.iter().copied()
    }
}

// ============================================================================
// TESTS
// ============================================================================
