//! morse-translator: Translate text to and from Morse code.

pub mod codec;
pub mod input;
pub mod logging;
pub mod report;
pub mod table;
pub mod tui;
pub mod types;

pub use codec::{CodecError, decode, encode, translate};
