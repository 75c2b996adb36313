//! Byte constants and classifiers used by the scanner.
//! The scanner works on single bytes; nothing here is Unicode-aware.

#![allow(dead_code)]

/// Sentinel for "past end of input".
pub const NULL: u8 = 0;

// Whitespace
pub const SPACE: u8 = b' ';
pub const TAB: u8 = b'\t';
pub const LINE_FEED: u8 = b'\n';
pub const CARRIAGE_RETURN: u8 = b'\r';

// Punctuation
pub const EXCLAMATION: u8 = b'!';
pub const OPEN_PAREN: u8 = b'(';
pub const CLOSE_PAREN: u8 = b')';
pub const ASTERISK: u8 = b'*';
pub const PLUS: u8 = b'+';
pub const COMMA: u8 = b',';
pub const MINUS: u8 = b'-';
pub const SLASH: u8 = b'/';
pub const SEMICOLON: u8 = b';';
pub const LESS_THAN: u8 = b'<';
pub const EQUALS: u8 = b'=';
pub const GREATER_THAN: u8 = b'>';
pub const UNDERSCORE: u8 = b'_';
pub const OPEN_BRACE: u8 = b'{';
pub const CLOSE_BRACE: u8 = b'}';

/// Whitespace skipped between tokens: space, tab, LF and CR only.
#[inline]
pub fn is_white_space(ch: u8) -> bool {
    matches!(ch, SPACE | TAB | LINE_FEED | CARRIAGE_RETURN)
}

/// Check if a byte can start an identifier.
#[inline]
pub fn is_identifier_start(ch: u8) -> bool {
    ch == UNDERSCORE || ch.is_ascii_alphabetic()
}

/// Check if a byte can continue an identifier.
#[inline]
pub fn is_identifier_part(ch: u8) -> bool {
    is_identifier_start(ch) || is_digit(ch)
}

/// Check if a byte is a decimal digit.
#[inline]
pub fn is_digit(ch: u8) -> bool {
    ch.is_ascii_digit()
}
