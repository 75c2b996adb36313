//! monkey_scanner: Lexer for Monkey source code.
//!
//! Produces `(kind, literal)` tokens from source text one call at a time.
//! Scanning never fails: bytes that fit no token kind come back as
//! `Illegal` tokens and scanning carries on after them.

mod char_codes;
mod options;
mod scanner;

pub use monkey_token::{Token, TokenKind};
pub use options::ScannerOptions;
pub use scanner::{tokenize, tokenize_with, Scanner};
