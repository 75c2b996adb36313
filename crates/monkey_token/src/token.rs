//! Token record produced by the scanner.

use std::fmt;

use crate::kind::TokenKind;

/// A scanned token: its kind and the exact source text it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The lexeme. Empty for `EndOfInput`.
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    /// A token whose literal is a single source byte.
    ///
    /// Bytes are taken as Latin-1, so anything >= 0x80 becomes one char.
    pub fn from_byte(kind: TokenKind, ch: u8) -> Self {
        Self {
            kind,
            literal: char::from(ch).to_string(),
        }
    }

    /// The end-of-input token.
    pub fn end_of_input() -> Self {
        Self {
            kind: TokenKind::EndOfInput,
            literal: String::new(),
        }
    }

    #[inline]
    pub fn is_end_of_input(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }

    #[inline]
    pub fn is_illegal(&self) -> bool {
        self.kind == TokenKind::Illegal
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Type:{} Literal:{}}}", self.kind, self.literal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_record() {
        let tok = Token::new(TokenKind::Let, "let");
        assert_eq!(tok.to_string(), "{Type:LET Literal:let}");

        let tok = Token::new(TokenKind::Semicolon, ";");
        assert_eq!(tok.to_string(), "{Type:; Literal:;}");
    }

    #[test]
    fn test_end_of_input_has_empty_literal() {
        let tok = Token::end_of_input();
        assert!(tok.is_end_of_input());
        assert!(tok.literal.is_empty());
        assert_eq!(tok.to_string(), "{Type:EOF Literal:}");
    }

    #[test]
    fn test_from_high_byte() {
        let tok = Token::from_byte(TokenKind::Illegal, 0xE9);
        assert!(tok.is_illegal());
        assert_eq!(tok.literal, "\u{e9}");
    }
}
