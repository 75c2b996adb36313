//! The Monkey scanner/lexer.
//!
//! Converts a source string into tokens on demand. The cursor walks the input
//! one byte at a time; a current byte of 0 means the cursor is past the end.

use crate::char_codes::*;
use crate::options::ScannerOptions;
use monkey_token::{lookup_ident_in, Token, TokenKind};
use tracing::trace;

/// The scanner converts Monkey source text into tokens.
#[derive(Debug, Clone)]
pub struct Scanner {
    /// The source bytes being scanned.
    input: Vec<u8>,
    /// Index of the byte under examination.
    position: usize,
    /// Index of the next byte to read.
    read_position: usize,
    /// The byte under examination, `NULL` past the end.
    ch: u8,
    options: ScannerOptions,
}

impl Scanner {
    /// Create a new scanner for the given source text.
    pub fn new(input: &str) -> Self {
        Self::with_options(input, ScannerOptions::default())
    }

    /// Create a scanner with non-default options.
    pub fn with_options(input: &str, options: ScannerOptions) -> Self {
        Self::from_bytes(input.as_bytes(), options)
    }

    /// Create a scanner over raw bytes. The input need not be UTF-8.
    pub fn from_bytes(input: &[u8], options: ScannerOptions) -> Self {
        // A NUL byte is indistinguishable from the end-of-input sentinel,
        // so the input ends at the first one.
        let input = input
            .split(|&b| b == NULL)
            .next()
            .unwrap_or_default()
            .to_vec();
        let mut scanner = Self {
            input,
            position: 0,
            read_position: 0,
            ch: NULL,
            options,
        };
        scanner.read_char();
        scanner
    }

    /// Index of the byte under examination.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Index of the next byte to read.
    #[inline]
    pub fn read_position(&self) -> usize {
        self.read_position
    }

    /// The byte under examination (0 once past the end).
    #[inline]
    pub fn current_char(&self) -> u8 {
        self.ch
    }

    /// Whether the cursor has moved past the last byte of input.
    #[inline]
    pub fn is_exhausted(&self) -> bool {
        self.position >= self.input.len()
    }

    // ========================================================================
    // Cursor
    // ========================================================================

    /// Advance the cursor by one byte.
    ///
    /// Once the cursor sits past the end it stays there, so
    /// `read_position <= input.len() + 1` always holds.
    fn read_char(&mut self) {
        if self.read_position > self.input.len() {
            return;
        }
        self.ch = self.input.get(self.read_position).copied().unwrap_or(NULL);
        self.position = self.read_position;
        self.read_position += 1;
        debug_assert_eq!(self.read_position, self.position + 1);
    }

    /// Look at the next byte without advancing.
    #[inline]
    fn peek_char(&self) -> u8 {
        self.input.get(self.read_position).copied().unwrap_or(NULL)
    }

    fn skip_whitespace(&mut self) {
        while is_white_space(self.ch) {
            self.read_char();
        }
    }

    fn lexeme(&self, start: usize) -> String {
        // Identifier and number runs are ASCII, so bytes map 1:1 to chars.
        self.input[start..self.position]
            .iter()
            .map(|&b| char::from(b))
            .collect()
    }

    // ========================================================================
    // Core scanning
    // ========================================================================

    /// Scan the next token.
    ///
    /// Returns `EndOfInput` once the input is exhausted, and keeps returning
    /// it on every further call.
    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let token = match self.ch {
            ch if is_identifier_start(ch) => self.scan_identifier(),
            ch if is_digit(ch) => self.scan_number(),
            ch => {
                let token = self.scan_fixed(ch);
                self.read_char();
                token
            }
        };

        trace!(kind = %token.kind, literal = %token.literal, position = self.position, "scanned token");
        token
    }

    /// Single-byte tokens. The caller advances past the byte afterwards.
    fn scan_fixed(&mut self, ch: u8) -> Token {
        if self.options.operators {
            if let Some(token) = self.scan_operator(ch) {
                return token;
            }
        }

        let kind = match ch {
            EQUALS => TokenKind::Assign,
            SEMICOLON => TokenKind::Semicolon,
            OPEN_PAREN => TokenKind::LParen,
            CLOSE_PAREN => TokenKind::RParen,
            COMMA => TokenKind::Comma,
            PLUS => TokenKind::Plus,
            OPEN_BRACE => TokenKind::LBrace,
            CLOSE_BRACE => TokenKind::RBrace,
            NULL => return Token::end_of_input(),
            _ => TokenKind::Illegal,
        };
        Token::from_byte(kind, ch)
    }

    /// Operators that are only recognized when `ScannerOptions::operators` is set.
    fn scan_operator(&mut self, ch: u8) -> Option<Token> {
        let kind = match ch {
            EQUALS if self.peek_char() == EQUALS => {
                self.read_char();
                return Some(Token::new(TokenKind::Equal, "=="));
            }
            EXCLAMATION if self.peek_char() == EQUALS => {
                self.read_char();
                return Some(Token::new(TokenKind::NotEqual, "!="));
            }
            EXCLAMATION => TokenKind::Bang,
            MINUS => TokenKind::Minus,
            ASTERISK => TokenKind::Asterisk,
            SLASH => TokenKind::Slash,
            LESS_THAN => TokenKind::LessThan,
            GREATER_THAN => TokenKind::GreaterThan,
            _ => return None,
        };
        Some(Token::from_byte(kind, ch))
    }

    /// Scan an identifier or reserved word. Leaves the cursor on the first
    /// byte after the run.
    fn scan_identifier(&mut self) -> Token {
        let start = self.position;
        while is_identifier_part(self.ch) {
            self.read_char();
        }
        let text = self.lexeme(start);
        let kind = lookup_ident_in(self.options.keyword_set(), &text);
        Token::new(kind, text)
    }

    /// Scan a run of decimal digits. No sign, fraction or range check.
    fn scan_number(&mut self) -> Token {
        let start = self.position;
        while is_digit(self.ch) {
            self.read_char();
        }
        Token::new(TokenKind::IntegerLiteral, self.lexeme(start))
    }
}

/// Yields every token before `EndOfInput`.
impl Iterator for Scanner {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        if token.is_end_of_input() {
            None
        } else {
            Some(token)
        }
    }

    /// Every token before `EndOfInput` consumes at least one byte.
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.is_exhausted() {
            (0, Some(0))
        } else {
            (0, Some(self.input.len() - self.position))
        }
    }
}

/// Scan a whole input with default options. The result ends with `EndOfInput`.
pub fn tokenize(input: &str) -> Vec<Token> {
    tokenize_with(input, ScannerOptions::default())
}

pub fn tokenize_with(input: &str, options: ScannerOptions) -> Vec<Token> {
    let mut scanner = Scanner::with_options(input, options);
    let mut tokens = Vec::new();
    loop {
        let token = scanner.next_token();
        let done = token.is_end_of_input();
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_starts_on_first_byte() {
        let scanner = Scanner::new("let");
        assert_eq!(scanner.current_char(), b'l');
        assert_eq!(scanner.position(), 0);
        assert_eq!(scanner.read_position(), 1);
    }

    #[test]
    fn test_cursor_on_empty_input() {
        let scanner = Scanner::new("");
        assert_eq!(scanner.current_char(), NULL);
        assert_eq!(scanner.position(), 0);
        assert_eq!(scanner.read_position(), 1);
        assert!(scanner.is_exhausted());
    }

    #[test]
    fn test_read_position_stays_bounded() {
        let mut scanner = Scanner::new("a");
        for _ in 0..5 {
            scanner.next_token();
            assert_eq!(scanner.read_position(), scanner.position() + 1);
            assert!(scanner.read_position() <= 2);
        }
        assert!(scanner.is_exhausted());
    }

    #[test]
    fn test_cursor_after_identifier() {
        let mut scanner = Scanner::new("abc;");
        let token = scanner.next_token();
        assert_eq!(token.literal, "abc");
        assert_eq!(scanner.current_char(), b';');
        assert_eq!(scanner.position(), 3);
    }

    #[test]
    fn test_scan_simple_tokens() {
        let mut scanner = Scanner::new("( ) { } ; , + =");
        assert_eq!(scanner.next_token().kind, TokenKind::LParen);
        assert_eq!(scanner.next_token().kind, TokenKind::RParen);
        assert_eq!(scanner.next_token().kind, TokenKind::LBrace);
        assert_eq!(scanner.next_token().kind, TokenKind::RBrace);
        assert_eq!(scanner.next_token().kind, TokenKind::Semicolon);
        assert_eq!(scanner.next_token().kind, TokenKind::Comma);
        assert_eq!(scanner.next_token().kind, TokenKind::Plus);
        assert_eq!(scanner.next_token().kind, TokenKind::Assign);
        assert_eq!(scanner.next_token().kind, TokenKind::EndOfInput);
    }

    #[test]
    fn test_peek_does_not_advance() {
        let scanner = Scanner::new("!=");
        assert_eq!(scanner.peek_char(), b'=');
        assert_eq!(scanner.current_char(), b'!');
        assert_eq!(scanner.position(), 0);
    }

    #[test]
    fn test_size_hint_bounds_remaining_tokens() {
        let mut scanner = Scanner::new("ab+1");
        assert_eq!(scanner.size_hint(), (0, Some(4)));
        scanner.next();
        assert_eq!(scanner.size_hint(), (0, Some(2)));
        assert_eq!(scanner.by_ref().count(), 2);
        assert_eq!(scanner.size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_embedded_nul_ends_input() {
        let tokens = tokenize("a\0b");
        assert_eq!(tokens, vec![Token::new(TokenKind::Identifier, "a"), Token::end_of_input()]);
    }
}
