//! TokenKind enum - every token kind the Monkey scanner can produce.

/// The kind of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum TokenKind {
    // ========================================================================
    // Special
    // ========================================================================
    Illegal = 0,
    EndOfInput = 1,

    // Identifiers and literals
    Identifier = 2,
    IntegerLiteral = 3,

    // ========================================================================
    // Operators
    // ========================================================================
    Assign = 4,
    Plus = 5,
    Minus = 6,
    Bang = 7,
    Asterisk = 8,
    Slash = 9,
    LessThan = 10,
    GreaterThan = 11,
    Equal = 12,
    NotEqual = 13,

    // ========================================================================
    // Delimiters
    // ========================================================================
    Comma = 14,
    Semicolon = 15,
    LParen = 16,
    RParen = 17,
    LBrace = 18,
    RBrace = 19,

    // ========================================================================
    // Keywords
    // ========================================================================
    Function = 20,
    Let = 21,
    True = 22,
    False = 23,
    If = 24,
    Else = 25,
    Return = 26,
}

impl TokenKind {
    pub const FIRST_OPERATOR: TokenKind = TokenKind::Assign;
    pub const LAST_OPERATOR: TokenKind = TokenKind::NotEqual;
    pub const FIRST_DELIMITER: TokenKind = TokenKind::Comma;
    pub const LAST_DELIMITER: TokenKind = TokenKind::RBrace;
    pub const FIRST_KEYWORD: TokenKind = TokenKind::Function;
    pub const LAST_KEYWORD: TokenKind = TokenKind::Return;

    /// Whether this kind is a reserved word.
    #[inline]
    pub fn is_keyword(self) -> bool {
        let v = self as u8;
        v >= Self::FIRST_KEYWORD as u8 && v <= Self::LAST_KEYWORD as u8
    }

    /// Whether this kind is an operator (including `=`).
    #[inline]
    pub fn is_operator(self) -> bool {
        let v = self as u8;
        v >= Self::FIRST_OPERATOR as u8 && v <= Self::LAST_OPERATOR as u8
    }

    #[inline]
    pub fn is_delimiter(self) -> bool {
        let v = self as u8;
        v >= Self::FIRST_DELIMITER as u8 && v <= Self::LAST_DELIMITER as u8
    }

    /// Whether this kind carries source-dependent text (identifiers and integers).
    #[inline]
    pub fn is_literal(self) -> bool {
        matches!(self, TokenKind::Identifier | TokenKind::IntegerLiteral)
    }

    /// The canonical type name used when rendering a token,
    /// e.g. `IDENT`, `INT`, `=` or `FUNCTION`.
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::EndOfInput => "EOF",
            TokenKind::Identifier => "IDENT",
            TokenKind::IntegerLiteral => "INT",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
            // Operators and delimiters are named by their own spelling.
            other => other.lexeme().unwrap_or("ILLEGAL"),
        }
    }

    /// The fixed source text of an operator or delimiter kind, or None.
    pub fn lexeme(self) -> Option<&'static str> {
        match self {
            TokenKind::Assign => Some("="),
            TokenKind::Plus => Some("+"),
            TokenKind::Minus => Some("-"),
            TokenKind::Bang => Some("!"),
            TokenKind::Asterisk => Some("*"),
            TokenKind::Slash => Some("/"),
            TokenKind::LessThan => Some("<"),
            TokenKind::GreaterThan => Some(">"),
            TokenKind::Equal => Some("=="),
            TokenKind::NotEqual => Some("!="),
            TokenKind::Comma => Some(","),
            TokenKind::Semicolon => Some(";"),
            TokenKind::LParen => Some("("),
            TokenKind::RParen => Some(")"),
            TokenKind::LBrace => Some("{"),
            TokenKind::RBrace => Some("}"),
            _ => None,
        }
    }

    /// Get the keyword text for a keyword kind, or None if not a keyword.
    pub fn keyword_text(self) -> Option<&'static str> {
        match self {
            TokenKind::Function => Some("fn"),
            TokenKind::Let => Some("let"),
            TokenKind::True => Some("true"),
            TokenKind::False => Some("false"),
            TokenKind::If => Some("if"),
            TokenKind::Else => Some("else"),
            TokenKind::Return => Some("return"),
            _ => None,
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_ranges() {
        assert!(TokenKind::Function.is_keyword());
        assert!(TokenKind::Return.is_keyword());
        assert!(!TokenKind::Identifier.is_keyword());

        assert!(TokenKind::Assign.is_operator());
        assert!(TokenKind::NotEqual.is_operator());
        assert!(!TokenKind::Comma.is_operator());

        assert!(TokenKind::Comma.is_delimiter());
        assert!(TokenKind::RBrace.is_delimiter());
        assert!(!TokenKind::Function.is_delimiter());

        assert!(TokenKind::IntegerLiteral.is_literal());
        assert!(!TokenKind::Illegal.is_literal());
    }

    #[test]
    fn test_type_names() {
        assert_eq!(TokenKind::Illegal.as_str(), "ILLEGAL");
        assert_eq!(TokenKind::EndOfInput.as_str(), "EOF");
        assert_eq!(TokenKind::Identifier.as_str(), "IDENT");
        assert_eq!(TokenKind::IntegerLiteral.as_str(), "INT");
        assert_eq!(TokenKind::Assign.as_str(), "=");
        assert_eq!(TokenKind::NotEqual.as_str(), "!=");
        assert_eq!(TokenKind::LBrace.as_str(), "{");
        assert_eq!(TokenKind::Function.as_str(), "FUNCTION");
        assert_eq!(TokenKind::Let.to_string(), "LET");
    }

    #[test]
    fn test_keyword_text_only_for_keywords() {
        assert_eq!(TokenKind::Function.keyword_text(), Some("fn"));
        assert_eq!(TokenKind::Let.keyword_text(), Some("let"));
        assert_eq!(TokenKind::Plus.keyword_text(), None);
        assert_eq!(TokenKind::Let.lexeme(), None);
    }
}
