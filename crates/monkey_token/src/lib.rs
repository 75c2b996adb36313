//! monkey_token: Token vocabulary for the Monkey scanner.
//!
//! Defines the closed set of token kinds, the `(kind, literal)` token record,
//! and the reserved-word tables the scanner consults for identifiers.

pub mod keywords;
pub mod kind;
mod token;

pub use keywords::{lookup_ident, lookup_ident_in, KeywordSet};
pub use kind::TokenKind;
pub use token::Token;
