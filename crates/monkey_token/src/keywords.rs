//! Reserved-word tables.
//!
//! Both tables are built once on first use and never mutated afterwards, so
//! they can be read from any thread without locking.

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

use crate::kind::TokenKind;

/// Which reserved words the scanner recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeywordSet {
    /// `fn` and `let` only.
    #[default]
    Core,
    /// `Core` plus `true`, `false`, `if`, `else` and `return`.
    Extended,
}

const CORE_KEYWORDS: &[TokenKind] = &[TokenKind::Function, TokenKind::Let];

const EXTENDED_KEYWORDS: &[TokenKind] = &[
    TokenKind::True,
    TokenKind::False,
    TokenKind::If,
    TokenKind::Else,
    TokenKind::Return,
];

fn build_table<'a>(kinds: impl Iterator<Item = &'a TokenKind>) -> FxHashMap<&'static str, TokenKind> {
    kinds
        .filter_map(|&kind| kind.keyword_text().map(|text| (text, kind)))
        .collect()
}

lazy_static! {
    static ref CORE: FxHashMap<&'static str, TokenKind> = build_table(CORE_KEYWORDS.iter());
    static ref EXTENDED: FxHashMap<&'static str, TokenKind> =
        build_table(CORE_KEYWORDS.iter().chain(EXTENDED_KEYWORDS));
}

impl KeywordSet {
    fn table(self) -> &'static FxHashMap<&'static str, TokenKind> {
        match self {
            KeywordSet::Core => &*CORE,
            KeywordSet::Extended => &*EXTENDED,
        }
    }

    /// Look up a reserved word, returning None for ordinary identifiers.
    pub fn get(self, text: &str) -> Option<TokenKind> {
        self.table().get(text).copied()
    }
}

/// Classify an identifier lexeme against the core table:
/// the keyword kind if reserved, `Identifier` otherwise.
pub fn lookup_ident(text: &str) -> TokenKind {
    lookup_ident_in(KeywordSet::Core, text)
}

pub fn lookup_ident_in(set: KeywordSet, text: &str) -> TokenKind {
    set.get(text).unwrap_or(TokenKind::Identifier)
}
