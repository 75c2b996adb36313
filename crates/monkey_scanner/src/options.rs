//! Scanner options.

use monkey_token::KeywordSet;
use serde::{Deserialize, Serialize};

/// Switches for the parts of the vocabulary that are declared but not
/// recognized by default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct ScannerOptions {
    /// Recognize `-`, `!`, `*`, `/`, `<`, `>`, `==` and `!=`.
    /// When false these bytes scan as `Illegal`.
    pub operators: bool,
    /// Recognize `true`, `false`, `if`, `else` and `return` as keywords.
    pub extended_keywords: bool,
}

impl ScannerOptions {
    /// Options with every extension turned on.
    pub fn extended() -> Self {
        Self {
            operators: true,
            extended_keywords: true,
        }
    }

    pub fn keyword_set(&self) -> KeywordSet {
        if self.extended_keywords {
            KeywordSet::Extended
        } else {
            KeywordSet::Core
        }
    }
}
