//! Define the reserved keyword vocabulary for FunLang.
//!
//! This module is the single source of truth for reserved words: a stable identifier ([`KeywordId`]) plus a const
//! metadata table ([`KEYWORDS`]) that records canonical spellings, aliases and categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**, except where explicit aliases are defined (`TRUE`, `FALSE`).
//! - The word operators `AND` / `OR` live in [`crate::lang::operators`], not here.
//! - Builtin type names (`integer`, `text`, ...) are not reserved; see [`crate::lang::types`].
//!
//! ## Examples
//! ```rust
//! use funlang_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("func"), Some(KeywordId::Func));
//! assert_eq!(keywords::from_str("TRUE"), Some(KeywordId::True)); // alias
//! assert_eq!(keywords::as_str(KeywordId::Func), "func");
//! ```

use super::registry::{LangItemInfo, Stability};

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Bindings
    Let,
    Var,

    // Statements / control flow
    Print,
    If,
    Elif,
    Else,
    While,
    For,
    To,
    Step,
    Return,

    // Definitions
    Func,

    // Literals
    True,
    False,
}

/// High-level grouping for documentation and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    Binding,
    ControlFlow,
    Definition,
    Literal,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub item: LangItemInfo<KeywordId>,
    pub category: KeywordCategory,
}

/// Registry of all keywords.
pub const KEYWORDS: &[KeywordInfo] = &[
    info(KeywordId::Let, "let", &[], KeywordCategory::Binding, "Declare a variable."),
    info(
        KeywordId::Var,
        "var",
        &[],
        KeywordCategory::Binding,
        "Declare a variable (synonym of `let`).",
    ),
    info(
        KeywordId::Print,
        "print",
        &[],
        KeywordCategory::ControlFlow,
        "Write a value to standard output.",
    ),
    info(KeywordId::If, "if", &[], KeywordCategory::ControlFlow, "Conditional branch."),
    info(
        KeywordId::Elif,
        "elif",
        &[],
        KeywordCategory::ControlFlow,
        "Additional conditional branch.",
    ),
    info(KeywordId::Else, "else", &[], KeywordCategory::ControlFlow, "Fallback branch."),
    info(KeywordId::While, "while", &[], KeywordCategory::ControlFlow, "Conditional loop."),
    info(KeywordId::For, "for", &[], KeywordCategory::ControlFlow, "Counted loop."),
    info(
        KeywordId::To,
        "to",
        &[],
        KeywordCategory::ControlFlow,
        "Inclusive upper bound of a counted loop.",
    ),
    info(
        KeywordId::Step,
        "step",
        &[],
        KeywordCategory::ControlFlow,
        "Increment of a counted loop.",
    ),
    info(
        KeywordId::Return,
        "return",
        &[],
        KeywordCategory::ControlFlow,
        "Return a value from a function.",
    ),
    info(KeywordId::Func, "func", &[], KeywordCategory::Definition, "Define a function."),
    info(KeywordId::True, "true", &["TRUE"], KeywordCategory::Literal, "Boolean true."),
    info(KeywordId::False, "false", &["FALSE"], KeywordCategory::Literal, "Boolean false."),
];

/// Return the full metadata entry for a keyword.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS
        .iter()
        .find(|k| k.item.id == id)
        .expect("INVARIANT: every KeywordId has a registry entry")
}

/// Return the canonical spelling for a keyword.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).item.canonical
}

/// Resolve a spelling (canonical or alias) to its keyword id.
pub fn from_str(s: &str) -> Option<KeywordId> {
    if let Some(k) = KEYWORDS.iter().find(|k| k.item.canonical == s) {
        return Some(k.item.id);
    }
    KEYWORDS
        .iter()
        .find(|k| {
            let aliases: &[&str] = k.item.aliases;
            aliases.contains(&s)
        })
        .map(|k| k.item.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(
    id: KeywordId,
    canonical: &'static str,
    aliases: &'static [&'static str],
    category: KeywordCategory,
    description: &'static str,
) -> KeywordInfo {
    KeywordInfo {
        item: LangItemInfo {
            id,
            canonical,
            aliases,
            description,
            stability: Stability::Stable,
        },
        category,
    }
}
