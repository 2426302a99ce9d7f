//! Operator vocabulary.
//!
//! This module defines the canonical operator set (symbol operators like `+`, word operators like `AND`, and the
//! chain pipes `=>` / `<=>`) along with precedence and the Java spelling used by the emitter.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**; `and` / `or` are accepted as explicit aliases.
//! - Higher `precedence` binds tighter. The chain pipes bind loosest of all expression operators.
//!
//! ## Examples
//! ```rust
//! use funlang_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("AND"), Some(OperatorId::And));
//! assert_eq!(operators::info_for(OperatorId::And).java, Some("&&"));
//! assert!(operators::info_for(OperatorId::Star).precedence > operators::info_for(OperatorId::Plus).precedence);
//! ```

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    // Comparison
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Logical (word operators)
    And,
    Or,

    // Assignment
    Eq,

    // Chain pipes
    Pipe,
    BiPipe,
}

/// Metadata for an operator.
///
/// ## Notes
/// - `spellings[0]` is the canonical spelling; the rest are accepted aliases.
/// - `java` is `None` for operators that never reach the emitter as a binary operator (assignment, pipes).
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spellings: &'static [&'static str],
    pub precedence: u8,
    pub is_word: bool,
    pub java: Option<&'static str>,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Arithmetic
    op(OperatorId::Plus, &["+"], 50, Some("+")),
    op(OperatorId::Minus, &["-"], 50, Some("-")),
    op(OperatorId::Star, &["*"], 60, Some("*")),
    op(OperatorId::Slash, &["/"], 60, Some("/")),
    op(OperatorId::Percent, &["%"], 60, Some("%")),
    // Comparison
    op(OperatorId::EqEq, &["=="], 40, Some("==")),
    op(OperatorId::NotEq, &["!="], 40, Some("!=")),
    op(OperatorId::Lt, &["<"], 40, Some("<")),
    op(OperatorId::LtEq, &["<="], 40, Some("<=")),
    op(OperatorId::Gt, &[">"], 40, Some(">")),
    op(OperatorId::GtEq, &[">="], 40, Some(">=")),
    // Logical
    word(OperatorId::And, &["AND", "and"], 30, "&&"),
    word(OperatorId::Or, &["OR", "or"], 20, "||"),
    // Assignment
    op(OperatorId::Eq, &["="], 0, None),
    // Chain pipes
    op(OperatorId::Pipe, &["=>"], 10, None),
    op(OperatorId::BiPipe, &["<=>"], 10, None),
];

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS
        .iter()
        .find(|o| o.id == id)
        .expect("INVARIANT: every OperatorId has a registry entry")
}

/// Return the canonical spelling for an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spellings[0]
}

/// Resolve an operator spelling (symbol or word) to its identifier.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS
        .iter()
        .find(|o| {
            let spellings: &[&str] = o.spellings;
            spellings.contains(&spelling)
        })
        .map(|o| o.id)
}

/// Resolve an identifier-shaped spelling to a word operator (`AND`, `or`, ...).
///
/// Symbol operators never match, so the lexer can call this on every scanned identifier.
pub fn word_operator(spelling: &str) -> Option<OperatorId> {
    OPERATORS
        .iter()
        .find(|o| {
            let spellings: &[&str] = o.spellings;
            o.is_word && spellings.contains(&spelling)
        })
        .map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn op(
    id: OperatorId,
    spellings: &'static [&'static str],
    precedence: u8,
    java: Option<&'static str>,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spellings,
        precedence,
        is_word: false,
        java,
    }
}

const fn word(
    id: OperatorId,
    spellings: &'static [&'static str],
    precedence: u8,
    java: &'static str,
) -> OperatorInfo {
    OperatorInfo {
        id,
        spellings,
        precedence,
        is_word: true,
        java: Some(java),
    }
}
