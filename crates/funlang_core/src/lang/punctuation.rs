//! Punctuation vocabulary.
//!
//! Delimiters and separators used by the lexer/parser.
//!
//! ## Examples
//! ```rust
//! use funlang_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str("{"), Some(PunctuationId::LBrace));
//! assert_eq!(punctuation::as_str(PunctuationId::Semicolon), ";");
//! ```

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    // Separators
    Comma,
    Colon,
    Semicolon,

    // Delimiters
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    PunctuationInfo {
        id: PunctuationId::Comma,
        canonical: ",",
    },
    PunctuationInfo {
        id: PunctuationId::Colon,
        canonical: ":",
    },
    PunctuationInfo {
        id: PunctuationId::Semicolon,
        canonical: ";",
    },
    PunctuationInfo {
        id: PunctuationId::LParen,
        canonical: "(",
    },
    PunctuationInfo {
        id: PunctuationId::RParen,
        canonical: ")",
    },
    PunctuationInfo {
        id: PunctuationId::LBracket,
        canonical: "[",
    },
    PunctuationInfo {
        id: PunctuationId::RBracket,
        canonical: "]",
    },
    PunctuationInfo {
        id: PunctuationId::LBrace,
        canonical: "{",
    },
    PunctuationInfo {
        id: PunctuationId::RBrace,
        canonical: "}",
    },
];

/// Return the canonical spelling for a punctuation token.
pub fn as_str(id: PunctuationId) -> &'static str {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .map(|p| p.canonical)
        .expect("INVARIANT: every PunctuationId has a registry entry")
}

/// Resolve a spelling to its punctuation id.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_punctuation_round_trips() {
        for p in PUNCTUATION {
            assert_eq!(from_str(p.canonical), Some(p.id));
            assert_eq!(as_str(p.id), p.canonical);
        }
    }
}
