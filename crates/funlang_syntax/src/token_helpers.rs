//! Small helper APIs for working with `Token` / `TokenKind`.
//!
//! These helpers reduce repetitive `matches!(...)` at call sites and make it easy to work with ID-based tokens.

use crate::lexer::TokenKind;
use funlang_core::lang::keywords::KeywordId;
use funlang_core::lang::operators::OperatorId;
use funlang_core::lang::punctuation::PunctuationId;

impl TokenKind {
    /// Return `true` if this is the given keyword.
    pub fn is_keyword(&self, id: KeywordId) -> bool {
        matches!(self, TokenKind::Keyword(k) if *k == id)
    }

    /// Return the operator id, if this is an operator token.
    pub fn operator_id(&self) -> Option<OperatorId> {
        match self {
            TokenKind::Operator(id) => Some(*id),
            _ => None,
        }
    }

    /// Return `true` if this is the given operator.
    pub fn is_operator(&self, id: OperatorId) -> bool {
        matches!(self, TokenKind::Operator(o) if *o == id)
    }

    /// Return `true` if this is the given punctuation.
    pub fn is_punctuation(&self, id: PunctuationId) -> bool {
        matches!(self, TokenKind::Punctuation(p) if *p == id)
    }

    /// Return `true` if a statement can begin with this keyword (used for error recovery).
    pub fn starts_statement(&self) -> bool {
        matches!(
            self,
            TokenKind::Keyword(
                KeywordId::Let
                    | KeywordId::Var
                    | KeywordId::Print
                    | KeywordId::If
                    | KeywordId::While
                    | KeywordId::For
                    | KeywordId::Func
                    | KeywordId::Return
            )
        )
    }
}
