//! `duplicate-declaration`: a second `let`/`var` for the same name.
//!
//! Declarations are tracked without regard to scope, so re-declaring a name in a sibling block also warns.

use super::{Rule, RuleContext};
use crate::frontend::ast::{LetDecl, Span};

pub struct DuplicateDeclarationRule;

impl Rule for DuplicateDeclarationRule {
    fn id(&self) -> &'static str {
        "duplicate-declaration"
    }

    fn description(&self) -> &'static str {
        "Variable declared more than once"
    }

    fn on_let_decl(&mut self, decl: &LetDecl, span: Span, cx: &mut RuleContext<'_>) {
        if cx.is_declared(&decl.name) {
            cx.warn(span, format!("Variable '{}' is already declared.", decl.name));
        }
    }
}
