//! `undeclared-use`: reads of names before any declaration.

use super::{Rule, RuleContext};
use crate::frontend::ast::Span;

pub struct UndeclaredUseRule;

impl Rule for UndeclaredUseRule {
    fn id(&self) -> &'static str {
        "undeclared-use"
    }

    fn description(&self) -> &'static str {
        "Use of a variable before it has been declared"
    }

    fn on_identifier(&mut self, name: &str, span: Span, cx: &mut RuleContext<'_>) {
        if !cx.is_declared(name) {
            cx.error(span, format!("Use of undeclared variable '{name}'."));
        }
    }
}
