//! `undeclared-assign`: writes to names that were never declared.

use super::{Rule, RuleContext};
use crate::frontend::ast::Span;

/// Reports an assignment (or forward chain write) to a name with no earlier declaration.
pub struct UndeclaredAssignRule;

impl Rule for UndeclaredAssignRule {
    fn id(&self) -> &'static str {
        "undeclared-assign"
    }

    fn description(&self) -> &'static str {
        "Assignment to a variable that has not been declared"
    }

    fn on_assignment(&mut self, name: &str, span: Span, cx: &mut RuleContext<'_>) {
        if !cx.is_declared(name) {
            cx.error(span, format!("Assignment to undeclared variable '{name}'."));
        }
    }
}
