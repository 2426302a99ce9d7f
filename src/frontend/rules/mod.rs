//! Pluggable diagnostic rules for FunLang.
//!
//! Each rule is a restricted AST visitor: it overrides the hooks it cares about and reports through the
//! [`RuleContext`] it is handed. The [`RuleEngine`] runs rules one after another, each over a full traversal, so
//! diagnostics come out grouped by rule and then in source order.
//!
//! ## Notes
//! - Declared-name tracking is shared: the traversal driver owns one [`DeclaredNames`] per rule run and records a
//!   declaration for every `let`/`var` (after its hook fires), every `for` loop variable and every function
//!   parameter. Tracking is flat, not scope-aware.
//! - The engine is consumed by [`RuleEngine::run`]; build a new one with [`RuleEngine::standard`] per run.

mod duplicate_decl;
mod undeclared_assign;
mod undeclared_use;
mod walker;

pub use duplicate_decl::DuplicateDeclarationRule;
pub use undeclared_assign::UndeclaredAssignRule;
pub use undeclared_use::UndeclaredUseRule;

use std::collections::HashSet;

use crate::frontend::ast::{Expr, IfStmt, LetDecl, Program, Span, Spanned};
use crate::frontend::diagnostics::LineIndex;
use crate::frontend::sink::DiagnosticSink;
use walker::Walker;

/// A single diagnostic rule.
///
/// Every hook has an empty default, so a rule only implements what it inspects.
pub trait Rule {
    /// Stable kebab-case identifier (e.g. `undeclared-use`).
    fn id(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Called once before the traversal starts.
    fn init(&mut self, _cx: &mut RuleContext<'_>) {}

    /// A `let`/`var` declaration. The name is not yet recorded in [`RuleContext::declared`].
    fn on_let_decl(&mut self, _decl: &LetDecl, _span: Span, _cx: &mut RuleContext<'_>) {}

    /// A write to `name`: an assignment statement or a forward chain into a bare name.
    fn on_assignment(&mut self, _name: &str, _span: Span, _cx: &mut RuleContext<'_>) {}

    fn on_print(&mut self, _expr: &Spanned<Expr>, _cx: &mut RuleContext<'_>) {}

    fn on_if(&mut self, _stmt: &IfStmt, _span: Span, _cx: &mut RuleContext<'_>) {}

    /// An identifier read inside an expression. Call names are not reads.
    fn on_identifier(&mut self, _name: &str, _span: Span, _cx: &mut RuleContext<'_>) {}

    /// Called once after the traversal finishes.
    fn finish(&mut self, _cx: &mut RuleContext<'_>) {}
}

/// Names that have had a declaration event so far in the current rule's traversal.
#[derive(Debug, Default)]
pub struct DeclaredNames {
    names: HashSet<String>,
}

impl DeclaredNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn declare(&mut self, name: &str) {
        self.names.insert(name.to_string());
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Shared state handed to every rule hook.
pub struct RuleContext<'a> {
    pub sink: &'a mut DiagnosticSink,
    pub positions: &'a LineIndex,
    pub declared: &'a DeclaredNames,
}

impl RuleContext<'_> {
    /// Report an error at the start of `span`.
    pub fn error(&mut self, span: Span, message: impl Into<String>) {
        let (line, column) = self.positions.position(span.start);
        self.sink.error(message, line, column);
    }

    /// Report a warning at the start of `span`.
    pub fn warn(&mut self, span: Span, message: impl Into<String>) {
        let (line, column) = self.positions.position(span.start);
        self.sink.warn(message, line, column);
    }

    pub fn is_declared(&self, name: &str) -> bool {
        self.declared.contains(name)
    }
}

/// Ordered set of rules for one run.
pub struct RuleEngine {
    rules: Vec<Box<dyn Rule>>,
}

impl RuleEngine {
    /// Fresh instances of every standard rule, in reporting order.
    pub fn standard() -> Self {
        Self::with_rules(vec![
            Box::new(UndeclaredAssignRule),
            Box::new(UndeclaredUseRule),
            Box::new(DuplicateDeclarationRule),
        ])
    }

    pub fn with_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    pub fn rule_ids(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    /// Run every rule over `program`, appending to `sink`.
    ///
    /// Rules run sequentially; each one gets its own traversal and an empty declared-name set.
    #[tracing::instrument(skip_all, fields(rules = self.rules.len()))]
    pub fn run(self, program: &Program, positions: &LineIndex, sink: &mut DiagnosticSink) {
        for mut rule in self.rules {
            let _span = tracing::debug_span!("rule", id = rule.id()).entered();
            let before = sink.len();
            Walker::new(sink, positions).run(rule.as_mut(), program);
            tracing::debug!(reported = sink.len() - before, "rule finished");
        }
    }
}
