//! Semantic analyzer for FunLang.
//!
//! Checks declare-before-use with lexical scoping and approves (or rejects) a program before it reaches a backend.
//! The analyzer runs in two passes over the AST and leaves a populated [`ScopeTable`] behind for the emitter.
//!
//! ## Notes
//!
//! - **Two-pass model**: the first pass registers every top-level function so calls may precede definitions. The
//!   second pass walks statements in order, entering a scope for each function, loop and block body.
//! - **Error accumulation**: errors are collected as plain messages (no positions) so one run reports everything.
//! - **Scopes**: a `for` loop variable and the loop body share one scope, as do function parameters and the
//!   function body. `if`/`while`/bare block bodies each get their own scope.
//!
//! ## What is validated
//!
//! - Duplicate top-level functions, duplicate declarations within a scope, duplicate parameters
//! - Reads, writes and calls of unknown names
//! - Calling something that is not a function, and user-function arity
//! - `return` outside a function and nested function definitions
//! - The shape of `=>` / `<=>` chains
//!
//! ## Examples
//!
//! ```rust
//! use funlang::frontend::{analyzer, lexer, parser};
//!
//! let tokens = lexer::lex("let x = 1 print SQRT(x)").unwrap();
//! let program = parser::parse(&tokens).unwrap();
//! let symbols = analyzer::analyze(&program).expect("program is well scoped");
//! assert!(symbols.resolve("x").is_some());
//! ```

mod check_expr;
mod check_stmt;
mod collect;

#[cfg(test)]
mod tests;

use crate::frontend::ast::Program;
use crate::frontend::symbols::ScopeTable;

/// Analyzer state.
///
/// Holds the scope table and the accumulated error messages. An analyzer checks exactly one program.
pub struct SemanticAnalyzer {
    pub(crate) symbols: ScopeTable,
    pub(crate) errors: Vec<String>,
}

impl Default for SemanticAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl SemanticAnalyzer {
    /// Create an analyzer whose global scope already holds the builtin functions.
    pub fn new() -> Self {
        Self {
            symbols: ScopeTable::with_builtins(),
            errors: Vec::new(),
        }
    }

    /// Check `program`, accumulating errors.
    #[tracing::instrument(skip_all, fields(statements = program.statements.len()))]
    pub fn analyze(&mut self, program: &Program) {
        self.collect_functions(program);
        for stmt in &program.statements {
            self.check_statement(stmt, true);
        }
        self.symbols.rewind_to_global();
        tracing::debug!(errors = self.errors.len(), "analysis finished");
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Messages in the order they were found.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn symbols(&self) -> &ScopeTable {
        &self.symbols
    }

    pub fn into_symbols(self) -> ScopeTable {
        self.symbols
    }

    pub(crate) fn error(&mut self, message: String) {
        tracing::trace!(%message, "semantic error");
        self.errors.push(message);
    }

    /// Leave a scope this analyzer entered.
    pub(crate) fn leave_scope(&mut self) {
        self.symbols
            .exit_scope()
            .expect("INVARIANT: analyzer scopes are entered and exited in pairs");
    }
}

/// Analyze `program` and return its scope table, or every error message.
pub fn analyze(program: &Program) -> Result<ScopeTable, Vec<String>> {
    let mut analyzer = SemanticAnalyzer::new();
    analyzer.analyze(program);
    if analyzer.has_errors() {
        Err(analyzer.errors)
    } else {
        Ok(analyzer.into_symbols())
    }
}
