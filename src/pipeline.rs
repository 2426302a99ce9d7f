//! End-to-end compilation pipelines.
//!
//! Source text goes through the syntax frontend, then the rule engine and the semantic analyzer (both always run,
//! and their findings are reported together), and finally one of the two backends: the Java emitter or the
//! interpreter. Syntax errors stop everything; semantic errors stop before either backend.

use std::io::Write;

use crate::backend::java::{EmitConfig, EmitError, emit_program};
use crate::frontend::analyzer::SemanticAnalyzer;
use crate::frontend::ast::Program;
use crate::frontend::diagnostics::{CompileError, LineIndex};
use crate::frontend::rules::RuleEngine;
use crate::frontend::sink::{Diagnostic, DiagnosticSink};
use crate::frontend::symbols::ScopeTable;
use crate::frontend::{lexer, parser};
use crate::interpreter::{Interpreter, RuntimeError};

/// Failure of a whole pipeline run.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Syntax errors:\n{}", bullet_list(.0.iter().map(|e| e.message.as_str())))]
    Syntax(Vec<CompileError>),
    #[error("Semantic errors:\n{}", bullet_list(.0.iter().map(String::as_str)))]
    Semantic(Vec<String>),
    #[error("Java emission failed: {0}")]
    Emit(#[from] EmitError),
    #[error("Runtime error: {0}")]
    Runtime(#[from] RuntimeError),
}

fn bullet_list<'a>(items: impl Iterator<Item = &'a str>) -> String {
    items.map(|m| format!("  - {m}")).collect::<Vec<_>>().join("\n")
}

/// Everything the checking stage found for one program.
pub struct CheckReport {
    /// Rule engine output (errors and warnings, with positions).
    pub diagnostics: DiagnosticSink,
    /// Analyzer messages (errors only, no positions).
    pub analyzer_errors: Vec<String>,
    /// Scope table left behind by the analyzer.
    pub symbols: ScopeTable,
}

impl CheckReport {
    pub fn has_errors(&self) -> bool {
        self.diagnostics.has_errors() || !self.analyzer_errors.is_empty()
    }

    /// Every blocking message: rule errors (with positions) first, then analyzer messages.
    pub fn error_messages(&self) -> Vec<String> {
        self.diagnostics
            .errors()
            .map(ToString::to_string)
            .chain(self.analyzer_errors.iter().cloned())
            .collect()
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.warnings()
    }

    /// Convert into the scope table, or the semantic error list.
    pub fn into_result(self) -> Result<ScopeTable, PipelineError> {
        if self.has_errors() {
            Err(PipelineError::Semantic(self.error_messages()))
        } else {
            Ok(self.symbols)
        }
    }
}

/// Lex and parse `source`.
///
/// ## Errors
/// Lex errors are returned on their own; parsing only runs on a clean token stream.
pub fn parse_source(source: &str) -> Result<Program, Vec<CompileError>> {
    let tokens = lexer::lex(source)?;
    parser::parse(&tokens)
}

/// Run the rule engine and the semantic analyzer over `program`.
#[tracing::instrument(skip_all)]
pub fn check_program(source: &str, program: &Program) -> CheckReport {
    let positions = LineIndex::new(source);
    let mut diagnostics = DiagnosticSink::new();
    RuleEngine::standard().run(program, &positions, &mut diagnostics);

    let mut analyzer = SemanticAnalyzer::new();
    analyzer.analyze(program);
    let analyzer_errors = analyzer.errors().to_vec();

    tracing::debug!(
        rule_diagnostics = diagnostics.len(),
        analyzer_errors = analyzer_errors.len(),
        "checks finished"
    );
    CheckReport {
        diagnostics,
        analyzer_errors,
        symbols: analyzer.into_symbols(),
    }
}

/// Compile `source` to a Java compilation unit.
#[tracing::instrument(skip_all, fields(bytes = source.len()))]
pub fn compile_source(source: &str, config: &EmitConfig) -> Result<String, PipelineError> {
    let program = parse_source(source).map_err(PipelineError::Syntax)?;
    let symbols = check_program(source, &program).into_result()?;
    Ok(emit_program(&program, symbols, config)?)
}

/// Check and interpret `source`, writing program output to `out`.
#[tracing::instrument(skip_all, fields(bytes = source.len()))]
pub fn run_source<W: Write>(source: &str, out: W) -> Result<(), PipelineError> {
    let program = parse_source(source).map_err(PipelineError::Syntax)?;
    check_program(source, &program).into_result()?;
    Interpreter::new(out).run(&program)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lex_errors_stop_before_parsing() {
        let errors = parse_source("let x = @").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].message.contains('@'));
    }

    #[test]
    fn test_check_report_combines_both_channels() {
        let source = "print y";
        let program = parse_source(source).unwrap();
        let report = check_program(source, &program);
        assert!(report.has_errors());
        assert_eq!(
            report.error_messages(),
            vec!["Use of undeclared variable 'y'. at 1:6", "Use of undeclared variable: y"]
        );
    }

    #[test]
    fn test_warnings_do_not_block() {
        let source = "{ let x = 1 } { let x = 2 }";
        let program = parse_source(source).unwrap();
        let report = check_program(source, &program);
        assert_eq!(report.warnings().count(), 1);
        assert!(!report.has_errors());
        assert!(report.into_result().is_ok());
    }

    #[test]
    fn test_semantic_error_display() {
        let err = compile_source("func f() { return 1 } func f() { return 2 }", &EmitConfig::default()).unwrap_err();
        assert_eq!(err.to_string(), "Semantic errors:\n  - Duplicate function name: f");
    }

    #[test]
    fn test_syntax_error_display() {
        let err = run_source("print )", std::io::sink()).unwrap_err();
        assert!(matches!(err, PipelineError::Syntax(_)));
        assert!(err.to_string().starts_with("Syntax errors:\n  - Expected expression"));
    }

    #[test]
    fn test_run_source_prints() {
        let mut out = Vec::new();
        run_source("let x = 2 print x * 21", &mut out).unwrap();
        assert_eq!(out, b"42\n");
    }

    #[test]
    fn test_runtime_errors_are_wrapped() {
        let err = run_source("let z = 0 print 1 / z", std::io::sink()).unwrap_err();
        assert!(matches!(err, PipelineError::Runtime(RuntimeError::DivisionByZero)));
    }
}
