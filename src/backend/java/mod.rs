//! Java source emitter
//!
//! Turns an analyzer-approved [`Program`] into one Java compilation unit: a public class whose `main` holds every
//! top-level statement, followed by each function as a `public static double` method.
//!
//! ## Notes
//!
//! - The emitter re-enters the analyzer's [`ScopeTable`] block by block so function signatures (used for argument
//!   coercion) resolve the same way they did during analysis.
//! - `=>` / `<=>` chains can produce assignments that must run before the statement containing the chain. They are
//!   collected while an expression is emitted and placed in front of that statement.
//! - Numbers follow Java semantics in the output: integer division truncates, decimals are `double`.
//!
//! ## Examples
//!
//! ```rust
//! use funlang::backend::java::{EmitConfig, emit_program};
//! use funlang::frontend::{analyzer, lexer, parser};
//!
//! let tokens = lexer::lex("let x = 5 print x").unwrap();
//! let program = parser::parse(&tokens).unwrap();
//! let symbols = analyzer::analyze(&program).unwrap();
//! let java = emit_program(&program, symbols, &EmitConfig::default()).unwrap();
//! assert!(java.contains("System.out.println(x);"));
//! ```

pub mod config;
mod expressions;
pub mod lines;
mod statements;
pub mod types;
pub mod writer;

pub use config::EmitConfig;
pub use lines::{BlockArm, JavaBlock, JavaLine};
pub use writer::JavaWriter;

use crate::frontend::ast::{Program, Statement};
use crate::frontend::symbols::{ScopeError, ScopeTable};

/// Comment placed above the generated class.
pub const GENERATED_HEADER: &str = "Generated by the funlang compiler. Do not edit.";

/// Errors that can occur while emitting Java.
///
/// The analyzer rejects every program that would trigger these; they guard against emitting an unchecked tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmitError {
    #[error("'{0}' is not a valid Java class name")]
    InvalidClassName(String),
    #[error("function '{0}' is not defined at top level")]
    NestedFunction(String),
    #[error("return statement outside of a function")]
    ReturnOutsideFunction,
    #[error("chain target must be a function call or a variable")]
    InvalidChainTarget,
    #[error("bidirectional pipe needs a variable to write back to")]
    BidirectionalWithoutVariable,
    #[error("scope stack out of balance: {0}")]
    Scope(#[from] ScopeError),
}

/// Java emitter state.
pub struct JavaEmitter<'a> {
    config: &'a EmitConfig,
    symbols: ScopeTable,
    /// Chain side effects waiting to be placed before the current statement.
    pending: Vec<JavaLine>,
}

impl<'a> JavaEmitter<'a> {
    pub fn new(symbols: ScopeTable, config: &'a EmitConfig) -> Self {
        Self {
            config,
            symbols,
            pending: Vec::new(),
        }
    }

    /// Emit the whole program as Java source text.
    ///
    /// ## Errors
    /// Returns [`EmitError`] for a class name Java cannot use, or for trees the analyzer should have rejected.
    #[tracing::instrument(skip_all, fields(statements = program.statements.len()))]
    pub fn emit(mut self, program: &Program) -> Result<String, EmitError> {
        tracing::debug!(class = %self.config.class_name, "emitting java");
        if !types::is_java_identifier(&self.config.class_name) {
            return Err(EmitError::InvalidClassName(self.config.class_name.clone()));
        }
        self.symbols.rewind_to_global();

        let mut main_body = Vec::new();
        let mut functions = Vec::new();
        for stmt in &program.statements {
            match &stmt.node {
                Statement::Func(func) => functions.push(func),
                _ => main_body.extend(self.statement(stmt)?),
            }
        }
        main_body.push(JavaLine::Comment("end of main".to_string()));

        let mut members = vec![JavaBlock::new("public static void main(String[] args)", main_body).into_line()];
        for func in functions {
            members.extend(std::iter::repeat_n(JavaLine::Blank, self.config.blank_lines_between_members));
            members.push(self.function(func)?);
        }
        tracing::debug!(members = members.len(), "class assembled");

        let mut unit = Vec::new();
        if self.config.emit_header {
            unit.push(JavaLine::Comment(GENERATED_HEADER.to_string()));
            unit.push(JavaLine::Blank);
        }
        unit.push(JavaBlock::new(format!("public class {}", self.config.class_name), members).into_line());

        let mut writer = JavaWriter::new(self.config.indent_width);
        writer.write_lines(&unit);
        Ok(writer.finish())
    }
}

/// Emit `program` with the analyzer's scope table.
pub fn emit_program(program: &Program, symbols: ScopeTable, config: &EmitConfig) -> Result<String, EmitError> {
    JavaEmitter::new(symbols, config).emit(program)
}
