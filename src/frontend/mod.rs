//! FunLang compiler frontend
//!
//! This module contains the checking side of the compiler:
//! - `lexer`, `parser`, `ast`, `diagnostics`: the syntax frontend, shared from the `funlang_syntax` crate
//! - `symbols`: scope table with nested scopes and function signatures
//! - `sink`: diagnostic sink for positioned errors and warnings
//! - `rules`: pluggable rule engine run over the AST
//! - `analyzer`: semantic analysis (declarations, scoping, arity, chain targets)

// Syntax components are provided by the shared funlang_syntax crate.
pub use funlang_syntax::{ast, diagnostics, lexer, parser};

pub mod analyzer;
pub mod rules;
pub mod sink;
pub mod symbols;
