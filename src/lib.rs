#![forbid(unsafe_code)]
//! FunLang Programming Language Compiler
//!
//! FunLang is a small imperative teaching language with typed declarations, counted loops, top-level functions and
//! chain expressions (`x => f <=> g`). This crate provides the compiler: frontend (rule engine, semantic analyzer,
//! scope table), backend (Java source emission), a tree-walking interpreter for the integer subset, and the CLI.
//!
//! ## Panic Policy
//!
//! This codebase follows explicit error handling:
//!
//! - **Production code**: Use `Result` or `Option` with `?` / `ok_or` / `map_err`. The `cli` and `backend` modules
//!   enforce `#![deny(clippy::unwrap_used)]`.
//!
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.
//!
//! - **True invariants**: If a panic represents a compiler bug (logic error), use `.expect("INVARIANT: reason")` with a
//!   clear explanation.

pub mod backend;
pub mod cli;
pub mod frontend;
pub mod interpreter;
pub mod pipeline;
pub mod version;

pub use frontend::analyzer;
pub use frontend::ast;
pub use frontend::diagnostics;
pub use frontend::lexer;
pub use frontend::parser;
pub use frontend::rules;
pub use frontend::sink;
pub use frontend::symbols;

pub use backend::{EmitConfig, JavaEmitter};
pub use interpreter::Interpreter;
pub use pipeline::{PipelineError, check_program, compile_source, parse_source, run_source};
