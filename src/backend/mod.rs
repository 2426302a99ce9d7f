//! FunLang compiler backend
//!
//! Code generation from a checked AST to a single Java compilation unit.
//!
//! ## Module Organization
//!
//! - `java/` - Java source emission
//!   - `config.rs` - Class name and layout options
//!   - `lines.rs` - Structured output lines (statements, comments, blocks)
//!   - `writer.rs` - Indentation-aware text writer
//!   - `types.rs` - FunLang to Java type mapping
//!   - `statements.rs` / `expressions.rs` - Emission per node kind

// Enforce explicit error handling - no panicking in production code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod java;

pub use java::{EmitConfig, EmitError, JavaEmitter, emit_program};
