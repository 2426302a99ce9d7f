//! Provide the canonical language vocabulary shared by the FunLang compiler, interpreter and tooling.
//!
//! This crate is intentionally small and dependency-free. It contains registry tables (keywords, operators,
//! punctuation, builtin functions, builtin types) that the lexer, the semantic passes and the Java emitter all read
//! from, so spellings never drift between layers.
//!
//! ## Notes
//!
//! - This is a "vocabulary" crate: **no IO**, no global state, and no compiler-specific types.

pub mod lang;
