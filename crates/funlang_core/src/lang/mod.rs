//! FunLang vocabulary registries.
//!
//! This module is the front door for language-level vocabulary: reserved keywords, operators, punctuation,
//! builtin functions and builtin type names.
//!
//! Callers work with **stable IDs** (e.g. `KeywordId`, `OperatorId`) and look up spellings/metadata via
//! registry tables instead of comparing strings all over the compiler.
//!
//! ## Notes
//! - Registries are **pure**: no AST types, no IO, no side effects.
//! - The lexer/parser enforce syntax; registries only provide spellings and metadata.
//!
//! ## Examples
//! ```rust
//! use funlang_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("print"), Some(KeywordId::Print));
//! assert_eq!(keywords::as_str(KeywordId::Print), "print");
//! ```

pub mod builtins;
pub mod keywords;
pub mod operators;
pub mod punctuation;
pub mod registry;
pub mod types;
