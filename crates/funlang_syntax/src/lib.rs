//! Shared syntax frontend for FunLang: lexer, parser, AST, diagnostics.
//!
//! ## Notes
//! - This crate is "syntax-only": it does not do name resolution or semantic checks.
//! - Vocabulary identity (keywords/operators/punctuation) comes from `funlang_core::lang` registries.
//!
//! ## Examples
//! ```rust
//! use funlang_syntax::{lexer, parser};
//!
//! let tokens = lexer::lex("let x = 5 print x").unwrap();
//! let program = parser::parse(&tokens).unwrap();
//! assert_eq!(program.statements.len(), 2);
//! ```

pub mod ast;
pub mod diagnostics;
pub mod lexer;
pub mod parser;
pub mod token_helpers;
