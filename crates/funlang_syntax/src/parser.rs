//! Parser for the FunLang programming language
//!
//! Converts a token stream into an AST.
//!
//! ## Examples
//!
//! ```rust
//! use funlang_syntax::{lexer, parser};
//!
//! let source = "func twice(n: integer) { return n * 2 }";
//! let tokens = lexer::lex(source).unwrap();
//! let ast = parser::parse(&tokens).unwrap();
//! assert_eq!(ast.statements.len(), 1);
//! ```

use crate::ast::*;
use crate::diagnostics::CompileError;
use crate::lexer::{Token, TokenKind};
use funlang_core::lang::keywords::KeywordId;
use funlang_core::lang::operators::OperatorId;
use funlang_core::lang::punctuation::PunctuationId;
use funlang_core::lang::types::{self as type_names, TypeNameId};

// NOTE: This module is split across multiple files using `include!` to keep all parser
// methods in the same Rust module (preserving privacy + call patterns) while avoiding
// a single large source file.

include!("parser/core.rs");
include!("parser/helpers.rs");
include!("parser/types.rs");
include!("parser/stmts.rs");
include!("parser/expr.rs");
include!("parser/api.rs");
include!("parser/tests.rs");
