//! Abstract Syntax Tree definitions for FunLang
//!
//! The tree is built once by the parser and never mutated afterwards. Every statement and expression carries a
//! byte [`Span`] so later passes can report positions.

use std::fmt;

use funlang_core::lang::operators::{self, OperatorId};
use funlang_core::lang::types::{self, TypeNameId};

/// Source location span (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

/// A node with source location
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Spanned<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }
}

pub type Ident = String;

/// A program is an ordered sequence of top-level statements
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Spanned<Statement>>,
}

/// A braced statement sequence (may be empty)
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub statements: Vec<Spanned<Statement>>,
}

// ============================================================================
// Statements
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `let x: integer = 1` / `var x`
    Let(LetDecl),
    /// `x = expr`
    Assign(Assignment),
    /// `print expr`
    Print(Spanned<Expr>),
    If(IfStmt),
    While(WhileStmt),
    For(ForStmt),
    Func(FuncDef),
    Return(Spanned<Expr>),
    Block(Block),
    /// Bare expression (calls and chains)
    Expr(Spanned<Expr>),
}

/// Which surface keyword introduced a declaration. Both have identical semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BindingKeyword {
    Let,
    Var,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LetDecl {
    pub keyword: BindingKeyword,
    pub name: Ident,
    pub name_span: Span,
    pub ty: Option<TypeName>,
    pub init: Option<Spanned<Expr>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub name: Ident,
    pub name_span: Span,
    pub value: Spanned<Expr>,
}

/// One `if` / `elif` arm.
#[derive(Debug, Clone, PartialEq)]
pub struct IfBranch {
    pub condition: Spanned<Expr>,
    pub body: Block,
}

/// `if c1 { } elif c2 { } else { }`
///
/// ## Notes
/// - `branches` is never empty, so the block count is always the condition count, plus one when `else_block` is
///   present.
#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub branches: Vec<IfBranch>,
    pub else_block: Option<Block>,
}

impl IfStmt {
    /// Conditions in source order.
    pub fn conditions(&self) -> impl Iterator<Item = &Spanned<Expr>> {
        self.branches.iter().map(|b| &b.condition)
    }

    /// Blocks in source order, including the trailing `else` block.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.branches.iter().map(|b| &b.body).chain(self.else_block.iter())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WhileStmt {
    pub condition: Spanned<Expr>,
    pub body: Block,
}

/// `for i = start to end step s { }` with an inclusive upper bound.
#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub var: Ident,
    pub var_span: Span,
    pub start: Spanned<Expr>,
    pub end: Spanned<Expr>,
    pub step: Option<Spanned<Expr>>,
    pub body: Block,
}

impl ForStmt {
    /// Step used when the loop has no `step` clause.
    pub const DEFAULT_STEP: i64 = 1;
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuncDef {
    pub name: Ident,
    pub name_span: Span,
    pub params: Vec<Param>,
    pub body: Block,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    pub name: Ident,
    pub ty: TypeName,
    pub span: Span,
}

// ============================================================================
// Types
// ============================================================================

/// Declared type of a variable or parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeName {
    Integer,
    Decimal,
    Text,
    Boolean,
    /// `list` or `list<T>`; the element type is informational only.
    List(Option<Box<TypeName>>),
}

impl TypeName {
    /// Registry id for this type name.
    pub fn id(&self) -> TypeNameId {
        match self {
            TypeName::Integer => TypeNameId::Integer,
            TypeName::Decimal => TypeNameId::Decimal,
            TypeName::Text => TypeNameId::Text,
            TypeName::Boolean => TypeNameId::Boolean,
            TypeName::List(_) => TypeNameId::List,
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeName::List(Some(elem)) => write!(f, "list<{elem}>"),
            other => write!(f, "{}", types::as_str(other.id())),
        }
    }
}

// ============================================================================
// Expressions
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(Literal),
    Ident(Ident),
    Call(CallExpr),
    Binary(Box<Spanned<Expr>>, BinaryOp, Box<Spanned<Expr>>),
    Chain(ChainExpr),
    Paren(Box<Spanned<Expr>>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Int(i64),
    /// Decimal literal kept as its source text so emission is exact.
    Decimal(String),
    /// Unescaped string contents.
    Text(String),
    Bool(bool),
    List(Vec<Spanned<Expr>>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub name: Ident,
    pub args: Vec<Spanned<Expr>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,
    And,
    Or,
}

impl BinaryOp {
    /// Registry id of the operator token this node was parsed from.
    pub fn operator_id(self) -> OperatorId {
        match self {
            BinaryOp::Add => OperatorId::Plus,
            BinaryOp::Sub => OperatorId::Minus,
            BinaryOp::Mul => OperatorId::Star,
            BinaryOp::Div => OperatorId::Slash,
            BinaryOp::Mod => OperatorId::Percent,
            BinaryOp::Eq => OperatorId::EqEq,
            BinaryOp::NotEq => OperatorId::NotEq,
            BinaryOp::Lt => OperatorId::Lt,
            BinaryOp::LtEq => OperatorId::LtEq,
            BinaryOp::Gt => OperatorId::Gt,
            BinaryOp::GtEq => OperatorId::GtEq,
            BinaryOp::And => OperatorId::And,
            BinaryOp::Or => OperatorId::Or,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", operators::as_str(self.operator_id()))
    }
}

/// Pipe operator connecting two chain stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainOp {
    /// `=>`
    Forward,
    /// `<=>`
    Bidirectional,
}

/// `head => stage <=> stage ...`
///
/// ## Notes
/// - Storing a head plus `(op, stage)` links keeps `ops == stages - 1` true by construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainExpr {
    pub head: Box<Spanned<Expr>>,
    pub links: Vec<ChainLink>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChainLink {
    pub op: ChainOp,
    pub stage: Spanned<Expr>,
}

impl ChainExpr {
    /// Number of stages, including the head.
    pub fn stage_count(&self) -> usize {
        self.links.len() + 1
    }
}
