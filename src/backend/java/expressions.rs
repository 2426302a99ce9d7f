//! Expression emission: operators, literals, calls and chains.

use crate::frontend::ast::*;
use crate::frontend::symbols::{FunctionInfo, SymbolKind};
use funlang_core::lang::builtins::{self, BuiltinFnId};
use funlang_core::lang::operators;

use super::lines::JavaLine;
use super::{EmitError, JavaEmitter};

/// An emitted argument plus what coercion needs to know about its source.
#[derive(Debug, Clone)]
struct Arg {
    text: String,
    int_literal: bool,
}

impl Arg {
    fn plain(text: String) -> Self {
        Self {
            text,
            int_literal: false,
        }
    }
}

impl JavaEmitter<'_> {
    pub(super) fn expr(&mut self, expr: &Spanned<Expr>) -> Result<String, EmitError> {
        Ok(match &expr.node {
            Expr::Literal(lit) => self.literal(lit)?,
            Expr::Ident(name) => name.clone(),
            Expr::Call(call) => self.call(call, None)?,
            Expr::Binary(left, op, right) => {
                let left = self.expr(left)?;
                let right = self.expr(right)?;
                format!("({} {} {})", left, java_operator(*op), right)
            }
            Expr::Paren(inner) => format!("({})", self.expr(inner)?),
            Expr::Chain(chain) => self.chain(chain)?,
        })
    }

    fn literal(&mut self, lit: &Literal) -> Result<String, EmitError> {
        Ok(match lit {
            Literal::Int(n) => int_literal(*n),
            Literal::Decimal(text) => text.clone(),
            Literal::Text(text) => quote(text),
            Literal::Bool(b) => b.to_string(),
            Literal::List(items) => {
                let items = items.iter().map(|e| self.expr(e)).collect::<Result<Vec<_>, _>>()?;
                format!("new double[] {{{}}}", items.join(", "))
            }
        })
    }

    fn arg(&mut self, expr: &Spanned<Expr>) -> Result<Arg, EmitError> {
        Ok(Arg {
            text: self.expr(expr)?,
            int_literal: matches!(expr.node, Expr::Literal(Literal::Int(n)) if i32::try_from(n).is_ok()),
        })
    }

    /// Emit a call. `injected` is a chain accumulator passed as the first argument.
    fn call(&mut self, call: &CallExpr, injected: Option<Arg>) -> Result<String, EmitError> {
        let mut args = Vec::with_capacity(call.args.len() + 1);
        args.extend(injected);
        for arg in &call.args {
            args.push(self.arg(arg)?);
        }

        let signature = self.symbols.function(&call.name).cloned();
        Ok(match signature {
            Some(FunctionInfo {
                builtin: Some(id), ..
            }) => builtin_call(id, &args),
            Some(info) => {
                let args: Vec<String> = args
                    .into_iter()
                    .enumerate()
                    .map(|(i, arg)| coerce(arg, info.param_type(i)))
                    .collect();
                format!("{}({})", call.name, args.join(", "))
            }
            None => {
                let args: Vec<String> = args.into_iter().map(|a| a.text).collect();
                format!("{}({})", call.name, args.join(", "))
            }
        })
    }

    /// Emit a chain and return its final value.
    ///
    /// Writes produced by `=> name` and `<=>` stages are queued in `pending`.
    fn chain(&mut self, chain: &ChainExpr) -> Result<String, EmitError> {
        let mut acc_ty = self.value_type(&chain.head);
        let mut acc = self.arg(&chain.head)?;
        let mut acc_var = match &chain.head.node {
            Expr::Ident(name) => Some(name.clone()),
            _ => None,
        };

        for link in &chain.links {
            match (link.op, &link.stage.node) {
                (ChainOp::Forward, Expr::Call(call)) => {
                    acc = Arg::plain(self.call(call, Some(acc))?);
                    acc_ty = Some(TypeName::Decimal);
                    acc_var = None;
                }
                (ChainOp::Forward, Expr::Ident(target)) => {
                    let value = self.assigned_value(target, acc.text, acc_ty.as_ref());
                    self.pending.push(JavaLine::stmt(format!("{target} = {value};")));
                    acc = Arg::plain(target.clone());
                    acc_ty = self.variable_type(target);
                    acc_var = Some(target.clone());
                }
                (ChainOp::Bidirectional, Expr::Call(call)) => {
                    let var = acc_var.clone().ok_or(EmitError::BidirectionalWithoutVariable)?;
                    let value = self.call(call, Some(acc))?;
                    let value = self.assigned_value(&var, value, Some(&TypeName::Decimal));
                    self.pending.push(JavaLine::stmt(format!("{var} = {value};")));
                    acc = Arg::plain(var);
                }
                _ => return Err(EmitError::InvalidChainTarget),
            }
        }
        Ok(acc.text)
    }

    /// Text to store into `target`, narrowed with `(int)` when a decimal lands in an `int` variable.
    pub(super) fn assigned_value(&self, target: &str, value: String, value_ty: Option<&TypeName>) -> String {
        narrow(self.variable_type(target).as_ref(), value, value_ty)
    }

    pub(super) fn variable_type(&self, name: &str) -> Option<TypeName> {
        match &self.symbols.resolve(name)?.kind {
            SymbolKind::Variable { ty } => ty.clone(),
            SymbolKind::Function(_) => None,
        }
    }

    /// Java-side type of an expression's value, as far as the emitter can tell.
    ///
    /// Every function returns `double`, so calls are decimal.
    pub(super) fn value_type(&self, expr: &Spanned<Expr>) -> Option<TypeName> {
        match &expr.node {
            Expr::Literal(Literal::Int(_)) => Some(TypeName::Integer),
            Expr::Literal(Literal::Decimal(_)) => Some(TypeName::Decimal),
            Expr::Literal(Literal::Text(_)) => Some(TypeName::Text),
            Expr::Literal(Literal::Bool(_)) => Some(TypeName::Boolean),
            Expr::Literal(Literal::List(_)) => Some(TypeName::List(None)),
            Expr::Ident(name) => self.variable_type(name),
            Expr::Call(_) => Some(TypeName::Decimal),
            Expr::Paren(inner) => self.value_type(inner),
            Expr::Binary(left, op, right) => match op {
                BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => {
                    match (self.value_type(left), self.value_type(right)) {
                        (Some(TypeName::Text), _) | (_, Some(TypeName::Text)) => Some(TypeName::Text),
                        (Some(TypeName::Integer), Some(TypeName::Integer)) => Some(TypeName::Integer),
                        (None, _) | (_, None) => None,
                        _ => Some(TypeName::Decimal),
                    }
                }
                _ => Some(TypeName::Boolean),
            },
            Expr::Chain(chain) => {
                let mut ty = self.value_type(&chain.head);
                for link in &chain.links {
                    match (link.op, &link.stage.node) {
                        (ChainOp::Forward, Expr::Call(_)) => ty = Some(TypeName::Decimal),
                        (ChainOp::Forward, Expr::Ident(target)) => ty = self.variable_type(target),
                        _ => {}
                    }
                }
                ty
            }
        }
    }
}

/// Narrow a decimal value stored into an `integer` slot.
pub(super) fn narrow(target: Option<&TypeName>, value: String, value_ty: Option<&TypeName>) -> String {
    match (target, value_ty) {
        (Some(TypeName::Integer), Some(TypeName::Decimal)) => format!("(int) {value}"),
        _ => value,
    }
}

/// Integer literal text; values beyond `int` range get the `long` suffix.
fn int_literal(n: i64) -> String {
    if i32::try_from(n).is_ok() {
        n.to_string()
    } else {
        format!("{n}L")
    }
}

/// Java spelling of a binary operator (`AND` becomes `&&`).
fn java_operator(op: BinaryOp) -> &'static str {
    let info = operators::info_for(op.operator_id());
    info.java.unwrap_or(info.spellings[0])
}

/// Coerce an argument toward a declared parameter type.
fn coerce(arg: Arg, param: Option<&TypeName>) -> String {
    match param {
        Some(TypeName::Integer) if !arg.int_literal => format!("(int) {}", arg.text),
        Some(TypeName::Decimal) if arg.int_literal => format!("{}.0", arg.text),
        _ => arg.text,
    }
}

/// Lower `MIN` / `SQRT` with their fixed fallbacks for unusual arities.
fn builtin_call(id: BuiltinFnId, args: &[Arg]) -> String {
    let java = builtins::info_for(id).java;
    let as_double = |arg: &Arg| format!("(double) {}", arg.text);
    match id {
        BuiltinFnId::Min => match args {
            [] => format!("{java}(0.0, 0.0)"),
            [only] => format!("{java}({}, 0.0)", as_double(only)),
            [first, rest @ ..] => rest.iter().fold(as_double(first), |acc, arg| {
                format!("{java}({acc}, {})", as_double(arg))
            }),
        },
        BuiltinFnId::Sqrt => match args {
            [only] => format!("{java}({})", as_double(only)),
            _ => "0.0".to_string(),
        },
    }
}

/// Quote and escape a string for a Java string literal.
fn quote(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 2);
    out.push('"');
    for c in text.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
