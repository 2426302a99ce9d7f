//! Tree-walking interpreter for FunLang.
//!
//! Executes a small integer-only subset of the language directly from the AST: declarations, assignments,
//! `print`, bare blocks and `if`/`else` with at most one condition. Every variable lives in one flat store, so
//! block nesting does not create new bindings.
//!
//! ## Notes
//!
//! - Values are `i64`. `true`/`false` evaluate to `1`/`0`, and any non-zero condition is true.
//! - Arithmetic is checked: overflow and division by zero stop the program with a [`RuntimeError`].
//! - Output already written stays written when a later statement fails.
//! - Division truncates, unlike the Java backend where a `decimal` target keeps the fraction.
//!
//! ## Examples
//!
//! ```rust
//! use funlang::frontend::{lexer, parser};
//! use funlang::interpreter::Interpreter;
//!
//! let tokens = lexer::lex("let x = 5 if x > 0 { print x } else { print 0 }").unwrap();
//! let program = parser::parse(&tokens).unwrap();
//! let mut interp = Interpreter::new(Vec::new());
//! interp.run(&program).unwrap();
//! assert_eq!(String::from_utf8(interp.into_output()).unwrap(), "5\n");
//! ```

use std::collections::HashMap;
use std::io::Write;

use crate::frontend::ast::*;

/// Error raised while executing a program.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("undefined variable '{0}'")]
    UndefinedVariable(String),
    #[error("{0} are not supported by the interpreter")]
    Unsupported(&'static str),
    #[error("division by zero")]
    DivisionByZero,
    #[error("integer overflow")]
    Overflow,
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),
}

/// Interpreter state: an output sink and a flat variable store.
pub struct Interpreter<W: Write> {
    out: W,
    store: HashMap<String, i64>,
}

impl<W: Write> Interpreter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            store: HashMap::new(),
        }
    }

    /// Execute every top-level statement in order.
    ///
    /// ## Errors
    /// Stops at the first [`RuntimeError`].
    #[tracing::instrument(skip_all, fields(statements = program.statements.len()))]
    pub fn run(&mut self, program: &Program) -> Result<(), RuntimeError> {
        for stmt in &program.statements {
            self.exec(stmt)?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Current value of a variable.
    pub fn value_of(&self, name: &str) -> Option<i64> {
        self.store.get(name).copied()
    }

    pub fn into_output(self) -> W {
        self.out
    }

    fn exec(&mut self, stmt: &Spanned<Statement>) -> Result<(), RuntimeError> {
        match &stmt.node {
            Statement::Let(decl) => {
                let value = match &decl.init {
                    Some(init) => self.eval(init)?,
                    None => 0,
                };
                self.store.insert(decl.name.clone(), value);
            }
            Statement::Assign(assign) => {
                if !self.store.contains_key(&assign.name) {
                    return Err(RuntimeError::UndefinedVariable(assign.name.clone()));
                }
                let value = self.eval(&assign.value)?;
                self.store.insert(assign.name.clone(), value);
            }
            Statement::Print(expr) => {
                let value = self.eval(expr)?;
                writeln!(self.out, "{value}")?;
            }
            Statement::If(if_stmt) => self.exec_if(if_stmt)?,
            Statement::Block(block) => self.exec_block(block)?,
            Statement::While(_) => return Err(RuntimeError::Unsupported("while loops")),
            Statement::For(_) => return Err(RuntimeError::Unsupported("for loops")),
            Statement::Func(_) => return Err(RuntimeError::Unsupported("function definitions")),
            Statement::Return(_) => return Err(RuntimeError::Unsupported("return statements")),
            Statement::Expr(_) => return Err(RuntimeError::Unsupported("expression statements")),
        }
        Ok(())
    }

    fn exec_if(&mut self, if_stmt: &IfStmt) -> Result<(), RuntimeError> {
        let [branch] = if_stmt.branches.as_slice() else {
            return Err(RuntimeError::Unsupported("else-if chains"));
        };
        if self.eval(&branch.condition)? != 0 {
            self.exec_block(&branch.body)
        } else if let Some(else_block) = &if_stmt.else_block {
            self.exec_block(else_block)
        } else {
            Ok(())
        }
    }

    fn exec_block(&mut self, block: &Block) -> Result<(), RuntimeError> {
        for stmt in &block.statements {
            self.exec(stmt)?;
        }
        Ok(())
    }

    fn eval(&self, expr: &Spanned<Expr>) -> Result<i64, RuntimeError> {
        match &expr.node {
            Expr::Literal(Literal::Int(n)) => Ok(*n),
            Expr::Literal(Literal::Bool(b)) => Ok(i64::from(*b)),
            Expr::Literal(Literal::Decimal(_)) => Err(RuntimeError::Unsupported("decimal values")),
            Expr::Literal(Literal::Text(_)) => Err(RuntimeError::Unsupported("text values")),
            Expr::Literal(Literal::List(_)) => Err(RuntimeError::Unsupported("lists")),
            Expr::Ident(name) => self
                .store
                .get(name)
                .copied()
                .ok_or_else(|| RuntimeError::UndefinedVariable(name.clone())),
            Expr::Binary(left, op, right) => self.eval_binary(left, *op, right),
            Expr::Paren(inner) => self.eval(inner),
            Expr::Call(_) => Err(RuntimeError::Unsupported("function calls")),
            Expr::Chain(_) => Err(RuntimeError::Unsupported("chains")),
        }
    }

    fn eval_binary(&self, left: &Spanned<Expr>, op: BinaryOp, right: &Spanned<Expr>) -> Result<i64, RuntimeError> {
        // Short-circuit before evaluating the right side.
        match op {
            BinaryOp::And => {
                let l = self.eval(left)? != 0;
                return Ok(i64::from(l && self.eval(right)? != 0));
            }
            BinaryOp::Or => {
                let l = self.eval(left)? != 0;
                return Ok(i64::from(l || self.eval(right)? != 0));
            }
            _ => {}
        }

        let l = self.eval(left)?;
        let r = self.eval(right)?;
        let value = match op {
            BinaryOp::Add => l.checked_add(r).ok_or(RuntimeError::Overflow)?,
            BinaryOp::Sub => l.checked_sub(r).ok_or(RuntimeError::Overflow)?,
            BinaryOp::Mul => l.checked_mul(r).ok_or(RuntimeError::Overflow)?,
            BinaryOp::Div => checked_division(l, r, i64::checked_div)?,
            BinaryOp::Mod => checked_division(l, r, i64::checked_rem)?,
            BinaryOp::Eq => i64::from(l == r),
            BinaryOp::NotEq => i64::from(l != r),
            BinaryOp::Lt => i64::from(l < r),
            BinaryOp::LtEq => i64::from(l <= r),
            BinaryOp::Gt => i64::from(l > r),
            BinaryOp::GtEq => i64::from(l >= r),
            BinaryOp::And => i64::from(l != 0 && r != 0),
            BinaryOp::Or => i64::from(l != 0 || r != 0),
        };
        Ok(value)
    }
}

fn checked_division(l: i64, r: i64, f: fn(i64, i64) -> Option<i64>) -> Result<i64, RuntimeError> {
    if r == 0 {
        return Err(RuntimeError::DivisionByZero);
    }
    f(l, r).ok_or(RuntimeError::Overflow)
}

/// Run `program`, writing printed values to `out`.
pub fn interpret<W: Write>(program: &Program, out: W) -> Result<(), RuntimeError> {
    Interpreter::new(out).run(program)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontend::{lexer, parser};

    fn parse_str(source: &str) -> Program {
        let tokens = lexer::lex(source).unwrap();
        parser::parse(&tokens).unwrap()
    }

    fn run_str(source: &str) -> (String, Result<(), RuntimeError>) {
        let program = parse_str(source);
        let mut interp = Interpreter::new(Vec::new());
        let result = interp.run(&program);
        (String::from_utf8(interp.into_output()).unwrap(), result)
    }

    fn output(source: &str) -> String {
        let (out, result) = run_str(source);
        result.expect("program failed");
        out
    }

    #[test]
    fn test_if_else_end_to_end() {
        assert_eq!(output("let x = 5 if x > 0 { print x } else { print 0 }"), "5\n");
        assert_eq!(output("let x = 0 - 5 if x > 0 { print x } else { print 0 }"), "0\n");
    }

    #[test]
    fn test_if_without_else() {
        assert_eq!(output("if 0 { print 1 } print 2"), "2\n");
    }

    #[test]
    fn test_declaration_defaults_and_redeclaration() {
        assert_eq!(output("let y print y var y = 3 print y"), "0\n3\n");
    }

    #[test]
    fn test_assignment_and_arithmetic() {
        assert_eq!(output("let y y = y + 1 print y * 10 - 4 % 3"), "9\n");
    }

    #[test]
    fn test_integer_division_truncates() {
        assert_eq!(output("let x: decimal = 7 / 2 print x print -7 / 2"), "3\n-3\n");
    }

    #[test]
    fn test_booleans_and_logic() {
        assert_eq!(output("print true print FALSE print 1 < 2 AND 2 < 1 print 0 or 3"), "1\n0\n0\n1\n");
    }

    #[test]
    fn test_short_circuit_skips_right_side() {
        assert_eq!(output("print 0 AND 1 / 0 print 1 OR missing"), "0\n1\n");
    }

    #[test]
    fn test_blocks_share_the_flat_store() {
        assert_eq!(output("{ let inner = 4 } print inner"), "4\n");
    }

    #[test]
    fn test_undefined_read_keeps_earlier_output() {
        let (out, result) = run_str("print 1 print nope print 2");
        assert_eq!(out, "1\n");
        assert!(matches!(result, Err(RuntimeError::UndefinedVariable(ref n)) if n == "nope"));
    }

    #[test]
    fn test_assignment_to_undefined_variable() {
        let (_, result) = run_str("ghost = 1");
        assert!(matches!(result, Err(RuntimeError::UndefinedVariable(ref n)) if n == "ghost"));
    }

    #[test]
    fn test_division_by_zero_and_overflow() {
        let (_, result) = run_str("print 1 / 0");
        assert!(matches!(result, Err(RuntimeError::DivisionByZero)));
        let (_, result) = run_str("print 5 % 0");
        assert!(matches!(result, Err(RuntimeError::DivisionByZero)));
        let (_, result) = run_str("print 9223372036854775807 + 1");
        assert!(matches!(result, Err(RuntimeError::Overflow)));
    }

    #[test]
    fn test_unsupported_constructs() {
        let cases = [
            ("while 0 { }", "while loops"),
            ("for i = 1 to 2 { }", "for loops"),
            ("func f() { return 1 }", "function definitions"),
            ("print MIN(1, 2)", "function calls"),
            ("print 1.5", "decimal values"),
            ("print \"hi\"", "text values"),
            ("let x = 1 if x { } elif x { }", "else-if chains"),
        ];
        for (source, what) in cases {
            let (_, result) = run_str(source);
            match result {
                Err(RuntimeError::Unsupported(w)) => assert_eq!(w, what, "{source}"),
                other => panic!("{source}: expected unsupported, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(RuntimeError::UndefinedVariable("x".into()).to_string(), "undefined variable 'x'");
        assert_eq!(
            RuntimeError::Unsupported("for loops").to_string(),
            "for loops are not supported by the interpreter"
        );
    }

    #[test]
    fn test_value_of_after_run() {
        let program = parse_str("let a = 2 a = a * a");
        let mut interp = Interpreter::new(std::io::sink());
        interp.run(&program).unwrap();
        assert_eq!(interp.value_of("a"), Some(4));
        assert_eq!(interp.value_of("b"), None);
    }
}
