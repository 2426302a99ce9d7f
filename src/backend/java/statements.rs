//! Statement emission.

use crate::frontend::ast::*;
use crate::frontend::symbols::{ScopeKind, Symbol};

use super::expressions::narrow;
use super::lines::{BlockArm, JavaBlock, JavaLine};
use super::types::{java_default, java_type};
use super::{EmitError, JavaEmitter};

impl JavaEmitter<'_> {
    /// Emit one statement, preceded by any chain side effects its expressions produced.
    pub(super) fn statement(&mut self, stmt: &Spanned<Statement>) -> Result<Vec<JavaLine>, EmitError> {
        let outer = std::mem::take(&mut self.pending);
        let lines = self.statement_lines(stmt);
        let mut out = std::mem::replace(&mut self.pending, outer);
        out.extend(lines?);
        Ok(out)
    }

    fn statement_lines(&mut self, stmt: &Spanned<Statement>) -> Result<Vec<JavaLine>, EmitError> {
        let line = match &stmt.node {
            Statement::Let(decl) => self.let_decl(decl)?,
            Statement::Assign(assign) => {
                let value_ty = self.value_type(&assign.value);
                let value = self.expr(&assign.value)?;
                let value = self.assigned_value(&assign.name, value, value_ty.as_ref());
                JavaLine::stmt(format!("{} = {};", assign.name, value))
            }
            Statement::Print(expr) => {
                let value = self.expr(expr)?;
                JavaLine::stmt(format!("System.out.println({value});"))
            }
            Statement::If(if_stmt) => self.if_stmt(if_stmt)?,
            Statement::While(while_stmt) => self.while_stmt(while_stmt)?,
            Statement::For(for_stmt) => self.for_stmt(for_stmt)?,
            Statement::Func(func) => return Err(EmitError::NestedFunction(func.name.clone())),
            Statement::Return(expr) => {
                if !self.symbols.in_function() {
                    return Err(EmitError::ReturnOutsideFunction);
                }
                let value = self.expr(expr)?;
                JavaLine::stmt(format!("return {value};"))
            }
            Statement::Block(block) => JavaBlock::new("", self.scoped_block(block)?).into_line(),
            Statement::Expr(expr) => {
                let mut lines = Vec::new();
                self.discarded_value(expr, &mut lines)?;
                return Ok(lines);
            }
        };
        Ok(vec![line])
    }

    /// Keep the calls of an expression statement whose value is thrown away.
    ///
    /// Java only accepts calls as expression statements, so each call is emitted on its own
    /// in evaluation order and the surrounding arithmetic is dropped.
    fn discarded_value(&mut self, expr: &Spanned<Expr>, lines: &mut Vec<JavaLine>) -> Result<(), EmitError> {
        match &expr.node {
            Expr::Paren(inner) => self.discarded_value(inner, lines),
            Expr::Binary(left, _, right) => {
                self.discarded_value(left, lines)?;
                self.discarded_value(right, lines)
            }
            Expr::Literal(Literal::List(items)) => {
                for item in items {
                    self.discarded_value(item, lines)?;
                }
                Ok(())
            }
            node if produces_call(node) => {
                let value = self.expr(expr)?;
                lines.append(&mut self.pending);
                lines.push(JavaLine::stmt(format!("{value};")));
                Ok(())
            }
            Expr::Chain(_) => {
                self.expr(expr)?;
                lines.append(&mut self.pending);
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn let_decl(&mut self, decl: &LetDecl) -> Result<JavaLine, EmitError> {
        let init_ty = decl.init.as_ref().and_then(|e| self.value_type(e));
        let init = decl.init.as_ref().map(|e| self.expr(e)).transpose()?;
        // Untyped declarations take the Java type their initializer gives `var`.
        let ty = match (&decl.ty, &decl.init) {
            (Some(ty), _) => Some(ty.clone()),
            (None, Some(_)) => init_ty.clone(),
            (None, None) => Some(TypeName::Integer),
        };
        self.symbols.define(Symbol::variable(&decl.name, ty, decl.name_span));

        let text = match (&decl.ty, init) {
            (Some(ty), Some(init)) => {
                let init = narrow(Some(ty), init, init_ty.as_ref());
                format!("{} {} = {};", java_type(ty), decl.name, init)
            }
            (Some(ty), None) => format!("{} {} = {};", java_type(ty), decl.name, java_default(ty)),
            (None, Some(init)) => format!("var {} = {};", decl.name, init),
            (None, None) => format!("int {} = 0;", decl.name),
        };
        Ok(JavaLine::Stmt(text))
    }

    /// Emit a condition, returning the chain writes it produced instead of queueing them.
    fn condition(&mut self, expr: &Spanned<Expr>) -> Result<(String, Vec<JavaLine>), EmitError> {
        let outer = std::mem::take(&mut self.pending);
        let text = self.expr(expr);
        let effects = std::mem::replace(&mut self.pending, outer);
        Ok((text?, effects))
    }

    /// A loop whose condition writes variables re-runs those writes before every test:
    /// `while (true) { <writes> if (!(cond)) { break; } <body> }`.
    fn while_stmt(&mut self, while_stmt: &WhileStmt) -> Result<JavaLine, EmitError> {
        let (condition, effects) = self.condition(&while_stmt.condition)?;
        let body = self.scoped_block(&while_stmt.body)?;
        if effects.is_empty() {
            return Ok(JavaBlock::new(format!("while ({condition})"), body).into_line());
        }

        let mut lines = effects;
        lines.push(JavaBlock::new(format!("if (!({condition}))"), vec![JavaLine::stmt("break;")]).into_line());
        lines.extend(body);
        Ok(JavaBlock::new("while (true)", lines).into_line())
    }

    fn if_stmt(&mut self, if_stmt: &IfStmt) -> Result<JavaLine, EmitError> {
        self.if_chain(&if_stmt.branches, if_stmt.else_block.as_ref(), None)
    }

    /// Emit `branches` as one `if` / `else if` / `else` chain.
    ///
    /// Writes from the first condition run before the statement. When a later condition writes
    /// variables, the rest of the chain moves into an `else` arm that performs those writes first,
    /// so they only happen once the earlier conditions have failed. `first` is a first condition
    /// already emitted by the caller.
    fn if_chain(
        &mut self,
        branches: &[IfBranch],
        else_block: Option<&Block>,
        mut first: Option<String>,
    ) -> Result<JavaLine, EmitError> {
        let mut arms = Vec::with_capacity(branches.len() + 1);
        for (i, branch) in branches.iter().enumerate() {
            let condition = match first.take() {
                Some(condition) => condition,
                None if i == 0 => self.expr(&branch.condition)?,
                None => {
                    let (condition, mut effects) = self.condition(&branch.condition)?;
                    if !effects.is_empty() {
                        effects.push(self.if_chain(&branches[i..], else_block, Some(condition))?);
                        arms.push(BlockArm {
                            header: "else".to_string(),
                            body: effects,
                        });
                        return Ok(JavaBlock { arms }.into_line());
                    }
                    condition
                }
            };
            let body = self.scoped_block(&branch.body)?;
            let keyword = if i == 0 { "if" } else { "else if" };
            arms.push(BlockArm {
                header: format!("{keyword} ({condition})"),
                body,
            });
        }
        if let Some(else_block) = else_block {
            arms.push(BlockArm {
                header: "else".to_string(),
                body: self.scoped_block(else_block)?,
            });
        }
        Ok(JavaBlock { arms }.into_line())
    }

    fn for_stmt(&mut self, for_stmt: &ForStmt) -> Result<JavaLine, EmitError> {
        self.symbols.enter_scope(ScopeKind::Loop);
        self.symbols.define(Symbol::variable(
            &for_stmt.var,
            Some(TypeName::Integer),
            for_stmt.var_span,
        ));

        let start = self.expr(&for_stmt.start)?;
        let end = self.expr(&for_stmt.end)?;
        let step = match &for_stmt.step {
            Some(step) => self.expr(step)?,
            None => ForStmt::DEFAULT_STEP.to_string(),
        };
        let body = self.block_lines(&for_stmt.body)?;
        self.symbols.exit_scope()?;

        let var = &for_stmt.var;
        let header = format!("for (int {var} = {start}; {var} <= {end}; {var} += {step})");
        Ok(JavaBlock::new(header, body).into_line())
    }

    /// Emit a hoisted function as a `public static double` method.
    pub(super) fn function(&mut self, func: &FuncDef) -> Result<JavaLine, EmitError> {
        self.symbols.enter_scope(ScopeKind::Function);
        let params: Vec<String> = func
            .params
            .iter()
            .map(|p| {
                self.symbols
                    .define(Symbol::variable(&p.name, Some(p.ty.clone()), p.span));
                format!("{} {}", java_type(&p.ty), p.name)
            })
            .collect();

        let mut body = self.block_lines(&func.body)?;
        if completes_normally(&func.body) {
            body.push(JavaLine::stmt("return 0.0;"));
        }
        self.symbols.exit_scope()?;

        let header = format!("public static double {}({})", func.name, params.join(", "));
        Ok(JavaBlock::new(header, body).into_line())
    }

    /// Emit a block's statements in a new scope.
    fn scoped_block(&mut self, block: &Block) -> Result<Vec<JavaLine>, EmitError> {
        self.symbols.enter_scope(ScopeKind::Block);
        let lines = self.block_lines(block);
        self.symbols.exit_scope()?;
        lines
    }

    /// Emit a block's statements in the current scope.
    fn block_lines(&mut self, block: &Block) -> Result<Vec<JavaLine>, EmitError> {
        let mut lines = Vec::new();
        for stmt in &block.statements {
            lines.extend(self.statement(stmt)?);
        }
        Ok(lines)
    }
}

/// Whether control can fall off the end of a block, in the sense javac uses for missing returns.
fn completes_normally(block: &Block) -> bool {
    block.statements.iter().all(|stmt| match &stmt.node {
        Statement::Return(_) => false,
        Statement::If(if_stmt) => match &if_stmt.else_block {
            Some(else_block) => {
                if_stmt.branches.iter().any(|b| completes_normally(&b.body)) || completes_normally(else_block)
            }
            None => true,
        },
        Statement::Block(block) => completes_normally(block),
        Statement::While(while_stmt) => !is_literal_true(&while_stmt.condition.node),
        _ => true,
    })
}

fn is_literal_true(expr: &Expr) -> bool {
    match expr {
        Expr::Literal(Literal::Bool(b)) => *b,
        Expr::Paren(inner) => is_literal_true(&inner.node),
        _ => false,
    }
}

/// True when an expression leaves a call as its value (and so is a valid Java statement).
fn produces_call(expr: &Expr) -> bool {
    match expr {
        Expr::Call(_) => true,
        Expr::Chain(chain) => chain
            .links
            .last()
            .is_some_and(|l| l.op == ChainOp::Forward && matches!(l.stage.node, Expr::Call(_))),
        _ => false,
    }
}
