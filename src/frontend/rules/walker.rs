//! Pre-order traversal that drives a single [`Rule`].

use super::{DeclaredNames, Rule, RuleContext};
use crate::frontend::ast::{Block, ChainOp, Expr, Literal, Program, Spanned, Statement};
use crate::frontend::diagnostics::LineIndex;
use crate::frontend::sink::DiagnosticSink;

pub(super) struct Walker<'a> {
    sink: &'a mut DiagnosticSink,
    positions: &'a LineIndex,
    declared: DeclaredNames,
}

impl<'a> Walker<'a> {
    pub(super) fn new(sink: &'a mut DiagnosticSink, positions: &'a LineIndex) -> Self {
        Self {
            sink,
            positions,
            declared: DeclaredNames::new(),
        }
    }

    fn cx(&mut self) -> RuleContext<'_> {
        RuleContext {
            sink: &mut *self.sink,
            positions: self.positions,
            declared: &self.declared,
        }
    }

    pub(super) fn run(mut self, rule: &mut dyn Rule, program: &Program) {
        rule.init(&mut self.cx());
        for stmt in &program.statements {
            self.statement(rule, stmt);
        }
        rule.finish(&mut self.cx());
    }

    fn block(&mut self, rule: &mut dyn Rule, block: &Block) {
        for stmt in &block.statements {
            self.statement(rule, stmt);
        }
    }

    fn statement(&mut self, rule: &mut dyn Rule, stmt: &Spanned<Statement>) {
        match &stmt.node {
            Statement::Let(decl) => {
                rule.on_let_decl(decl, stmt.span, &mut self.cx());
                if let Some(init) = &decl.init {
                    self.expr(rule, init);
                }
                self.declared.declare(&decl.name);
            }
            Statement::Assign(assign) => {
                rule.on_assignment(&assign.name, assign.name_span, &mut self.cx());
                self.expr(rule, &assign.value);
            }
            Statement::Print(expr) => {
                rule.on_print(expr, &mut self.cx());
                self.expr(rule, expr);
            }
            Statement::If(if_stmt) => {
                rule.on_if(if_stmt, stmt.span, &mut self.cx());
                for branch in &if_stmt.branches {
                    self.expr(rule, &branch.condition);
                    self.block(rule, &branch.body);
                }
                if let Some(else_block) = &if_stmt.else_block {
                    self.block(rule, else_block);
                }
            }
            Statement::While(while_stmt) => {
                self.expr(rule, &while_stmt.condition);
                self.block(rule, &while_stmt.body);
            }
            Statement::For(for_stmt) => {
                self.declared.declare(&for_stmt.var);
                self.expr(rule, &for_stmt.start);
                self.expr(rule, &for_stmt.end);
                if let Some(step) = &for_stmt.step {
                    self.expr(rule, step);
                }
                self.block(rule, &for_stmt.body);
            }
            Statement::Func(func) => {
                for param in &func.params {
                    self.declared.declare(&param.name);
                }
                self.block(rule, &func.body);
            }
            Statement::Return(expr) | Statement::Expr(expr) => self.expr(rule, expr),
            Statement::Block(block) => self.block(rule, block),
        }
    }

    fn expr(&mut self, rule: &mut dyn Rule, expr: &Spanned<Expr>) {
        match &expr.node {
            Expr::Ident(name) => rule.on_identifier(name, expr.span, &mut self.cx()),
            Expr::Literal(Literal::List(items)) => {
                for item in items {
                    self.expr(rule, item);
                }
            }
            Expr::Literal(_) => {}
            Expr::Call(call) => {
                for arg in &call.args {
                    self.expr(rule, arg);
                }
            }
            Expr::Binary(left, _, right) => {
                self.expr(rule, left);
                self.expr(rule, right);
            }
            Expr::Paren(inner) => self.expr(rule, inner),
            Expr::Chain(chain) => {
                self.expr(rule, &chain.head);
                for link in &chain.links {
                    match (&link.op, &link.stage.node) {
                        (ChainOp::Forward, Expr::Ident(target)) => {
                            rule.on_assignment(target, link.stage.span, &mut self.cx());
                        }
                        _ => self.expr(rule, &link.stage),
                    }
                }
            }
        }
    }
}
