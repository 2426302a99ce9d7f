//! Second pass: statements and scopes.

use std::collections::HashSet;

use crate::frontend::ast::*;
use crate::frontend::symbols::{ScopeKind, Symbol};

use super::SemanticAnalyzer;

impl SemanticAnalyzer {
    /// Check one statement. `top_level` is true only for statements directly in the program.
    pub(crate) fn check_statement(&mut self, stmt: &Spanned<Statement>, top_level: bool) {
        match &stmt.node {
            Statement::Let(decl) => self.check_let(decl),
            Statement::Assign(assign) => {
                if self.symbols.resolve(&assign.name).is_none() {
                    self.error(format!("Assignment to undeclared variable: {}", assign.name));
                }
                self.check_expr(&assign.value);
            }
            Statement::Print(expr) | Statement::Expr(expr) => self.check_expr(expr),
            Statement::If(if_stmt) => {
                for branch in &if_stmt.branches {
                    self.check_expr(&branch.condition);
                    self.check_scoped_block(&branch.body);
                }
                if let Some(else_block) = &if_stmt.else_block {
                    self.check_scoped_block(else_block);
                }
            }
            Statement::While(while_stmt) => {
                self.check_expr(&while_stmt.condition);
                self.check_scoped_block(&while_stmt.body);
            }
            Statement::For(for_stmt) => self.check_for(for_stmt),
            Statement::Func(func) => {
                if !top_level {
                    self.error(format!("Function definitions are only allowed at top level: {}", func.name));
                }
                self.check_func(func);
            }
            Statement::Return(expr) => {
                if !self.symbols.in_function() {
                    self.error("Return statement outside of function".to_string());
                }
                self.check_expr(expr);
            }
            Statement::Block(block) => self.check_scoped_block(block),
        }
    }

    /// Locals may not hide another local of the same method body (Java rejects it);
    /// reuse across sibling blocks is fine.
    fn check_let(&mut self, decl: &LetDecl) {
        if let Some(init) = &decl.init {
            self.check_expr(init);
        }
        if self.symbols.resolve_in_current_scope(&decl.name).is_some()
            || self.symbols.resolve_local_variable(&decl.name).is_some()
        {
            self.error(format!("Variable already declared in this scope: {}", decl.name));
        } else {
            self.symbols
                .define(Symbol::variable(&decl.name, decl.ty.clone(), decl.name_span));
        }
    }

    fn check_for(&mut self, for_stmt: &ForStmt) {
        self.symbols.enter_scope(ScopeKind::Loop);

        if self.symbols.resolve_in_current_scope(&for_stmt.var).is_some() {
            self.error(format!("Loop variable already declared: {}", for_stmt.var));
        } else {
            self.symbols
                .define(Symbol::variable(&for_stmt.var, Some(TypeName::Integer), for_stmt.var_span));
        }

        self.check_expr(&for_stmt.start);
        self.check_expr(&for_stmt.end);
        if let Some(step) = &for_stmt.step {
            self.check_expr(step);
        }
        self.check_block_statements(&for_stmt.body);

        self.leave_scope();
    }

    fn check_func(&mut self, func: &FuncDef) {
        self.symbols.enter_scope(ScopeKind::Function);

        let mut seen = HashSet::new();
        for param in &func.params {
            if !seen.insert(param.name.as_str()) {
                self.error(format!("Duplicate parameter name in function {}: {}", func.name, param.name));
            }
            self.symbols
                .define(Symbol::variable(&param.name, Some(param.ty.clone()), param.span));
        }
        self.check_block_statements(&func.body);

        self.leave_scope();
    }

    /// Check a block in a new scope of its own.
    fn check_scoped_block(&mut self, block: &Block) {
        self.symbols.enter_scope(ScopeKind::Block);
        self.check_block_statements(block);
        self.leave_scope();
    }

    /// Check a block's statements in the current scope.
    fn check_block_statements(&mut self, block: &Block) {
        for stmt in &block.statements {
            self.check_statement(stmt, false);
        }
    }
}
