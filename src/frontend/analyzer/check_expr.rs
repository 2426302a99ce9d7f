//! Second pass: expressions, calls and chains.

use crate::frontend::ast::*;
use crate::frontend::symbols::SymbolKind;

use super::SemanticAnalyzer;

impl SemanticAnalyzer {
    pub(crate) fn check_expr(&mut self, expr: &Spanned<Expr>) {
        match &expr.node {
            Expr::Ident(name) => {
                if self.symbols.resolve(name).is_none() {
                    self.error(format!("Use of undeclared variable: {name}"));
                }
            }
            Expr::Literal(Literal::List(items)) => {
                for item in items {
                    self.check_expr(item);
                }
            }
            Expr::Literal(_) => {}
            Expr::Call(call) => self.check_call(call, 0),
            Expr::Binary(left, _, right) => {
                self.check_expr(left);
                self.check_expr(right);
            }
            Expr::Paren(inner) => self.check_expr(inner),
            Expr::Chain(chain) => self.check_chain(chain),
        }
    }

    /// Check a call. `injected` counts arguments a chain adds in front of the written ones.
    fn check_call(&mut self, call: &CallExpr, injected: usize) {
        let arity = match self.symbols.resolve(&call.name).map(|s| &s.kind) {
            None => {
                self.error(format!("Call to undefined function: {}", call.name));
                None
            }
            Some(SymbolKind::Variable { .. }) => {
                self.error(format!("Called name is not a function: {}", call.name));
                None
            }
            Some(SymbolKind::Function(info)) => info.arity(),
        };

        if let Some(expected) = arity {
            let got = call.args.len() + injected;
            if expected != got {
                self.error(format!(
                    "Function {} expects {} argument(s) but got {}",
                    call.name, expected, got
                ));
            }
        }

        for arg in &call.args {
            self.check_expr(arg);
        }
    }

    /// Check a `=>` / `<=>` chain.
    ///
    /// The accumulator is a variable when the head is a bare name, after a forward into a bare name, and after a
    /// bidirectional stage. A forward into a call produces an anonymous value.
    fn check_chain(&mut self, chain: &ChainExpr) {
        self.check_expr(&chain.head);
        let mut acc_is_var = matches!(chain.head.node, Expr::Ident(_));

        for link in &chain.links {
            match (link.op, &link.stage.node) {
                (ChainOp::Forward, Expr::Call(call)) => {
                    self.check_call(call, 1);
                    acc_is_var = false;
                }
                (ChainOp::Forward, Expr::Ident(target)) => {
                    match self.symbols.resolve(target).map(|s| s.is_function()) {
                        None => self.error(format!("Assignment to undeclared variable: {target}")),
                        Some(true) => {
                            self.error("Chain target must be a function call or a variable".to_string())
                        }
                        Some(false) => {}
                    }
                    acc_is_var = true;
                }
                (ChainOp::Forward, _) => {
                    self.error("Chain target must be a function call or a variable".to_string());
                    self.check_expr(&link.stage);
                    acc_is_var = false;
                }
                (ChainOp::Bidirectional, Expr::Call(call)) => {
                    if !acc_is_var {
                        self.error("Bidirectional pipe requires a variable on its left-hand side".to_string());
                    }
                    self.check_call(call, 1);
                }
                (ChainOp::Bidirectional, _) => {
                    self.error("Bidirectional pipe target must be a function call".to_string());
                    self.check_expr(&link.stage);
                }
            }
        }
    }
}
