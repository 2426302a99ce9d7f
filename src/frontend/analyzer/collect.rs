//! First pass: register top-level functions in the global scope.

use crate::frontend::ast::*;
use crate::frontend::symbols::Symbol;

use super::SemanticAnalyzer;

impl SemanticAnalyzer {
    pub(crate) fn collect_functions(&mut self, program: &Program) {
        for stmt in &program.statements {
            let Statement::Func(func) = &stmt.node else {
                continue;
            };
            if self.symbols.resolve(&func.name).is_some() {
                self.error(format!("Duplicate function name: {}", func.name));
                continue;
            }
            let params = func.params.iter().map(|p| (p.name.clone(), p.ty.clone())).collect();
            self.symbols.define(Symbol::function(&func.name, params, func.name_span));
        }
    }
}
