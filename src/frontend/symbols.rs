//! Scope table for FunLang
//!
//! Tracks variables and functions in nested lexical scopes. Scopes live in an arena and point at their parent,
//! so entering and leaving a scope is O(1) and resolution walks parent links without recursion.

use std::collections::HashMap;

use crate::frontend::ast::{Span, TypeName};
use funlang_core::lang::builtins::{self, BUILTIN_FUNCTIONS, BuiltinFnId};

/// Unique identifier for symbols
pub type SymbolId = usize;

/// Errors raised by misuse of the scope stack.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScopeError {
    #[error("cannot exit the global scope")]
    ExitGlobalScope,
}

/// Scope table managing all named entities
#[derive(Debug)]
pub struct ScopeTable {
    symbols: Vec<Symbol>,
    scopes: Vec<Scope>,
    current_scope: usize,
}

impl Default for ScopeTable {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeTable {
    /// Create a table holding only the (empty) global scope.
    pub fn new() -> Self {
        Self {
            symbols: Vec::new(),
            scopes: vec![Scope::new(None, ScopeKind::Global)],
            current_scope: 0,
        }
    }

    /// Create a table with the builtin functions already defined in the global scope.
    pub fn with_builtins() -> Self {
        let mut table = Self::new();
        for info in BUILTIN_FUNCTIONS {
            table.define(Symbol::builtin(info.item.id));
        }
        table
    }

    pub fn enter_scope(&mut self, kind: ScopeKind) {
        let new_scope = Scope::new(Some(self.current_scope), kind);
        self.scopes.push(new_scope);
        self.current_scope = self.scopes.len() - 1;
    }

    /// Leave the innermost scope.
    ///
    /// ## Errors
    /// Returns [`ScopeError::ExitGlobalScope`] when the global scope is the innermost scope.
    pub fn exit_scope(&mut self) -> Result<(), ScopeError> {
        match self.scopes[self.current_scope].parent {
            Some(parent) => {
                self.current_scope = parent;
                Ok(())
            }
            None => Err(ScopeError::ExitGlobalScope),
        }
    }

    /// Insert a symbol into the innermost scope, replacing any same-named entry there.
    pub fn define(&mut self, mut symbol: Symbol) -> SymbolId {
        symbol.scope = self.current_scope;
        let id = self.symbols.len();
        self.scopes[self.current_scope].symbols.insert(symbol.name.clone(), id);
        self.symbols.push(symbol);
        id
    }

    /// Nearest enclosing definition of `name`.
    pub fn resolve(&self, name: &str) -> Option<&Symbol> {
        let mut scope_idx = self.current_scope;
        loop {
            if let Some(&id) = self.scopes[scope_idx].symbols.get(name) {
                return self.symbols.get(id);
            }
            match self.scopes[scope_idx].parent {
                Some(parent) => scope_idx = parent,
                None => return None,
            }
        }
    }

    /// Definition of `name` in the innermost scope only.
    pub fn resolve_in_current_scope(&self, name: &str) -> Option<&Symbol> {
        self.scopes[self.current_scope]
            .symbols
            .get(name)
            .and_then(|&id| self.symbols.get(id))
    }

    /// Variable `name` visible from the innermost scope without leaving the enclosing method body.
    ///
    /// The walk stops after the nearest function or global scope, so outer globals do not count
    /// from inside a function.
    pub fn resolve_local_variable(&self, name: &str) -> Option<&Symbol> {
        let mut scope_idx = self.current_scope;
        loop {
            let scope = &self.scopes[scope_idx];
            if let Some(symbol) = scope.symbols.get(name).and_then(|&id| self.symbols.get(id)) {
                if !symbol.is_function() {
                    return Some(symbol);
                }
            }
            match (scope.kind, scope.parent) {
                (ScopeKind::Function | ScopeKind::Global, _) | (_, None) => return None,
                (_, Some(parent)) => scope_idx = parent,
            }
        }
    }

    /// Function signature for `name`, if it resolves to a function.
    pub fn function(&self, name: &str) -> Option<&FunctionInfo> {
        match &self.resolve(name)?.kind {
            SymbolKind::Function(info) => Some(info),
            SymbolKind::Variable { .. } => None,
        }
    }

    pub fn current_scope_kind(&self) -> ScopeKind {
        self.scopes[self.current_scope].kind
    }

    /// Number of scopes between the innermost scope and the global scope.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut scope_idx = self.current_scope;
        while let Some(parent) = self.scopes[scope_idx].parent {
            depth += 1;
            scope_idx = parent;
        }
        depth
    }

    /// True if the innermost scope is inside a function body.
    pub fn in_function(&self) -> bool {
        let mut scope_idx = Some(self.current_scope);
        while let Some(idx) = scope_idx {
            if self.scopes[idx].kind == ScopeKind::Function {
                return true;
            }
            scope_idx = self.scopes[idx].parent;
        }
        false
    }

    /// Reset to the global scope (definitions made in inner scopes stay in the arena but become unreachable).
    pub fn rewind_to_global(&mut self) {
        self.current_scope = 0;
    }
}

#[derive(Debug)]
pub struct Scope {
    pub parent: Option<usize>,
    pub kind: ScopeKind,
    pub symbols: HashMap<String, SymbolId>,
}

impl Scope {
    pub fn new(parent: Option<usize>, kind: ScopeKind) -> Self {
        Self {
            parent,
            kind,
            symbols: HashMap::new(),
        }
    }
}

/// Kind of scope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeKind {
    Global,
    Function,
    Loop,
    Block,
}

#[derive(Debug, Clone)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    pub span: Span,
    pub scope: usize,
}

impl Symbol {
    pub fn variable(name: impl Into<String>, ty: Option<TypeName>, span: Span) -> Self {
        Self {
            name: name.into(),
            kind: SymbolKind::Variable { ty },
            span,
            scope: 0,
        }
    }

    pub fn function(name: impl Into<String>, params: Vec<(String, TypeName)>, span: Span) -> Self {
        Self {
            name: name.into(),
            kind: SymbolKind::Function(FunctionInfo {
                params: Some(params),
                builtin: None,
            }),
            span,
            scope: 0,
        }
    }

    pub fn builtin(id: BuiltinFnId) -> Self {
        Self {
            name: builtins::as_str(id).to_string(),
            kind: SymbolKind::Function(FunctionInfo {
                params: None,
                builtin: Some(id),
            }),
            span: Span::default(),
            scope: 0,
        }
    }

    pub fn is_function(&self) -> bool {
        matches!(self.kind, SymbolKind::Function(_))
    }
}

#[derive(Debug, Clone)]
pub enum SymbolKind {
    /// `ty` is `None` for untyped declarations.
    Variable { ty: Option<TypeName> },
    Function(FunctionInfo),
}

/// Function signature
///
/// Builtins have no fixed parameter list (`params` is `None`) and accept any number of arguments.
#[derive(Debug, Clone)]
pub struct FunctionInfo {
    pub params: Option<Vec<(String, TypeName)>>,
    pub builtin: Option<BuiltinFnId>,
}

impl FunctionInfo {
    /// Declared type of the parameter at `index`, if the signature is known.
    pub fn param_type(&self, index: usize) -> Option<&TypeName> {
        self.params.as_ref()?.get(index).map(|(_, ty)| ty)
    }

    /// Declared parameter count, or `None` for builtins.
    pub fn arity(&self) -> Option<usize> {
        self.params.as_ref().map(Vec::len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(name: &str) -> Symbol {
        Symbol::variable(name, None, Span::default())
    }

    #[test]
    fn new_table_has_only_global_scope() {
        let mut table = ScopeTable::new();
        assert_eq!(table.depth(), 0);
        assert_eq!(table.current_scope_kind(), ScopeKind::Global);
        assert_eq!(table.exit_scope(), Err(ScopeError::ExitGlobalScope));
    }

    #[test]
    fn builtins_are_predefined() {
        let table = ScopeTable::with_builtins();
        let min = table.function("MIN").expect("MIN defined");
        assert_eq!(min.builtin, Some(BuiltinFnId::Min));
        assert_eq!(min.arity(), None);
        assert!(table.resolve("SQRT").is_some_and(Symbol::is_function));
    }

    #[test]
    fn resolve_walks_outward() {
        let mut table = ScopeTable::new();
        table.define(var("x"));
        table.enter_scope(ScopeKind::Block);
        table.enter_scope(ScopeKind::Loop);
        assert!(table.resolve("x").is_some());
        assert!(table.resolve_in_current_scope("x").is_none());
        assert_eq!(table.depth(), 2);
    }

    #[test]
    fn local_variable_lookup_stops_at_method_boundary() {
        let mut table = ScopeTable::new();
        table.define(var("g"));
        table.enter_scope(ScopeKind::Block);
        table.enter_scope(ScopeKind::Loop);
        assert!(table.resolve_local_variable("g").is_some());

        table.rewind_to_global();
        table.define(Symbol::function("f", vec![], Span::default()));
        table.enter_scope(ScopeKind::Function);
        table.define(var("p"));
        table.enter_scope(ScopeKind::Block);
        assert!(table.resolve_local_variable("p").is_some());
        assert!(table.resolve_local_variable("g").is_none());
        assert!(table.resolve_local_variable("f").is_none());
    }

    #[test]
    fn inner_definitions_disappear_on_exit() {
        let mut table = ScopeTable::new();
        table.enter_scope(ScopeKind::Block);
        table.define(var("tmp"));
        assert!(table.resolve("tmp").is_some());
        table.exit_scope().unwrap();
        assert!(table.resolve("tmp").is_none());
    }

    #[test]
    fn define_overwrites_in_same_scope() {
        let mut table = ScopeTable::new();
        table.define(var("x"));
        table.define(Symbol::variable("x", Some(TypeName::Decimal), Span::default()));
        let SymbolKind::Variable { ty } = &table.resolve("x").unwrap().kind else {
            panic!("expected variable");
        };
        assert_eq!(ty, &Some(TypeName::Decimal));
    }

    #[test]
    fn shadowing_prefers_innermost() {
        let mut table = ScopeTable::new();
        table.define(var("x"));
        table.enter_scope(ScopeKind::Function);
        table.define(Symbol::function("x", vec![], Span::default()));
        assert!(table.resolve("x").unwrap().is_function());
        assert!(table.in_function());
        table.exit_scope().unwrap();
        assert!(!table.resolve("x").unwrap().is_function());
        assert!(!table.in_function());
    }

    #[test]
    fn function_param_types_are_indexed() {
        let mut table = ScopeTable::new();
        table.define(Symbol::function(
            "f",
            vec![("a".into(), TypeName::Integer), ("b".into(), TypeName::Decimal)],
            Span::default(),
        ));
        let f = table.function("f").unwrap();
        assert_eq!(f.arity(), Some(2));
        assert_eq!(f.param_type(1), Some(&TypeName::Decimal));
        assert_eq!(f.param_type(2), None);
    }
}
