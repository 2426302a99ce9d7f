//! Builtin function vocabulary.
//!
//! FunLang ships two builtin functions, `MIN` and `SQRT`. They are registered in the global scope before any user
//! code is analyzed and never raise arity errors: the Java emitter applies fixed fallbacks instead.
//!
//! ## Examples
//! ```rust
//! use funlang_core::lang::builtins::{self, BuiltinFnId};
//!
//! assert_eq!(builtins::from_str("SQRT"), Some(BuiltinFnId::Sqrt));
//! assert_eq!(builtins::info_for(BuiltinFnId::Min).java, "Math.min");
//! ```

use super::registry::{LangItemInfo, Stability};

/// Stable identifier for builtin functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinFnId {
    Min,
    Sqrt,
}

/// Metadata for a builtin function.
#[derive(Debug, Clone, Copy)]
pub struct BuiltinFnInfo {
    pub item: LangItemInfo<BuiltinFnId>,
    /// Java library function the builtin lowers to.
    pub java: &'static str,
}

/// Registry of builtin functions.
pub const BUILTIN_FUNCTIONS: &[BuiltinFnInfo] = &[
    BuiltinFnInfo {
        item: LangItemInfo {
            id: BuiltinFnId::Min,
            canonical: "MIN",
            aliases: &[],
            description: "Minimum of two numbers (missing arguments default to 0).",
            stability: Stability::Stable,
        },
        java: "Math.min",
    },
    BuiltinFnInfo {
        item: LangItemInfo {
            id: BuiltinFnId::Sqrt,
            canonical: "SQRT",
            aliases: &[],
            description: "Square root of a number (any other arity evaluates to 0).",
            stability: Stability::Stable,
        },
        java: "Math.sqrt",
    },
];

/// Return the full metadata entry for a builtin.
pub fn info_for(id: BuiltinFnId) -> &'static BuiltinFnInfo {
    BUILTIN_FUNCTIONS
        .iter()
        .find(|b| b.item.id == id)
        .expect("INVARIANT: every BuiltinFnId has a registry entry")
}

/// Return the canonical spelling for a builtin.
pub fn as_str(id: BuiltinFnId) -> &'static str {
    info_for(id).item.canonical
}

/// Resolve a spelling to its builtin id.
pub fn from_str(name: &str) -> Option<BuiltinFnId> {
    BUILTIN_FUNCTIONS
        .iter()
        .find(|b| b.item.matches(name))
        .map(|b| b.item.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_round_trip() {
        for b in BUILTIN_FUNCTIONS {
            assert_eq!(from_str(b.item.canonical), Some(b.item.id));
            assert_eq!(as_str(b.item.id), b.item.canonical);
        }
    }

    #[test]
    fn builtin_names_are_upper_case_only() {
        assert_eq!(from_str("min"), None);
        assert_eq!(from_str("Sqrt"), None);
    }
}
