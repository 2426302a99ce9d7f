//! Builtin type-name vocabulary.
//!
//! FunLang has five type names. Each carries the Java spelling and zero value the emitter uses.
//!
//! ## Notes
//! - Every list type degrades to `double[]` regardless of its element type.
//! - Type names are contextual: they are plain identifiers outside type positions.
//!
//! ## Examples
//! ```rust
//! use funlang_core::lang::types::{self, TypeNameId};
//!
//! assert_eq!(types::from_str("decimal"), Some(TypeNameId::Decimal));
//! assert_eq!(types::info_for(TypeNameId::Text).java, "String");
//! ```

/// Stable identifier for builtin type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeNameId {
    Integer,
    Decimal,
    Text,
    Boolean,
    List,
}

/// Metadata for a builtin type name.
#[derive(Debug, Clone, Copy)]
pub struct TypeNameInfo {
    pub id: TypeNameId,
    pub canonical: &'static str,
    /// Java type the emitter maps this type to.
    pub java: &'static str,
    /// Java expression used when a typed declaration has no initializer.
    pub java_default: &'static str,
}

/// Registry of builtin type names.
pub const TYPE_NAMES: &[TypeNameInfo] = &[
    TypeNameInfo {
        id: TypeNameId::Integer,
        canonical: "integer",
        java: "int",
        java_default: "0",
    },
    TypeNameInfo {
        id: TypeNameId::Decimal,
        canonical: "decimal",
        java: "double",
        java_default: "0.0",
    },
    TypeNameInfo {
        id: TypeNameId::Text,
        canonical: "text",
        java: "String",
        java_default: "\"\"",
    },
    TypeNameInfo {
        id: TypeNameId::Boolean,
        canonical: "boolean",
        java: "boolean",
        java_default: "false",
    },
    TypeNameInfo {
        id: TypeNameId::List,
        canonical: "list",
        java: "double[]",
        java_default: "new double[0]",
    },
];

/// Return the full metadata entry for a type name.
pub fn info_for(id: TypeNameId) -> &'static TypeNameInfo {
    TYPE_NAMES
        .iter()
        .find(|t| t.id == id)
        .expect("INVARIANT: every TypeNameId has a registry entry")
}

/// Return the canonical spelling for a type name.
pub fn as_str(id: TypeNameId) -> &'static str {
    info_for(id).canonical
}

/// Resolve a spelling to its type-name id.
pub fn from_str(s: &str) -> Option<TypeNameId> {
    TYPE_NAMES.iter().find(|t| t.canonical == s).map(|t| t.id)
}
