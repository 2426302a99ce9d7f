//! FunLang type names to Java types.

use crate::frontend::ast::TypeName;
use funlang_core::lang::types;

/// Java spelling of a declared type. Every list is `double[]`.
pub fn java_type(ty: &TypeName) -> &'static str {
    types::info_for(ty.id()).java
}

/// Zero value used for a typed declaration without an initializer.
pub fn java_default(ty: &TypeName) -> &'static str {
    types::info_for(ty.id()).java_default
}

/// Check that `name` can be used as a Java class name.
pub fn is_java_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
}
