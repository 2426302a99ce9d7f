//! Shareable metadata for `funlang_core::lang` registries.
//!
//! The types here are lightweight and `Copy` so registries can live in `const` tables.

/// Describe the lifecycle status of a language vocabulary item.
///
/// ## Examples
/// ```rust
/// use funlang_core::lang::registry::Stability;
///
/// let s = Stability::Stable;
/// assert_eq!(format!("{s:?}"), "Stable");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Deprecated,
}

/// Shared metadata shape for registry-first vocabulary items.
///
/// Registries that need extra per-item data (operator precedence, Java spellings) wrap or extend this shape.
#[derive(Debug, Clone, Copy)]
pub struct LangItemInfo<Id> {
    pub id: Id,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub stability: Stability,
}

impl<Id: Copy> LangItemInfo<Id> {
    /// Return `true` if `spelling` is the canonical spelling or one of the aliases.
    pub fn matches(&self, spelling: &str) -> bool {
        let aliases: &[&str] = self.aliases;
        self.canonical == spelling || aliases.contains(&spelling)
    }
}
