//! Media aliases.
//!
//! A statement such as `@md=block` scopes its fragment under the query text
//! registered for `md`. The built-in breakpoints are mobile-first
//! (`min-width`), plus color-scheme, print and motion queries.
//!
//! | Alias | Query |
//! |-------|-------|
//! | `sm` | `@media (min-width: 640px)` |
//! | `md` | `@media (min-width: 768px)` |
//! | `lg` | `@media (min-width: 1024px)` |
//! | `xl` | `@media (min-width: 1280px)` |
//! | `2xl` | `@media (min-width: 1536px)` |
//! | `dark` | `@media (prefers-color-scheme: dark)` |
//! | `light` | `@media (prefers-color-scheme: light)` |
//! | `print` | `@media print` |
//! | `motion` | `@media (prefers-reduced-motion: no-preference)` |

use indexmap::IndexMap;

use crate::declaration::Declarations;

const BREAKPOINTS: &[(&str, u32)] = &[("sm", 640), ("md", 768), ("lg", 1024), ("xl", 1280), ("2xl", 1536)];

/// Media alias → media query text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaTable {
    entries: IndexMap<String, String>,
}

impl MediaTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// The built-in aliases listed in the module docs.
    pub fn builtin() -> Self {
        let mut table = Self::new();
        for (alias, width) in BREAKPOINTS {
            table.insert(*alias, format!("@media (min-width: {}px)", width));
        }
        table.insert("dark", "@media (prefers-color-scheme: dark)");
        table.insert("light", "@media (prefers-color-scheme: light)");
        table.insert("print", "@media print");
        table.insert("motion", "@media (prefers-reduced-motion: no-preference)");
        table
    }

    /// Registers an alias, replacing any previous query.
    pub fn insert(&mut self, alias: impl Into<String>, query: impl Into<String>) {
        self.entries.insert(alias.into(), query.into());
    }

    /// Builder form of [`MediaTable::insert`].
    pub fn with(mut self, alias: impl Into<String>, query: impl Into<String>) -> Self {
        self.insert(alias, query);
        self
    }

    /// Query text for `alias`.
    pub fn get(&self, alias: &str) -> Option<&str> {
        self.entries.get(alias).map(String::as_str)
    }

    pub fn contains(&self, alias: &str) -> bool {
        self.entries.contains_key(alias)
    }

    /// All aliases, in registration order.
    pub fn aliases(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Wraps `rule` under the query for `alias`. `None` if the alias is unknown.
    pub fn wrap(&self, alias: &str, rule: Declarations) -> Option<Declarations> {
        self.get(alias).map(|query| rule.wrap(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declarations;

    #[test]
    fn test_builtin_breakpoints() {
        let table = MediaTable::builtin();
        assert_eq!(table.get("md"), Some("@media (min-width: 768px)"));
        assert_eq!(table.get("2xl"), Some("@media (min-width: 1536px)"));
        assert_eq!(table.get("dark"), Some("@media (prefers-color-scheme: dark)"));
        assert_eq!(table.len(), 9);
    }

    #[test]
    fn test_wrap() {
        let table = MediaTable::builtin();
        assert_eq!(
            table.wrap("md", declarations! { "display" => "block" }),
            Some(declarations! {
                "@media (min-width: 768px)" => declarations! { "display" => "block" },
            })
        );
        assert_eq!(table.wrap("tablet", declarations! { "display" => "block" }), None);
    }

    #[test]
    fn test_override_keeps_order() {
        let table = MediaTable::builtin().with("sm", "@media (min-width: 600px)");
        assert_eq!(table.aliases().next(), Some("sm"));
        assert_eq!(table.get("sm"), Some("@media (min-width: 600px)"));
    }
}
