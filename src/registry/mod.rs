//! Alias registry: short prop names mapped to canonical declarations.
//!
//! Each [`AliasEntry`] pairs an alias (`p`, `bg`, `flexRow`) with an
//! [`Emitter`] that turns a resolved value into a declaration fragment, plus
//! an optional table of symbolic values.
//!
//! # Value resolution
//!
//! Given an alias and a raw value:
//!
//! 1. If the entry has an options table containing the raw value, the mapped
//!    literal is used (`display` + `hidden` → `none`).
//! 2. Otherwise, if the entry is a preset, the raw value is split on commas
//!    into positional sub-values (`flexRow` + `between,center`).
//! 3. Otherwise the raw value passes through unchanged, so any literal CSS
//!    value is accepted alongside the symbolic ones.
//!
//! An unknown alias yields nothing. Callers treat that as "not a style prop"
//! rather than an error, since element props routinely include DOM attributes.
//!
//! # Example
//!
//! ```rust
//! use proper_style::registry::AliasRegistry;
//!
//! let registry = AliasRegistry::builtin();
//! let fragment = registry.emit("display", "hidden").unwrap();
//! assert_eq!(fragment.get("display").and_then(|v| v.as_text()), Some("none"));
//!
//! assert!(registry.emit("onClick", "x").is_none());
//! ```

mod emitter;
mod props;
pub mod units;

use indexmap::IndexMap;

use crate::declaration::Declarations;

pub use emitter::{EmitInput, Emitter};

/// Symbolic value name → literal CSS value.
pub type Options = IndexMap<String, String>;

/// A single alias definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasEntry {
    name: String,
    emitter: Emitter,
    options: Option<Options>,
    preset: bool,
}

impl AliasEntry {
    /// Creates an entry with an arbitrary emitter.
    pub fn new(name: impl Into<String>, emitter: Emitter) -> Self {
        Self {
            name: name.into(),
            emitter,
            options: None,
            preset: false,
        }
    }

    /// Alias emitting a single CSS property.
    pub fn property(name: impl Into<String>, property: impl Into<String>) -> Self {
        Self::new(name, Emitter::Properties(vec![property.into()]))
    }

    /// Alias emitting several CSS properties with the same value.
    pub fn properties(name: impl Into<String>, properties: &[&str]) -> Self {
        Self::new(
            name,
            Emitter::Properties(properties.iter().map(|p| p.to_string()).collect()),
        )
    }

    /// Alias emitting a double-quoted value, optionally inside a selector scope.
    pub fn quoted(name: impl Into<String>, property: impl Into<String>, scope: Option<&str>) -> Self {
        Self::new(
            name,
            Emitter::Quoted {
                property: property.into(),
                scope: scope.map(str::to_string),
            },
        )
    }

    /// Flex preset alias taking positional sub-values.
    ///
    /// `direction` fixes `flexDirection`; `direction_slot` exposes it as a
    /// third positional sub-value instead.
    pub fn flex_preset(name: impl Into<String>, direction: Option<&str>, direction_slot: bool) -> Self {
        let mut entry = Self::new(
            name,
            Emitter::FlexPreset {
                direction: direction.map(str::to_string),
                direction_slot,
            },
        );
        entry.preset = true;
        entry
    }

    /// Adds symbolic values. Later keys override earlier ones.
    pub fn options(mut self, pairs: &[(&str, &str)]) -> Self {
        let table = self.options.get_or_insert_with(Options::new);
        for (key, value) in pairs {
            table.insert(key.to_string(), value.to_string());
        }
        self
    }

    /// Adds every value of a shared options table. Later keys override earlier ones.
    pub fn option_table(mut self, options: &Options) -> Self {
        let table = self.options.get_or_insert_with(Options::new);
        for (key, value) in options {
            table.insert(key.clone(), value.clone());
        }
        self
    }

    /// Marks the entry as a preset taking comma-separated positional values.
    pub fn preset(mut self, preset: bool) -> Self {
        self.preset = preset;
        self
    }

    /// The alias name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The emitter.
    pub fn emitter(&self) -> &Emitter {
        &self.emitter
    }

    /// The symbolic value table, if any.
    pub fn option_values(&self) -> Option<&Options> {
        self.options.as_ref()
    }

    /// Whether this entry splits its value into positional sub-values.
    pub fn is_preset(&self) -> bool {
        self.preset
    }

    /// Looks up a symbolic value.
    pub fn substitute(&self, raw: &str) -> Option<&str> {
        self.options
            .as_ref()
            .and_then(|table| table.get(raw))
            .map(String::as_str)
    }

    /// Resolves `raw` and emits the declaration fragment.
    pub fn emit(&self, raw: &str) -> Declarations {
        if let Some(literal) = self.substitute(raw) {
            return self.emitter.emit(EmitInput::Scalar(literal));
        }
        if self.preset {
            return self
                .emitter
                .emit(EmitInput::Positional(raw.split(',').collect()));
        }
        self.emitter.emit(EmitInput::Scalar(raw))
    }
}

/// Registry of aliases, looked up by name.
///
/// Built once and then only read. Inserting an alias that already exists
/// replaces its definition but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasRegistry {
    entries: IndexMap<String, AliasEntry>,
}

impl AliasRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Creates a registry holding the built-in alias table.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.extend(props::builtin_entries());
        registry
    }

    /// Registers an alias, replacing any previous definition.
    pub fn insert(&mut self, entry: AliasEntry) {
        self.entries.insert(entry.name.clone(), entry);
    }

    /// Builder form of [`AliasRegistry::insert`].
    pub fn with(mut self, entry: AliasEntry) -> Self {
        self.insert(entry);
        self
    }

    /// Gets an alias by name.
    pub fn get(&self, name: &str) -> Option<&AliasEntry> {
        self.entries.get(name)
    }

    /// Checks if an alias exists.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// All alias names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|s| s.as_str())
    }

    /// Number of registered aliases.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves `raw` through the alias named `alias`.
    ///
    /// Returns `None` when the alias is unknown.
    pub fn emit(&self, alias: &str, raw: &str) -> Option<Declarations> {
        self.get(alias).map(|entry| entry.emit(raw))
    }
}

impl Extend<AliasEntry> for AliasRegistry {
    fn extend<I: IntoIterator<Item = AliasEntry>>(&mut self, iter: I) {
        for entry in iter {
            self.insert(entry);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declarations;

    #[test]
    fn test_registry_new() {
        let registry = AliasRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.emit("p", "1rem").is_none());
    }

    #[test]
    fn test_option_substitution() {
        let registry = AliasRegistry::builtin();
        assert_eq!(
            registry.emit("display", "flex"),
            Some(declarations! { "display" => "flex" })
        );
        assert_eq!(
            registry.emit("display", "hidden"),
            Some(declarations! { "display" => "none" })
        );
    }

    #[test]
    fn test_passthrough() {
        let registry = AliasRegistry::builtin();
        assert_eq!(
            registry.emit("display", "inline-grid"),
            Some(declarations! { "display" => "inline-grid" })
        );
        assert_eq!(
            registry.emit("p", "1rem"),
            Some(declarations! { "padding" => "1rem" })
        );
    }

    #[test]
    fn test_empty_value_is_emitted() {
        let registry = AliasRegistry::builtin();
        assert_eq!(
            registry.emit("color", ""),
            Some(declarations! { "color" => "" })
        );
    }

    #[test]
    fn test_multi_property_alias() {
        let registry = AliasRegistry::builtin();
        assert_eq!(
            registry.emit("px", "4"),
            Some(declarations! { "padding-left" => "1rem", "padding-right" => "1rem" })
        );
    }

    #[test]
    fn test_preset_split() {
        let registry = AliasRegistry::builtin();
        assert_eq!(
            registry.emit("flexRow", "between,center"),
            Some(declarations! {
                "display" => "flex",
                "justifyContent" => "space-between",
                "alignItems" => "center",
            })
        );
    }

    #[test]
    fn test_preset_with_empty_value() {
        let registry = AliasRegistry::builtin();
        assert_eq!(
            registry.emit("flexRow", ""),
            Some(declarations! { "display" => "flex" })
        );
    }

    #[test]
    fn test_content_before_is_scoped() {
        let registry = AliasRegistry::builtin();
        assert_eq!(
            registry.emit("contentBefore", "hi"),
            Some(declarations! {
                "&::before" => declarations! { "content" => "\"hi\"" },
            })
        );
    }

    #[test]
    fn test_later_definition_wins() {
        let registry = AliasRegistry::builtin();
        // `visibility` is defined twice; the later definition has no options.
        let entry = registry.get("visibility").unwrap();
        assert!(entry.option_values().is_none());
    }

    #[test]
    fn test_insert_replaces_but_keeps_position() {
        let registry = AliasRegistry::new()
            .with(AliasEntry::property("a", "x"))
            .with(AliasEntry::property("b", "y"))
            .with(AliasEntry::property("a", "z"));

        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, vec!["a", "b"]);
        assert_eq!(registry.emit("a", "1"), Some(declarations! { "z" => "1" }));
    }

    #[test]
    fn test_options_later_keys_override() {
        let entry = AliasEntry::property("w", "width")
            .options(&[("full", "100%")])
            .options(&[("full", "100vw")]);
        assert_eq!(entry.substitute("full"), Some("100vw"));
    }
}
