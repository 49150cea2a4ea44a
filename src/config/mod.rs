//! Resolution configuration.
//!
//! A [`StyleConfig`] bundles the four tables the resolver consults:
//!
//! - the alias registry (`p` → `padding`),
//! - the media table (`md` → `@media (min-width: 768px)`),
//! - the selector table for tokens inside statements (`:hover`),
//! - the selector table for props keyed by a selector name (`hover`, `directChild`).
//!
//! Configurations are built once and then shared read-only. The built-in
//! configuration is available process-wide through [`default_config`].
//!
//! # Example
//!
//! ```rust
//! use proper_style::config::StyleConfig;
//! use proper_style::registry::AliasEntry;
//!
//! let config = StyleConfig::builtin()
//!     .alias(AliasEntry::property("accent", "color").options(&[("brand", "#ff00aa")]))
//!     .media("tablet", "@media (min-width: 900px)");
//!
//! assert!(config.aliases().contains("accent"));
//! assert!(config.media_queries().contains("tablet"));
//! ```
//!
//! Configurations can also be extended from YAML, see [`StyleConfig::extend_from_yaml`].

mod error;
mod file;

use once_cell::sync::Lazy;

use crate::media::MediaTable;
use crate::registry::{AliasEntry, AliasRegistry};
use crate::selector::{SelectorKind, SelectorTable};

pub use error::ConfigError;

static DEFAULT: Lazy<StyleConfig> = Lazy::new(StyleConfig::builtin);

/// The shared built-in configuration.
pub fn default_config() -> &'static StyleConfig {
    &DEFAULT
}

/// Tables consulted during resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleConfig {
    pub(crate) aliases: AliasRegistry,
    pub(crate) media: MediaTable,
    pub(crate) selectors: SelectorTable,
    pub(crate) scoped: SelectorTable,
}

impl StyleConfig {
    /// A configuration with every table empty.
    pub fn empty() -> Self {
        Self {
            aliases: AliasRegistry::new(),
            media: MediaTable::new(),
            selectors: SelectorTable::new(),
            scoped: SelectorTable::new(),
        }
    }

    /// The built-in alias, media and selector tables.
    pub fn builtin() -> Self {
        Self {
            aliases: AliasRegistry::builtin(),
            media: MediaTable::builtin(),
            selectors: SelectorTable::builtin_tokens(),
            scoped: SelectorTable::builtin_props(),
        }
    }

    /// Creates a configuration from explicit tables.
    pub fn from_parts(
        aliases: AliasRegistry,
        media: MediaTable,
        selectors: SelectorTable,
        scoped: SelectorTable,
    ) -> Self {
        Self {
            aliases,
            media,
            selectors,
            scoped,
        }
    }

    /// Adds an alias, returning the updated configuration for chaining.
    pub fn alias(mut self, entry: AliasEntry) -> Self {
        self.aliases.insert(entry);
        self
    }

    /// Adds a media alias.
    pub fn media(mut self, alias: &str, query: &str) -> Self {
        self.media.insert(alias, query);
        self
    }

    /// Adds a selector usable both as a statement token and as a prop name.
    pub fn selector(mut self, name: &str, kind: SelectorKind) -> Self {
        self.selectors.insert(name, kind.clone());
        self.scoped.insert(name, kind);
        self
    }

    /// Adds a selector usable only as a prop name.
    pub fn scoped_selector(mut self, name: &str, kind: SelectorKind) -> Self {
        self.scoped.insert(name, kind);
        self
    }

    pub fn aliases(&self) -> &AliasRegistry {
        &self.aliases
    }

    pub fn media_queries(&self) -> &MediaTable {
        &self.media
    }

    /// Selectors recognized inside statements.
    pub fn selectors(&self) -> &SelectorTable {
        &self.selectors
    }

    /// Selectors recognized as prop names.
    pub fn scoped_selectors(&self) -> &SelectorTable {
        &self.scoped
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::builtin()
    }
}
