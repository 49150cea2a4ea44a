//! YAML configuration files.
//!
//! ```yaml
//! media:
//!   tablet: "@media (min-width: 900px)"
//!
//! aliases:
//!   accent:
//!     properties: [color]
//!     options: { brand: "#ff00aa" }
//!   badge:
//!     properties: [content]
//!     quoted: true
//!     scope: "&::after"
//! ```
//!
//! Both sections are optional. Definitions override built-ins of the same name.

use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use super::{ConfigError, StyleConfig};
use crate::registry::AliasEntry;

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    media: IndexMap<String, String>,
    #[serde(default)]
    aliases: IndexMap<String, AliasDef>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AliasDef {
    #[serde(default)]
    properties: Vec<String>,
    #[serde(default)]
    options: IndexMap<String, String>,
    #[serde(default)]
    quoted: bool,
    #[serde(default)]
    scope: Option<String>,
}

impl AliasDef {
    fn into_entry(self, name: &str) -> Result<AliasEntry, ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidAlias {
            name: name.to_string(),
            reason: reason.to_string(),
        };

        if self.properties.is_empty() {
            return Err(invalid("at least one property is required"));
        }
        if self.properties.iter().any(|p| p.trim().is_empty()) {
            return Err(invalid("property names cannot be empty"));
        }
        if self.scope.is_some() && !self.quoted {
            return Err(invalid("scope is only supported on quoted aliases"));
        }

        let entry = if self.quoted {
            let [property] = self.properties.as_slice() else {
                return Err(invalid("quoted aliases take exactly one property"));
            };
            AliasEntry::quoted(name, property.as_str(), self.scope.as_deref())
        } else {
            let properties: Vec<&str> = self.properties.iter().map(String::as_str).collect();
            AliasEntry::properties(name, &properties)
        };

        Ok(if self.options.is_empty() {
            entry
        } else {
            entry.option_table(&self.options)
        })
    }
}

fn parse(source: &str) -> Result<ConfigFile, ConfigError> {
    if source.trim().is_empty() {
        return Ok(ConfigFile::default());
    }
    Ok(serde_yaml::from_str(source)?)
}

impl StyleConfig {
    /// Applies a YAML document on top of this configuration.
    ///
    /// Nothing is applied if any definition is invalid.
    pub fn extend_from_yaml(&mut self, source: &str) -> Result<(), ConfigError> {
        let file = parse(source)?;

        let entries = file
            .aliases
            .into_iter()
            .map(|(name, def)| def.into_entry(&name))
            .collect::<Result<Vec<_>, _>>()?;

        for (alias, query) in file.media {
            tracing::debug!(%alias, %query, "registering media alias");
            self.media.insert(alias, query);
        }
        for entry in entries {
            tracing::debug!(alias = entry.name(), "registering alias");
            self.aliases.insert(entry);
        }
        Ok(())
    }

    /// Built-in configuration extended with a YAML document.
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let mut config = Self::builtin();
        config.extend_from_yaml(source)?;
        Ok(config)
    }

    /// Built-in configuration extended with the YAML file at `path`.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::declarations;

    #[test]
    fn test_empty_document() {
        let config = StyleConfig::from_yaml_str("").unwrap();
        assert_eq!(config, StyleConfig::builtin());
    }

    #[test]
    fn test_media_and_aliases() {
        let yaml = r##"
media:
  tablet: "@media (min-width: 900px)"
aliases:
  accent:
    properties: [color]
    options:
      brand: "#ff00aa"
  inlinePad:
    properties: [padding-inline-start, padding-inline-end]
"##;
        let config = StyleConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(config.media_queries().get("tablet"), Some("@media (min-width: 900px)"));
        assert_eq!(
            config.aliases().emit("accent", "brand"),
            Some(declarations! { "color" => "#ff00aa" })
        );
        assert_eq!(
            config.aliases().emit("inlinePad", "2px"),
            Some(declarations! {
                "padding-inline-start" => "2px",
                "padding-inline-end" => "2px",
            })
        );
    }

    #[test]
    fn test_quoted_scoped_alias() {
        let yaml = r#"
aliases:
  badge:
    properties: [content]
    quoted: true
    scope: "&::after"
"#;
        let config = StyleConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(
            config.aliases().emit("badge", "new"),
            Some(declarations! {
                "&::after" => declarations! { "content" => "\"new\"" },
            })
        );
    }

    #[test]
    fn test_override_builtin() {
        let yaml = "aliases:\n  p:\n    properties: [padding-block]\n";
        let config = StyleConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(
            config.aliases().emit("p", "4"),
            Some(declarations! { "padding-block" => "4" })
        );
    }

    #[test]
    fn test_missing_properties() {
        let err = StyleConfig::from_yaml_str("aliases:\n  x:\n    quoted: true\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidAlias { ref name, .. } if name == "x"));
    }

    #[test]
    fn test_quoted_with_two_properties() {
        let yaml = "aliases:\n  x:\n    properties: [a, b]\n    quoted: true\n";
        let err = StyleConfig::from_yaml_str(yaml).unwrap_err();
        assert!(err.to_string().contains("exactly one property"));
    }

    #[test]
    fn test_scope_requires_quoted() {
        let yaml = "aliases:\n  x:\n    properties: [a]\n    scope: \"&::after\"\n";
        assert!(matches!(
            StyleConfig::from_yaml_str(yaml),
            Err(ConfigError::InvalidAlias { .. })
        ));
    }

    #[test]
    fn test_invalid_definition_applies_nothing() {
        let yaml = r#"
media:
  tablet: "@media (min-width: 900px)"
aliases:
  ok:
    properties: [color]
  broken:
    properties: []
"#;
        let mut config = StyleConfig::builtin();
        assert!(config.extend_from_yaml(yaml).is_err());
        assert!(!config.aliases().contains("ok"));
        assert!(!config.media_queries().contains("tablet"));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = StyleConfig::from_yaml_str("colors: {}\n").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = StyleConfig::from_yaml_file("/definitely/not/here.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
