use std::path::PathBuf;

/// Error returned when loading a configuration file fails.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config '{}': {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid YAML or does not match the schema.
    #[error("invalid config: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// An alias definition is inconsistent.
    #[error("invalid alias '{name}': {reason}")]
    InvalidAlias { name: String, reason: String },
}
