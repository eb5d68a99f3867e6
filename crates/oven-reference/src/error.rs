//! Error types for dialect references.

/// Error resolving a dialect profile.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ReferenceError {
    /// No profile is registered under the requested name.
    #[error("Dialect profile not found: {0}")]
    NotFound(String),
}

/// Error loading a dialect configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// The configured base profile could not be resolved.
    #[error(transparent)]
    Reference(#[from] ReferenceError),
}
