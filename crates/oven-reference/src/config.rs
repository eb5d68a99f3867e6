//! TOML dialect configuration.
//!
//! Derives a [`Reference`] from a built-in profile with per-tag overrides:
//!
//! ```toml
//! profile = "xhtml"
//! slash_on_unclosables = false
//!
//! [tags.my-icon]
//! has_closing_tag = false
//! ```

use indexmap::IndexMap;
use serde::Deserialize;

use crate::{ConfigError, Reference, TagRule};

/// Dialect configuration.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DialectConfig {
    /// Base profile name.
    pub profile: String,
    /// Override the profile's `value_on_optionals` flag.
    pub value_on_optionals: Option<bool>,
    /// Override the profile's `slash_on_unclosables` flag.
    pub slash_on_unclosables: Option<bool>,
    /// Tag rules merged over the profile's rules.
    pub tags: IndexMap<String, TagRule>,
}

impl Default for DialectConfig {
    fn default() -> Self {
        Self {
            profile: "html5".to_owned(),
            value_on_optionals: None,
            slash_on_unclosables: None,
            tags: IndexMap::new(),
        }
    }
}

impl DialectConfig {
    /// Parse and validate a configuration document.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if the profile name is blank or a tag
    /// name is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.profile.trim().is_empty() {
            return Err(ConfigError::Validation("profile cannot be empty".to_owned()));
        }
        if self.tags.keys().any(|name| name.trim().is_empty()) {
            return Err(ConfigError::Validation("tag names cannot be empty".to_owned()));
        }
        Ok(())
    }

    /// Build the configured reference.
    pub fn build(&self) -> Result<Reference, ConfigError> {
        self.validate()?;

        let overrides = self.tags.iter().map(|(name, rule)| (name.as_str(), *rule));
        let mut reference = Reference::of(&self.profile, overrides)?;

        if let Some(enabled) = self.value_on_optionals {
            reference.set_value_on_optionals(enabled);
        }
        if let Some(enabled) = self.slash_on_unclosables {
            reference.set_slash_on_unclosables(enabled);
        }

        tracing::debug!(
            profile = reference.name(),
            overrides = self.tags.len(),
            value_on_optionals = reference.value_on_optionals(),
            slash_on_unclosables = reference.slash_on_unclosables(),
            "Built dialect reference from config"
        );

        Ok(reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config = DialectConfig::from_toml_str("").unwrap();
        assert_eq!(config.profile, "html5");
        assert!(config.tags.is_empty());

        let reference = config.build().unwrap();
        assert_eq!(reference, Reference::html5());
    }

    #[test]
    fn test_parse_full_config() {
        let toml = r#"
profile = "XHTML"
slash_on_unclosables = false

[tags.my-icon]
has_closing_tag = false

[tags.input]
has_closing_tag = true
"#;
        let reference = DialectConfig::from_toml_str(toml).unwrap().build().unwrap();

        assert_eq!(reference.name(), "xhtml");
        assert!(reference.value_on_optionals());
        assert!(!reference.slash_on_unclosables());
        assert!(!reference.needs_closing_tag("my-icon"));
        assert!(reference.needs_closing_tag("input"));
    }

    #[test]
    fn test_empty_tag_rule_is_ignored() {
        let toml = r"
[tags.br]
";
        let reference = DialectConfig::from_toml_str(toml).unwrap().build().unwrap();
        assert!(!reference.needs_closing_tag("br"));
    }

    #[test]
    fn test_unknown_profile() {
        let config = DialectConfig::from_toml_str(r#"profile = "sgml""#).unwrap();
        let err = config.build().unwrap_err();
        assert!(matches!(err, ConfigError::Reference(_)));
        assert_eq!(err.to_string(), "Dialect profile not found: sgml");
    }

    #[test]
    fn test_blank_profile_rejected() {
        let err = DialectConfig::from_toml_str(r#"profile = "  ""#).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_empty_tag_name_rejected() {
        let toml = r#"
[tags.""]
has_closing_tag = false
"#;
        let err = DialectConfig::from_toml_str(toml).unwrap_err();
        assert!(err.to_string().contains("tag names cannot be empty"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = DialectConfig::from_toml_str("closing = true").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
