//! Placeholder configuration for the built-in dialects.
//!
//! `DialectConfig` can be built in code or deserialized (e.g. from a TOML
//! section of an application's config file):
//!
//! ```toml
//! numbered_prefix = ":"
//! numbered_start = 1
//! positional_placeholder = "?"
//! ```

use crate::dialect::{NumberedDialect, PositionalDialect};
use crate::error::{FragmentError, FragmentResult};
use serde::{Deserialize, Serialize};

/// Largest accepted `numbered_start`.
pub const MAX_NUMBERED_START: usize = u32::MAX as usize;

/// Configuration for [`NumberedDialect`] and [`PositionalDialect`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialectConfig {
    /// Text before each placeholder index.
    pub numbered_prefix: String,
    /// Index of the first numbered placeholder.
    pub numbered_start: usize,
    /// Token used for every positional placeholder.
    pub positional_placeholder: String,
}

impl Default for DialectConfig {
    fn default() -> Self {
        Self {
            numbered_prefix: "$".to_string(),
            numbered_start: 1,
            positional_placeholder: "?".to_string(),
        }
    }
}

impl DialectConfig {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the numbered placeholder prefix.
    pub fn numbered_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.numbered_prefix = prefix.into();
        self
    }

    /// Set the first numbered placeholder index.
    pub fn numbered_start(mut self, start: usize) -> Self {
        self.numbered_start = start;
        self
    }

    /// Set the positional placeholder token.
    pub fn positional_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.positional_placeholder = placeholder.into();
        self
    }

    /// Reject configurations that would render ambiguous SQL.
    pub fn validate(&self) -> FragmentResult<()> {
        if self.numbered_prefix.is_empty() {
            return Err(FragmentError::config("numbered_prefix must not be empty"));
        }
        if self.numbered_start == 0 {
            return Err(FragmentError::config("numbered_start must be >= 1"));
        }
        if self.numbered_start > MAX_NUMBERED_START {
            return Err(FragmentError::config(format!(
                "numbered_start must be <= {MAX_NUMBERED_START}, got {}",
                self.numbered_start
            )));
        }
        if self.positional_placeholder.is_empty() {
            return Err(FragmentError::config(
                "positional_placeholder must not be empty",
            ));
        }
        Ok(())
    }

    /// Build the numbered dialect described by this config.
    pub fn numbered(&self) -> FragmentResult<NumberedDialect> {
        self.validate()?;
        Ok(NumberedDialect::postgres()
            .prefix(self.numbered_prefix.clone())
            .start(self.numbered_start))
    }

    /// Build the positional dialect described by this config.
    pub fn positional(&self) -> FragmentResult<PositionalDialect> {
        self.validate()?;
        Ok(PositionalDialect::new(self.positional_placeholder.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_builtin_dialects() {
        let config = DialectConfig::default();
        assert_eq!(config.numbered().unwrap(), NumberedDialect::postgres());
        assert_eq!(config.positional().unwrap(), PositionalDialect::mysql());
    }

    #[test]
    fn deserializes_partial_toml() {
        let config: DialectConfig = toml::from_str(r#"numbered_prefix = ":""#).unwrap();
        assert_eq!(config.numbered_prefix, ":");
        assert_eq!(config.numbered_start, 1);
        assert_eq!(config.positional_placeholder, "?");
    }

    #[test]
    fn rejects_invalid_values() {
        let err = DialectConfig::new().numbered_start(0).numbered().unwrap_err();
        assert!(matches!(err, FragmentError::Config(_)));

        assert!(DialectConfig::new().numbered_prefix("").validate().is_err());
        assert!(
            DialectConfig::new()
                .positional_placeholder("")
                .positional()
                .is_err()
        );
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn rejects_start_beyond_u32() {
        let err = DialectConfig::new()
            .numbered_start(usize::MAX)
            .numbered()
            .unwrap_err();
        assert!(matches!(err, FragmentError::Config(_)));

        assert!(
            DialectConfig::new()
                .numbered_start(MAX_NUMBERED_START)
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn builder_setters_flow_into_dialects() {
        let config = DialectConfig::new()
            .numbered_prefix("@p")
            .numbered_start(1)
            .positional_placeholder("%s");

        assert_eq!(config.numbered().unwrap().prefix, "@p");
        assert_eq!(config.positional().unwrap().placeholder, "%s");
    }
}
