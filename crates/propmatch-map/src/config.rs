//! Matcher configuration.
//!
//! [`MatchingConfig`] carries the two tokenizers the matcher uses: one for
//! source-side names and one for destination-side names. [`MatcherSettings`]
//! is its on-disk JSON form, restricted to the built-in tokenizers.

use std::fmt;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{MapError, Result};
use crate::tokenizer::{CamelCaseTokenizer, NameTokenizer, TokenizerKind};

/// Tokenizers used to split source and destination property names.
#[derive(Clone)]
pub struct MatchingConfig {
    source_tokenizer: Arc<dyn NameTokenizer>,
    destination_tokenizer: Arc<dyn NameTokenizer>,
}

impl MatchingConfig {
    pub fn new(
        source_tokenizer: Arc<dyn NameTokenizer>,
        destination_tokenizer: Arc<dyn NameTokenizer>,
    ) -> Self {
        Self {
            source_tokenizer,
            destination_tokenizer,
        }
    }

    #[must_use]
    pub fn with_source_tokenizer(mut self, tokenizer: Arc<dyn NameTokenizer>) -> Self {
        self.source_tokenizer = tokenizer;
        self
    }

    #[must_use]
    pub fn with_destination_tokenizer(mut self, tokenizer: Arc<dyn NameTokenizer>) -> Self {
        self.destination_tokenizer = tokenizer;
        self
    }

    pub fn source_tokenizer(&self) -> &dyn NameTokenizer {
        self.source_tokenizer.as_ref()
    }

    pub fn destination_tokenizer(&self) -> &dyn NameTokenizer {
        self.destination_tokenizer.as_ref()
    }
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self::new(Arc::new(CamelCaseTokenizer), Arc::new(CamelCaseTokenizer))
    }
}

impl fmt::Debug for MatchingConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatchingConfig").finish_non_exhaustive()
    }
}

/// Serializable matcher settings.
///
/// ```json
/// { "source_tokenizer": "camel_case", "destination_tokenizer": "underscore" }
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MatcherSettings {
    pub source_tokenizer: TokenizerKind,
    pub destination_tokenizer: TokenizerKind,
}

impl MatcherSettings {
    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| MapError::ReadSettings {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|source| MapError::ParseSettings {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl From<&MatcherSettings> for MatchingConfig {
    fn from(settings: &MatcherSettings) -> Self {
        Self::new(
            settings.source_tokenizer.tokenizer(),
            settings.destination_tokenizer.tokenizer(),
        )
    }
}

#[cfg(test)]
mod tests {
    use propmatch_model::NameableType;

    use super::*;

    #[test]
    fn settings_default_to_camel_case() {
        let settings: MatcherSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(settings, MatcherSettings::default());
        assert_eq!(settings.source_tokenizer, TokenizerKind::CamelCase);
        assert_eq!(settings.destination_tokenizer, TokenizerKind::CamelCase);
    }

    #[test]
    fn settings_reject_unknown_fields() {
        let parsed = serde_json::from_str::<MatcherSettings>(r#"{"tokenizer":"underscore"}"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn config_from_settings_uses_each_side() {
        let settings = MatcherSettings {
            source_tokenizer: TokenizerKind::Underscore,
            destination_tokenizer: TokenizerKind::CamelCase,
        };
        let config = MatchingConfig::from(&settings);
        assert_eq!(
            config
                .source_tokenizer()
                .tokenize("first_name", NameableType::Field),
            vec!["first", "name"]
        );
        assert_eq!(
            config
                .destination_tokenizer()
                .tokenize("firstName", NameableType::Field),
            vec!["first", "Name"]
        );
    }
}
