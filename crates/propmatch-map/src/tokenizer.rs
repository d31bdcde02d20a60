//! Name tokenizers.
//!
//! A tokenizer splits a property name into the ordered tokens the matcher
//! compares. Tokenizers never change the case of a token; case handling is
//! part of matching, not splitting.

use std::sync::Arc;

use propmatch_model::NameableType;
use serde::{Deserialize, Serialize};

/// Splits a property name into ordered tokens.
pub trait NameTokenizer: Send + Sync {
    fn tokenize(&self, name: &str, nameable_type: NameableType) -> Vec<String>;
}

impl<F> NameTokenizer for F
where
    F: Fn(&str, NameableType) -> Vec<String> + Send + Sync,
{
    fn tokenize(&self, name: &str, nameable_type: NameableType) -> Vec<String> {
        self(name, nameable_type)
    }
}

/// Splits on camelCase / PascalCase boundaries.
///
/// A boundary is placed before:
/// - an uppercase letter that follows a non-uppercase character (`defaultValue`)
/// - the last uppercase letter of an acronym when a lowercase letter follows
///   (`HTTPResponse` -> `HTTP`, `Response`)
/// - a non-letter that follows a letter (`address1` -> `address`, `1`)
#[derive(Debug, Clone, Copy, Default)]
pub struct CamelCaseTokenizer;

impl NameTokenizer for CamelCaseTokenizer {
    fn tokenize(&self, name: &str, _nameable_type: NameableType) -> Vec<String> {
        split_camel_case(name)
            .into_iter()
            .map(str::to_string)
            .collect()
    }
}

/// Splits on underscores, dropping empty segments.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnderscoreTokenizer;

impl NameTokenizer for UnderscoreTokenizer {
    fn tokenize(&self, name: &str, _nameable_type: NameableType) -> Vec<String> {
        name.split('_')
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// Built-in tokenizers selectable from settings files and the CLI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenizerKind {
    #[default]
    CamelCase,
    Underscore,
}

impl TokenizerKind {
    #[must_use]
    pub fn tokenizer(self) -> Arc<dyn NameTokenizer> {
        match self {
            Self::CamelCase => Arc::new(CamelCaseTokenizer),
            Self::Underscore => Arc::new(UnderscoreTokenizer),
        }
    }
}

fn split_camel_case(name: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = name.char_indices().collect();
    let mut parts = Vec::new();
    let mut start = 0;

    for i in 1..chars.len() {
        let prev = chars[i - 1].1;
        let (offset, curr) = chars[i];
        let next = chars.get(i + 1).map(|&(_, c)| c);

        let acronym_end = prev.is_ascii_uppercase()
            && curr.is_ascii_uppercase()
            && next.is_some_and(|c| c.is_ascii_lowercase());
        let camel_hump = !prev.is_ascii_uppercase() && curr.is_ascii_uppercase();
        let letter_end = prev.is_ascii_alphabetic() && !curr.is_ascii_alphabetic();

        if acronym_end || camel_hump || letter_end {
            parts.push(&name[start..offset]);
            start = offset;
        }
    }

    if start < name.len() {
        parts.push(&name[start..]);
    }
    parts
}
