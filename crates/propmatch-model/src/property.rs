//! Property endpoints considered for name matching.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// The rule set a tokenizer applies to a name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameableType {
    Field,
    Method,
}

/// The kind of member a property was discovered from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyKind {
    #[default]
    Field,
    /// Zero-argument method returning the value.
    Accessor,
    /// Single-argument method storing the value.
    Mutator,
}

impl PropertyKind {
    /// Tokenization rule set for names of this kind.
    #[must_use]
    pub const fn nameable_type(self) -> NameableType {
        match self {
            Self::Field => NameableType::Field,
            Self::Accessor | Self::Mutator => NameableType::Method,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Field => "field",
            Self::Accessor => "accessor",
            Self::Mutator => "mutator",
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PropertyKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "field" => Ok(Self::Field),
            "accessor" => Ok(Self::Accessor),
            "mutator" => Ok(Self::Mutator),
            _ => Err(ModelError::UnknownPropertyKind(s.to_string())),
        }
    }
}

/// A named mapping endpoint.
///
/// Only the name and kind take part in matching; everything else about the
/// underlying member is owned by whoever discovered it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Property {
    name: String,
    kind: PropertyKind,
}

impl Property {
    pub fn new(name: impl Into<String>, kind: PropertyKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn field(name: impl Into<String>) -> Self {
        Self::new(name, PropertyKind::Field)
    }

    pub fn accessor(name: impl Into<String>) -> Self {
        Self::new(name, PropertyKind::Accessor)
    }

    pub fn mutator(name: impl Into<String>) -> Self {
        Self::new(name, PropertyKind::Mutator)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> PropertyKind {
        self.kind
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.name)
    }
}

/// Parses `name` (a field) or `kind:name`.
impl FromStr for Property {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        let (kind, name) = match s.split_once(':') {
            Some((kind, name)) => (kind.parse::<PropertyKind>()?, name),
            None => (PropertyKind::Field, s),
        };
        let name = name.trim();
        if name.is_empty() {
            return Err(ModelError::EmptyPropertyName);
        }
        Ok(Self::new(name, kind))
    }
}
