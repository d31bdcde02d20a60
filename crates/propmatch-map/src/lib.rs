//! Name-based matching of source properties to destination properties.
//!
//! Property names are split into tokens by a [`NameTokenizer`], each list of
//! properties is flattened into one token sequence, and every source token is
//! classified with a [`MatchStrength`]. Deciding which destination to map to
//! is left to the caller.
//!
//! ```
//! use propmatch_map::{MatchingConfig, PropertiesMatcher};
//! use propmatch_model::{MatchStrength, Property};
//!
//! let config = MatchingConfig::default();
//! let matcher = PropertiesMatcher::new(&config);
//! let source = [Property::field("defaultValue")];
//! let destination = [Property::field("DefaultValue")];
//!
//! assert_eq!(
//!     matcher.match_properties(&source, &destination),
//!     vec![MatchStrength::IgnoringCase, MatchStrength::Exact]
//! );
//! ```

#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod flatten;
pub mod matcher;
pub mod tokenizer;

pub use config::{MatcherSettings, MatchingConfig};
pub use error::{MapError, Result};
pub use flatten::flatten_tokens;
pub use matcher::{PropertiesMatcher, match_tokens};
pub use propmatch_model::MatchStrength;
pub use tokenizer::{CamelCaseTokenizer, NameTokenizer, TokenizerKind, UnderscoreTokenizer};
