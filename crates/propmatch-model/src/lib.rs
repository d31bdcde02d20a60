//! Data model for name-based property matching.
//!
//! - [`MatchStrength`]: ranked classification of how well one name token matches another
//! - [`Property`]: a named mapping endpoint with its [`PropertyKind`]
//! - [`NameableType`]: the tokenization rule set a property kind selects

pub mod error;
pub mod property;
pub mod strength;

pub use error::{ModelError, Result};
pub use property::{NameableType, Property, PropertyKind};
pub use strength::MatchStrength;
