use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("unknown match strength: {0}")]
    UnknownMatchStrength(String),
    #[error("unknown property kind: {0} (expected field, accessor or mutator)")]
    UnknownPropertyKind(String),
    #[error("property name must not be empty")]
    EmptyPropertyName,
}

pub type Result<T> = std::result::Result<T, ModelError>;
