use thiserror::Error;

use crate::attributes::AttributeKind;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Item has no attribute '{attr}'")]
    MissingAttribute { attr: String },

    #[error("A conjunction needs at least one child specification")]
    EmptyConjunction,

    #[error("Unknown attribute: {attr}")]
    UnknownAttribute { attr: String },

    #[error("Attribute '{attr}' holds {expected:?} values, got {found:?}")]
    KindMismatch {
        attr: String,
        expected: AttributeKind,
        found: AttributeKind,
    },

    #[error("Invalid value '{value}' for attribute '{attr}'")]
    InvalidValue { attr: String, value: String },

    #[error("Invalid expression: {0}")]
    InvalidExpression(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] confique::Error),
}

pub type Result<T> = std::result::Result<T, FilterError>;
