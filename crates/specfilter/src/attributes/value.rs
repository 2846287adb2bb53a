//! Attribute value types.
//!
//! This module defines the runtime representation of attribute values, the
//! thing an item hands out from `get_attr()` and an attribute specification
//! compares against.

use serde::{Deserialize, Serialize};

use super::AttributeKind;

/// Runtime representation of an attribute value.
///
/// Equality is structural: two values of different kinds are never equal,
/// so an `Enum("Red")` does not match a `Text("Red")`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttrValue {
    /// Free-form text (e.g., a product `name`)
    Text(String),

    /// Enum value as its canonical variant name (e.g., `color` = "Red" | "Green" | "Blue")
    Enum(String),

    /// Simple boolean value
    Bool(bool),

    /// List of strings
    List(Vec<String>),
}

impl AttrValue {
    /// The kind of value this is, as declared in attribute schemas.
    pub fn kind(&self) -> AttributeKind {
        match self {
            AttrValue::Text(_) => AttributeKind::Text,
            AttrValue::Enum(_) => AttributeKind::Enum,
            AttrValue::Bool(_) => AttributeKind::Bool,
            AttrValue::List(_) => AttributeKind::List,
        }
    }
}

impl std::fmt::Display for AttrValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttrValue::Text(s) => write!(f, "{:?}", s),
            AttrValue::Enum(s) => write!(f, "{}", s),
            AttrValue::Bool(b) => write!(f, "{}", b),
            AttrValue::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}
