//! Attribute schemas.
//!
//! Each item type declares the attributes it exposes as a static slice of
//! [`AttributeSpec`]s. The schema is what lets a specification be checked
//! (and parsed from text) before it ever touches an item.

use serde::Serialize;

use super::{AttrValue, Attributed};
use crate::error::{FilterError, Result};

/// The kind of value an attribute holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeKind {
    /// Free-form text (e.g., `name`)
    Text,

    /// Closed set of values (e.g., `color`, `size`)
    ///
    /// The valid values are listed in [`AttributeSpec::variants`].
    Enum,

    /// Simple true/false
    Bool,

    /// List of strings
    List,
}

/// Specification for a single attribute.
#[derive(Debug, Clone, Serialize)]
pub struct AttributeSpec {
    /// The attribute name used in expressions (e.g., "color")
    pub name: &'static str,

    /// The kind of value this attribute holds
    pub kind: AttributeKind,

    /// Canonical variant names for `Enum` attributes; empty otherwise
    pub variants: &'static [&'static str],
}

impl AttributeSpec {
    /// Create a new attribute spec with no variants.
    pub const fn new(name: &'static str, kind: AttributeKind) -> Self {
        Self {
            name,
            kind,
            variants: &[],
        }
    }

    /// Set the allowed variants (for `Enum` attributes).
    pub const fn variants(mut self, variants: &'static [&'static str]) -> Self {
        self.variants = variants;
        self
    }

    /// Parse a raw string into a value of this attribute's kind.
    ///
    /// Enum values are matched case-insensitively and normalized to the
    /// canonical variant name. Lists are comma separated.
    pub fn parse_value(&self, raw: &str) -> Result<AttrValue> {
        let raw = raw.trim();
        let invalid = || FilterError::InvalidValue {
            attr: self.name.to_string(),
            value: raw.to_string(),
        };

        match self.kind {
            AttributeKind::Text => Ok(AttrValue::Text(raw.to_string())),
            AttributeKind::Enum => self
                .variants
                .iter()
                .find(|v| v.eq_ignore_ascii_case(raw))
                .map(|v| AttrValue::Enum(v.to_string()))
                .ok_or_else(invalid),
            AttributeKind::Bool => match raw.to_ascii_lowercase().as_str() {
                "true" => Ok(AttrValue::Bool(true)),
                "false" => Ok(AttrValue::Bool(false)),
                _ => Err(invalid()),
            },
            AttributeKind::List => Ok(AttrValue::List(
                raw.split(',')
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(String::from)
                    .collect(),
            )),
        }
    }

    /// Check that `value` can be held by this attribute.
    pub fn check_value(&self, value: &AttrValue) -> Result<()> {
        if value.kind() != self.kind {
            return Err(FilterError::KindMismatch {
                attr: self.name.to_string(),
                expected: self.kind,
                found: value.kind(),
            });
        }

        if let AttrValue::Enum(variant) = value {
            if !self.variants.contains(&variant.as_str()) {
                return Err(FilterError::InvalidValue {
                    attr: self.name.to_string(),
                    value: variant.clone(),
                });
            }
        }

        Ok(())
    }
}

/// Look up an attribute spec of item type `I` by its exact name.
pub fn get_spec<I: Attributed>(name: &str) -> Option<&'static AttributeSpec> {
    I::ATTRIBUTES.iter().find(|spec| spec.name == name)
}

/// Like [`get_spec`], but an unknown name is an error.
pub fn require_spec<I: Attributed>(name: &str) -> Result<&'static AttributeSpec> {
    get_spec::<I>(name).ok_or_else(|| FilterError::UnknownAttribute {
        attr: name.to_string(),
    })
}

/// Resolve user-typed attribute names, ignoring case and surrounding space.
pub fn resolve_spec<I: Attributed>(name: &str) -> Result<&'static AttributeSpec> {
    let name = name.trim();
    I::ATTRIBUTES
        .iter()
        .find(|spec| spec.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| FilterError::UnknownAttribute {
            attr: name.to_string(),
        })
}
