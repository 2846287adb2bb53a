//! Attribute specifications: the leaves of a specification tree.

use serde::{Deserialize, Serialize};

use super::Specification;
use crate::attributes::{require_spec, resolve_spec, AttrValue, Attributed};
use crate::error::{FilterError, Result};

/// Comparison applied between an item's attribute and the target value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterOp {
    /// Exact equality match.
    #[default]
    Eq,
    /// Not equal.
    Ne,
}

impl FilterOp {
    fn symbol(self) -> &'static str {
        match self {
            FilterOp::Eq => "==",
            FilterOp::Ne => "!=",
        }
    }
}

/// A condition on one attribute of an item.
///
/// Combines an attribute name, an operation, and a value to match against.
/// Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttrSpec {
    attr: String,
    #[serde(default)]
    op: FilterOp,
    value: AttrValue,
}

impl AttrSpec {
    pub fn new(attr: impl Into<String>, op: FilterOp, value: AttrValue) -> Self {
        Self {
            attr: attr.into(),
            op,
            value,
        }
    }

    /// Convenience: create an equality condition.
    pub fn eq(attr: impl Into<String>, value: AttrValue) -> Self {
        Self::new(attr, FilterOp::Eq, value)
    }

    /// Convenience: create a not-equal condition.
    pub fn ne(attr: impl Into<String>, value: AttrValue) -> Self {
        Self::new(attr, FilterOp::Ne, value)
    }

    pub fn attr(&self) -> &str {
        &self.attr
    }

    pub fn op(&self) -> FilterOp {
        self.op
    }

    pub fn value(&self) -> &AttrValue {
        &self.value
    }

    /// Parse `attr=value`, `attr==value` or `attr!=value` against the
    /// schema of item type `I`.
    ///
    /// The attribute name is resolved case-insensitively and the value is
    /// converted to the attribute's kind, so `COLOR=green` yields
    /// `color == Green`.
    pub fn parse<I: Attributed>(expr: &str) -> Result<Self> {
        // Split at the first '=' so values may contain '=' or "!=".
        let Some((lhs, rhs)) = expr.split_once('=') else {
            return Err(FilterError::InvalidExpression(format!(
                "expected ATTR=VALUE, got '{}'",
                expr
            )));
        };
        let (name, op, raw) = if let Some(name) = lhs.strip_suffix('!') {
            (name, FilterOp::Ne, rhs)
        } else if let Some(raw) = rhs.strip_prefix('=') {
            (lhs, FilterOp::Eq, raw)
        } else {
            (lhs, FilterOp::Eq, rhs)
        };

        if name.trim().is_empty() {
            return Err(FilterError::InvalidExpression(format!(
                "missing attribute name in '{}'",
                expr
            )));
        }

        let spec = resolve_spec::<I>(name)?;
        let value = spec.parse_value(raw)?;
        Ok(Self::new(spec.name, op, value))
    }

    /// Check the attribute exists on `I` and the value fits its schema.
    pub fn validate<I: Attributed>(&self) -> Result<()> {
        require_spec::<I>(&self.attr)?.check_value(&self.value)
    }
}

impl<I: Attributed> Specification<I> for AttrSpec {
    /// An item without the attribute is an error, not a mismatch.
    fn is_satisfied(&self, item: &I) -> Result<bool> {
        let Some(actual) = item.get_attr(&self.attr) else {
            return Err(FilterError::MissingAttribute {
                attr: self.attr.clone(),
            });
        };

        Ok(match self.op {
            FilterOp::Eq => actual == self.value,
            FilterOp::Ne => actual != self.value,
        })
    }
}

impl std::fmt::Display for AttrSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.attr, self.op.symbol(), self.value)
    }
}
