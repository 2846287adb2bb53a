//! Conjunctions: specifications satisfied when every child is.

use serde::{Deserialize, Serialize};

use super::{Spec, Specification};
use crate::attributes::Attributed;
use crate::error::{FilterError, Result};

/// An ordered, non-empty list of child specifications joined by AND.
///
/// Children are evaluated left to right and evaluation stops at the first
/// child that is not satisfied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Spec>", into = "Vec<Spec>")]
pub struct Conjunction {
    children: Vec<Spec>,
}

impl Conjunction {
    /// Build a conjunction. An empty child list is rejected.
    pub fn new(children: Vec<Spec>) -> Result<Self> {
        if children.is_empty() {
            return Err(FilterError::EmptyConjunction);
        }
        Ok(Self { children })
    }

    pub fn children(&self) -> &[Spec] {
        &self.children
    }

    pub(super) fn into_children(self) -> Vec<Spec> {
        self.children
    }

    /// Used by the combinator, which always has at least two operands.
    pub(super) fn from_parts(children: Vec<Spec>) -> Self {
        debug_assert!(!children.is_empty());
        Self { children }
    }
}

impl TryFrom<Vec<Spec>> for Conjunction {
    type Error = FilterError;

    fn try_from(children: Vec<Spec>) -> Result<Self> {
        Self::new(children)
    }
}

impl From<Conjunction> for Vec<Spec> {
    fn from(conjunction: Conjunction) -> Self {
        conjunction.children
    }
}

impl<I: Attributed> Specification<I> for Conjunction {
    fn is_satisfied(&self, item: &I) -> Result<bool> {
        for child in &self.children {
            if !child.is_satisfied(item)? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

impl std::fmt::Display for Conjunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, child) in self.children.iter().enumerate() {
            if i > 0 {
                write!(f, " & ")?;
            }
            match child {
                Spec::And(nested) => write!(f, "({})", nested)?,
                leaf => write!(f, "{}", leaf)?,
            }
        }
        Ok(())
    }
}
