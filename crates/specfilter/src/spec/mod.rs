//! # Specifications
//!
//! A specification is a boolean test over one item. Leaves test a single
//! attribute ([`AttrSpec`]); a [`Conjunction`] holds an ordered list of
//! children and is satisfied only when all of them are. [`Spec`] is the
//! closed sum of the two, and `and` / `&` combine any two specifications
//! into a conjunction.
//!
//! ```
//! use specfilter::attributes::AttrValue;
//! use specfilter::model::{Color, Product, Size};
//! use specfilter::spec::{Spec, Specification};
//!
//! let large_blue = Spec::is("size", AttrValue::Enum("Large".into()))
//!     & Spec::is("color", AttrValue::Enum("Blue".into()));
//!
//! let room = Product::new("Room", Color::Blue, Size::Large);
//! assert!(large_blue.is_satisfied(&room).unwrap());
//! assert_eq!(large_blue.to_string(), "size == Large & color == Blue");
//! ```
//!
//! Evaluation goes through the [`Specification`] trait, which is also the
//! seam for new kinds of atomic test: anything implementing it can be handed
//! to the filter engine.

mod attr;
mod conjunction;

use serde::{Deserialize, Serialize};
use tracing::debug;

pub use attr::{AttrSpec, FilterOp};
pub use conjunction::Conjunction;

use crate::attributes::{AttrValue, Attributed};
use crate::error::{FilterError, Result};

/// A boolean test over a single item.
///
/// Implementations must be pure: the answer depends only on the
/// specification and the item. An `Err` means the item broke the
/// specification's contract (e.g., it lacks a tested attribute), never that
/// the item merely failed to match.
pub trait Specification<I: ?Sized> {
    fn is_satisfied(&self, item: &I) -> Result<bool>;
}

impl<I: ?Sized, S: Specification<I> + ?Sized> Specification<I> for &S {
    fn is_satisfied(&self, item: &I) -> Result<bool> {
        (**self).is_satisfied(item)
    }
}

impl<I: ?Sized, S: Specification<I> + ?Sized> Specification<I> for Box<S> {
    fn is_satisfied(&self, item: &I) -> Result<bool> {
        (**self).is_satisfied(item)
    }
}

/// A specification tree over attributed items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Spec {
    Attr(AttrSpec),
    And(Conjunction),
}

impl Spec {
    /// Leaf satisfied when attribute `attr` equals `value`.
    pub fn is(attr: impl Into<String>, value: AttrValue) -> Self {
        Spec::Attr(AttrSpec::eq(attr, value))
    }

    /// Leaf satisfied when attribute `attr` differs from `value`.
    pub fn is_not(attr: impl Into<String>, value: AttrValue) -> Self {
        Spec::Attr(AttrSpec::ne(attr, value))
    }

    /// Combine with `other` into a conjunction, `self` first.
    ///
    /// Conjunction operands are flattened, so `(a & b) & c` and
    /// `a & (b & c)` produce the same tree.
    pub fn and(self, other: Spec) -> Spec {
        let mut children = self.into_conjuncts();
        children.extend(other.into_conjuncts());
        Spec::And(Conjunction::from_parts(children))
    }

    /// Conjunction of every spec in `specs`, in order.
    ///
    /// A single spec is returned as is. No specs at all is an error.
    pub fn all(specs: impl IntoIterator<Item = Spec>) -> Result<Spec> {
        specs
            .into_iter()
            .reduce(Spec::and)
            .ok_or(FilterError::EmptyConjunction)
    }

    /// Check every leaf against the schema of item type `I`.
    pub fn validate<I: Attributed>(&self) -> Result<()> {
        match self {
            Spec::Attr(leaf) => leaf.validate::<I>(),
            Spec::And(conjunction) => {
                for child in conjunction.children() {
                    child.validate::<I>()?;
                }
                debug!(spec = %self, "specification validated");
                Ok(())
            }
        }
    }

    /// Read a specification from its JSON form.
    pub fn from_json(json: &str) -> Result<Spec> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of attribute tests in the tree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Spec::Attr(_) => 1,
            Spec::And(conjunction) => conjunction.children().iter().map(Spec::leaf_count).sum(),
        }
    }

    fn into_conjuncts(self) -> Vec<Spec> {
        match self {
            Spec::And(conjunction) => conjunction.into_children(),
            leaf => vec![leaf],
        }
    }
}

/// Free-standing form of [`Spec::and`].
pub fn and(left: Spec, right: Spec) -> Spec {
    left.and(right)
}

impl std::ops::BitAnd for Spec {
    type Output = Spec;

    fn bitand(self, rhs: Spec) -> Spec {
        self.and(rhs)
    }
}

impl From<AttrSpec> for Spec {
    fn from(leaf: AttrSpec) -> Self {
        Spec::Attr(leaf)
    }
}

impl From<Conjunction> for Spec {
    fn from(conjunction: Conjunction) -> Self {
        Spec::And(conjunction)
    }
}

impl<I: Attributed> Specification<I> for Spec {
    fn is_satisfied(&self, item: &I) -> Result<bool> {
        match self {
            Spec::Attr(leaf) => leaf.is_satisfied(item),
            Spec::And(conjunction) => conjunction.is_satisfied(item),
        }
    }
}

impl std::fmt::Display for Spec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Spec::Attr(leaf) => write!(f, "{}", leaf),
            Spec::And(conjunction) => write!(f, "{}", conjunction),
        }
    }
}
