//! The filter engine.
//!
//! [`filter`] applies one specification to a slice and lazily yields the
//! items that satisfy it, in their original order. The engine never looks
//! inside the specification: a single attribute test and a deep conjunction
//! are both just something with `is_satisfied`.
//!
//! Each call starts a fresh traversal of the slice, so filtering twice with
//! the same inputs yields the same items. Items are yielded by reference and
//! never copied.

use std::iter::FusedIterator;

use tracing::{debug, trace};

use crate::error::Result;
use crate::spec::Specification;

/// Lazily filter `items` by `spec`.
///
/// Yields `Ok(&item)` for each match. If the specification fails on an
/// item, the error is yielded in that item's place and traversal continues
/// with the next item.
pub fn filter<'a, 's, I, S>(items: &'a [I], spec: &'s S) -> Filtered<'a, 's, I, S>
where
    S: Specification<I> + ?Sized,
{
    Filtered {
        items: items.iter(),
        spec,
    }
}

/// Eagerly filter `items` by `spec`, stopping at the first error.
///
/// The returned references borrow only from `items`; `spec` may be a
/// temporary.
pub fn filter_all<'a, I, S>(items: &'a [I], spec: &S) -> Result<Vec<&'a I>>
where
    S: Specification<I> + ?Sized,
{
    let matched = filter(items, spec).collect::<Result<Vec<_>>>()?;
    debug!(total = items.len(), matched = matched.len(), "filter complete");
    Ok(matched)
}

/// Iterator returned by [`filter`].
pub struct Filtered<'a, 's, I, S: ?Sized> {
    items: std::slice::Iter<'a, I>,
    spec: &'s S,
}

impl<'a, I, S> Iterator for Filtered<'a, '_, I, S>
where
    S: Specification<I> + ?Sized,
{
    type Item = Result<&'a I>;

    fn next(&mut self) -> Option<Self::Item> {
        for item in self.items.by_ref() {
            match self.spec.is_satisfied(item) {
                Ok(true) => return Some(Ok(item)),
                Ok(false) => trace!("item rejected"),
                Err(e) => return Some(Err(e)),
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.items.len()))
    }
}

impl<I, S> FusedIterator for Filtered<'_, '_, I, S> where S: Specification<I> + ?Sized {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attributes::AttrValue;
    use crate::error::FilterError;
    use crate::model::{sample_products, Color, Product, Size};
    use crate::spec::Spec;

    fn names<'a>(items: impl IntoIterator<Item = &'a Product>) -> Vec<&'a str> {
        items.into_iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn filter_by_color() {
        let products = sample_products();
        let spec = Spec::is("color", AttrValue::Enum("Green".into()));
        assert_eq!(names(filter_all(&products, &spec).unwrap()), vec!["Tree"]);
    }

    #[test]
    fn filter_by_size() {
        let products = sample_products();
        let spec = Spec::is("size", AttrValue::Enum("Large".into()));
        assert_eq!(
            names(filter_all(&products, &spec).unwrap()),
            vec!["Tree", "Room"]
        );
    }

    #[test]
    fn filter_by_size_and_color() {
        let products = sample_products();
        let spec = Spec::is("size", AttrValue::Enum("Large".into()))
            & Spec::is("color", AttrValue::Enum("Blue".into()));
        assert_eq!(names(filter_all(&products, &spec).unwrap()), vec!["Room"]);
    }

    #[test]
    fn filter_with_no_match_is_empty() {
        let products = sample_products();
        let spec = Spec::is("color", AttrValue::Enum("Red".into()))
            & Spec::is("size", AttrValue::Enum("Large".into()));
        assert!(filter_all(&products, &spec).unwrap().is_empty());
    }

    #[test]
    fn yields_references_into_the_slice() {
        let products = sample_products();
        let spec = Spec::is("name", AttrValue::Text("Room".into()));
        let found = filter_all(&products, &spec).unwrap();
        assert!(std::ptr::eq(found[0], &products[2]));
    }

    #[test]
    fn is_lazy() {
        // Taking one match leaves the rest of the slice unvisited.
        let products = vec![
            Product::new("Apple", Color::Red, Size::Small),
            Product::new("Cherry", Color::Red, Size::Small),
        ];
        let spec = Spec::is("color", AttrValue::Enum("Red".into()));
        let mut iter = filter(&products, &spec);
        assert_eq!(iter.next().unwrap().unwrap().name, "Apple");
        assert_eq!(iter.size_hint(), (0, Some(1)));
    }

    #[test]
    fn errors_are_yielded_in_place() {
        let products = sample_products();
        let spec = Spec::is("weight", AttrValue::Text("1kg".into()));
        let results: Vec<_> = filter(&products, &spec).collect();
        assert_eq!(results.len(), 3);
        assert!(results
            .iter()
            .all(|r| matches!(r, Err(FilterError::MissingAttribute { .. }))));
        assert!(filter_all(&products, &spec).is_err());
    }

    #[test]
    fn results_outlive_a_temporary_spec() {
        let products = sample_products();
        let found = filter_all(
            &products,
            &(Spec::is("size", AttrValue::Enum("Large".into()))
                & Spec::is("color", AttrValue::Enum("Blue".into()))),
        )
        .unwrap();
        assert_eq!(names(found), vec!["Room"]);
    }

    #[test]
    fn empty_collection_yields_nothing() {
        let products: Vec<Product> = Vec::new();
        let spec = Spec::is("color", AttrValue::Enum("Red".into()));
        assert!(filter(&products, &spec).next().is_none());
    }
}
