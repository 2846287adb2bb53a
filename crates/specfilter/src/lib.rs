//! # Specfilter Architecture
//!
//! Specfilter filters in-memory collections with **composable
//! specifications**. New filtering criteria are added by building new
//! specifications, never by changing the filter engine.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Specifications (spec/)                                     │
//! │  - AttrSpec: one attribute compared with one value          │
//! │  - Conjunction: every child must hold, left to right        │
//! │  - Spec: the closed sum of both, combined with `and` / `&`  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │ is_satisfied(item)
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Filter Engine (filter.rs)                                  │
//! │  - Lazy, order-preserving, restartable                      │
//! │  - Knows nothing about the specification's structure        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │ get_attr(name)
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Items (attributes/, model.rs)                              │
//! │  - Attributed trait + per-type attribute schema             │
//! │  - Product { name, color, size } as the reference domain    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Contract Violations
//!
//! Testing an attribute an item does not carry is an error
//! ([`error::FilterError::MissingAttribute`]), not a mismatch. A conjunction
//! with no children cannot be built. [`spec::Spec::validate`] checks a whole
//! tree against an item type's schema before it is run.
//!
//! ## No I/O Assumptions
//!
//! Apart from the explicit file helpers in [`catalog`] and [`config`], the
//! library never touches the terminal or the file system. Printing is the
//! job of the `specfilter` binary.
//!
//! ## Example
//!
//! ```
//! use specfilter::filter::filter_all;
//! use specfilter::model::{color_is, sample_products, size_is, Color, Size};
//!
//! let products = sample_products();
//! let large_blue = size_is(Size::Large) & color_is(Color::Blue);
//!
//! let found = filter_all(&products, &large_blue).unwrap();
//! assert_eq!(found.len(), 1);
//! assert_eq!(found[0].name, "Room");
//! ```
//!
//! ## Module Overview
//!
//! - [`attributes`]: Attribute values, schemas and the `Attributed` trait
//! - [`spec`]: Specifications and their combinators
//! - [`filter`]: The filter engine
//! - [`model`]: The product domain
//! - [`catalog`]: Loading catalogs and specifications from JSON
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod attributes;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod spec;
