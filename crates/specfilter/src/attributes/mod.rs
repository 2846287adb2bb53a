//! # Attribute System
//!
//! Items are opaque to the filter engine. What a specification can see of an
//! item is its named attributes, exposed through the [`Attributed`] trait:
//!
//! - **Values**: [`AttrValue`] is the runtime representation of one attribute
//! - **Schemas**: each item type lists its attributes as [`AttributeSpec`]s
//! - **Access**: `get_attr()` returns the value, or `None` if the item lacks it
//!
//! ## Attribute Types
//!
//! | Kind | Example | Description |
//! |------|---------|-------------|
//! | `Text` | `name` | Free-form string |
//! | `Enum` | `color`, `size` | Closed set of values |
//! | `Bool` | | Simple true/false |
//! | `List` | | List of strings |
//!
//! ## Usage
//!
//! ```
//! use specfilter::attributes::{AttrValue, Attributed};
//! use specfilter::model::{Color, Product, Size};
//!
//! let apple = Product::new("Apple", Color::Red, Size::Small);
//! assert_eq!(apple.get_attr("color"), Some(AttrValue::Enum("Red".into())));
//! assert_eq!(apple.get_attr("weight"), None);
//! ```

mod schema;
mod value;

pub use schema::{get_spec, require_spec, resolve_spec, AttributeKind, AttributeSpec};
pub use value::AttrValue;

/// An item with named attributes that specifications can test.
pub trait Attributed {
    /// The attributes every item of this type carries.
    const ATTRIBUTES: &'static [AttributeSpec];

    /// Get an attribute value by name.
    ///
    /// Returns `None` if this item does not carry the attribute.
    fn get_attr(&self, name: &str) -> Option<AttrValue>;
}
