//! The reference product domain: things with a name, a color and a size.

use serde::{Deserialize, Serialize};

use crate::attributes::{AttrValue, AttributeKind, AttributeSpec, Attributed};
use crate::spec::Spec;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    pub const VARIANTS: &'static [&'static str] = &["Red", "Green", "Blue"];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Size {
    Small,
    Medium,
    Large,
}

impl Size {
    pub const VARIANTS: &'static [&'static str] = &["Small", "Medium", "Large"];
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl std::fmt::Display for Size {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub name: String,
    pub color: Color,
    pub size: Size,
}

impl Product {
    pub fn new(name: impl Into<String>, color: Color, size: Size) -> Self {
        Self {
            name: name.into(),
            color,
            size,
        }
    }
}

impl Attributed for Product {
    const ATTRIBUTES: &'static [AttributeSpec] = &[
        AttributeSpec::new("name", AttributeKind::Text),
        AttributeSpec::new("color", AttributeKind::Enum).variants(Color::VARIANTS),
        AttributeSpec::new("size", AttributeKind::Enum).variants(Size::VARIANTS),
    ];

    fn get_attr(&self, name: &str) -> Option<AttrValue> {
        match name {
            "name" => Some(AttrValue::Text(self.name.clone())),
            "color" => Some(AttrValue::Enum(format!("{:?}", self.color))),
            "size" => Some(AttrValue::Enum(format!("{:?}", self.size))),
            _ => None,
        }
    }
}

/// Specification matching products of the given color.
pub fn color_is(color: Color) -> Spec {
    Spec::is("color", AttrValue::Enum(color.to_string()))
}

/// Specification matching products of the given size.
pub fn size_is(size: Size) -> Spec {
    Spec::is("size", AttrValue::Enum(size.to_string()))
}

pub fn name_is(name: impl Into<String>) -> Spec {
    Spec::is("name", AttrValue::Text(name.into()))
}

/// The three products every example starts from: a small red apple, a
/// large green tree and a large blue room.
pub fn sample_products() -> Vec<Product> {
    vec![
        Product::new("Apple", Color::Red, Size::Small),
        Product::new("Tree", Color::Green, Size::Large),
        Product::new("Room", Color::Blue, Size::Large),
    ]
}
