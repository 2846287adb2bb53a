//! Catalog files: JSON arrays of products, and specification files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::model::Product;
use crate::spec::Spec;

/// Load a product catalog from a JSON file.
///
/// The file holds an array of `{"name": ..., "color": ..., "size": ...}`
/// objects; the order of the array is the order items are filtered in.
pub fn load_catalog(path: &Path) -> Result<Vec<Product>> {
    let raw = fs::read_to_string(path)?;
    let products: Vec<Product> = serde_json::from_str(&raw)?;
    debug!(path = %path.display(), count = products.len(), "catalog loaded");
    Ok(products)
}

/// Write a product catalog as pretty-printed JSON.
pub fn save_catalog(path: &Path, products: &[Product]) -> Result<()> {
    let json = serde_json::to_string_pretty(products)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load a specification from its JSON form.
pub fn load_spec(path: &Path) -> Result<Spec> {
    let raw = fs::read_to_string(path)?;
    let spec = Spec::from_json(&raw)?;
    debug!(path = %path.display(), spec = %spec, "specification loaded");
    Ok(spec)
}
