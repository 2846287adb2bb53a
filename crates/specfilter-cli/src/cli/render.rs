//! Output formatting. Every function here returns a `String`; printing is
//! left to the command handlers.

use console::style;
use specfilter::attributes::{AttributeKind, AttributeSpec};
use specfilter::model::Product;

use super::setup::OutputFormat;

const NAME_WIDTH: usize = 12;
const COLOR_WIDTH: usize = 7;

pub fn render_products(products: &[&Product], format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(products),
        OutputFormat::Text => Ok(render_products_text(products)),
    }
}

fn render_products_text(products: &[&Product]) -> String {
    if products.is_empty() {
        return format!("{}\n", style("No matching products.").dim());
    }

    let mut out = String::new();
    for product in products {
        out.push_str(&format!(
            "{}  {:<color_w$}  {}\n",
            style(format!("{:<name_w$}", product.name, name_w = NAME_WIDTH)).bold(),
            product.color.to_string(),
            product.size,
            color_w = COLOR_WIDTH,
        ));
    }
    out
}

pub fn render_attrs(attrs: &[AttributeSpec]) -> String {
    let mut out = String::new();
    for attr in attrs {
        let kind = match attr.kind {
            AttributeKind::Text => "text",
            AttributeKind::Enum => "enum",
            AttributeKind::Bool => "bool",
            AttributeKind::List => "list",
        };
        if attr.variants.is_empty() {
            out.push_str(&format!("{:<8}{}\n", attr.name, kind));
        } else {
            out.push_str(&format!(
                "{:<8}{}  {}\n",
                attr.name,
                kind,
                style(attr.variants.join(" | ")).dim()
            ));
        }
    }
    out
}

/// One demo section: a heading followed by a sentence per match.
pub fn render_demo_section(title: &str, products: &[&Product], adjective: &str) -> String {
    let mut out = format!("{}\n", style(format!("=== {} ===", title)).bold());
    if products.is_empty() {
        out.push_str("(nothing)\n");
    }
    for product in products {
        out.push_str(&format!("{} is {}.\n", product.name, adjective));
    }
    out
}
