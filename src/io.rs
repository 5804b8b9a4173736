use serde::Serialize;
use std::path::Path;

use crate::error::Result;
use crate::models::Product;

#[derive(Serialize)]
struct ExportRow<'a> {
    name: &'a str,
    sku: &'a str,
    category: &'a str,
    quantity: u32,
    value: &'a str,
    stock_value: String,
    min_stock: u32,
    max_stock: Option<u32>,
    status: &'static str,
    description: &'a str,
    created_at: String,
    updated_at: String,
}

/// Writes products as CSV with a header row. Returns the number of rows written.
pub fn export_csv<'a>(
    path: &Path,
    products: impl IntoIterator<Item = &'a Product>,
) -> Result<usize> {
    let mut writer = csv::Writer::from_path(path)?;
    let mut rows = 0;

    for product in products {
        writer.serialize(ExportRow {
            name: &product.name,
            sku: &product.sku,
            category: &product.category,
            quantity: product.quantity,
            value: &product.value,
            stock_value: format!("{:.2}", product.stock_value()),
            min_stock: product.min_stock,
            max_stock: product.max_stock,
            status: product.stock_status().as_str(),
            description: &product.description,
            created_at: product.created_at.to_rfc3339(),
            updated_at: product.updated_at.to_rfc3339(),
        })?;
        rows += 1;
    }

    writer.flush()?;
    log::info!("Exported {} products to {}", rows, path.display());
    Ok(rows)
}
