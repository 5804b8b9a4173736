//! Durable storage for the full product map.
//!
//! The whole inventory is read and written as one JSON object mapping product
//! name to its fields. There are no partial writes: every save rewrites the
//! file. The rewrite is not an atomic swap, so a crash mid-write can leave a
//! truncated file behind; the next load then treats it as corrupt and starts
//! with an empty inventory.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::error::{InventoryError, Result};
use crate::models::{generate_sku, Product, DEFAULT_CATEGORY, DEFAULT_VALUE};

/// Products keyed by name, in name order
pub type RecordMap = BTreeMap<String, Product>;

/// Load/save of the full record map.
pub trait RecordStore {
    /// Reads every record. A missing store yields an empty map; unusable
    /// content yields `InventoryError::Corrupt`.
    fn load(&self) -> Result<RecordMap>;

    /// Replaces the stored records with `records`.
    fn save(&self, records: &RecordMap) -> Result<()>;
}

/// Record store backed by a single pretty-printed JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RecordStore for JsonFileStore {
    fn load(&self) -> Result<RecordMap> {
        if !self.path.exists() {
            log::info!(
                "No inventory file at {}, starting empty",
                self.path.display()
            );
            return Ok(RecordMap::new());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::InvalidData {
                InventoryError::Corrupt(format!("not valid UTF-8: {}", e))
            } else {
                InventoryError::Io(e)
            }
        })?;
        let decoded = decode_records(&content, Utc::now())?;
        log::info!(
            "Loaded {} products from {}",
            decoded.records.len(),
            self.path.display()
        );

        // SKUs handed out to legacy records must survive the next launch
        if decoded.assigned_skus > 0 {
            match self.save(&decoded.records) {
                Ok(()) => log::info!(
                    "Stored {} newly assigned SKUs in {}",
                    decoded.assigned_skus,
                    self.path.display()
                ),
                Err(e) => log::warn!("Could not store newly assigned SKUs: {}", e),
            }
        }
        Ok(decoded.records)
    }

    fn save(&self, records: &RecordMap) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = encode_records(records)?;
        std::fs::write(&self.path, content)?;

        log::debug!(
            "Saved {} products to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// On-disk shape of one record. The name is the map key, not a field.
#[derive(Serialize)]
struct StoredProduct<'a> {
    quantity: u32,
    value: &'a str,
    category: &'a str,
    description: &'a str,
    min_stock: u32,
    max_stock: Option<u32>,
    created_at: &'a DateTime<Utc>,
    updated_at: &'a DateTime<Utc>,
    sku: &'a str,
}

impl<'a> From<&'a Product> for StoredProduct<'a> {
    fn from(product: &'a Product) -> Self {
        Self {
            quantity: product.quantity,
            value: &product.value,
            category: &product.category,
            description: &product.description,
            min_stock: product.min_stock,
            max_stock: product.max_stock,
            created_at: &product.created_at,
            updated_at: &product.updated_at,
            sku: &product.sku,
        }
    }
}

/// Serializes the record map to pretty-printed JSON
pub fn encode_records(records: &RecordMap) -> Result<String> {
    let stored: BTreeMap<&str, StoredProduct<'_>> = records
        .iter()
        .map(|(name, product)| (name.as_str(), StoredProduct::from(product)))
        .collect();
    Ok(serde_json::to_string_pretty(&stored)?)
}

/// Records read from a document, plus how many of them were given a new SKU
#[derive(Debug)]
pub struct Decoded {
    pub records: RecordMap,
    pub assigned_skus: usize,
}

/// Parses a JSON inventory document.
///
/// The document must be an object. Individual entries are decoded leniently:
/// missing or wrong-typed fields take their defaults, and `now` stands in for
/// absent timestamps. Entries without a SKU get a generated one, counted in
/// [`Decoded::assigned_skus`].
pub fn decode_records(content: &str, now: DateTime<Utc>) -> Result<Decoded> {
    let root: Value =
        serde_json::from_str(content).map_err(|e| InventoryError::Corrupt(e.to_string()))?;

    let Value::Object(entries) = root else {
        return Err(InventoryError::Corrupt(
            "expected an object mapping product names to records".to_string(),
        ));
    };

    let mut records = RecordMap::new();
    let mut assigned_skus = 0;
    for (name, entry) in entries {
        if name.trim().is_empty() {
            log::warn!("Skipping inventory entry with an empty name");
            continue;
        }
        match entry {
            Value::Object(fields) => {
                let (product, assigned) = decode_product(&name, &fields, now);
                if assigned {
                    assigned_skus += 1;
                }
                records.insert(name, product);
            }
            other => {
                log::warn!("Skipping malformed entry '{}': {}", name, other);
            }
        }
    }
    Ok(Decoded {
        records,
        assigned_skus,
    })
}

/// Returns the product and whether its SKU was generated here
fn decode_product(
    name: &str,
    fields: &Map<String, Value>,
    now: DateTime<Utc>,
) -> (Product, bool) {
    let created_at = fields
        .get("created_at")
        .and_then(as_timestamp)
        .unwrap_or(now);
    let updated_at = fields
        .get("updated_at")
        .and_then(as_timestamp)
        .unwrap_or(created_at);

    let (sku, assigned) = match fields.get("sku").and_then(Value::as_str) {
        Some(sku) if !sku.trim().is_empty() => (sku.to_string(), false),
        _ => {
            let sku = generate_sku(name);
            log::debug!("Assigned SKU {} to legacy record '{}'", sku, name);
            (sku, true)
        }
    };

    let product = Product {
        name: name.to_string(),
        quantity: fields.get("quantity").and_then(as_count).unwrap_or(0),
        value: fields
            .get("value")
            .and_then(as_money_text)
            .unwrap_or_else(|| DEFAULT_VALUE.to_string()),
        category: fields
            .get("category")
            .and_then(Value::as_str)
            .filter(|c| !c.trim().is_empty())
            .unwrap_or(DEFAULT_CATEGORY)
            .to_string(),
        description: fields
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        min_stock: fields.get("min_stock").and_then(as_count).unwrap_or(0),
        max_stock: fields.get("max_stock").and_then(as_limit),
        created_at,
        updated_at,
        sku,
    };
    (product, assigned)
}

/// Non-negative count; negatives clamp to 0, fractions truncate
fn as_count(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => {
            if let Some(u) = n.as_u64() {
                Some(u32::try_from(u).unwrap_or(u32::MAX))
            } else if let Some(i) = n.as_i64() {
                Some(u32::try_from(i.max(0)).unwrap_or(0))
            } else {
                n.as_f64().map(|f| {
                    if f.is_finite() && f > 0.0 {
                        f.min(f64::from(u32::MAX)) as u32
                    } else {
                        0
                    }
                })
            }
        }
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    }
}

/// Optional upper bound; negative or non-numeric means "no maximum"
fn as_limit(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n.as_u64().map(|u| u32::try_from(u).unwrap_or(u32::MAX)),
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    }
}

fn as_money_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn as_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    let text = value.as_str()?.trim();
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    // Naive ISO timestamps without an offset are read as UTC
    NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
