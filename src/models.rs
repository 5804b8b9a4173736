use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::{InventoryError, Result};

/// Category assigned when none is given
pub const DEFAULT_CATEGORY: &str = "Uncategorized";

/// Value assigned when none is given
pub const DEFAULT_VALUE: &str = "0";

/// Stock level of a product relative to its thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StockStatus {
    OutOfStock,
    LowStock,
    AtCapacity,
    InStock,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "Out of Stock",
            StockStatus::LowStock => "Low Stock",
            StockStatus::AtCapacity => "At Capacity",
            StockStatus::InStock => "In Stock",
        }
    }
}

/// One inventory record, keyed by `name` in the inventory map.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub name: String,
    pub quantity: u32,
    /// Monetary value per unit, kept as text so unparseable input survives a round trip
    pub value: String,
    pub category: String,
    pub description: String,
    /// 0 means no minimum
    pub min_stock: u32,
    pub max_stock: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub sku: String,
}

impl Product {
    /// Builds a fresh record from form input. Only the controller inserts these.
    pub(crate) fn from_new(new: NewProduct, now: DateTime<Utc>) -> Self {
        let sku = generate_sku(&new.name);
        Self {
            value: normalize_value(&new.value),
            category: new
                .category
                .map(|c| c.trim().to_string())
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
            description: new.description.map(|d| d.trim().to_string()).unwrap_or_default(),
            min_stock: new.min_stock.unwrap_or(0),
            max_stock: new.max_stock,
            created_at: now,
            updated_at: now,
            sku,
            quantity: new.quantity,
            name: new.name,
        }
    }

    /// Parsed unit value, `None` if `value` is not a non-negative decimal
    pub fn unit_value(&self) -> Option<Decimal> {
        parse_money(&self.value).filter(|amount| !amount.is_sign_negative())
    }

    /// Unit value times quantity; unparseable or negative values count as zero
    pub fn stock_value(&self) -> Decimal {
        self.unit_value().unwrap_or(Decimal::ZERO) * Decimal::from(self.quantity)
    }

    pub fn is_out_of_stock(&self) -> bool {
        self.quantity == 0
    }

    pub fn is_low_stock(&self) -> bool {
        self.min_stock > 0 && self.quantity <= self.min_stock
    }

    pub fn stock_status(&self) -> StockStatus {
        if self.is_out_of_stock() {
            StockStatus::OutOfStock
        } else if self.is_low_stock() {
            StockStatus::LowStock
        } else if self.max_stock.is_some_and(|max| self.quantity >= max) {
            StockStatus::AtCapacity
        } else {
            StockStatus::InStock
        }
    }

    /// Quantity after applying `delta`, floored at zero
    pub fn candidate_quantity(&self, delta: i64) -> u32 {
        let next = i64::from(self.quantity).saturating_add(delta).max(0);
        u32::try_from(next).unwrap_or(u32::MAX)
    }

    /// Checks `candidate` against the min/max thresholds.
    ///
    /// The floor at zero is applied before this check, so a product with a
    /// minimum rejects any decrement that would end below it, including one
    /// that bottoms out at zero.
    pub fn check_thresholds(&self, candidate: u32) -> Result<()> {
        if self.min_stock > 0 && candidate < self.min_stock {
            return Err(InventoryError::BelowMinimum {
                name: self.name.clone(),
                candidate,
                min_stock: self.min_stock,
            });
        }
        if let Some(max_stock) = self.max_stock {
            if candidate > max_stock {
                return Err(InventoryError::AboveMaximum {
                    name: self.name.clone(),
                    candidate,
                    max_stock,
                });
            }
        }
        Ok(())
    }
}

/// Input for adding a product. Optional fields fall back to record defaults.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub quantity: u32,
    pub value: String,
    pub category: Option<String>,
    pub description: Option<String>,
    pub min_stock: Option<u32>,
    pub max_stock: Option<u32>,
}

impl NewProduct {
    pub fn new(name: impl Into<String>, quantity: u32, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            value: value.into(),
            ..Default::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_min_stock(mut self, min_stock: u32) -> Self {
        self.min_stock = Some(min_stock);
        self
    }

    pub fn with_max_stock(mut self, max_stock: u32) -> Self {
        self.max_stock = Some(max_stock);
        self
    }
}

/// Parses a monetary amount like "2.50" into a decimal
pub fn parse_money(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed).ok()
}

/// Normalizes a monetary string to two decimal places.
///
/// Blank input becomes "0". Text that does not parse as a non-negative
/// decimal is kept as entered.
pub fn normalize_value(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return DEFAULT_VALUE.to_string();
    }
    match parse_money(trimmed) {
        Some(amount) if !amount.is_sign_negative() => format!("{:.2}", amount.round_dp(2)),
        _ => {
            log::warn!("Keeping non-numeric value as entered: {:?}", trimmed);
            trimmed.to_string()
        }
    }
}

/// Generates a short SKU such as "WID-3F9A12BC" from the product name.
pub fn generate_sku(name: &str) -> String {
    let prefix: String = name
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .take(3)
        .collect::<String>()
        .to_ascii_uppercase();
    let prefix = if prefix.is_empty() {
        "ITM".to_string()
    } else {
        prefix
    };
    let id = uuid::Uuid::new_v4().simple().to_string().to_ascii_uppercase();
    let suffix: String = id.chars().take(8).collect();
    format!("{}-{}", prefix, suffix)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(quantity: u32, min_stock: u32, max_stock: Option<u32>) -> Product {
        let new = NewProduct {
            name: "Widget".to_string(),
            quantity,
            value: "2.50".to_string(),
            min_stock: Some(min_stock),
            max_stock,
            ..Default::default()
        };
        Product::from_new(new, Utc::now())
    }

    #[test]
    fn test_from_new_applies_defaults() {
        let p = Product::from_new(NewProduct::new("Widget", 3, ""), Utc::now());
        assert_eq!(p.value, "0");
        assert_eq!(p.category, DEFAULT_CATEGORY);
        assert_eq!(p.description, "");
        assert_eq!(p.min_stock, 0);
        assert_eq!(p.max_stock, None);
        assert_eq!(p.created_at, p.updated_at);
        assert!(p.sku.starts_with("WID-"));
    }

    #[test]
    fn test_from_new_blank_category_uses_default() {
        let new = NewProduct::new("Widget", 1, "1").with_category("   ");
        let p = Product::from_new(new, Utc::now());
        assert_eq!(p.category, DEFAULT_CATEGORY);
    }

    #[test]
    fn test_normalize_value() {
        assert_eq!(normalize_value("2.5"), "2.50");
        assert_eq!(normalize_value(" 10 "), "10.00");
        assert_eq!(normalize_value("1.239"), "1.24");
        assert_eq!(normalize_value(""), "0");
        assert_eq!(normalize_value("bad"), "bad");
        assert_eq!(normalize_value("-3"), "-3");
    }

    #[test]
    fn test_stock_value_ignores_unparseable() {
        let mut p = product(3, 0, None);
        p.value = "10.00".to_string();
        assert_eq!(p.stock_value(), Decimal::new(3000, 2));
        p.value = "bad".to_string();
        assert_eq!(p.stock_value(), Decimal::ZERO);
    }

    #[test]
    fn test_negative_value_counts_as_zero() {
        let mut p = product(3, 0, None);
        p.value = "-3".to_string();
        assert_eq!(p.unit_value(), None);
        assert_eq!(p.stock_value(), Decimal::ZERO);
    }

    #[test]
    fn test_candidate_quantity_floors_at_zero() {
        let p = product(2, 0, None);
        assert_eq!(p.candidate_quantity(-5), 0);
        assert_eq!(p.candidate_quantity(3), 5);
        assert_eq!(p.candidate_quantity(i64::MIN), 0);
    }

    #[test]
    fn test_check_thresholds() {
        let p = product(5, 5, Some(10));
        assert!(p.check_thresholds(5).is_ok());
        assert!(p.check_thresholds(10).is_ok());
        assert!(matches!(
            p.check_thresholds(4),
            Err(InventoryError::BelowMinimum { min_stock: 5, .. })
        ));
        assert!(matches!(
            p.check_thresholds(11),
            Err(InventoryError::AboveMaximum { max_stock: 10, .. })
        ));
    }

    #[test]
    fn test_zero_minimum_allows_zero() {
        let p = product(1, 0, None);
        assert!(p.check_thresholds(0).is_ok());
    }

    #[test]
    fn test_stock_status() {
        assert_eq!(product(0, 2, None).stock_status(), StockStatus::OutOfStock);
        assert_eq!(product(2, 2, None).stock_status(), StockStatus::LowStock);
        assert_eq!(product(10, 2, Some(10)).stock_status(), StockStatus::AtCapacity);
        assert_eq!(product(5, 2, Some(10)).stock_status(), StockStatus::InStock);
    }

    #[test]
    fn test_generate_sku_shape() {
        let sku = generate_sku("a b-c_d");
        assert!(sku.starts_with("ABC-"));
        assert_eq!(sku.len(), 12);

        let fallback = generate_sku("!!!");
        assert!(fallback.starts_with("ITM-"));
    }
}
