use rust_decimal::Decimal;
use std::cmp::Ordering;

use crate::models::Product;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum SortOrder {
    #[default]
    ByName,
    ByQuantity,
    ByValue,
    ByCategory,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::ByName => "Name",
            SortOrder::ByQuantity => "Quantity",
            SortOrder::ByValue => "Value",
            SortOrder::ByCategory => "Category",
        }
    }

    pub fn all() -> &'static [SortOrder] {
        &[
            SortOrder::ByName,
            SortOrder::ByQuantity,
            SortOrder::ByValue,
            SortOrder::ByCategory,
        ]
    }
}

/// Aggregate figures shown above the product list
#[derive(Debug, Default, Clone, PartialEq)]
pub struct InventoryStats {
    pub total_products: usize,
    pub low_stock: usize,
    pub out_of_stock: usize,
    pub total_value: Decimal,
}

impl InventoryStats {
    pub fn collect<'a>(products: impl IntoIterator<Item = &'a Product>) -> Self {
        products
            .into_iter()
            .fold(Self::default(), |mut stats, product| {
                stats.total_products += 1;
                if product.is_low_stock() {
                    stats.low_stock += 1;
                }
                if product.is_out_of_stock() {
                    stats.out_of_stock += 1;
                }
                stats.total_value += product.stock_value();
                stats
            })
    }
}

/// Keeps products whose name or category contains `term`, ignoring case.
/// A blank term keeps everything.
pub fn filter<'a>(
    products: impl IntoIterator<Item = &'a Product>,
    term: &str,
) -> Vec<&'a Product> {
    let needle = term.trim().to_lowercase();
    products
        .into_iter()
        .filter(|p| {
            needle.is_empty()
                || p.name.to_lowercase().contains(&needle)
                || p.category.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Sorts in place. Quantity and value sort high to low, the rest A-Z;
/// ties fall back to the name.
pub fn sort(products: &mut [&Product], order: SortOrder) {
    products.sort_by(|a, b| {
        let primary = match order {
            SortOrder::ByName => Ordering::Equal,
            SortOrder::ByQuantity => b.quantity.cmp(&a.quantity),
            SortOrder::ByValue => unit_value_or_zero(b).cmp(&unit_value_or_zero(a)),
            SortOrder::ByCategory => a.category.cmp(&b.category),
        };
        primary.then_with(|| a.name.cmp(&b.name))
    });
}

fn unit_value_or_zero(product: &Product) -> Decimal {
    product.unit_value().unwrap_or(Decimal::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn product(name: &str, quantity: u32, value: &str, category: &str) -> Product {
        let now = Utc::now();
        Product {
            name: name.to_string(),
            quantity,
            value: value.to_string(),
            category: category.to_string(),
            description: String::new(),
            min_stock: 0,
            max_stock: None,
            created_at: now,
            updated_at: now,
            sku: "TST-00000000".to_string(),
        }
    }

    fn names(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.name.clone()).collect()
    }

    fn sample() -> Vec<Product> {
        vec![
            product("Hammer", 5, "12.00", "Tools"),
            product("Bolt", 100, "0.10", "Hardware"),
            product("Anvil", 1, "bad", "Tools"),
            product("Nail", 100, "0.05", "Hardware"),
        ]
    }

    #[test]
    fn test_filter_matches_name_and_category() {
        let products = sample();
        assert_eq!(names(&filter(&products, "HAM")), vec!["Hammer"]);
        assert_eq!(names(&filter(&products, "tools")), vec!["Hammer", "Anvil"]);
        assert_eq!(filter(&products, "  ").len(), 4);
        assert!(filter(&products, "xyz").is_empty());
    }

    #[test]
    fn test_sort_by_name() {
        let products = sample();
        let mut list = filter(&products, "");
        sort(&mut list, SortOrder::ByName);
        assert_eq!(names(&list), vec!["Anvil", "Bolt", "Hammer", "Nail"]);
    }

    #[test]
    fn test_sort_by_quantity_descending_with_name_ties() {
        let products = sample();
        let mut list = filter(&products, "");
        sort(&mut list, SortOrder::ByQuantity);
        assert_eq!(names(&list), vec!["Bolt", "Nail", "Hammer", "Anvil"]);
    }

    #[test]
    fn test_sort_by_value_treats_bad_as_zero() {
        let products = sample();
        let mut list = filter(&products, "");
        sort(&mut list, SortOrder::ByValue);
        assert_eq!(names(&list), vec!["Hammer", "Bolt", "Nail", "Anvil"]);
    }

    #[test]
    fn test_sort_by_category() {
        let products = sample();
        let mut list = filter(&products, "");
        sort(&mut list, SortOrder::ByCategory);
        assert_eq!(names(&list), vec!["Bolt", "Nail", "Anvil", "Hammer"]);
    }

    #[test]
    fn test_stats_collect() {
        let mut products = sample();
        products[0].min_stock = 5;
        products.push(product("Saw", 0, "20", "Tools"));

        let stats = InventoryStats::collect(&products);
        assert_eq!(stats.total_products, 5);
        assert_eq!(stats.low_stock, 1);
        assert_eq!(stats.out_of_stock, 1);
        // 5 * 12.00 + 100 * 0.10 + 100 * 0.05
        assert_eq!(stats.total_value, Decimal::new(7500, 2));
    }
}
