use chrono::{DateTime, Local, Utc};
use rust_decimal::Decimal;

use crate::models::Product;

/// Formats an amount as "$1,234.50"
pub fn format_money(amount: Decimal) -> String {
    let fixed = format!("{:.2}", amount.round_dp(2).abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount.is_sign_negative() && !amount.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}${grouped}.{cents}")
}

/// Unit value for display; non-numeric text is shown as entered
pub fn format_unit_value(product: &Product) -> String {
    match product.unit_value() {
        Some(amount) => format_money(amount),
        None => product.value.clone(),
    }
}

/// "(Min: 2, Max: 20)", or `None` when neither limit is set
pub fn format_limits(product: &Product) -> Option<String> {
    let mut limits = Vec::new();
    if product.min_stock > 0 {
        limits.push(format!("Min: {}", product.min_stock));
    }
    if let Some(max) = product.max_stock {
        limits.push(format!("Max: {max}"));
    }
    if limits.is_empty() {
        None
    } else {
        Some(format!("({})", limits.join(", ")))
    }
}

pub fn format_timestamp(at: &DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// "(3 of 10)"
pub fn format_count(shown: usize, total: usize) -> String {
    format!("({shown} of {total})")
}

pub fn format_empty_message(total: usize, search_term: &str) -> String {
    if total == 0 {
        return "No products yet. Add your first product to get started.".to_string();
    }
    let term = search_term.trim();
    if term.is_empty() {
        "No products to show".to_string()
    } else {
        format!("No products found matching '{term}'")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn product(value: &str, min_stock: u32, max_stock: Option<u32>) -> Product {
        let now = Utc::now();
        Product {
            name: "Widget".to_string(),
            quantity: 1,
            value: value.to_string(),
            category: "Parts".to_string(),
            description: String::new(),
            min_stock,
            max_stock,
            created_at: now,
            updated_at: now,
            sku: "WID-00000000".to_string(),
        }
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(Decimal::new(3000, 2)), "$30.00");
        assert_eq!(format_money(Decimal::ZERO), "$0.00");
        assert_eq!(format_money(Decimal::new(123456789, 2)), "$1,234,567.89");
        assert_eq!(format_money(Decimal::new(100000, 0)), "$100,000.00");
        assert_eq!(format_money(Decimal::new(-1050, 2)), "-$10.50");
    }

    #[test]
    fn test_format_unit_value() {
        assert_eq!(format_unit_value(&product("2.5", 0, None)), "$2.50");
        assert_eq!(format_unit_value(&product("bad", 0, None)), "bad");
    }

    #[test]
    fn test_format_limits() {
        assert_eq!(format_limits(&product("1", 0, None)), None);
        assert_eq!(format_limits(&product("1", 2, None)).unwrap(), "(Min: 2)");
        assert_eq!(
            format_limits(&product("1", 2, Some(20))).unwrap(),
            "(Min: 2, Max: 20)"
        );
        assert_eq!(format_limits(&product("1", 0, Some(5))).unwrap(), "(Max: 5)");
    }

    #[test]
    fn test_format_count_and_empty_message() {
        assert_eq!(format_count(3, 10), "(3 of 10)");
        assert!(format_empty_message(0, "").contains("No products yet"));
        assert_eq!(
            format_empty_message(5, " bolt "),
            "No products found matching 'bolt'"
        );
    }
}
