//! Validation of raw form input before it reaches the controller.

use lazy_static::lazy_static;
use regex::Regex;
use rust_decimal::Decimal;
use std::fmt;

use crate::models::{parse_money, DEFAULT_VALUE};

pub const MAX_NAME_LEN: usize = 100;
pub const MAX_QUANTITY: u32 = 999_999;
pub const MAX_CATEGORY_LEN: usize = 50;
pub const MAX_DESCRIPTION_LEN: usize = 500;

lazy_static! {
    static ref NAME_PATTERN: Regex = Regex::new(r"^[a-zA-Z0-9\s\-_]+$").expect("name pattern compiles");
    static ref CURRENCY_NOISE: Regex = Regex::new(r"[$,]").expect("currency pattern compiles");
}

/// Reason a form field was rejected. `Display` is the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    NameRequired,
    NameTooLong,
    NameInvalidChars,
    QuantityRequired,
    QuantityNotNumber,
    QuantityNegative,
    QuantityTooLarge,
    ValueNotNumber,
    ValueNegative,
    ValueTooLarge,
    CategoryTooLong,
    DescriptionTooLong,
    StockLimitNotNumber(&'static str),
    StockLimitsInverted,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::NameRequired => write!(f, "Product name is required"),
            ValidationError::NameTooLong => write!(
                f,
                "Product name must be less than {} characters",
                MAX_NAME_LEN
            ),
            ValidationError::NameInvalidChars => write!(
                f,
                "Product name can only contain letters, numbers, spaces, hyphens and underscores"
            ),
            ValidationError::QuantityRequired => write!(f, "Quantity is required"),
            ValidationError::QuantityNotNumber => write!(f, "Quantity must be a valid number"),
            ValidationError::QuantityNegative => write!(f, "Quantity must be a positive number"),
            ValidationError::QuantityTooLarge => write!(f, "Quantity exceeds maximum limit"),
            ValidationError::ValueNotNumber => write!(f, "Value must be a valid number"),
            ValidationError::ValueNegative => write!(f, "Value must be a positive number"),
            ValidationError::ValueTooLarge => write!(f, "Value exceeds maximum limit"),
            ValidationError::CategoryTooLong => write!(
                f,
                "Category must be less than {} characters",
                MAX_CATEGORY_LEN
            ),
            ValidationError::DescriptionTooLong => write!(
                f,
                "Description must be less than {} characters",
                MAX_DESCRIPTION_LEN
            ),
            ValidationError::StockLimitNotNumber(field) => {
                write!(f, "{} must be a number", field)
            }
            ValidationError::StockLimitsInverted => {
                write!(f, "Max stock must not be less than min stock")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Returns the trimmed name
pub fn validate_product_name(name: &str) -> Result<String, ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::NameRequired);
    }
    if trimmed.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::NameTooLong);
    }
    if !NAME_PATTERN.is_match(trimmed) {
        return Err(ValidationError::NameInvalidChars);
    }
    Ok(trimmed.to_string())
}

pub fn validate_quantity(quantity: &str) -> Result<u32, ValidationError> {
    let trimmed = quantity.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::QuantityRequired);
    }
    let parsed: i64 = trimmed
        .parse()
        .map_err(|_| ValidationError::QuantityNotNumber)?;
    if parsed < 0 {
        return Err(ValidationError::QuantityNegative);
    }
    match u32::try_from(parsed) {
        Ok(qty) if qty <= MAX_QUANTITY => Ok(qty),
        _ => Err(ValidationError::QuantityTooLarge),
    }
}

/// Accepts "$1,234.5" style input and returns it with two decimals.
/// Blank input is allowed and becomes "0".
pub fn validate_value(value: &str) -> Result<String, ValidationError> {
    if value.trim().is_empty() {
        return Ok(DEFAULT_VALUE.to_string());
    }
    let cleaned = CURRENCY_NOISE.replace_all(value, "");
    let amount = parse_money(&cleaned).ok_or(ValidationError::ValueNotNumber)?;
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(ValidationError::ValueNegative);
    }
    if amount > Decimal::new(99_999_999, 2) {
        return Err(ValidationError::ValueTooLarge);
    }
    Ok(format!("{:.2}", amount.round_dp(2)))
}

pub fn validate_category(category: &str) -> Result<(), ValidationError> {
    if category.chars().count() > MAX_CATEGORY_LEN {
        return Err(ValidationError::CategoryTooLong);
    }
    Ok(())
}

pub fn validate_description(description: &str) -> Result<(), ValidationError> {
    if description.chars().count() > MAX_DESCRIPTION_LEN {
        return Err(ValidationError::DescriptionTooLong);
    }
    Ok(())
}

/// Optional non-negative stock threshold; blank means "not set"
pub fn validate_stock_limit(
    raw: &str,
    field: &'static str,
) -> Result<Option<u32>, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<u32>()
        .map(Some)
        .map_err(|_| ValidationError::StockLimitNotNumber(field))
}

pub fn validate_stock_limits(min: Option<u32>, max: Option<u32>) -> Result<(), ValidationError> {
    match (min, max) {
        (Some(min), Some(max)) if max < min => Err(ValidationError::StockLimitsInverted),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert_eq!(validate_product_name("  Blue Widget-2_a ").unwrap(), "Blue Widget-2_a");
        assert_eq!(validate_product_name("   "), Err(ValidationError::NameRequired));
        assert_eq!(validate_product_name("Widget!"), Err(ValidationError::NameInvalidChars));
        assert_eq!(
            validate_product_name(&"x".repeat(101)),
            Err(ValidationError::NameTooLong)
        );
        assert!(validate_product_name(&"x".repeat(100)).is_ok());
    }

    #[test]
    fn test_validate_quantity() {
        assert_eq!(validate_quantity(" 42 "), Ok(42));
        assert_eq!(validate_quantity("0"), Ok(0));
        assert_eq!(validate_quantity(""), Err(ValidationError::QuantityRequired));
        assert_eq!(validate_quantity("abc"), Err(ValidationError::QuantityNotNumber));
        assert_eq!(validate_quantity("1.5"), Err(ValidationError::QuantityNotNumber));
        assert_eq!(validate_quantity("-1"), Err(ValidationError::QuantityNegative));
        assert_eq!(validate_quantity("1000000"), Err(ValidationError::QuantityTooLarge));
        assert_eq!(validate_quantity("999999"), Ok(999_999));
    }

    #[test]
    fn test_validate_value() {
        assert_eq!(validate_value("").unwrap(), "0");
        assert_eq!(validate_value("$1,234.5").unwrap(), "1234.50");
        assert_eq!(validate_value("2").unwrap(), "2.00");
        assert_eq!(validate_value("999999.99").unwrap(), "999999.99");
        assert_eq!(validate_value("1000000"), Err(ValidationError::ValueTooLarge));
        assert_eq!(validate_value("-1"), Err(ValidationError::ValueNegative));
        assert_eq!(validate_value("ten"), Err(ValidationError::ValueNotNumber));
    }

    #[test]
    fn test_validate_lengths() {
        assert!(validate_category("Tools").is_ok());
        assert_eq!(
            validate_category(&"c".repeat(51)),
            Err(ValidationError::CategoryTooLong)
        );
        assert!(validate_description("").is_ok());
        assert_eq!(
            validate_description(&"d".repeat(501)),
            Err(ValidationError::DescriptionTooLong)
        );
    }

    #[test]
    fn test_validate_stock_limits() {
        assert_eq!(validate_stock_limit("", "Min stock"), Ok(None));
        assert_eq!(validate_stock_limit(" 5 ", "Min stock"), Ok(Some(5)));
        let err = validate_stock_limit("five", "Max stock").unwrap_err();
        assert_eq!(err.to_string(), "Max stock must be a number");

        assert!(validate_stock_limits(Some(2), Some(20)).is_ok());
        assert!(validate_stock_limits(Some(2), None).is_ok());
        assert_eq!(
            validate_stock_limits(Some(5), Some(3)),
            Err(ValidationError::StockLimitsInverted)
        );
    }
}
