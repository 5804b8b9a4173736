use crate::error::InventoryError;
use crate::models::NewProduct;
use crate::query::SortOrder;
use crate::validators::{
    validate_category, validate_description, validate_product_name, validate_quantity,
    validate_stock_limit, validate_stock_limits, validate_value, ValidationError,
};

#[derive(PartialEq, Clone, Copy)]
pub enum Screen {
    Inventory,
    AddProduct,
}

#[derive(PartialEq, Clone, Copy, Debug)]
pub enum StatusKind {
    Info,
    Warning,
    Error,
}

pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Info,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: StatusKind::Error,
            text: text.into(),
        }
    }

    /// Rejected input is a warning; storage trouble is an error
    pub fn from_error(err: &InventoryError) -> Self {
        if err.is_validation() {
            Self::warning(err.to_string())
        } else {
            Self::error(err.to_string())
        }
    }
}

pub struct AppState {
    pub current_screen: Screen,
    pub search_term: String,
    pub sort_order: SortOrder,
    pub status: Option<StatusMessage>,
    /// Product awaiting delete confirmation
    pub pending_delete: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            current_screen: Screen::Inventory,
            search_term: String::new(),
            sort_order: SortOrder::ByName,
            status: None,
            pending_delete: None,
        }
    }
}

/// Raw text of the add-product form
#[derive(Default)]
pub struct AddProductForm {
    pub name: String,
    pub quantity: String,
    pub value: String,
    pub category: String,
    pub description: String,
    pub min_stock: String,
    pub max_stock: String,
}

impl AddProductForm {
    /// Validates every field and builds the controller input
    pub fn to_new_product(&self) -> Result<NewProduct, ValidationError> {
        let name = validate_product_name(&self.name)?;
        let quantity = validate_quantity(&self.quantity)?;
        let value = validate_value(&self.value)?;

        let category = self.category.trim();
        validate_category(category)?;
        let description = self.description.trim();
        validate_description(description)?;

        let min_stock = validate_stock_limit(&self.min_stock, "Min stock")?;
        let max_stock = validate_stock_limit(&self.max_stock, "Max stock")?;
        validate_stock_limits(min_stock, max_stock)?;

        let mut product = NewProduct::new(name, quantity, value);
        if !category.is_empty() {
            product = product.with_category(category);
        }
        if !description.is_empty() {
            product = product.with_description(description);
        }
        product.min_stock = min_stock;
        product.max_stock = max_stock;
        Ok(product)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> AddProductForm {
        AddProductForm {
            name: " Widget ".to_string(),
            quantity: "10".to_string(),
            value: "$2.5".to_string(),
            category: "Parts".to_string(),
            description: "  Blue widget  ".to_string(),
            min_stock: "2".to_string(),
            max_stock: "20".to_string(),
        }
    }

    #[test]
    fn test_form_builds_new_product() {
        let product = filled_form().to_new_product().unwrap();
        assert_eq!(product.name, "Widget");
        assert_eq!(product.quantity, 10);
        assert_eq!(product.value, "2.50");
        assert_eq!(product.category.as_deref(), Some("Parts"));
        assert_eq!(product.description.as_deref(), Some("Blue widget"));
        assert_eq!(product.min_stock, Some(2));
        assert_eq!(product.max_stock, Some(20));
    }

    #[test]
    fn test_form_optional_fields_left_unset() {
        let form = AddProductForm {
            name: "Bolt".to_string(),
            quantity: "3".to_string(),
            ..Default::default()
        };
        let product = form.to_new_product().unwrap();
        assert_eq!(product.value, "0");
        assert_eq!(product.category, None);
        assert_eq!(product.description, None);
        assert_eq!(product.min_stock, None);
        assert_eq!(product.max_stock, None);
    }

    #[test]
    fn test_form_reports_first_invalid_field() {
        let mut form = filled_form();
        form.quantity = "lots".to_string();
        assert_eq!(
            form.to_new_product(),
            Err(ValidationError::QuantityNotNumber)
        );

        let mut form = filled_form();
        form.min_stock = "30".to_string();
        assert_eq!(
            form.to_new_product(),
            Err(ValidationError::StockLimitsInverted)
        );
    }

    #[test]
    fn test_form_clear() {
        let mut form = filled_form();
        form.clear();
        assert!(form.name.is_empty());
        assert!(form.max_stock.is_empty());
    }
}
