use std::fmt;

/// Unified error type for inventory operations
#[derive(Debug)]
pub enum InventoryError {
    /// Product name was empty or whitespace only
    EmptyName,
    /// A product with this name already exists
    DuplicateName(String),
    /// No product with this name exists
    UnknownProduct(String),
    /// Quantity change would fall below the configured minimum
    BelowMinimum {
        name: String,
        candidate: u32,
        min_stock: u32,
    },
    /// Quantity change would exceed the configured maximum
    AboveMaximum {
        name: String,
        candidate: u32,
        max_stock: u32,
    },
    /// File I/O error
    Io(std::io::Error),
    /// Failed to serialize or parse JSON
    Parse(serde_json::Error),
    /// Failed to write CSV
    Csv(csv::Error),
    /// Persisted inventory file is not usable
    Corrupt(String),
}

impl InventoryError {
    /// True for errors caused by rejected input rather than storage problems.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            InventoryError::EmptyName
                | InventoryError::DuplicateName(_)
                | InventoryError::UnknownProduct(_)
                | InventoryError::BelowMinimum { .. }
                | InventoryError::AboveMaximum { .. }
        )
    }
}

impl fmt::Display for InventoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InventoryError::EmptyName => write!(f, "Product name is required"),
            InventoryError::DuplicateName(name) => write!(f, "Product '{}' already exists", name),
            InventoryError::UnknownProduct(name) => write!(f, "Product '{}' not found", name),
            InventoryError::BelowMinimum {
                name,
                candidate,
                min_stock,
            } => write!(
                f,
                "Quantity of '{}' would drop to {} (minimum stock is {})",
                name, candidate, min_stock
            ),
            InventoryError::AboveMaximum {
                name,
                candidate,
                max_stock,
            } => write!(
                f,
                "Quantity of '{}' would rise to {} (maximum stock is {})",
                name, candidate, max_stock
            ),
            InventoryError::Io(e) => write!(f, "I/O error: {}", e),
            InventoryError::Parse(e) => write!(f, "Parse error: {}", e),
            InventoryError::Csv(e) => write!(f, "CSV error: {}", e),
            InventoryError::Corrupt(msg) => write!(f, "Inventory file is corrupted: {}", msg),
        }
    }
}

impl std::error::Error for InventoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            InventoryError::Io(e) => Some(e),
            InventoryError::Parse(e) => Some(e),
            InventoryError::Csv(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for InventoryError {
    fn from(err: std::io::Error) -> Self {
        InventoryError::Io(err)
    }
}

impl From<serde_json::Error> for InventoryError {
    fn from(err: serde_json::Error) -> Self {
        InventoryError::Parse(err)
    }
}

impl From<csv::Error> for InventoryError {
    fn from(err: csv::Error) -> Self {
        InventoryError::Csv(err)
    }
}

/// Result alias for inventory operations
pub type Result<T> = std::result::Result<T, InventoryError>;
