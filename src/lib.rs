//! Inventory Manager - desktop stock tracking with JSON persistence
//!
//! Products are added, adjusted and deleted through [`InventoryController`],
//! which mirrors every change to a [`RecordStore`] and tells the registered
//! [`InventoryObserver`] to redraw.

pub mod config;
pub mod controller;
pub mod error;
pub mod formatters;
pub mod io;
pub mod models;
pub mod query;
pub mod store;
pub mod ui;
pub mod validators;

// Re-export commonly used items
pub use config::Settings;
pub use controller::{InventoryController, InventoryObserver};
pub use error::{InventoryError, Result};
pub use io::export_csv;
pub use models::{NewProduct, Product, StockStatus};
pub use query::{InventoryStats, SortOrder};
pub use store::{JsonFileStore, RecordMap, RecordStore};
