mod add_product;
mod inventory;

pub use add_product::AddProductScreen;
pub use inventory::{InventoryScreen, InventoryView};
