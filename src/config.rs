use std::path::PathBuf;

const APP_DIR: &str = "inventory_manager";
const INVENTORY_FILE: &str = "inventory.json";

pub const APP_TITLE: &str = "Inventory Management System";

/// Runtime settings resolved at startup
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// JSON file holding the inventory
    pub data_file: PathBuf,
}

impl Settings {
    pub fn new(data_file: Option<PathBuf>) -> Self {
        Self {
            data_file: data_file.unwrap_or_else(default_data_file),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Returns the default inventory path: ~/.local/share/inventory_manager/inventory.json
pub fn default_data_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(INVENTORY_FILE)
}
