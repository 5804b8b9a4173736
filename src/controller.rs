//! The only gateway for changing inventory records.
//!
//! Every mutation follows the same order: validate against the current
//! records, write the would-be record map to the store, then commit it in
//! memory and notify the observer. If the write fails nothing changes in
//! memory, so memory and disk never disagree after a failed save.

use chrono::Utc;
use rust_decimal::Decimal;

use crate::error::{InventoryError, Result};
use crate::models::{NewProduct, Product};
use crate::query::InventoryStats;
use crate::store::{RecordMap, RecordStore};

/// Receives a signal after each successful mutation.
///
/// Implementors re-read whatever they display from the controller; no diff
/// is provided.
pub trait InventoryObserver {
    fn on_inventory_changed(&self);
}

pub struct InventoryController {
    store: Box<dyn RecordStore>,
    records: RecordMap,
    observer: Option<Box<dyn InventoryObserver>>,
}

impl InventoryController {
    /// Creates a controller with an empty inventory. Call [`load`](Self::load)
    /// to read persisted records.
    pub fn new(store: Box<dyn RecordStore>) -> Self {
        Self {
            store,
            records: RecordMap::new(),
            observer: None,
        }
    }

    pub fn set_observer(&mut self, observer: Box<dyn InventoryObserver>) {
        self.observer = Some(observer);
    }

    /// Replaces the in-memory records with the stored ones.
    ///
    /// On any store error the inventory is left empty and the error is
    /// returned so the caller can tell the user; the application carries on.
    pub fn load(&mut self) -> Result<usize> {
        match self.store.load() {
            Ok(records) => {
                self.records = records;
                Ok(self.records.len())
            }
            Err(e) => {
                log::warn!("Starting with empty inventory: {}", e);
                self.records.clear();
                Err(e)
            }
        }
    }

    /// Adds a new product. Fails without side effects if the name is empty
    /// or already taken.
    pub fn add(&mut self, new: NewProduct) -> Result<()> {
        if new.name.trim().is_empty() {
            log::debug!("Rejected add: empty name");
            return Err(InventoryError::EmptyName);
        }
        if self.records.contains_key(&new.name) {
            log::debug!("Rejected add: '{}' already exists", new.name);
            return Err(InventoryError::DuplicateName(new.name));
        }

        let product = Product::from_new(new, Utc::now());
        let name = product.name.clone();
        log::info!("Adding product '{}' ({})", name, product.sku);

        let mut next = self.records.clone();
        next.insert(name, product);
        self.commit(next)
    }

    /// Changes the quantity of `name` by `delta`.
    ///
    /// The result is floored at zero first and then checked against the
    /// product's thresholds, so a product with a minimum refuses any
    /// decrement that would end below it.
    pub fn update_quantity(&mut self, name: &str, delta: i64) -> Result<()> {
        let Some(current) = self.records.get(name) else {
            log::debug!("Rejected quantity change: '{}' not found", name);
            return Err(InventoryError::UnknownProduct(name.to_string()));
        };

        let candidate = current.candidate_quantity(delta);
        if let Err(e) = current.check_thresholds(candidate) {
            log::debug!("Rejected quantity change: {}", e);
            return Err(e);
        }

        let mut updated = current.clone();
        updated.quantity = candidate;
        updated.updated_at = Utc::now();
        log::debug!(
            "Quantity of '{}' {} -> {}",
            name,
            current.quantity,
            candidate
        );

        let mut next = self.records.clone();
        next.insert(name.to_string(), updated);
        self.commit(next)
    }

    /// Removes `name`. Returns `Ok(false)` when there was nothing to remove.
    pub fn delete(&mut self, name: &str) -> Result<bool> {
        if !self.records.contains_key(name) {
            return Ok(false);
        }

        let mut next = self.records.clone();
        next.remove(name);
        self.commit(next)?;
        log::info!("Deleted product '{}'", name);
        Ok(true)
    }

    /// Read-only view of every record, in name order
    pub fn get_all(&self) -> &RecordMap {
        &self.records
    }

    pub fn get(&self, name: &str) -> Option<&Product> {
        self.records.get(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Products with a minimum set and quantity at or below it
    pub fn get_low_stock(&self) -> Vec<&Product> {
        self.records.values().filter(|p| p.is_low_stock()).collect()
    }

    pub fn get_out_of_stock(&self) -> Vec<&Product> {
        self.records
            .values()
            .filter(|p| p.is_out_of_stock())
            .collect()
    }

    /// Sum of value x quantity. A record whose value does not parse, or is
    /// negative, adds 0.
    pub fn get_total_value(&self) -> Decimal {
        self.records
            .values()
            .map(|p| {
                if p.unit_value().is_none() {
                    log::debug!("Value {:?} of '{}' is not a valid amount", p.value, p.name);
                }
                p.stock_value()
            })
            .sum()
    }

    pub fn stats(&self) -> InventoryStats {
        InventoryStats::collect(self.records.values())
    }

    fn commit(&mut self, next: RecordMap) -> Result<()> {
        if let Err(e) = self.store.save(&next) {
            log::error!("Failed to save inventory: {}", e);
            return Err(e);
        }
        self.records = next;
        if let Some(observer) = &self.observer {
            observer.on_inventory_changed();
        }
        Ok(())
    }
}
