//! Inventory tracking: products with stock counts and low-stock alerts.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ModuleController;
use crate::error::StoreError;
use crate::progress::Achievement;
use crate::storage::Store;

pub const STORAGE_KEY: &str = "inventoryItems";

/// One tracked product or raw material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: Uuid,
    pub name: String,
    pub quantity: u32,
    pub threshold: u32,
}

impl InventoryItem {
    /// Stock at or below the threshold needs restocking.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.threshold
    }
}

/// The inventory list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct InventoryBook {
    pub items: Vec<InventoryItem>,
}

impl InventoryBook {
    pub fn load(store: &Store) -> Result<Self, StoreError> {
        store.get_or_default(STORAGE_KEY)
    }

    pub fn save(&self, store: &Store) -> Result<(), StoreError> {
        store.set_json(STORAGE_KEY, self)
    }

    /// Add a product. Requires a name and a quantity entry; numeric text
    /// that does not parse counts as 0. Returns None when either required
    /// field is empty.
    pub fn add(&mut self, name: &str, quantity: &str, threshold: &str) -> Option<Uuid> {
        if name.trim().is_empty() || quantity.trim().is_empty() {
            return None;
        }
        let item = InventoryItem {
            id: Uuid::new_v4(),
            name: name.to_string(),
            quantity: quantity.trim().parse().unwrap_or(0),
            threshold: threshold.trim().parse().unwrap_or(0),
        };
        let id = item.id;
        self.items.push(item);
        Some(id)
    }

    pub fn update(
        &mut self,
        id: Uuid,
        name: Option<&str>,
        quantity: Option<&str>,
        threshold: Option<&str>,
    ) -> bool {
        let Some(item) = self.items.iter_mut().find(|i| i.id == id) else {
            return false;
        };
        if let Some(name) = name {
            item.name = name.to_string();
        }
        if let Some(quantity) = quantity {
            item.quantity = quantity.trim().parse().unwrap_or(0);
        }
        if let Some(threshold) = threshold {
            item.threshold = threshold.trim().parse().unwrap_or(0);
        }
        true
    }

    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        before != self.items.len()
    }

    /// Items at or below their low-stock threshold.
    pub fn low_stock(&self) -> impl Iterator<Item = &InventoryItem> {
        self.items.iter().filter(|i| i.is_low_stock())
    }
}

impl ModuleController for InventoryBook {
    fn name(&self) -> &'static str {
        "inventario"
    }

    fn title(&self) -> &'static str {
        "Gestión de Inventario"
    }

    fn achievement(&self) -> Achievement {
        Achievement::StockMaster
    }

    fn reward_points(&self) -> u32 {
        20
    }

    fn is_complete(&self) -> bool {
        !self.items.is_empty()
    }

    fn incomplete_reason(&self) -> &'static str {
        "Agrega tu primer producto para completar"
    }

    fn render(&self) -> String {
        let mut out = format!("{}\n\n", self.title());
        if self.items.is_empty() {
            let _ = writeln!(out, "Aún no has agregado productos a tu inventario.");
            return out;
        }
        for item in &self.items {
            let marker = if item.is_low_stock() { "  [STOCK BAJO]" } else { "" };
            let _ = writeln!(
                out,
                "{} — cantidad {}, umbral {}{marker}",
                item.name, item.quantity, item.threshold
            );
        }
        out
    }

    fn export_stem(&self) -> &'static str {
        "reporte-inventario"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_requires_name_and_quantity() {
        let mut book = InventoryBook::default();
        assert!(book.add("", "50", "10").is_none());
        assert!(book.add("Mermelada", "", "10").is_none());
        assert!(book.add("Mermelada de Fresa", "50", "10").is_some());
        assert_eq!(book.items.len(), 1);
    }

    #[test]
    fn quantity_text_that_does_not_parse_counts_as_zero() {
        let mut book = InventoryBook::default();
        book.add("Frascos", "muchos", "x").unwrap();
        assert_eq!(book.items[0].quantity, 0);
        assert_eq!(book.items[0].threshold, 0);
    }

    #[test]
    fn low_stock_includes_the_threshold_boundary() {
        let mut book = InventoryBook::default();
        book.add("Azúcar", "10", "10").unwrap();
        book.add("Fresas", "11", "10").unwrap();
        let low: Vec<&str> = book.low_stock().map(|i| i.name.as_str()).collect();
        assert_eq!(low, vec!["Azúcar"]);
    }

    #[test]
    fn complete_with_at_least_one_item() {
        let mut book = InventoryBook::default();
        assert!(!book.is_complete());
        book.add("Mermelada", "50", "10").unwrap();
        assert!(book.is_complete());
    }

    #[test]
    fn persists_as_a_plain_array() {
        let store = Store::open_memory().unwrap();
        let mut book = InventoryBook::default();
        book.add("Mermelada", "50", "10").unwrap();
        book.save(&store).unwrap();

        let raw = store.get_raw(STORAGE_KEY).unwrap().unwrap();
        assert!(raw.starts_with('['));
        assert_eq!(InventoryBook::load(&store).unwrap(), book);
    }
}
