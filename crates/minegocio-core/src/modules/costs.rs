//! Cost calculator: fixed vs. variable line items and derived totals.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ModuleController;
use crate::error::StoreError;
use crate::finance;
use crate::progress::Achievement;
use crate::storage::Store;

pub const FIXED_KEY: &str = "fixedCosts";
pub const VARIABLE_KEY: &str = "variableCosts";
pub const UNITS_KEY: &str = "unitsProduced";

/// Which of the two cost lists a line item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CostKind {
    Fixed,
    Variable,
}

impl CostKind {
    pub fn title(self) -> &'static str {
        match self {
            CostKind::Fixed => "Costos Fijos",
            CostKind::Variable => "Costos Variables",
        }
    }
}

/// One cost line: a description and a money amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostItem {
    pub id: Uuid,
    pub name: String,
    pub amount: f64,
}

impl CostItem {
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            amount,
        }
    }
}

/// The two cost lists plus the units-produced input, persisted under the
/// three original storage keys.
#[derive(Debug, Clone, PartialEq)]
pub struct CostLedger {
    pub fixed: Vec<CostItem>,
    pub variable: Vec<CostItem>,
    /// Raw text; parsed on demand for the per-unit read-out.
    pub units_produced: String,
}

impl Default for CostLedger {
    /// The original seeds each list with one named zero-amount row.
    fn default() -> Self {
        Self {
            fixed: vec![CostItem::new("Arriendo", 0.0)],
            variable: vec![CostItem::new("Materia Prima", 0.0)],
            units_produced: String::new(),
        }
    }
}

impl CostLedger {
    pub fn load(store: &Store) -> Result<Self, StoreError> {
        let default = Self::default();
        Ok(Self {
            fixed: store.get_json(FIXED_KEY)?.unwrap_or(default.fixed),
            variable: store.get_json(VARIABLE_KEY)?.unwrap_or(default.variable),
            units_produced: store.get_json(UNITS_KEY)?.unwrap_or_default(),
        })
    }

    pub fn save(&self, store: &Store) -> Result<(), StoreError> {
        store.set_json(FIXED_KEY, &self.fixed)?;
        store.set_json(VARIABLE_KEY, &self.variable)?;
        store.set_json(UNITS_KEY, &self.units_produced)
    }

    fn list_mut(&mut self, kind: CostKind) -> &mut Vec<CostItem> {
        match kind {
            CostKind::Fixed => &mut self.fixed,
            CostKind::Variable => &mut self.variable,
        }
    }

    pub fn list(&self, kind: CostKind) -> &[CostItem] {
        match kind {
            CostKind::Fixed => &self.fixed,
            CostKind::Variable => &self.variable,
        }
    }

    /// Append a line. The amount is free text; invalid input counts as 0.
    pub fn push(&mut self, kind: CostKind, name: &str, amount: &str) -> Uuid {
        let item = CostItem::new(name, finance::parse_amount(amount));
        let id = item.id;
        self.list_mut(kind).push(item);
        id
    }

    /// Update a line by id across both lists. Returns false when no line
    /// has that id.
    pub fn update(&mut self, id: Uuid, name: Option<&str>, amount: Option<&str>) -> bool {
        for item in self.fixed.iter_mut().chain(self.variable.iter_mut()) {
            if item.id == id {
                if let Some(name) = name {
                    item.name = name.to_string();
                }
                if let Some(amount) = amount {
                    item.amount = finance::parse_amount(amount);
                }
                return true;
            }
        }
        false
    }

    /// Remove a line by id from whichever list holds it.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.fixed.len() + self.variable.len();
        self.fixed.retain(|i| i.id != id);
        self.variable.retain(|i| i.id != id);
        before != self.fixed.len() + self.variable.len()
    }

    pub fn total_fixed(&self) -> f64 {
        finance::total_amount(self.fixed.iter().map(|i| i.amount))
    }

    pub fn total_variable(&self) -> f64 {
        finance::total_amount(self.variable.iter().map(|i| i.amount))
    }

    /// Total money needed to operate over the period.
    pub fn grand_total(&self) -> f64 {
        self.total_fixed() + self.total_variable()
    }

    /// Variable cost of one produced unit, if the inputs allow it.
    pub fn variable_cost_per_unit(&self) -> Option<f64> {
        let units = finance::parse_number(&self.units_produced)?;
        finance::variable_cost_per_unit(self.total_variable(), units)
    }
}

impl ModuleController for CostLedger {
    fn name(&self) -> &'static str {
        "costos"
    }

    fn title(&self) -> &'static str {
        "Calculadora de Costos"
    }

    fn achievement(&self) -> Achievement {
        Achievement::CostConqueror
    }

    fn reward_points(&self) -> u32 {
        25
    }

    /// At least one fixed and one variable line, each with a positive
    /// amount somewhere in its list.
    fn is_complete(&self) -> bool {
        !self.fixed.is_empty()
            && !self.variable.is_empty()
            && self.fixed.iter().any(|i| i.amount > 0.0)
            && self.variable.iter().any(|i| i.amount > 0.0)
    }

    fn incomplete_reason(&self) -> &'static str {
        "Ingresa al menos un costo fijo y uno variable"
    }

    fn render(&self) -> String {
        let mut out = format!("{}\n", self.title());
        for kind in [CostKind::Fixed, CostKind::Variable] {
            let _ = writeln!(out, "\n## {}", kind.title());
            for item in self.list(kind) {
                let _ = writeln!(out, "  {} — ${:.0}", item.name, item.amount);
            }
            let total = match kind {
                CostKind::Fixed => self.total_fixed(),
                CostKind::Variable => self.total_variable(),
            };
            let _ = writeln!(out, "  Total {}: ${:.0}", kind.title(), total);
        }
        let _ = writeln!(out, "\nCosto Total de Operación: ${:.0}", self.grand_total());
        if let Some(per_unit) = self.variable_cost_per_unit() {
            let _ = writeln!(out, "Costo variable por unidad: ${per_unit:.2}");
        }
        out
    }

    fn export_stem(&self) -> &'static str {
        "calculo-de-costos"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ledger_has_seed_rows_but_is_incomplete() {
        let ledger = CostLedger::default();
        assert_eq!(ledger.fixed[0].name, "Arriendo");
        assert_eq!(ledger.variable[0].name, "Materia Prima");
        assert!(!ledger.is_complete());
    }

    #[test]
    fn complete_needs_a_positive_amount_on_both_sides() {
        let mut ledger = CostLedger::default();
        ledger.push(CostKind::Fixed, "Luz", "30000");
        assert!(!ledger.is_complete());

        ledger.push(CostKind::Variable, "Envases", "500");
        assert!(ledger.is_complete());
    }

    #[test]
    fn invalid_amount_degrades_to_zero() {
        let mut ledger = CostLedger::default();
        let id = ledger.push(CostKind::Fixed, "Patente", "abc");
        let item = ledger.fixed.iter().find(|i| i.id == id).unwrap();
        assert_eq!(item.amount, 0.0);
        assert_eq!(ledger.total_fixed(), 0.0);
    }

    #[test]
    fn totals_sum_per_list() {
        let mut ledger = CostLedger::default();
        ledger.push(CostKind::Fixed, "Arriendo local", "150000");
        ledger.push(CostKind::Fixed, "Internet", "20000");
        ledger.push(CostKind::Variable, "Fruta", "80000");
        assert_eq!(ledger.total_fixed(), 170_000.0);
        assert_eq!(ledger.total_variable(), 80_000.0);
        assert_eq!(ledger.grand_total(), 250_000.0);
    }

    #[test]
    fn per_unit_needs_positive_variable_total_and_units() {
        let mut ledger = CostLedger::default();
        assert_eq!(ledger.variable_cost_per_unit(), None);

        ledger.push(CostKind::Variable, "Fruta", "50000");
        ledger.units_produced = "100".into();
        assert_eq!(ledger.variable_cost_per_unit(), Some(500.0));

        ledger.units_produced = "cero".into();
        assert_eq!(ledger.variable_cost_per_unit(), None);
    }

    #[test]
    fn update_and_remove_work_across_both_lists() {
        let mut ledger = CostLedger::default();
        let fixed_id = ledger.fixed[0].id;
        let variable_id = ledger.variable[0].id;

        assert!(ledger.update(fixed_id, Some("Arriendo taller"), Some("120000")));
        assert_eq!(ledger.fixed[0].amount, 120_000.0);

        assert!(ledger.remove(variable_id));
        assert!(ledger.variable.is_empty());
        assert!(!ledger.remove(variable_id));
    }

    #[test]
    fn round_trips_through_the_store_under_original_keys() {
        let store = Store::open_memory().unwrap();
        let mut ledger = CostLedger::default();
        ledger.push(CostKind::Fixed, "Luz", "30000");
        ledger.units_produced = "50".into();
        ledger.save(&store).unwrap();

        let back = CostLedger::load(&store).unwrap();
        assert_eq!(back, ledger);
        assert!(store.get_raw(FIXED_KEY).unwrap().is_some());
        assert!(store.get_raw(UNITS_KEY).unwrap().is_some());
    }
}
