//! Break-even calculator: how many units cover all costs.
//!
//! Inputs are kept as the raw text the user typed; parsing happens on
//! every read so an invalid field simply means "no result yet".

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use super::ModuleController;
use crate::error::StoreError;
use crate::finance::{self, ChartSample};
use crate::progress::Achievement;
use crate::storage::Store;

pub const STORAGE_KEY: &str = "breakEvenInputs";

/// Raw calculator inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct BreakEvenInputs {
    pub fixed_costs: String,
    pub price_per_unit: String,
    pub variable_cost_per_unit: String,
}

impl BreakEvenInputs {
    pub fn load(store: &Store) -> Result<Self, StoreError> {
        store.get_or_default(STORAGE_KEY)
    }

    pub fn save(&self, store: &Store) -> Result<(), StoreError> {
        store.set_json(STORAGE_KEY, self)
    }

    fn parsed(&self) -> Option<(f64, f64, f64)> {
        Some((
            finance::parse_number(&self.fixed_costs)?,
            finance::parse_number(&self.price_per_unit)?,
            finance::parse_number(&self.variable_cost_per_unit)?,
        ))
    }

    /// The break-even point in (fractional) units, if defined.
    pub fn break_even(&self) -> Option<f64> {
        let (fixed, price, variable) = self.parsed()?;
        finance::break_even_units(fixed, price, variable)
    }

    /// Whole units to sell to cover all costs.
    pub fn break_even_ceil(&self) -> Option<u64> {
        self.break_even().map(|b| b.ceil() as u64)
    }

    /// Chart samples for the revenue/total-cost crossing.
    pub fn chart(&self) -> Vec<ChartSample> {
        match (self.break_even(), self.parsed()) {
            (Some(b), Some((fixed, price, variable))) => {
                finance::break_even_chart(b, fixed, price, variable)
            }
            _ => Vec::new(),
        }
    }
}

impl ModuleController for BreakEvenInputs {
    fn name(&self) -> &'static str {
        "breakeven"
    }

    fn title(&self) -> &'static str {
        "Calculadora de Punto de Equilibrio"
    }

    fn achievement(&self) -> Achievement {
        Achievement::FinancialGuru
    }

    fn reward_points(&self) -> u32 {
        20
    }

    fn is_complete(&self) -> bool {
        matches!(self.break_even(), Some(b) if b > 0.0)
    }

    fn incomplete_reason(&self) -> &'static str {
        "Ingresa valores válidos para calcular"
    }

    fn render(&self) -> String {
        let mut out = format!("{}\n\n", self.title());
        let _ = writeln!(out, "Costos fijos totales: {}", self.fixed_costs);
        let _ = writeln!(out, "Precio de venta por unidad: {}", self.price_per_unit);
        let _ = writeln!(
            out,
            "Costo variable por unidad: {}",
            self.variable_cost_per_unit
        );
        match self.break_even_ceil() {
            Some(units) => {
                let _ = writeln!(out, "\nTu punto de equilibrio es: {units} unidades");
                let _ = writeln!(
                    out,
                    "Necesitas vender {units} unidades para cubrir todos tus costos. \
                     A partir de la unidad {}, ¡comienzas a ganar dinero!",
                    units + 1
                );
            }
            None => {
                let _ = writeln!(out, "\nSin resultado: ingresa valores válidos.");
            }
        }
        out
    }

    fn export_stem(&self) -> &'static str {
        "punto-de-equilibrio"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(fixed: &str, price: &str, variable: &str) -> BreakEvenInputs {
        BreakEvenInputs {
            fixed_costs: fixed.into(),
            price_per_unit: price.into(),
            variable_cost_per_unit: variable.into(),
        }
    }

    #[test]
    fn computes_break_even_from_raw_text() {
        let be = inputs("500000", "2000", "1000");
        assert_eq!(be.break_even(), Some(500.0));
        assert_eq!(be.break_even_ceil(), Some(500));
        assert!(be.is_complete());
    }

    #[test]
    fn invalid_text_means_no_result_not_error() {
        assert_eq!(inputs("quinientos", "2000", "1000").break_even(), None);
        assert_eq!(inputs("", "", "").break_even(), None);
        assert!(!inputs("", "", "").is_complete());
    }

    #[test]
    fn price_must_exceed_variable_cost() {
        assert_eq!(inputs("500000", "1000", "1000").break_even(), None);
        assert_eq!(inputs("500000", "1000", "1500").break_even(), None);
    }

    #[test]
    fn chart_plots_the_crossing_exactly() {
        let be = inputs("12500", "2000", "1000"); // break-even 12.5
        let samples = be.chart();
        assert!(samples.iter().any(|s| s.units == 13));
        assert!(inputs("", "", "").chart().is_empty());
    }
}
