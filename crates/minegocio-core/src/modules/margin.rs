//! Contribution-margin calculator.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use super::ModuleController;
use crate::error::StoreError;
use crate::finance::{self, Margin};
use crate::progress::Achievement;
use crate::storage::Store;

pub const PRICE_KEY: &str = "cm_pricePerUnit";
pub const VARIABLE_KEY: &str = "cm_variableCostPerUnit";

/// Raw calculator inputs, persisted under the two original keys.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MarginInputs {
    pub price_per_unit: String,
    pub variable_cost_per_unit: String,
}

impl MarginInputs {
    pub fn load(store: &Store) -> Result<Self, StoreError> {
        Ok(Self {
            price_per_unit: store.get_json(PRICE_KEY)?.unwrap_or_default(),
            variable_cost_per_unit: store.get_json(VARIABLE_KEY)?.unwrap_or_default(),
        })
    }

    pub fn save(&self, store: &Store) -> Result<(), StoreError> {
        store.set_json(PRICE_KEY, &self.price_per_unit)?;
        store.set_json(VARIABLE_KEY, &self.variable_cost_per_unit)
    }

    /// Contribution margin per unit, if defined for the current inputs.
    pub fn margin(&self) -> Option<Margin> {
        let price = finance::parse_number(&self.price_per_unit)?;
        let variable = finance::parse_number(&self.variable_cost_per_unit)?;
        finance::contribution_margin(price, variable)
    }
}

impl ModuleController for MarginInputs {
    fn name(&self) -> &'static str {
        "margen"
    }

    fn title(&self) -> &'static str {
        "Calculadora de Margen de Contribución"
    }

    fn achievement(&self) -> Achievement {
        Achievement::MarginMaster
    }

    fn reward_points(&self) -> u32 {
        20
    }

    fn is_complete(&self) -> bool {
        self.margin().is_some()
    }

    fn incomplete_reason(&self) -> &'static str {
        "Ingresa valores válidos para calcular"
    }

    fn render(&self) -> String {
        let mut out = format!("{}\n\n", self.title());
        let _ = writeln!(out, "Precio de venta por unidad: {}", self.price_per_unit);
        let _ = writeln!(
            out,
            "Costo variable por unidad: {}",
            self.variable_cost_per_unit
        );
        match self.margin() {
            Some(m) => {
                let _ = writeln!(out, "\nMargen de contribución por unidad: ${:.0}", m.value);
                let _ = writeln!(
                    out,
                    "Porcentaje de margen de contribución: {:.2}%",
                    m.percentage
                );
                let _ = writeln!(
                    out,
                    "El {:.2}% de tu precio de venta se destina a cubrir costos fijos \
                     y generar ganancias.",
                    m.percentage
                );
            }
            None => {
                let _ = writeln!(out, "\nSin resultado: ingresa valores válidos.");
            }
        }
        out
    }

    fn export_stem(&self) -> &'static str {
        "margen-de-contribucion"
    }
}
