//! Monthly results report.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use super::ModuleController;
use crate::error::StoreError;
use crate::progress::Achievement;
use crate::storage::Store;

pub const STORAGE_KEY: &str = "monthlyReportData";

/// The month's numbers and notes, persisted as one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct MonthlyReportData {
    /// Month label, e.g. "Julio 2024".
    pub month: String,
    pub total_sales: i64,
    pub total_expenses: i64,
    pub new_customers: u32,
    pub achievements: String,
    pub challenges: String,
    pub goals_for_next_month: String,
}

impl MonthlyReportData {
    pub fn load(store: &Store) -> Result<Self, StoreError> {
        store.get_or_default(STORAGE_KEY)
    }

    pub fn save(&self, store: &Store) -> Result<(), StoreError> {
        store.set_json(STORAGE_KEY, self)
    }

    /// Profit (or loss, when negative) for the month.
    pub fn profit(&self) -> i64 {
        self.total_sales - self.total_expenses
    }
}

impl ModuleController for MonthlyReportData {
    fn name(&self) -> &'static str {
        "reporte"
    }

    fn title(&self) -> &'static str {
        "Reporte Mensual de Resultados"
    }

    fn achievement(&self) -> Achievement {
        Achievement::ReportingChampion
    }

    fn reward_points(&self) -> u32 {
        15
    }

    fn is_complete(&self) -> bool {
        !self.month.trim().is_empty() && self.total_sales > 0
    }

    fn incomplete_reason(&self) -> &'static str {
        "Ingresa Mes y Ventas para completar"
    }

    fn render(&self) -> String {
        let mut out = format!("{}\n\n", self.title());
        let _ = writeln!(out, "Mes: {}", self.month);
        let _ = writeln!(out, "Total ventas: ${}", self.total_sales);
        let _ = writeln!(out, "Total gastos: ${}", self.total_expenses);
        let _ = writeln!(out, "Ganancia / Pérdida: ${}", self.profit());
        let _ = writeln!(out, "Nuevos clientes: {}", self.new_customers);
        for (label, text) in [
            ("Logros del mes", &self.achievements),
            ("Desafíos del mes", &self.challenges),
            ("Metas para el próximo mes", &self.goals_for_next_month),
        ] {
            let body = if text.trim().is_empty() { "—" } else { text };
            let _ = writeln!(out, "\n{label}:\n{body}");
        }
        out
    }

    fn export_stem(&self) -> &'static str {
        "reporte-mensual-personal"
    }
}
