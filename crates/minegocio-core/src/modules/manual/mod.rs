//! Interactive entrepreneur's manual: per-section reading progress.
//!
//! The module is complete when every catalog section has been marked
//! read; the caller then hands the completion event to the progression
//! engine (the original fires it automatically on the last section).

pub mod content;

use std::collections::BTreeSet;
use std::fmt::Write as _;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::ModuleController;
use crate::error::{ContractError, StoreError};
use crate::events::Event;
use crate::progress::Achievement;
use crate::storage::Store;

pub const STORAGE_KEY: &str = "readTrainingSections";

/// Which manual sections the user has read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct ManualProgress {
    pub read: BTreeSet<String>,
}

impl ManualProgress {
    pub fn load(store: &Store) -> Result<Self, StoreError> {
        store.get_or_default(STORAGE_KEY)
    }

    pub fn save(&self, store: &Store) -> Result<(), StoreError> {
        store.set_json(STORAGE_KEY, self)
    }

    pub fn is_read(&self, section_id: &str) -> bool {
        self.read.contains(section_id)
    }

    /// Mark a section read. Re-reading is a no-op (the event still
    /// reports current progress).
    ///
    /// # Errors
    /// Returns `ContractError::UnknownSection` for ids outside the
    /// built-in catalog.
    pub fn mark_read(&mut self, section_id: &str) -> Result<Event, ContractError> {
        if content::find_section(section_id).is_none() {
            return Err(ContractError::UnknownSection(section_id.to_string()));
        }
        self.read.insert(section_id.to_string());
        Ok(Event::SectionRead {
            section_id: section_id.to_string(),
            read_sections: self.read.len(),
            total_sections: content::total_sections(),
            at: Utc::now(),
        })
    }

    /// 0..100 share of sections read.
    pub fn progress_pct(&self) -> f64 {
        let total = content::total_sections();
        if total == 0 {
            return 0.0;
        }
        self.read.len() as f64 / total as f64 * 100.0
    }
}

impl ModuleController for ManualProgress {
    fn name(&self) -> &'static str {
        "manual"
    }

    fn title(&self) -> &'static str {
        "Manual Interactivo del Emprendedor"
    }

    fn achievement(&self) -> Achievement {
        Achievement::ManualCompleto
    }

    fn reward_points(&self) -> u32 {
        50
    }

    fn is_complete(&self) -> bool {
        let total = content::total_sections();
        total > 0 && self.read.len() == total
    }

    fn incomplete_reason(&self) -> &'static str {
        "Lee todas las secciones para completar"
    }

    fn render(&self) -> String {
        let mut out = format!("{}\n", self.title());
        let _ = writeln!(
            out,
            "Progreso total: {} de {} secciones\n",
            self.read.len(),
            content::total_sections()
        );
        for module in content::modules() {
            let _ = writeln!(out, "{}", module.title);
            for section in module.sections {
                let mark = if self.is_read(section.id) { "✓" } else { " " };
                let _ = writeln!(out, "  [{mark}] {} — {}", section.id, section.title);
            }
        }
        out
    }

    fn export_stem(&self) -> &'static str {
        "manual-del-emprendedor"
    }
}
