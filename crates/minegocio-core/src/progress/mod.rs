//! User progress: level, points, and unlocked medals.
//!
//! `ProgressState` is a plain value. It is mutated only through
//! [`engine::apply_completion`]; persisting the result is the caller's
//! job (the engine performs no side effects).

pub mod engine;

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{ContractError, StoreError};
use crate::events::Event;
use crate::storage::Store;

/// Storage key for the persisted progress state.
pub const STORAGE_KEY: &str = "userProgress";

/// User level, ordered. Promotion is driven purely by points
/// (see [`engine::apply_completion`]); a level never regresses.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
pub enum Level {
    #[default]
    Principiante,
    Intermedio,
    Avanzado,
}

impl Level {
    /// Points shown as the level's ceiling on the dashboard progress bar.
    pub fn display_ceiling(self) -> u32 {
        match self {
            Level::Principiante => 50,
            Level::Intermedio => 100,
            Level::Avanzado => 205,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Principiante => "Principiante",
            Level::Intermedio => "Intermedio",
            Level::Avanzado => "Avanzado",
        };
        f.write_str(name)
    }
}

/// The fixed medal catalog: one entry per learning module.
///
/// `MarketingMaestro` is a valid identifier but permanently locked in the
/// current product -- no module emits it. Serialized names are the
/// user-facing Spanish medal names, which is also the on-disk format.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Achievement {
    #[serde(rename = "Arquitecto de Negocios")]
    BusinessArchitect,
    #[serde(rename = "Gurú Financiero")]
    FinancialGuru,
    #[serde(rename = "Conquistador de Costos")]
    CostConqueror,
    #[serde(rename = "Maestro del Margen")]
    MarginMaster,
    #[serde(rename = "Maestro del Marketing")]
    MarketingMaestro,
    #[serde(rename = "Manual Completado")]
    ManualCompleto,
    #[serde(rename = "Campeón del Reporte")]
    ReportingChampion,
    #[serde(rename = "Maestro del Inventario")]
    StockMaster,
    #[serde(rename = "Maestro de Metas")]
    GoalSetter,
}

impl Achievement {
    /// The whole catalog, in dashboard display order.
    pub fn all() -> [Achievement; 9] {
        [
            Achievement::BusinessArchitect,
            Achievement::CostConqueror,
            Achievement::MarginMaster,
            Achievement::FinancialGuru,
            Achievement::StockMaster,
            Achievement::GoalSetter,
            Achievement::ReportingChampion,
            Achievement::ManualCompleto,
            Achievement::MarketingMaestro,
        ]
    }

    /// User-facing medal name.
    pub fn display_name(self) -> &'static str {
        match self {
            Achievement::BusinessArchitect => "Arquitecto de Negocios",
            Achievement::FinancialGuru => "Gurú Financiero",
            Achievement::CostConqueror => "Conquistador de Costos",
            Achievement::MarginMaster => "Maestro del Margen",
            Achievement::MarketingMaestro => "Maestro del Marketing",
            Achievement::ManualCompleto => "Manual Completado",
            Achievement::ReportingChampion => "Campeón del Reporte",
            Achievement::StockMaster => "Maestro del Inventario",
            Achievement::GoalSetter => "Maestro de Metas",
        }
    }

    /// One-line dashboard description.
    pub fn description(self) -> &'static str {
        match self {
            Achievement::BusinessArchitect => "Define la estructura de tu negocio.",
            Achievement::FinancialGuru => "Calcula la viabilidad de tu negocio.",
            Achievement::CostConqueror => "Identifica y suma tus costos fijos y variables.",
            Achievement::MarginMaster => "Calcula la ganancia real de cada venta.",
            Achievement::MarketingMaestro => {
                "Crea tu plan para llegar a clientes. (Próximamente)"
            }
            Achievement::ManualCompleto => "Aprende conceptos con el manual interactivo.",
            Achievement::ReportingChampion => {
                "Registra tus resultados y mide tu progreso mensual."
            }
            Achievement::StockMaster => "Gestiona tus productos y controla el stock.",
            Achievement::GoalSetter => "Define y sigue tus metas con la metodología SMART.",
        }
    }

    /// Whether the medal's module exists yet. The marketing plan module
    /// is defined in the catalog but has no controller.
    pub fn locked(self) -> bool {
        matches!(self, Achievement::MarketingMaestro)
    }
}

impl fmt::Display for Achievement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Achievement {
    type Err = ContractError;

    /// The boundary gate for achievement identifiers: anything outside
    /// the fixed catalog is a contract violation, never engine input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Achievement::all()
            .into_iter()
            .find(|a| a.display_name() == s)
            .ok_or_else(|| ContractError::UnknownAchievement(s.to_string()))
    }
}

/// Persisted progress record: level, accumulated points, unlocked medals.
///
/// `points` only ever grows, `achievements` only ever gains members, and
/// `level` never regresses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct ProgressState {
    pub level: Level,
    pub points: u32,
    pub achievements: BTreeSet<Achievement>,
}

impl ProgressState {
    /// Load from the store, falling back to the default (Principiante,
    /// 0 points, no medals) when the key is absent.
    pub fn load(store: &Store) -> Result<Self, StoreError> {
        store.get_or_default(STORAGE_KEY)
    }

    /// Persist to the store.
    pub fn save(&self, store: &Store) -> Result<(), StoreError> {
        store.set_json(STORAGE_KEY, self)
    }

    pub fn is_unlocked(&self, achievement: Achievement) -> bool {
        self.achievements.contains(&achievement)
    }

    /// 0..100 progress within the current level's display ceiling.
    pub fn progress_pct(&self) -> f64 {
        (self.points as f64 / self.level.display_ceiling() as f64 * 100.0).min(100.0)
    }

    /// Full snapshot event for display.
    pub fn snapshot(&self) -> Event {
        Event::ProgressSnapshot {
            level: self.level,
            points: self.points,
            level_ceiling: self.level.display_ceiling(),
            progress_pct: self.progress_pct(),
            achievements: self.achievements.iter().copied().collect(),
            at: Utc::now(),
        }
    }
}

/// A module-completion message: fixed point reward plus the medal it
/// unlocks. Ephemeral -- built by a module controller, consumed by
/// [`engine::apply_completion`], never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletionEvent {
    points: u32,
    achievement: Achievement,
}

impl CompletionEvent {
    /// Build a completion event. A zero reward is a caller contract
    /// violation; the engine never sees it.
    pub fn new(points: u32, achievement: Achievement) -> Result<Self, ContractError> {
        if points == 0 {
            return Err(ContractError::NonPositiveReward { points });
        }
        Ok(Self {
            points,
            achievement,
        })
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn achievement(&self) -> Achievement {
        self.achievement
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn achievement_serializes_to_spanish_name() {
        let json = serde_json::to_string(&Achievement::BusinessArchitect).unwrap();
        assert_eq!(json, "\"Arquitecto de Negocios\"");
        let back: Achievement = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Achievement::BusinessArchitect);
    }

    #[test]
    fn unknown_achievement_rejected_at_boundary() {
        let err = Achievement::from_str("Maestro de la Nada").unwrap_err();
        assert!(matches!(err, ContractError::UnknownAchievement(_)));
    }

    #[test]
    fn zero_reward_rejected_at_boundary() {
        let err = CompletionEvent::new(0, Achievement::GoalSetter).unwrap_err();
        assert!(matches!(err, ContractError::NonPositiveReward { points: 0 }));
    }

    #[test]
    fn default_state_is_beginner_with_nothing() {
        let state = ProgressState::default();
        assert_eq!(state.level, Level::Principiante);
        assert_eq!(state.points, 0);
        assert!(state.achievements.is_empty());
    }

    #[test]
    fn state_round_trips_in_original_json_shape() {
        let mut state = ProgressState::default();
        state.points = 30;
        state.achievements.insert(Achievement::BusinessArchitect);

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["level"], "Principiante");
        assert_eq!(json["points"], 30);
        assert_eq!(json["achievements"][0], "Arquitecto de Negocios");

        let back: ProgressState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn marketing_medal_is_valid_but_locked() {
        let a = Achievement::from_str("Maestro del Marketing").unwrap();
        assert!(a.locked());
        assert!(Achievement::all().contains(&a));
    }

    #[test]
    fn level_ceilings_match_dashboard() {
        assert_eq!(Level::Principiante.display_ceiling(), 50);
        assert_eq!(Level::Intermedio.display_ceiling(), 100);
        assert_eq!(Level::Avanzado.display_ceiling(), 205);
    }
}
