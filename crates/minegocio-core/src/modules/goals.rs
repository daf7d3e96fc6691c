//! SMART goals: objectives broken into the five SMART criteria.

use std::fmt::Write as _;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ModuleController;
use crate::error::StoreError;
use crate::progress::Achievement;
use crate::storage::Store;

pub const STORAGE_KEY: &str = "smartGoals";

/// Where a goal stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GoalStatus {
    #[default]
    Pendiente,
    #[serde(rename = "En Progreso")]
    EnProgreso,
    Cumplido,
}

impl GoalStatus {
    pub fn display_name(self) -> &'static str {
        match self {
            GoalStatus::Pendiente => "Pendiente",
            GoalStatus::EnProgreso => "En Progreso",
            GoalStatus::Cumplido => "Cumplido",
        }
    }
}

impl FromStr for GoalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pendiente" => Ok(GoalStatus::Pendiente),
            "en progreso" | "en-progreso" | "progreso" => Ok(GoalStatus::EnProgreso),
            "cumplido" => Ok(GoalStatus::Cumplido),
            _ => Err(format!("unknown goal status: '{s}'")),
        }
    }
}

/// One SMART goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartGoal {
    pub id: Uuid,
    pub objective: String,
    pub specific: String,
    pub measurable: String,
    pub achievable: String,
    pub relevant: String,
    pub time_bound: String,
    pub status: GoalStatus,
}

impl SmartGoal {
    pub fn new(objective: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            objective: objective.into(),
            specific: String::new(),
            measurable: String::new(),
            achievable: String::new(),
            relevant: String::new(),
            time_bound: String::new(),
            status: GoalStatus::Pendiente,
        }
    }
}

/// The goal list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct GoalBoard {
    pub goals: Vec<SmartGoal>,
}

impl GoalBoard {
    pub fn load(store: &Store) -> Result<Self, StoreError> {
        store.get_or_default(STORAGE_KEY)
    }

    pub fn save(&self, store: &Store) -> Result<(), StoreError> {
        store.set_json(STORAGE_KEY, self)
    }

    /// Add a goal; with no objective given, seeds the default title.
    pub fn add(&mut self, objective: Option<&str>) -> Uuid {
        let goal = SmartGoal::new(objective.unwrap_or("Nuevo Objetivo"));
        let id = goal.id;
        self.goals.push(goal);
        id
    }

    pub fn get_mut(&mut self, id: Uuid) -> Option<&mut SmartGoal> {
        self.goals.iter_mut().find(|g| g.id == id)
    }

    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.goals.len();
        self.goals.retain(|g| g.id != id);
        before != self.goals.len()
    }
}

impl ModuleController for GoalBoard {
    fn name(&self) -> &'static str {
        "metas"
    }

    fn title(&self) -> &'static str {
        "Objetivos SMART"
    }

    fn achievement(&self) -> Achievement {
        Achievement::GoalSetter
    }

    fn reward_points(&self) -> u32 {
        20
    }

    fn is_complete(&self) -> bool {
        !self.goals.is_empty()
    }

    fn incomplete_reason(&self) -> &'static str {
        "Agrega tu primera meta para completar"
    }

    fn render(&self) -> String {
        let mut out = format!("{}\n\n", self.title());
        if self.goals.is_empty() {
            let _ = writeln!(out, "Aún no has definido metas.");
            return out;
        }
        for goal in &self.goals {
            let _ = writeln!(out, "## {} [{}]", goal.objective, goal.status.display_name());
            for (label, text) in [
                ("S - Específico", &goal.specific),
                ("M - Medible", &goal.measurable),
                ("A - Alcanzable", &goal.achievable),
                ("R - Relevante", &goal.relevant),
                ("T - Temporal", &goal.time_bound),
            ] {
                let body = if text.trim().is_empty() { "—" } else { text };
                let _ = writeln!(out, "  {label}: {body}");
            }
            out.push('\n');
        }
        out
    }

    fn export_stem(&self) -> &'static str {
        "objetivos-smart"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_goals_start_pending_with_default_objective() {
        let mut board = GoalBoard::default();
        board.add(None);
        assert_eq!(board.goals[0].objective, "Nuevo Objetivo");
        assert_eq!(board.goals[0].status, GoalStatus::Pendiente);
    }

    #[test]
    fn complete_with_at_least_one_goal() {
        let mut board = GoalBoard::default();
        assert!(!board.is_complete());
        board.add(Some("Vender en la feria"));
        assert!(board.is_complete());
    }

    #[test]
    fn status_serializes_with_the_original_spanish_labels() {
        let mut goal = SmartGoal::new("Meta");
        goal.status = GoalStatus::EnProgreso;
        let json = serde_json::to_value(&goal).unwrap();
        assert_eq!(json["status"], "En Progreso");
        assert!(json.get("timeBound").is_some());
    }

    #[test]
    fn status_parses_loose_cli_spellings() {
        assert_eq!("cumplido".parse::<GoalStatus>().unwrap(), GoalStatus::Cumplido);
        assert_eq!(
            "en-progreso".parse::<GoalStatus>().unwrap(),
            GoalStatus::EnProgreso
        );
        assert!("terminado".parse::<GoalStatus>().is_err());
    }

    #[test]
    fn update_and_remove_by_id() {
        let mut board = GoalBoard::default();
        let id = board.add(Some("Meta"));
        board.get_mut(id).unwrap().specific = "Vender 20 frascos".into();
        assert_eq!(board.goals[0].specific, "Vender 20 frascos");

        assert!(board.remove(id));
        assert!(!board.remove(id));
        assert!(board.goals.is_empty());
    }
}
