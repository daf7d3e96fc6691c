use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::progress::{Achievement, Level};

/// Every user-visible outcome in the system produces an Event.
/// The CLI prints them; a GUI would poll for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A learning module was completed for the first time.
    ModuleCompleted {
        achievement: Achievement,
        points: u32,
        total_points: u32,
        level: Level,
        /// Whether this completion promoted the user one level.
        promoted: bool,
        at: DateTime<Utc>,
    },
    /// A completion was re-attempted for an already-unlocked medal.
    /// Not an error: the state is unchanged, only this notice differs.
    ModuleAlreadyCompleted {
        achievement: Achievement,
        at: DateTime<Utc>,
    },
    /// A manual section was marked as read.
    SectionRead {
        section_id: String,
        read_sections: usize,
        total_sections: usize,
        at: DateTime<Utc>,
    },
    /// Full progress snapshot for display.
    ProgressSnapshot {
        level: Level,
        points: u32,
        level_ceiling: u32,
        progress_pct: f64,
        achievements: Vec<Achievement>,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// Transient notice for this event, if it warrants one.
    ///
    /// Messages match the original product copy verbatim.
    pub fn toast(&self) -> Option<Toast> {
        match self {
            Event::ModuleCompleted {
                achievement, points, ..
            } => Some(Toast::new(format!(
                "¡Felicidades! Ganaste {points} puntos y la medalla \"{achievement}\""
            ))),
            Event::ModuleAlreadyCompleted { .. } => {
                Some(Toast::new("Ya has completado este módulo."))
            }
            _ => None,
        }
    }
}

/// A transient notification message.
///
/// The display collaborator shows at most one toast at a time for
/// [`Toast::DISPLAY_MS`] milliseconds; a new toast replaces the prior one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Toast {
    pub message: String,
}

impl Toast {
    /// How long a toast stays visible before auto-dismissing.
    pub const DISPLAY_MS: u64 = 3000;

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
