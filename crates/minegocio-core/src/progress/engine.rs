//! Progression engine.
//!
//! A single pure entry point applies a module-completion event to the
//! progress state. No I/O happens here: the caller persists the returned
//! state (and shows the returned event) afterwards.

use chrono::Utc;

use super::{CompletionEvent, Level, ProgressState};
use crate::events::Event;

/// Result of applying a completion event.
#[derive(Debug, Clone)]
pub struct Outcome {
    /// The state after the transition. Identical to the input state when
    /// the medal was already unlocked.
    pub state: ProgressState,
    /// The user-visible event describing what happened.
    pub event: Event,
}

/// Apply a completion event to the progress state.
///
/// Completing the same module twice never double-awards: a duplicate
/// medal leaves points, level and medals untouched and reports an
/// "already completed" notice instead.
///
/// Level promotion is evaluated against the pre-event level and advances
/// at most one step per call (Principiante -> Intermedio at 50 points,
/// Intermedio -> Avanzado at 100). This one-level-per-call rule is a
/// deliberate policy, not a saturating loop: a single oversized reward
/// still promotes only once.
pub fn apply_completion(state: &ProgressState, event: &CompletionEvent) -> Outcome {
    if state.is_unlocked(event.achievement()) {
        return Outcome {
            state: state.clone(),
            event: Event::ModuleAlreadyCompleted {
                achievement: event.achievement(),
                at: Utc::now(),
            },
        };
    }

    let points = state.points + event.points();
    let mut achievements = state.achievements.clone();
    achievements.insert(event.achievement());

    let level = match state.level {
        Level::Principiante if points >= 50 => Level::Intermedio,
        Level::Intermedio if points >= 100 => Level::Avanzado,
        current => current,
    };

    Outcome {
        state: ProgressState {
            level,
            points,
            achievements,
        },
        event: Event::ModuleCompleted {
            achievement: event.achievement(),
            points: event.points(),
            total_points: points,
            level,
            promoted: level != state.level,
            at: Utc::now(),
        },
    }
}
