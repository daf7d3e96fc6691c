//! Learning-module controllers.
//!
//! Every learning module implements [`ModuleController`]: it owns its own
//! records, decides its own completeness, and builds the completion event
//! handed to the progression engine. The engine never sees an incomplete
//! module -- `completion()` is the gate.

pub mod break_even;
pub mod canvas;
pub mod costs;
pub mod goals;
pub mod inventory;
pub mod manual;
pub mod margin;
pub mod report;

pub use break_even::BreakEvenInputs;
pub use canvas::{CanvasData, CanvasField};
pub use costs::{CostItem, CostKind, CostLedger};
pub use goals::{GoalBoard, GoalStatus, SmartGoal};
pub use inventory::{InventoryBook, InventoryItem};
pub use manual::ManualProgress;
pub use margin::MarginInputs;
pub use report::MonthlyReportData;

use crate::error::{ContractError, StoreError};
use crate::progress::{Achievement, CompletionEvent};
use crate::storage::Store;

/// Capability set shared by every learning module.
pub trait ModuleController {
    /// Short machine name (also the CLI subcommand).
    fn name(&self) -> &'static str;

    /// User-facing Spanish title.
    fn title(&self) -> &'static str;

    /// The medal this module unlocks.
    fn achievement(&self) -> Achievement;

    /// Fixed point reward for completing this module.
    fn reward_points(&self) -> u32;

    /// Whether the module's local completeness rule holds.
    fn is_complete(&self) -> bool;

    /// Why the module is not complete yet (button label in the original).
    fn incomplete_reason(&self) -> &'static str;

    /// Plain-text summary of the module's current data, used by the
    /// `show` and `export` actions.
    fn render(&self) -> String;

    /// File stem for the exported document.
    fn export_stem(&self) -> &'static str;

    /// Build the completion event for the progression engine.
    ///
    /// # Errors
    /// Returns `ContractError::Incomplete` when the completeness rule
    /// does not hold; an event with this module's fixed reward otherwise.
    fn completion(&self) -> Result<CompletionEvent, ContractError> {
        if !self.is_complete() {
            return Err(ContractError::Incomplete {
                module: self.name().to_string(),
                reason: self.incomplete_reason().to_string(),
            });
        }
        CompletionEvent::new(self.reward_points(), self.achievement())
    }
}

/// Load every module controller from the store, in dashboard order.
///
/// The marketing plan medal has no controller -- it is defined in the
/// catalog but its module does not exist yet.
pub fn registry(store: &Store) -> Result<Vec<Box<dyn ModuleController>>, StoreError> {
    Ok(vec![
        Box::new(CanvasData::load(store)?),
        Box::new(CostLedger::load(store)?),
        Box::new(MarginInputs::load(store)?),
        Box::new(BreakEvenInputs::load(store)?),
        Box::new(InventoryBook::load(store)?),
        Box::new(GoalBoard::load(store)?),
        Box::new(MonthlyReportData::load(store)?),
        Box::new(ManualProgress::load(store)?),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_covers_every_unlocked_medal_exactly_once() {
        let store = Store::open_memory().unwrap();
        let modules = registry(&store).unwrap();
        assert_eq!(modules.len(), 8);

        let mut medals: Vec<Achievement> = modules.iter().map(|m| m.achievement()).collect();
        medals.sort();
        medals.dedup();
        assert_eq!(medals.len(), 8);
        assert!(!medals.contains(&Achievement::MarketingMaestro));
    }

    #[test]
    fn rewards_match_the_fixed_point_table() {
        let store = Store::open_memory().unwrap();
        for module in registry(&store).unwrap() {
            let expected = match module.achievement() {
                Achievement::BusinessArchitect => 30,
                Achievement::FinancialGuru => 20,
                Achievement::CostConqueror => 25,
                Achievement::MarginMaster => 20,
                Achievement::ManualCompleto => 50,
                Achievement::ReportingChampion => 15,
                Achievement::StockMaster => 20,
                Achievement::GoalSetter => 20,
                Achievement::MarketingMaestro => unreachable!("locked module"),
            };
            assert_eq!(module.reward_points(), expected, "{}", module.name());
        }
    }

    #[test]
    fn incomplete_module_refuses_to_build_an_event() {
        let store = Store::open_memory().unwrap();
        let canvas = CanvasData::load(&store).unwrap();
        assert!(!canvas.is_complete());
        assert!(matches!(
            canvas.completion(),
            Err(ContractError::Incomplete { .. })
        ));
    }
}
