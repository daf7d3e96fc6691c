pub mod assistant;
pub mod breakeven;
pub mod canvas;
pub mod config;
pub mod costs;
pub mod goals;
pub mod inventory;
pub mod manual;
pub mod margin;
pub mod progress;
pub mod report;

use std::path::PathBuf;

use minegocio_core::{apply_completion, ModuleController, ProgressState, Store};

/// Run a module's completion against the persisted progress and print
/// the resulting notice. The engine is pure; loading and saving the
/// state happens here.
pub(crate) fn complete_module(
    store: &Store,
    module: &dyn ModuleController,
) -> Result<(), Box<dyn std::error::Error>> {
    let event = module.completion()?;
    let state = ProgressState::load(store)?;
    let outcome = apply_completion(&state, &event);
    outcome.state.save(store)?;
    if let Some(toast) = outcome.event.toast() {
        println!("{}", toast.message);
    }
    Ok(())
}

/// Write the module's plain-text summary next to the current directory.
/// Failures are surfaced to the user, not swallowed.
pub(crate) fn export_module(
    module: &dyn ModuleController,
) -> Result<(), Box<dyn std::error::Error>> {
    let path = PathBuf::from(format!("{}.txt", module.export_stem()));
    std::fs::write(&path, module.render())?;
    println!("Exportado a {}", path.display());
    Ok(())
}
