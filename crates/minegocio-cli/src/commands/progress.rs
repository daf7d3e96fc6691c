use clap::Subcommand;
use minegocio_core::{modules, Achievement, ProgressState, Store};

#[derive(Subcommand)]
pub enum ProgressAction {
    /// Estado actual como JSON
    Status,
    /// Catálogo de medallas y cuáles has ganado
    Medallas,
    /// Estado de cada módulo: listo para completar o no
    Modulos,
}

pub fn run(action: ProgressAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let state = ProgressState::load(&store)?;

    match action {
        ProgressAction::Status => {
            println!("{}", serde_json::to_string_pretty(&state.snapshot())?);
        }
        ProgressAction::Medallas => {
            println!(
                "{} — {} / {} puntos ({:.0}%)\n",
                state.level,
                state.points,
                state.level.display_ceiling(),
                state.progress_pct()
            );
            for achievement in Achievement::all() {
                let mark = if state.is_unlocked(achievement) {
                    "✓"
                } else if achievement.locked() {
                    "🔒"
                } else {
                    " "
                };
                println!("[{mark}] {achievement} — {}", achievement.description());
            }
        }
        ProgressAction::Modulos => {
            for module in modules::registry(&store)? {
                let status = if state.is_unlocked(module.achievement()) {
                    "completado".to_string()
                } else if module.is_complete() {
                    format!("listo para completar (+{} puntos)", module.reward_points())
                } else {
                    module.incomplete_reason().to_string()
                };
                println!("{:<10} {} — {status}", module.name(), module.title());
            }
        }
    }
    Ok(())
}
