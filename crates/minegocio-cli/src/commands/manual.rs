use clap::Subcommand;
use minegocio_core::modules::manual::{content, ManualProgress};
use minegocio_core::{ModuleController, Store};

#[derive(Subcommand)]
pub enum ManualAction {
    /// Índice del manual con tu progreso
    Toc,
    /// Muestra una sección del manual
    Show { seccion: String },
    /// Marca una sección como leída (al leer la última, el módulo se
    /// completa automáticamente)
    Read { seccion: String },
}

pub fn run(action: ManualAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let mut progress = ManualProgress::load(&store)?;

    match action {
        ManualAction::Toc => print!("{}", progress.render()),
        ManualAction::Show { seccion } => {
            let section = content::find_section(&seccion)
                .ok_or_else(|| format!("no existe la sección '{seccion}'"))?;
            println!("{}\n", section.title);
            println!("{}", section.body);
        }
        ManualAction::Read { seccion } => {
            let was_complete = progress.is_complete();
            let event = progress.mark_read(&seccion)?;
            progress.save(&store)?;
            if let minegocio_core::Event::SectionRead {
                read_sections,
                total_sections,
                ..
            } = event
            {
                println!("Leído. Progreso: {read_sections} de {total_sections} secciones.");
            }
            // Reading the last section completes the module by itself.
            if progress.is_complete() && !was_complete {
                super::complete_module(&store, &progress)?;
            }
        }
    }
    Ok(())
}
