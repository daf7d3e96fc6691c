use clap::Subcommand;
use minegocio_core::modules::{CanvasData, CanvasField};
use minegocio_core::{ModuleController, Store};

#[derive(Subcommand)]
pub enum CanvasAction {
    /// Muestra el lienzo completo
    Show,
    /// Escribe una sección (socios, actividades, propuesta, relacion,
    /// segmentos, recursos, canales, costos, ingresos)
    Set { seccion: CanvasField, texto: String },
    /// Completa el módulo y gana puntos
    Complete,
    /// Exporta el lienzo a un archivo de texto
    Export,
}

pub fn run(action: CanvasAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let mut canvas = CanvasData::load(&store)?;

    match action {
        CanvasAction::Show => {
            print!("{}", canvas.render());
            for field in CanvasField::all() {
                if canvas.get(field).trim().is_empty() {
                    println!("({}): {}", field.key(), field.prompt());
                }
            }
        }
        CanvasAction::Set { seccion, texto } => {
            canvas.set(seccion, texto);
            canvas.save(&store)?;
        }
        CanvasAction::Complete => super::complete_module(&store, &canvas)?,
        CanvasAction::Export => super::export_module(&canvas)?,
    }
    Ok(())
}
