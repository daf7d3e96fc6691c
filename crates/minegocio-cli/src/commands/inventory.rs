use clap::Subcommand;
use minegocio_core::modules::InventoryBook;
use minegocio_core::{ModuleController, Store};
use uuid::Uuid;

#[derive(Subcommand)]
pub enum InventoryAction {
    /// Lista los productos y alertas de stock bajo
    List,
    /// Agrega un producto
    Add {
        nombre: String,
        cantidad: String,
        #[arg(default_value = "0")]
        umbral: String,
    },
    /// Edita un producto por id
    Update {
        id: Uuid,
        #[arg(long)]
        nombre: Option<String>,
        #[arg(long)]
        cantidad: Option<String>,
        #[arg(long)]
        umbral: Option<String>,
    },
    /// Elimina un producto por id
    Remove { id: Uuid },
    /// Completa el módulo y gana puntos
    Complete,
    /// Exporta el inventario a un archivo de texto
    Export,
}

pub fn run(action: InventoryAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let mut book = InventoryBook::load(&store)?;

    match action {
        InventoryAction::List => {
            print!("{}", book.render());
            for item in &book.items {
                println!("{}  {}", item.id, item.name);
            }
        }
        InventoryAction::Add {
            nombre,
            cantidad,
            umbral,
        } => match book.add(&nombre, &cantidad, &umbral) {
            Some(id) => {
                book.save(&store)?;
                println!("{id}");
            }
            None => return Err("nombre y cantidad son obligatorios".into()),
        },
        InventoryAction::Update {
            id,
            nombre,
            cantidad,
            umbral,
        } => {
            if !book.update(id, nombre.as_deref(), cantidad.as_deref(), umbral.as_deref()) {
                return Err(format!("no existe un producto con id {id}").into());
            }
            book.save(&store)?;
        }
        InventoryAction::Remove { id } => {
            if !book.remove(id) {
                return Err(format!("no existe un producto con id {id}").into());
            }
            book.save(&store)?;
        }
        InventoryAction::Complete => super::complete_module(&store, &book)?,
        InventoryAction::Export => super::export_module(&book)?,
    }
    Ok(())
}
