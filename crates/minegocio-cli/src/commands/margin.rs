use clap::Subcommand;
use minegocio_core::modules::MarginInputs;
use minegocio_core::{ModuleController, Store};

#[derive(Subcommand)]
pub enum MarginAction {
    /// Muestra los datos y el margen calculado
    Show,
    /// Ingresa los valores de la calculadora
    Set {
        /// Precio de venta por unidad ($)
        #[arg(long)]
        precio: Option<String>,
        /// Costo variable por unidad ($)
        #[arg(long)]
        variable: Option<String>,
    },
    /// Completa el módulo y gana puntos
    Complete,
    /// Exporta el resultado a un archivo de texto
    Export,
}

pub fn run(action: MarginAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let mut inputs = MarginInputs::load(&store)?;

    match action {
        MarginAction::Show => print!("{}", inputs.render()),
        MarginAction::Set { precio, variable } => {
            if let Some(precio) = precio {
                inputs.price_per_unit = precio;
            }
            if let Some(variable) = variable {
                inputs.variable_cost_per_unit = variable;
            }
            inputs.save(&store)?;
            print!("{}", inputs.render());
        }
        MarginAction::Complete => super::complete_module(&store, &inputs)?,
        MarginAction::Export => super::export_module(&inputs)?,
    }
    Ok(())
}
