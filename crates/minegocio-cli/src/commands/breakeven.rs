use clap::Subcommand;
use minegocio_core::modules::BreakEvenInputs;
use minegocio_core::{ModuleController, Store};

#[derive(Subcommand)]
pub enum BreakEvenAction {
    /// Muestra los datos y el punto de equilibrio
    Show,
    /// Ingresa los valores de la calculadora
    Set {
        /// Costos fijos totales ($)
        #[arg(long)]
        fijos: Option<String>,
        /// Precio de venta por unidad ($)
        #[arg(long)]
        precio: Option<String>,
        /// Costo variable por unidad ($)
        #[arg(long)]
        variable: Option<String>,
    },
    /// Datos del gráfico ingresos vs. costos como JSON
    Chart,
    /// Completa el módulo y gana puntos
    Complete,
    /// Exporta el resultado a un archivo de texto
    Export,
}

pub fn run(action: BreakEvenAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let mut inputs = BreakEvenInputs::load(&store)?;

    match action {
        BreakEvenAction::Show => print!("{}", inputs.render()),
        BreakEvenAction::Set {
            fijos,
            precio,
            variable,
        } => {
            if let Some(fijos) = fijos {
                inputs.fixed_costs = fijos;
            }
            if let Some(precio) = precio {
                inputs.price_per_unit = precio;
            }
            if let Some(variable) = variable {
                inputs.variable_cost_per_unit = variable;
            }
            inputs.save(&store)?;
            print!("{}", inputs.render());
        }
        BreakEvenAction::Chart => {
            println!("{}", serde_json::to_string_pretty(&inputs.chart())?);
        }
        BreakEvenAction::Complete => super::complete_module(&store, &inputs)?,
        BreakEvenAction::Export => super::export_module(&inputs)?,
    }
    Ok(())
}
