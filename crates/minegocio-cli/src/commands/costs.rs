use clap::Subcommand;
use minegocio_core::modules::{CostKind, CostLedger};
use minegocio_core::{ModuleController, Store};
use uuid::Uuid;

#[derive(Subcommand)]
pub enum CostsAction {
    /// Muestra las listas de costos y los totales
    Show,
    /// Agrega un costo fijo
    AddFijo { nombre: String, monto: String },
    /// Agrega un costo variable
    AddVariable { nombre: String, monto: String },
    /// Edita una fila por id
    Update {
        id: Uuid,
        #[arg(long)]
        nombre: Option<String>,
        #[arg(long)]
        monto: Option<String>,
    },
    /// Elimina una fila por id
    Remove { id: Uuid },
    /// Unidades producidas para el costo variable por unidad
    SetUnidades { unidades: String },
    /// Completa el módulo y gana puntos
    Complete,
    /// Exporta el cálculo a un archivo de texto
    Export,
}

pub fn run(action: CostsAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let mut ledger = CostLedger::load(&store)?;

    match action {
        CostsAction::Show => {
            print!("{}", ledger.render());
            for kind in [CostKind::Fixed, CostKind::Variable] {
                for item in ledger.list(kind) {
                    println!("{}  {}  ${:.0}", item.id, item.name, item.amount);
                }
            }
        }
        CostsAction::AddFijo { nombre, monto } => {
            let id = ledger.push(CostKind::Fixed, &nombre, &monto);
            ledger.save(&store)?;
            println!("{id}");
        }
        CostsAction::AddVariable { nombre, monto } => {
            let id = ledger.push(CostKind::Variable, &nombre, &monto);
            ledger.save(&store)?;
            println!("{id}");
        }
        CostsAction::Update { id, nombre, monto } => {
            if !ledger.update(id, nombre.as_deref(), monto.as_deref()) {
                return Err(format!("no existe una fila con id {id}").into());
            }
            ledger.save(&store)?;
        }
        CostsAction::Remove { id } => {
            if !ledger.remove(id) {
                return Err(format!("no existe una fila con id {id}").into());
            }
            ledger.save(&store)?;
        }
        CostsAction::SetUnidades { unidades } => {
            ledger.units_produced = unidades;
            ledger.save(&store)?;
            if let Some(per_unit) = ledger.variable_cost_per_unit() {
                println!("Costo variable por unidad: ${per_unit:.2}");
            }
        }
        CostsAction::Complete => super::complete_module(&store, &ledger)?,
        CostsAction::Export => super::export_module(&ledger)?,
    }
    Ok(())
}
