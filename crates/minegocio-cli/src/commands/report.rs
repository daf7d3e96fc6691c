use clap::Subcommand;
use minegocio_core::modules::MonthlyReportData;
use minegocio_core::{ModuleController, Store};

#[derive(Subcommand)]
pub enum ReportAction {
    /// Muestra el reporte del mes
    Show,
    /// Completa los campos del reporte
    Set {
        /// Mes y año del reporte, p. ej. "Julio 2024"
        #[arg(long)]
        mes: Option<String>,
        /// Total ventas ($)
        #[arg(long)]
        ventas: Option<i64>,
        /// Total gastos ($)
        #[arg(long)]
        gastos: Option<i64>,
        /// Nuevos clientes conseguidos
        #[arg(long)]
        clientes: Option<u32>,
        /// Logros del mes
        #[arg(long)]
        logros: Option<String>,
        /// Desafíos del mes
        #[arg(long)]
        desafios: Option<String>,
        /// Metas para el próximo mes
        #[arg(long)]
        proximas_metas: Option<String>,
    },
    /// Completa el módulo y gana puntos
    Complete,
    /// Exporta el reporte a un archivo de texto
    Export,
}

pub fn run(action: ReportAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let mut report = MonthlyReportData::load(&store)?;

    match action {
        ReportAction::Show => print!("{}", report.render()),
        ReportAction::Set {
            mes,
            ventas,
            gastos,
            clientes,
            logros,
            desafios,
            proximas_metas,
        } => {
            if let Some(mes) = mes {
                report.month = mes;
            }
            if let Some(ventas) = ventas {
                report.total_sales = ventas;
            }
            if let Some(gastos) = gastos {
                report.total_expenses = gastos;
            }
            if let Some(clientes) = clientes {
                report.new_customers = clientes;
            }
            if let Some(logros) = logros {
                report.achievements = logros;
            }
            if let Some(desafios) = desafios {
                report.challenges = desafios;
            }
            if let Some(proximas) = proximas_metas {
                report.goals_for_next_month = proximas;
            }
            report.save(&store)?;
            print!("{}", report.render());
        }
        ReportAction::Complete => super::complete_module(&store, &report)?,
        ReportAction::Export => super::export_module(&report)?,
    }
    Ok(())
}
