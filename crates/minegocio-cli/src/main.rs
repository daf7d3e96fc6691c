use clap::{Parser, Subcommand};
use minegocio_core::{onboarding, Store};

mod commands;

#[derive(Parser)]
#[command(name = "minegocio-cli", version, about = "Gerenciando Mi Negocio CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Nivel, puntos y medallas
    Progreso {
        #[command(subcommand)]
        action: commands::progress::ProgressAction,
    },
    /// Lienzo de modelo de negocio
    Canvas {
        #[command(subcommand)]
        action: commands::canvas::CanvasAction,
    },
    /// Calculadora de punto de equilibrio
    Breakeven {
        #[command(subcommand)]
        action: commands::breakeven::BreakEvenAction,
    },
    /// Calculadora de costos fijos y variables
    Costos {
        #[command(subcommand)]
        action: commands::costs::CostsAction,
    },
    /// Calculadora de margen de contribución
    Margen {
        #[command(subcommand)]
        action: commands::margin::MarginAction,
    },
    /// Gestión de inventario
    Inventario {
        #[command(subcommand)]
        action: commands::inventory::InventoryAction,
    },
    /// Objetivos SMART
    Metas {
        #[command(subcommand)]
        action: commands::goals::GoalsAction,
    },
    /// Reporte mensual de resultados
    Reporte {
        #[command(subcommand)]
        action: commands::report::ReportAction,
    },
    /// Manual interactivo del emprendedor
    Manual {
        #[command(subcommand)]
        action: commands::manual::ManualAction,
    },
    /// Asistente IA para términos de negocio
    Asistente {
        #[command(subcommand)]
        action: commands::assistant::AssistantAction,
    },
    /// Configuración de la aplicación
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn show_onboarding_once() -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    if onboarding::should_show(&store)? {
        println!("{}", onboarding::welcome_text());
        onboarding::dismiss(&store)?;
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = show_onboarding_once() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::Progreso { action } => commands::progress::run(action),
        Commands::Canvas { action } => commands::canvas::run(action),
        Commands::Breakeven { action } => commands::breakeven::run(action),
        Commands::Costos { action } => commands::costs::run(action),
        Commands::Margen { action } => commands::margin::run(action),
        Commands::Inventario { action } => commands::inventory::run(action),
        Commands::Metas { action } => commands::goals::run(action),
        Commands::Reporte { action } => commands::report::run(action),
        Commands::Manual { action } => commands::manual::run(action),
        Commands::Asistente { action } => commands::assistant::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
