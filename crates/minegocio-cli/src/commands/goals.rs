use clap::Subcommand;
use minegocio_core::modules::{GoalBoard, GoalStatus};
use minegocio_core::{ModuleController, Store};
use uuid::Uuid;

#[derive(Subcommand)]
pub enum GoalsAction {
    /// Lista las metas
    List,
    /// Agrega una meta
    Add {
        /// Objetivo de la meta
        objetivo: Option<String>,
    },
    /// Edita los criterios SMART de una meta
    Update {
        id: Uuid,
        #[arg(long)]
        objetivo: Option<String>,
        /// ¿Qué quiero lograr exactamente?
        #[arg(long)]
        especifico: Option<String>,
        /// ¿Cómo sabré que lo he logrado?
        #[arg(long)]
        medible: Option<String>,
        /// ¿Es realista con mis recursos actuales?
        #[arg(long)]
        alcanzable: Option<String>,
        /// ¿Por qué es importante para mi negocio?
        #[arg(long)]
        relevante: Option<String>,
        /// ¿Para cuándo debo haberlo completado?
        #[arg(long)]
        temporal: Option<String>,
    },
    /// Cambia el estado (pendiente, en-progreso, cumplido)
    Status { id: Uuid, estado: GoalStatus },
    /// Elimina una meta por id
    Remove { id: Uuid },
    /// Completa el módulo y gana puntos
    Complete,
    /// Exporta las metas a un archivo de texto
    Export,
}

pub fn run(action: GoalsAction) -> Result<(), Box<dyn std::error::Error>> {
    let store = Store::open()?;
    let mut board = GoalBoard::load(&store)?;

    match action {
        GoalsAction::List => {
            print!("{}", board.render());
            for goal in &board.goals {
                println!("{}  {}", goal.id, goal.objective);
            }
        }
        GoalsAction::Add { objetivo } => {
            let id = board.add(objetivo.as_deref());
            board.save(&store)?;
            println!("{id}");
        }
        GoalsAction::Update {
            id,
            objetivo,
            especifico,
            medible,
            alcanzable,
            relevante,
            temporal,
        } => {
            let goal = board
                .get_mut(id)
                .ok_or_else(|| format!("no existe una meta con id {id}"))?;
            if let Some(objetivo) = objetivo {
                goal.objective = objetivo;
            }
            if let Some(especifico) = especifico {
                goal.specific = especifico;
            }
            if let Some(medible) = medible {
                goal.measurable = medible;
            }
            if let Some(alcanzable) = alcanzable {
                goal.achievable = alcanzable;
            }
            if let Some(relevante) = relevante {
                goal.relevant = relevante;
            }
            if let Some(temporal) = temporal {
                goal.time_bound = temporal;
            }
            board.save(&store)?;
        }
        GoalsAction::Status { id, estado } => {
            let goal = board
                .get_mut(id)
                .ok_or_else(|| format!("no existe una meta con id {id}"))?;
            goal.status = estado;
            board.save(&store)?;
        }
        GoalsAction::Remove { id } => {
            if !board.remove(id) {
                return Err(format!("no existe una meta con id {id}").into());
            }
            board.save(&store)?;
        }
        GoalsAction::Complete => super::complete_module(&store, &board)?,
        GoalsAction::Export => super::export_module(&board)?,
    }
    Ok(())
}
