use clap::Subcommand;
use minegocio_core::{Assistant, Config};

#[derive(Subcommand)]
pub enum AssistantAction {
    /// Explica un término de negocio en lenguaje simple
    Explain { tema: String },
}

pub fn run(action: AssistantAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        AssistantAction::Explain { tema } => {
            let config = Config::load()?;
            let assistant = Assistant::from_config(&config);
            let runtime = tokio::runtime::Runtime::new()?;
            let text = runtime.block_on(assistant.explain(&tema));
            println!("{text}");
        }
    }
    Ok(())
}
