use clap::Subcommand;
use minegocio_core::Config;

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Muestra la configuración completa
    Show,
    /// Lee un valor (assistant.api_key, assistant.model,
    /// ui.toast_duration_ms)
    Get { key: String },
    /// Escribe un valor
    Set { key: String, value: String },
}

pub fn run(action: ConfigAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigAction::Get { key } => {
            let config = Config::load()?;
            println!("{}", config.get(&key)?);
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(&key, &value)?;
            config.save()?;
        }
    }
    Ok(())
}
