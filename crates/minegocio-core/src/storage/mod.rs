mod config;
pub mod store;

pub use config::Config;
pub use store::Store;

use std::path::PathBuf;

use crate::error::StoreError;

/// Returns `~/.config/minegocio[-dev]/` based on MINEGOCIO_ENV.
///
/// Set MINEGOCIO_ENV=dev to use a development data directory.
///
/// # Errors
/// Returns an error if the config directory cannot be created.
pub fn data_dir() -> Result<PathBuf, StoreError> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("MINEGOCIO_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("minegocio-dev")
    } else {
        base_dir.join("minegocio")
    };

    std::fs::create_dir_all(&dir).map_err(|e| StoreError::DataDir(e.to_string()))?;
    Ok(dir)
}
