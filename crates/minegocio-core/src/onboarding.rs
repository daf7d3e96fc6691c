//! First-run welcome.
//!
//! Shown once, then dismissed; the flag persists with the rest of the
//! user's data.

use indoc::indoc;

use crate::error::StoreError;
use crate::storage::Store;

pub const STORAGE_KEY: &str = "showOnboarding";

/// Whether the welcome should still be shown. Defaults to true until
/// dismissed.
pub fn should_show(store: &Store) -> Result<bool, StoreError> {
    Ok(store.get_json::<bool>(STORAGE_KEY)?.unwrap_or(true))
}

/// Dismiss the welcome permanently.
pub fn dismiss(store: &Store) -> Result<(), StoreError> {
    store.set_json(STORAGE_KEY, &false)
}

/// The welcome text.
pub fn welcome_text() -> &'static str {
    indoc! {"
        ¡Bienvenido a Gerenciando Mi Negocio!

        Esta es tu herramienta personal para llevar tu emprendimiento al
        siguiente nivel.

        ¿Cómo funciona?
          - Completa Módulos: utiliza nuestras herramientas como el Lienzo de
            Negocio y la Calculadora de Punto de Equilibrio.
          - Gana Puntos y Medallas: al completar cada módulo, recibirás puntos
            y medallas que marcan tu progreso.
          - Sube de Nivel: comienza como Principiante y avanza hasta
            convertirte en un experto.

        Importante: todos tus datos se guardan de forma segura y privada
        directamente en este dispositivo. No se envían a ningún servidor.
    "}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_once_then_stays_dismissed() {
        let store = Store::open_memory().unwrap();
        assert!(should_show(&store).unwrap());

        dismiss(&store).unwrap();
        assert!(!should_show(&store).unwrap());

        // Dismissing again changes nothing.
        dismiss(&store).unwrap();
        assert!(!should_show(&store).unwrap());
    }
}
