//! AI business-term explainer.
//!
//! Thin client over the Gemini `generateContent` REST endpoint. The
//! assistant never surfaces an error: with no API key it answers with a
//! fixed "disabled" message, and any transport or decoding failure maps
//! to a fixed fallback message. The explanation text itself is an opaque
//! external concern.

use indoc::indoc;
use serde_json::json;

use crate::error::AssistantError;
use crate::storage::Config;

/// Shown when no API key is configured.
pub const DISABLED_MESSAGE: &str =
    "La funcionalidad del Asistente de IA está deshabilitada. Por favor, configura una API_KEY.";

/// Shown on any request failure.
pub const FALLBACK_MESSAGE: &str = "¡Ups! Parece que hubo un problema al contactar al asistente. \
     Por favor, inténtalo de nuevo más tarde.";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

const SYSTEM_INSTRUCTION: &str = indoc! {"
    Eres un amigable y experto asesor de negocios para emprendedores de
    subsistencia en Chile.
    Tu propósito es explicar conceptos de negocio de forma muy simple, clara
    y motivadora.
    Usa un lenguaje cercano y ejemplos prácticos relevantes para un pequeño
    negocio.
    Evita la jerga complicada. Responde siempre en español.
    Mantén tus respuestas concisas y al grano, idealmente en 2 o 3 párrafos.
    Empieza siempre con un tono positivo y alentador.
"};

/// Gemini-backed explainer for business terms.
pub struct Assistant {
    api_key: Option<String>,
    model: String,
    base_url: String,
    client: reqwest::Client,
}

impl Assistant {
    /// Build from config; the API_KEY environment variable is the
    /// fallback source for the key.
    pub fn from_config(config: &Config) -> Self {
        let api_key = config
            .assistant
            .api_key
            .clone()
            .or_else(|| std::env::var("API_KEY").ok())
            .filter(|k| !k.is_empty());
        Self {
            api_key,
            model: config.assistant.model.clone(),
            base_url: DEFAULT_BASE_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Point the client at a different endpoint (tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }

    /// Explain a business term in plain Spanish.
    ///
    /// Always returns displayable text: the disabled message without an
    /// API key, the fallback message on any failure.
    pub async fn explain(&self, topic: &str) -> String {
        let Some(key) = self.api_key.as_deref() else {
            return DISABLED_MESSAGE.to_string();
        };
        match self.request_explanation(key, topic).await {
            Ok(text) => text,
            Err(_) => FALLBACK_MESSAGE.to_string(),
        }
    }

    async fn request_explanation(
        &self,
        key: &str,
        topic: &str,
    ) -> Result<String, AssistantError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent?key={key}",
            self.base_url, self.model
        );
        let prompt = format!(
            "Explícame de forma sencilla qué es y para qué sirve \"{topic}\" \
             en mi pequeño emprendimiento."
        );
        let body = json!({
            "system_instruction": { "parts": [{ "text": SYSTEM_INSTRUCTION }] },
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": { "temperature": 0.7 },
        });

        let response: serde_json::Value = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        response["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| {
                AssistantError::MalformedResponse("no candidate text in response".into())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Config;

    fn assistant_with_key(server_url: &str) -> Assistant {
        let mut config = Config::default();
        config.assistant.api_key = Some("test-key".into());
        Assistant::from_config(&config).with_base_url(server_url.to_string())
    }

    #[tokio::test]
    async fn disabled_without_api_key() {
        let mut config = Config::default();
        config.assistant.api_key = None;
        // Ensure the env fallback is not in play for this test.
        std::env::remove_var("API_KEY");
        let assistant = Assistant::from_config(&config);
        assert!(!assistant.is_enabled());
        assert_eq!(assistant.explain("margen").await, DISABLED_MESSAGE);
    }

    #[tokio::test]
    async fn returns_candidate_text_on_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock(
                "POST",
                "/v1beta/models/gemini-2.5-flash:generateContent?key=test-key",
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"candidates":[{"content":{"parts":[{"text":"El margen es lo que te queda."}]}}]}"#,
            )
            .create_async()
            .await;

        let assistant = assistant_with_key(&server.url());
        let text = assistant.explain("margen de contribución").await;
        assert_eq!(text, "El margen es lo que te queda.");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn http_failure_degrades_to_fallback() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock(
                "POST",
                "/v1beta/models/gemini-2.5-flash:generateContent?key=test-key",
            )
            .with_status(500)
            .create_async()
            .await;

        let assistant = assistant_with_key(&server.url());
        assert_eq!(assistant.explain("margen").await, FALLBACK_MESSAGE);
    }

    #[tokio::test]
    async fn malformed_body_degrades_to_fallback() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock(
                "POST",
                "/v1beta/models/gemini-2.5-flash:generateContent?key=test-key",
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"candidates":[]}"#)
            .create_async()
            .await;

        let assistant = assistant_with_key(&server.url());
        assert_eq!(assistant.explain("margen").await, FALLBACK_MESSAGE);
    }
}
