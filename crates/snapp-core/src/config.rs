//! Secret configuration and the service that loads it.

use serde::{Deserialize, Serialize};

use crate::error::Result;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Contents of `secret.json`.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretConfig {
    #[serde(default)]
    pub gemini: Option<GeminiConfig>,
}

/// Gemini API configuration
#[derive(Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    pub api_key: String,
    #[serde(default)]
    pub model_name: Option<String>,
}

impl GeminiConfig {
    pub fn model(&self) -> &str {
        self.model_name.as_deref().unwrap_or(DEFAULT_GEMINI_MODEL)
    }
}

// Keeps the key out of logs and error output.
impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("api_key", &"<redacted>")
            .field("model_name", &self.model_name)
            .finish()
    }
}

/// Loads API keys from secure storage.
///
/// Implementations must never log secrets or put them in error messages.
#[async_trait::async_trait]
pub trait SecretService: Send + Sync {
    async fn load_secrets(&self) -> Result<SecretConfig>;

    async fn secret_file_exists(&self) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_defaults_to_flash() {
        let config: SecretConfig =
            serde_json::from_str(r#"{"gemini": {"api_key": "k"}}"#).unwrap();
        assert_eq!(config.gemini.unwrap().model(), "gemini-2.5-flash");
    }

    #[test]
    fn test_debug_redacts_key() {
        let config = GeminiConfig {
            api_key: "super-secret".to_string(),
            model_name: None,
        };
        assert!(!format!("{config:?}").contains("super-secret"));
    }
}
