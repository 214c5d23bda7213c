//! `secret.json`-backed secret service.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::debug;

use snapp_core::Result;
use snapp_core::config::{GeminiConfig, SecretConfig, SecretService};

use crate::paths::SnappPaths;

/// Environment variable that overrides the Gemini key from `secret.json`.
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Loads `secret.json` once and caches it.
///
/// A missing file is not an error: the config is empty unless
/// `GEMINI_API_KEY` is set.
#[derive(Clone)]
pub struct SecretServiceImpl {
    path: PathBuf,
    secrets: Arc<RwLock<Option<SecretConfig>>>,
}

impl SecretServiceImpl {
    pub fn new(base_path: Option<&Path>) -> Result<Self> {
        let path = SnappPaths::new(base_path).secret_file()?;
        Ok(Self {
            path,
            secrets: Arc::new(RwLock::new(None)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_file(&self) -> Result<SecretConfig> {
        if !self.path.exists() {
            return Ok(SecretConfig::default());
        }
        let content = std::fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(SecretConfig::default());
        }
        Ok(serde_json::from_str(&content)?)
    }
}

/// Replaces the Gemini key with `env_key` when it is set and non-empty,
/// keeping any configured model name.
pub fn apply_env_override(mut config: SecretConfig, env_key: Option<String>) -> SecretConfig {
    if let Some(api_key) = env_key.filter(|key| !key.trim().is_empty()) {
        debug!("Using Gemini API key from environment");
        let model_name = config.gemini.and_then(|g| g.model_name);
        config.gemini = Some(GeminiConfig {
            api_key,
            model_name,
        });
    }
    config
}

#[async_trait::async_trait]
impl SecretService for SecretServiceImpl {
    async fn load_secrets(&self) -> Result<SecretConfig> {
        if let Some(cached) = self.secrets.read().await.as_ref() {
            return Ok(cached.clone());
        }

        let loaded = apply_env_override(self.read_file()?, std::env::var(GEMINI_API_KEY_ENV).ok());
        *self.secrets.write().await = Some(loaded.clone());
        Ok(loaded)
    }

    async fn secret_file_exists(&self) -> bool {
        self.path.exists()
    }
}
