//! Path management for FlightSnapp configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/flightsnapp/       # Config directory
//! ├── catalog.toml             # Personas, quiz content, vaycovers
//! └── secret.json              # API keys
//! ```

use std::path::{Path, PathBuf};

use snapp_core::config::{DEFAULT_GEMINI_MODEL, GeminiConfig, SecretConfig};
use snapp_core::{Result, SnappError};

pub const APP_DIR_NAME: &str = "flightsnapp";
pub const CATALOG_FILE: &str = "catalog.toml";
pub const SECRET_FILE: &str = "secret.json";

/// Resolves the files FlightSnapp reads and writes.
///
/// With a base path (tests, portable installs) everything lives directly
/// under it; otherwise under the platform config directory.
#[derive(Debug, Clone)]
pub struct SnappPaths {
    base: Option<PathBuf>,
}

impl SnappPaths {
    pub fn new(base: Option<&Path>) -> Self {
        Self {
            base: base.map(Path::to_path_buf),
        }
    }

    pub fn config_dir(&self) -> Result<PathBuf> {
        match &self.base {
            Some(base) => Ok(base.clone()),
            None => dirs::config_dir()
                .map(|dir| dir.join(APP_DIR_NAME))
                .ok_or_else(|| SnappError::config("Cannot find home directory")),
        }
    }

    pub fn catalog_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join(CATALOG_FILE))
    }

    /// Path to `secret.json`. Keep it readable by the owner only.
    pub fn secret_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join(SECRET_FILE))
    }

    /// Creates `secret.json` with an empty Gemini entry if it is missing.
    /// On Unix the file is restricted to mode 600.
    pub fn ensure_secret_file(&self) -> Result<PathBuf> {
        let secret_path = self.secret_file()?;
        if secret_path.exists() {
            return Ok(secret_path);
        }

        if let Some(parent) = secret_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let template = SecretConfig {
            gemini: Some(GeminiConfig {
                api_key: String::new(),
                model_name: Some(DEFAULT_GEMINI_MODEL.to_string()),
            }),
        };
        std::fs::write(&secret_path, serde_json::to_string_pretty(&template)?)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&secret_path, std::fs::Permissions::from_mode(0o600))?;
        }

        Ok(secret_path)
    }
}

impl Default for SnappPaths {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_dir_ends_with_app_name() {
        if let Ok(dir) = SnappPaths::default().config_dir() {
            assert!(dir.ends_with("flightsnapp"));
        }
    }

    #[test]
    fn test_files_live_under_base() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SnappPaths::new(Some(temp_dir.path()));
        assert_eq!(paths.catalog_file().unwrap(), temp_dir.path().join("catalog.toml"));
        assert_eq!(paths.secret_file().unwrap(), temp_dir.path().join("secret.json"));
    }

    #[test]
    fn test_ensure_secret_file_writes_template_once() {
        let temp_dir = TempDir::new().unwrap();
        let paths = SnappPaths::new(Some(&temp_dir.path().join("nested")));
        let path = paths.ensure_secret_file().unwrap();
        let written: SecretConfig =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written.gemini.unwrap().model(), "gemini-2.5-flash");

        std::fs::write(&path, r#"{"gemini": {"api_key": "kept"}}"#).unwrap();
        paths.ensure_secret_file().unwrap();
        assert!(std::fs::read_to_string(&path).unwrap().contains("kept"));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = std::fs::metadata(&path).unwrap().permissions().mode();
            assert_eq!(mode & 0o777, 0o600);
        }
    }
}
