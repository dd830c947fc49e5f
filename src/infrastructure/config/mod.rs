use crate::domain::error::AppError;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub dataset_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8000,
            database_url: "sqlite::memory:".to_string(),
            dataset_path: PathBuf::from("data/Movielist.csv"),
        }
    }
}

impl AppConfig {
    /// Layered load: defaults, then `Razzie.toml` when present, then
    /// `RAZZIE_*` environment variables.
    pub fn load() -> Result<Self, AppError> {
        let config: AppConfig = Figment::from(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file("Razzie.toml"))
            .merge(Env::prefixed("RAZZIE_"))
            .extract()
            .map_err(|e| AppError::Internal(format!("Failed to load configuration: {}", e)))?;

        config.validate().map_err(AppError::ValidationError)?;
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("host must not be empty".to_string());
        }
        if self.port == 0 {
            return Err("port must be > 0".to_string());
        }
        if self.database_url.is_empty() {
            return Err("database_url must not be empty".to_string());
        }
        if self.dataset_path.as_os_str().is_empty() {
            return Err("dataset_path must not be empty".to_string());
        }
        Ok(())
    }
}
