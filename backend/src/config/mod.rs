//! Configuration management for the NutriAI backend
//!
//! Configuration is loaded hierarchically:
//! 1. Default values (in code)
//! 2. TOML config files (config/development.toml or config/production.toml)
//! 3. Environment variables (prefix: NUTRIAI__)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub uploads: UploadConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Uploaded image handling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Directory images are written to
    pub dir: PathBuf,
    pub max_file_bytes: usize,
    /// URL prefix the directory is served under
    pub public_path: String,
}

/// Food image analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Artificial latency of the placeholder classifier
    pub simulated_delay_ms: u64,
}

impl AnalysisConfig {
    pub fn simulated_delay(&self) -> Duration {
        Duration::from_millis(self.simulated_delay_ms)
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            simulated_delay_ms: 1500,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            uploads: UploadConfig {
                dir: PathBuf::from("./uploads"),
                max_file_bytes: 10 * 1024 * 1024, // 10MB
                public_path: "/uploads".to_string(),
            },
            analysis: AnalysisConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from files and environment
    ///
    /// Loading order (later sources override earlier):
    /// 1. Default values
    /// 2. Config file based on RUST_ENV (development.toml or production.toml)
    /// 3. Environment variables with NUTRIAI__ prefix
    pub fn load() -> Result<Self> {
        let env = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());
        let config_file = format!("config/{}.toml", env);

        let config = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?)
            .add_source(config::File::with_name(&config_file).required(false))
            // e.g., NUTRIAI__SERVER__PORT=9000 sets server.port
            .add_source(config::Environment::with_prefix("NUTRIAI").separator("__"))
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Check if running in production mode
    pub fn is_production() -> bool {
        env::var("RUST_ENV")
            .map(|v| v == "production")
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.uploads.max_file_bytes, 10 * 1024 * 1024);
        assert_eq!(config.uploads.public_path, "/uploads");
        assert_eq!(config.analysis.simulated_delay(), Duration::from_millis(1500));
    }

    #[test]
    fn test_load_without_files_uses_defaults() {
        let config = AppConfig::load().unwrap();
        assert_eq!(config.uploads.dir, PathBuf::from("./uploads"));
    }

    #[test]
    fn test_is_production() {
        // Default should be false (development)
        assert!(!AppConfig::is_production());
    }
}
