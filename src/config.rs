use lazy_static::lazy_static;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::backend::database::DatabaseBackendConfig;
use crate::backend::DatabaseType;
use crate::error::{AppError, AppResult};

lazy_static! {
    static ref ENV_VAR: Regex = Regex::new(r"\$\{([^}:]+)(?::-([^}]*))?\}").unwrap();
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub backend: BackendConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct BackendConfig {
    #[serde(rename = "type")]
    pub backend_type: String,
    pub database: Option<DatabaseConfig>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DatabaseConfig {
    #[serde(rename = "type")]
    pub db_type: String,
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
}

fn default_max_connections() -> u32 {
    10
}

fn default_connection_timeout() -> u64 {
    30
}

/// Page size used when a listing request omits `size` or sends a bad one,
/// and the largest size a client may ask for.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct PaginationConfig {
    #[serde(default = "default_page_size")]
    pub default_size: i64,
    #[serde(default = "default_max_page_size")]
    pub max_size: i64,
}

fn default_page_size() -> i64 {
    20
}

fn default_max_page_size() -> i64 {
    2000
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_size: default_page_size(),
            max_size: default_max_page_size(),
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// Load configuration from YAML file
    pub fn load_from_file<P: AsRef<Path>>(config_path: P) -> AppResult<Self> {
        let path = config_path.as_ref();

        if !path.exists() {
            return Err(AppError::Configuration(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path).map_err(|e| {
            AppError::Configuration(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse configuration from YAML text, expanding environment variables first
    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let expanded_content = Self::expand_env_vars(content)?;

        let app_config: AppConfig = serde_yaml::from_str(&expanded_content)
            .map_err(|e| AppError::Configuration(format!("Failed to parse config: {}", e)))?;

        app_config.validate()?;
        Ok(app_config)
    }

    /// Create default configuration for in-memory SQLite
    pub fn default_config() -> Self {
        AppConfig {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
            },
            backend: BackendConfig {
                backend_type: "database".to_string(),
                database: Some(DatabaseConfig {
                    db_type: "sqlite".to_string(),
                    url: ":memory:".to_string(),
                    max_connections: 1,
                    connection_timeout: default_connection_timeout(),
                }),
            },
            pagination: PaginationConfig::default(),
            logging: LoggingConfig::default(),
        }
    }

    /// Expand environment variables in format ${VAR_NAME} or ${VAR_NAME:-default}
    fn expand_env_vars(content: &str) -> AppResult<String> {
        let mut missing = Vec::new();

        let expanded = ENV_VAR.replace_all(content, |caps: &Captures| {
            let name = &caps[1];
            match std::env::var(name) {
                Ok(value) => value,
                Err(_) => match caps.get(2) {
                    Some(default) => default.as_str().to_string(),
                    None => {
                        missing.push(name.to_string());
                        String::new()
                    }
                },
            }
        });

        if let Some(name) = missing.first() {
            return Err(AppError::Configuration(format!(
                "Environment variable {} not found and no default provided",
                name
            )));
        }

        Ok(expanded.into_owned())
    }

    /// Check the values that serde cannot
    pub fn validate(&self) -> AppResult<()> {
        self.database_backend_config()?;

        if self.pagination.default_size < 1 || self.pagination.max_size < 1 {
            return Err(AppError::Configuration(
                "Pagination sizes must be at least 1".to_string(),
            ));
        }
        if self.pagination.default_size > self.pagination.max_size {
            return Err(AppError::Configuration(format!(
                "pagination.default_size ({}) exceeds pagination.max_size ({})",
                self.pagination.default_size, self.pagination.max_size
            )));
        }

        Ok(())
    }

    /// Build the backend configuration from the `backend` section
    pub fn database_backend_config(&self) -> AppResult<DatabaseBackendConfig> {
        if self.backend.backend_type != "database" {
            return Err(AppError::Configuration(format!(
                "Unsupported backend type: {}",
                self.backend.backend_type
            )));
        }

        let database_config = self.backend.database.as_ref().ok_or_else(|| {
            AppError::Configuration(
                "Database configuration is required when backend type is 'database'".to_string(),
            )
        })?;

        let database_type = match database_config.db_type.as_str() {
            "postgresql" => DatabaseType::PostgreSQL,
            "sqlite" => DatabaseType::SQLite,
            other => {
                return Err(AppError::Configuration(format!(
                    "Unsupported database type: {}",
                    other
                )))
            }
        };

        Ok(DatabaseBackendConfig {
            database_type,
            connection_url: database_config.url.clone(),
            max_connections: database_config.max_connections,
            connection_timeout: database_config.connection_timeout,
        })
    }
}
