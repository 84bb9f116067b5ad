//! Configuration management for the vault search service.
//!
//! This module handles loading configuration from TOML files and
//! environment variables, with defaults for every setting.

use crate::core::error::{Result, VaultError};
use crate::core::xdg::XdgDirs;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub documents: DocumentsConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Search configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Results returned when the request carries no limit
    #[serde(default = "default_limit")]
    pub default_limit: usize,

    /// Upper bound applied to requested limits
    #[serde(default = "default_max_limit")]
    pub max_limit: usize,

    /// Maximum query string length in characters
    #[serde(default = "default_max_query_length")]
    pub max_query_length: usize,
}

/// Document import configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DocumentsConfig {
    /// Maximum file size in MB (larger files are skipped)
    #[serde(default = "default_max_file_size")]
    pub max_file_size_mb: usize,

    /// Extracted text is cut after this many characters
    #[serde(default = "default_max_extracted_chars")]
    pub max_extracted_chars: usize,

    /// File patterns to include (glob syntax)
    #[serde(default = "default_include_patterns")]
    pub include_patterns: Vec<String>,

    /// File patterns to exclude (glob syntax)
    #[serde(default = "default_exclude_patterns")]
    pub exclude_patterns: Vec<String>,
}

/// Storage configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Root directory for document storage
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_limit() -> usize {
    10
}

fn default_max_limit() -> usize {
    100
}

fn default_max_query_length() -> usize {
    500
}

fn default_max_file_size() -> usize {
    10
}

fn default_max_extracted_chars() -> usize {
    100_000
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_include_patterns() -> Vec<String> {
    [
        "*.txt", "*.md", "*.markdown", "*.rst", "*.csv", "*.tsv", "*.json", "*.xml", "*.html",
        "*.htm", "*.log", "*.yaml", "*.yml", "*.toml", "*.pdf",
    ]
    .iter()
    .map(|p| p.to_string())
    .collect()
}

fn default_exclude_patterns() -> Vec<String> {
    [
        "**/node_modules/**",
        "**/.git/**",
        "**/target/**",
        "**/dist/**",
        "**/build/**",
        "**/__pycache__/**",
        // Binary document formats need a real extractor
        "**/*.doc",
        "**/*.docx",
        "**/*.xls",
        "**/*.xlsx",
        "**/*.ppt",
        "**/*.pptx",
        "**/*.odt",
        // Archives
        "**/*.zip",
        "**/*.tar",
        "**/*.gz",
        "**/*.7z",
    ]
    .iter()
    .map(|p| p.to_string())
    .collect()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            max_limit: default_max_limit(),
            max_query_length: default_max_query_length(),
        }
    }
}

impl Default for DocumentsConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: default_max_file_size(),
            max_extracted_chars: default_max_extracted_chars(),
            include_patterns: default_include_patterns(),
            exclude_patterns: default_exclude_patterns(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Parse an env var into `target`, ignoring unset or malformed values
fn env_override<T: std::str::FromStr>(name: &str, target: &mut T) {
    if let Ok(raw) = env::var(name) {
        match raw.parse() {
            Ok(value) => *target = value,
            Err(_) => tracing::warn!("Ignoring invalid value for {}: {:?}", name, raw),
        }
    }
}

impl Config {
    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| VaultError::ConfigError(format!("Failed to read config file: {e}")))?;

        let config: Config = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Load config with priority: env vars > TOML > defaults
    pub fn load() -> Result<Self> {
        let xdg = XdgDirs::new();
        Self::load_with_xdg(&xdg)
    }

    /// Load config with explicit XDG directories
    ///
    /// Priority order:
    /// 1. VAULT_CONFIG env var
    /// 2. XDG config file (~/.config/vault-search/config.toml)
    /// 3. Legacy ./vault-search.toml
    /// 4. Defaults
    pub fn load_with_xdg(xdg: &XdgDirs) -> Result<Self> {
        let mut config = if let Ok(config_path) = env::var("VAULT_CONFIG") {
            Self::from_file(config_path)?
        } else {
            let xdg_config = xdg.config_file();
            if xdg_config.exists() {
                Self::from_file(xdg_config)?
            } else if Path::new("vault-search.toml").exists() {
                Self::from_file("vault-search.toml")?
            } else {
                Self::default()
            }
        };

        // Unconfigured storage goes to the XDG data directory
        if env::var("VAULT_DATA_DIR").is_err() && config.storage.data_dir == default_data_dir() {
            config.storage.data_dir = xdg.data_dir.clone();
        }

        config.merge_env();
        config.validate()?;

        Ok(config)
    }

    /// Merge configuration with environment variables
    pub fn merge_env(&mut self) {
        env_override("VAULT_DEFAULT_LIMIT", &mut self.search.default_limit);
        env_override("VAULT_MAX_LIMIT", &mut self.search.max_limit);
        env_override("VAULT_MAX_QUERY_LENGTH", &mut self.search.max_query_length);

        env_override("VAULT_MAX_FILE_SIZE_MB", &mut self.documents.max_file_size_mb);
        env_override(
            "VAULT_MAX_EXTRACTED_CHARS",
            &mut self.documents.max_extracted_chars,
        );

        if let Ok(data_dir) = env::var("VAULT_DATA_DIR") {
            self.storage.data_dir = PathBuf::from(data_dir);
        }

        if let Ok(host) = env::var("VAULT_HOST") {
            self.server.host = host;
        }
        env_override("VAULT_PORT", &mut self.server.port);
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.search.default_limit == 0 {
            return Err(VaultError::ConfigError(
                "Default limit must be non-zero".to_string(),
            ));
        }

        if self.search.max_limit == 0 {
            return Err(VaultError::ConfigError(
                "Max limit must be non-zero".to_string(),
            ));
        }

        if self.search.default_limit > self.search.max_limit {
            return Err(VaultError::ConfigError(
                "Default limit cannot exceed max limit".to_string(),
            ));
        }

        if self.search.max_query_length == 0 {
            return Err(VaultError::ConfigError(
                "Max query length must be non-zero".to_string(),
            ));
        }

        if self.documents.max_file_size_mb == 0 {
            return Err(VaultError::ConfigError(
                "Max file size must be non-zero".to_string(),
            ));
        }

        if self.documents.max_extracted_chars == 0 {
            return Err(VaultError::ConfigError(
                "Max extracted chars must be non-zero".to_string(),
            ));
        }

        Ok(())
    }

    /// Socket address string for the HTTP server
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log the effective configuration
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Default limit: {}", self.search.default_limit);
        tracing::info!("  Max limit: {}", self.search.max_limit);
        tracing::info!("  Max query length: {}", self.search.max_query_length);
        tracing::info!("  Max file size: {} MB", self.documents.max_file_size_mb);
        tracing::info!(
            "  Max extracted chars: {}",
            self.documents.max_extracted_chars
        );
        tracing::info!(
            "  Include patterns: {} patterns",
            self.documents.include_patterns.len()
        );
        tracing::info!(
            "  Exclude patterns: {} patterns",
            self.documents.exclude_patterns.len()
        );
        tracing::info!("  Data dir: {:?}", self.storage.data_dir);
        tracing::info!("  Server: {}", self.bind_address());
    }
}
