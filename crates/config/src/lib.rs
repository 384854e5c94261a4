//! Configuration loading, validation, and management for VyomNetra.
//!
//! Loads configuration from `~/.vyomnetra/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// The root configuration structure.
///
/// Maps directly to `~/.vyomnetra/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP endpoint configuration
    #[serde(default)]
    pub gateway: GatewayConfig,

    /// Live data feed configuration
    #[serde(default)]
    pub sources: SourcesConfig,

    /// Generative model configuration
    #[serde(default)]
    pub model: ModelConfig,
}

fn default_true() -> bool {
    true
}

/// Redact a secret string for Debug output.
fn redact(s: &Option<String>) -> &'static str {
    match s {
        Some(_) => "[REDACTED]",
        None => "None",
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GatewayConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_host")]
    pub host: String,

    /// Allow cross-origin requests from any origin
    #[serde(default = "default_true")]
    pub permissive_cors: bool,
}

fn default_port() -> u16 {
    5000
}
fn default_host() -> String {
    "0.0.0.0".into()
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            host: default_host(),
            permissive_cors: true,
        }
    }
}

/// Endpoints and credentials for the three live feeds.
#[derive(Clone, Serialize, Deserialize)]
pub struct SourcesConfig {
    /// Key sent to api.nasa.gov (the public demo key by default)
    #[serde(default = "default_nasa_api_key")]
    pub nasa_api_key: String,

    #[serde(default = "default_apod_url")]
    pub apod_url: String,

    #[serde(default = "default_neo_url")]
    pub neo_url: String,

    #[serde(default = "default_launch_url")]
    pub launch_url: String,

    /// Per-request timeout for every feed
    #[serde(default = "default_source_timeout")]
    pub timeout_secs: u64,
}

fn default_nasa_api_key() -> String {
    "DEMO_KEY".into()
}
fn default_apod_url() -> String {
    "https://api.nasa.gov/planetary/apod".into()
}
fn default_neo_url() -> String {
    "https://api.nasa.gov/neo/rest/v1/feed".into()
}
fn default_launch_url() -> String {
    "https://api.spacexdata.com/v4/launches/latest".into()
}
fn default_source_timeout() -> u64 {
    10
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            nasa_api_key: default_nasa_api_key(),
            apod_url: default_apod_url(),
            neo_url: default_neo_url(),
            launch_url: default_launch_url(),
            timeout_secs: default_source_timeout(),
        }
    }
}

impl std::fmt::Debug for SourcesConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let key = if self.nasa_api_key == default_nasa_api_key() {
            "DEMO_KEY"
        } else {
            "[REDACTED]"
        };
        f.debug_struct("SourcesConfig")
            .field("nasa_api_key", &key)
            .field("apod_url", &self.apod_url)
            .field("neo_url", &self.neo_url)
            .field("launch_url", &self.launch_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Generative model settings. No `api_key` means the model path is off.
#[derive(Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default = "default_model")]
    pub model: String,

    /// Override the model API base URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    #[serde(default = "default_model_timeout")]
    pub timeout_secs: u64,
}

fn default_model() -> String {
    "gemini-2.0-flash".into()
}
fn default_temperature() -> f32 {
    0.7
}
fn default_model_timeout() -> u64 {
    30
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
            api_url: None,
            temperature: default_temperature(),
            timeout_secs: default_model_timeout(),
        }
    }
}

impl std::fmt::Debug for ModelConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelConfig")
            .field("api_key", &redact(&self.api_key))
            .field("model", &self.model)
            .field("api_url", &self.api_url)
            .field("temperature", &self.temperature)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.vyomnetra/config.toml).
    ///
    /// Environment variables override the file:
    /// - `GOOGLE_API_KEY`: model credential (enables AI answers)
    /// - `VYOMNETRA_MODEL`: model name
    /// - `NASA_API_KEY`: api.nasa.gov key
    /// - `VYOMNETRA_PORT`: gateway port
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(&config_path)?;
        config.apply_env(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let mut config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.drop_blank_credentials();
        config.validate()?;
        Ok(config)
    }

    /// An empty credential in the file means "not configured".
    fn drop_blank_credentials(&mut self) {
        if self.model.api_key.as_deref().is_some_and(|k| k.trim().is_empty()) {
            self.model.api_key = None;
        }
    }

    /// Apply overrides from an environment lookup.
    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(key) = var("GOOGLE_API_KEY").filter(|k| !k.trim().is_empty()) {
            self.model.api_key = Some(key);
        }

        if let Some(model) = var("VYOMNETRA_MODEL") {
            self.model.model = model;
        }

        if let Some(key) = var("NASA_API_KEY").filter(|k| !k.trim().is_empty()) {
            self.sources.nasa_api_key = key;
        }

        if let Some(port) = var("VYOMNETRA_PORT") {
            self.gateway.port = port.parse().map_err(|_| {
                ConfigError::ValidationError(format!("VYOMNETRA_PORT is not a port: {port}"))
            })?;
        }

        self.validate()
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".vyomnetra")
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.model.temperature < 0.0 || self.model.temperature > 2.0 {
            return Err(ConfigError::ValidationError(
                "model.temperature must be between 0.0 and 2.0".into(),
            ));
        }

        if self.sources.timeout_secs == 0 || self.model.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "timeouts must be at least 1 second".into(),
            ));
        }

        for (name, url) in [
            ("sources.apod_url", &self.sources.apod_url),
            ("sources.neo_url", &self.sources.neo_url),
            ("sources.launch_url", &self.sources.launch_url),
        ] {
            if url.trim().is_empty() {
                return Err(ConfigError::ValidationError(format!("{name} is empty")));
            }
        }

        Ok(())
    }

    /// Whether a model credential is available (from config or environment).
    pub fn has_model_key(&self) -> bool {
        self.model
            .api_key
            .as_deref()
            .is_some_and(|k| !k.trim().is_empty())
    }

    /// Generate a default config TOML string.
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
