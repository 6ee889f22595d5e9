use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::value_objects::thresholds::MarkerThresholds;

/// Top-level application configuration loaded from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub thresholds: ThresholdConfig,
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

/// Inflammatory marker cut-offs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThresholdConfig {
    #[serde(default = "default_crp_critical")]
    pub crp_critical: f64,
    #[serde(default = "default_crp_elevated")]
    pub crp_elevated: f64,
    #[serde(default = "default_wbc_critical")]
    pub wbc_critical: f64,
    #[serde(default = "default_wbc_elevated")]
    pub wbc_elevated: f64,
}

/// Explanation provider settings (gemini or noop).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AiConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_provider")]
    pub provider: String,
    #[serde(default = "default_model")]
    pub model: String,
    /// Name of the environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// Database storage path (tilde-expanded at point of use).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default = "default_database_path")]
    pub path: String,
}

// --- Defaults ---

const fn default_crp_critical() -> f64 {
    100.0
}

const fn default_crp_elevated() -> f64 {
    50.0
}

const fn default_wbc_critical() -> f64 {
    15000.0
}

const fn default_wbc_elevated() -> f64 {
    11000.0
}

const fn default_true() -> bool {
    true
}

fn default_provider() -> String {
    "gemini".into()
}

fn default_model() -> String {
    "gemini-1.5-flash".into()
}

fn default_api_key_env() -> String {
    "GEMINI_API_KEY".into()
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".into()
}

const fn default_timeout() -> u64 {
    30
}

fn default_database_path() -> String {
    "~/.local/share/clinwatch/clinwatch.db".into()
}

// --- Default impls ---

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            crp_critical: default_crp_critical(),
            crp_elevated: default_crp_elevated(),
            wbc_critical: default_wbc_critical(),
            wbc_elevated: default_wbc_elevated(),
        }
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            enabled: default_true(),
            provider: default_provider(),
            model: default_model(),
            api_key_env: default_api_key_env(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_database_path(),
        }
    }
}

// --- AppConfig methods ---

impl AppConfig {
    /// Load config from default path or create default config file
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined,
    /// the file cannot be read, or the TOML content is invalid.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_or_create(&path)
    }

    /// Load from a specific path, or create a default config file if missing
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is invalid,
    /// or the default config file cannot be written.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            Ok(config)
        }
    }

    /// Load from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML content is invalid.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).context("Failed to read config file")?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    /// Save config to a specific path, creating parent directories if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created,
    /// serialization fails, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("clinwatch").join("config.toml"))
    }
}

impl From<&ThresholdConfig> for MarkerThresholds {
    fn from(config: &ThresholdConfig) -> Self {
        let crp_critical = config.crp_critical.max(0.0);
        let wbc_critical = config.wbc_critical.max(0.0);

        // Elevated band must sit below the critical cut-off
        Self {
            crp_critical,
            crp_elevated: config.crp_elevated.clamp(0.0, crp_critical),
            wbc_critical,
            wbc_elevated: config.wbc_elevated.clamp(0.0, wbc_critical),
        }
    }
}
