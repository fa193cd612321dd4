//! Runtime configuration for tweet-triage.
//!
//! Configuration is loaded from a JSON file or constructed programmatically.
//! The generation-service credential is never stored in the file: it is read
//! from the environment variable named by `generation.api_key_env`.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Default bank used when a request omits `bank_name`.
pub const DEFAULT_BANK_NAME: &str = "Zenith";

/// Command-line arguments.
#[derive(Parser, Debug, Clone)]
#[command(name = "tweet-triage", about = "Tweet criticality triage via a hosted LLM")]
pub struct Cli {
    /// Path to configuration file (JSON).
    #[arg(short, long, default_value = "config.json")]
    pub config: PathBuf,

    /// HTTP listen address (overrides `server.listen`).
    #[arg(long)]
    pub listen: Option<String>,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines.
    #[arg(long)]
    pub json_logs: bool,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Server configuration.
    pub server: ServerConfig,

    /// Upstream generation service.
    pub generation: GenerationConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address (e.g. "0.0.0.0:8000").
    pub listen: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen: "0.0.0.0:8000".to_string(),
        }
    }
}

/// Generation service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Model identifier sent with every call.
    pub model: String,

    /// Base URL of the Gemini REST API.
    pub api_base: String,

    /// Environment variable holding the API key.
    pub api_key_env: String,

    /// Transport timeout for a single upstream call, in seconds.
    pub timeout_secs: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".to_string(),
            api_base: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            timeout_secs: 60,
        }
    }
}

impl GenerationConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Config {
    /// Load configuration from a JSON file, falling back to defaults for missing fields.
    pub fn load(path: &std::path::Path) -> anyhow::Result<Self> {
        if path.exists() {
            let data = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&data)?;
            Ok(config)
        } else {
            tracing::warn!("Config file not found at {:?}, using defaults", path);
            Ok(Config::default())
        }
    }

    /// Read the generation credential from the environment.
    ///
    /// Fails when the variable is unset or blank so the process never starts
    /// serving traffic it cannot fulfil.
    pub fn api_key(&self) -> anyhow::Result<SecretString> {
        let var = &self.generation.api_key_env;
        match std::env::var(var) {
            Ok(key) if !key.trim().is_empty() => Ok(SecretString::new(key)),
            Ok(_) => anyhow::bail!("{var} is set but empty"),
            Err(_) => anyhow::bail!("{var} is required but not set"),
        }
    }
}
