#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! JSON configuration stored at `~/prompts/config.json`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub project: ProjectConfig,
    #[serde(default)]
    pub simulator: SimulatorConfig,
    #[serde(default)]
    pub credentials: CredentialsConfig,
}

/// Action project settings, used to build the invocation phrase.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProjectConfig {
    #[serde(default)]
    pub project_id: String,
    #[serde(default = "ProjectConfig::default_display_name")]
    pub display_name: String,
}

impl Default for ProjectConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            display_name: Self::default_display_name(),
        }
    }
}

impl ProjectConfig {
    fn default_display_name() -> String {
        "My Test App".to_string()
    }

    #[must_use]
    pub fn trigger_phrase(&self) -> String {
        format!("Talk to {}", self.display_name)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SimulatorConfig {
    #[serde(default = "SimulatorConfig::default_locale")]
    pub locale: String,
    #[serde(default = "SimulatorConfig::default_surface")]
    pub surface: String,
    #[serde(default = "SimulatorConfig::default_continue_prompt")]
    pub continue_prompt: String,
    #[serde(default = "SimulatorConfig::default_no_match_prompt")]
    pub no_match_prompt: String,
    /// Remote webhook to drive instead of the in-process handlers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub webhook_url: Option<String>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            locale: Self::default_locale(),
            surface: Self::default_surface(),
            continue_prompt: Self::default_continue_prompt(),
            no_match_prompt: Self::default_no_match_prompt(),
            webhook_url: None,
        }
    }
}

impl SimulatorConfig {
    fn default_locale() -> String {
        "en-US".to_string()
    }

    fn default_surface() -> String {
        "PHONE".to_string()
    }

    fn default_continue_prompt() -> String {
        "I can show you basic cards, lists, and more on your phone and smart display. What would you like to see?".to_string()
    }

    fn default_no_match_prompt() -> String {
        "Sorry, I didn't catch that. Can you say that again?".to_string()
    }
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CredentialsConfig {
    #[serde(default = "CredentialsConfig::default_scopes")]
    pub scopes: Vec<String>,
    #[serde(default = "CredentialsConfig::default_redirect_uri")]
    pub redirect_uri: String,
    #[serde(default = "CredentialsConfig::default_auth_uri")]
    pub auth_uri: String,
    #[serde(default = "CredentialsConfig::default_token_uri")]
    pub token_uri: String,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            scopes: Self::default_scopes(),
            redirect_uri: Self::default_redirect_uri(),
            auth_uri: Self::default_auth_uri(),
            token_uri: Self::default_token_uri(),
        }
    }
}

impl CredentialsConfig {
    fn default_scopes() -> Vec<String> {
        vec!["https://www.googleapis.com/auth/actions.builder".to_string()]
    }

    fn default_redirect_uri() -> String {
        "urn:ietf:wg:oauth:2.0:oob".to_string()
    }

    fn default_auth_uri() -> String {
        "https://accounts.google.com/o/oauth2/v2/auth".to_string()
    }

    fn default_token_uri() -> String {
        "https://oauth2.googleapis.com/token".to_string()
    }
}

impl Config {
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        Ok(dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Cannot find home directory"))?
            .join("prompts"))
    }

    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    pub fn load() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            anyhow::bail!(
                "Config file not found at: {}. Please run 'prompts init' to create config.",
                config_path.display()
            );
        }

        Self::from_json(&std::fs::read_to_string(&config_path)?)
    }

    /// Load the config file if present, otherwise use built-in defaults.
    pub fn load_or_default() -> anyhow::Result<Self> {
        let config_path = Self::config_path()?;
        if config_path.exists() {
            info!("Loading config from {}", config_path.display());
            Self::load()
        } else {
            debug!("No config at {}, using defaults", config_path.display());
            Ok(Self::default())
        }
    }

    pub fn from_json(content: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn ensure_config_dir() -> anyhow::Result<PathBuf> {
        let config_dir = Self::config_dir()?;
        std::fs::create_dir_all(&config_dir)?;
        Ok(config_dir)
    }

    pub fn create_config() -> anyhow::Result<()> {
        let config_dir = Self::ensure_config_dir()?;
        let config_path = config_dir.join("config.json");

        if config_path.exists() {
            anyhow::bail!(
                "Config file already exists at: {}. Please edit it directly.",
                config_path.display()
            );
        }

        let config_template = serde_json::to_string_pretty(&Self::default())?;
        std::fs::write(&config_path, config_template)?;

        println!("✅ Created config file at: {}", config_path.display());
        println!();
        println!("📝 Next steps:");
        println!("   1. Set project.project_id and project.display_name for your Action");
        println!("   2. Run 'prompts chat' to try the prompts locally");
        println!("   3. Optionally set simulator.webhook_url to drive a deployed webhook");
        println!();
        Ok(())
    }
}
