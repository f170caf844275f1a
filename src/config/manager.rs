use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::i18n::Language;
use crate::paths;
use crate::reply::{DEFAULT_ENDPOINT, DEFAULT_MODEL};
use crate::ui::Style;

/// Environment variable read for the API key unless configured otherwise.
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Settings in the `[mon]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonConfig {
    /// Initial UI language (`en` or `bn`).
    pub language: Option<String>,
    /// Gemini model name.
    pub model: Option<String>,
    /// Base URL of the Gemini API.
    pub endpoint: Option<String>,
    /// API key stored directly in config (not recommended).
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    pub api_key_env: Option<String>,
}

impl MonConfig {
    /// Gets the API key, preferring the environment variable over the config file.
    pub fn get_api_key(&self) -> Option<String> {
        let env_var = self.api_key_env.as_deref().unwrap_or(DEFAULT_API_KEY_ENV);
        if let Ok(key) = std::env::var(env_var)
            && !key.trim().is_empty()
        {
            return Some(key);
        }
        self.api_key.clone().filter(|key| !key.trim().is_empty())
    }

    /// Name of the environment variable the API key is read from.
    pub fn api_key_env(&self) -> &str {
        self.api_key_env.as_deref().unwrap_or(DEFAULT_API_KEY_ENV)
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/mon/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub mon: MonConfig,
}

/// Resolved configuration after merging CLI arguments, config file and defaults.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub language: Language,
    pub model: String,
    pub endpoint: String,
    /// `None` when no key is available; replies then take the fallback path.
    pub api_key: Option<String>,
    /// Where the key was expected, for diagnostics.
    pub api_key_env: String,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub language: Option<String>,
    pub model: Option<String>,
    pub endpoint: Option<String>,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// Priority: CLI option, then config file, then built-in default.
///
/// # Errors
///
/// Returns an error if the language is not one of the supported tags.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let file = &config_file.mon;

    let language = options
        .language
        .as_deref()
        .or(file.language.as_deref())
        .map(str::parse::<Language>)
        .transpose()?
        .unwrap_or_default();

    let model = options
        .model
        .as_ref()
        .or(file.model.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_MODEL.to_string());

    let endpoint = options
        .endpoint
        .as_ref()
        .or(file.endpoint.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

    Ok(ResolvedConfig {
        language,
        model,
        endpoint,
        api_key: file.get_api_key(),
        api_key_env: file.api_key_env().to_string(),
    })
}

/// Loads the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/mon/config.toml`
    /// or `~/.config/mon/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(config_file)
    }

    /// Loads the config file, treating a missing file as empty.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        match fs::metadata(&self.config_path) {
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(ConfigFile::default()),
            _ => self.load(),
        }
    }
}

/// Prints a warning when no API key could be found.
pub fn warn_if_missing_api_key(config: &ResolvedConfig) {
    if config.api_key.is_none() {
        eprintln!(
            "{} No API key found. Set the {} environment variable:\n  \
             export {}=\"your-api-key\"\n\
             Replies will fall back to an apology until a key is configured.\n",
            Style::warning("Warning:"),
            config.api_key_env,
            config.api_key_env
        );
    }
}
