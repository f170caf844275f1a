//! Configuration file loading and resolution.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_API_KEY_ENV, MonConfig, ResolveOptions, ResolvedConfig,
    resolve_config, warn_if_missing_api_key,
};
