#![allow(clippy::unwrap_used)]
//! Config priority contract tests.
//!
//! These tests verify that CLI options take priority over config file settings.
//! Priority order (highest to lowest):
//! 1. CLI arguments
//! 2. Config file defaults
//! 3. Built-in defaults

use mon_chat::config::{ConfigFile, MonConfig, ResolveOptions, resolve_config};
use mon_chat::i18n::Language;
use mon_chat::reply::{DEFAULT_ENDPOINT, DEFAULT_MODEL};

fn make_config_with_defaults() -> ConfigFile {
    ConfigFile {
        mon: MonConfig {
            language: Some("bn".to_string()),
            model: Some("config_model".to_string()),
            endpoint: Some("http://config.local".to_string()),
            api_key: Some("config_key".to_string()),
            api_key_env: Some("MON_PRIORITY_TEST_UNSET_KEY".to_string()),
        },
    }
}

#[test]
fn test_config_values_used_when_cli_not_specified() {
    let config = make_config_with_defaults();

    let resolved = resolve_config(&ResolveOptions::default(), &config).unwrap();

    assert_eq!(resolved.language, Language::Bengali);
    assert_eq!(resolved.model, "config_model");
    assert_eq!(resolved.endpoint, "http://config.local");
    assert_eq!(resolved.api_key.as_deref(), Some("config_key"));
    assert_eq!(resolved.api_key_env, "MON_PRIORITY_TEST_UNSET_KEY");
}

#[test]
fn test_cli_language_overrides_config_language() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        language: Some("en".to_string()),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.language, Language::English);
}

#[test]
fn test_cli_model_overrides_config_model() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        model: Some("cli_model".to_string()),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.model, "cli_model");
}

#[test]
fn test_cli_endpoint_overrides_config_endpoint() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        endpoint: Some("http://cli.local".to_string()),
        ..ResolveOptions::default()
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.endpoint, "http://cli.local");
}

#[test]
fn test_builtin_defaults_when_nothing_configured() {
    let resolved = resolve_config(&ResolveOptions::default(), &ConfigFile::default()).unwrap();

    assert_eq!(resolved.language, Language::English);
    assert_eq!(resolved.model, DEFAULT_MODEL);
    assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
}

#[test]
fn test_all_cli_options_override_config() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        language: Some("english".to_string()),
        model: Some("cli_model".to_string()),
        endpoint: Some("http://cli.local".to_string()),
    };

    let resolved = resolve_config(&options, &config).unwrap();

    assert_eq!(resolved.language, Language::English);
    assert_eq!(resolved.model, "cli_model");
    assert_eq!(resolved.endpoint, "http://cli.local");
}

#[test]
fn test_invalid_cli_language_returns_error() {
    let config = make_config_with_defaults();
    let options = ResolveOptions {
        language: Some("ja".to_string()),
        ..ResolveOptions::default()
    };

    assert!(resolve_config(&options, &config).is_err());
}
