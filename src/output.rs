//! Global output configuration.
//!
//! Chat messages and prompts go to stdout, diagnostics (see
//! [`crate::logger`]) and errors go to stderr. Colors can be disabled via
//! `--no-color` or the `NO_COLOR` environment variable.

use std::sync::OnceLock;

/// Global output configuration.
static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

/// Output configuration settings.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Disable colored output.
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            // Check NO_COLOR environment variable (https://no-color.org/)
            no_color: std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()),
        }
    }
}

impl OutputConfig {
    /// Builds the configuration from the `--no-color` flag and the environment.
    pub fn from_flags(no_color: bool) -> Self {
        let default = Self::default();
        Self {
            no_color: no_color || default.no_color,
        }
    }
}

/// Initialize the global output configuration.
///
/// This should be called once at startup with the CLI flags.
/// If called multiple times, subsequent calls are ignored.
pub fn init(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

/// Get the current output configuration.
pub fn config() -> &'static OutputConfig {
    OUTPUT_CONFIG.get_or_init(OutputConfig::default)
}

/// Check if colors are disabled.
pub fn is_no_color() -> bool {
    config().no_color
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_forces_no_color() {
        assert!(OutputConfig::from_flags(true).no_color);
    }

    #[test]
    fn test_flag_off_follows_environment() {
        let expected = OutputConfig::default().no_color;
        assert_eq!(OutputConfig::from_flags(false).no_color, expected);
    }
}
