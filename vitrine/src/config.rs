//! Startup configuration read once before the window opens.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::navigation::Route;
use crate::shared::ui::tokens::panel;

/// Errors emitted while reading or validating the config file.
#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    /// Filesystem operation failed.
    #[error("config IO failed: {0}")]
    Io(#[from] std::io::Error),
    /// JSON deserialization failed.
    #[error("config JSON failed: {0}")]
    Json(#[from] serde_json::Error),
    /// A field value did not pass validation.
    #[error("validation error: {message}")]
    Validation { message: String },
}

/// User-tunable shell settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct ShellConfig {
    /// Window width at and above which the desktop sidebar is shown.
    pub(crate) breakpoint: f32,
    /// Path of the page shown at startup.
    pub(crate) initial_route: String,
    pub(crate) dark_theme: bool,
    pub(crate) reduced_motion: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            breakpoint: panel::DESKTOP_BREAKPOINT,
            initial_route: String::from(Route::Overview.path()),
            dark_theme: true,
            reduced_motion: false,
        }
    }
}

impl ShellConfig {
    /// Resolve the configured start page; validated configs always parse.
    pub(crate) fn initial_route(&self) -> Route {
        Route::from_path(&self.initial_route).unwrap_or_default()
    }
}

/// Parse and validate a config payload.
pub(crate) fn parse_config(payload: &str) -> Result<ShellConfig, ConfigError> {
    let config: ShellConfig = serde_json::from_str(payload)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &ShellConfig) -> Result<(), ConfigError> {
    if !config.breakpoint.is_finite() || config.breakpoint <= 0.0 {
        return Err(ConfigError::Validation {
            message: format!(
                "breakpoint must be a positive width, got {}",
                config.breakpoint
            ),
        });
    }

    if Route::from_path(&config.initial_route).is_none() {
        return Err(ConfigError::Validation {
            message: format!("unknown initial route `{}`", config.initial_route),
        });
    }

    Ok(())
}

/// Load the config file, returning defaults when it does not exist.
pub(crate) fn load_config() -> Result<ShellConfig, ConfigError> {
    load_config_from_path(&config_path())
}

fn load_config_from_path(path: &Path) -> Result<ShellConfig, ConfigError> {
    match fs::read_to_string(path) {
        Ok(payload) => parse_config(&payload),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            Ok(ShellConfig::default())
        },
        Err(err) => Err(err.into()),
    }
}

/// Load config for startup, logging and falling back to defaults on error.
pub(crate) fn load_initial_config() -> ShellConfig {
    match load_config() {
        Ok(config) => config,
        Err(err) => {
            log::warn!("config load failed, using defaults: {err}");
            ShellConfig::default()
        },
    }
}

fn config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        return Path::new(&home)
            .join(".config")
            .join("vitrine")
            .join("config.json");
    }

    std::env::temp_dir().join("vitrine").join("config.json")
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::time::{SystemTime, UNIX_EPOCH};

    use super::{ConfigError, ShellConfig, load_config_from_path, parse_config};
    use crate::navigation::Route;

    #[test]
    fn given_empty_object_when_parsed_then_defaults_are_used() {
        let config = parse_config("{}").expect("empty config should parse");

        assert_eq!(config, ShellConfig::default());
        assert_eq!(config.breakpoint, 1024.0);
        assert_eq!(config.initial_route(), Route::Overview);
    }

    #[test]
    fn given_partial_config_when_parsed_then_missing_fields_default() {
        let config = parse_config(
            r#"{ "initial_route": "/motion", "reduced_motion": true }"#,
        )
        .expect("partial config should parse");

        assert_eq!(config.initial_route(), Route::Motion);
        assert!(config.reduced_motion);
        assert!(config.dark_theme);
    }

    #[test]
    fn given_unknown_field_when_parsed_then_json_error_is_returned() {
        let result = parse_config(r#"{ "sidebar_width": 300 }"#);
        assert!(matches!(result, Err(ConfigError::Json(_))));
    }

    #[test]
    fn given_malformed_json_when_parsed_then_message_carries_the_cause() {
        let err = parse_config(r#"{ "breakpoint": "wide" }"#)
            .expect_err("string breakpoint should not parse");

        let message = err.to_string();
        assert!(message.starts_with("config JSON failed: "));
        assert!(message.contains("line 1"), "{message}");
    }

    #[test]
    fn given_non_positive_breakpoint_when_parsed_then_validation_fails() {
        let result = parse_config(r#"{ "breakpoint": 0 }"#);
        assert!(matches!(result, Err(ConfigError::Validation { .. })));
    }

    #[test]
    fn given_unknown_route_when_parsed_then_validation_fails() {
        let result = parse_config(r#"{ "initial_route": "/settings" }"#);
        match result {
            Err(ConfigError::Validation { message }) => {
                assert!(message.contains("/settings"));
            },
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn given_missing_file_when_loaded_then_defaults_are_returned() {
        let root = test_temp_dir("missing");
        let config = load_config_from_path(&root.join("config.json"))
            .expect("missing config should not fail");

        assert_eq!(config, ShellConfig::default());

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    #[test]
    fn given_written_file_when_loaded_then_values_are_read() {
        let root = test_temp_dir("written");
        let path = root.join("config.json");
        fs::write(&path, r#"{ "breakpoint": 900, "dark_theme": false }"#)
            .expect("config payload should be written");

        let config =
            load_config_from_path(&path).expect("config should load");

        assert_eq!(config.breakpoint, 900.0);
        assert!(!config.dark_theme);

        fs::remove_dir_all(&root)
            .expect("temporary directory should be removed");
    }

    fn test_temp_dir(test_name: &str) -> std::path::PathBuf {
        let stamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "vitrine-config-{test_name}-{stamp}-{}",
            std::process::id()
        ));

        fs::create_dir_all(&dir)
            .expect("temporary directory should be created");
        dir
    }
}
