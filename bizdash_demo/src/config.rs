// Copyright 2026 the Bizdash Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration loading.

use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub(crate) enum ConfigError {
    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config in {origin}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub(crate) struct Config {
    pub(crate) dashboard: DashboardConfig,
    pub(crate) output: OutputConfig,
    #[serde(default)]
    pub(crate) logging: LoggingConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub(crate) struct DashboardConfig {
    pub(crate) name: String,
    pub(crate) subtitle: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub(crate) struct OutputConfig {
    /// Directory for rendered SVG/HTML files.
    pub(crate) dir: PathBuf,
    /// File name (or path) of the JSON export.
    pub(crate) export_file: PathBuf,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub(crate) struct LoggingConfig {
    /// `EnvFilter` directives; `RUST_LOG` takes precedence.
    pub(crate) filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".into(),
        }
    }
}

/// Default configuration embedded in the binary.
const DEFAULT_CONFIG: &str = r#"
[dashboard]
name = "Business Analytics Dashboard"
subtitle = "Comprehensive data visualization and insights"

[output]
dir = "target/bizdash"
export_file = "dashboard-export.json"

[logging]
filter = "info"
"#;

const CONFIG_FILE: &str = "bizdash.toml";

fn parse(contents: &str, origin: impl Into<String>) -> Result<Config, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::Parse {
        origin: origin.into(),
        source,
    })
}

fn read(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&contents, path.display().to_string())
}

/// The embedded default configuration.
pub(crate) fn default_config() -> Result<Config, ConfigError> {
    parse(DEFAULT_CONFIG, "embedded defaults")
}

/// Loads configuration.
///
/// Search order:
/// 1. `explicit`, if given (a missing file is an error),
/// 2. `bizdash.toml` next to the executable,
/// 3. the embedded default.
///
/// Logging is not initialized yet, so the chosen source is returned for the caller to log.
pub(crate) fn load_config(explicit: Option<&Path>) -> Result<(Config, String), ConfigError> {
    if let Some(path) = explicit {
        return Ok((read(path)?, path.display().to_string()));
    }
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        let config_path = exe_dir.join(CONFIG_FILE);
        if config_path.exists() {
            return Ok((read(&config_path)?, config_path.display().to_string()));
        }
    }
    Ok((default_config()?, "embedded defaults".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_parses() {
        let config = default_config().unwrap();
        assert_eq!(config.dashboard.name, "Business Analytics Dashboard");
        assert_eq!(config.output.export_file, PathBuf::from("dashboard-export.json"));
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn logging_section_is_optional() {
        let config = parse(
            r#"
[dashboard]
name = "Ops"
subtitle = "Weekly"

[output]
dir = "out"
export_file = "ops.json"
"#,
            "test",
        )
        .unwrap();
        assert_eq!(config.logging, LoggingConfig::default());
        assert_eq!(config.output.dir, PathBuf::from("out"));
    }

    #[test]
    fn missing_explicit_file_is_a_read_error() {
        let path = std::env::temp_dir().join("bizdash-no-such-config.toml");
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }), "got {err:?}");
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let path = std::env::temp_dir().join(format!("bizdash-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "[dashboard\nname = 1").unwrap();
        let err = load_config(Some(&path)).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(matches!(err, ConfigError::Parse { .. }), "got {err:?}");
    }
}
