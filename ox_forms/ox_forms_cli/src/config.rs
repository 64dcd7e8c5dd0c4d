use log::{debug, trace};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("file not found: {0}")]
    NotFound(PathBuf),
    #[error("error reading {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("error parsing {path}: {message}")]
    Parse { path: PathBuf, message: String },
    #[error("unsupported file format: {0}")]
    UnsupportedFormat(PathBuf),
}

fn default_log_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Deserialize)]
pub struct CliConfig {
    /// log4rs configuration file; a stderr appender is used when absent.
    #[serde(default)]
    pub log4rs_config: Option<String>,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Form-name scope for tags in templates that do not pass `form=`.
    #[serde(default)]
    pub form_name: Option<String>,
    /// Glob of extra templates made available to `{% include %}` / `{% extends %}`.
    #[serde(default)]
    pub templates: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log4rs_config: None,
            log_level: default_log_level(),
            form_name: None,
            templates: None,
        }
    }
}

/// Deserialize a YAML or JSON file, picking the format from its extension.
pub fn load_from_path<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    debug!("Loading {:?}", path);

    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    trace!("Content read from {:?}:\n{}", path, contents);

    let parse_error = |message: String| ConfigError::Parse {
        path: path.to_path_buf(),
        message,
    };

    match path.extension().and_then(|s| s.to_str()) {
        Some("yaml") | Some("yml") => {
            serde_yaml::from_str(&contents).map_err(|e| parse_error(e.to_string()))
        }
        Some("json") => serde_json::from_str(&contents).map_err(|e| parse_error(e.to_string())),
        _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
    }
}
