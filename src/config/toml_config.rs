use crate::config::{SourceSettings, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECONDS};
use crate::utils::error::{PickerError, Result};
use serde::Deserialize;
use std::path::Path;

/// `picker.toml`; every key is optional.
///
/// ```toml
/// [source]
/// endpoint = "http://localhost:8000/paletten"
/// timeout_seconds = 10
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceConfig {
    pub endpoint: Option<String>,
    pub timeout_seconds: Option<u64>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PickerError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| PickerError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn into_settings(self) -> SourceSettings {
        SourceSettings {
            endpoint: self
                .source
                .endpoint
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            timeout_seconds: self
                .source
                .timeout_seconds
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
        }
    }
}
