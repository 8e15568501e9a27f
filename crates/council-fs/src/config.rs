//! Format-agnostic configuration loading

use crate::{Error, NormalizedPath, Result, io};
use serde::de::DeserializeOwned;

/// Format-agnostic configuration store.
///
/// Detects the format from the file extension (`toml`, `json`, `yaml`/`yml`).
#[derive(Debug, Default, Clone, Copy)]
pub struct ConfigStore;

impl ConfigStore {
    pub fn new() -> Self {
        Self
    }

    /// Load configuration, returning `T::default()` when the file is absent.
    pub fn load_or_default<T: DeserializeOwned + Default>(&self, path: &NormalizedPath) -> Result<T> {
        match io::read_text_if_exists(path)? {
            Some(content) => Self::parse(path, &content),
            None => {
                tracing::debug!("No config at {}, using defaults", path);
                Ok(T::default())
            }
        }
    }

    fn parse<T: DeserializeOwned>(path: &NormalizedPath, content: &str) -> Result<T> {
        let extension = path.extension().unwrap_or("").to_lowercase();
        let parse_error = |format: &str, message: String| Error::ConfigParse {
            path: path.to_native(),
            format: format.into(),
            message,
        };

        match extension.as_str() {
            "toml" => toml::from_str(content).map_err(|e| parse_error("TOML", e.to_string())),
            "json" => serde_json::from_str(content).map_err(|e| parse_error("JSON", e.to_string())),
            "yaml" | "yml" => {
                serde_yaml::from_str(content).map_err(|e| parse_error("YAML", e.to_string()))
            }
            _ => Err(Error::UnsupportedFormat { extension }),
        }
    }
}
