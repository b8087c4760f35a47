//! Runtime configuration file loader.
//!
//! The format is chosen by file extension:
//! - `.json`: JSON
//! - `.toml`: TOML
//! - `.yaml` / `.yml`: YAML

use crate::config::error::{ConfigError, ConfigResult};
use ar_protocol::RuntimeConfig;
use std::path::Path;
use tracing::debug;

/// Supported configuration file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
    Yaml,
}

impl ConfigFormat {
    /// Determine the format from a file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Loads a runtime configuration file.
///
/// # Arguments
///
/// * `path` - Path to a `.json`, `.toml`, `.yaml` or `.yml` file
///
/// # Returns
///
/// The parsed `RuntimeConfig`. Fields absent from the file take their
/// defaults.
///
/// # Errors
///
/// Returns `ConfigError` if:
/// - The extension is not a supported format
/// - The file cannot be read (including when it does not exist)
/// - The content is not valid for its format
/// - An agent entry has an empty id
///
/// # Example
///
/// ```rust,no_run
/// use ar_core::config::load_config;
/// use std::path::Path;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = load_config(Path::new("agent_runtime.json")).await?;
/// println!("Declared {} agents", config.agents.len());
/// # Ok(())
/// # }
/// ```
pub async fn load_config(path: &Path) -> ConfigResult<RuntimeConfig> {
    let format = ConfigFormat::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;

    let config = parse_config_str(&content, format, path)?;
    debug!(path = %path.display(), agents = config.agents.len(), "Loaded runtime configuration");
    Ok(config)
}

/// Parses configuration text in the given format.
///
/// `path` is only used to label errors.
pub fn parse_config_str(
    content: &str,
    format: ConfigFormat,
    path: &Path,
) -> ConfigResult<RuntimeConfig> {
    let config: RuntimeConfig = match format {
        ConfigFormat::Json => {
            serde_json::from_str(content).map_err(|source| ConfigError::JsonParse {
                path: path.to_path_buf(),
                source,
            })?
        }
        ConfigFormat::Toml => toml::from_str(content).map_err(|source| ConfigError::TomlParse {
            path: path.to_path_buf(),
            source,
        })?,
        ConfigFormat::Yaml => {
            serde_yaml::from_str(content).map_err(|source| ConfigError::YamlParse {
                path: path.to_path_buf(),
                source,
            })?
        }
    };

    if let Some(index) = config.agents.iter().position(|agent| agent.id.is_empty()) {
        return Err(ConfigError::InvalidConfig {
            path: path.to_path_buf(),
            reason: format!("agent #{} has an empty id", index + 1),
        });
    }

    Ok(config)
}
