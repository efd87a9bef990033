use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// checkmerge configuration (loaded from .checkmerge.toml)
///
/// CLI flags always take precedence over config values.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckmergeConfig {
    #[serde(default)]
    pub merge: MergeConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MergeConfig {
    /// Base directory for relativizing absolute file paths
    #[serde(default)]
    pub base_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Default output path (stdout when unset)
    #[serde(default)]
    pub out: Option<PathBuf>,
}

impl CheckmergeConfig {
    /// Try to load .checkmerge.toml from the given directory or its parents.
    /// A missing or broken config is non-fatal.
    pub fn load(start: &Path) -> Option<Self> {
        let config_path = find_config_file(start)?;
        debug!("Found config: {}", config_path.display());

        match std::fs::read_to_string(&config_path) {
            Ok(content) => match toml::from_str::<CheckmergeConfig>(&content) {
                Ok(config) => {
                    debug!("Loaded config from {}", config_path.display());
                    Some(config)
                }
                Err(e) => {
                    warn!("Failed to parse {}: {}", config_path.display(), e);
                    None
                }
            },
            Err(e) => {
                debug!("Could not read {}: {}", config_path.display(), e);
                None
            }
        }
    }
}

/// Walk up from the start directory to find .checkmerge.toml
fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let config = current.join(".checkmerge.toml");
        if config.exists() {
            return Some(config);
        }
        if !current.pop() {
            return None;
        }
    }
}
