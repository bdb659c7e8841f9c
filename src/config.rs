use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::format::ArrayFormat;
use crate::keybindings::KeybindingsConfig;
use crate::utils::paths::get_config_path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Format selected when the TUI starts.
    #[serde(default)]
    pub default_format: ArrayFormat,

    #[serde(default)]
    pub keybindings: KeybindingsConfig,
}

fn default_theme() -> String {
    "default".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            default_format: ArrayFormat::default(),
            keybindings: KeybindingsConfig::default(),
        }
    }
}

impl Config {
    /// Load `~/.linefmt/config.toml`, falling back to defaults when the file
    /// does not exist.
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;

        config.keybindings = config.keybindings.merge_with_defaults();

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }
}
