use log::warn;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Optional user preferences for the host, read from `config.toml`
#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub display: DisplaySettings,
}

#[derive(Debug, Default, Deserialize)]
pub struct DisplaySettings {
    pub time_step: Option<f32>,  // Seconds per frame
    pub seed: Option<u64>,
}

impl Settings {
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Missing files give defaults; unreadable ones are logged and ignored
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(content) => Self::parse(&content).unwrap_or_else(|err| {
                warn!("ignoring malformed settings {}: {}", path.display(), err);
                Self::default()
            }),
            Err(err) => {
                warn!("could not read settings {}: {}", path.display(), err);
                Self::default()
            }
        }
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("doomfire")
            .join("config.toml")
    }
}
