use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub board: BoardSettings,
    #[serde(default)]
    pub ui: UiSettings,
}

#[derive(Debug, Default, Deserialize)]
pub struct BoardSettings {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub update_rate: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UiSettings {
    pub fps: Option<u32>,
}

impl Settings {
    pub fn load() -> Self {
        let path = Self::config_path();
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("termlife")
            .join("config.toml")
    }
}
