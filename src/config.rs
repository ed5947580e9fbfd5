//! Configuration management for the opinionate CLI
//!
//! Stores settings in ~/.config/opinionate/config.json

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Backend base URL; `OPINIONATE_URL` overrides it at runtime.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout for the HTTP gateway.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("opinionate"))
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.json"))
    }

    /// Load config from disk, or return defaults
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    fn load_from(path: &Path) -> Self {
        if let Ok(content) = fs::read_to_string(path) {
            match serde_json::from_str(&content) {
                Ok(config) => return config,
                Err(err) => {
                    eprintln!(
                        "  Warning: Config file was corrupted ({}). Defaults were loaded.",
                        err
                    );
                }
            }
        }
        Self::default()
    }

    /// Save config to disk
    pub fn save(&self) -> Result<(), String> {
        let dir =
            Self::config_dir().ok_or_else(|| "Could not determine config directory".to_string())?;
        fs::create_dir_all(&dir)
            .map_err(|e| format!("Failed to create config directory: {}", e))?;

        let path = dir.join("config.json");
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;
        fs::write(&path, content).map_err(|e| format!("Failed to write config: {}", e))
    }

    /// The backend URL to use, honoring the environment override.
    pub fn backend_url(&self) -> String {
        match std::env::var("OPINIONATE_URL") {
            Ok(url) if !url.is_empty() => url,
            _ => self.base_url.clone(),
        }
    }

    /// Get the config file location for display
    pub fn config_location() -> String {
        Self::config_path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "~/.config/opinionate/config.json".to_string())
    }
}
