use serde::Deserialize;
use serde::Serialize;
use std::path::Path;

use crate::channel::plugin::DEFAULT_CHANNEL;

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub host: HostConfig,
    pub window: WindowConfig,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct HostConfig {
    pub channel: String,
    pub placeholder_class: String,
    pub poll_interval_ms: u64,
}

impl Default for HostConfig {
    fn default() -> Self {
        HostConfig {
            channel: DEFAULT_CHANNEL.to_owned(),
            placeholder_class: "STATIC".to_owned(),
            poll_interval_ms: 16,
        }
    }
}

/// Application window created by the binary
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct WindowConfig {
    pub title: String,
    pub width: i32,
    pub height: i32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "Native Preview Host".to_owned(),
            width: 1280,
            height: 800,
        }
    }
}

impl AppConfig {
    pub fn from_toml(content: &str) -> Result<AppConfig, String> {
        toml::from_str::<AppConfig>(content).map_err(|e| e.to_string())
    }

    /// Loads the config file, writing the default one if it does not exist yet
    pub fn load(path: &Path) -> Result<AppConfig, String> {
        if !path.exists() {
            if let Some(dir) = path.parent() {
                std::fs::create_dir_all(dir).map_err(|e| e.to_string())?;
            }
            let default_cfg = toml::to_string_pretty(&AppConfig::default()).map_err(|e| e.to_string())?;
            std::fs::write(path, default_cfg).map_err(|e| e.to_string())?;
        }

        let content = std::fs::read_to_string(path).map_err(|e| e.to_string())?;
        AppConfig::from_toml(&content)
    }
}
