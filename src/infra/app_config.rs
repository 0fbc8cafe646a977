use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Database file; `LAWDESK_DB_PATH` takes precedence when set.
    pub db_path: Option<PathBuf>,
    /// Insert the default lawyers when the directory is empty.
    pub seed_defaults: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            db_path: None,
            seed_defaults: true,
        }
    }
}

impl AppConfig {
    pub fn database_path(&self) -> PathBuf {
        if let Ok(path) = std::env::var("LAWDESK_DB_PATH") {
            return PathBuf::from(path);
        }
        self.db_path
            .clone()
            .unwrap_or_else(|| app_data_dir().join("lawdesk.db"))
    }
}

pub fn load_config() -> AppConfig {
    let path = config_path();
    let Ok(contents) = std::fs::read_to_string(&path) else {
        return AppConfig::default();
    };
    parse_config(&contents)
}

fn parse_config(contents: &str) -> AppConfig {
    toml::from_str(contents).unwrap_or_else(|err| {
        log::warn!("Ignoring invalid config file: {}", err);
        AppConfig::default()
    })
}

pub fn config_path() -> PathBuf {
    if let Ok(path) = std::env::var("LAWDESK_CONFIG_PATH") {
        return PathBuf::from(path);
    }

    app_data_dir().join("config.toml")
}

pub fn app_data_dir() -> PathBuf {
    if let Ok(path) = std::env::var("LAWDESK_DATA_HOME") {
        return PathBuf::from(path);
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = home::home_dir() {
            return home
                .join("Library")
                .join("Application Support")
                .join("Lawdesk");
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("Lawdesk");
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Some(xdg) = std::env::var_os("XDG_DATA_HOME") {
            return PathBuf::from(xdg).join("lawdesk");
        }
        if let Some(home) = home::home_dir() {
            return home.join(".local").join("share").join("lawdesk");
        }
    }

    std::env::current_dir()
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".lawdesk")
}
