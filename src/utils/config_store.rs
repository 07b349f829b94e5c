//! ConfigStore - Local Configuration Storage

use std::fs;
use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Serialize, de::DeserializeOwned};

use crate::error::{Error, Result};

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/covid-tracker/` or `$XDG_CONFIG_HOME/covid-tracker/`
/// - **macOS**: `~/Library/Application Support/com.covidtracker.covid-tracker/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\covidtracker\covid-tracker\config\`
pub fn config_dir() -> Result<PathBuf> {
    let Some(project_dirs) = ProjectDirs::from("com", "covidtracker", "covid-tracker") else {
        return Err(Error::Invalid {
            message: "Could not determine project directories".to_string(),
        });
    };

    let dir = project_dirs.config_dir();
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }

    Ok(dir.to_path_buf())
}

/// Load a TOML config file, falling back to defaults when absent
pub fn load_config<T: DeserializeOwned + Default>(filename: &str) -> Result<T> {
    let path = config_dir()?.join(filename);

    if !path.exists() {
        return Ok(T::default());
    }

    let content = fs::read_to_string(&path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Save a TOML config file
pub fn save_config<T: Serialize>(filename: &str, config: &T) -> Result<()> {
    let path = config_dir()?.join(filename);
    let content = toml::to_string_pretty(config)?;
    fs::write(&path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::AppConfig;

    #[test]
    fn test_round_trip() {
        let config = AppConfig::default();
        save_config("test-config.toml", &config).expect("save");
        let loaded: AppConfig = load_config("test-config.toml").expect("load");
        assert_eq!(loaded.api.base_url, config.api.base_url);

        let path = config_dir().expect("dir").join("test-config.toml");
        let _ = fs::remove_file(path);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let loaded: AppConfig = load_config("does-not-exist.toml").expect("load");
        assert_eq!(loaded.api.base_url, AppConfig::default().api.base_url);
    }
}
