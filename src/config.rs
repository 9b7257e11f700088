// Configuration module for cliprelay
// Handles loading and parsing configuration from ~/.config/cliprelay/config.toml

mod types;

pub use types::{ClipboardBackend, Config, Osc52Mode};

use std::fs;
use std::path::PathBuf;

/// Result of loading configuration
pub struct ConfigResult {
    pub config: Config,
    pub warning: Option<String>,
}

/// Loads configuration from ~/.config/cliprelay/config.toml
/// Returns default configuration if the file doesn't exist or on parse errors
pub fn load_config() -> ConfigResult {
    let config_path = get_config_path();

    #[cfg(debug_assertions)]
    log::debug!("Loading config from {:?}", config_path);

    // If the file doesn't exist, return defaults silently
    if !config_path.exists() {
        return ConfigResult {
            config: Config::default(),
            warning: None,
        };
    }

    let contents = match fs::read_to_string(&config_path) {
        Ok(contents) => contents,
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to read config file {:?}: {}", config_path, e);
            return ConfigResult {
                config: Config::default(),
                warning: Some(format!("Failed to read config: {}", e)),
            };
        }
    };

    match toml::from_str::<Config>(&contents) {
        Ok(config) => {
            #[cfg(debug_assertions)]
            log::debug!("Config parsed: backend {:?}", config.clipboard.backend);
            ConfigResult {
                config,
                warning: None,
            }
        }
        Err(e) => {
            #[cfg(debug_assertions)]
            log::error!("Failed to parse config file {:?}: {}", config_path, e);
            ConfigResult {
                config: Config::default(),
                warning: Some(format!("Invalid config: {}", e)),
            }
        }
    }
}

/// Returns the path to the configuration file
///
/// Always uses ~/.config/cliprelay/config.toml on all platforms for
/// consistency.
fn get_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config")
        .join("cliprelay")
        .join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_path_is_stable() {
        let first = get_config_path();
        let second = get_config_path();
        assert_eq!(first, second);

        let path_str = first.to_string_lossy();
        assert!(
            path_str.ends_with("cliprelay/config.toml")
                || path_str.ends_with("cliprelay\\config.toml"),
            "Config path should end with cliprelay/config.toml, got: {}",
            path_str
        );
    }

    #[test]
    fn test_load_config_never_panics() {
        // Whatever is (or isn't) on disk, loading must produce a config
        let result = load_config();
        let _ = result.config.clipboard.backend;
    }
}
