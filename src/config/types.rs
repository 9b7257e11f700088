// Configuration type definitions

use clap::ValueEnum;
use serde::Deserialize;

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ValueEnum, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    /// Probe the environment and pick a mechanism
    #[default]
    Auto,
    /// Native system clipboard via arboard
    System,
    /// Terminal escape sequence only
    Osc52,
}

/// When to layer the OSC 52 escape sequence on top of a copy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Osc52Mode {
    /// Only when the session looks remote (SSH)
    #[default]
    Auto,
    Always,
    Never,
}

/// Clipboard configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        ClipboardConfig {
            backend: ClipboardBackend::Auto,
        }
    }
}

/// OSC 52 configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct Osc52Config {
    #[serde(default)]
    pub mode: Osc52Mode,
}

impl Default for Osc52Config {
    fn default() -> Self {
        Osc52Config {
            mode: Osc52Mode::Auto,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub clipboard: ClipboardConfig,
    #[serde(default)]
    pub osc52: Osc52Config,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // Any string that is not a known backend name must fail to parse, so
    // load_config falls back to the defaults.
    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_invalid_backend_rejected(
            invalid_backend in "[a-z]{3,10}".prop_filter(
                "not a valid backend name",
                |s| !["auto", "system", "osc52"].contains(&s.as_str())
            )
        ) {
            let toml_content = format!("[clipboard]\nbackend = \"{}\"\n", invalid_backend);
            let config: Result<Config, _> = toml::from_str(&toml_content);
            prop_assert!(config.is_err(), "Invalid backend should fail to parse");
        }
    }

    #[test]
    fn test_config_default_values() {
        let config = Config::default();
        assert_eq!(config.clipboard.backend, ClipboardBackend::Auto);
        assert_eq!(config.osc52.mode, Osc52Mode::Auto);
    }

    #[test]
    fn test_parse_backend_values() {
        for (value, expected) in [
            ("auto", ClipboardBackend::Auto),
            ("system", ClipboardBackend::System),
            ("osc52", ClipboardBackend::Osc52),
        ] {
            let toml_content = format!("[clipboard]\nbackend = \"{}\"\n", value);
            let config: Config = toml::from_str(&toml_content).unwrap();
            assert_eq!(config.clipboard.backend, expected);
        }
    }

    #[test]
    fn test_parse_osc52_modes() {
        for (value, expected) in [
            ("auto", Osc52Mode::Auto),
            ("always", Osc52Mode::Always),
            ("never", Osc52Mode::Never),
        ] {
            let toml_content = format!("[osc52]\nmode = \"{}\"\n", value);
            let config: Config = toml::from_str(&toml_content).unwrap();
            assert_eq!(config.osc52.mode, expected);
        }
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.clipboard.backend, ClipboardBackend::Auto);
        assert_eq!(config.osc52.mode, Osc52Mode::Auto);
    }

    #[test]
    fn test_malformed_toml_fails_to_parse() {
        let result: Result<Config, _> = toml::from_str("[clipboard\nbackend = \"auto\"");
        assert!(result.is_err());
    }
}
