use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::system::history::DEFAULT_CAPACITY;

pub const MIN_REFRESH_RATE_MS: u64 = 100;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub refresh_rate_ms: u64,
    pub history_length: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            refresh_rate_ms: 2000,
            history_length: DEFAULT_CAPACITY,
        }
    }
}

impl Config {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.general.refresh_rate_ms.max(MIN_REFRESH_RATE_MS))
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("telemon").join("config.toml"))
}

pub fn load_config() -> Config {
    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => Config::default(),
    }
}

pub fn load_config_from_path(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str(&contents) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "invalid config, using defaults");
                Config::default()
            }
        },
        Err(_) => Config::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let config = Config::default();
        assert_eq!(config.general.refresh_rate_ms, 2000);
        assert_eq!(config.general.history_length, 30);
        assert_eq!(config.refresh_interval(), Duration::from_secs(2));
    }

    #[test]
    fn parse_partial_toml() {
        let toml_str = r#"
[general]
refresh_rate_ms = 500
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.refresh_rate_ms, 500);
        assert_eq!(config.general.history_length, 30);
    }

    #[test]
    fn parse_full_toml() {
        let toml_str = r#"
[general]
refresh_rate_ms = 1000
history_length = 120
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.refresh_rate_ms, 1000);
        assert_eq!(config.general.history_length, 120);
    }

    #[test]
    fn zero_refresh_rate_is_clamped() {
        let mut config = Config::default();
        config.general.refresh_rate_ms = 0;
        assert_eq!(
            config.refresh_interval(),
            Duration::from_millis(MIN_REFRESH_RATE_MS)
        );
    }

    #[test]
    fn missing_file_returns_default() {
        let config = load_config_from_path(Path::new("/nonexistent/path/config.toml"));
        assert_eq!(config.general.refresh_rate_ms, 2000);
    }

    #[test]
    fn invalid_toml_returns_default() {
        let temp = std::env::temp_dir().join("telemon_test_invalid.toml");
        std::fs::write(&temp, "this is not valid toml {{{{").unwrap();
        let config = load_config_from_path(&temp);
        assert_eq!(config.general.history_length, 30);
        let _ = std::fs::remove_file(&temp);
    }
}
