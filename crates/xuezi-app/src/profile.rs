use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use xuezi_config::Config;

const CONFIG_ENV: &str = "XUEZI_CONFIG";
const DEFAULT_CONFIG_FILE: &str = "config.json";

/// A named configuration profile as stored on disk
#[derive(Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub value: Config,
}

/// Where the active configuration came from
#[derive(Debug)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
    /// The file existed but could not be used
    Fallback { path: PathBuf, error: String },
}

pub struct LoadedConfig {
    pub config: Config,
    pub source: ConfigSource,
}

/// `XUEZI_CONFIG` if set, otherwise `config.json` in the working directory
pub fn config_path() -> PathBuf {
    std::env::var(CONFIG_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// Load the profile file, falling back to defaults. Environment overrides always apply.
pub fn load_config() -> LoadedConfig {
    let path = config_path();

    if !path.exists() {
        return LoadedConfig {
            config: Config::new(),
            source: ConfigSource::Defaults,
        };
    }

    match load_profile(&path) {
        Ok(mut config) => {
            config.apply_env();
            LoadedConfig {
                config,
                source: ConfigSource::File(path),
            }
        }
        Err(e) => LoadedConfig {
            config: Config::new(),
            source: ConfigSource::Fallback {
                path,
                error: e.to_string(),
            },
        },
    }
}

/// Read a profile file. Accepts a `{ "name", "value" }` profile or a bare config object.
pub fn load_profile(path: &Path) -> anyhow::Result<Config> {
    let data = fs::read_to_string(path)?;
    let json: serde_json::Value = serde_json::from_str(&data)?;

    if json.get("value").is_some() {
        let profile: Profile = serde_json::from_value(json)?;
        tracing::debug!("Using profile {}", profile.name);
        Ok(profile.value)
    } else {
        Ok(serde_json::from_value(json)?)
    }
}

impl ConfigSource {
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => tracing::info!("Loaded config from {}", path.display()),
            ConfigSource::Defaults => tracing::info!("No config file, using defaults"),
            ConfigSource::Fallback { path, error } => {
                tracing::warn!("Ignoring config {}: {}", path.display(), error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_temp(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("xuezi-{}-{name}", std::process::id()));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_named_profile() {
        let path = write_temp(
            "profile.json",
            r#"{ "name": "tablet", "value": { "layout": { "viewport_width": 800 } } }"#,
        );

        let config = load_profile(&path).unwrap();
        assert_eq!(config.layout.viewport_width, 800);
        assert_eq!(config.strokes.padding, 40);

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_load_bare_config() {
        let path = write_temp("bare.json", r#"{ "audio": { "enabled": false } }"#);

        let config = load_profile(&path).unwrap();
        assert!(!config.audio.enabled);
        assert_eq!(config.audio.timeout_seconds, 10);

        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_invalid_profile_is_an_error() {
        let path = write_temp("broken.json", "{ not json");
        assert!(load_profile(&path).is_err());
        fs::remove_file(path).unwrap();
    }
}
