//! Configuration loading
//!
//! Optional TOML file supplying defaults for the interactive wizard and
//! for omitted `calc` flags. A project-local `mazer.toml` wins over the
//! user config; `MAZER_*` environment variables win over both.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{MazerError, MazerResult};
use crate::models::{Sweetness, YeastMode, MAX_ABV, MIN_ABV};
use crate::units::UnitSystem;

/// Non-fatal configuration warning surfaced to CLI users
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Defaults offered by the wizard and used for omitted flags
    #[serde(default)]
    pub defaults: Defaults,
}

/// Default inputs for a calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Unit system: "us" or "metric"
    #[serde(default)]
    pub units: UnitSystem,
    /// Target ABV percent
    #[serde(default = "default_abv")]
    pub abv: u8,
    /// Sweetness level, kebab-case ("semi-sweet")
    #[serde(default)]
    pub sweetness: Sweetness,
    /// Yeast profile: "standard" or "turbo"
    #[serde(default)]
    pub yeast: YeastMode,
}

fn default_abv() -> u8 {
    14
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            units: UnitSystem::default(),
            abv: default_abv(),
            sweetness: Sweetness::default(),
            yeast: YeastMode::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> MazerResult<Config> {
        let (config, _) = Self::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (unknown keys)
    pub fn load_with_warnings(path: &Path) -> MazerResult<(Config, Vec<ConfigWarning>)> {
        let content = fs::read_to_string(path)?;

        let mut unknown_paths: Vec<String> = Vec::new();
        let deserializer = toml::de::Deserializer::new(&content);

        let config: Config = serde_ignored::deserialize(deserializer, |p| {
            unknown_paths.push(p.to_string());
        })
        .map_err(|e| MazerError::InvalidConfig {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let warnings = unknown_paths
            .into_iter()
            .map(|key| ConfigWarning {
                key,
                file: path.to_path_buf(),
            })
            .collect();

        Ok((config, warnings))
    }

    /// Load from project config, user config, or defaults
    ///
    /// Unreadable files fall through to the next source; warnings from the
    /// file that won are returned for the shell to surface.
    pub fn load_or_default(project_root: Option<&Path>) -> (Config, Vec<ConfigWarning>) {
        if let Some(root) = project_root {
            let project_config = root.join("mazer.toml");
            if project_config.exists() {
                if let Ok((config, warnings)) = Self::load_with_warnings(&project_config) {
                    return (with_env_overrides(config), warnings);
                }
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("mazer/config.toml");
            if user_config.exists() {
                if let Ok((config, warnings)) = Self::load_with_warnings(&user_config) {
                    return (with_env_overrides(config), warnings);
                }
            }
        }

        (with_env_overrides(Config::default()), Vec::new())
    }
}

/// Apply environment variable overrides (MAZER_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    if let Ok(units) = std::env::var("MAZER_UNITS") {
        if let Ok(parsed) = units.parse::<UnitSystem>() {
            config.defaults.units = parsed;
        }
    }

    if let Ok(abv) = std::env::var("MAZER_ABV") {
        if let Ok(parsed) = abv.trim().parse::<u8>() {
            if (MIN_ABV..=MAX_ABV).contains(&parsed) {
                config.defaults.abv = parsed;
            }
        }
    }

    if let Ok(sweetness) = std::env::var("MAZER_SWEETNESS") {
        if let Ok(parsed) = sweetness.parse::<Sweetness>() {
            config.defaults.sweetness = parsed;
        }
    }

    config
}
