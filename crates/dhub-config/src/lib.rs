//! # dhub-config
//!
//! Layered configuration loading for dhub using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DHUB_*` prefix, `__` as separator)
//! 2. An explicit file passed to [`DhubConfig::load_from`] (the CLI's `--config`)
//! 3. Project-level `.dhub/config.toml`
//! 4. User-level `~/.config/dhub/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `DHUB_GENERAL__MAX_DEPTH` -> `general.max_depth` and
//! `DHUB_ENVIRONMENTS__PROD__APPLY_TO_TAGS` -> `environments.prod.apply_to_tags`.
//! Keys are lower-cased, so environment names set this way are lower-case.
//!
//! # Usage
//!
//! ```no_run
//! use dhub_config::DhubConfig;
//!
//! let config = DhubConfig::load_with_dotenv().expect("config");
//! let prod = config.environment("prod").expect("prod is configured");
//! println!("prod flags: {:?}", prod.enabled_flags());
//! ```

mod environments;
mod error;
mod general;

pub use environments::validate_environment_name;
pub use error::ConfigError;
pub use general::GeneralConfig;

use dhub_core::{MutationConfig, MutationConfigProvider};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct DhubConfig {
    #[serde(default)]
    pub general: GeneralConfig,

    /// Mutation rules keyed by environment name.
    #[serde(default)]
    pub environments: BTreeMap<String, MutationConfig>,
}

impl DhubConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Like [`Self::load`], with `extra` merged above the project file.
    ///
    /// A missing `extra` file is an error; the implicit files are optional.
    pub fn load_from(extra: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = extra {
            if !path.exists() {
                return Err(ConfigError::MissingFile {
                    path: path.to_path_buf(),
                });
            }
        }
        let config: Self = Self::figment_with(extra).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_with_dotenv_from(None)
    }

    /// [`Self::load_from`] after loading `.env` from the current directory or
    /// one of its parents. A missing `.env` is not an error.
    pub fn load_with_dotenv_from(extra: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load_from(extra)
    }

    /// Build the default figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment() -> Figment {
        Self::figment_with(None)
    }

    /// Provider chain with an optional explicit file above the project file.
    pub fn figment_with(extra: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".dhub/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Explicit file
        if let Some(path) = extra {
            figment = figment.merge(Toml::file(path));
        }

        // Layer 4: Environment variables (highest priority)
        figment.merge(Env::prefixed("DHUB_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("dhub").join("config.toml"))
    }

    /// Check environment names and general settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_environment_name("general.default_environment", &self.general.default_environment)?;
        if self.general.max_depth == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.max_depth".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        for name in self.environments.keys() {
            validate_environment_name("environments", name)?;
        }
        Ok(())
    }

    /// Mutation rules for `name`.
    pub fn environment(&self, name: &str) -> Result<&MutationConfig, ConfigError> {
        self.environments
            .get(name)
            .ok_or_else(|| ConfigError::UnknownEnvironment {
                name: name.to_string(),
                known: self.known_environments(),
            })
    }

    /// `requested` if given, otherwise `general.default_environment`.
    #[must_use]
    pub fn resolve_environment<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested.unwrap_or(self.general.default_environment.as_str())
    }

    /// Configured environment names in sorted order.
    pub fn environment_names(&self) -> impl Iterator<Item = &str> {
        self.environments.keys().map(String::as_str)
    }

    fn known_environments(&self) -> String {
        if self.environments.is_empty() {
            return "none".to_string();
        }
        self.environment_names().collect::<Vec<_>>().join(", ")
    }
}

impl MutationConfigProvider for DhubConfig {
    fn lookup(&self, environment: &str) -> Option<MutationConfig> {
        self.environments.get(environment).cloned()
    }
}
