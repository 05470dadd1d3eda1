//! General application configuration.

use serde::{Deserialize, Serialize};

/// Environment used when a command does not name one.
fn default_environment() -> String {
    "dev".to_string()
}

/// Nesting depth past which payload rewriting stops descending.
const fn default_max_depth() -> usize {
    64
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Environment assumed by `hash` and friends when `--env` is omitted.
    #[serde(default = "default_environment")]
    pub default_environment: String,

    /// Depth guard for association rewriting.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_environment: default_environment(),
            max_depth: default_max_depth(),
        }
    }
}
