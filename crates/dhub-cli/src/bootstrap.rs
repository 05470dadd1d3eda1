use anyhow::Context;
use dhub_config::DhubConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration, honoring `--config` and `.env`.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<DhubConfig> {
    let config = DhubConfig::load_with_dotenv_from(flags.config.as_deref())
        .context("failed to load dhub configuration")?;

    tracing::debug!(
        environments = config.environments.len(),
        default_environment = %config.general.default_environment,
        "configuration loaded"
    );
    Ok(config)
}
