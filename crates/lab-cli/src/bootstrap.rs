use anyhow::Context;
use lab_config::LabConfig;

use crate::cli::GlobalFlags;

/// Load layered configuration (`.env`, TOML files, `LABDIR_*`), then apply
/// command-line overrides.
pub fn load_config(flags: &GlobalFlags) -> anyhow::Result<LabConfig> {
    let mut config = LabConfig::load_with_dotenv().context("failed to load labdir configuration")?;

    if let Some(db) = &flags.db {
        config.database.path.clone_from(db);
    }
    config.validate()?;

    tracing::debug!(database = %config.database.path, "configuration loaded");
    Ok(config)
}
