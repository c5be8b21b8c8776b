use std::path::Path;

use anyhow::Context;
use lab_config::LabConfig;
use lab_db::LabService;
use lab_resolve::{KeywordClassifier, LabResolver, RandomAllocator};

pub type Resolver = LabResolver<LabService, RandomAllocator, KeywordClassifier>;

/// Everything a command handler needs: the loaded config and a resolver over
/// the opened database.
pub struct AppContext {
    pub config: LabConfig,
    pub resolver: Resolver,
}

impl AppContext {
    pub async fn init(config: LabConfig) -> anyhow::Result<Self> {
        let path = config.database.path.as_str();
        if !config.database.is_in_memory() {
            ensure_parent_dir(Path::new(path))?;
        }

        let service = LabService::new_local(path)
            .await
            .with_context(|| format!("failed to open lab database at {path}"))?;
        let resolver = LabResolver::from_config(service, &config)?;

        Ok(Self { config, resolver })
    }
}

fn ensure_parent_dir(path: &Path) -> anyhow::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display())),
        _ => Ok(()),
    }
}
