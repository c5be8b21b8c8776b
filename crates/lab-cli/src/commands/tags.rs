use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `labdir tags`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let tags = ctx.resolver.store().list_tags().await?;
    output(&tags, flags.format)
}
