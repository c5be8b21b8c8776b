use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SearchArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `labdir search`.
pub async fn handle(args: &SearchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = args.limit.unwrap_or(ctx.config.general.default_limit);
    let labs = ctx.resolver.search_labs(&args.query, limit).await?;

    output(
        &json!({
            "query": args.query,
            "count": labs.len(),
            "results": labs,
        }),
        flags.format,
    )
}
