use serde_json::json;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ResolveArgs;
use crate::commands::shared::fields_from_args;
use crate::context::AppContext;
use crate::output::output;

/// Handle `labdir resolve`: lookup first, create on miss.
pub async fn handle(args: ResolveArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let fields = fields_from_args(Some(args.name), args.details);
    let resolution = ctx.resolver.resolve(fields).await?;

    output(
        &json!({
            "created": resolution.created(),
            "lab": resolution.lab(),
        }),
        flags.format,
    )
}
