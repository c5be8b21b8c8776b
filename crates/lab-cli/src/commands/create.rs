use crate::cli::GlobalFlags;
use crate::cli::root_commands::CreateArgs;
use crate::commands::shared::{fields_from_args, read_fields_file};
use crate::context::AppContext;
use crate::output::output;

/// Handle `labdir create`.
pub async fn handle(args: CreateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let fields = match &args.json {
        Some(path) => read_fields_file(path)?,
        None => fields_from_args(args.name, args.details),
    };

    let lab = ctx.resolver.create_lab(fields).await?;
    output(&lab, flags.format)
}
