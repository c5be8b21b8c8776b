use serde_json::json;

use lab_db::MatchMode;
use lab_resolve::Lookup;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::FindArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `labdir find`. A miss is reported in the output, not as an error.
pub async fn handle(args: &FindArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let lab = match (args.id, args.name.as_deref()) {
        (Some(id), _) => ctx.resolver.lookup().find_by_id(id).await?,
        (None, Some(name)) if args.ignore_case => {
            Lookup::new(ctx.resolver.store(), MatchMode::IgnoreCase)
                .find_by_name(name)
                .await?
        }
        (None, Some(name)) => ctx.resolver.find_lab(name).await?,
        (None, None) => anyhow::bail!("a lab name or --id is required"),
    };

    output(
        &json!({
            "found": lab.is_some(),
            "lab": lab,
        }),
        flags.format,
    )
}
