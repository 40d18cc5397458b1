//! Implementation of the `modelpin resolve` command.

use super::CommandContext;
use crate::cli::ResolveArgs;
use modelpin::error::Result;
use modelpin::model::{ModelResolver, ResolvedModel};

/// Execute the `modelpin resolve` command.
///
/// Prints the selected `provider/id` and the rule that selected it.
pub fn cmd_resolve(ctx: &CommandContext, args: ResolveArgs) -> Result<()> {
    let catalog = ctx.catalog(args.models.as_deref())?;
    let resolver = ModelResolver::new(ctx.config.provider_priority.clone());

    let resolved = resolver.resolve(&catalog, &args.spec)?;
    println!("{}", format_resolved(&resolved));
    Ok(())
}

fn format_resolved(resolved: &ResolvedModel) -> String {
    match &resolved.model.name {
        Some(name) => format!("{} ({})\n  via {}", resolved.model, name, resolved.source),
        None => format!("{}\n  via {}", resolved.model, resolved.source),
    }
}
