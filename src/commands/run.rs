//! Implementation of the `modelpin expand` and `modelpin run` commands.
//!
//! `run` drives the extension the way an agent host would: load, invoke the
//! template command, then signal response completion so the previous model is
//! restored. The console host prints the sent message to stdout and
//! notifications to stderr.

use super::{CommandContext, unknown_template};
use crate::cli::{ExpandArgs, RunArgs};
use modelpin::catalog::{ConsoleHost, ModelCatalog};
use modelpin::error::{ModelPinError, Result};
use modelpin::expand;
use modelpin::extension::{Invocation, ModelPinExtension};
use modelpin::host::{AgentHost, ModelRegistry};
use modelpin::model::Model;
use modelpin::switch::{RestoreOutcome, SwitchOutcome};

/// Execute the `modelpin expand` command.
pub fn cmd_expand(ctx: &CommandContext, args: ExpandArgs) -> Result<()> {
    let ext = ctx.loaded_extension();
    let template = ext
        .template(&args.name)
        .ok_or_else(|| unknown_template(&ext, &args.name))?;

    println!(
        "{}",
        expand::render(&template.body, args.args.as_deref().unwrap_or(""))
    );
    Ok(())
}

/// Execute the `modelpin run` command.
pub fn cmd_run(ctx: &CommandContext, args: RunArgs) -> Result<()> {
    let catalog = ctx.catalog(args.models.as_deref())?;
    let mut ext = ctx.loaded_extension();
    if ext.template(&args.name).is_none() {
        return Err(unknown_template(&ext, &args.name));
    }

    let current = starting_model(&ext, &catalog, args.current.as_deref())?;
    let mut host = ConsoleHost::stdio(catalog, current);

    let (invocation, restore) = run_template(
        &mut ext,
        &mut host,
        &args.name,
        args.args.as_deref().unwrap_or(""),
    )?;

    eprintln!("{}", summarize(&invocation, &restore));
    Ok(())
}

/// The model active before the run.
///
/// An explicit spec is resolved like a template's model and must have
/// credentials, since the restore reactivates it. Otherwise the first
/// credentialed catalog model is used.
fn starting_model(
    ext: &ModelPinExtension,
    catalog: &ModelCatalog,
    spec: Option<&str>,
) -> Result<Option<Model>> {
    let Some(spec) = spec else {
        return Ok(catalog.available().into_iter().next());
    };

    let model = ext.resolver().resolve(catalog, spec)?.model;
    if !catalog.available().iter().any(|m| m.same_as(&model)) {
        return Err(ModelPinError::UserError(format!(
            "current model '{}' has no credentials configured in the model catalog",
            model
        )));
    }
    Ok(Some(model))
}

/// Invoke a template and complete the response.
fn run_template<H>(
    ext: &mut ModelPinExtension,
    host: &mut H,
    name: &str,
    args: &str,
) -> Result<(Invocation, RestoreOutcome)>
where
    H: AgentHost + ?Sized,
{
    let invocation = ext.invoke(host, name, args)?;
    let restore = ext.on_response_complete(host);
    Ok((invocation, restore))
}

fn summarize(invocation: &Invocation, restore: &RestoreOutcome) -> String {
    let switched = match &invocation.switch {
        SwitchOutcome::AlreadyActive => format!("{} already active", invocation.model),
        SwitchOutcome::Switched { from: Some(from), .. } => {
            format!("switched {} -> {}", from, invocation.model)
        }
        SwitchOutcome::Switched { from: None, .. } => {
            format!("switched to {}", invocation.model)
        }
    };

    let restored = match restore {
        RestoreOutcome::NothingPending => "no restore".to_string(),
        RestoreOutcome::Restored(model) => format!("restored {}", model),
        RestoreOutcome::Failed(model) => format!("restore of {} failed", model),
    };

    format!("{}: {}; {}", invocation.template, switched, restored)
}
