//! Implementation of the `modelpin list` command.

use super::CommandContext;
use crate::cli::ListArgs;
use modelpin::error::{ModelPinError, Result};
use modelpin::template::{PromptTemplate, TemplateSet};
use serde::Serialize;

/// JSON view of a template.
#[derive(Debug, Serialize)]
struct TemplateSummary<'a> {
    name: &'a str,
    model: &'a str,
    source: String,
    description: Option<&'a str>,
    restore: bool,
    path: String,
}

impl<'a> From<&'a PromptTemplate> for TemplateSummary<'a> {
    fn from(t: &'a PromptTemplate) -> Self {
        Self {
            name: &t.name,
            model: &t.model_spec,
            source: t.source.to_string(),
            description: t.description.as_deref(),
            restore: t.restore,
            path: t.path.display().to_string(),
        }
    }
}

/// Execute the `modelpin list` command.
pub fn cmd_list(ctx: &CommandContext, args: ListArgs) -> Result<()> {
    let ext = ctx.loaded_extension();
    let templates = sorted(ext.templates());

    if args.json {
        let summaries: Vec<TemplateSummary> = templates.iter().map(|t| (*t).into()).collect();
        let json = serde_json::to_string_pretty(&summaries).map_err(|e| {
            ModelPinError::UserError(format!("failed to serialize templates: {}", e))
        })?;
        println!("{}", json);
        return Ok(());
    }

    if templates.is_empty() {
        println!("No model-bound templates found.");
        return Ok(());
    }

    print!("{}", format_table(&templates));
    Ok(())
}

fn sorted(templates: &TemplateSet) -> Vec<&PromptTemplate> {
    let mut list: Vec<&PromptTemplate> = templates.values().collect();
    list.sort_by(|a, b| a.name.cmp(&b.name));
    list
}

/// One line per template: name, model, source, description.
fn format_table(templates: &[&PromptTemplate]) -> String {
    let name_width = templates.iter().map(|t| t.name.len()).max().unwrap_or(0);
    let model_width = templates
        .iter()
        .map(|t| t.model_spec.len())
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for t in templates {
        let line = format!(
            "{:name_width$}  {:model_width$}  {:7}  {}",
            t.name,
            t.model_spec,
            t.source.to_string(),
            t.description.as_deref().unwrap_or(""),
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
