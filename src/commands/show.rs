//! Implementation of the `modelpin show` command.
//!
//! Displays the metadata and body of one loaded template.

use super::{CommandContext, unknown_template};
use crate::cli::ShowArgs;
use modelpin::error::Result;
use modelpin::template::PromptTemplate;
use std::fmt::Write;

const RULE: &str =
    "================================================================================";
const DIVIDER: &str =
    "--------------------------------------------------------------------------------";

/// Execute the `modelpin show` command.
pub fn cmd_show(ctx: &CommandContext, args: ShowArgs) -> Result<()> {
    let ext = ctx.loaded_extension();
    let template = ext
        .template(&args.name)
        .ok_or_else(|| unknown_template(&ext, &args.name))?;

    print!("{}", format_template(template));
    Ok(())
}

fn format_template(template: &PromptTemplate) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out, "{} [{}]", template.name, template.source);
    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(out);

    let _ = writeln!(out, "Model:       {}", template.model_spec);
    let _ = writeln!(
        out,
        "Restore:     {}",
        if template.restore { "yes" } else { "no" }
    );
    if let Some(description) = &template.description {
        let _ = writeln!(out, "Description: {}", description);
    }

    if !template.extra.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Other metadata:");
        for (key, value) in &template.extra {
            let _ = writeln!(out, "  {}: {}", key, value);
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", DIVIDER);
    let _ = writeln!(out);
    if template.body.is_empty() {
        let _ = writeln!(out, "(No body content)");
    } else {
        let _ = writeln!(out, "{}", template.body);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", DIVIDER);
    let _ = writeln!(out, "Path: {}", template.path.display());

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use modelpin::template::TemplateSource;
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    fn template() -> PromptTemplate {
        let mut extra = BTreeMap::new();
        extra.insert("thinking".to_string(), "high".to_string());
        PromptTemplate {
            name: "review".to_string(),
            description: Some("Review code".to_string()),
            body: "Review $1".to_string(),
            model_spec: "anthropic/claude-x".to_string(),
            restore: false,
            source: TemplateSource::Project,
            path: PathBuf::from("/work/.modelpin/prompts/review.md"),
            extra,
        }
    }

    #[test]
    fn test_format_shows_metadata_and_body() {
        let out = format_template(&template());
        assert!(out.contains("review [project]"));
        assert!(out.contains("Model:       anthropic/claude-x"));
        assert!(out.contains("Restore:     no"));
        assert!(out.contains("Description: Review code"));
        assert!(out.contains("  thinking: high"));
        assert!(out.contains("\nReview $1\n"));
        assert!(out.ends_with("Path: /work/.modelpin/prompts/review.md\n"));
    }

    #[test]
    fn test_format_empty_body() {
        let mut t = template();
        t.body.clear();
        t.description = None;
        t.extra.clear();
        let out = format_template(&t);
        assert!(out.contains("(No body content)"));
        assert!(!out.contains("Description:"));
        assert!(!out.contains("Other metadata:"));
    }
}
