//! Tests for template construction, discovery, and merging.

use super::*;
use crate::test_support::{template_content, write_template};
use std::path::Path;
use tempfile::TempDir;

struct Layout {
    _root: TempDir,
    global: PathBuf,
    cwd: PathBuf,
}

impl Layout {
    fn new() -> Self {
        let root = TempDir::new().unwrap();
        let global = root.path().join("agent").join("prompts");
        let cwd = root.path().join("project");
        std::fs::create_dir_all(&cwd).unwrap();
        Self {
            _root: root,
            global,
            cwd,
        }
    }

    fn project(&self) -> PathBuf {
        self.cwd.join(".modelpin").join("prompts")
    }

    fn store(&self) -> TemplateStore {
        TemplateStore::new(PromptDirs::new(
            Some(self.global.clone()),
            ".modelpin/prompts",
        ))
    }

    fn load(&self) -> TemplateSet {
        self.store().load_all(&self.cwd)
    }
}

fn parsed(meta: &[(&str, &str)], body: &str) -> ParsedTemplate {
    parse_template(&template_content(meta, body))
}

// ============================================================================
// PromptTemplate construction
// ============================================================================

#[test]
fn test_from_parsed_requires_model() {
    let p = parsed(&[("description", "no model")], "body");
    assert!(PromptTemplate::from_parsed("x", p, TemplateSource::User, "/x.md").is_none());
}

#[test]
fn test_from_parsed_rejects_blank_model() {
    let p = parsed(&[("model", "\"  \"")], "body");
    assert!(PromptTemplate::from_parsed("x", p, TemplateSource::User, "/x.md").is_none());
}

#[test]
fn test_from_parsed_fields() {
    let p = parsed(
        &[
            ("model", "anthropic/claude-x"),
            ("description", "Review"),
            ("restore", "false"),
            ("thinking", "high"),
        ],
        "Review $1",
    );
    let template =
        PromptTemplate::from_parsed("review", p, TemplateSource::Project, "/p/review.md").unwrap();

    assert_eq!(template.name, "review");
    assert_eq!(template.model_spec, "anthropic/claude-x");
    assert_eq!(template.description.as_deref(), Some("Review"));
    assert!(!template.restore);
    assert_eq!(template.body, "Review $1");
    assert_eq!(template.source, TemplateSource::Project);
    assert_eq!(template.extra.get("thinking").map(String::as_str), Some("high"));
}

#[test]
fn test_restore_defaults_to_true() {
    let p = parsed(&[("model", "claude-x")], "body");
    let template = PromptTemplate::from_parsed("x", p, TemplateSource::User, "/x.md").unwrap();
    assert!(template.restore);
    assert!(template.description.is_none());
}

#[test]
fn test_command_description() {
    let p = parsed(&[("model", "claude-x"), ("description", "Explain")], "b");
    let template = PromptTemplate::from_parsed("x", p, TemplateSource::Project, "/x.md").unwrap();
    assert_eq!(template.command_description(), "Explain [claude-x] (project)");

    let p = parsed(&[("model", "claude-x")], "b");
    let template = PromptTemplate::from_parsed("x", p, TemplateSource::User, "/x.md").unwrap();
    assert_eq!(template.command_description(), "[claude-x] (user)");
}

// ============================================================================
// Discovery
// ============================================================================

#[test]
fn test_missing_directories_yield_nothing() {
    let layout = Layout::new();
    assert!(layout.load().is_empty());
}

#[test]
fn test_no_global_dir_configured() {
    let layout = Layout::new();
    write_template(
        &layout.project(),
        "a.md",
        &template_content(&[("model", "m")], "A"),
    );
    let store = TemplateStore::new(PromptDirs::new(None, ".modelpin/prompts"));
    let templates = store.load_all(&layout.cwd);
    assert_eq!(templates.len(), 1);
}

#[test]
fn test_templates_without_model_are_excluded() {
    let layout = Layout::new();
    write_template(
        &layout.global,
        "bound.md",
        &template_content(&[("model", "claude-x")], "Bound"),
    );
    write_template(
        &layout.global,
        "unbound.md",
        &template_content(&[("description", "plain prompt")], "Plain"),
    );
    write_template(&layout.global, "bare.md", "No metadata at all");

    let templates = layout.load();
    assert_eq!(templates.len(), 1);
    assert!(templates.contains_key("bound"));
}

#[test]
fn test_non_markdown_and_directories_skipped() {
    let layout = Layout::new();
    let content = template_content(&[("model", "claude-x")], "Body");
    write_template(&layout.global, "notes.txt", &content);
    write_template(&layout.global, "README.MD", &content);
    write_template(&layout.global, ".md", &content);
    std::fs::create_dir_all(layout.global.join("dir.md")).unwrap();
    write_template(&layout.global.join("nested"), "deep.md", &content);

    assert!(layout.load().is_empty());
}

#[test]
fn test_unreadable_file_skipped() {
    let layout = Layout::new();
    write_template(
        &layout.global,
        "ok.md",
        &template_content(&[("model", "claude-x")], "Fine"),
    );
    let mut bad = b"---\nmodel: claude-x\n---\n".to_vec();
    bad.extend_from_slice(&[0xff, 0xfe, 0xfd]);
    std::fs::write(layout.global.join("bad.md"), bad).unwrap();

    let templates = layout.load();
    assert_eq!(templates.len(), 1);
    assert!(templates.contains_key("ok"));
}

#[cfg(unix)]
#[test]
fn test_symlinks_followed_to_files() {
    let layout = Layout::new();
    let target = write_template(
        &layout.cwd.join("elsewhere"),
        "real.md",
        &template_content(&[("model", "claude-x")], "Linked"),
    );
    std::fs::create_dir_all(&layout.global).unwrap();
    std::os::unix::fs::symlink(&target, layout.global.join("linked.md")).unwrap();
    std::os::unix::fs::symlink(
        layout.cwd.join("missing.md"),
        layout.global.join("dangling.md"),
    )
    .unwrap();
    std::os::unix::fs::symlink(layout.cwd.join("elsewhere"), layout.global.join("dirlink.md"))
        .unwrap();

    let templates = layout.load();
    assert_eq!(templates.len(), 1);
    assert_eq!(templates["linked"].body, "Linked");
}

// ============================================================================
// Merging
// ============================================================================

#[test]
fn test_project_overrides_global() {
    let layout = Layout::new();
    write_template(
        &layout.global,
        "review.md",
        &template_content(&[("model", "global-model")], "Global body"),
    );
    write_template(
        &layout.global,
        "explain.md",
        &template_content(&[("model", "claude-x")], "Explain"),
    );
    write_template(
        &layout.project(),
        "review.md",
        &template_content(&[("model", "project-model")], "Project body"),
    );

    let templates = layout.load();
    assert_eq!(templates.len(), 2);

    let review = &templates["review"];
    assert_eq!(review.source, TemplateSource::Project);
    assert_eq!(review.model_spec, "project-model");
    assert_eq!(review.body, "Project body");
    assert_eq!(templates["explain"].source, TemplateSource::User);
}

#[test]
fn test_unbound_project_file_does_not_shadow_global() {
    let layout = Layout::new();
    write_template(
        &layout.global,
        "review.md",
        &template_content(&[("model", "claude-x")], "Global"),
    );
    write_template(&layout.project(), "review.md", "no metadata");

    let templates = layout.load();
    assert_eq!(templates["review"].source, TemplateSource::User);
}

#[test]
fn test_load_is_idempotent() {
    let layout = Layout::new();
    write_template(
        &layout.global,
        "a.md",
        &template_content(&[("model", "claude-x")], "A"),
    );
    write_template(
        &layout.project(),
        "b.md",
        &template_content(&[("model", "claude-y")], "B"),
    );

    let first = layout.load();
    let second = layout.load();
    assert_eq!(first, second);
}

#[test]
fn test_reload_reflects_removed_files() {
    let layout = Layout::new();
    let path = write_template(
        &layout.global,
        "gone.md",
        &template_content(&[("model", "claude-x")], "A"),
    );
    assert_eq!(layout.load().len(), 1);

    std::fs::remove_file(path).unwrap();
    assert!(layout.load().is_empty());
}

#[test]
fn test_prompt_dirs_from_config() {
    let config = crate::config::Config::default();
    let dirs = PromptDirs::from_config(&config, Path::new("/home/dev/.modelpin"));
    assert_eq!(
        dirs.global,
        Some(PathBuf::from("/home/dev/.modelpin/prompts"))
    );
    assert_eq!(
        dirs.project_dir(Path::new("/work")),
        PathBuf::from("/work/.modelpin/prompts")
    );
}
