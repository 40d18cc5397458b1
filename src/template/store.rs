//! Template discovery and merging.

use super::{PromptTemplate, TemplateSource, parse_template};
use crate::config::Config;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Templates keyed by command name.
pub type TemplateSet = HashMap<String, PromptTemplate>;

const TEMPLATE_EXTENSION: &str = ".md";

/// The two template locations, in ascending precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptDirs {
    /// Global prompts directory, if any.
    pub global: Option<PathBuf>,
    /// Project prompts directory, relative to the working directory.
    pub project: PathBuf,
}

impl PromptDirs {
    pub fn new(global: Option<PathBuf>, project: impl Into<PathBuf>) -> Self {
        Self {
            global,
            project: project.into(),
        }
    }

    /// Directories as configured for the given agent directory.
    pub fn from_config(config: &Config, agent_dir: &Path) -> Self {
        Self::new(
            Some(config.global_prompts_dir(agent_dir)),
            &config.project_prompts_dir,
        )
    }

    /// Absolute project prompts directory for a working directory.
    pub fn project_dir(&self, cwd: &Path) -> PathBuf {
        cwd.join(&self.project)
    }
}

/// Loads templates from the configured prompt directories.
#[derive(Debug, Clone)]
pub struct TemplateStore {
    dirs: PromptDirs,
}

impl TemplateStore {
    pub fn new(dirs: PromptDirs) -> Self {
        Self { dirs }
    }

    /// Load every model-bound template visible from `cwd`.
    ///
    /// Global templates load first; project templates replace same-name global
    /// ones. Missing directories and unreadable files contribute nothing. Only
    /// reads the filesystem, so repeated calls over unchanged files agree.
    pub fn load_all(&self, cwd: &Path) -> TemplateSet {
        let mut templates = TemplateSet::new();

        if let Some(global) = &self.dirs.global {
            for template in load_dir(global, TemplateSource::User) {
                templates.insert(template.name.clone(), template);
            }
        }

        for template in load_dir(&self.dirs.project_dir(cwd), TemplateSource::Project) {
            if let Some(replaced) = templates.insert(template.name.clone(), template) {
                debug!(
                    "project template '{}' overrides {}",
                    replaced.name,
                    replaced.path.display()
                );
            }
        }

        templates
    }
}

/// Load model-bound templates directly inside `dir` (no recursion).
fn load_dir(dir: &Path, source: TemplateSource) -> Vec<PromptTemplate> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            debug!("skipping prompts directory {}: {}", dir.display(), e);
            return Vec::new();
        }
    };

    let mut templates = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        let Some(name) = template_name(&path) else {
            continue;
        };

        // fs::metadata follows symlinks; dangling links fail and are skipped.
        match fs::metadata(&path) {
            Ok(meta) if meta.is_file() => {}
            _ => continue,
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!("failed to read prompt template '{}': {}", path.display(), e);
                continue;
            }
        };

        match PromptTemplate::from_parsed(name, parse_template(&content), source, &path) {
            Some(template) => templates.push(template),
            None => debug!("ignoring {}: no model declared", path.display()),
        }
    }

    debug!(
        "loaded {} {} template(s) from {}",
        templates.len(),
        source,
        dir.display()
    );
    templates
}

/// Command name for a template path: the file name minus `.md`.
fn template_name(path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_str()?;
    let name = file_name.strip_suffix(TEMPLATE_EXTENSION)?;
    if name.is_empty() {
        return None;
    }
    Some(name.to_string())
}
