use crate::host::{AgentHost, ModelRegistry, NotifyLevel};
use crate::model::Model;
use std::path::{Path, PathBuf};

/// In-memory registry: models in enumeration order with a credentials flag.
#[derive(Debug, Clone, Default)]
pub(crate) struct FakeRegistry {
    entries: Vec<(Model, bool)>,
}

impl FakeRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with(mut self, provider: &str, id: &str, auth: bool) -> Self {
        self.entries.push((Model::new(provider, id), auth));
        self
    }

    fn has_auth(&self, model: &Model) -> bool {
        self.entries
            .iter()
            .any(|(m, auth)| *auth && m.same_as(model))
    }
}

impl ModelRegistry for FakeRegistry {
    fn find(&self, provider: &str, id: &str) -> Option<Model> {
        self.entries
            .iter()
            .find(|(m, _)| m.provider == provider && m.id == id)
            .map(|(m, _)| m.clone())
    }

    fn all(&self) -> Vec<Model> {
        self.entries.iter().map(|(m, _)| m.clone()).collect()
    }

    fn available(&self) -> Vec<Model> {
        self.entries
            .iter()
            .filter(|(_, auth)| *auth)
            .map(|(m, _)| m.clone())
            .collect()
    }
}

/// Host fake that records every interaction.
///
/// Activation succeeds only for models with credentials in the registry.
#[derive(Debug, Clone)]
pub(crate) struct RecordingHost {
    pub(crate) registry: FakeRegistry,
    pub(crate) active: Option<Model>,
    pub(crate) activations: Vec<Model>,
    pub(crate) notifications: Vec<(NotifyLevel, String)>,
    pub(crate) messages: Vec<String>,
}

impl RecordingHost {
    pub(crate) fn new(registry: FakeRegistry, active: Option<Model>) -> Self {
        Self {
            registry,
            active,
            activations: Vec::new(),
            notifications: Vec::new(),
            messages: Vec::new(),
        }
    }

    pub(crate) fn notifications_at(&self, level: NotifyLevel) -> Vec<&str> {
        self.notifications
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, text)| text.as_str())
            .collect()
    }
}

impl AgentHost for RecordingHost {
    fn registry(&self) -> &dyn ModelRegistry {
        &self.registry
    }

    fn active_model(&self) -> Option<Model> {
        self.active.clone()
    }

    fn set_active_model(&mut self, model: &Model) -> bool {
        if !self.registry.has_auth(model) {
            return false;
        }
        self.activations.push(model.clone());
        self.active = Some(model.clone());
        true
    }

    fn notify(&mut self, message: &str, level: NotifyLevel) {
        self.notifications.push((level, message.to_string()));
    }

    fn send_message(&mut self, text: &str) {
        self.messages.push(text.to_string());
    }
}

/// Write a template file, creating parent directories.
pub(crate) fn write_template(dir: &Path, file_name: &str, content: &str) -> PathBuf {
    std::fs::create_dir_all(dir).unwrap();
    let path = dir.join(file_name);
    std::fs::write(&path, content).unwrap();
    path
}

/// Template file content with a metadata block.
pub(crate) fn template_content(meta: &[(&str, &str)], body: &str) -> String {
    let mut content = String::from("---\n");
    for (key, value) in meta {
        content.push_str(&format!("{}: {}\n", key, value));
    }
    content.push_str("---\n");
    content.push_str(body);
    content
}
