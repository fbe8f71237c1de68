//! Artifact model
//!
//! An artifact is a single renderable content unit (agent persona, task,
//! tool, or workflow command) with a module, a name, and final content.
//! The four kinds form a closed set; kind-specific data lives on
//! [`ArtifactSpec`] variants rather than optional fields.

use std::path::PathBuf;

use crate::error::{Result, module_missing};

/// The closed set of artifact kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    Agent,
    Task,
    Tool,
    Workflow,
}

impl ArtifactKind {
    /// All kinds, in the fixed order used for directory skeletons and index sections
    pub const ALL: [ArtifactKind; 4] = [
        ArtifactKind::Agent,
        ArtifactKind::Task,
        ArtifactKind::Tool,
        ArtifactKind::Workflow,
    ];

    /// Directory name under a module (e.g. "agents")
    pub fn dir_name(self) -> &'static str {
        match self {
            ArtifactKind::Agent => "agents",
            ArtifactKind::Task => "tasks",
            ArtifactKind::Tool => "tools",
            ArtifactKind::Workflow => "workflows",
        }
    }

    /// Section label used in the generated index (e.g. "Agents")
    pub fn label(self) -> &'static str {
        match self {
            ArtifactKind::Agent => "Agents",
            ArtifactKind::Task => "Tasks",
            ArtifactKind::Tool => "Tools",
            ArtifactKind::Workflow => "Workflows",
        }
    }
}

/// Kind-specific artifact data
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactSpec {
    /// Agent persona; content is rendered eagerly at collection time
    Agent,
    /// Task reference; content is read from `source_path` at materialize time
    Task { source_path: PathBuf },
    /// Tool reference; content is read from `source_path` at materialize time
    Tool { source_path: PathBuf },
    /// Workflow command; the installed file keeps the relative path's base name
    Workflow { relative_path: PathBuf },
}

/// A single content unit handed to the install pipeline
///
/// Identity is `(module, kind, name)`. Immutable once collected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub module: String,
    pub name: String,
    pub content: String,
    pub spec: ArtifactSpec,
}

impl Artifact {
    pub fn kind(&self) -> ArtifactKind {
        match self.spec {
            ArtifactSpec::Agent => ArtifactKind::Agent,
            ArtifactSpec::Task { .. } => ArtifactKind::Task,
            ArtifactSpec::Tool { .. } => ArtifactKind::Tool,
            ArtifactSpec::Workflow { .. } => ArtifactKind::Workflow,
        }
    }

    /// Canonical installed file name: `<name>.md`, except workflow commands
    /// which keep their own base file name.
    pub fn file_name(&self) -> String {
        match &self.spec {
            ArtifactSpec::Workflow { relative_path } => relative_path
                .file_name()
                .map(|f| f.to_string_lossy().into_owned())
                .unwrap_or_else(|| format!("{}.md", self.name)),
            _ => format!("{}.md", self.name),
        }
    }

    /// Contract check: a missing module id means the upstream collector is broken.
    pub fn validate(&self) -> Result<()> {
        if self.module.trim().is_empty() {
            return Err(module_missing(&self.name));
        }
        Ok(())
    }
}

/// Discriminator attached to entries coming out of the workflow collector.
///
/// Only [`WorkflowType::Command`] entries become installable artifacts;
/// support files (data, checklists) ride along for counting only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowType {
    Command,
    Support,
}

/// A workflow entry as emitted by the content store
#[derive(Debug, Clone)]
pub struct WorkflowEntry {
    pub artifact: Artifact,
    pub workflow_type: WorkflowType,
}
