//! Artifact materialization
//!
//! Writes every partitioned artifact to its canonical path. For each module
//! the full set of kind directories is created eagerly, whether or not the
//! module has artifacts of every kind; downstream tooling relies on that
//! stable skeleton, so an empty kind directory is expected, not an error.
//!
//! Duplicate `(module, kind, name)` identities overwrite at the filesystem;
//! the last writer wins. Any read or write failure aborts the run with a
//! path-attributed error (the next run's cleanup resets partial state).

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::common::fs::ensure_dir;
use crate::domain::{Artifact, ArtifactKind, ArtifactSpec, Partition};
use crate::error::{Result, file_read_failed, file_write_failed, source_missing};
use crate::progress::ProgressDisplay;

use super::layout;

/// Per-kind counts of written artifacts
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KindCounts {
    pub agents: usize,
    pub tasks: usize,
    pub tools: usize,
    pub workflows: usize,
}

impl KindCounts {
    pub fn total(&self) -> usize {
        self.agents + self.tasks + self.tools + self.workflows
    }

    fn bump(&mut self, kind: ArtifactKind) {
        match kind {
            ArtifactKind::Agent => self.agents += 1,
            ArtifactKind::Task => self.tasks += 1,
            ArtifactKind::Tool => self.tools += 1,
            ArtifactKind::Workflow => self.workflows += 1,
        }
    }
}

/// Ensure parent directory exists for a path
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)
            .map_err(|e| file_write_failed(parent.display().to_string(), e.to_string()))?;
    }
    Ok(())
}

/// Write text to a file, creating parents and overwriting without error
pub(crate) fn write_text(path: &Path, content: &str) -> Result<()> {
    ensure_parent_dir(path)?;
    fs::write(path, content)
        .map_err(|e| file_write_failed(path.display().to_string(), e.to_string()))
}

/// Final content for an artifact: already rendered for agents and workflow
/// commands, read from the source path for task/tool references.
fn resolve_content(artifact: &Artifact) -> Result<String> {
    match &artifact.spec {
        ArtifactSpec::Task { source_path } | ArtifactSpec::Tool { source_path } => {
            if !source_path.is_file() {
                return Err(source_missing(source_path.display().to_string()));
            }
            fs::read_to_string(source_path)
                .map_err(|e| file_read_failed(source_path.display().to_string(), e.to_string()))
        }
        ArtifactSpec::Agent | ArtifactSpec::Workflow { .. } => Ok(artifact.content.clone()),
    }
}

/// Write all partitioned artifacts under the config root.
///
/// Returns per-kind counts of written items. Counts, not content, are
/// surfaced to the caller.
pub fn materialize(
    config_root: &Path,
    partition: &Partition,
    progress: &ProgressDisplay,
) -> Result<KindCounts> {
    let mut counts = KindCounts::default();

    for module in partition.modules() {
        // Full skeleton per module, regardless of content
        for kind in ArtifactKind::ALL {
            let dir = layout::kind_dir(config_root, module, kind);
            ensure_dir(&dir)
                .map_err(|e| file_write_failed(dir.display().to_string(), e.to_string()))?;
        }

        let Some(artifacts) = partition.get(module) else {
            continue;
        };
        for kind in ArtifactKind::ALL {
            for artifact in artifacts.bucket(kind) {
                let content = resolve_content(artifact)?;
                let target = layout::artifact_path(config_root, artifact);
                write_text(&target, &content)?;
                counts.bump(kind);
                progress.file_written(&format!("{module}/{}", artifact.file_name()));
            }
        }
    }

    Ok(counts)
}
