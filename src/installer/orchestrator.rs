//! Install orchestration
//!
//! Sequences the full pipeline in strict order: cleanup, collection,
//! partitioning, materialization, index generation, result summary. No step
//! overlaps another's writes; the index is derived from the same in-memory
//! grouped data the materializer consumed.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::{self, Partition};
use crate::error::Result;
use crate::progress::ProgressDisplay;
use crate::store;

use super::materialize::{KindCounts, write_text};
use super::{cleanup, index, layout, materialize};

/// Options for a full install
#[derive(Debug, Clone)]
pub struct InstallOptions {
    /// Content store root, resolved against the project root unless absolute
    pub content_root: PathBuf,
    /// IDE configuration root, resolved against the project root unless absolute
    pub config_root: PathBuf,
    /// Module selection; empty means all modules
    pub modules: Vec<String>,
    /// Draw a progress bar while materializing
    pub show_progress: bool,
}

/// Outcome of a full install
#[derive(Debug, Clone, Copy, Serialize)]
pub struct InstallResult {
    pub success: bool,
    pub counts: KindCounts,
}

/// Main orchestrator for the install operation
pub struct InstallOperation<'a> {
    project_root: &'a Path,
    options: &'a InstallOptions,
}

fn resolve(project_root: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        project_root.join(path)
    }
}

impl<'a> InstallOperation<'a> {
    pub fn new(project_root: &'a Path, options: &'a InstallOptions) -> Self {
        Self {
            project_root,
            options,
        }
    }

    fn collect(&self, content_root: &Path) -> Result<Partition> {
        let selected = &self.options.modules;
        let agents = store::collect_agent_artifacts(content_root, selected)?;
        let tasks = store::task_refs(content_root, selected)?;
        let tools = store::tool_refs(content_root, selected)?;
        let mut workflows = store::collect_workflow_artifacts(content_root)?.entries;
        if !selected.is_empty() {
            workflows.retain(|e| selected.iter().any(|m| m == &e.artifact.module));
        }
        domain::partition(agents, tasks, tools, workflows)
    }

    /// Execute the install: cleanup, collect, partition, materialize, index.
    pub fn execute(&self) -> Result<InstallResult> {
        let config_root = resolve(self.project_root, &self.options.config_root);
        let content_root = resolve(self.project_root, &self.options.content_root);

        cleanup::cleanup(&config_root)?;

        let grouped = self.collect(&content_root)?;

        let progress = if self.options.show_progress {
            ProgressDisplay::new(grouped.artifact_count() as u64)
        } else {
            ProgressDisplay::hidden()
        };
        let counts = materialize::materialize(&config_root, &grouped, &progress)?;
        progress.finish();

        let document = index::generate(&grouped);
        write_text(&layout::index_path(&config_root), &document)?;

        Ok(InstallResult {
            success: true,
            counts,
        })
    }
}
