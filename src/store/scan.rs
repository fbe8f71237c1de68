//! Content store scanning
//!
//! Walks the content root and produces artifacts in a deterministic order
//! (modules and files sorted by name) so that downstream output is stable
//! across runs with identical store content.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::domain::{Artifact, ArtifactSpec, WorkflowEntry, WorkflowType};
use crate::error::{Result, content_root_not_found, file_read_failed};

use super::frontmatter;

/// Workflow artifacts plus per-type counts
#[derive(Debug, Default)]
pub struct WorkflowCollection {
    pub entries: Vec<WorkflowEntry>,
    pub command_count: usize,
    pub support_count: usize,
}

/// Module directories under the content root, sorted by name.
///
/// An empty `selected` slice means all modules.
fn module_dirs(content_root: &Path, selected: &[String]) -> Result<Vec<(String, PathBuf)>> {
    if !content_root.is_dir() {
        return Err(content_root_not_found(content_root.display().to_string()));
    }

    let mut modules = Vec::new();
    for entry in fs::read_dir(content_root)? {
        let entry = entry?;
        if !entry.path().is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        if name.starts_with('.') {
            continue;
        }
        if !selected.is_empty() && !selected.iter().any(|s| s == &name) {
            continue;
        }
        modules.push((name, entry.path()));
    }
    modules.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(modules)
}

/// Markdown files directly under `dir`, sorted by file name.
/// A missing directory contributes nothing.
fn markdown_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|e| e == "md") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Collect agent artifacts with final content.
///
/// Front-matter may override the invocation name; otherwise the file stem is
/// used. Content is installed verbatim, front-matter included.
pub fn collect_agent_artifacts(content_root: &Path, selected: &[String]) -> Result<Vec<Artifact>> {
    let mut artifacts = Vec::new();
    for (module, module_path) in module_dirs(content_root, selected)? {
        for path in markdown_files(&module_path.join("agents"))? {
            let content = fs::read_to_string(&path)
                .map_err(|e| file_read_failed(path.display().to_string(), e.to_string()))?;
            let name = frontmatter::name_override(&content).unwrap_or_else(|| file_stem(&path));
            artifacts.push(Artifact {
                module: module.clone(),
                name,
                content,
                spec: ArtifactSpec::Agent,
            });
        }
    }
    Ok(artifacts)
}

fn kind_refs(
    content_root: &Path,
    selected: &[String],
    dir_name: &str,
    make_spec: fn(PathBuf) -> ArtifactSpec,
) -> Result<Vec<Artifact>> {
    let mut refs = Vec::new();
    for (module, module_path) in module_dirs(content_root, selected)? {
        for path in markdown_files(&module_path.join(dir_name))? {
            refs.push(Artifact {
                module: module.clone(),
                name: file_stem(&path),
                content: String::new(),
                spec: make_spec(path),
            });
        }
    }
    Ok(refs)
}

/// Collect task references (path + module + name, content read at materialize time)
pub fn task_refs(content_root: &Path, selected: &[String]) -> Result<Vec<Artifact>> {
    kind_refs(content_root, selected, "tasks", |source_path| {
        ArtifactSpec::Task { source_path }
    })
}

/// Collect tool references (path + module + name, content read at materialize time)
pub fn tool_refs(content_root: &Path, selected: &[String]) -> Result<Vec<Artifact>> {
    kind_refs(content_root, selected, "tools", |source_path| {
        ArtifactSpec::Tool { source_path }
    })
}

/// Collect workflow entries for all modules.
///
/// Markdown files under a module's `workflows/` tree are command
/// representations and carry content; anything else is a support file,
/// counted but never installed.
pub fn collect_workflow_artifacts(content_root: &Path) -> Result<WorkflowCollection> {
    let mut collection = WorkflowCollection::default();
    for (module, module_path) in module_dirs(content_root, &[])? {
        let workflows_dir = module_path.join("workflows");
        if !workflows_dir.is_dir() {
            continue;
        }
        for entry in WalkDir::new(&workflows_dir)
            .sort_by_file_name()
            .into_iter()
            .filter_map(std::result::Result::ok)
        {
            if !entry.file_type().is_file() {
                continue;
            }
            let path = entry.path();
            let relative_path = path
                .strip_prefix(&workflows_dir)
                .unwrap_or(path)
                .to_path_buf();
            let is_command = path.extension().is_some_and(|e| e == "md");
            let content = if is_command {
                fs::read_to_string(path)
                    .map_err(|e| file_read_failed(path.display().to_string(), e.to_string()))?
            } else {
                String::new()
            };
            let workflow_type = if is_command {
                collection.command_count += 1;
                WorkflowType::Command
            } else {
                collection.support_count += 1;
                WorkflowType::Support
            };
            collection.entries.push(WorkflowEntry {
                artifact: Artifact {
                    module: module.clone(),
                    name: file_stem(&relative_path),
                    content,
                    spec: ArtifactSpec::Workflow { relative_path },
                },
                workflow_type,
            });
        }
    }
    Ok(collection)
}
