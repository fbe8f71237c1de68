//! Custom command launcher
//!
//! A standalone operation outside the module-based install flow: writes one
//! fixed-template command document that points the IDE at an arbitrary
//! artifact. Requires an already-configured IDE (the config root must
//! exist); otherwise it is a no-op, since there is nothing to add a
//! command to.

use std::path::{Component, Path, PathBuf};

use crate::error::Result;

use super::layout::{self, NAMESPACE_DIR};
use super::materialize::write_text;

/// Optional launcher metadata
#[derive(Debug, Default, Clone)]
pub struct LauncherMetadata {
    pub description: Option<String>,
}

/// Result of a launcher install
#[derive(Debug, Clone)]
pub struct LauncherInstall {
    /// Absolute path of the written launcher document
    pub path: PathBuf,
    /// Invocation string for the new command
    pub command: String,
}

/// Relative link from `from_dir` to `target`, both relative to the same base
fn relative_link(from_dir: &Path, target: &Path) -> PathBuf {
    let from: Vec<Component> = from_dir.components().collect();
    let to: Vec<Component> = target.components().collect();
    let common = from
        .iter()
        .zip(to.iter())
        .take_while(|(a, b)| a == b)
        .count();

    let mut link = PathBuf::new();
    for _ in common..from.len() {
        link.push("..");
    }
    for component in &to[common..] {
        link.push(component);
    }
    link
}

fn render(name: &str, target: &Path, link: &Path, metadata: &LauncherMetadata) -> String {
    let target_name = target
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_else(|| target.display().to_string());
    let mut doc = format!("# {name}\n\n");
    if let Some(description) = &metadata.description {
        doc.push_str(description);
        doc.push_str("\n\n");
    }
    doc.push_str(&format!(
        "When this command is invoked, load and follow the instructions in\n[{target_name}]({}).\n",
        link.display()
    ));
    doc
}

/// Install a single custom command launcher for `name`, referencing
/// `target` (a project-relative artifact path) by relative link.
///
/// `config_root` is resolved against `project_root`. Returns `None` when the
/// config root does not exist.
pub fn install_custom_launcher(
    project_root: &Path,
    config_root: &Path,
    name: &str,
    target: &Path,
    metadata: &LauncherMetadata,
) -> Result<Option<LauncherInstall>> {
    let abs_config_root = project_root.join(config_root);
    if !abs_config_root.is_dir() {
        return Ok(None);
    }

    let launcher_dir = layout::namespace_root(config_root);
    let link = relative_link(&launcher_dir, target);
    let content = render(name, target, &link, metadata);

    let path = project_root
        .join(layout::namespace_root(config_root))
        .join(format!("{name}.md"));
    write_text(&path, &content)?;

    Ok(Some(LauncherInstall {
        path,
        command: format!("/{NAMESPACE_DIR}/{name}"),
    }))
}
