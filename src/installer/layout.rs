//! Canonical directory layout
//!
//! All paths the installer touches are derived here, as pure functions of
//! the config root and the artifact data. No state is persisted beyond the
//! filesystem itself.
//!
//! ```text
//! <config-root>/commands/modforge/<module>/{agents,tasks,tools,workflows}/<file>
//! <config-root>/commands/modforge/index.md
//! <config-root>/rules/modforge/          (legacy, removed on sight)
//! ```

use std::path::{Path, PathBuf};

use crate::domain::{Artifact, ArtifactKind};

/// Directory the host IDE scans for commands
pub const COMMANDS_DIR: &str = "commands";

/// Namespace directory holding everything this tool installs
pub const NAMESPACE_DIR: &str = "modforge";

/// Root of the legacy layout, recognized only for migration
pub const LEGACY_RULES_DIR: &str = "rules";

/// File name of the generated index document
pub const INDEX_FILE: &str = "index.md";

/// Root of the installed namespace: `<config-root>/commands/modforge`
pub fn namespace_root(config_root: &Path) -> PathBuf {
    config_root.join(COMMANDS_DIR).join(NAMESPACE_DIR)
}

/// Root of the legacy layout: `<config-root>/rules/modforge`
pub fn legacy_root(config_root: &Path) -> PathBuf {
    config_root.join(LEGACY_RULES_DIR).join(NAMESPACE_DIR)
}

/// Kind subdirectory for a module, e.g. `.../modforge/core/agents`
pub fn kind_dir(config_root: &Path, module: &str, kind: ArtifactKind) -> PathBuf {
    namespace_root(config_root).join(module).join(kind.dir_name())
}

/// Canonical target file path for an artifact
pub fn artifact_path(config_root: &Path, artifact: &Artifact) -> PathBuf {
    kind_dir(config_root, &artifact.module, artifact.kind()).join(artifact.file_name())
}

/// Path of the generated index document
pub fn index_path(config_root: &Path) -> PathBuf {
    namespace_root(config_root).join(INDEX_FILE)
}
