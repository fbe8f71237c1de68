//! Index document generation
//!
//! Derives a single navigable markdown document from the same grouped data
//! the materializer used, so the index always enumerates exactly the
//! installed set. Output is byte-identical for identical input: modules in
//! first-encounter order, kinds in the fixed agent/task/tool/workflow order,
//! empty kind sections omitted.

use crate::domain::{ArtifactKind, Partition};

use super::layout::{COMMANDS_DIR, NAMESPACE_DIR};

const HEADER_TITLE: &str = "# Modforge Command Index";

/// Generate the index document for a partition
pub fn generate(partition: &Partition) -> String {
    let mut doc = String::new();
    doc.push_str(HEADER_TITLE);
    doc.push_str("\n\n");
    doc.push_str(&format!(
        "Commands installed under `{COMMANDS_DIR}/{NAMESPACE_DIR}/`, grouped by module and kind.\n\
         Regenerated on every install; do not edit by hand.\n\n"
    ));
    doc.push_str("## Tips\n\n");
    doc.push_str(&format!(
        "- Invoke a command by typing `/` and selecting its path, e.g. `/{NAMESPACE_DIR}/core/agents/pm`.\n"
    ));
    doc.push_str("- Re-run `modforge install` after changing module content to refresh this surface.\n");

    for module in partition.modules() {
        let Some(artifacts) = partition.get(module) else {
            continue;
        };
        doc.push_str(&format!("\n## {}\n", module.to_uppercase()));
        for kind in ArtifactKind::ALL {
            let bucket = artifacts.bucket(kind);
            if bucket.is_empty() {
                continue;
            }
            doc.push_str(&format!("\n### {}\n\n", kind.label()));
            for artifact in bucket {
                doc.push_str(&format!(
                    "- `{}` ({}/{})\n",
                    artifact.name,
                    kind.dir_name(),
                    artifact.file_name()
                ));
            }
        }
    }

    doc
}
