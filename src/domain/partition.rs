//! Module partitioning
//!
//! Groups a heterogeneous list of collected artifacts by `(module, kind)`.
//! The module set is derived from the data on every run; a module with zero
//! artifacts never appears. Grouping is pure: same input, same output.

use std::collections::{HashMap, HashSet};

use crate::error::Result;

use super::artifact::{Artifact, ArtifactKind, WorkflowEntry, WorkflowType};

/// Per-module artifact buckets, one per kind
#[derive(Debug, Default, Clone)]
pub struct ModuleArtifacts {
    pub agents: Vec<Artifact>,
    pub tasks: Vec<Artifact>,
    pub tools: Vec<Artifact>,
    pub workflows: Vec<Artifact>,
}

impl ModuleArtifacts {
    pub fn bucket(&self, kind: ArtifactKind) -> &[Artifact] {
        match kind {
            ArtifactKind::Agent => &self.agents,
            ArtifactKind::Task => &self.tasks,
            ArtifactKind::Tool => &self.tools,
            ArtifactKind::Workflow => &self.workflows,
        }
    }

    fn bucket_mut(&mut self, kind: ArtifactKind) -> &mut Vec<Artifact> {
        match kind {
            ArtifactKind::Agent => &mut self.agents,
            ArtifactKind::Task => &mut self.tasks,
            ArtifactKind::Tool => &mut self.tools,
            ArtifactKind::Workflow => &mut self.workflows,
        }
    }

    pub fn len(&self) -> usize {
        ArtifactKind::ALL
            .iter()
            .map(|k| self.bucket(*k).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Artifacts grouped by module and kind
///
/// Modules iterate in first-encounter order so that downstream output
/// (notably the index) is stable across runs with identical input.
#[derive(Debug, Default, Clone)]
pub struct Partition {
    modules: Vec<String>,
    by_module: HashMap<String, ModuleArtifacts>,
}

impl Partition {
    /// Modules in first-encounter order
    pub fn modules(&self) -> &[String] {
        &self.modules
    }

    /// The derived module set (order-independent view)
    pub fn module_set(&self) -> HashSet<&str> {
        self.modules.iter().map(String::as_str).collect()
    }

    pub fn get(&self, module: &str) -> Option<&ModuleArtifacts> {
        self.by_module.get(module)
    }

    /// Total artifact count across all modules and kinds
    pub fn artifact_count(&self) -> usize {
        self.by_module.values().map(ModuleArtifacts::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    fn insert(&mut self, artifact: Artifact) -> Result<()> {
        artifact.validate()?;
        if !self.by_module.contains_key(&artifact.module) {
            self.modules.push(artifact.module.clone());
        }
        let kind = artifact.kind();
        self.by_module
            .entry(artifact.module.clone())
            .or_default()
            .bucket_mut(kind)
            .push(artifact);
        Ok(())
    }
}

/// Group collected artifacts by `(module, kind)`.
///
/// Workflow entries are filtered by their discriminator: only
/// [`WorkflowType::Command`] entries participate. An artifact with an empty
/// module id aborts partitioning with `ModuleDataInvalid`.
pub fn partition(
    agents: Vec<Artifact>,
    task_refs: Vec<Artifact>,
    tool_refs: Vec<Artifact>,
    workflows: Vec<WorkflowEntry>,
) -> Result<Partition> {
    let mut out = Partition::default();
    for artifact in agents {
        out.insert(artifact)?;
    }
    for artifact in task_refs {
        out.insert(artifact)?;
    }
    for artifact in tool_refs {
        out.insert(artifact)?;
    }
    for entry in workflows {
        if entry.workflow_type == WorkflowType::Command {
            out.insert(entry.artifact)?;
        }
    }
    Ok(out)
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::domain::artifact::ArtifactSpec;
    use std::path::PathBuf;

    fn agent(module: &str, name: &str) -> Artifact {
        Artifact {
            module: module.to_string(),
            name: name.to_string(),
            content: format!("# {name}"),
            spec: ArtifactSpec::Agent,
        }
    }

    fn task(module: &str, name: &str) -> Artifact {
        Artifact {
            module: module.to_string(),
            name: name.to_string(),
            content: String::new(),
            spec: ArtifactSpec::Task {
                source_path: PathBuf::from(format!("modules/{module}/tasks/{name}.md")),
            },
        }
    }

    fn workflow(module: &str, name: &str, workflow_type: WorkflowType) -> WorkflowEntry {
        WorkflowEntry {
            artifact: Artifact {
                module: module.to_string(),
                name: name.to_string(),
                content: String::new(),
                spec: ArtifactSpec::Workflow {
                    relative_path: PathBuf::from(format!("{name}/{name}.md")),
                },
            },
            workflow_type,
        }
    }

    #[test]
    fn test_module_set_is_union_across_kinds() {
        let partition = partition(
            vec![agent("core", "pm")],
            vec![task("web", "review")],
            vec![],
            vec![workflow("infra", "release", WorkflowType::Command)],
        )
        .expect("partition");

        let set = partition.module_set();
        assert_eq!(set.len(), 3);
        assert!(set.contains("core"));
        assert!(set.contains("web"));
        assert!(set.contains("infra"));
    }

    #[test]
    fn test_every_artifact_lands_in_its_own_bucket() {
        let partition = partition(
            vec![agent("core", "pm"), agent("core", "dev")],
            vec![task("core", "review")],
            vec![],
            vec![],
        )
        .expect("partition");

        let core = partition.get("core").expect("core module");
        assert_eq!(core.agents.len(), 2);
        assert_eq!(core.tasks.len(), 1);
        assert!(core.tools.is_empty());
        assert!(core.workflows.is_empty());
        assert_eq!(partition.artifact_count(), 3);
    }

    #[test]
    fn test_first_encounter_order_preserved() {
        let partition = partition(
            vec![agent("zeta", "a"), agent("alpha", "b")],
            vec![task("zeta", "t")],
            vec![],
            vec![workflow("mid", "w", WorkflowType::Command)],
        )
        .expect("partition");

        assert_eq!(partition.modules(), &["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_support_workflows_are_filtered_out() {
        let partition = partition(
            vec![],
            vec![],
            vec![],
            vec![
                workflow("core", "release", WorkflowType::Command),
                workflow("core", "checklist", WorkflowType::Support),
            ],
        )
        .expect("partition");

        let core = partition.get("core").expect("core module");
        assert_eq!(core.workflows.len(), 1);
        assert_eq!(core.workflows[0].name, "release");
    }

    #[test]
    fn test_support_only_module_never_appears() {
        let partition = partition(
            vec![],
            vec![],
            vec![],
            vec![workflow("ghost", "data", WorkflowType::Support)],
        )
        .expect("partition");

        assert!(partition.is_empty());
        assert!(partition.get("ghost").is_none());
    }

    #[test]
    fn test_empty_module_id_is_an_error() {
        let result = partition(vec![agent("", "pm")], vec![], vec![], vec![]);
        assert!(result.is_err());
    }

    #[test]
    fn test_partition_is_referentially_transparent() {
        let inputs = || {
            (
                vec![agent("core", "pm")],
                vec![task("core", "review")],
                vec![],
                vec![workflow("web", "deploy", WorkflowType::Command)],
            )
        };

        let (a1, t1, o1, w1) = inputs();
        let (a2, t2, o2, w2) = inputs();
        let first = partition(a1, t1, o1, w1).expect("first");
        let second = partition(a2, t2, o2, w2).expect("second");

        assert_eq!(first.modules(), second.modules());
        assert_eq!(first.artifact_count(), second.artifact_count());
        for module in first.modules() {
            let lhs = first.get(module).expect("lhs");
            let rhs = second.get(module).expect("rhs");
            for kind in ArtifactKind::ALL {
                assert_eq!(lhs.bucket(kind), rhs.bucket(kind));
            }
        }
    }

    #[test]
    fn test_empty_input_yields_empty_partition() {
        let partition = partition(vec![], vec![], vec![], vec![]).expect("partition");
        assert!(partition.is_empty());
        assert_eq!(partition.artifact_count(), 0);
        assert!(partition.module_set().is_empty());
    }
}
