//! Domain types for Modforge
//!
//! Contains the artifact model and the module partitioning logic that the
//! installer and index generator both consume.

pub mod artifact;
pub mod partition;

pub use artifact::{Artifact, ArtifactKind, ArtifactSpec, WorkflowEntry, WorkflowType};
pub use partition::{ModuleArtifacts, Partition, partition};
