//! Content store access
//!
//! The store is a directory of module directories, each contributing agent,
//! task, tool, and workflow files:
//!
//! ```text
//! <content-root>/<module>/agents/<name>.md
//! <content-root>/<module>/tasks/<name>.md
//! <content-root>/<module>/tools/<name>.md
//! <content-root>/<module>/workflows/<workflow>/...
//! ```
//!
//! Agents and workflow commands are collected with content; tasks and tools
//! come back as references whose content is read at materialize time.

pub mod frontmatter;
pub mod scan;

pub use scan::{
    WorkflowCollection, collect_agent_artifacts, collect_workflow_artifacts, task_refs, tool_refs,
};
