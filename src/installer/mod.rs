//! The install pipeline
//!
//! Owns the target directory shape and everything written into it:
//! - [`layout`]: canonical and legacy path derivation (pure)
//! - [`cleanup`]: pre-install reset and legacy-layout migration
//! - [`materialize`]: directory skeleton and artifact writes
//! - [`index`]: generated navigation document
//! - [`orchestrator`]: the end-to-end install sequence
//! - [`launcher`]: standalone custom command launcher

pub mod cleanup;
pub mod index;
pub mod launcher;
pub mod layout;
pub mod materialize;
pub mod orchestrator;

pub use launcher::{LauncherInstall, LauncherMetadata, install_custom_launcher};
pub use materialize::KindCounts;
pub use orchestrator::{InstallOperation, InstallOptions, InstallResult};
