//! Launcher command implementation

use std::path::PathBuf;

use console::Style;

use crate::cli::LauncherArgs;
use crate::error::Result;
use crate::installer::{LauncherMetadata, install_custom_launcher};

/// Run the launcher command
pub fn run(project_root: Option<PathBuf>, args: LauncherArgs) -> Result<()> {
    let project_root = super::resolve_project_root(project_root)?;
    let metadata = LauncherMetadata {
        description: args.description,
    };

    match install_custom_launcher(
        &project_root,
        &args.config_root,
        &args.name,
        &args.target,
        &metadata,
    )? {
        Some(install) => {
            println!(
                "{} {} -> {}",
                Style::new().green().apply_to("Installed launcher"),
                Style::new().bold().apply_to(&install.command),
                install.path.display()
            );
        }
        None => {
            println!(
                "No IDE configuration found at {}; nothing to do",
                args.config_root.display()
            );
        }
    }

    Ok(())
}
