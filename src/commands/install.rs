//! Install command implementation
//!
//! Runs the full pipeline:
//! 1. Cleanup (including legacy-layout migration)
//! 2. Collect artifacts from the content store
//! 3. Partition by module and kind
//! 4. Materialize the directory layout
//! 5. Generate and write the index
//! 6. Report per-kind counts

use std::path::PathBuf;

use console::Style;

use crate::cli::InstallArgs;
use crate::error::Result;
use crate::installer::{InstallOperation, InstallOptions, InstallResult};

/// Run the install command
pub fn run(project_root: Option<PathBuf>, args: InstallArgs) -> Result<()> {
    let project_root = super::resolve_project_root(project_root)?;

    let options = InstallOptions {
        content_root: args.content_root,
        config_root: args.config_root.clone(),
        modules: args.modules,
        show_progress: !args.json,
    };

    let result = InstallOperation::new(&project_root, &options).execute()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print_summary(&result, &args.config_root);
    }

    Ok(())
}

fn print_summary(result: &InstallResult, config_root: &std::path::Path) {
    let bold = Style::new().bold();
    let green = Style::new().green();

    println!(
        "{} {}",
        green.apply_to("Installed"),
        bold.apply_to(format!("{} artifacts", result.counts.total()))
    );
    println!("  {} {}", bold.apply_to("Agents:"), result.counts.agents);
    println!("  {} {}", bold.apply_to("Tasks:"), result.counts.tasks);
    println!("  {} {}", bold.apply_to("Tools:"), result.counts.tools);
    println!(
        "  {} {}",
        bold.apply_to("Workflows:"),
        result.counts.workflows
    );
    println!(
        "  {} {}",
        bold.apply_to("Index:"),
        crate::installer::layout::index_path(config_root).display()
    );
}
