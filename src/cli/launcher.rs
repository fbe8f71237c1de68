use clap::Parser;
use std::path::PathBuf;

/// Arguments for the launcher command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Add a launcher for a checked-in document:\n    \
                   modforge launcher review docs/review.md --description \"Run the review checklist\"")]
pub struct LauncherArgs {
    /// Name of the new command
    pub name: String,

    /// Project-relative path of the artifact the command should load
    pub target: PathBuf,

    /// Short description shown in the launcher document
    #[arg(long, short = 'd')]
    pub description: Option<String>,

    /// IDE configuration root, relative to the project root unless absolute
    #[arg(long, default_value = ".claude")]
    pub config_root: PathBuf,
}
