//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - install: Install command arguments
//! - launcher: Custom launcher command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod completions;
pub mod install;
pub mod launcher;

pub use completions::CompletionsArgs;
pub use install::InstallArgs;
pub use launcher::LauncherArgs;

/// Modforge - IDE command surface installer
///
/// Materializes a modular library of agents, tasks, tools, and workflows
/// into the command directory of the host IDE.
#[derive(Parser, Debug)]
#[command(
    name = "modforge",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Materializes a modular agent library into an IDE command surface",
    long_about = "Modforge collects the agents, tasks, tools, and workflow commands each \
                  installed module contributes, writes them into the IDE's command \
                  directory layout, and generates an index of everything installed.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  modforge install                        \x1b[90m# Install every module from ./modules\x1b[0m\n   \
                  modforge install -m core web            \x1b[90m# Install only selected modules\x1b[0m\n   \
                  modforge launcher review docs/review.md \x1b[90m# Add one custom command launcher\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project directory (defaults to current directory)
    #[arg(long, short = 'C', global = true, env = "MODFORGE_PROJECT_ROOT")]
    pub project_root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Install the command surface for all (or selected) modules
    Install(InstallArgs),

    /// Install a single custom command launcher
    Launcher(LauncherArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
