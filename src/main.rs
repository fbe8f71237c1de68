//! Modforge - IDE command surface installer
//!
//! Materializes a modular library of agents, tasks, tools, and workflow
//! commands into the command directory layout of the host IDE, and keeps a
//! generated index in sync with what is installed.

use clap::Parser;

mod cli;
mod commands;
mod common;
mod domain;
mod error;
mod installer;
mod progress;
mod store;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Install(args) => commands::install::run(cli.project_root, args),
        Commands::Launcher(args) => commands::launcher::run(cli.project_root, args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
