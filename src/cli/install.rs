use clap::Parser;
use std::path::PathBuf;

/// Arguments for the install command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Install everything:\n    modforge install\n\n\
                   Install selected modules:\n    modforge install --modules core web\n\n\
                   Install from a custom store into a custom IDE root:\n    \
                   modforge install --content-root ./library --config-root .cursor")]
pub struct InstallArgs {
    /// Content store root, relative to the project root unless absolute
    #[arg(long, default_value = "modules")]
    pub content_root: PathBuf,

    /// IDE configuration root, relative to the project root unless absolute
    #[arg(long, default_value = ".claude")]
    pub config_root: PathBuf,

    /// Install only these modules (default: all modules in the store)
    #[arg(long = "modules", short = 'm', value_name = "MODULE", num_args = 1..)]
    pub modules: Vec<String>,

    /// Print the install result as JSON instead of the styled summary
    #[arg(long)]
    pub json: bool,
}
