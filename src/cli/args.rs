//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Waypost navigation and configuration CLI
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: waypost.toml)
    #[arg(short = 'C', long, default_value = "waypost.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Initialize a new site from template
    #[command(visible_alias = "i")]
    Init {
        /// Site directory name/path (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,

        /// Print the config template to stdout instead of writing files
        #[arg(short, long)]
        dry: bool,
    },

    /// Validate configuration and navigation
    #[command(visible_alias = "c")]
    Check {
        #[command(flatten)]
        args: CheckArgs,
    },

    /// Flatten navigation to JSON for external tooling
    #[command(visible_alias = "q")]
    Query {
        #[command(flatten)]
        args: QueryArgs,
    },
}

/// Check command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct CheckArgs {
    /// Treat duplicate-route warnings as errors
    #[arg(short, long)]
    pub strict: bool,
}

/// Query command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct QueryArgs {
    /// Which navigation tree to flatten
    #[arg(short, long, value_enum, default_value = "sidebar")]
    pub tree: QueryTree,

    /// Pretty-print JSON output
    #[arg(short, long)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

/// Tree selector for the query command.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryTree {
    /// Top navigation bar
    Nav,
    /// Sidebar tree
    Sidebar,
    /// Both, keyed by tree name
    All,
}

#[allow(unused)]
impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
    pub const fn is_check(&self) -> bool {
        matches!(self.command, Commands::Check { .. })
    }
    pub const fn is_query(&self) -> bool {
        matches!(self.command, Commands::Query { .. })
    }
}
