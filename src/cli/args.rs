//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use mdx_map::config::DEFAULT_CONFIG_NAME;
use std::path::PathBuf;

/// Turn `<map>` blocks in Markdown into interactive Leaflet maps
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Print debug output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Config file path (searched upward from the current directory)
    #[arg(short = 'C', long, global = true, default_value = DEFAULT_CONFIG_NAME, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Replace map blocks and write the resulting Markdown
    #[command(visible_alias = "c")]
    Compile {
        #[command(flatten)]
        args: IoArgs,
    },

    /// Replace map blocks, then render the Markdown to HTML
    #[command(visible_alias = "r")]
    Render {
        #[command(flatten)]
        args: IoArgs,
    },

    /// Compile every map block and report problems without writing output
    Check {
        /// Input files. Reads stdin when omitted or `-`.
        #[arg(value_name = "PATH")]
        paths: Vec<PathBuf>,
    },
}

/// Shared input/output arguments for Compile and Render
#[derive(clap::Args, Debug, Clone)]
pub struct IoArgs {
    /// Input files. Reads stdin when omitted or `-`.
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Output file, or directory when there are several inputs (default: stdout)
    #[arg(short, long, value_hint = clap::ValueHint::AnyPath)]
    pub output: Option<PathBuf>,
}
