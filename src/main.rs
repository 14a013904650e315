//! mdx-map - compile `<map>` blocks in Markdown into Leaflet maps.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands, run::Mode};
use mdx_map::{Config, logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = Config::load(&cli.config)?;

    match &cli.command {
        Commands::Compile { args } => cli::run::run(args, &config, Mode::Compile),
        Commands::Render { args } => cli::run::run(args, &config, Mode::Render),
        Commands::Check { paths } => cli::check::check_files(paths, &config),
    }
}
