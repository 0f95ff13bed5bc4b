//! Manifold CLI - HVAC consultancy intake studio
//!
//! Usage: manifold [COMMAND]
//!
//! Commands:
//!   studio   Open the interactive intake studio (default)
//!   demo     Render the findings report for a canned sample session
//!   explain  Explain Manifold usage

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cwd = std::env::current_dir()?;

    match cli.command {
        None | Some(Commands::Studio) => commands::studio::cmd_studio(
            &cwd,
            cli.json,
            cli.verbose,
            cli.color,
            cli.ascii,
        ),
        Some(Commands::Demo) => commands::demo::cmd_demo(&cwd, cli.json, cli.color, cli.ascii),
        Some(Commands::Explain { brief }) => commands::explain::cmd_explain(brief),
    }
}
