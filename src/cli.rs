use clap::{Parser, Subcommand, ValueEnum};

/// Manifold - HVAC consultancy intake studio
#[derive(Parser, Debug)]
#[command(name = "manifold")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'manifold' without arguments to open the studio.")]
pub struct Cli {
    /// Emit machine-readable JSON instead of the studio UI
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// When to use colored output
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Force ASCII icons and borders
    #[arg(long, global = true)]
    pub ascii: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive intake studio
    Studio,

    /// Render the findings report for a canned sample session
    Demo,

    /// Explain Manifold's usage (for humans/AI assistants)
    Explain {
        /// Short version (just the essentials)
        #[arg(long)]
        brief: bool,
    },
}
