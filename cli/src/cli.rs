use std::path::PathBuf;

use clap::ArgAction;
use clap::Parser;

/// Command-line arguments.
#[derive(Debug, Parser)]
#[command(
    version,
    about = "Prints the commands needed to install a set of MCP servers into Claude.app."
)]
pub struct Cli {
    /// Path to the JSON file holding the selected MCP servers
    /// (the `mcpServers` shape used by the desktop app).
    pub config: PathBuf,

    /// Print the instruction steps as JSON instead of formatted text.
    #[arg(long)]
    pub json: bool,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Don't use colored ansi output.
    #[arg(long)]
    pub no_ansi: bool,
}
