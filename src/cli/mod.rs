//! CLI definition for ak.
//!
//! There are no subcommands: running `ak` performs the full install. The
//! flags here shape output only, never install semantics.

pub mod output;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "ak",
    version,
    about = "Install bundled agent skills and workflows into the current project",
    long_about = "Copies the bundled .agent directory (skills and workflows) into \
                  ./.agent, creating it if absent and overwriting files that collide \
                  by relative path."
)]
pub struct Cli {
    /// Machine-readable JSON output (for agents and scripts)
    #[arg(long)]
    pub robot: bool,

    /// Suppress informational output
    #[arg(long, short)]
    pub quiet: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(long, short, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
