use std::path::PathBuf;

use clap::Parser;

/// Run one of four recursive algorithms from a numbered menu.
///
/// With no flags every answer is read interactively from stdin.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Args {
    /// Answer the "Choose a number" prompt up front (1-based).
    #[arg(long, allow_hyphen_values = true)]
    pub choice: Option<String>,

    /// Answer the parameter prompt up front.
    #[arg(long, allow_hyphen_values = true)]
    pub param: Option<String>,

    /// Config file (default: ./recurse.toml when present).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Raise log verbosity (-v info, -vv debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
