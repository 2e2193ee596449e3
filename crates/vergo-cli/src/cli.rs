//! CLI argument definitions for vergo.

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "vergo",
    version,
    about = "Semantic versioning gate for multi-module builds",
    long_about = "Vergo enforces semantic-versioning discipline across a multi-module \
                  project: versions must be structured values, release builds cannot \
                  depend on snapshot internal artifacts, and the resolved version is \
                  emitted as a build artifact."
)]
pub struct Cli {
    /// Tasks to execute (run `vergo tasks` for the available tasks)
    pub tasks: Vec<String>,

    /// Project directory to run against instead of the current directory
    #[arg(short = 'p', long, value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn parse() -> Cli {
    Cli::parse()
}
