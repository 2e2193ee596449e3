//! vergo CLI binary.
//!
//! Entry point for the `vergo` command-line tool. It initializes logging
//! via `tracing`, parses arguments with `clap`, and hands the requested
//! task list to the dispatcher.

mod cli;
mod commands;

use miette::Result;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = cli::parse();
    commands::dispatch(args)
}
