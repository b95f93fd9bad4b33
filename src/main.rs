//! lintmock - Mock install tree preparation for linters
//!
//! lintmock provides:
//! - Placeholder stubs for referenced but missing modules
//! - Empty directories for referenced but missing roles
//! - Symlinks making a collection or role under development look installed
//! - Environment exports pointing at the mock tree

use anyhow::Result;
use clap::Parser;

mod cli;
mod config;
mod core;
mod mock;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    crate::core::logging::init_tracing(
        cli.log_json,
        crate::core::logging::level_for(cli.quiet, cli.verbose),
    );
    cli::run_or_exit(cli)
}
