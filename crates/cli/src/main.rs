//! The `namesake` binary.
//!
//! Maintains package override documents outside of any naming session:
//! seeding them from a mapping tree, dropping stale entries and checking
//! them.

mod cli;
mod commands;

use clap::Parser;

use crate::cli::Cli;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);
	commands::run(cli.command)
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("namesake=debug,info")
		} else {
			EnvFilter::new("info")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(verbose)
		.init();
}
