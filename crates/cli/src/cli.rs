use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "namesake")]
#[command(about = "Maintain package override documents")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Verbose logging
	#[arg(short, long, global = true)]
	pub verbose: bool,

	/// Subcommand to execute.
	#[command(subcommand)]
	pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
	/// Seed an override document from the current mapping placements
	Generate {
		#[command(flatten)]
		mappings: MappingsArg,

		/// Where to write the new document
		#[arg(short, long, value_name = "PATH")]
		output: PathBuf,
	},
	/// Drop overrides for classes no longer in the mappings
	Update {
		#[command(flatten)]
		mappings: MappingsArg,

		/// Existing override document
		#[arg(long, value_name = "PATH")]
		overrides: PathBuf,

		/// Where to write the result (defaults to rewriting the input)
		#[arg(short, long, value_name = "PATH")]
		output: Option<PathBuf>,
	},
	/// Validate an override document against the mappings
	Check {
		#[command(flatten)]
		mappings: MappingsArg,

		/// Override document to validate
		#[arg(long, value_name = "PATH")]
		overrides: PathBuf,
	},
}

/// The authoritative mapping tree.
#[derive(Args, Debug)]
pub struct MappingsArg {
	/// Mapping tree in JSON form
	#[arg(short = 'm', long = "mappings", value_name = "PATH")]
	pub path: PathBuf,
}
