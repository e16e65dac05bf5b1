//! Subcommand implementations.

use std::path::Path;

use anyhow::{Context, Result, bail};
use namesake_entry::{JsonMappingReader, MappingReader, MappingTree};
use namesake_package_overrides::{OverrideDocument, OverrideMerge};
use tracing::{info, warn};

use crate::cli::Command;

#[cfg(test)]
mod tests;

pub fn run(command: Command) -> Result<()> {
	match command {
		Command::Generate { mappings, output } => generate(&mappings.path, &output),
		Command::Update {
			mappings,
			overrides,
			output,
		} => {
			let output = output.unwrap_or_else(|| overrides.clone());
			update(&mappings.path, &overrides, &output)
		}
		Command::Check {
			mappings,
			overrides,
		} => check(&mappings.path, &overrides),
	}
}

fn read_mappings(path: &Path) -> Result<MappingTree> {
	JsonMappingReader
		.read(path)
		.with_context(|| format!("reading mappings from {}", path.display()))
}

fn read_overrides(path: &Path) -> Result<OverrideDocument> {
	OverrideDocument::read(path).with_context(|| format!("reading overrides from {}", path.display()))
}

pub fn generate(mappings: &Path, output: &Path) -> Result<()> {
	let tree = read_mappings(mappings)?;
	let document = OverrideDocument::create_from(&tree);
	document
		.write(output)
		.with_context(|| format!("writing overrides to {}", output.display()))?;
	info!(entries = document.len(), path = %output.display(), "generated overrides");
	Ok(())
}

pub fn update(mappings: &Path, overrides: &Path, output: &Path) -> Result<()> {
	let tree = read_mappings(mappings)?;
	let old = read_overrides(overrides)?;
	let new = old.update(&tree);
	new.write(output)
		.with_context(|| format!("writing overrides to {}", output.display()))?;
	info!(
		kept = new.len(),
		dropped = old.len() - new.len(),
		path = %output.display(),
		"updated overrides"
	);
	Ok(())
}

pub fn check(mappings: &Path, overrides: &Path) -> Result<()> {
	let tree = read_mappings(mappings)?;
	let document = read_overrides(overrides)?;

	let stale = document.len() - document.update(&tree).len();
	if stale > 0 {
		warn!(stale, "overrides name classes missing from the mappings");
	}

	if let Err(invalid) = OverrideMerge::new(&document, &tree) {
		bail!("{}: {invalid}", overrides.display());
	}
	info!(entries = document.len(), "overrides are valid");
	Ok(())
}
