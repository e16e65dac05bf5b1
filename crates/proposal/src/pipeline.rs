//! Ordered composition of proposal sources.
//!
//! # Bulk Stage
//!
//! Sources run in registration order. Each writes into a scratch map which
//! is then merged into the shared map by rank: a later source replaces an
//! earlier proposal only when its [`Provenance`] is strictly higher.
//!
//! # Dynamic Stage
//!
//! On a rename, sources interested in the renamed entry's kind run in the
//! same order and write into the shared map directly.
//!
//! [`Provenance`]: namesake_entry::Provenance

use namesake_entry::{EntryIndex, JsonMappingReader, MappingTree, ProposedNames};
use namesake_field_names::{FieldNameRegistry, RegistryError};
use namesake_package_overrides::{OverrideDocument, OverrideError};
use tracing::{debug, error};

use crate::config::PipelineConfig;
use crate::error::{ProposalError, Result};
use crate::field_names::FieldNameProposer;
use crate::mappings::MappingTreeProposer;
use crate::overrides::PackageOverrideProposer;
use crate::proposer::{NameProposer, RenameEvent};

#[cfg(test)]
mod tests;

#[derive(Default)]
pub struct ProposerPipeline {
	proposers: Vec<Box<dyn NameProposer>>,
}

impl ProposerPipeline {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a source after every registered one.
	pub fn push(&mut self, proposer: impl NameProposer + 'static) {
		self.proposers.push(Box::new(proposer));
	}

	pub fn with(mut self, proposer: impl NameProposer + 'static) -> Self {
		self.push(proposer);
		self
	}

	pub fn ids(&self) -> impl Iterator<Item = &str> {
		self.proposers.iter().map(|proposer| proposer.id())
	}

	pub fn len(&self) -> usize {
		self.proposers.len()
	}

	pub fn is_empty(&self) -> bool {
		self.proposers.is_empty()
	}

	/// Builds the configured sources in fixed order: field names, mappings,
	/// package overrides.
	///
	/// Unreadable documents are logged and their source is left out.
	/// Malformed documents fail the build.
	pub fn from_config(config: &PipelineConfig, index: &dyn EntryIndex) -> Result<Self> {
		let mut pipeline = Self::new();

		if let Some(section) = &config.field_names {
			match FieldNameRegistry::load_verified(&section.path, index, section.verification) {
				Ok(registry) => pipeline.push(FieldNameProposer::new(registry)),
				Err(RegistryError::Io { path, error }) => {
					error!(path = %path.display(), error = %error, "failed to read field names");
				}
				Err(e) => return Err(e.into()),
			}
		}

		let mappings = match &config.mappings {
			Some(section) => {
				let proposer = MappingTreeProposer::load(&JsonMappingReader, &section.path);
				let tree = proposer.tree().clone();
				pipeline.push(proposer);
				tree
			}
			None => MappingTree::default(),
		};

		if let Some(section) = &config.package_overrides {
			match OverrideDocument::read(&section.path) {
				Ok(document) => {
					pipeline.push(PackageOverrideProposer::new(&document, &mappings)?);
				}
				Err(OverrideError::Io { path, error }) => {
					error!(path = %path.display(), error = %error, "failed to read package overrides");
				}
				Err(e) => return Err(ProposalError::Overrides(e)),
			}
		}

		debug!(proposers = pipeline.len(), "built proposer pipeline");
		Ok(pipeline)
	}

	/// Runs the bulk stage of every source.
	pub fn insert_proposed_names(&mut self, index: &dyn EntryIndex, names: &mut ProposedNames) -> Result<()> {
		for proposer in &mut self.proposers {
			let mut scratch = ProposedNames::new();
			proposer.insert_proposed_names(index, &mut scratch)?;
			let offered = scratch.len();
			let accepted = names.merge_ranked(scratch);
			debug!(proposer = proposer.id(), offered, accepted, "merged proposals");
		}
		Ok(())
	}

	/// Runs the dynamic stage of every source interested in `event`.
	pub fn propose_dynamic_names(&mut self, event: &RenameEvent, names: &mut ProposedNames) -> Result<()> {
		let kind = event.entry.kind();
		for proposer in &mut self.proposers {
			if proposer.handles(kind) {
				proposer.propose_dynamic_names(event, names)?;
			}
		}
		Ok(())
	}
}
