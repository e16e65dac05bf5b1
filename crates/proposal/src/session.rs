//! An in-memory naming session.
//!
//! The session owns the live user mappings and the proposed names. Live
//! mappings always win over proposals for the same entry.

use namesake_entry::{Entry, EntryIndex, ProposedNames};
use rustc_hash::FxHashMap as HashMap;

use crate::error::Result;
use crate::pipeline::ProposerPipeline;
use crate::proposer::RenameEvent;

pub struct NamingSession {
	pipeline: ProposerPipeline,
	proposed: ProposedNames,
	live: HashMap<Entry, String>,
}

impl NamingSession {
	/// Opens a session by running the bulk stage of `pipeline`.
	pub fn open(mut pipeline: ProposerPipeline, index: &dyn EntryIndex) -> Result<Self> {
		let mut proposed = ProposedNames::new();
		pipeline.insert_proposed_names(index, &mut proposed)?;
		tracing::debug!(proposed = proposed.len(), "opened naming session");
		Ok(Self {
			pipeline,
			proposed,
			live: HashMap::default(),
		})
	}

	/// The effective name of `entry`: its live mapping, else its proposal.
	pub fn mapping(&self, entry: &Entry) -> Option<&str> {
		self.live
			.get(entry)
			.map(String::as_str)
			.or_else(|| self.proposed.target(entry))
	}

	pub fn live_mapping(&self, entry: &Entry) -> Option<&str> {
		self.live.get(entry).map(String::as_str)
	}

	pub fn proposed(&self) -> &ProposedNames {
		&self.proposed
	}

	/// Records a live mapping and lets interested sources react.
	///
	/// Setting an entry to its current live mapping is not a change and
	/// notifies nobody.
	pub fn put_mapping(&mut self, entry: Entry, name: impl Into<String>) -> Result<()> {
		let new = name.into();
		if self.live_mapping(&entry) == Some(new.as_str()) {
			return Ok(());
		}

		let old = self.mapping(&entry).map(str::to_string);
		self.live.insert(entry.clone(), new.clone());

		let event = RenameEvent { entry, old, new };
		self.pipeline
			.propose_dynamic_names(&event, &mut self.proposed)
	}
}
