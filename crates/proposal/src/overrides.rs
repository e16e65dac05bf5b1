use namesake_entry::{Entry, EntryIndex, EntryKind, MappingTree, ProposedNames};
use namesake_package_overrides::{InvalidOverrides, OverrideDocument, OverrideMerge};
use tracing::debug;

use crate::error::Result;
use crate::proposer::{NameProposer, RenameEvent};

/// Proposes class names from a package override document.
#[derive(Clone, Debug)]
pub struct PackageOverrideProposer {
	merge: OverrideMerge,
}

impl PackageOverrideProposer {
	pub const ID: &'static str = "package_overrides";

	/// Merges `overrides` over `mappings`. An invalid document is rejected
	/// as a whole.
	pub fn new(overrides: &OverrideDocument, mappings: &MappingTree) -> std::result::Result<Self, InvalidOverrides> {
		Ok(Self {
			merge: OverrideMerge::new(overrides, mappings)?,
		})
	}

	pub fn merge(&self) -> &OverrideMerge {
		&self.merge
	}
}

impl NameProposer for PackageOverrideProposer {
	fn id(&self) -> &str {
		Self::ID
	}

	fn interests(&self) -> &[EntryKind] {
		&[EntryKind::Class]
	}

	fn insert_proposed_names(&mut self, _index: &dyn EntryIndex, names: &mut ProposedNames) -> Result<()> {
		self.merge.insert_proposed_names(names);
		Ok(())
	}

	fn propose_dynamic_names(&mut self, event: &RenameEvent, names: &mut ProposedNames) -> Result<()> {
		let Entry::Class(class) = &event.entry else {
			return Ok(());
		};
		let changed = self.merge.on_rename(class, &event.new, names);
		debug!(class = %class, changed = changed.len(), "applied package rename");
		Ok(())
	}
}
