//! The capability shared by every proposal source.

use namesake_entry::{Entry, EntryIndex, EntryKind, ProposedNames};

use crate::error::Result;

/// A change of one entry's live mapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenameEvent {
	pub entry: Entry,
	/// The mapping before the change, if the entry had one.
	pub old: Option<String>,
	pub new: String,
}

/// A source of proposed names.
///
/// Sources write into the map they are handed and never keep one of their
/// own. [`insert_proposed_names`] runs once when a session opens;
/// [`propose_dynamic_names`] runs for every accepted rename of an entry
/// whose kind the source is interested in.
///
/// [`insert_proposed_names`]: NameProposer::insert_proposed_names
/// [`propose_dynamic_names`]: NameProposer::propose_dynamic_names
pub trait NameProposer {
	/// Stable identifier, used in logs.
	fn id(&self) -> &str;

	/// Entry kinds whose renames this source reacts to.
	fn interests(&self) -> &[EntryKind] {
		&[]
	}

	fn handles(&self, kind: EntryKind) -> bool {
		self.interests().contains(&kind)
	}

	/// Bulk-populates `names` from this source.
	fn insert_proposed_names(&mut self, index: &dyn EntryIndex, names: &mut ProposedNames) -> Result<()>;

	/// Updates `names` after a live rename.
	fn propose_dynamic_names(&mut self, _event: &RenameEvent, _names: &mut ProposedNames) -> Result<()> {
		Ok(())
	}
}
