use std::path::Path;

use namesake_entry::{
	EntryIndex, EntryKind, MappingReader, MappingTree, ProposedName, ProposedNames, Provenance,
};
use tracing::{debug, error};

use crate::error::Result;
use crate::proposer::{NameProposer, RenameEvent};

/// Proposes the names of the authoritative mapping tree.
#[derive(Clone, Debug, Default)]
pub struct MappingTreeProposer {
	tree: MappingTree,
}

impl MappingTreeProposer {
	pub const ID: &'static str = "mappings";

	pub fn new(tree: MappingTree) -> Self {
		Self { tree }
	}

	/// Reads the tree at `path`. A tree that cannot be read is logged and
	/// replaced by an empty one, so the proposer contributes nothing.
	pub fn load(reader: &dyn MappingReader, path: &Path) -> Self {
		match reader.read(path) {
			Ok(tree) => Self::new(tree),
			Err(e) => {
				error!(path = %path.display(), error = %e, "failed to read mappings");
				Self::default()
			}
		}
	}

	pub fn tree(&self) -> &MappingTree {
		&self.tree
	}
}

impl NameProposer for MappingTreeProposer {
	fn id(&self) -> &str {
		Self::ID
	}

	fn interests(&self) -> &[EntryKind] {
		&[EntryKind::Class]
	}

	fn insert_proposed_names(&mut self, _index: &dyn EntryIndex, names: &mut ProposedNames) -> Result<()> {
		let mut proposed = 0usize;
		self.tree.walk(|node| {
			if let Some(target) = node.target_name() {
				proposed += usize::from(names.offer(
					node.entry().clone(),
					ProposedName::new(target, Provenance::JarProposed),
				));
			}
		});
		debug!(proposed, "proposed mapping names");
		Ok(())
	}

	/// Class renames may one day re-match packages against the tree; for now
	/// the tree's proposals stay as loaded.
	fn propose_dynamic_names(&mut self, event: &RenameEvent, _names: &mut ProposedNames) -> Result<()> {
		tracing::trace!(entry = %event.entry, "no dynamic mapping proposals");
		Ok(())
	}
}
