//! The proposed-name store.
//!
//! Every proposer writes into one [`ProposedNames`] map, passed by reference
//! into each call. Conflicts between sources are settled by [`Provenance`].

use rustc_hash::FxHashMap as HashMap;

use crate::entry::Entry;

/// Which kind of source produced a proposal.
///
/// Variants are declared from lowest to highest precedence, so the derived
/// ordering is the conflict ranking: user overrides outrank authoritative
/// proposals, which outrank inherited and fallback-derived ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Provenance {
	Inherited,
	JarProposed,
	UserOverride,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProposedName {
	pub target: String,
	pub provenance: Provenance,
}

impl ProposedName {
	pub fn new(target: impl Into<String>, provenance: Provenance) -> Self {
		Self {
			target: target.into(),
			provenance,
		}
	}
}

#[derive(Clone, Debug, Default)]
pub struct ProposedNames {
	names: HashMap<Entry, ProposedName>,
}

impl ProposedNames {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn get(&self, entry: &Entry) -> Option<&ProposedName> {
		self.names.get(entry)
	}

	pub fn target(&self, entry: &Entry) -> Option<&str> {
		self.names.get(entry).map(|name| name.target.as_str())
	}

	/// Stores `name` unconditionally, returning the replaced proposal.
	pub fn insert(&mut self, entry: Entry, name: ProposedName) -> Option<ProposedName> {
		self.names.insert(entry, name)
	}

	/// Stores `name` if the entry has no proposal yet or `name` outranks it.
	///
	/// Returns whether the store changed.
	pub fn offer(&mut self, entry: Entry, name: ProposedName) -> bool {
		match self.names.get(&entry) {
			Some(existing) if existing.provenance >= name.provenance => false,
			_ => {
				self.names.insert(entry, name);
				true
			}
		}
	}

	/// Offers every proposal of `other`, in no particular order.
	pub fn merge_ranked(&mut self, other: ProposedNames) -> usize {
		other
			.names
			.into_iter()
			.filter(|(entry, name)| self.offer(entry.clone(), name.clone()))
			.count()
	}

	pub fn remove(&mut self, entry: &Entry) -> Option<ProposedName> {
		self.names.remove(entry)
	}

	pub fn contains(&self, entry: &Entry) -> bool {
		self.names.contains_key(entry)
	}

	pub fn len(&self) -> usize {
		self.names.len()
	}

	pub fn is_empty(&self) -> bool {
		self.names.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&Entry, &ProposedName)> {
		self.names.iter()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::entry::ClassEntry;

	fn class(name: &str) -> Entry {
		Entry::Class(ClassEntry::new(name))
	}

	#[test]
	fn offer_respects_ranking() {
		let mut names = ProposedNames::new();
		assert!(names.offer(class("a"), ProposedName::new("x/A", Provenance::JarProposed)));
		assert!(!names.offer(class("a"), ProposedName::new("y/A", Provenance::Inherited)));
		assert!(!names.offer(class("a"), ProposedName::new("z/A", Provenance::JarProposed)));
		assert_eq!(names.target(&class("a")), Some("x/A"));

		assert!(names.offer(class("a"), ProposedName::new("o/A", Provenance::UserOverride)));
		assert_eq!(names.target(&class("a")), Some("o/A"));
	}

	#[test]
	fn merge_counts_accepted_offers() {
		let mut names = ProposedNames::new();
		names.insert(class("a"), ProposedName::new("keep", Provenance::UserOverride));

		let mut later = ProposedNames::new();
		later.insert(class("a"), ProposedName::new("lose", Provenance::JarProposed));
		later.insert(class("b"), ProposedName::new("new", Provenance::Inherited));

		assert_eq!(names.merge_ranked(later), 1);
		assert_eq!(names.target(&class("a")), Some("keep"));
		assert_eq!(names.target(&class("b")), Some("new"));
	}
}
