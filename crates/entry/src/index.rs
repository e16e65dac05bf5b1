//! The program index collaborator.
//!
//! The index reports which classes and fields exist and how classes relate
//! to each other. Namesake never builds one from bytecode itself; hosts
//! implement [`EntryIndex`] over their own analysis, and [`MemoryIndex`]
//! covers hosts that already have the facts at hand.

use indexmap::IndexMap;

use crate::entry::{ClassEntry, FieldEntry};

/// A field known to the index.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldInfo {
	pub entry: FieldEntry,
	pub is_static: bool,
}

pub trait EntryIndex {
	fn has_class(&self, class: &ClassEntry) -> bool;

	/// All classes, in a stable order.
	fn classes(&self) -> Vec<ClassEntry>;

	/// Fields declared by `class`, in declaration order.
	fn fields(&self, class: &ClassEntry) -> Vec<FieldInfo>;

	/// Direct supertypes of `class` (superclass first, then interfaces).
	fn super_types(&self, class: &ClassEntry) -> Vec<ClassEntry>;
}

#[derive(Clone, Debug, Default)]
struct ClassInfo {
	super_types: Vec<ClassEntry>,
	fields: Vec<FieldInfo>,
}

/// An [`EntryIndex`] backed by explicitly registered classes.
#[derive(Clone, Debug, Default)]
pub struct MemoryIndex {
	classes: IndexMap<ClassEntry, ClassInfo>,
}

impl MemoryIndex {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers `class` with its direct supertypes.
	pub fn with_class(mut self, class: &str, super_types: &[&str]) -> Self {
		let info = self.classes.entry(ClassEntry::new(class)).or_default();
		info.super_types = super_types.iter().map(|s| ClassEntry::new(*s)).collect();
		self
	}

	/// Registers a field; its owner is registered if it was not already.
	pub fn with_field(mut self, owner: &str, name: &str, descriptor: &str, is_static: bool) -> Self {
		let owner = ClassEntry::new(owner);
		let entry = FieldEntry::new(owner.clone(), name, descriptor);
		self.classes
			.entry(owner)
			.or_default()
			.fields
			.push(FieldInfo { entry, is_static });
		self
	}
}

impl EntryIndex for MemoryIndex {
	fn has_class(&self, class: &ClassEntry) -> bool {
		self.classes.contains_key(class)
	}

	fn classes(&self) -> Vec<ClassEntry> {
		self.classes.keys().cloned().collect()
	}

	fn fields(&self, class: &ClassEntry) -> Vec<FieldInfo> {
		self.classes
			.get(class)
			.map(|info| info.fields.clone())
			.unwrap_or_default()
	}

	fn super_types(&self, class: &ClassEntry) -> Vec<ClassEntry> {
		self.classes
			.get(class)
			.map(|info| info.super_types.clone())
			.unwrap_or_default()
	}
}
