//! Identifiers for the entries of an obfuscated program.
//!
//! Class names use internal form (`net/example/Foo`, inner classes joined
//! with `$`). Members are identified by owner, name and descriptor.

use std::fmt;


/// The kind of an [`Entry`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntryKind {
	Class,
	Field,
	Method,
}

/// A class, identified by its full internal name.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ClassEntry {
	name: Box<str>,
}

impl ClassEntry {
	pub fn new(name: impl Into<Box<str>>) -> Self {
		Self { name: name.into() }
	}

	pub fn full_name(&self) -> &str {
		&self.name
	}

	/// Returns `true` for nested classes (`Outer$Inner`).
	pub fn is_inner(&self) -> bool {
		self.name.contains('$')
	}

	/// Returns the directly enclosing class of a nested class.
	pub fn outer(&self) -> Option<ClassEntry> {
		self.name
			.rsplit_once('$')
			.map(|(outer, _)| ClassEntry::new(outer))
	}
}

impl fmt::Display for ClassEntry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.name)
	}
}

/// A field, identified by owner, name and type descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldEntry {
	owner: ClassEntry,
	name: Box<str>,
	descriptor: Box<str>,
}

impl FieldEntry {
	pub fn new(owner: ClassEntry, name: impl Into<Box<str>>, descriptor: impl Into<Box<str>>) -> Self {
		Self {
			owner,
			name: name.into(),
			descriptor: descriptor.into(),
		}
	}

	pub fn owner(&self) -> &ClassEntry {
		&self.owner
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn descriptor(&self) -> &str {
		&self.descriptor
	}

	/// Returns the declared class type of this field.
	///
	/// Primitive and array descriptors have no class type.
	pub fn object_type(&self) -> Option<ClassEntry> {
		self.descriptor
			.strip_prefix('L')
			.and_then(|rest| rest.strip_suffix(';'))
			.filter(|name| !name.is_empty())
			.map(ClassEntry::new)
	}
}

impl fmt::Display for FieldEntry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}.{}:{}", self.owner, self.name, self.descriptor)
	}
}

/// A method, identified by owner, name and method descriptor.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MethodEntry {
	owner: ClassEntry,
	name: Box<str>,
	descriptor: Box<str>,
}

impl MethodEntry {
	pub fn new(owner: ClassEntry, name: impl Into<Box<str>>, descriptor: impl Into<Box<str>>) -> Self {
		Self {
			owner,
			name: name.into(),
			descriptor: descriptor.into(),
		}
	}

	pub fn owner(&self) -> &ClassEntry {
		&self.owner
	}

	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn descriptor(&self) -> &str {
		&self.descriptor
	}
}

impl fmt::Display for MethodEntry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}.{}{}", self.owner, self.name, self.descriptor)
	}
}

/// Any nameable entry of the program.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Entry {
	Class(ClassEntry),
	Field(FieldEntry),
	Method(MethodEntry),
}

impl Entry {
	pub fn kind(&self) -> EntryKind {
		match self {
			Entry::Class(_) => EntryKind::Class,
			Entry::Field(_) => EntryKind::Field,
			Entry::Method(_) => EntryKind::Method,
		}
	}

	pub fn as_class(&self) -> Option<&ClassEntry> {
		match self {
			Entry::Class(class) => Some(class),
			_ => None,
		}
	}

	/// Returns the entry that contains this one in the program structure.
	///
	/// Members are contained by their owner, nested classes by their outer
	/// class. Top-level classes have no parent.
	pub fn parent(&self) -> Option<Entry> {
		match self {
			Entry::Class(class) => class.outer().map(Entry::Class),
			Entry::Field(field) => Some(Entry::Class(field.owner.clone())),
			Entry::Method(method) => Some(Entry::Class(method.owner.clone())),
		}
	}
}

impl From<ClassEntry> for Entry {
	fn from(class: ClassEntry) -> Self {
		Entry::Class(class)
	}
}

impl From<FieldEntry> for Entry {
	fn from(field: FieldEntry) -> Self {
		Entry::Field(field)
	}
}

impl From<MethodEntry> for Entry {
	fn from(method: MethodEntry) -> Self {
		Entry::Method(method)
	}
}

impl fmt::Display for Entry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Entry::Class(class) => class.fmt(f),
			Entry::Field(field) => field.fmt(f),
			Entry::Method(method) => method.fmt(f),
		}
	}
}
