//! Reading, writing and maintaining override documents.
//!
//! Documents keep source order in memory but are always written sorted by
//! class, tab-indented, with a trailing newline, so that writing equal
//! content twice produces identical bytes.

use std::collections::BTreeMap;
use std::path::Path;

use indexmap::IndexMap;
use namesake_entry::name::split_package;
use namesake_entry::{ClassEntry, MappingTree, OrderedDocument};
use rustc_hash::FxHashSet as HashSet;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{InvalidOverrides, OverrideError, OverrideViolation, Result};
use crate::path::PackagePath;


/// A mapping from obfuscated class to overriding package path.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OverrideDocument {
	entries: IndexMap<ClassEntry, PackagePath>,
}

impl OverrideDocument {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn parse(input: &str) -> Result<Self> {
		Self::from_document(OrderedDocument::parse(input)?)
	}

	/// Reads a document, preserving source order.
	pub fn read(path: impl AsRef<Path>) -> Result<Self> {
		Self::from_document(OrderedDocument::read(path)?)
	}

	fn from_document(document: OrderedDocument<PackagePath>) -> Result<Self> {
		let entries = document
			.into_unique()?
			.into_iter()
			.map(|(class, path)| (ClassEntry::new(class), path))
			.collect();
		Ok(Self { entries })
	}

	/// Serializes the document in canonical form.
	pub fn to_canonical_string(&self) -> Result<String> {
		let sorted: BTreeMap<&str, &PackagePath> = self
			.entries
			.iter()
			.map(|(class, path)| (class.full_name(), path))
			.collect();

		let mut out = Vec::new();
		let mut serializer =
			serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"\t"));
		sorted
			.serialize(&mut serializer)
			.map_err(OverrideError::Parse)?;
		out.push(b'\n');

		// serde_json only emits UTF-8.
		Ok(String::from_utf8_lossy(&out).into_owned())
	}

	/// Writes the document in canonical form.
	pub fn write(&self, path: impl AsRef<Path>) -> Result<()> {
		let path = path.as_ref();
		let content = self.to_canonical_string()?;
		std::fs::write(path, content).map_err(|error| OverrideError::Io {
			path: path.to_path_buf(),
			error,
		})
	}

	/// Seeds a document from the package placements of `mappings`.
	///
	/// Every top-level class whose proposed name has a package gets that
	/// package as its override, so merging the result back over `mappings`
	/// changes nothing.
	pub fn create_from(mappings: &MappingTree) -> Self {
		let entries = mappings
			.classes()
			.filter_map(|(class, node)| {
				let (package, _) = split_package(node.target_name()?);
				Some((class.clone(), PackagePath::parse(package?)))
			})
			.collect();
		Self { entries }
	}

	/// Keeps the overrides whose class still exists in `mappings`.
	///
	/// Never adds entries, so applying it twice equals applying it once.
	pub fn update(&self, mappings: &MappingTree) -> Self {
		let mut known: HashSet<&ClassEntry> = HashSet::default();
		mappings.walk(|node| {
			if let Some(class) = node.entry().as_class() {
				known.insert(class);
			}
		});

		let entries: IndexMap<ClassEntry, PackagePath> = self
			.entries
			.iter()
			.filter(|(class, _)| known.contains(class))
			.map(|(class, path)| (class.clone(), path.clone()))
			.collect();

		let dropped = self.entries.len() - entries.len();
		if dropped > 0 {
			tracing::debug!(dropped, "dropped overrides for removed classes");
		}
		Self { entries }
	}

	/// Checks every segment of every entry, collecting all violations.
	pub fn validate(&self) -> std::result::Result<(), InvalidOverrides> {
		let violations: Vec<OverrideViolation> = self
			.entries
			.iter()
			.flat_map(|(class, path)| {
				path.violations()
					.into_iter()
					.map(|(segment, rule)| OverrideViolation {
						class: class.clone(),
						segment: segment.to_string(),
						rule,
					})
			})
			.collect();

		if violations.is_empty() {
			Ok(())
		} else {
			Err(InvalidOverrides { violations })
		}
	}

	pub fn get(&self, class: &ClassEntry) -> Option<&PackagePath> {
		self.entries.get(class)
	}

	pub fn insert(&mut self, class: ClassEntry, path: PackagePath) -> Option<PackagePath> {
		self.entries.insert(class, path)
	}

	pub fn iter(&self) -> impl Iterator<Item = (&ClassEntry, &PackagePath)> {
		self.entries.iter()
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
