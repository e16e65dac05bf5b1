use std::path::Path;
use std::str::FromStr;

use indexmap::IndexMap;
use namesake_entry::{ClassEntry, EntryIndex, Name, OrderedDocument};
use serde::Deserialize;

use crate::error::{RegistryError, RegistryWarning, Result, missing_types_message};
use crate::parse::{RawValue, SCHEMA_KEY, parse_entry};


/// How registry type keys are checked against the program index.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeVerification {
	/// Skip verification.
	None,
	/// Log the unknown types once and keep loading.
	#[default]
	Warn,
	/// Fail the load when any type is unknown.
	Strict,
}

impl FromStr for TypeVerification {
	type Err = String;

	fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
		match value {
			"none" => Ok(TypeVerification::None),
			"warn" => Ok(TypeVerification::Warn),
			"strict" => Ok(TypeVerification::Strict),
			_ => Err(format!(
				"invalid type verification: '{value}' (expected none, warn or strict)"
			)),
		}
	}
}

/// The names the single significant field of one type should take.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryEntry {
	pub type_name: String,
	pub name: Name,
	/// The name may only be proposed when exactly one field of a class
	/// resolves to this entry.
	pub exclusive: bool,
	/// Subtypes without an entry of their own resolve through this one.
	pub inherit: bool,
	/// Alternatives for when `name` is already taken, in document order.
	pub fallback: Vec<Name>,
}

impl RegistryEntry {
	/// The bare-string form: a derived name with every flag off.
	pub fn shorthand(type_name: impl Into<String>, local: impl Into<String>) -> Self {
		Self {
			type_name: type_name.into(),
			name: Name::derived(local),
			exclusive: false,
			inherit: false,
			fallback: Vec::new(),
		}
	}

	/// Returns the first fallback accepted by `predicate`.
	pub fn find_fallback(&self, mut predicate: impl FnMut(&Name) -> bool) -> Option<&Name> {
		self.fallback.iter().find(|name| predicate(name))
	}
}

/// Field names keyed by fully-qualified obfuscated type.
///
/// Entries keep the order of the backing document. The registry is a
/// read-only snapshot once loaded; reloading builds a new one.
#[derive(Clone, Debug, Default)]
pub struct FieldNameRegistry {
	entries: IndexMap<String, RegistryEntry>,
	warnings: Vec<RegistryWarning>,
}

impl FieldNameRegistry {
	/// Parses a registry document.
	///
	/// Entries with a missing `local_name` are skipped and reported through
	/// [`FieldNameRegistry::warnings`]. A repeated type key aborts the parse.
	pub fn parse(input: &str) -> Result<Self> {
		Self::from_document(OrderedDocument::parse(input)?)
	}

	/// Loads a registry document from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		Self::from_document(OrderedDocument::read(path)?)
	}

	/// Loads a registry and checks its types against `index`.
	pub fn load_verified<I>(path: impl AsRef<Path>, index: &I, mode: TypeVerification) -> Result<Self>
	where
		I: EntryIndex + ?Sized,
	{
		let mut registry = Self::load(path)?;
		registry.verify(index, mode)?;
		Ok(registry)
	}

	fn from_document(document: OrderedDocument<RawValue>) -> Result<Self> {
		let raw = document.without_key(SCHEMA_KEY).into_unique()?;
		let mut warnings = Vec::new();
		let mut entries = IndexMap::with_capacity(raw.len());

		for (type_name, value) in raw {
			if let Some(entry) = parse_entry(&type_name, value, &mut warnings) {
				entries.insert(type_name, entry);
			}
		}

		tracing::debug!(
			entries = entries.len(),
			skipped = warnings.len(),
			"loaded field name registry"
		);
		Ok(Self { entries, warnings })
	}

	/// Checks every type key against `index` once, after the full document
	/// has been read.
	///
	/// In [`TypeVerification::Warn`] mode the unknown types are logged in a
	/// single message and recorded as a warning; in
	/// [`TypeVerification::Strict`] mode they fail with
	/// [`RegistryError::MissingTypes`].
	pub fn verify<I>(&mut self, index: &I, mode: TypeVerification) -> Result<()>
	where
		I: EntryIndex + ?Sized,
	{
		if mode == TypeVerification::None {
			return Ok(());
		}

		let missing: Vec<String> = self
			.entries
			.keys()
			.filter(|ty| !index.has_class(&ClassEntry::new(ty.as_str())))
			.cloned()
			.collect();
		if missing.is_empty() {
			return Ok(());
		}

		match mode {
			TypeVerification::Strict => Err(RegistryError::MissingTypes { types: missing }),
			_ => {
				tracing::warn!("{}", missing_types_message(&missing));
				self.warnings
					.push(RegistryWarning::MissingTypes { types: missing });
				Ok(())
			}
		}
	}

	/// Exact-key lookup. Supertypes are not consulted here; see
	/// [`crate::TypeResolver`].
	pub fn get(&self, type_name: &str) -> Option<&RegistryEntry> {
		self.entries.get(type_name)
	}

	/// Type keys in document order.
	pub fn types(&self) -> impl Iterator<Item = &str> {
		self.entries.keys().map(String::as_str)
	}

	pub fn entries(&self) -> impl Iterator<Item = &RegistryEntry> {
		self.entries.values()
	}

	/// Non-fatal problems found while loading and verifying.
	pub fn warnings(&self) -> &[RegistryWarning] {
		&self.warnings
	}

	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}
}
