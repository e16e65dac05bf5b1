//! Per-class field name assignment.

use indexmap::IndexMap;
use namesake_entry::{ClassEntry, EntryIndex, FieldEntry, FieldInfo};
use rustc_hash::FxHashSet as HashSet;

use crate::{RegistryEntry, TypeResolver};

/// A name chosen for one field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldName {
	pub field: FieldEntry,
	pub name: String,
	/// The name came from the entry's fallback list.
	pub from_fallback: bool,
}

/// Chooses registry names for the fields of `class`.
///
/// Fields are grouped by the entry their type resolves to. An exclusive
/// entry shared by several fields names none of them. Otherwise fields take
/// the primary name in declaration order and fall back to the first
/// fallback not yet used in the class. No name is chosen twice per class.
pub fn assign_field_names<I>(resolver: &TypeResolver<'_, I>, class: &ClassEntry) -> Vec<FieldName>
where
	I: EntryIndex + ?Sized,
{
	let mut groups: IndexMap<&str, (&RegistryEntry, Vec<FieldInfo>)> = IndexMap::new();
	for field in resolver.index().fields(class) {
		let Some(ty) = field.entry.object_type() else {
			continue;
		};
		if let Some(entry) = resolver.resolve(&ty) {
			groups
				.entry(entry.type_name.as_str())
				.or_insert_with(|| (entry, Vec::new()))
				.1
				.push(field);
		}
	}

	let mut used: HashSet<String> = HashSet::default();
	let mut assigned = Vec::new();

	for (entry, fields) in groups.into_values() {
		if entry.exclusive && fields.len() > 1 {
			tracing::trace!(
				class = %class,
				type_name = %entry.type_name,
				fields = fields.len(),
				"exclusive type shared by several fields"
			);
			continue;
		}

		for field in fields {
			let primary = entry.name.for_field(field.is_static);
			let (name, from_fallback) = if !used.contains(primary) {
				(primary, false)
			} else {
				match entry.find_fallback(|name| !used.contains(name.for_field(field.is_static))) {
					Some(name) => (name.for_field(field.is_static), true),
					None => continue,
				}
			};

			used.insert(name.to_string());
			assigned.push(FieldName {
				field: field.entry,
				name: name.to_string(),
				from_fallback,
			});
		}
	}

	assigned
}

#[cfg(test)]
mod tests {
	use namesake_entry::MemoryIndex;
	use pretty_assertions::assert_eq;

	use super::*;
	use crate::FieldNameRegistry;

	const DOCUMENT: &str = r#"{
		"a/Pos": { "local_name": "pos", "fallback": ["origin", "target"] },
		"a/World": { "local_name": "world", "static_name": "LEVEL", "exclusive": true },
		"a/Entity": { "local_name": "entity", "inherit": true },
		"a/Owner": { "local_name": "entity", "fallback": ["owner"] }
	}"#;

	/// `field=name`, with a trailing `*` for fallback names.
	fn names(index: &MemoryIndex, class: &str) -> Vec<String> {
		let registry = FieldNameRegistry::parse(DOCUMENT).unwrap();
		let resolver = TypeResolver::new(&registry, index);
		assign_field_names(&resolver, &ClassEntry::new(class))
			.into_iter()
			.map(|f| {
				let marker = if f.from_fallback { "*" } else { "" };
				format!("{}={}{marker}", f.field.name(), f.name)
			})
			.collect()
	}

	#[test]
	fn single_field_takes_primary_name() {
		let index = MemoryIndex::new()
			.with_field("c", "a", "La/Pos;", false)
			.with_field("c", "b", "I", false)
			.with_field("c", "d", "La/World;", true);
		assert_eq!(
			names(&index, "c"),
			["a=pos", "d=LEVEL"]
		);
	}

	#[test]
	fn later_fields_use_fallbacks_in_order() {
		let index = MemoryIndex::new()
			.with_field("c", "a", "La/Pos;", false)
			.with_field("c", "b", "La/Pos;", false)
			.with_field("c", "d", "La/Pos;", false)
			.with_field("c", "e", "La/Pos;", false);
		assert_eq!(
			names(&index, "c"),
			["a=pos", "b=origin*", "d=target*"]
		);
	}

	#[test]
	fn shared_exclusive_type_names_nothing() {
		let index = MemoryIndex::new()
			.with_field("c", "a", "La/World;", false)
			.with_field("c", "b", "La/World;", false);
		assert!(names(&index, "c").is_empty());
	}

	#[test]
	fn names_are_unique_within_a_class() {
		let index = MemoryIndex::new()
			.with_class("a/Zombie", &["a/Entity"])
			.with_field("c", "a", "La/Zombie;", false)
			.with_field("c", "b", "La/Owner;", false);
		assert_eq!(
			names(&index, "c"),
			["a=entity", "b=owner*"]
		);
	}
}
