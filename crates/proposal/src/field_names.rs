use namesake_entry::{Entry, EntryIndex, ProposedName, ProposedNames, Provenance};
use namesake_field_names::{FieldNameRegistry, TypeResolver, assign_field_names};
use tracing::debug;

use crate::error::Result;
use crate::proposer::NameProposer;

/// Proposes field names from the type-keyed registry.
///
/// Every proposal is [`Provenance::Inherited`], so any other source naming
/// the same field wins.
#[derive(Clone, Debug)]
pub struct FieldNameProposer {
	registry: FieldNameRegistry,
}

impl FieldNameProposer {
	pub const ID: &'static str = "field_names";

	pub fn new(registry: FieldNameRegistry) -> Self {
		Self { registry }
	}

	pub fn registry(&self) -> &FieldNameRegistry {
		&self.registry
	}
}

impl NameProposer for FieldNameProposer {
	fn id(&self) -> &str {
		Self::ID
	}

	fn insert_proposed_names(&mut self, index: &dyn EntryIndex, names: &mut ProposedNames) -> Result<()> {
		let resolver = TypeResolver::new(&self.registry, index);
		let mut fallbacks = 0usize;

		for class in index.classes() {
			for assigned in assign_field_names(&resolver, &class) {
				fallbacks += usize::from(assigned.from_fallback);
				names.offer(
					Entry::Field(assigned.field),
					ProposedName::new(assigned.name, Provenance::Inherited),
				);
			}
		}

		debug!(proposed = names.len(), fallbacks, "proposed registry field names");
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use namesake_entry::{ClassEntry, FieldEntry, MemoryIndex};
	use pretty_assertions::assert_eq;

	use super::*;

	#[test]
	fn names_fields_across_classes() {
		let registry = FieldNameRegistry::parse(
			r#"{ "a/Pos": { "local_name": "pos", "fallback": ["origin"] }, "a/Level": "level" }"#,
		)
		.unwrap();
		let index = MemoryIndex::new()
			.with_field("x", "a", "La/Pos;", false)
			.with_field("x", "b", "La/Pos;", false)
			.with_field("y", "a", "La/Level;", true)
			.with_field("y", "b", "I", false);

		let mut proposer = FieldNameProposer::new(registry);
		let mut names = ProposedNames::new();
		proposer.insert_proposed_names(&index, &mut names).unwrap();

		let field = |owner: &str, name: &str, desc: &str| {
			Entry::Field(FieldEntry::new(ClassEntry::new(owner), name, desc))
		};
		assert_eq!(names.len(), 3);
		assert_eq!(names.target(&field("x", "a", "La/Pos;")), Some("pos"));
		assert_eq!(names.target(&field("x", "b", "La/Pos;")), Some("origin"));
		assert_eq!(names.target(&field("y", "a", "La/Level;")), Some("LEVEL"));
		assert_eq!(
			names.get(&field("y", "a", "La/Level;")).map(|name| name.provenance),
			Some(Provenance::Inherited)
		);
	}
}
