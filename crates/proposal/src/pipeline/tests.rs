use namesake_entry::{ClassEntry, Entry, EntryKind, MemoryIndex, ProposedName, Provenance};
use pretty_assertions::assert_eq;

use super::*;

/// Proposes fixed names and counts dynamic calls.
struct Fixed {
	id: &'static str,
	names: Vec<(&'static str, &'static str, Provenance)>,
	interests: &'static [EntryKind],
	dynamic_calls: std::rc::Rc<std::cell::Cell<usize>>,
}

impl Fixed {
	fn new(id: &'static str, names: Vec<(&'static str, &'static str, Provenance)>) -> Self {
		Self {
			id,
			names,
			interests: &[],
			dynamic_calls: Default::default(),
		}
	}
}

impl NameProposer for Fixed {
	fn id(&self) -> &str {
		self.id
	}

	fn interests(&self) -> &[EntryKind] {
		self.interests
	}

	fn insert_proposed_names(&mut self, _index: &dyn EntryIndex, names: &mut ProposedNames) -> Result<()> {
		for (class, target, provenance) in &self.names {
			names.insert(
				Entry::Class(ClassEntry::new(*class)),
				ProposedName::new(*target, *provenance),
			);
		}
		Ok(())
	}

	fn propose_dynamic_names(&mut self, _event: &RenameEvent, _names: &mut ProposedNames) -> Result<()> {
		self.dynamic_calls.set(self.dynamic_calls.get() + 1);
		Ok(())
	}
}

fn target(names: &ProposedNames, class: &str) -> Option<String> {
	names
		.target(&Entry::Class(ClassEntry::new(class)))
		.map(str::to_string)
}

#[test]
fn later_sources_replace_only_by_rank() {
	let mut pipeline = ProposerPipeline::new()
		.with(Fixed::new(
			"first",
			vec![
				("a", "first/A", Provenance::Inherited),
				("b", "first/B", Provenance::JarProposed),
				("c", "first/C", Provenance::JarProposed),
			],
		))
		.with(Fixed::new(
			"second",
			vec![
				("a", "second/A", Provenance::JarProposed),
				("b", "second/B", Provenance::JarProposed),
				("c", "second/C", Provenance::UserOverride),
				("d", "second/D", Provenance::Inherited),
			],
		));

	let mut names = ProposedNames::new();
	pipeline
		.insert_proposed_names(&MemoryIndex::new(), &mut names)
		.unwrap();

	assert_eq!(target(&names, "a"), Some("second/A".to_string()));
	assert_eq!(target(&names, "b"), Some("first/B".to_string()));
	assert_eq!(target(&names, "c"), Some("second/C".to_string()));
	assert_eq!(target(&names, "d"), Some("second/D".to_string()));
}

#[test]
fn dynamic_stage_runs_interested_sources_only() {
	let mut classes = Fixed::new("classes", Vec::new());
	classes.interests = &[EntryKind::Class];
	let class_calls = classes.dynamic_calls.clone();

	let mut fields = Fixed::new("fields", Vec::new());
	fields.interests = &[EntryKind::Field];
	let field_calls = fields.dynamic_calls.clone();

	let mut pipeline = ProposerPipeline::new().with(classes).with(fields);
	assert_eq!(pipeline.ids().collect::<Vec<_>>(), ["classes", "fields"]);

	let event = RenameEvent {
		entry: Entry::Class(ClassEntry::new("a")),
		old: None,
		new: "x/A".to_string(),
	};
	pipeline
		.propose_dynamic_names(&event, &mut ProposedNames::new())
		.unwrap();

	assert_eq!(class_calls.get(), 1);
	assert_eq!(field_calls.get(), 0);
}

#[test]
fn empty_config_builds_nothing() {
	let pipeline = ProposerPipeline::from_config(&PipelineConfig::default(), &MemoryIndex::new()).unwrap();
	assert!(pipeline.is_empty());
}

#[test]
fn missing_documents_are_skipped() {
	let dir = tempfile::tempdir().unwrap();
	let config = PipelineConfig::parse(&format!(
		r#"{{
			"field_names": {{ "path": {f:?} }},
			"mappings": {{ "path": {m:?} }},
			"package_overrides": {{ "path": {o:?} }}
		}}"#,
		f = dir.path().join("f.json").display().to_string(),
		m = dir.path().join("m.json").display().to_string(),
		o = dir.path().join("o.json").display().to_string(),
	))
	.unwrap();

	let pipeline = ProposerPipeline::from_config(&config, &MemoryIndex::new()).unwrap();
	assert_eq!(pipeline.ids().collect::<Vec<_>>(), [MappingTreeProposer::ID]);
}

#[test]
fn malformed_documents_fail_the_build() {
	let dir = tempfile::tempdir().unwrap();
	let overrides = dir.path().join("o.json");
	std::fs::write(&overrides, r#"{ "a": "Bad" }"#).unwrap();

	let config = PipelineConfig {
		package_overrides: Some(crate::config::SourceConfig { path: overrides }),
		..Default::default()
	};
	let result = ProposerPipeline::from_config(&config, &MemoryIndex::new());
	assert!(matches!(
		result,
		Err(ProposalError::Overrides(OverrideError::Invalid(_)))
	));
}
