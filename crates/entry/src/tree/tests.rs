use pretty_assertions::assert_eq;

use super::*;

const TREE: &str = r#"[
	{
		"obf": "c",
		"name": "a/C",
		"fields": [{ "obf": "a", "desc": "Lc$a;", "name": "hatsuneMiku" }],
		"classes": [{ "obf": "c$a", "name": "a/C$Inner" }]
	},
	{
		"obf": "b",
		"methods": [{ "obf": "a", "desc": "(Ld;)V", "name": "meow" }]
	}
]"#;

#[test]
fn parses_nested_layout() {
	let tree = JsonMappingReader::parse(TREE).unwrap();
	assert_eq!(tree.root_nodes().len(), 2);

	let c = tree.find_class(&ClassEntry::new("c")).unwrap();
	assert_eq!(c.target_name(), Some("a/C"));
	assert_eq!(c.child_nodes().len(), 2);

	let inner = tree.find_class(&ClassEntry::new("c$a")).unwrap();
	assert_eq!(inner.target_name(), Some("a/C$Inner"));

	let b = tree.find_class(&ClassEntry::new("b")).unwrap();
	assert_eq!(b.target_name(), None);
	let method = &b.child_nodes()[0];
	assert_eq!(
		method.entry(),
		&Entry::Method(MethodEntry::new(ClassEntry::new("b"), "a", "(Ld;)V"))
	);
	assert_eq!(method.target_name(), Some("meow"));
}

#[test]
fn walk_visits_parents_first() {
	let tree = JsonMappingReader::parse(TREE).unwrap();
	let mut seen = Vec::new();
	tree.walk(|node| seen.push(node.entry().to_string()));
	assert_eq!(seen, ["c", "c.a:Lc$a;", "c$a", "b", "b.a(Ld;)V"]);
}

#[test]
fn unknown_class_is_absent() {
	let tree = JsonMappingReader::parse(TREE).unwrap();
	assert!(tree.find_class(&ClassEntry::new("zz")).is_none());
	assert!(tree.find_class(&ClassEntry::new("zz$a")).is_none());
}

#[test]
fn reads_from_disk() {
	let dir = tempfile::tempdir().unwrap();
	let path = dir.path().join("tree.json");
	std::fs::write(&path, TREE).unwrap();

	let tree = JsonMappingReader.read(&path).unwrap();
	assert_eq!(tree.classes().count(), 2);
}
