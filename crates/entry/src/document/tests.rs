use pretty_assertions::assert_eq;

use super::*;

#[test]
fn keeps_source_order() {
	let doc: OrderedDocument<String> =
		OrderedDocument::parse(r#"{ "z": "1", "a": "2", "m": "3" }"#).unwrap();
	let keys: Vec<&str> = doc.entries().iter().map(|(k, _)| k.as_str()).collect();
	assert_eq!(keys, ["z", "a", "m"]);

	let map = doc.into_unique().unwrap();
	let keys: Vec<&str> = map.keys().map(String::as_str).collect();
	assert_eq!(keys, ["z", "a", "m"]);
}

#[test]
fn keeps_every_occurrence_until_unique() {
	let doc: OrderedDocument<String> =
		OrderedDocument::parse(r#"{ "a": "1", "b": "2", "a": "3" }"#).unwrap();
	assert_eq!(doc.len(), 3);

	match doc.into_unique() {
		Err(DocumentError::DuplicateKey(key)) => assert_eq!(key, "a"),
		other => panic!("expected duplicate key error, got {other:?}"),
	}
}

#[test]
fn without_key_drops_every_occurrence() {
	let doc: OrderedDocument<String> =
		OrderedDocument::parse(r#"{ "meta": "1", "a": "2", "meta": "3" }"#).unwrap();
	let map = doc.without_key("meta").into_unique().unwrap();
	let keys: Vec<&str> = map.keys().map(String::as_str).collect();
	assert_eq!(keys, ["a"]);
}

#[test]
fn non_object_top_level_is_empty() {
	let doc: OrderedDocument<String> = OrderedDocument::parse(r#"["a", "b"]"#).unwrap();
	assert!(doc.is_empty());
	let doc: OrderedDocument<String> = OrderedDocument::parse("42").unwrap();
	assert!(doc.is_empty());
}

#[test]
fn malformed_input_is_a_parse_error() {
	let result: Result<OrderedDocument<String>> = OrderedDocument::parse(r#"{ "a": "#);
	assert!(matches!(result, Err(DocumentError::Parse(_))));
}

#[test]
fn missing_file_is_an_io_error() {
	let dir = tempfile::tempdir().unwrap();
	let result: Result<OrderedDocument<String>> = OrderedDocument::read(dir.path().join("missing.json"));
	assert!(matches!(result, Err(DocumentError::Io { .. })));
}
