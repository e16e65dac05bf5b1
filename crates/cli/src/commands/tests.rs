use std::fs;
use std::path::PathBuf;

use clap::Parser;
use pretty_assertions::assert_eq;

use super::*;
use crate::cli::Cli;

const MAPPINGS: &str = r#"[
	{ "obf": "a", "name": "a/A" },
	{ "obf": "b", "name": "a/b_/B" },
	{ "obf": "c", "name": "C" }
]"#;

struct Workspace {
	dir: tempfile::TempDir,
}

impl Workspace {
	fn new() -> Self {
		let dir = tempfile::tempdir().unwrap();
		fs::write(dir.path().join("mappings.json"), MAPPINGS).unwrap();
		Self { dir }
	}

	fn path(&self, name: &str) -> PathBuf {
		self.dir.path().join(name)
	}

	fn write(&self, name: &str, content: &str) -> PathBuf {
		let path = self.path(name);
		fs::write(&path, content).unwrap();
		path
	}

	fn read(&self, name: &str) -> String {
		fs::read_to_string(self.path(name)).unwrap()
	}
}

#[test]
fn generate_writes_canonical_placements() {
	let ws = Workspace::new();
	generate(&ws.path("mappings.json"), &ws.path("out.json")).unwrap();
	assert_eq!(ws.read("out.json"), "{\n\t\"a\": \"a\",\n\t\"b\": \"a/b_\"\n}\n");
}

#[test]
fn update_rewrites_in_place_by_default() {
	let ws = Workspace::new();
	ws.write("overrides.json", r#"{ "z": "gone", "b": ["x", "y"] }"#);

	let cli = Cli::try_parse_from([
		"namesake",
		"update",
		"-m",
		ws.path("mappings.json").to_str().unwrap(),
		"--overrides",
		ws.path("overrides.json").to_str().unwrap(),
	])
	.unwrap();
	run(cli.command).unwrap();

	assert_eq!(ws.read("overrides.json"), "{\n\t\"b\": \"x/y\"\n}\n");
}

#[test]
fn check_reports_every_violation() {
	let ws = Workspace::new();
	let overrides = ws.write("overrides.json", r#"{ "a": "1a", "b": "a/B-b" }"#);

	let err = check(&ws.path("mappings.json"), &overrides).unwrap_err();
	let message = err.to_string();
	assert!(message.contains("invalid package overrides (3):"), "{message}");
	assert!(message.contains("segment starts with a digit"), "{message}");
	assert!(message.contains("segment contains a hyphen"), "{message}");
	assert!(message.contains("segment contains an uppercase letter"), "{message}");
}

#[test]
fn check_accepts_valid_documents() {
	let ws = Workspace::new();
	let overrides = ws.write("overrides.json", r#"{ "a": "awesome", "stale": "x" }"#);
	check(&ws.path("mappings.json"), &overrides).unwrap();
}

#[test]
fn missing_mappings_name_the_file() {
	let ws = Workspace::new();
	let err = generate(&ws.path("nope.json"), &ws.path("out.json")).unwrap_err();
	assert!(format!("{err:#}").contains("nope.json"));
}

#[test]
fn verbose_is_global() {
	let cli = Cli::try_parse_from([
		"namesake",
		"check",
		"--mappings",
		"m.json",
		"--overrides",
		"o.json",
		"--verbose",
	])
	.unwrap();
	assert!(cli.verbose);
	assert!(matches!(cli.command, Command::Check { .. }));
}
