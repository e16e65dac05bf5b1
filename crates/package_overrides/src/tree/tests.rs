use pretty_assertions::assert_eq;

use super::*;

fn path(path: &str) -> PackagePath {
	PackagePath::parse(path)
}

#[test]
fn ensure_reuses_shared_prefixes() {
	let mut tree = PackageTree::new();
	let ab = tree.ensure(&path("a/b_")).unwrap();
	let a = tree.ensure(&path("a")).unwrap();
	let ba = tree.ensure(&path("b_/a")).unwrap();

	assert_eq!(tree.len(), 4);
	assert_eq!(tree.lookup(&path("a/b_")), Some(ab));
	assert_eq!(tree.path(ab), path("a/b_"));
	assert_eq!(tree.path(ba), path("b_/a"));
	assert_eq!(tree.subtree(a), vec![a, ab]);
	assert_eq!(tree.ensure(&PackagePath::default()), None);
}

#[test]
fn smallest_class_owns() {
	let mut tree = PackageTree::new();
	let a = tree.ensure(&path("a")).unwrap();
	tree.claim(a, &ClassEntry::new("m"));
	tree.claim(a, &ClassEntry::new("c"));
	tree.claim(a, &ClassEntry::new("x"));
	assert_eq!(tree.owner(a), Some(&ClassEntry::new("c")));
}

#[test]
fn move_carries_the_subtree() {
	let mut tree = PackageTree::new();
	let a = tree.ensure(&path("a")).unwrap();
	let ab = tree.ensure(&path("a/b_")).unwrap();
	let ba = tree.ensure(&path("b_/a")).unwrap();

	assert_eq!(tree.move_to(a, &path("awesome")), Ok(true));
	assert_eq!(tree.path(ab), path("awesome/b_"));
	assert_eq!(tree.path(ba), path("b_/a"));
	assert_eq!(tree.lookup(&path("a")), None);

	assert_eq!(tree.move_to(a, &path("x/y")), Ok(true));
	assert_eq!(tree.path(ab), path("x/y/b_"));
	assert_eq!(tree.move_to(a, &path("x/y")), Ok(false));
}

#[test]
fn move_refusals() {
	let mut tree = PackageTree::new();
	let a = tree.ensure(&path("a")).unwrap();
	tree.ensure(&path("a/b_")).unwrap();
	tree.ensure(&path("c_")).unwrap();

	assert_eq!(
		tree.move_to(a, &path("a/b_/z")),
		Err(MoveRefused::Cycle(path("a/b_/z")))
	);
	assert_eq!(
		tree.move_to(a, &path("c_")),
		Err(MoveRefused::Occupied(path("c_")))
	);
	assert_eq!(
		tree.move_to(a, &PackagePath::default()),
		Err(MoveRefused::Empty)
	);
	assert_eq!(tree.path(a), path("a"));
}
