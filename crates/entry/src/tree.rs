//! The authoritative naming tree.
//!
//! A [`MappingTree`] maps obfuscated entries to officially proposed names.
//! Roots are top-level classes; a class node's children are its fields,
//! methods and nested classes. The on-disk format is owned by the host, so
//! reading goes through [`MappingReader`]; [`JsonMappingReader`] reads the
//! JSON layout below.
//!
//! ```json
//! [
//!   {
//!     "obf": "c",
//!     "name": "a/C",
//!     "fields": [{ "obf": "a", "desc": "Lc$a;", "name": "hatsuneMiku" }],
//!     "methods": [{ "obf": "a", "desc": "(Ld;)V", "name": "meow" }],
//!     "classes": [{ "obf": "c$a", "name": "a/C$Inner" }]
//!   }
//! ]
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::entry::{ClassEntry, Entry, FieldEntry, MethodEntry};
use crate::error::{DocumentError, Result};

#[cfg(test)]
mod tests;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MappingNode {
	entry: Entry,
	target_name: Option<String>,
	children: Vec<MappingNode>,
}

impl MappingNode {
	pub fn new(entry: impl Into<Entry>, target_name: Option<String>) -> Self {
		Self {
			entry: entry.into(),
			target_name,
			children: Vec::new(),
		}
	}

	pub fn with_child(mut self, child: MappingNode) -> Self {
		self.children.push(child);
		self
	}

	pub fn entry(&self) -> &Entry {
		&self.entry
	}

	pub fn target_name(&self) -> Option<&str> {
		self.target_name.as_deref()
	}

	pub fn child_nodes(&self) -> &[MappingNode] {
		&self.children
	}

	/// Visits this node and all descendants depth-first, parents first.
	pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a MappingNode)) {
		visit(self);
		for child in &self.children {
			child.walk(visit);
		}
	}
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MappingTree {
	roots: Vec<MappingNode>,
}

impl MappingTree {
	pub fn new(roots: Vec<MappingNode>) -> Self {
		Self { roots }
	}

	pub fn root_nodes(&self) -> &[MappingNode] {
		&self.roots
	}

	/// Top-level classes with their nodes, in tree order.
	pub fn classes(&self) -> impl Iterator<Item = (&ClassEntry, &MappingNode)> {
		self.roots
			.iter()
			.filter_map(|node| node.entry.as_class().map(|class| (class, node)))
	}

	/// Finds the node of a top-level or nested class.
	pub fn find_class(&self, class: &ClassEntry) -> Option<&MappingNode> {
		let siblings = match class.outer() {
			Some(outer) => self.find_class(&outer)?.child_nodes(),
			None => self.root_nodes(),
		};
		siblings
			.iter()
			.find(|node| node.entry.as_class() == Some(class))
	}

	/// Visits every node depth-first, roots in order.
	pub fn walk<'a>(&'a self, mut visit: impl FnMut(&'a MappingNode)) {
		for root in &self.roots {
			root.walk(&mut visit);
		}
	}
}

/// Reads an authoritative tree from a file.
pub trait MappingReader {
	fn read(&self, path: &Path) -> Result<MappingTree>;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct JsonMappingReader;

impl JsonMappingReader {
	pub fn parse(input: &str) -> Result<MappingTree> {
		let classes: Vec<RawClass> = serde_json::from_str(input)?;
		Ok(MappingTree::new(
			classes.into_iter().map(RawClass::into_node).collect(),
		))
	}
}

impl MappingReader for JsonMappingReader {
	fn read(&self, path: &Path) -> Result<MappingTree> {
		let content = std::fs::read_to_string(path).map_err(|error| DocumentError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		Self::parse(&content)
	}
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawClass {
	obf: String,
	name: Option<String>,
	#[serde(default)]
	fields: Vec<RawMember>,
	#[serde(default)]
	methods: Vec<RawMember>,
	#[serde(default)]
	classes: Vec<RawClass>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawMember {
	obf: String,
	desc: String,
	name: Option<String>,
}

impl RawClass {
	fn into_node(self) -> MappingNode {
		let class = ClassEntry::new(self.obf);
		let mut node = MappingNode::new(class.clone(), self.name);
		node.children.extend(self.fields.into_iter().map(|field| {
			MappingNode::new(FieldEntry::new(class.clone(), field.obf, field.desc), field.name)
		}));
		node.children.extend(self.methods.into_iter().map(|method| {
			MappingNode::new(MethodEntry::new(class.clone(), method.obf, method.desc), method.name)
		}));
		node.children
			.extend(self.classes.into_iter().map(RawClass::into_node));
		node
	}
}
