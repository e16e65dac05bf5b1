//! The package hierarchy built from override entries.
//!
//! Nodes live in an arena and link to their parent, so a rename can reach a
//! package's subtree without scanning every placement.

use namesake_entry::ClassEntry;
use thiserror::Error;

use crate::path::PackagePath;

#[cfg(test)]
mod tests;

/// Index of a node in a [`PackageTree`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PackageId(usize);

#[derive(Clone, Debug)]
struct PackageNode {
	segment: String,
	parent: Option<PackageId>,
	children: Vec<PackageId>,
	classes: Vec<ClassEntry>,
	owner: Option<ClassEntry>,
}

/// Why a package could not be moved.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum MoveRefused {
	#[error("destination is empty")]
	Empty,

	#[error("destination {0} is inside the moved package")]
	Cycle(PackagePath),

	#[error("destination {0} already exists")]
	Occupied(PackagePath),
}

#[derive(Clone, Debug, Default)]
pub struct PackageTree {
	nodes: Vec<PackageNode>,
	roots: Vec<PackageId>,
}

impl PackageTree {
	pub fn new() -> Self {
		Self::default()
	}

	fn node(&self, id: PackageId) -> &PackageNode {
		&self.nodes[id.0]
	}

	fn node_mut(&mut self, id: PackageId) -> &mut PackageNode {
		&mut self.nodes[id.0]
	}

	fn siblings(&self, parent: Option<PackageId>) -> &[PackageId] {
		match parent {
			Some(parent) => &self.node(parent).children,
			None => &self.roots,
		}
	}

	fn child(&self, parent: Option<PackageId>, segment: &str) -> Option<PackageId> {
		self.siblings(parent)
			.iter()
			.copied()
			.find(|&id| self.node(id).segment == segment)
	}

	fn link(&mut self, parent: Option<PackageId>, id: PackageId) {
		self.node_mut(id).parent = parent;
		match parent {
			Some(parent) => self.node_mut(parent).children.push(id),
			None => self.roots.push(id),
		}
	}

	fn unlink(&mut self, id: PackageId) {
		let parent = self.node(id).parent;
		let siblings = match parent {
			Some(parent) => &mut self.nodes[parent.0].children,
			None => &mut self.roots,
		};
		siblings.retain(|&sibling| sibling != id);
		self.node_mut(id).parent = None;
	}

	/// Returns the node for `path`, creating missing nodes along the way.
	///
	/// An empty path has no node.
	pub fn ensure(&mut self, path: &PackagePath) -> Option<PackageId> {
		let mut current = None;
		for segment in path.segments() {
			current = Some(match self.child(current, segment) {
				Some(id) => id,
				None => {
					let id = PackageId(self.nodes.len());
					self.nodes.push(PackageNode {
						segment: segment.clone(),
						parent: None,
						children: Vec::new(),
						classes: Vec::new(),
						owner: None,
					});
					self.link(current, id);
					id
				}
			});
		}
		current
	}

	pub fn lookup(&self, path: &PackagePath) -> Option<PackageId> {
		let mut current = None;
		for segment in path.segments() {
			current = Some(self.child(current, segment)?);
		}
		current
	}

	/// The full path of a node, root first.
	pub fn path(&self, id: PackageId) -> PackagePath {
		let mut segments = Vec::new();
		let mut current = Some(id);
		while let Some(id) = current {
			let node = self.node(id);
			segments.push(node.segment.clone());
			current = node.parent;
		}
		segments.reverse();
		PackagePath::from_segments(segments)
	}

	pub fn attach_class(&mut self, id: PackageId, class: ClassEntry) {
		self.node_mut(id).classes.push(class);
	}

	/// Classes placed directly in the package.
	pub fn classes(&self, id: PackageId) -> &[ClassEntry] {
		&self.node(id).classes
	}

	pub fn owner(&self, id: PackageId) -> Option<&ClassEntry> {
		self.node(id).owner.as_ref()
	}

	/// Makes `class` the owner unless a smaller class already owns the node.
	pub fn claim(&mut self, id: PackageId, class: &ClassEntry) {
		let node = self.node_mut(id);
		if node.owner.as_ref().is_none_or(|owner| class < owner) {
			node.owner = Some(class.clone());
		}
	}

	/// Moves a node, with its whole subtree, to `destination`.
	///
	/// Returns `Ok(false)` when the node already lives there. Missing parent
	/// packages of `destination` are created.
	pub fn move_to(&mut self, id: PackageId, destination: &PackagePath) -> Result<bool, MoveRefused> {
		let Some(segment) = destination.last() else {
			return Err(MoveRefused::Empty);
		};

		match self.lookup(destination) {
			Some(existing) if existing == id => return Ok(false),
			Some(_) => return Err(MoveRefused::Occupied(destination.clone())),
			None => {}
		}

		let parent_path = destination.parent();
		if let Some(parent_path) = &parent_path {
			let mut current = None;
			for segment in parent_path.segments() {
				let Some(next) = self.child(current, segment) else {
					break;
				};
				if next == id {
					return Err(MoveRefused::Cycle(destination.clone()));
				}
				current = Some(next);
			}
		}

		let segment = segment.to_string();
		let parent = parent_path.and_then(|path| self.ensure(&path));
		self.unlink(id);
		self.node_mut(id).segment = segment;
		self.link(parent, id);
		Ok(true)
	}

	/// The node and all of its descendants, parents first.
	pub fn subtree(&self, id: PackageId) -> Vec<PackageId> {
		let mut out = Vec::new();
		let mut stack = vec![id];
		while let Some(id) = stack.pop() {
			out.push(id);
			stack.extend(self.node(id).children.iter().rev().copied());
		}
		out
	}

	pub fn len(&self) -> usize {
		self.nodes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.nodes.is_empty()
	}
}
